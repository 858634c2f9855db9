// known-answer tests: FIPS-197 Appendix C and NIST SP 800-38A F.1
// https://doi.org/10.6028/NIST.FIPS.197-upd1
// https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38a.pdf

use aes_rounds::{Cipher, Key, Result, decrypt_block, encrypt_block, encrypt_ecb};
use hex_literal::hex;

const FIPS_PLAINTEXT: [u8; 16] = hex!("00112233445566778899aabbccddeeff");

struct Vector {
    key: &'static [u8],
    rounds: usize,
    ciphertext: [u8; 16],
}

const FIPS_VECTORS: [Vector; 3] = [
    // C.1 AES-128
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f"),
        rounds: 10,
        ciphertext: hex!("69c4e0d86a7b0430d8cdb78070b4c55a"),
    },
    // C.2 AES-192
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f1011121314151617"),
        rounds: 12,
        ciphertext: hex!("dda97ca4864cdfe06eaf70a0ec0d7191"),
    },
    // C.3 AES-256
    Vector {
        key: &hex!("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"),
        rounds: 14,
        ciphertext: hex!("8ea2b7ca516745bfeafc49904b496089"),
    },
];

#[test]
fn fips_197_encrypt() -> Result<()> {
    for v in &FIPS_VECTORS {
        let actual = encrypt_block(&FIPS_PLAINTEXT, v.key, v.rounds)?;
        assert_eq!(actual, v.ciphertext, "encryption mismatch for {}-byte key", v.key.len());
    }
    Ok(())
}

#[test]
fn fips_197_decrypt() -> Result<()> {
    for v in &FIPS_VECTORS {
        let actual = decrypt_block(&v.ciphertext, v.key, v.rounds)?;
        assert_eq!(actual, FIPS_PLAINTEXT, "decryption mismatch for {}-byte key", v.key.len());
    }
    Ok(())
}

#[test]
fn fips_197_standard_rounds() -> Result<()> {
    for v in &FIPS_VECTORS {
        let cipher = Cipher::with_standard_rounds(&Key::try_from_slice(v.key)?)?;
        assert_eq!(cipher.rounds(), v.rounds);
        assert_eq!(cipher.encrypt_block(&FIPS_PLAINTEXT), v.ciphertext);
    }
    Ok(())
}

const SP800_38A_PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

#[test]
fn sp800_38a_ecb_192() -> Result<()> {
    let key = hex!("8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b");
    let expected = hex!(
        "bd334f1d6e45f25ff712a214571fa5cc"
        "974104846d0ad3ad7734ecb3ecee4eef"
        "ef7afd2270e2e60adce0ba2face6444e"
        "9a4b41ba738d6c72fb16691603c18e0e"
    );

    let cipher = Cipher::new(&Key::try_from_slice(&key)?, 12)?;
    assert_eq!(cipher.encrypt_ecb(&SP800_38A_PLAINTEXT)?, expected);
    assert_eq!(cipher.decrypt_ecb(&expected)?, SP800_38A_PLAINTEXT);
    Ok(())
}

#[test]
fn sp800_38a_ecb_256() -> Result<()> {
    let key = hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4");
    let expected = hex!(
        "f3eed1bdb5d2a03c064b5a7e3db181f8"
        "591ccb10d410ed26dc5ba74a31362870"
        "b6ed21b99ca6f4f9f153e7b1beafed1d"
        "23304b7a39f9f3ff067d8d8f9e24ecc7"
    );

    assert_eq!(encrypt_ecb(&SP800_38A_PLAINTEXT, &key, 14)?, expected);

    let cipher = Cipher::new(&Key::try_from_slice(&key)?, 14)?;
    assert_eq!(cipher.decrypt_ecb_parallel(&expected)?, SP800_38A_PLAINTEXT);
    Ok(())
}

#[test]
fn round_count_changes_output() -> Result<()> {
    let v = &FIPS_VECTORS[0];
    let nine = encrypt_block(&FIPS_PLAINTEXT, v.key, 9)?;
    let eleven = encrypt_block(&FIPS_PLAINTEXT, v.key, 11)?;
    assert_ne!(nine, v.ciphertext);
    assert_ne!(eleven, v.ciphertext);
    assert_eq!(decrypt_block(&eleven, v.key, 11)?, FIPS_PLAINTEXT);
    Ok(())
}
