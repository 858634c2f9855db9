use super::state::{Block, State, Word};

/// Forward cipher over one block. `round_keys` holds `rounds + 1` round keys,
/// as produced by [`KeySchedule`](crate::KeySchedule).
///
/// Rounds `1..rounds` substitute, shift, mix and add the round key; the final
/// round skips the column mix.
///
/// # Panics
/// If `round_keys` holds fewer than two round keys.
#[inline(always)]
pub fn encrypt_block(plaintext: &Block, round_keys: &[[Word; 4]]) -> Block {
    let rounds = round_keys.len() - 1;
    let mut state = State::from_block(plaintext).add_round_key(&round_keys[0]);

    for round_key in &round_keys[1..rounds] {
        state = state
            .sub_bytes()
            .transpose()
            .shift_rows_left()
            .transpose()
            .mix_columns()
            .add_round_key(round_key);
    }

    state
        .sub_bytes()
        .transpose()
        .shift_rows_left()
        .transpose()
        .add_round_key(&round_keys[rounds])
        .to_block()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::error::Result;
    use crate::engine::key::{Key, KeySchedule};

    const PLAINTEXT: Block = [
        0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, //
        0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a, //
    ];

    #[test]
    fn test_encrypt_block_128() -> Result<()> {
        // test case from:
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core128.pdf
        let key = Key::try_from_slice(&[
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, //
            0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c, //
        ])?;
        let expected: Block = [
            0x3a, 0xd7, 0x7b, 0xb4, 0x0d, 0x7a, 0x36, 0x60, //
            0xa8, 0x9e, 0xca, 0xf3, 0x24, 0x66, 0xef, 0x97, //
        ];

        let schedule = KeySchedule::expand(&key, 10)?;
        let actual = encrypt_block(&PLAINTEXT, schedule.round_keys());

        assert_eq!(actual, expected, "incorrect AES-128 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_192() -> Result<()> {
        // test case from:
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core192.pdf
        let key = Key::try_from_slice(&[
            0x8e, 0x73, 0xb0, 0xf7, 0xda, 0x0e, 0x64, 0x52, //
            0xc8, 0x10, 0xf3, 0x2b, 0x80, 0x90, 0x79, 0xe5, //
            0x62, 0xf8, 0xea, 0xd2, 0x52, 0x2c, 0x6b, 0x7b, //
        ])?;
        let expected: Block = [
            0xbd, 0x33, 0x4f, 0x1d, 0x6e, 0x45, 0xf2, 0x5f, //
            0xf7, 0x12, 0xa2, 0x14, 0x57, 0x1f, 0xa5, 0xcc, //
        ];

        let schedule = KeySchedule::expand(&key, 12)?;
        let actual = encrypt_block(&PLAINTEXT, schedule.round_keys());

        assert_eq!(actual, expected, "incorrect AES-192 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_256() -> Result<()> {
        // test case from:
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core256.pdf
        let key = Key::try_from_slice(&[
            0x60, 0x3d, 0xeb, 0x10, 0x15, 0xca, 0x71, 0xbe, //
            0x2b, 0x73, 0xae, 0xf0, 0x85, 0x7d, 0x77, 0x81, //
            0x1f, 0x35, 0x2c, 0x07, 0x3b, 0x61, 0x08, 0xd7, //
            0x2d, 0x98, 0x10, 0xa3, 0x09, 0x14, 0xdf, 0xf4, //
        ])?;
        let expected: Block = [
            0xf3, 0xee, 0xd1, 0xbd, 0xb5, 0xd2, 0xa0, 0x3c, //
            0x06, 0x4b, 0x5a, 0x7e, 0x3d, 0xb1, 0x81, 0xf8, //
        ];

        let schedule = KeySchedule::expand(&key, 14)?;
        let actual = encrypt_block(&PLAINTEXT, schedule.round_keys());

        assert_eq!(actual, expected, "incorrect AES-256 encryption of block");
        Ok(())
    }

    #[test]
    fn test_encrypt_block_single_round() -> Result<()> {
        // one round: AddRoundKey(k0), SubBytes, ShiftRows, AddRoundKey(k1)
        let key = Key::try_from_slice(&[0u8; 16])?;
        let schedule = KeySchedule::expand(&key, 1)?;
        let actual = encrypt_block(&[0u8; 16], schedule.round_keys());

        let k1 = schedule.round_keys()[1];
        let mut expected = [0x63u8; 16];
        for (i, byte) in expected.iter_mut().enumerate() {
            *byte ^= k1[i / 4][i % 4];
        }

        assert_eq!(actual, expected);
        Ok(())
    }
}
