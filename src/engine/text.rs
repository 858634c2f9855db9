//! Hexadecimal adapter: plaintext, ciphertext and keys as hex strings.
//!
//! Data must be a multiple of 32 hex characters (16 bytes); it is split into
//! blocks, each block is processed independently, and the hex results are
//! concatenated. Whitespace inside the text is ignored.

use super::cipher::Cipher;
use super::core::{Block, State};
use super::error::{Error, Result};
use super::key::Key;

/// Decodes hex text after stripping whitespace.
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(hex::decode(digits)?)
}

/// Decodes hex text that must hold a positive whole number of 16-byte blocks.
pub fn parse_hex_blocks(text: &str) -> Result<Vec<u8>> {
    let digits = text.chars().filter(|c| !c.is_whitespace()).count();
    if digits == 0 || digits % 32 != 0 {
        return Err(Error::InvalidInputLength {
            len: digits,
            context: "hex text must be a positive multiple of 32 characters",
        });
    }
    parse_hex(text)
}

pub fn encrypt_hex(plaintext: &str, key: &str, rounds: usize) -> Result<String> {
    let (cipher, data) = prepare(plaintext, key, rounds)?;
    Ok(hex::encode(cipher.encrypt_ecb(&data)?))
}

pub fn decrypt_hex(ciphertext: &str, key: &str, rounds: usize) -> Result<String> {
    let (cipher, data) = prepare(ciphertext, key, rounds)?;
    Ok(hex::encode(cipher.decrypt_ecb(&data)?))
}

// validates everything before any block is touched
fn prepare(data: &str, key: &str, rounds: usize) -> Result<(Cipher, Vec<u8>)> {
    let data = parse_hex_blocks(data)?;
    let key = Key::try_from_slice(&parse_hex(key)?)?;
    let cipher = Cipher::new(&key, rounds)?;
    Ok((cipher, data))
}

/// Renders a block as a 4x4 hex matrix. Column `c` holds bytes `4c..4c+4`,
/// so each column is one word of the block.
pub fn format_matrix(block: &Block) -> String {
    let mut out = String::with_capacity(48);
    for (i, row) in State::from_block(block).transpose().rows().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line: Vec<String> = row.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&line.join(" "));
    }
    out
}
