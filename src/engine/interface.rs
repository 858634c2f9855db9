//! One-shot functions for callers that hold raw key bytes rather than a [Cipher].
//! Each call validates its inputs, expands a fresh key schedule, and discards it.

use super::cipher::Cipher;
use super::core::Block;
use super::error::Result;
use super::key::Key;

pub fn encrypt_block(plaintext: &Block, key: &[u8], rounds: usize) -> Result<Block> {
    Ok(Cipher::new(&Key::try_from_slice(key)?, rounds)?.encrypt_block(plaintext))
}

pub fn decrypt_block(ciphertext: &Block, key: &[u8], rounds: usize) -> Result<Block> {
    Ok(Cipher::new(&Key::try_from_slice(key)?, rounds)?.decrypt_block(ciphertext))
}

pub fn encrypt_ecb(plaintext: &[u8], key: &[u8], rounds: usize) -> Result<Vec<u8>> {
    Cipher::new(&Key::try_from_slice(key)?, rounds)?.encrypt_ecb(plaintext)
}

pub fn decrypt_ecb(ciphertext: &[u8], key: &[u8], rounds: usize) -> Result<Vec<u8>> {
    Cipher::new(&Key::try_from_slice(key)?, rounds)?.decrypt_ecb(ciphertext)
}
