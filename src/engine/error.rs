use rand::rand_core;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type. Every variant is raised while validating inputs, before any block is processed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Key is empty or its length is not a multiple of 4 bytes.
    #[error("invalid key length: {len} bytes (expected a positive multiple of 4)")]
    InvalidKeyLength { len: usize },

    /// Round count is zero, or too small for the schedule to hold the key (`4 * (rounds + 1) < Nk`).
    #[error("invalid round count: {rounds} rounds cannot carry a {key_words}-word key")]
    InvalidRounds { rounds: usize, key_words: usize },

    /// Input to a multi-block operation is empty or not a whole number of 16-byte blocks.
    #[error("invalid input length: {len} ({context})")]
    InvalidInputLength { len: usize, context: &'static str },

    /// Text given to the hex adapter is not valid hexadecimal.
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    /// OS RNG failed during random key generation.
    #[error("OS RNG failed in random key generation")]
    Rng(#[from] rand_core::OsError),
}
