//! An AES-family block cipher engine whose round count is a parameter.
//!
//! With a 16, 24, or 32-byte key and 10, 12, or 14 rounds respectively, the engine is
//! FIPS-197 AES. Any other pairing (any key of whole 4-byte words, any round count the
//! schedule can carry) is a non-standard Rijndael variant, useful for study but not AES.
//!
//! Only the single-block permutation, its key schedule, and independent multi-block
//! (ECB-style) processing are provided. Nothing here is constant-time.

mod engine;

pub use engine::{
    Block, Cipher, Error, Key, KeySchedule, KeySize, Result, State, Word, dbl, decrypt_block,
    decrypt_ecb, decrypt_hex, encrypt_block, encrypt_ecb, encrypt_hex, format_matrix,
    inverse_substitute, parse_hex, parse_hex_blocks, substitute,
};
