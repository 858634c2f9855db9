mod cipher;
mod core;
mod ecb;
mod error;
mod interface;
mod key;
mod text;

pub use cipher::Cipher;
pub use self::core::{Block, State, Word, dbl, inverse_substitute, substitute};
pub use error::{Error, Result};
pub use interface::{decrypt_block, decrypt_ecb, encrypt_block, encrypt_ecb};
pub use key::{Key, KeySchedule, KeySize};
pub use text::{decrypt_hex, encrypt_hex, format_matrix, parse_hex, parse_hex_blocks};
