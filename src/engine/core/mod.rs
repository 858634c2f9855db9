pub mod constants;
mod decryption;
mod encryption;
pub mod field;
pub mod state;

pub use constants::{inverse_substitute, substitute};
pub use decryption::decrypt_block;
pub use encryption::encrypt_block;
pub use field::dbl;
pub use state::{Block, State, Word};
