use log::debug;

use super::core::{Block, decrypt_block, encrypt_block};
use super::ecb::{ecb_core_parallel, ecb_core_serial};
use super::error::{Error, Result};
use super::key::{Key, KeySchedule};

/// Provides block and multi-block encryption and decryption for a fixed key and round count.
/// Instantiated with a [Key] and a number of rounds, which are expanded into a [KeySchedule]
/// and stored in the instance.
///
/// Any round count is accepted as long as the schedule can hold the key, so a 128-bit key
/// may run 4 rounds or 40. Only the standard pairings (see [Cipher::with_standard_rounds])
/// produce FIPS-197 AES.
///
/// ## Examples
/// ```
/// # fn main() -> aes_rounds::Result<()> {
/// use aes_rounds::{Cipher, Key};
///
/// let key = Key::rand_key_128()?;
/// let cipher = Cipher::new(&key, 6)?;
///
/// let plaintext = [0x42u8; 32];
/// let ciphertext = cipher.encrypt_ecb(&plaintext)?;
/// assert_eq!(cipher.decrypt_ecb(&ciphertext)?, plaintext);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Cipher {
    schedule: KeySchedule,
}

impl Cipher {
    /// Expands `key` for `rounds` rounds and stores the schedule in the returned instance.
    pub fn new(key: &Key, rounds: usize) -> Result<Self> {
        debug!("building cipher: {}-word key, {rounds} rounds", key.words());
        Ok(Self {
            schedule: KeySchedule::expand(key, rounds)?,
        })
    }

    /// Uses the FIPS-197 round count for the key's size (10, 12, or 14).
    /// Keys that are not 16, 24, or 32 bytes return an InvalidKeyLength error.
    pub fn with_standard_rounds(key: &Key) -> Result<Self> {
        let size = key.key_size().ok_or(Error::InvalidKeyLength {
            len: key.as_bytes().len(),
        })?;
        Self::new(key, size.rounds())
    }

    pub fn rounds(&self) -> usize {
        self.schedule.rounds()
    }

    /// Getter for the internal key schedule.
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }

    /// Encrypts a single block.
    pub fn encrypt_block(&self, plaintext: &Block) -> Block {
        encrypt_block(plaintext, self.schedule.round_keys())
    }

    /// Decrypts a single block.
    pub fn decrypt_block(&self, ciphertext: &Block) -> Block {
        decrypt_block(ciphertext, self.schedule.round_keys())
    }

    /// **Electronic codebook** encryption.
    ///
    /// Encrypts each 16-byte block entirely independently and chains them together.
    /// Input must be a positive multiple of 16 bytes; nothing is padded.
    /// **Vulnerable to pattern emergence in the ciphertext.**
    pub fn encrypt_ecb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        ecb_core_serial(plaintext, self.schedule.round_keys(), encrypt_block)
    }

    /// **Electronic codebook** decryption.
    pub fn decrypt_ecb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ecb_core_serial(ciphertext, self.schedule.round_keys(), decrypt_block)
    }

    /// [encrypt_ecb](Cipher::encrypt_ecb) across the rayon thread pool.
    pub fn encrypt_ecb_parallel(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        ecb_core_parallel(plaintext, self.schedule.round_keys(), encrypt_block)
    }

    /// [decrypt_ecb](Cipher::decrypt_ecb) across the rayon thread pool.
    pub fn decrypt_ecb_parallel(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        ecb_core_parallel(ciphertext, self.schedule.round_keys(), decrypt_block)
    }
}
