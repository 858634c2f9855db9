//! Defines the [`Key`] struct, which holds a key of any whole number of 4-byte words,
//! and the [`KeySchedule`] expanded from it for a chosen number of rounds.
//! Keys can be randomly generated or constructed from an existing byte slice.

use log::debug;
use rand::TryRngCore;
use rand::rngs::OsRng;

use super::core::constants::rcon;
use super::core::{Word, substitute};
use super::error::{Error, Result};

/// The three key sizes FIPS-197 standardises, with their usual round counts.
///
/// The engine itself accepts any round count for any key; these are only
/// defaults for callers that want standard AES.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    pub fn from_key_len(len: usize) -> Option<Self> {
        match len {
            16 => Some(Self::Bits128),
            24 => Some(Self::Bits192),
            32 => Some(Self::Bits256),
            _ => None,
        }
    }

    /// Key length in bytes.
    pub fn bytes(self) -> usize {
        match self {
            Self::Bits128 => 16,
            Self::Bits192 => 24,
            Self::Bits256 => 32,
        }
    }

    /// Standard round count: 10, 12, or 14.
    pub fn rounds(self) -> usize {
        self.bytes() / 4 + 6
    }
}

/// Contains a key whose length is a positive multiple of 4 bytes. Can be instantiated
/// with a random key, or built from a slice of bytes.
/// A `Key` is required to build a [KeySchedule] or a [Cipher](crate::Cipher).
///
/// ## Examples
/// ```
/// # fn main() -> aes_rounds::Result<()> {
/// use aes_rounds::{Key, KeySize};
///
/// // Instantiate random keys:
/// let rk_128 = Key::rand_key_128()?;
/// let rk_160 = Key::random(5)?;
/// assert_eq!(rk_128.key_size(), Some(KeySize::Bits128));
/// assert_eq!(rk_160.key_size(), None);
///
/// // Instantiate keys from slice:
/// let key_bytes: [u8; 20] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA];
/// let my_key = Key::try_from_slice(&key_bytes)?;
/// assert_eq!(my_key.as_bytes(), &key_bytes);
/// assert_eq!(my_key.words(), 5);
///
/// // Lengths that are zero or not a multiple of 4 bytes are rejected:
/// assert!(Key::try_from_slice(&key_bytes[..18]).is_err());
/// assert!(Key::try_from_slice(&[]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Key {
    bytes: Vec<u8>,
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key_128() -> Result<Self> {
        Self::random(4)
    }

    /// Generate a random 192-bit key. Returns Error if OsRng fails.
    pub fn rand_key_192() -> Result<Self> {
        Self::random(6)
    }

    /// Generate a random 256-bit key. Returns Error if OsRng fails.
    pub fn rand_key_256() -> Result<Self> {
        Self::random(8)
    }

    /// Generate a random key of `words` 4-byte words.
    pub fn random(words: usize) -> Result<Self> {
        let len = words
            .checked_mul(4)
            .filter(|&len| len > 0)
            .ok_or(Error::InvalidKeyLength {
                len: words.saturating_mul(4),
            })?;
        let mut k = vec![0u8; len];
        OsRng.try_fill_bytes(&mut k)?;
        Ok(Self { bytes: k })
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the slice is empty or its length is not a multiple of 4.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() || bytes.len() % 4 != 0 {
            return Err(Error::InvalidKeyLength { len: bytes.len() });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Returns a reference to the internal key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of 4-byte words in the key (Nk).
    pub fn words(&self) -> usize {
        self.bytes.len() / 4
    }

    /// The standard size this key matches, if any.
    pub fn key_size(&self) -> Option<KeySize> {
        KeySize::from_key_len(self.bytes.len())
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::try_from_slice(bytes)
    }
}

/// Round keys expanded from a [Key] for a fixed number of rounds.
///
/// Holds `rounds + 1` round keys of four words each, i.e. `4 * (rounds + 1)` words.
/// The first `Nk` words are the key itself. Read-only once built, so one schedule
/// can be shared by any number of concurrent block operations.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct KeySchedule {
    round_keys: Vec<[Word; 4]>,
}

impl KeySchedule {
    /// Expands `key` for `rounds` rounds.
    ///
    /// Fails with [InvalidRounds](crate::Error::InvalidRounds) if `rounds` is zero or
    /// the schedule (`4 * (rounds + 1)` words) would be too short to hold the key.
    pub fn expand(key: &Key, rounds: usize) -> Result<Self> {
        let w = expand_key(key, rounds)?;
        let round_keys = w
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Ok(Self { round_keys })
    }

    pub fn rounds(&self) -> usize {
        self.round_keys.len() - 1
    }

    /// All round keys, initial key first.
    pub fn round_keys(&self) -> &[[Word; 4]] {
        &self.round_keys
    }

    pub fn round_key(&self, round: usize) -> Option<&[Word; 4]> {
        self.round_keys.get(round)
    }

    /// The flat word sequence `w[0..4 * (rounds + 1)]`.
    pub fn words(&self) -> &[Word] {
        self.round_keys.as_flattened()
    }
}

/// Key schedule over words. Returns `4 * (rounds + 1)` words.
fn expand_key(key: &Key, rounds: usize) -> Result<Vec<Word>> {
    // Variable names match FIPS-197, NIST specification: https://doi.org/10.6028/NIST.FIPS.197-upd1
    // Nk   The number of 32-bit words comprising the key
    // w    The result of the key schedule, an array of words that form round keys
    // Nw   The total number of words generated by the key schedule (including initial key)
    let nk = key.words();
    let nw = rounds
        .checked_add(1)
        .and_then(|n| n.checked_mul(4))
        .filter(|&nw| rounds > 0 && nw >= nk)
        .ok_or(Error::InvalidRounds {
            rounds,
            key_words: nk,
        })?;

    // first nk words of w are the key itself
    let mut w: Vec<Word> = Vec::with_capacity(nw);
    for chunk in key.as_bytes().chunks_exact(4) {
        w.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }

    for i in nk..nw {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            // rot_word, sub_word, then rcon on the first byte
            temp = [
                substitute(temp[1]) ^ rcon(i / nk),
                substitute(temp[2]),
                substitute(temp[3]),
                substitute(temp[0]),
            ];
        } else if nk > 6 && i % nk == 4 {
            // additional sub_word for keys longer than six words
            temp = temp.map(substitute);
        }

        // w[i] = temp ⊕ w[i − Nk]
        let prev = w[i - nk];
        w.push([
            temp[0] ^ prev[0],
            temp[1] ^ prev[1],
            temp[2] ^ prev[2],
            temp[3] ^ prev[3],
        ]);
    }

    debug!("expanded {nk}-word key into {nw} words for {rounds} rounds");
    Ok(w)
}
