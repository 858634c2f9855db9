//! The 4x4 byte state and the transforms applied to it each round.
//!
//! A [`State`] holds four rows of four bytes. [`State::from_block`] places
//! bytes `4i..4i+4` of the block in row `i`, so a freshly loaded state is in
//! *word orientation*: each row is one 32-bit word, which is one column of the
//! cipher state as FIPS-197 draws it. [`State::transpose`] switches to *row
//! orientation* and back. Round-key addition and column mixing expect word
//! orientation; row shifting expects row orientation. The pipelines in
//! `encryption` and `decryption` place every transpose explicitly.
//!
//! Every transform takes the state by value and returns a new one.

use super::constants::{inverse_substitute, substitute};
use super::field::dbl;

/// A 16-byte cipher block.
pub type Block = [u8; 16];

/// A 4-byte key-schedule word.
pub type Word = [u8; 4];

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct State([[u8; 4]; 4]);

impl State {
    /// Loads a block in word orientation.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (row, chunk) in rows.iter_mut().zip(block.chunks_exact(4)) {
            row.copy_from_slice(chunk);
        }
        Self(rows)
    }

    /// Flattens the state row by row. Inverse of [`State::from_block`].
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; 16];
        for (chunk, row) in block.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(row);
        }
        block
    }

    pub fn from_rows(rows: [[u8; 4]; 4]) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[[u8; 4]; 4] {
        &self.0
    }

    pub fn transpose(self) -> Self {
        let s = self.0;
        let mut out = [[0u8; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, byte) in row.iter_mut().enumerate() {
                *byte = s[j][i];
            }
        }
        Self(out)
    }

    pub fn sub_bytes(self) -> Self {
        self.map_bytes(substitute)
    }

    pub fn inv_sub_bytes(self) -> Self {
        self.map_bytes(inverse_substitute)
    }

    /// Rotates row `r` left by `r` positions. Row orientation.
    pub fn shift_rows_left(self) -> Self {
        let mut out = self.0;
        for (r, row) in out.iter_mut().enumerate() {
            row.rotate_left(r);
        }
        Self(out)
    }

    /// Rotates row `r` right by `r` positions. Row orientation.
    pub fn shift_rows_right(self) -> Self {
        let mut out = self.0;
        for (r, row) in out.iter_mut().enumerate() {
            row.rotate_right(r);
        }
        Self(out)
    }

    /// Multiplies every word by the MDS matrix using only doubling and XOR.
    /// Word orientation.
    pub fn mix_columns(self) -> Self {
        let mut out = self.0;
        for word in out.iter_mut() {
            let [c0, c1, c2, c3] = *word;
            let t = c0 ^ c1 ^ c2 ^ c3;
            *word = [
                c0 ^ t ^ dbl(c0 ^ c1), /* 2c0 + 3c1 + c2 + c3 */
                c1 ^ t ^ dbl(c1 ^ c2), /* 2c1 + 3c2 + c3 + c0 */
                c2 ^ t ^ dbl(c2 ^ c3), /* 2c2 + 3c3 + c0 + c1 */
                c3 ^ t ^ dbl(c3 ^ c0), /* 2c3 + 3c0 + c1 + c2 */
            ];
        }
        Self(out)
    }

    /// Inverse of [`State::mix_columns`]. Each word is first multiplied by
    /// {04}x^2 + {05} via paired doublings, then passed through the forward
    /// mix; the product of the two circulant matrices is the inverse MDS
    /// matrix. Word orientation.
    pub fn inv_mix_columns(self) -> Self {
        let mut pre = self.0;
        for word in pre.iter_mut() {
            let x = dbl(word[0] ^ word[2]);
            let y = dbl(word[1] ^ word[3]);
            word[0] ^= dbl(x);
            word[1] ^= dbl(y);
            word[2] ^= dbl(x);
            word[3] ^= dbl(y);
        }
        Self(pre).mix_columns()
    }

    /// XORs four consecutive schedule words into the state. Word orientation.
    pub fn add_round_key(self, round_key: &[Word; 4]) -> Self {
        let mut out = self.0;
        for (row, word) in out.iter_mut().zip(round_key.iter()) {
            for (b, k) in row.iter_mut().zip(word.iter()) {
                *b ^= k;
            }
        }
        Self(out)
    }

    #[inline(always)]
    fn map_bytes(self, f: impl Fn(u8) -> u8) -> Self {
        let mut out = self.0;
        for byte in out.iter_mut().flatten() {
            *byte = f(*byte);
        }
        Self(out)
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}
