//! GF(2^8) arithmetic under the AES reduction polynomial x^8 + x^4 + x^3 + x + 1 (0x11B).

/// Multiplies `a` by x: shift left one bit and, if the bit shifted out was set,
/// reduce by XORing with 0x1B.
// adapted from https://crypto.stackexchange.com/a/71206
#[inline(always)]
pub const fn dbl(a: u8) -> u8 {
    (a << 1) ^ (0x1B & (0u8).wrapping_sub((a >> 7) & 1))
}
