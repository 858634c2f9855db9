//! Multi-block processing: each 16-byte block is transformed independently under the
//! same round keys. No padding, no chaining.

use log::{debug, trace};
use rayon::prelude::*;

use super::core::{Block, Word};
use super::error::{Error, Result};

/// Block-level transform: [encrypt_block](super::core::encrypt_block) or
/// [decrypt_block](super::core::decrypt_block).
pub(crate) type BlockFn = fn(&Block, &[[Word; 4]]) -> Block;

/// Rejects input that is empty or not a whole number of blocks.
fn check_blocks(input: &[u8]) -> Result<()> {
    if input.is_empty() || input.len() % 16 != 0 {
        return Err(Error::InvalidInputLength {
            len: input.len(),
            context: "expected a positive multiple of 16 bytes",
        });
    }
    Ok(())
}

/// Core ECB algorithm. Applies `f` to each 16-byte block of `input` in order.
pub(crate) fn ecb_core_serial(input: &[u8], round_keys: &[[Word; 4]], f: BlockFn) -> Result<Vec<u8>> {
    check_blocks(input)?;
    debug!("processing {} blocks serially", input.len() / 16);

    let mut output = vec![0u8; input.len()];
    let blocks = input.chunks_exact(16).zip(output.chunks_exact_mut(16));
    for (i, (in_chunk, out_chunk)) in blocks.enumerate() {
        trace!("block {i}");
        out_chunk.copy_from_slice(&f(&to_block(in_chunk), round_keys));
    }

    Ok(output)
}

/// Same as [ecb_core_serial], spread across the rayon thread pool. Output is identical.
pub(crate) fn ecb_core_parallel(
    input: &[u8],
    round_keys: &[[Word; 4]],
    f: BlockFn,
) -> Result<Vec<u8>> {
    check_blocks(input)?;
    debug!("processing {} blocks in parallel", input.len() / 16);

    // initialise vector for parallelisation
    let mut output = vec![0u8; input.len()];

    output
        .par_chunks_mut(16)
        .zip(input.par_chunks(16))
        .for_each(|(out_chunk, in_chunk)| {
            out_chunk.copy_from_slice(&f(&to_block(in_chunk), round_keys));
        });

    Ok(output)
}

#[inline(always)]
fn to_block(chunk: &[u8]) -> Block {
    let mut block = [0u8; 16];
    block.copy_from_slice(chunk);
    block
}
