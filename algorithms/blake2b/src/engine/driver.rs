//! One-Shot Driver
//!
//! init -> full blocks -> exactly one final block -> truncate.

use crate::engine::message::{assemble, final_block, split_final};
use crate::kernels::constants::{BLOCK_SIZE, IV, MAX_DIGEST_SIZE, STATE_WORDS, WORD_SIZE};
use crate::kernels::portable::compress;
use crate::types::{Blake2bError, Params};
use zeroize::Zeroize;

const BLOCK_BYTES: u128 = BLOCK_SIZE as u128;

// =============================================================================
// DRIVER
// =============================================================================

/// Hash `input` under `params` into `out`.
///
/// `out.len()` must equal `params.hash_len()`. On error `out` is untouched.
///
/// # Errors
/// `Allocation` if the combined key + message buffer cannot be allocated.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(input_len = input.len(), key_len = params.key_len(), hash_len = params.hash_len())
)]
pub fn run(params: &Params, input: &[u8], out: &mut [u8]) -> Result<(), Blake2bError> {
    debug_assert_eq!(out.len(), params.hash_len());

    let combined = assemble(input, params.key())?;

    let mut h = IV;
    h[0] ^= params.parameter_word();

    let (blocks, tail) = split_final(&combined);
    let mut t: u128 = 0;
    for block in blocks {
        t += BLOCK_BYTES;
        compress(&mut h, block, t, false);
    }

    // Padding bytes never count towards `t`.
    t += tail.len() as u128;
    compress(&mut h, &final_block(tail), t, true);

    tracing::trace!(blocks = blocks.len() + 1, bytes = %t, "compressed");

    emit(&mut h, out);
    Ok(())
}

/// Copy the first `out.len()` little-endian state bytes out, then wipe `h`.
fn emit(h: &mut [u64; STATE_WORDS], out: &mut [u8]) {
    let mut bytes = [0u8; MAX_DIGEST_SIZE];
    for (chunk, word) in bytes.chunks_exact_mut(WORD_SIZE).zip(h.iter()) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    out.copy_from_slice(&bytes[..out.len()]);

    bytes.zeroize();
    h.zeroize();
}
