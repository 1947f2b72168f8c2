//! Portable implementation of the BLAKE2b compression function.
//!
//! Scalar 64-bit ARX only; every target runs this kernel.

use self::utils::{load_block, mix, VECTOR_WORDS};
use crate::kernels::constants::{
    BLOCK_SIZE, IV, LANES, LAST_BLOCK_FLAG, ROUNDS, SIGMA, STATE_WORDS,
};
use zeroize::Zeroize;

mod utils;

// =============================================================================
// COMPRESSION
// =============================================================================

/// Absorb one block into the chaining state `h`.
///
/// `t` is the number of input bytes incorporated so far, this block
/// included. `last` marks the final block of the message.
#[allow(clippy::cast_possible_truncation)] // low/high halves of the counter
pub fn compress(h: &mut [u64; STATE_WORDS], block: &[u8; BLOCK_SIZE], t: u128, last: bool) {
    let mut m = load_block(block);

    let mut v = [0u64; VECTOR_WORDS];
    v[..STATE_WORDS].copy_from_slice(h);
    v[STATE_WORDS..].copy_from_slice(&IV);
    v[12] ^= t as u64;
    v[13] ^= (t >> 64) as u64;
    if last {
        v[14] ^= LAST_BLOCK_FLAG;
    }

    for s in SIGMA.iter().cycle().take(ROUNDS) {
        for (i, lane) in LANES.iter().enumerate() {
            let x = m[usize::from(s[2 * i])];
            let y = m[usize::from(s[2 * i + 1])];
            mix(&mut v, *lane, x, y);
        }
    }

    for (i, word) in h.iter_mut().enumerate() {
        *word ^= v[i] ^ v[i + STATE_WORDS];
    }

    v.zeroize();
    m.zeroize();
}
