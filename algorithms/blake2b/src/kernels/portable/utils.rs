//! Word-level primitives for the portable kernel.

use crate::kernels::constants::{BLOCK_SIZE, BLOCK_WORDS, WORD_SIZE};

/// Working vector width.
pub const VECTOR_WORDS: usize = 16;

/// G mixing function over four positions of the working vector.
///
/// Additions wrap modulo 2^64.
#[inline]
pub fn mix(v: &mut [u64; VECTOR_WORDS], [a, b, c, d]: [usize; 4], x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);

    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

/// Read a block as sixteen little-endian words.
#[inline]
pub fn load_block(block: &[u8; BLOCK_SIZE]) -> [u64; BLOCK_WORDS] {
    let mut m = [0u64; BLOCK_WORDS];
    for (word, bytes) in m.iter_mut().zip(block.chunks_exact(WORD_SIZE)) {
        let mut buf = [0u8; WORD_SIZE];
        buf.copy_from_slice(bytes);
        *word = u64::from_le_bytes(buf);
    }
    m
}
