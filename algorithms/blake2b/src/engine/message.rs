//! Message Assembler
//!
//! Prepends the zero-padded key block to the message and splits the result
//! into the blocks fed to the compression function.

use crate::kernels::constants::BLOCK_SIZE;
use crate::types::Blake2bError;
use zeroize::Zeroizing;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// ASSEMBLY
// =============================================================================

/// Build `pad(key) || input`, or just `input` when `key` is empty.
///
/// The buffer is allocated once at its exact size and wiped on drop.
///
/// # Errors
/// `Allocation` if the buffer cannot be reserved (or its size overflows).
pub fn assemble(input: &[u8], key: &[u8]) -> Result<Zeroizing<Vec<u8>>, Blake2bError> {
    debug_assert!(key.len() <= BLOCK_SIZE);

    let prefix = if key.is_empty() { 0 } else { BLOCK_SIZE };
    let total = prefix
        .checked_add(input.len())
        .ok_or(Blake2bError::Allocation)?;

    let mut buf = Zeroizing::new(Vec::new());
    buf.try_reserve_exact(total)
        .map_err(|_| Blake2bError::Allocation)?;

    if !key.is_empty() {
        buf.extend_from_slice(key);
        buf.resize(BLOCK_SIZE, 0);
    }
    buf.extend_from_slice(input);
    Ok(buf)
}

// =============================================================================
// BLOCKING
// =============================================================================

/// Split `buf` into the full blocks compressed before finalization and the
/// tail compressed with the last-block flag.
///
/// The tail is never empty unless `buf` is: a buffer that is an exact
/// multiple of `BLOCK_SIZE` keeps its last full block as the tail.
pub fn split_final(buf: &[u8]) -> (&[[u8; BLOCK_SIZE]], &[u8]) {
    let full = buf.len().saturating_sub(1) / BLOCK_SIZE;
    let (head, tail) = buf.split_at(full * BLOCK_SIZE);
    let (blocks, rest) = head.as_chunks::<BLOCK_SIZE>();
    debug_assert!(rest.is_empty());
    (blocks, tail)
}

/// Zero-pad the tail up to one block.
pub fn final_block(tail: &[u8]) -> Zeroizing<[u8; BLOCK_SIZE]> {
    debug_assert!(tail.len() <= BLOCK_SIZE);

    let mut block = Zeroizing::new([0u8; BLOCK_SIZE]);
    block[..tail.len()].copy_from_slice(tail);
    block
}
