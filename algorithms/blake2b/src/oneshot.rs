//! Public API Layer
//!
//! One-shot hashing, keyed hashing, batches and constant-time verification.

use crate::engine::parallel::{hash_batch, hash_one};
use crate::kernels::constants::MAX_DIGEST_SIZE;
use crate::types::{Blake2bError, Digest, Params};
use subtle::ConstantTimeEq;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// GENERIC HASHING
// =============================================================================

/// Compute BLAKE2b-512.
///
/// # Errors
/// `Allocation` if the message buffer cannot be allocated.
///
/// # Example
/// ```rust
/// let digest = blake2b::hash(b"abc")?;
/// assert_eq!(digest.len(), 64);
/// # Ok::<(), blake2b::Blake2bError>(())
/// ```
#[inline]
pub fn hash(input: &[u8]) -> Result<Digest, Blake2bError> {
    hash_one(input, &Params::default())
}

/// Compute an unkeyed digest of `hash_len` bytes.
///
/// The digest length is bound into the initial state, so this is not a
/// prefix of the 64-byte digest.
///
/// # Errors
/// `InvalidDigestLength` if `hash_len` is not in `1..=64`; `Allocation`.
#[inline]
pub fn hash_with_len(input: &[u8], hash_len: usize) -> Result<Digest, Blake2bError> {
    hash_one(input, &Params::unkeyed(hash_len)?)
}

/// Full hashing API with validated parameters.
///
/// # Errors
/// `Allocation` if the message buffer cannot be allocated.
#[inline]
pub fn hash_with_params(input: &[u8], params: &Params) -> Result<Digest, Blake2bError> {
    hash_one(input, params)
}

/// Hash many independent inputs under the same parameters.
///
/// Runs on the Rayon pool with the `multithread` feature; order is preserved.
///
/// # Errors
/// The first error hit by any input.
pub fn hash_many<T>(inputs: &[T], params: &Params) -> Result<Vec<Digest>, Blake2bError>
where
    T: AsRef<[u8]> + Sync,
{
    hash_batch(inputs, params)
}

// =============================================================================
// KEYED HASHING (MAC)
// =============================================================================

/// Keyed BLAKE2b with a key of up to 64 bytes.
///
/// An empty key is the unkeyed hash.
///
/// # Errors
/// `InvalidKeyLength`, `InvalidDigestLength`, or `Allocation`.
///
/// # Example
/// ```rust
/// use blake2b::hash_keyed;
///
/// let mac = hash_keyed(b"message", b"secret", 32)?;
/// assert!(blake2b::verify_mac(b"message", b"secret", mac.as_bytes()));
/// # Ok::<(), blake2b::Blake2bError>(())
/// ```
pub fn hash_keyed(input: &[u8], key: &[u8], hash_len: usize) -> Result<Digest, Blake2bError> {
    hash_one(input, &Params::new(key, hash_len)?)
}

/// Write the digest of `input` under `key` into `out`.
///
/// The digest length is `out.len()`. Nothing is written on error.
///
/// # Errors
/// `InvalidKeyLength`, `InvalidDigestLength`, or `Allocation`.
pub fn hash_into(out: &mut [u8], input: &[u8], key: &[u8]) -> Result<(), Blake2bError> {
    let digest = hash_keyed(input, key, out.len())?;
    out.copy_from_slice(digest.as_bytes());
    Ok(())
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Verify an unkeyed digest in constant time.
///
/// The digest length is taken from `expected`; malformed lengths never verify.
///
/// # Example
/// ```rust
/// let data = b"Secure Data";
/// let digest = blake2b::hash(data)?;
/// assert!(blake2b::verify(data, digest.as_bytes()));
/// # Ok::<(), blake2b::Blake2bError>(())
/// ```
#[must_use]
pub fn verify(input: &[u8], expected: &[u8]) -> bool {
    verify_mac(input, &[], expected)
}

/// Verify a keyed digest in constant time.
#[must_use]
pub fn verify_mac(input: &[u8], key: &[u8], expected: &[u8]) -> bool {
    if expected.is_empty() || expected.len() > MAX_DIGEST_SIZE {
        return false;
    }
    hash_keyed(input, key, expected.len())
        .is_ok_and(|computed| computed.as_bytes().ct_eq(expected).into())
}
