//! Shared types used across the BLAKE2b library.

use crate::kernels::constants::{MAX_DIGEST_SIZE, MAX_KEY_SIZE, PARAM_BLOCK};
use core::fmt;
#[cfg(feature = "std")]
use std::error;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported by the hashing API.
///
/// Nothing is written to caller-provided output when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blake2bError {
    /// Key longer than 64 bytes.
    InvalidKeyLength(usize),
    /// Digest length outside `1..=64`.
    InvalidDigestLength(usize),
    /// The scratch buffer for key block + message could not be allocated.
    Allocation,
}

impl fmt::Display for Blake2bError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength(len) => write!(
                f,
                "invalid key length {len}: BLAKE2b accepts at most {MAX_KEY_SIZE} bytes"
            ),
            Self::InvalidDigestLength(len) => write!(
                f,
                "invalid digest length {len}: BLAKE2b emits 1 to {MAX_DIGEST_SIZE} bytes"
            ),
            Self::Allocation => f.write_str("failed to allocate the message buffer"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Blake2bError {}

// =============================================================================
// PARAMETERS
// =============================================================================

/// Validated hashing configuration: optional key and digest length.
///
/// The key is copied in and wiped when the parameters are dropped.
#[derive(Clone)]
pub struct Params {
    key: [u8; MAX_KEY_SIZE],
    key_len: usize,
    hash_len: usize,
}

impl Params {
    /// Build parameters for a keyed (non-empty `key`) or unkeyed hash.
    ///
    /// # Errors
    /// `InvalidKeyLength` if `key` exceeds 64 bytes, `InvalidDigestLength`
    /// if `hash_len` is not in `1..=64`.
    pub fn new(key: &[u8], hash_len: usize) -> Result<Self, Blake2bError> {
        if key.len() > MAX_KEY_SIZE {
            return Err(Blake2bError::InvalidKeyLength(key.len()));
        }
        if hash_len == 0 || hash_len > MAX_DIGEST_SIZE {
            return Err(Blake2bError::InvalidDigestLength(hash_len));
        }

        let mut params = Self {
            key: [0u8; MAX_KEY_SIZE],
            key_len: key.len(),
            hash_len,
        };
        params.key[..key.len()].copy_from_slice(key);
        Ok(params)
    }

    /// Unkeyed parameters.
    ///
    /// # Errors
    /// `InvalidDigestLength` if `hash_len` is not in `1..=64`.
    pub fn unkeyed(hash_len: usize) -> Result<Self, Blake2bError> {
        Self::new(&[], hash_len)
    }

    /// The key bytes (empty when unkeyed).
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key[..self.key_len]
    }

    /// Key length in bytes.
    #[must_use]
    pub const fn key_len(&self) -> usize {
        self.key_len
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn hash_len(&self) -> usize {
        self.hash_len
    }

    /// Parameter word XORed into `h[0]`: `0x01010000 ^ (key_len << 8) ^ hash_len`.
    #[must_use]
    pub const fn parameter_word(&self) -> u64 {
        // Both lengths are bounded by 64 at construction.
        PARAM_BLOCK ^ ((self.key_len as u64) << 8) ^ (self.hash_len as u64)
    }
}

impl Default for Params {
    /// Unkeyed BLAKE2b-512.
    fn default() -> Self {
        Self {
            key: [0u8; MAX_KEY_SIZE],
            key_len: 0,
            hash_len: MAX_DIGEST_SIZE,
        }
    }
}

impl fmt::Debug for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("key_len", &self.key_len)
            .field("hash_len", &self.hash_len)
            .finish_non_exhaustive()
    }
}

impl Drop for Params {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

// =============================================================================
// DIGEST
// =============================================================================

/// A BLAKE2b digest of 1 to 64 bytes.
///
/// Equality is constant-time. The bytes are wiped on drop.
#[derive(Clone)]
pub struct Digest {
    bytes: [u8; MAX_DIGEST_SIZE],
    len: usize,
}

impl Digest {
    /// All-zero digest of `len` bytes, filled in by the driver.
    pub(crate) const fn zeroed(len: usize) -> Self {
        Self {
            bytes: [0u8; MAX_DIGEST_SIZE],
            len,
        }
    }

    pub(crate) fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.bytes[..self.len]
    }

    /// Digest bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: digests are at least one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copy the digest into a new vector.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for Digest {}

impl PartialEq<[u8]> for Digest {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes().ct_eq(other).into()
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl Drop for Digest {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}
