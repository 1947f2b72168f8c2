#![cfg_attr(not(feature = "std"), no_std)]

//! # BLAKE2b
//!
//! One-shot BLAKE2b (RFC 7693): keyed or unkeyed digests of 1 to 64 bytes.

//! # Usage
//! ```rust
//! // 1. BLAKE2b-512
//! let digest = blake2b::hash(b"abc")?;
//! println!("{digest:x}");
//!
//! // 2. Shorter digests bind their length into the state
//! let short = blake2b::hash_with_len(b"abc", 32)?;
//! assert_ne!(short.as_bytes(), &digest.as_bytes()[..32]);
//!
//! // 3. Keyed hashing (MAC)
//! let mac = blake2b::hash_keyed(b"abc", b"secret key", 64)?;
//! assert!(blake2b::verify_mac(b"abc", b"secret key", mac.as_bytes()));
//! # Ok::<(), blake2b::Blake2bError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod engine;
#[cfg(feature = "std")]
mod ffi;
// Compression kernel exposed for benchmarks and known-answer tests
#[doc(hidden)]
pub mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use kernels::constants::{BLOCK_SIZE, MAX_DIGEST_SIZE, MAX_KEY_SIZE};
pub use oneshot::{
    hash, hash_into, hash_keyed, hash_many, hash_with_len, hash_with_params, verify, verify_mac,
};
pub use types::{Blake2bError, Digest, Params};
