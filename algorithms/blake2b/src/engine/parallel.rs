//! Batch Engine
//!
//! Hashes independent messages under the same parameters. Every message gets
//! its own driver run and scratch buffer, so the batch fans out over Rayon
//! when the `multithread` feature is enabled and runs serially otherwise.

use crate::engine::driver;
use crate::types::{Blake2bError, Digest, Params};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// =============================================================================
// BATCH HASHING
// =============================================================================

/// Hash every input, preserving order.
///
/// # Errors
/// The first `Allocation` failure encountered.
#[tracing::instrument(level = "debug", skip_all, fields(count = inputs.len()))]
pub fn hash_batch<T>(inputs: &[T], params: &Params) -> Result<Vec<Digest>, Blake2bError>
where
    T: AsRef<[u8]> + Sync,
{
    inputs.process_each(|input| hash_one(input.as_ref(), params))
}

/// Single driver run producing a `Digest`.
pub fn hash_one(input: &[u8], params: &Params) -> Result<Digest, Blake2bError> {
    let mut digest = Digest::zeroed(params.hash_len());
    driver::run(params, input, digest.as_mut_bytes())?;
    Ok(digest)
}

/// Helper for feature-agnostic per-item processing
trait ItemProcessor<T> {
    fn process_each<F, R, E>(self, f: F) -> Result<Vec<R>, E>
    where
        F: Fn(&T) -> Result<R, E> + Sync + Send,
        R: Send,
        E: Send;
}

impl<T: Sync> ItemProcessor<T> for &[T] {
    fn process_each<F, R, E>(self, f: F) -> Result<Vec<R>, E>
    where
        F: Fn(&T) -> Result<R, E> + Sync + Send,
        R: Send,
        E: Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_iter().map(f).collect()
        }
        #[cfg(not(feature = "multithread"))]
        {
            self.iter().map(f).collect()
        }
    }
}
