//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::io::Read;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

// =============================================================================
// OPTIONS
// =============================================================================

/// Key and digest length shared by every file of one invocation.
pub struct HashOptions {
    key: Zeroizing<Vec<u8>>,
    length: usize,
}

impl HashOptions {
    /// Decode the hex key and validate both parameters up front.
    pub fn new(key_hex: Option<&str>, length: usize) -> Result<Self> {
        let key = match key_hex {
            Some(hex_key) => {
                Zeroizing::new(hex::decode(hex_key.trim()).context("Key is not valid hex")?)
            }
            None => Zeroizing::new(Vec::new()),
        };
        blake2b::Params::new(&key, length).context("Invalid parameters")?;
        Ok(Self { key, length })
    }

    /// Same key, different digest length (used by `check`).
    pub fn with_length(&self, length: usize) -> Result<Self> {
        blake2b::Params::new(&self.key, length).context("Invalid digest length")?;
        Ok(Self {
            key: self.key.clone(),
            length,
        })
    }

    /// Hash a whole buffer.
    pub fn digest(&self, data: &[u8]) -> Result<blake2b::Digest> {
        blake2b::hash_keyed(data, &self.key, self.length).context("Hashing failed")
    }
}

// =============================================================================
// HASH
// =============================================================================

/// Read a file (or stdin for `-`) completely.
pub fn read_input(path: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let mut data = Zeroizing::new(Vec::new());
    if path.as_os_str() == "-" {
        std::io::stdin()
            .lock()
            .read_to_end(&mut data)
            .context("Failed to read stdin")?;
    } else {
        let mut file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open: {}", path.display()))?;
        file.read_to_end(&mut data)
            .with_context(|| format!("Failed to read: {}", path.display()))?;
    }
    tracing::debug!(path = %path.display(), bytes = data.len(), "read input");
    Ok(data)
}

/// Hex digest of one file.
pub fn hash_file(path: &Path, options: &HashOptions) -> Result<String> {
    let data = read_input(path)?;
    let digest = options.digest(&data)?;
    Ok(hex::encode(digest.as_bytes()))
}

/// Hash files in parallel and print `<hex>  <path>` lines in argument order.
pub fn hash_files(files: &[PathBuf], options: &HashOptions) -> Result<()> {
    let results: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|file_path| (file_path, hash_file(file_path, options)))
        .collect();

    let mut failures = 0usize;
    for (file_path, result) in results {
        match result {
            Ok(hex_hash) => println!("{}  {}", hex_hash, file_path.display()),
            Err(e) => {
                eprintln!("Error: {}: {:#}", file_path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("Failed to hash {} file(s)", failures);
    }

    Ok(())
}
