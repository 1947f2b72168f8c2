//! Check Command
//!
//! Verify checksums from file (like b2sum -c).

use super::hash::{read_input, HashOptions};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// =============================================================================
// CHECK
// =============================================================================

/// Outcome of one checksum line.
#[derive(Debug, PartialEq, Eq)]
enum LineStatus {
    Ok,
    Mismatch,
    Failed(String),
}

/// Verify checksums from a checksum file. Returns `true` if all matched.
pub fn check_mode(checksum_file: &Path, options: &HashOptions) -> Result<bool> {
    let file = File::open(checksum_file)
        .with_context(|| format!("Failed to open: {}", checksum_file.display()))?;

    let reader = BufReader::new(file);
    let mut total = 0;
    let mut failed = 0;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Format: "hash  filename" (two spaces)
        let Some((expected_hash, file_path)) = parse_line(line) else {
            tracing::warn!(line, "invalid checksum line");
            continue;
        };
        total += 1;

        match check_one(expected_hash, Path::new(file_path), options) {
            LineStatus::Ok => println!("{file_path}: OK"),
            LineStatus::Mismatch => {
                println!("{file_path}: FAILED");
                failed += 1;
            }
            LineStatus::Failed(reason) => {
                println!("{file_path}: FAILED ({reason})");
                failed += 1;
            }
        }
    }

    println!();
    if failed == 0 {
        println!("All {total} checksums verified");
    } else {
        eprintln!("WARNING: {failed} of {total} checksums did NOT match");
    }

    Ok(failed == 0)
}

/// Split `"<hex>  <path>"`.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (hash, path) = line.split_once("  ")?;
    let (hash, path) = (hash.trim(), path.trim());
    if hash.is_empty() || path.is_empty() {
        return None;
    }
    Some((hash, path))
}

/// Recompute one file's digest at the length implied by the expected hex.
fn check_one(expected_hash: &str, path: &Path, options: &HashOptions) -> LineStatus {
    let expected = match hex::decode(expected_hash) {
        Ok(bytes) => bytes,
        Err(e) => return LineStatus::Failed(format!("Bad hex: {e}")),
    };
    let options = match options.with_length(expected.len()) {
        Ok(o) => o,
        Err(e) => return LineStatus::Failed(format!("{e:#}")),
    };
    let data = match read_input(path) {
        Ok(d) => d,
        Err(e) => return LineStatus::Failed(format!("{e:#}")),
    };

    match options.digest(&data) {
        Ok(actual) if actual == expected[..] => LineStatus::Ok,
        Ok(_) => LineStatus::Mismatch,
        Err(e) => LineStatus::Failed(format!("{e:#}")),
    }
}
