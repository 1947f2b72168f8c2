//! CLI Commands
//!
//! All blake2b CLI commands organized as separate modules.

mod check;
mod hash;

pub use check::check_mode;
pub use hash::{hash_files, HashOptions};

/// Write `contents` to a fresh file under the system temp directory.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) fn temp_file(tag: &str, contents: &[u8]) -> std::path::PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "blake2b-cli-{tag}-{}-{nanos}",
        std::process::id()
    ));
    std::fs::write(&path, contents).unwrap();
    path
}
