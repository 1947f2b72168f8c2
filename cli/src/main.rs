//! BLAKE2b CLI
//!
//! `b2sum`-style command-line tool: keyed or unkeyed digests of 1 to 64 bytes.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, HashOptions};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "blake2b")]
#[command(about = "Compute and check BLAKE2b message digests", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (`-` reads stdin)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Digest length in bytes (1-64)
    #[arg(short, long, default_value_t = blake2b::MAX_DIGEST_SIZE)]
    length: usize,

    /// Hex-encoded key (up to 64 bytes) for keyed hashing
    #[arg(short, long, value_name = "HEX")]
    key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like b2sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let options = HashOptions::new(cli.key.as_deref(), cli.length)?;

    match &cli.command {
        Some(Commands::Check { checksum_file }) => {
            if !check_mode(checksum_file, &options)? {
                std::process::exit(1);
            }
        }
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: blake2b [FILE]... or blake2b --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, &options)?;
        }
    }

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
