//! Compression Kernels
//!
//! Contains the BLAKE2b compression function and its constant tables.

pub mod constants;
pub mod portable;
