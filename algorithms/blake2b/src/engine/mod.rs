//! Execution Engine
//!
//! Message assembly, the sequential driver and batch hashing.

pub mod driver;
pub mod message;
pub mod parallel;
