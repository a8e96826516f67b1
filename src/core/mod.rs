//! Core utilities for the BFV CLI

pub mod cache;

// Re-export commonly used items for convenience
pub use cache::{match_day_path, try_read_to_string, write_string};
