//! dirtally - Rank the subdirectories of a tree by disk usage
//!
//! This crate provides functionality for:
//! - Summing regular file sizes below a directory, skipping symlinks
//!   and ignored paths
//! - Containing permission failures to the unreadable subtree
//! - Ranking the immediate subdirectories of a root by size

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use config::Config;
pub use error::{DirtallyError, Result};
