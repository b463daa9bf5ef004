//! # Domain Errors
//!
//! A menu configuration is either consistent or rejected at load time. The
//! projection functions themselves never fail.

use std::path::PathBuf;
use thiserror::Error;

/// Menu configuration errors.
#[derive(Debug, Error)]
pub enum MenuError {
    /// Two nodes share a key.
    #[error("Duplicate menu key: {0}")]
    DuplicateKey(String),

    /// A node declares both a page and children.
    #[error("Menu node {0} has both an element and children")]
    AmbiguousNode(String),

    /// A node declares neither a page nor children.
    #[error("Menu node {0} has neither an element nor children")]
    EmptyNode(String),

    /// A node has an empty key.
    #[error("Menu node with label {0:?} has an empty key")]
    EmptyKey(String),

    /// The configuration document could not be parsed.
    #[error("Invalid menu configuration: {0}")]
    Parse(String),

    /// The configuration file could not be read.
    #[error("Failed to read menu configuration {path:?}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}
