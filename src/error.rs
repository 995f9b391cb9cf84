//! Global error handling for ctxgen
//!
//! Exclusion of a file is never an error: excluded files are a normal
//! outcome recorded per file. Errors here are the fatal kind, surfaced
//! once to the caller with no retries.

use std::io;

use thiserror::Error;

/// Global error type for ctxgen operations
#[derive(Error, Debug)]
pub enum CtxgenError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for ctxgen operations
pub type Result<T> = std::result::Result<T, CtxgenError>;
