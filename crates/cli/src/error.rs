// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the parts of vouch that can actually fail.
//!
//! Assertion failures are not errors: they are recorded as outcomes on the
//! run context. Only I/O, malformed input files, and runner integration
//! defects surface here.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("invalid expectation file {path}: {message}")]
    Spec { path: PathBuf, message: String },

    #[error("invalid test filter '{pattern}': {message}")]
    Filter { pattern: String, message: String },

    /// A halt token reached a test boundary it does not belong to.
    ///
    /// This means the harness lost track of test boundaries and the run
    /// cannot be trusted.
    #[error("halt from '{origin}' escaped into test '{test}'")]
    HaltEscape { test: String, origin: String },
}

impl Error {
    /// Whether the error invalidates the whole run rather than one input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::HaltEscape { .. })
    }
}
