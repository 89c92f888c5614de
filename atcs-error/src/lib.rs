// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions)]
//! Error types for the ATCS CCTV directory browser
//!
//! Navigation, filtering and aggregation never fail: they absorb missing
//! selections and empty results locally. The only fallible edges are loading
//! the dataset and turning raw user input into commands, and both report
//! through [`AtcsError`].
//!
//! # Examples
//!
//! ```
//! use atcs_error::{AtcsError, Result};
//!
//! fn parse(line: &str) -> Result<()> {
//!     Err(AtcsError::unknown_command(line))
//! }
//!
//! assert!(parse("jump").unwrap_err().is_recoverable());
//! ```

use std::error::Error as StdError;

/// Root error type for all ATCS operations
#[derive(Debug, thiserror::Error)]
pub enum AtcsError {
    /// The dataset could not be parsed or has an unusable shape
    #[error("Dataset error: {context}")]
    Dataset {
        /// What went wrong while reading the dataset
        context: String,
    },

    /// Reading a file from disk failed
    #[error("I/O error on {path}: {source}")]
    Io {
        /// File that was being read
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A line of user input did not map to any navigation command
    #[error("Unknown command: {input:?}")]
    UnknownCommand {
        /// The raw input, trimmed
        input: String,
    },

    /// An error annotated with extra context by [`IntoAtcsError`]
    #[error("{context}: {source}")]
    Context {
        /// Caller-supplied description of the failing operation
        context: String,
        /// The wrapped error
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl AtcsError {
    /// Create a dataset error with the given context
    pub fn dataset(context: impl Into<String>) -> Self {
        Self::Dataset {
            context: context.into(),
        }
    }

    /// Create an I/O error for the given path
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unknown command error for the given input
    pub fn unknown_command(input: impl Into<String>) -> Self {
        Self::UnknownCommand {
            input: input.into(),
        }
    }

    /// Check if this is a recoverable error
    ///
    /// A recoverable error leaves the session usable: the user can simply
    /// type the next command.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownCommand { .. })
    }

    /// Check if this error indicates a permanent failure
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(
            self,
            Self::Dataset { .. } | Self::Io { .. } | Self::Context { .. }
        )
    }
}

/// Specialized Result type for ATCS operations
pub type Result<T> = std::result::Result<T, AtcsError>;

/// Extension trait for converting foreign errors into `AtcsError`
pub trait IntoAtcsError {
    /// Convert this error into an `AtcsError` carrying the given context
    fn into_atcs_error(self, context: &str) -> AtcsError;
}

impl<E: StdError + Send + Sync + 'static> IntoAtcsError for E {
    fn into_atcs_error(self, context: &str) -> AtcsError {
        AtcsError::Context {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}
