//! Error types surfaced when a wrapper is applied

use std::io;

use thiserror::Error;

/// Failures raised while applying a [`Wrapper`](crate::Wrapper) to a target.
///
/// Nothing here is recovered locally; every variant reaches the caller of
/// `apply` as-is.
#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("no symbol named '{name}'")]
    NotFound { name: String },

    #[error("'{name}' is a {kind}, not a function")]
    NotCallable { name: String, kind: &'static str },

    #[error("{name}() takes {expected} argument(s) but {given} were given")]
    Arity {
        name: String,
        expected: usize,
        given: usize,
    },

    #[error("failed to write announcement: {source}")]
    Output {
        #[from]
        source: io::Error,
    },

    #[error(transparent)]
    Target(anyhow::Error),
}

impl ApplyError {
    /// Create a not found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Create a not callable error
    pub fn not_callable(name: impl Into<String>, kind: &'static str) -> Self {
        Self::NotCallable {
            name: name.into(),
            kind,
        }
    }

    /// Create an arity error
    pub fn arity(name: impl Into<String>, expected: usize, given: usize) -> Self {
        Self::Arity {
            name: name.into(),
            expected,
            given,
        }
    }
}
