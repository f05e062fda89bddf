//! Error types for strhelp operations.

use thiserror::Error;

/// Errors returned by the fallible helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("sequence is empty")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, Error>;
