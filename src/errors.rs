//! Errors
//!
//! Custom error types used throughout the `entropic` crate.
use thiserror::Error;

/// Errors that can occur while loading data or inducing a tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Empty rows, inconsistent row width, missing label column or duplicate headers.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// An attribute name or index that is not a non-label column of the current headers.
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
    /// Statistics were requested over zero rows.
    #[error("Empty partition: {0}")]
    EmptyPartition(String),
    /// Induction reached the configured depth budget before terminating.
    #[error("Induction exceeded the maximum depth of {0}.")]
    DepthLimitExceeded(usize),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to read data or configuration.
    #[error("Unable to read from {0}")]
    UnableToRead(String),
    /// Unable to write configuration.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
}
