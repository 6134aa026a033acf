//! Error types and classification for flight-filter.
//!
//! This crate provides:
//! - [`FfError`] - Top-level error enum for catalog lookups and flight construction
//! - [`ErrorCategory`] for mapping failures onto process exit codes
//!
//! Every error here is a precondition violation detected next to the bad
//! input. Nothing is retried; callers propagate with `?`.

use thiserror::Error;

/// Top-level error type for flight-filter.
#[derive(Error, Debug)]
pub enum FfError {
    /// A predicate index outside the catalog range
    #[error("Invalid predicate index {index}: valid range is 0..{catalog_size}")]
    InvalidIndex { index: usize, catalog_size: usize },

    /// A filter was requested without selecting any predicate
    #[error("Empty predicate selection: no index at position 0; at least one is required")]
    EmptySelection,

    /// Odd number of timestamps supplied for a flight
    #[error("Malformed flight: expected an even number of segment dates, got {count}")]
    MalformedFlight { count: usize },

    /// No timestamps supplied for a flight
    #[error("Malformed flight: a flight needs at least one segment")]
    EmptyFlight,

    /// A blank timestamp where a segment date was expected
    #[error("Missing timestamp at position {position}")]
    MissingTimestamp { position: usize },

    /// A timestamp that could not be parsed
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    /// Options that cannot be used together
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error classification for exit status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The caller asked for something the catalog cannot provide
    ///
    /// Examples: index out of range, empty selection, bad CLI option
    Selection,

    /// Flight data could not be built
    ///
    /// Examples: odd timestamp count, blank or unparseable timestamp
    Input,

    /// Failures outside flight-filter's own error types
    ///
    /// Examples: writing output, logging setup
    Internal,
}

impl ErrorCategory {
    /// Process exit code for this category.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Selection => 2,
            Self::Input => 3,
            Self::Internal => 1,
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selection => write!(f, "Selection"),
            Self::Input => write!(f, "Input"),
            Self::Internal => write!(f, "Internal"),
        }
    }
}

/// Classifies an error for exit status reporting.
pub fn classify_error(error: &FfError) -> ErrorCategory {
    match error {
        FfError::InvalidIndex { .. } => ErrorCategory::Selection,
        FfError::EmptySelection => ErrorCategory::Selection,
        FfError::Config(_) => ErrorCategory::Selection,
        FfError::MalformedFlight { .. } => ErrorCategory::Input,
        FfError::EmptyFlight => ErrorCategory::Input,
        FfError::MissingTimestamp { .. } => ErrorCategory::Input,
        FfError::InvalidTimestamp { .. } => ErrorCategory::Input,
    }
}

/// Result type alias using FfError.
pub type Result<T> = std::result::Result<T, FfError>;
