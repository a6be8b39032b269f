//! Error types for viewhelperslib

use thiserror::Error;

/// Errors that can occur while configuring or feeding the helpers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewHelperError {
    /// A caller-supplied strftime string contains an unknown specifier
    #[error("invalid date format '{format}': {message}")]
    InvalidDateFormat { format: String, message: String },

    /// Attribute text was not of the form `key=value`
    #[error("invalid attribute '{0}': expected key=value")]
    InvalidAttribute(String),

    /// Instant text could not be parsed
    #[error("invalid timestamp '{input}': {message}")]
    InvalidTimestamp { input: String, message: String },
}
