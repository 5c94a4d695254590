//! Address and search error types

use thiserror::Error;

/// Errors raised while parsing or serializing addresses
///
/// Search term evaluation never produces a `MailError`; failures there belong
/// to the message being searched and are returned as that message's own
/// error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    /// Address list text could not be turned into addresses
    #[error("Address parse error: {0}")]
    AddressParse(String),

    /// An address list contained an address of the wrong kind
    #[error("Address kind mismatch: expected {expected}, found {found}")]
    AddressKindMismatch {
        /// Kind the operation works on (e.g., "news")
        expected: &'static str,
        /// Kind of the offending address (e.g., "rfc822")
        found: &'static str,
    },
}

/// Result type alias using MailError
pub type Result<T> = std::result::Result<T, MailError>;
