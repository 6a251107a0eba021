//! Error types for GBP core operations.
//!
//! Point calculation and ledger editing are total and never fail. Errors come
//! from configuration decoding, identity validation, structural validation of
//! a ledger during bulk parsing, and persisting ledger text.

use std::fmt;

use thiserror::Error;

/// Result type alias for GBP operations.
pub type Result<T> = std::result::Result<T, GbpError>;

/// Core error type for GBP operations.
#[derive(Debug, Error)]
pub enum GbpError {
    /// Points configuration could not be decoded
    #[error("Configuration error: {0}")]
    Config(String),

    /// User identity cannot be written to a ledger line
    #[error("Invalid identity: {0}")]
    InvalidIdentity(String),

    /// Ledger text is not a TOML document
    #[error("Parse error: {0}")]
    Parse(String),

    /// Ledger parsed, but one or more balances are not integers
    #[error("Validation error: {}", format_offending(.offending))]
    Validation { offending: Vec<InvalidBalance> },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Generic error (fallback)
    #[error("{0}")]
    Other(String),
}

/// A ledger key whose value failed the numeric shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBalance {
    /// The offending key as written in the ledger
    pub key: String,

    /// TOML rendering of the rejected value
    pub value: String,
}

impl fmt::Display for InvalidBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.key, self.value)
    }
}

fn format_offending(offending: &[InvalidBalance]) -> String {
    let rendered: Vec<String> = offending.iter().map(ToString::to_string).collect();
    format!("expected integer balances, got: {}", rendered.join(", "))
}

impl From<std::io::Error> for GbpError {
    fn from(err: std::io::Error) -> Self {
        GbpError::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for GbpError {
    fn from(err: toml::de::Error) -> Self {
        GbpError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_key() {
        let err = GbpError::Validation {
            offending: vec![
                InvalidBalance {
                    key: "1".to_string(),
                    value: "\"ten\"".to_string(),
                },
                InvalidBalance {
                    key: "2".to_string(),
                    value: "1.5".to_string(),
                },
            ],
        };
        let message = err.to_string();
        assert!(message.contains("1 = \"ten\""));
        assert!(message.contains("2 = 1.5"));
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: GbpError = std::io::Error::new(std::io::ErrorKind::Other, "disk full").into();
        assert!(matches!(err, GbpError::Storage(ref msg) if msg.contains("disk full")));
    }
}
