//! Error types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Normalized transport failure for gateway calls. The message wording
    /// (including the spelling) is part of the observable contract.
    #[error("An error occured - Error code: {0}")]
    RequestFailed(u16),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Notification error: {0}")]
    NotificationError(String),

    #[error("Navigation error: {0}")]
    NavigationError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message() {
        let err = Error::RequestFailed(500);
        assert_eq!(err.to_string(), "An error occured - Error code: 500");
    }

    #[test]
    fn test_request_failed_network_fault() {
        // Faults with no HTTP status carry code 0
        let err = Error::RequestFailed(0);
        assert_eq!(err.to_string(), "An error occured - Error code: 0");
    }
}
