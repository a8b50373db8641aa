//! Error types for route model operations.

/// Result type for route model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding or encoding route attributes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Payload was shorter than the structure it should contain.
    #[error("payload truncated: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Expected payload length.
        expected: usize,
        /// Actual bytes available.
        actual: usize,
    },

    /// Invalid attribute format.
    #[error("invalid attribute: {0}")]
    InvalidAttribute(String),

    /// Invalid message format.
    #[error("invalid message: {0}")]
    InvalidMessage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::Truncated {
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.to_string(), "payload truncated: expected 4 bytes, got 2");

        let err = Error::InvalidAttribute("empty label stack".into());
        assert_eq!(err.to_string(), "invalid attribute: empty label stack");
    }
}
