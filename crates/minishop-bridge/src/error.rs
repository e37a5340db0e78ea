//! # Bridge Error Types
//!
//! Failures on the outbound channel to the host.
//!
//! ## Propagation Policy
//! Both variants are caught at the point of the send operation, logged,
//! and converted into a user-visible ephemeral notice. They never crash
//! the application and never retry: the host provides no delivery
//! confirmation, so the channel is fire-and-forget by design.

use thiserror::Error;

/// Errors on the host bridge boundary.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The payload could not be encoded to its text form.
    #[error("Payload could not be encoded: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The host rejected the payload or the transport call failed.
    #[error("Host transport failed: {0}")]
    Transport(String),
}

/// Convenience type alias for Results with BridgeError.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_message() {
        let err = BridgeError::Transport("WebAppDataInvalid".into());
        assert_eq!(err.to_string(), "Host transport failed: WebAppDataInvalid");
    }
}
