//! Error Types

use thiserror::Error;

/// Alert shown when the relay could not be reached or answered garbage
pub const CONNECTION_ALERT: &str = "Something went wrong. Please check your connection.";

/// Fallback when the relay rejects without saying why
pub const UNKNOWN_REJECTION: &str = "Submission was not accepted";

/// Why a contact form submission did not go through
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Relay answered with a non-success status
    #[error("relay rejected submission ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// No response at all
    #[error("network error: {0}")]
    Network(String),
    /// Response body was not the expected JSON
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl SubmitError {
    /// Text for the blocking alert
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Rejected { message, .. } => format!("Error: {}", message),
            SubmitError::Network(_) | SubmitError::Decode(_) => CONNECTION_ALERT.to_string(),
        }
    }

    /// Connectivity-class failures also go to the console
    pub fn is_connectivity(&self) -> bool {
        !matches!(self, SubmitError::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_alert_carries_relay_message() {
        let err = SubmitError::Rejected { status: 400, message: "Invalid email".into() };
        assert_eq!(err.user_message(), "Error: Invalid email");
        assert!(!err.is_connectivity());
    }

    #[test]
    fn test_network_and_decode_share_generic_alert() {
        assert_eq!(SubmitError::Network("offline".into()).user_message(), CONNECTION_ALERT);
        assert_eq!(SubmitError::Decode("eof".into()).user_message(), CONNECTION_ALERT);
        assert!(SubmitError::Network("offline".into()).is_connectivity());
    }
}
