//! Error types for Orbgate portal operations

use thiserror::Error;

/// Main error type for calls against the OTP backend.
///
/// Client-side validation failures never become a `PortalError`; they
/// are caught before the network layer and surfaced as a notice.
#[derive(Error, Debug)]
pub enum PortalError {
    /// The backend answered with a non-success status. Carries the
    /// server-supplied message when the response body had one.
    #[error("backend rejected the request (status {status})")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request could not complete at all. An unreachable backend is
    /// an expected deployment state for the portal, not a bug.
    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Result type alias using PortalError
pub type PortalResult<T> = Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let err = PortalError::Rejected {
            status: 503,
            message: Some("mail relay down".to_string()),
        };
        assert_eq!(
            format!("{}", err),
            "backend rejected the request (status 503)"
        );
    }
}
