//! Client-side input checks and the portal's user-facing copy.
//!
//! Validation failures never reach the network layer; the form shows a
//! targeted message and stops.

use std::sync::OnceLock;

use regex::Regex;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

/// Loose email shape check: something, an `@`, something, a dot,
/// something. The backend does the real verification by delivering a
/// code to the address.
pub fn valid_email(email: &str) -> bool {
    EMAIL_RE
        .get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email regex"))
        .is_match(email)
}

/// Pre-network gate for the request-code operation.
///
/// Returns the trimmed address to send, or the blocking message to
/// show. A blocked gate means zero network calls.
pub fn request_gate(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if valid_email(email) {
        Ok(email.to_string())
    } else {
        Err(messages::ENTER_VALID_EMAIL)
    }
}

/// Pre-network gate for the verify operation: the terms checkbox is
/// checked first, then both fields must be non-empty.
///
/// Returns the trimmed email and code to send, or the blocking
/// message. A blocked gate means zero network calls.
pub fn verify_gate(agreed: bool, email: &str, otp: &str) -> Result<(String, String), &'static str> {
    if !agreed {
        return Err(messages::ACCEPT_TERMS);
    }
    let email = email.trim();
    let otp = otp.trim();
    if email.is_empty() || otp.is_empty() {
        return Err(messages::EMAIL_OTP_REQUIRED);
    }
    Ok((email.to_string(), otp.to_string()))
}

/// Every user-facing string the portal form can show, in one place so
/// the UI and the tests agree on the exact copy.
pub mod messages {
    pub const ENTER_VALID_EMAIL: &str = "Enter a valid email";
    pub const ACCEPT_TERMS: &str = "Please accept the terms";
    pub const EMAIL_OTP_REQUIRED: &str = "Email & OTP required";
    pub const OTP_SENT: &str = "OTP sent — check your inbox";
    pub const SEND_FAILED: &str = "Failed to send OTP";
    pub const WELCOME: &str = "Welcome — redirecting";
    pub const INVALID_CODE: &str = "Invalid code";
    // The two advisories intentionally diverge between the request and
    // verify paths; unifying them is pending a copy decision.
    pub const NO_BACKEND_REQUEST: &str = "No backend — give this to your network admin";
    pub const NO_BACKEND_VERIFY: &str = "No backend — give this file to the network admin";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_basic_addresses() {
        assert!(valid_email("a@b.com"));
        assert!(valid_email("user.name+tag@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email(""));
        assert!(!valid_email("missing@tld"));
        assert!(!valid_email("spaces in@address.com"));
        assert!(!valid_email("@no-local.com"));
    }

    #[test]
    fn request_gate_trims_and_passes_valid_addresses() {
        assert_eq!(request_gate("  a@b.com  "), Ok("a@b.com".to_string()));
    }

    #[test]
    fn request_gate_blocks_malformed_addresses() {
        assert_eq!(request_gate("not-an-email"), Err(messages::ENTER_VALID_EMAIL));
        assert_eq!(request_gate("   "), Err(messages::ENTER_VALID_EMAIL));
    }

    #[test]
    fn verify_gate_checks_terms_before_fields() {
        // Unchecked terms blocks first, even when the fields are also
        // empty
        assert_eq!(verify_gate(false, "", ""), Err(messages::ACCEPT_TERMS));
        assert_eq!(
            verify_gate(false, "a@b.com", "123456"),
            Err(messages::ACCEPT_TERMS)
        );
    }

    #[test]
    fn verify_gate_requires_both_fields() {
        assert_eq!(
            verify_gate(true, "a@b.com", ""),
            Err(messages::EMAIL_OTP_REQUIRED)
        );
        assert_eq!(
            verify_gate(true, "", "123456"),
            Err(messages::EMAIL_OTP_REQUIRED)
        );
        assert_eq!(
            verify_gate(true, "   ", "123456"),
            Err(messages::EMAIL_OTP_REQUIRED)
        );
    }

    #[test]
    fn verify_gate_trims_and_passes_complete_input() {
        assert_eq!(
            verify_gate(true, " a@b.com ", " 123456 "),
            Ok(("a@b.com".to_string(), "123456".to_string()))
        );
    }
}
