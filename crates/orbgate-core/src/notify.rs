//! The portal's single status line.
//!
//! Both form operations write the same notice slot; whoever writes last
//! wins and only one message is ever visible. That is deliberate,
//! inherited portal behavior, not an oversight.

/// How a notice should read to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    /// Display color for this severity.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Error => "#ff8b8b",
            Severity::Success => "#7ef6d6",
        }
    }
}

/// A single status message. Last write wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub severity: Severity,
}

impl Notice {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_carry_the_portal_palette() {
        assert_eq!(Severity::Error.color(), "#ff8b8b");
        assert_eq!(Severity::Success.color(), "#7ef6d6");
    }

    #[test]
    fn constructors_tag_severity() {
        assert_eq!(Notice::error("nope").severity, Severity::Error);
        assert_eq!(Notice::success("sent").severity, Severity::Success);
    }
}
