//! Color constants for the portal's night-sky palette.

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const NIGHT: &str = "#060913";
pub const NIGHT_PANEL: &str = "rgba(13, 18, 34, 0.88)";
pub const NIGHT_BORDER: &str = "rgba(126, 246, 214, 0.14)";

// === AURORA (Accents) ===
pub const AURORA_TEAL: &str = "#7ef6d6";
pub const AURORA_BLUE: &str = "#6ea8ff";
pub const AURORA_VIOLET: &str = "#a78bfa";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#e8ecf8";
pub const TEXT_SECONDARY: &str = "rgba(232, 236, 248, 0.7)";
pub const TEXT_MUTED: &str = "rgba(232, 236, 248, 0.45)";

// === SEMANTIC (status line colors live in orbgate-core::notify) ===
pub const ERROR: &str = "#ff8b8b";
pub const SUCCESS: &str = "#7ef6d6";
