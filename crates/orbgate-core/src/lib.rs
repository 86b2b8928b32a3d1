//! Orbgate Core Library
//!
//! Everything behind the Orbgate portal window that does not need a
//! rendering surface: the drifting orb-field simulation, input
//! validation, the shared status-notice model, focus-trap arithmetic,
//! and the HTTP client for the two OTP backend endpoints.
//!
//! ## Overview
//!
//! Orbgate is a login-style portal: a decorative animated background of
//! soft radial-gradient orbs behind an email/OTP form and a
//! keyboard-accessible terms dialog. The backend that actually mints
//! and checks one-time codes is an external collaborator reached over
//! HTTP; this crate only speaks to it, it never implements it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use orbgate_core::{OrbField, PortalApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Pure simulation, no window required
//!     let mut field = OrbField::new(1280.0, 800.0);
//!     field.step();
//!
//!     // Backend client
//!     let api = PortalApi::new("http://127.0.0.1:8787");
//!     api.request_otp("user@example.com").await?;
//!     let redirect = api.verify_otp("user@example.com", "123456").await?;
//!     println!("redirect to {redirect}");
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod focus;
pub mod notify;
pub mod orbs;
pub mod validate;

// Re-exports
pub use api::{PortalApi, DEFAULT_REDIRECT};
pub use error::{PortalError, PortalResult};
pub use focus::FocusCycle;
pub use notify::{Notice, Severity};
pub use orbs::{Orb, OrbField, ORB_COUNT, WRAP_MARGIN};
pub use validate::{messages, request_gate, valid_email, verify_gate};
