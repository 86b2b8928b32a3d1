//! Backend client context for Orbgate.
//!
//! Provides the PortalApi instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let api = use_api();
//! let message = api().request_otp("user@example.com").await?;
//! ```

use dioxus::prelude::*;
use orbgate_core::PortalApi;

/// Hook to access the OTP backend client from context.
///
/// The client is cheap to clone; call the signal to get an owned copy
/// for use inside spawned futures.
pub fn use_api() -> Signal<PortalApi> {
    use_context::<Signal<PortalApi>>()
}
