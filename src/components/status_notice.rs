//! The portal form's single status line.
//!
//! Renders whatever notice was written last; both form operations share
//! this slot and last write wins.

use dioxus::prelude::*;
use orbgate_core::Notice;

/// Status line under the form controls. Reserves its height even when
/// empty so the card does not jump when a message appears.
#[component]
pub fn StatusNotice(notice: Option<Notice>) -> Element {
    rsx! {
        p {
            class: "portal-msg",
            role: "status",
            "aria-live": "polite",
            if let Some(n) = notice {
                span { style: "color: {n.severity.color()};", "{n.text}" }
            }
        }
    }
}
