//! Post-login destination pages.
//!
//! `/connected` is the default landing after a successful verify; any
//! other backend-provided redirect path renders the Arrival page.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::OrbLayer;

/// Default destination after a successful login.
#[component]
pub fn Connected() -> Element {
    rsx! {
        main { class: "portal",
            OrbLayer {}
            section { class: "portal-card arrival-card",
                h1 { class: "portal-title", "Connected" }
                p { class: "portal-tagline", "you're signed in" }
                Link { class: "btn-secondary arrival-back", to: Route::Portal {}, "Back to portal" }
            }
        }
    }
}

/// Landing for backend redirects that name a path of their own.
#[component]
pub fn Arrival(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        main { class: "portal",
            OrbLayer {}
            section { class: "portal-card arrival-card",
                h1 { class: "portal-title", "Connected" }
                p { class: "portal-tagline", "arrived at {path}" }
                Link { class: "btn-secondary arrival-back", to: Route::Portal {}, "Back to portal" }
            }
        }
    }
}
