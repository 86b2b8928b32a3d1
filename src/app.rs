use std::str::FromStr;

use dioxus::prelude::*;
use orbgate_core::PortalApi;

use crate::pages::{Arrival, Connected, Portal};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Portal page with the OTP login form
/// - `/connected` - Default post-login destination
/// - anything else - Arrival page for backend-provided redirects
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Portal {},
    #[route("/connected")]
    Connected {},
    #[route("/:..segments")]
    Arrival { segments: Vec<String> },
}

/// Resolve a backend-provided redirect target to a route.
///
/// Targets that do not parse as an in-app path fall back to
/// `/connected`.
pub fn redirect_route(target: &str) -> Route {
    Route::from_str(target).unwrap_or(Route::Connected {})
}

/// Root application component.
///
/// Provides global styles, the backend client context, and routing.
#[component]
pub fn App() -> Element {
    let api: Signal<PortalApi> = use_signal(|| PortalApi::new(crate::get_api_url()));

    // Provide the backend client to all child components
    use_context_provider(|| api);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_redirect_resolves_to_connected() {
        assert_eq!(redirect_route("/connected"), Route::Connected {});
    }

    #[test]
    fn backend_redirect_resolves_to_arrival() {
        assert_eq!(
            redirect_route("/dashboard"),
            Route::Arrival {
                segments: vec!["dashboard".to_string()]
            }
        );
    }

    #[test]
    fn garbage_redirect_falls_back_to_connected() {
        assert_eq!(redirect_route("not a path"), Route::Connected {});
    }
}
