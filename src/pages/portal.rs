//! Portal page - the login gateway.
//!
//! Composes the three independent pieces: the orb background, the
//! email/OTP form, and the terms dialog. This page owns the state the
//! pieces share - the agreement checkbox and the modal's open flag -
//! and remembers which element opened the dialog so focus can return
//! there on close.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::components::{OrbLayer, PortalForm, TermsModal};

/// Portal page component.
#[component]
pub fn Portal() -> Element {
    let agreed = use_signal(|| false);
    let mut show_terms = use_signal(|| false);
    let mut restore_focus = use_signal(|| None::<Rc<MountedData>>);

    let open_terms = move |trigger: Option<Rc<MountedData>>| {
        restore_focus.set(trigger);
        show_terms.set(true);
    };

    let close_terms = move |_: ()| {
        show_terms.set(false);
        if let Some(el) = restore_focus() {
            spawn(async move {
                let _ = el.set_focus(true).await;
            });
        }
    };

    // The modal-open class suppresses background scrolling while the
    // dialog is up.
    let page_class = if show_terms() {
        "portal modal-open"
    } else {
        "portal"
    };

    rsx! {
        main { class: page_class,
            OrbLayer {}

            section { class: "portal-card",
                h1 { class: "portal-title", "Orbgate" }
                p { class: "portal-tagline", "sign in with a one-time code" }
                PortalForm { agreed, on_open_terms: open_terms }
            }

            if show_terms() {
                TermsModal { agreed, on_close: close_terms }
            }
        }
    }
}
