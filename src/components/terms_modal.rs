//! Terms & Conditions dialog.
//!
//! Keyboard-accessible modal: Escape closes, Tab and Shift+Tab cycle
//! focus through the dialog's three controls (close, accept, decline)
//! and wrap at the ends. The wrapping arithmetic lives in
//! `orbgate_core::focus`; this component moves the actual focus.
//!
//! The page owns the open/closed state and restores focus to the
//! opener when the dialog reports a close; accept and decline also
//! write the shared agreement checkbox before closing.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use orbgate_core::FocusCycle;

/// Delay before focus lands on the close control after opening.
const FOCUS_DELAY: Duration = Duration::from_millis(50);

/// Ring order matches DOM order: close, accept, decline.
const CLOSE: usize = 0;
const ACCEPT: usize = 1;
const DECLINE: usize = 2;
const CONTROL_COUNT: usize = 3;

/// Focus-trapped terms dialog. Rendered only while open.
#[component]
pub fn TermsModal(mut agreed: Signal<bool>, on_close: EventHandler<()>) -> Element {
    let mut controls = use_signal(|| vec![None::<Rc<MountedData>>; CONTROL_COUNT]);
    let mut cycle = use_signal(|| FocusCycle::new(CONTROL_COUNT));

    // Focus moves to the close control shortly after the dialog appears
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(FOCUS_DELAY).await;
            let close = controls.read().get(CLOSE).cloned().flatten();
            if let Some(el) = close {
                let _ = el.set_focus(true).await;
            }
        });
    });

    let focus_control = move |index: usize| {
        let target = controls.read().get(index).cloned().flatten();
        if let Some(el) = target {
            spawn(async move {
                let _ = el.set_focus(true).await;
            });
        }
    };

    let on_keydown = move |e: Event<KeyboardData>| match e.key() {
        Key::Escape => on_close.call(()),
        Key::Tab => {
            e.prevent_default();
            let index = if e.modifiers().contains(Modifiers::SHIFT) {
                cycle.write().previous()
            } else {
                cycle.write().next()
            };
            focus_control(index);
        }
        _ => {}
    };

    let accept = move |_| {
        agreed.set(true);
        on_close.call(());
    };
    let decline = move |_| {
        agreed.set(false);
        on_close.call(());
    };

    rsx! {
        div {
            class: "terms-modal",
            role: "dialog",
            "aria-modal": "true",
            "aria-labelledby": "termsTitle",
            onkeydown: on_keydown,

            div {
                class: "terms-backdrop",
                onclick: move |_| on_close.call(()),
            }

            div { class: "terms-panel",
                header { class: "terms-header",
                    h2 { id: "termsTitle", class: "terms-title", "Terms & Conditions" }
                    button {
                        class: "terms-close",
                        aria_label: "Close terms",
                        onmounted: move |e| controls.write()[CLOSE] = Some(e.data()),
                        onfocusin: move |_| cycle.write().focus(CLOSE),
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "terms-body",
                    p {
                        "Orbgate sends a one-time code to the address you provide and "
                        "uses it solely to complete this sign-in. Codes expire after a "
                        "short window and are never reused."
                    }
                    p {
                        "By continuing you agree that the portal may contact the "
                        "configured backend on your behalf and that no session is "
                        "retained after this window closes."
                    }
                }

                footer { class: "terms-actions",
                    button {
                        class: "btn-primary",
                        onmounted: move |e| controls.write()[ACCEPT] = Some(e.data()),
                        onfocusin: move |_| cycle.write().focus(ACCEPT),
                        onclick: accept,
                        "Accept"
                    }
                    button {
                        class: "btn-secondary",
                        onmounted: move |e| controls.write()[DECLINE] = Some(e.data()),
                        onfocusin: move |_| cycle.write().focus(DECLINE),
                        onclick: decline,
                        "Decline"
                    }
                }
            }
        }
    }
}
