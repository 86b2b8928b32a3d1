//! The portal's email/OTP form.
//!
//! Two user-triggered operations, each Idle -> Busy -> outcome -> Idle:
//! request a code for an email address, then verify the code the user
//! typed. Deliberately no in-flight guard: a second click during a
//! pending request issues a second request and the last response to
//! resolve wins the shared status line and button state, matching the
//! portal's inherited behavior.

use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use orbgate_core::{messages, request_gate, verify_gate, Notice, PortalError};

use super::StatusNotice;
use crate::app::redirect_route;
use crate::context::use_api;

/// Seconds before the "Get OTP" button offers a resend.
const RESEND_COOLDOWN_SECS: u32 = 60;
/// Pause between the welcome notice and the navigation away.
const REDIRECT_DELAY: Duration = Duration::from_millis(900);
/// Focus lands on the email field shortly after the page settles.
const INITIAL_FOCUS_DELAY: Duration = Duration::from_millis(300);

/// Label for the "Get OTP" button: a ticking countdown owns the label,
/// then the busy indicator, then idle.
fn otp_button_label(countdown: Option<u32>, sending: bool) -> String {
    if let Some(secs) = countdown {
        format!("{secs}s")
    } else if sending {
        "Sending...".to_string()
    } else {
        "Get OTP".to_string()
    }
}

/// Email/OTP login form.
///
/// The agreement checkbox state lives in the portal page because the
/// terms modal also writes it; the form only renders and toggles it.
#[component]
pub fn PortalForm(
    mut agreed: Signal<bool>,
    on_open_terms: EventHandler<Option<Rc<MountedData>>>,
) -> Element {
    let api = use_api();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut otp = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut verifying = use_signal(|| false);
    let mut countdown = use_signal(|| None::<u32>);
    let mut notice = use_signal(|| None::<Notice>);
    let mut email_input = use_signal(|| None::<Rc<MountedData>>);
    let mut terms_link = use_signal(|| None::<Rc<MountedData>>);

    // Land focus on the email field once the page has settled
    use_effect(move || {
        spawn(async move {
            tokio::time::sleep(INITIAL_FOCUS_DELAY).await;
            if let Some(el) = email_input() {
                let _ = el.set_focus(true).await;
            }
        });
    });

    let request_code = move |_| {
        notice.set(None);
        let address = match request_gate(&email()) {
            Ok(address) => address,
            Err(block) => {
                notice.set(Some(Notice::error(block)));
                if let Some(el) = email_input() {
                    spawn(async move {
                        let _ = el.set_focus(true).await;
                    });
                }
                return;
            }
        };

        sending.set(true);
        spawn(async move {
            match api().request_otp(&address).await {
                // The success body's optional message is deliberately
                // unused; the portal shows its own copy.
                Ok(_) => {
                    notice.set(Some(Notice::success(messages::OTP_SENT)));
                    // The cooldown ticks independently of the request
                    // lifecycle; a retry mid-countdown starts a second
                    // ticker and the last writer owns the label.
                    spawn(async move {
                        let mut secs = RESEND_COOLDOWN_SECS;
                        while secs > 0 {
                            countdown.set(Some(secs));
                            tokio::time::sleep(Duration::from_secs(1)).await;
                            secs -= 1;
                        }
                        countdown.set(None);
                    });
                }
                Err(PortalError::Rejected { message, .. }) => {
                    notice.set(Some(Notice::error(
                        message.unwrap_or_else(|| messages::SEND_FAILED.to_string()),
                    )));
                }
                Err(e @ PortalError::Transport(_)) => {
                    tracing::warn!("request-otp failed: {e}");
                    notice.set(Some(Notice::error(messages::NO_BACKEND_REQUEST)));
                }
            }
            sending.set(false);
        });
    };

    let verify_code = move |_| {
        notice.set(None);
        let (address, code) = match verify_gate(agreed(), &email(), &otp()) {
            Ok(input) => input,
            Err(block) => {
                notice.set(Some(Notice::error(block)));
                return;
            }
        };

        verifying.set(true);
        spawn(async move {
            match api().verify_otp(&address, &code).await {
                Ok(redirect) => {
                    notice.set(Some(Notice::success(messages::WELCOME)));
                    // Button comes back before the delayed navigation
                    verifying.set(false);
                    tokio::time::sleep(REDIRECT_DELAY).await;
                    navigator.push(redirect_route(&redirect));
                }
                Err(PortalError::Rejected { message, .. }) => {
                    notice.set(Some(Notice::error(
                        message.unwrap_or_else(|| messages::INVALID_CODE.to_string()),
                    )));
                    verifying.set(false);
                }
                Err(e @ PortalError::Transport(_)) => {
                    tracing::warn!("verify-otp failed: {e}");
                    notice.set(Some(Notice::error(messages::NO_BACKEND_VERIFY)));
                    verifying.set(false);
                }
            }
        });
    };

    let otp_label = otp_button_label(countdown(), sending());

    rsx! {
        div { class: "portal-form",
            label { class: "portal-label", r#for: "email", "Email" }
            div { class: "portal-row",
                input {
                    id: "email",
                    class: "portal-input",
                    r#type: "email",
                    placeholder: "you@example.com",
                    autocomplete: "email",
                    value: "{email}",
                    onmounted: move |e| email_input.set(Some(e.data())),
                    oninput: move |e| email.set(e.value()),
                }
                button {
                    class: "btn-ghost",
                    disabled: sending(),
                    onclick: request_code,
                    "{otp_label}"
                }
            }

            label { class: "portal-label", r#for: "otp", "One-time code" }
            input {
                id: "otp",
                class: "portal-input",
                r#type: "text",
                inputmode: "numeric",
                placeholder: "6-digit code",
                autocomplete: "one-time-code",
                value: "{otp}",
                oninput: move |e| otp.set(e.value()),
            }

            div { class: "portal-agree",
                input {
                    id: "agree",
                    r#type: "checkbox",
                    checked: agreed(),
                    oninput: move |e| agreed.set(e.checked()),
                }
                label { r#for: "agree",
                    "I accept the "
                    button {
                        class: "terms-link",
                        onmounted: move |e| terms_link.set(Some(e.data())),
                        onclick: move |_| on_open_terms.call(terms_link()),
                        "Terms & Conditions"
                    }
                }
            }

            button {
                class: "btn-primary",
                disabled: verifying(),
                onclick: verify_code,
                if verifying() { "Verifying..." } else { "Log in" }
            }

            StatusNotice { notice: notice() }
        }
    }
}
