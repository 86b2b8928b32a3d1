//! Animated orb background for the portal.
//!
//! The simulation lives in `orbgate_core::orbs`; this component owns
//! the frame cadence and the painting. The layer sizes itself from its
//! own measured content box, so until the first resize observation
//! arrives it renders nothing and does no work.

use std::time::Duration;

use dioxus::prelude::*;
use orbgate_core::{Orb, OrbField};

/// Desktop stand-in for frame scheduling, roughly 60 fps.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Inline CSS painting one orb as its three-stop radial gradient.
fn orb_style(orb: &Orb) -> String {
    let d = orb.radius * 2.0;
    format!(
        "left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
         background:radial-gradient(circle, \
         hsla({h:.0},95%,60%,{a:.3}) 0%, \
         hsla({h:.0},90%,45%,{a2:.3}) 40%, \
         hsla({h:.0},80%,25%,0) 100%);",
        orb.x - orb.radius,
        orb.y - orb.radius,
        d,
        d,
        h = orb.hue,
        a = orb.alpha,
        a2 = orb.alpha * 0.6,
    )
}

/// Full-viewport layer of drifting gradient orbs.
#[component]
pub fn OrbLayer() -> Element {
    let mut field = use_signal(|| None::<OrbField>);

    // Frame loop. Runs for the lifetime of the component; Dioxus drops
    // the task when the layer unmounts.
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(FRAME_INTERVAL).await;
                if let Some(f) = field.write().as_mut() {
                    f.step();
                }
            }
        });
    });

    let orbs: Vec<Orb> = field
        .read()
        .as_ref()
        .map(|f| f.orbs().to_vec())
        .unwrap_or_default();

    rsx! {
        div {
            class: "orb-layer",
            "aria-hidden": "true",
            // The first observation seeds the field; later ones
            // regenerate it at the new size.
            onresize: move |e| {
                let Ok(size) = e.data().get_content_box_size() else {
                    return;
                };
                let (w, h) = (size.width, size.height);
                if w <= 0.0 || h <= 0.0 {
                    return;
                }
                let mut slot = field.write();
                match slot.as_mut() {
                    Some(f) => f.resize(w, h),
                    None => *slot = Some(OrbField::new(w, h)),
                }
            },
            for orb in orbs {
                div { class: "orb", style: "{orb_style(&orb)}" }
            }
        }
    }
}
