use dioxus::prelude::*;

use crate::vm::{HEADER_STAR_COUNT, StarVm, scatter_stars};

/// Twinkling stars behind the header. Positions are drawn once per mount.
#[component]
pub fn StarField() -> Element {
    let stars = use_hook(|| scatter_stars(&mut rand::rng(), HEADER_STAR_COUNT));
    rsx! { StarLayer { stars } }
}

#[component]
pub fn StarLayer(stars: Vec<StarVm>) -> Element {
    rsx! {
        div { class: "stars", "aria-hidden": "true",
            for (idx, star) in stars.iter().enumerate() {
                div { key: "{idx}", class: "star", style: star.style() }
            }
        }
    }
}
