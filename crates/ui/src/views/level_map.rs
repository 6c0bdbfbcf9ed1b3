use dioxus::prelude::*;
use ispace_core::model::{Level, Topic};

use crate::vm::LevelLinkVm;

/// Level overlay for one topic.
///
/// Only playable levels are clickable; locked tiles carry a lock marker and
/// no quiz target.
#[component]
pub fn LevelMap(
    topic: Topic,
    links: Vec<LevelLinkVm>,
    on_select: Option<EventHandler<Level>>,
) -> Element {
    rsx! {
        div { id: "level-map-overlay", class: "level-map-overlay",
            h3 { "{topic.display_name()}" }
            div { class: "level-map",
                for link in links {
                    if let Some(href) = link.href.clone() {
                        button {
                            key: "{link.level}",
                            id: "level-{link.level}",
                            class: link.class(),
                            "data-href": href,
                            onclick: move |_| {
                                if let Some(handler) = on_select {
                                    handler.call(link.level);
                                }
                            },
                            span { class: "level-label", "{link.label}" }
                            span { class: "level-status", "{link.status_text()}" }
                        }
                    } else {
                        span {
                            key: "{link.level}",
                            id: "level-{link.level}",
                            class: link.class(),
                            "aria-disabled": "true",
                            span { class: "level-label", "{link.label}" }
                            span { id: "lock-{link.level}", class: "lock", "🔒" }
                        }
                    }
                }
            }
        }
    }
}
