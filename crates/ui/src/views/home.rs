use dioxus::prelude::*;
use dioxus_router::use_navigator;
use ispace_core::model::{Level, Topic};
use services::TopicOverview;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{LevelMap, ViewError, ViewState, view_state_from_resource};
use crate::vm::{TopicCardVm, map_level_links, map_topic_cards};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    cards: Vec<TopicCardVm>,
    overview: Vec<TopicOverview>,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let gate = ctx.progress_gate();
    let navigator = use_navigator();
    let mut selected = use_signal(|| None::<Topic>);

    let resource = use_resource(move || {
        let gate = gate.clone();
        async move {
            let overview = gate.overview(&Topic::catalog()).await;
            let cards = map_topic_cards(&overview);
            Ok::<_, ViewError>(HomeData { cards, overview })
        }
    });

    let body = match view_state_from_resource(&resource) {
        ViewState::Idle => rsx! {
            p { "Idle" }
        },
        ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Ready(data) => {
            let overlay = selected().and_then(|topic| {
                data.overview
                    .iter()
                    .find(|item| item.topic == topic)
                    .map(|item| map_level_links(&topic, &item.unlock))
                    .map(|links| (topic, links))
            });
            rsx! {
                div { class: "planets",
                    for card in data.cards {
                        PlanetButton {
                            key: "{card.topic}",
                            card: card.clone(),
                            on_pick: move |topic: Topic| selected.set(Some(topic)),
                        }
                    }
                }
                if let Some((topic, links)) = overlay {
                    LevelMap {
                        topic: topic.clone(),
                        links,
                        on_select: move |level: Level| {
                            navigator.push(Route::Quiz {
                                topic: topic.to_string(),
                                level: level.to_string(),
                            });
                        },
                    }
                }
            }
        }
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
    };

    rsx! {
        div { class: "page",
            h2 { "Choose a planet" }
            {body}
        }
    }
}

#[component]
fn PlanetButton(card: TopicCardVm, on_pick: EventHandler<Topic>) -> Element {
    let topic = card.topic.clone();
    rsx! {
        button {
            class: "planet-with-label",
            "data-topic": "{card.topic}",
            onclick: move |_| on_pick.call(topic.clone()),
            span { class: "planet-name", "{card.name}" }
            span { class: "planet-progress", "{card.progress_label()}" }
        }
    }
}
