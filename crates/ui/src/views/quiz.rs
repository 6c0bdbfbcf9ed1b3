use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Link;
use ispace_core::model::{Level, Topic};
use services::ProgressGate;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{Notice, ViewError, ViewState, view_state_from_resource};
use crate::vm::{NOTICE_TTL, NoticeKind, NoticeSlot, NoticeVm};

#[derive(Clone, Debug, PartialEq)]
struct QuizData {
    topic: Topic,
    level: Level,
    playable: bool,
}

async fn load_quiz(gate: &ProgressGate, topic: &str, level: &str) -> Result<QuizData, ViewError> {
    let topic = Topic::new(topic).map_err(|_| ViewError::InvalidQuiz)?;
    let level = level.parse::<Level>().map_err(|_| ViewError::InvalidQuiz)?;
    let playable = gate.can_enter(&topic, level).await;
    Ok(QuizData {
        topic,
        level,
        playable,
    })
}

/// Landing page for a quiz level.
///
/// The quiz runner reports a finished level through the "Finish level"
/// action. Locked levels are refused even when the URL is opened directly.
#[component]
pub fn QuizView(topic: String, level: String) -> Element {
    let ctx = use_context::<AppContext>();
    let gate = ctx.progress_gate();
    let mut notice = use_signal(NoticeSlot::default);

    let resource = use_resource(use_reactive((&topic, &level), move |(topic, level)| {
        let gate = Arc::clone(&gate);
        async move { load_quiz(&gate, &topic, &level).await }
    }));

    let body = match view_state_from_resource(&resource) {
        ViewState::Idle => rsx! {
            p { "Idle" }
        },
        ViewState::Loading => rsx! {
            p { "Loading..." }
        },
        ViewState::Ready(data) if !data.playable => rsx! {
            p { class: "locked-message",
                "{data.level.label()} is locked. Finish the previous level of {data.topic.display_name()} first."
            }
        },
        ViewState::Ready(data) => {
            let heading = format!("{}: {}", data.topic.display_name(), data.level.label());
            let on_finish = move |_: Event<MouseData>| {
                let gate = ctx.progress_gate();
                let topic = data.topic.clone();
                let level = data.level;
                spawn(async move {
                    let next = match gate.complete_level(&topic, level).await {
                        Ok(_) => NoticeVm::new(
                            format!("{} completed!", level.label()),
                            NoticeKind::Success,
                        ),
                        Err(err) => {
                            warn!(error = %err, %topic, %level, "could not record completion");
                            NoticeVm::new("Progress could not be saved.", NoticeKind::Error)
                        }
                    };
                    let id = notice.write().show(next);
                    tokio::time::sleep(NOTICE_TTL).await;
                    notice.write().expire(id);
                });
            };
            rsx! {
                h3 { "{heading}" }
                button { class: "finish-level", onclick: on_finish, "Finish level" }
            }
        }
        ViewState::Error(err) => rsx! {
            p { "{err.message()}" }
        },
    };

    rsx! {
        div { class: "page",
            {body}
            if let Some(current) = notice.read().current().cloned() {
                Notice { notice: current }
            }
            Link { class: "nav-link", to: Route::Home {}, "Back to planets" }
        }
    }
}
