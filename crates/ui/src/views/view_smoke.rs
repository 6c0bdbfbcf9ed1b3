use dioxus::prelude::*;
use ispace_core::model::{Level, LevelState, Topic, UnlockState};

use super::test_harness::{ViewKind, drive_dom, setup_view_harness};
use crate::views::{LevelMap, Notice, StarLayer};
use crate::vm::{NoticeKind, NoticeVm, StarVm, map_level_links};

fn render_component(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    dioxus_ssr::render(&dom)
}

async fn render_until(harness: &mut super::test_harness::ViewHarness, needle: &str) -> String {
    harness.rebuild();
    let mut html = harness.render();
    for _ in 0..10 {
        if html.contains(needle) {
            break;
        }
        harness.drive_async().await;
        html = harness.render();
    }
    html
}

#[test]
fn level_map_locks_medium_and_hard_for_fresh_topic() {
    fn app() -> Element {
        let topic = Topic::new("algebra").unwrap();
        let links = map_level_links(&topic, &UnlockState::default());
        rsx! { LevelMap { topic, links } }
    }

    let html = render_component(app);
    assert!(html.contains("Algebra"), "missing topic name in {html}");
    assert!(
        html.contains("/quiz?topic=algebra&amp;level=easy")
            || html.contains("/quiz?topic=algebra&level=easy"),
        "missing easy link in {html}"
    );
    assert_eq!(html.matches("🔒").count(), 2, "expected two locks in {html}");
    assert!(!html.contains("level=medium"), "medium should be locked in {html}");
}

#[test]
fn level_map_unlocks_everything_after_medium() {
    fn app() -> Element {
        let topic = Topic::new("triangles").unwrap();
        let unlock = UnlockState::from_progress(&LevelState {
            easy: true,
            medium: true,
            hard: false,
        });
        let links = map_level_links(&topic, &unlock);
        rsx! { LevelMap { topic, links } }
    }

    let html = render_component(app);
    assert!(!html.contains("🔒"), "no level should be locked in {html}");
    assert!(html.contains("level=hard"), "missing hard link in {html}");
    assert_eq!(html.matches("Completed").count(), 2, "in {html}");
}

#[test]
fn star_layer_renders_each_star() {
    fn app() -> Element {
        let stars = vec![
            StarVm {
                left_pct: 10.0,
                top_pct: 20.0,
                delay_secs: 0.5,
                duration_secs: 1.5,
            };
            3
        ];
        rsx! { StarLayer { stars } }
    }

    let html = render_component(app);
    assert_eq!(html.matches("class=\"star\"").count(), 3, "in {html}");
    assert!(html.contains("left: 10.00%"), "missing style in {html}");
}

#[test]
fn notice_renders_kind_class() {
    fn app() -> Element {
        rsx! { Notice { notice: NoticeVm::new("Saved", NoticeKind::Success) } }
    }

    let html = render_component(app);
    assert!(html.contains("notification-success"), "in {html}");
    assert!(html.contains("Saved"), "in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_topic_progress() {
    let mut harness = setup_view_harness(ViewKind::Home);
    let algebra = Topic::new("algebra").unwrap();
    harness
        .services
        .progress_gate()
        .complete_level(&algebra, Level::Easy)
        .await
        .expect("complete");

    let html = render_until(&mut harness, "planet-progress").await;
    assert!(html.contains("Algebra"), "missing planet in {html}");
    assert!(html.contains("1/3"), "missing algebra progress in {html}");
    assert!(html.contains("Triangles"), "missing planet in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_refuses_locked_level() {
    let mut harness = setup_view_harness(ViewKind::Quiz {
        topic: "algebra".into(),
        level: "hard".into(),
    });

    let html = render_until(&mut harness, "is locked").await;
    assert!(html.contains("Hard is locked"), "missing lock message in {html}");
    assert!(!html.contains("Finish level"), "locked quiz offered completion in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_offers_completion_for_unlocked_level() {
    let mut harness = setup_view_harness(ViewKind::Quiz {
        topic: "algebra".into(),
        level: "easy".into(),
    });

    let html = render_until(&mut harness, "Finish level").await;
    assert!(html.contains("Algebra: Easy"), "missing heading in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_rejects_unknown_level() {
    let mut harness = setup_view_harness(ViewKind::Quiz {
        topic: "algebra".into(),
        level: "expert".into(),
    });

    let html = render_until(&mut harness, "does not exist").await;
    assert!(html.contains("That quiz does not exist."), "in {html}");
}
