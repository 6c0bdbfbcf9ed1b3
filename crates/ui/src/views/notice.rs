use dioxus::prelude::*;

use crate::vm::NoticeVm;

#[component]
pub fn Notice(notice: NoticeVm) -> Element {
    rsx! {
        div { class: notice.class(), role: "status", "{notice.message}" }
    }
}
