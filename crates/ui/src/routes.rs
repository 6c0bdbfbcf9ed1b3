use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator};
use tracing::warn;

use crate::context::AppContext;
use crate::views::{HomeView, QuizView, StarField};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz?:topic&:level", QuizView)] Quiz { topic: String, level: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "header",
                StarField {}
                h1 { "iSpace Math" }
            }
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let auth = ctx.auth();
    let mut status = use_resource(move || {
        let auth = auth.clone();
        async move { auth.status().await }
    });
    let logged_in = status
        .read()
        .as_ref()
        .is_some_and(|status| status.is_logged_in());

    let on_logout = move |evt: Event<MouseData>| {
        evt.prevent_default();
        let auth = ctx.auth();
        spawn(async move {
            match auth.logout().await {
                Ok(target) => {
                    status.restart();
                    let route = target.parse::<Route>().unwrap_or(Route::Home {});
                    navigator.push(route);
                }
                Err(err) => warn!(error = %err, "logout failed"),
            }
        });
    };

    rsx! {
        nav { class: "sidebar",
            ul {
                li { Link { class: "nav-link", active_class: "active", to: Route::Home {}, "Home" } }
            }
            if logged_in {
                a { id: "logout-link", class: "nav-link", href: "#", onclick: on_logout, "Logout" }
            }
        }
    }
}
