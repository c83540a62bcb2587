use dioxus::prelude::*;

use crate::app::{Route, Workspace};
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let workspace = use_context::<Signal<Workspace>>();
    let current_route = use_route::<Route>();
    let nav = use_navigator();

    let (origin, blocking_error) =
        workspace.with(|w| (w.config.origin_label.clone(), w.blocking_error.clone()));
    let version = version_label();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div {
                    h1 { class: "app-title", "{APP_NAME}" }
                    p { class: theme::MUTED, "Outbound from {origin} · {version}" }
                }
                nav { class: "nav",
                    NavButton { active: matches!(current_route, Route::Planner {}), onclick: move |_| { nav.push(Route::Planner {}); }, label: "Planner" }
                    NavButton { active: matches!(current_route, Route::Savings {}), onclick: move |_| { nav.push(Route::Savings {}); }, label: "Savings" }
                }
            }
            if let Some(message) = blocking_error {
                div { class: "banner banner-error",
                    strong { "Planning unavailable. " }
                    span { "{message}" }
                }
            }
            main { class: "content",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    rsx! {
        button {
            class: theme::nav_button(active),
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
