use dioxus::prelude::*;

use crate::{
    config::Config,
    domain::{RouteRecord, Session},
    ui::{
        components::toast::{Toast, ToastMessage},
        pages::{PlannerPage, SavingsPage},
        shell::Shell,
    },
    util::{assets, routes::load_routes},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Planner {},
    #[route("/savings")]
    Savings {},
}

/// Configuration and route dataset, loaded once per window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Workspace {
    pub config: Config,
    pub routes: Vec<RouteRecord>,
    /// Set when no plan can be produced at all.
    pub blocking_error: Option<String>,
}

impl Workspace {
    pub fn load() -> Self {
        let config = match Config::try_from_env() {
            Ok(config) => config,
            Err(err) => {
                tracing::error!(%err, "configuration rejected");
                return Self {
                    blocking_error: Some(err.to_string()),
                    ..Self::default()
                };
            }
        };

        let mut blocking_error = config.api_key().err().map(|err| err.to_string());
        let routes = load_routes(&config).unwrap_or_else(|err| {
            tracing::error!(%err, "route dataset unavailable");
            blocking_error.get_or_insert_with(|| err.to_string());
            Vec::new()
        });

        Self {
            config,
            routes,
            blocking_error,
        }
    }
}

#[component]
pub fn App() -> Element {
    let workspace = use_signal(Workspace::load);
    use_context_provider(|| workspace);

    // One session per window: its own ledger and history.
    let session = use_signal(Session::new);
    use_context_provider(|| session);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Planner() -> Element {
    rsx! { Shell { PlannerPage {} } }
}

#[component]
pub fn Savings() -> Element {
    rsx! { Shell { SavingsPage {} } }
}
