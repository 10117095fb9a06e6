use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use store::{AppConfig, AppState};

use views::{Home, NotFound, Shorts};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/shorts")]
    Shorts {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("startup: logger init failed: {e}");
    }
    dioxus::launch(App);
}

/// Build the shared state from the environment, falling back to the seeded
/// catalogue when the remote store can't be set up.
fn app_state() -> AppState {
    match AppState::from_config(AppConfig::from_env()) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("startup: store unavailable, using local catalogue: {:#}", e);
            AppState::local()
        }
    }
}

#[component]
fn App() -> Element {
    use_context_provider(app_state);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::AstroTheme {}
        ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
