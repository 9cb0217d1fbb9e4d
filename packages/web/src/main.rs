use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::{DirectoryProvider, NotificationsProvider};
use views::Search;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Search {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logging: {e}");
    }
    tracing::info!("Starting MeetYou web front-end");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NotificationsProvider {
            DirectoryProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Unknown paths go back to the search page.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::warn!("No route for /{}", segments.join("/"));
    let nav = use_navigator();
    nav.replace(Route::Search {});
    rsx! {}
}
