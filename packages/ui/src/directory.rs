//! Shared directory constructor for all platforms.
//!
//! Every platform talks to the same REST backend through [`api::ApiClient`];
//! only the way settings are found differs (see [`api::Settings`]).

use api::{ApiClient, Settings};
use dioxus::prelude::*;

/// Create a client for the configured backend.
pub fn make_directory() -> ApiClient {
    let settings = Settings::load();
    tracing::info!("Using backend at {}", settings.api.base_url);
    ApiClient::from_settings(&settings)
}

/// The client provided by [`DirectoryProvider`].
pub fn use_directory() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that makes the backend client available to its children.
#[component]
pub fn DirectoryProvider(children: Element) -> Element {
    use_context_provider(make_directory);

    rsx! {
        {children}
    }
}
