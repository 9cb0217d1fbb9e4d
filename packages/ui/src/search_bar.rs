use dioxus::prelude::*;
use store::SearchMode;

use crate::icons::FaMagnifyingGlass;
use crate::Icon;

/// Query input, match-mode selector and search button.
#[component]
pub fn SearchBar(
    query: String,
    mode: SearchMode,
    on_query: EventHandler<String>,
    on_mode: EventHandler<SearchMode>,
    on_search: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "search-bar",
            input {
                r#type: "text",
                class: "search-input",
                placeholder: "Interest(s): reading, running, music...",
                value: query,
                oninput: move |evt: FormEvent| on_query.call(evt.value()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_search.call(());
                    }
                },
            }
            select {
                class: "search-mode",
                value: mode.as_str(),
                onchange: move |evt: FormEvent| {
                    match evt.value().parse::<SearchMode>() {
                        Ok(mode) => on_mode.call(mode),
                        Err(e) => tracing::warn!("{e}"),
                    }
                },
                for option_mode in SearchMode::ALL {
                    option {
                        key: "{option_mode}",
                        value: option_mode.as_str(),
                        selected: option_mode == mode,
                        "{option_mode.label()}"
                    }
                }
            }
            button {
                class: "primary",
                onclick: move |_| on_search.call(()),
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                " Search"
            }
        }
    }
}
