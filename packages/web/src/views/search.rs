use dioxus::prelude::*;

use ui::SearchView;

#[component]
pub fn Search() -> Element {
    rsx! {
        SearchView {}
    }
}
