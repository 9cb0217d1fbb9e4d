use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Yes/no question in front of a destructive action.
#[component]
pub fn ConfirmDialog(
    prompt: String,
    confirm_label: String,
    on_confirm: EventHandler<()>,
    on_decline: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: "Are you sure?".to_string(),
            on_close: move |_| on_decline.call(()),
            p { class: "dialog-hint", "{prompt}" }
            div {
                class: "dialog-actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_decline.call(()),
                    "Cancel"
                }
                button {
                    class: "danger",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
