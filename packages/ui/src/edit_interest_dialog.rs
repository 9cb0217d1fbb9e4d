use dioxus::prelude::*;
use store::EditSession;

use crate::views::ModalOverlay;

/// Modal for renaming an interest. Fully controlled by the caller.
#[component]
pub fn EditInterestDialog(
    session: EditSession,
    saving: bool,
    on_input: EventHandler<String>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            title: "Edit interest".to_string(),
            dismissible: !saving,
            on_close: move |_| on_cancel.call(()),

            p { class: "dialog-hint", "{session.user_name}: \"{session.original}\"" }
            div {
                class: "form-field",
                label { r#for: "edit-interest-text", "Interest" }
                input {
                    id: "edit-interest-text",
                    r#type: "text",
                    autofocus: true,
                    disabled: saving,
                    value: session.text.clone(),
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            on_save.call(());
                        }
                    },
                }
            }
            div {
                class: "dialog-actions",
                button {
                    class: "secondary",
                    disabled: saving,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                button {
                    class: "primary",
                    disabled: saving,
                    onclick: move |_| on_save.call(()),
                    if saving { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
