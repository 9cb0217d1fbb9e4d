use dioxus::prelude::*;
use store::{User, UserDirectory, UserForm};

use crate::directory::use_directory;
use crate::views::ModalOverlay;

/// Modal form for creating a user.
///
/// Sends the create request itself. On success the new user goes to
/// `on_created` and the dialog asks to be closed; on failure it stays open
/// and shows the error.
#[component]
pub fn AddUserDialog(on_created: EventHandler<User>, on_close: EventHandler<()>) -> Element {
    let mut form = use_signal(UserForm::default);
    let directory = use_directory();

    let handle_submit = move |_| {
        let Some(new_user) = form.write().begin_submit() else {
            return;
        };
        let directory = directory.clone();
        spawn(async move {
            let result = directory.create_user(&new_user).await;
            let created = form.write().finish_submit(result);
            if let Some(user) = created {
                tracing::info!("Created user {} ({})", user.name, user.id);
                on_created.call(user);
                on_close.call(());
            }
        });
    };

    let current = form();

    rsx! {
        ModalOverlay {
            title: "New user".to_string(),
            dismissible: !current.submitting,
            on_close: move |_| on_close.call(()),

            div {
                class: "form-field",
                label { r#for: "new-user-name", "Name" }
                input {
                    id: "new-user-name",
                    r#type: "text",
                    placeholder: "Ann",
                    value: current.name.clone(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { r#for: "new-user-email", "Email" }
                input {
                    id: "new-user-email",
                    r#type: "email",
                    placeholder: "ann@example.com",
                    value: current.email.clone(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { r#for: "new-user-age", "Age (optional)" }
                input {
                    id: "new-user-age",
                    r#type: "number",
                    min: "0",
                    value: current.age.clone(),
                    oninput: move |evt: FormEvent| form.write().age = evt.value(),
                }
            }

            if let Some(err) = current.error.as_ref() {
                p { class: "form-error", "{err}" }
            }

            div {
                class: "dialog-actions",
                button {
                    class: "secondary",
                    disabled: current.submitting,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                button {
                    class: "primary",
                    disabled: current.submitting,
                    onclick: handle_submit,
                    if current.submitting { "Creating..." } else { "Create" }
                }
            }
        }
    }
}
