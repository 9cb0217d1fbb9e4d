use dioxus::prelude::*;
use store::{InterestForm, User};

use crate::directory::use_directory;
use crate::views::ModalOverlay;

/// Modal form for creating an interest, either for one of `users` or
/// globally when no user is picked.
#[component]
pub fn AddInterestDialog(
    users: Vec<User>,
    on_created: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = use_signal(InterestForm::default);
    let directory = use_directory();

    let handle_submit = move |_| {
        let Some(new_interest) = form.write().begin_submit() else {
            return;
        };
        let directory = directory.clone();
        spawn(async move {
            let result = new_interest.execute(&directory).await;
            let created = form.write().finish_submit(result);
            if created {
                on_created.call(());
                on_close.call(());
            }
        });
    };

    let current = form();
    let selected = current.owner_value();

    rsx! {
        ModalOverlay {
            title: "New interest".to_string(),
            dismissible: !current.submitting,
            on_close: move |_| on_close.call(()),

            div {
                class: "form-field",
                label { r#for: "new-interest-type", "Interest" }
                input {
                    id: "new-interest-type",
                    r#type: "text",
                    placeholder: "reading",
                    value: current.interest_type.clone(),
                    oninput: move |evt: FormEvent| form.write().interest_type = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { r#for: "new-interest-user", "User" }
                select {
                    id: "new-interest-user",
                    value: selected,
                    onchange: move |evt: FormEvent| {
                        form.write().select_owner(&evt.value());
                    },
                    option {
                        value: "",
                        selected: current.user_id.is_none(),
                        "No user (global)"
                    }
                    for user in users.iter() {
                        option {
                            key: "{user.id}",
                            value: "{user.id}",
                            selected: current.is_owner(user.id),
                            "{user.name} ({user.email})"
                        }
                    }
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
                    if current.submitting { "Adding..." } else { "Add" }
                }
            }
        }
    }
}
