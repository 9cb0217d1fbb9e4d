//! User card: identity, age and interests, with edit/delete affordances.
//!
//! The card holds no state. Every action is handed to the caller through
//! the event handlers, together with the user (and interest) it concerns.

use dioxus::prelude::*;
use store::{Interest, User};

use crate::icons::{FaPen, FaTrash};
use crate::Icon;

#[component]
pub fn UserCard(
    user: User,
    on_edit_interest: EventHandler<(User, Interest)>,
    on_delete_interest: EventHandler<(User, Interest)>,
    on_delete_user: EventHandler<User>,
) -> Element {
    let initial = user.initial();
    let name = user.name.clone();
    let email = user.email.clone();
    let age = user.age_label();
    let interests_label = user.interests_label();
    let delete_target = user.clone();

    rsx! {
        div {
            class: "user-card",
            div { class: "user-avatar", "{initial}" }
            h3 { class: "user-name", "{name}" }
            p { class: "user-email", "{email}" }
            p { class: "user-age", "Age: {age}" }

            if user.interests.is_empty() {
                p { class: "user-interests empty", "No interests" }
            } else {
                div {
                    class: "user-interests",
                    title: "{interests_label}",
                    "Interests:"
                    for interest in user.interests.iter() {
                        InterestChip {
                            key: "{interest.interest_type}",
                            user: user.clone(),
                            interest: interest.clone(),
                            on_edit: on_edit_interest,
                            on_delete: on_delete_interest,
                        }
                    }
                }
            }

            div {
                class: "user-actions",
                button {
                    class: "icon-button danger",
                    title: "Delete user",
                    aria_label: "Delete user {name}",
                    onclick: move |_| on_delete_user.call(delete_target.clone()),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                }
            }
        }
    }
}

/// One interest tag with its edit and delete buttons.
#[component]
fn InterestChip(
    user: User,
    interest: Interest,
    on_edit: EventHandler<(User, Interest)>,
    on_delete: EventHandler<(User, Interest)>,
) -> Element {
    let label = interest.interest_type.clone();
    let edit_pair = (user.clone(), interest.clone());
    let delete_pair = (user, interest);

    rsx! {
        span {
            class: "interest-chip",
            "{label}"
            button {
                class: "icon-button",
                title: "Edit interest",
                onclick: move |_| on_edit.call(edit_pair.clone()),
                Icon { icon: FaPen, width: 12, height: 12 }
            }
            button {
                class: "icon-button danger",
                title: "Delete interest",
                onclick: move |_| on_delete.call(delete_pair.clone()),
                Icon { icon: FaTrash, width: 12, height: 12 }
            }
        }
    }
}
