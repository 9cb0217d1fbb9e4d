use dioxus::prelude::*;

use crate::icons::{FaPlus, FaUserPlus};
use crate::{Icon, NotificationToggle};

const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

/// Top bar with the create actions and the notification toggle.
#[component]
pub fn Header(on_add_user: EventHandler<()>, on_add_interest: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            span { class: "navbar-brand", "MeetYou" }
            div {
                class: "navbar-actions",
                button {
                    class: "primary",
                    onclick: move |_| on_add_user.call(()),
                    Icon { icon: FaUserPlus, width: 14, height: 14 }
                    " Add user"
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_add_interest.call(()),
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    " Add interest"
                }
                NotificationToggle {}
            }
        }
    }
}
