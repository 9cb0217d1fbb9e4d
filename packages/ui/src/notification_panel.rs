use dioxus::prelude::*;

use crate::notifications::{use_notifications, Level};
use crate::views::ModalOverlay;

const NOTIFICATIONS_CSS: Asset = asset!("/assets/styling/notifications.css");

fn level_class(level: Level) -> &'static str {
    match level {
        Level::Error => "notice error",
        Level::Warning => "notice warning",
        Level::Success => "notice success",
        Level::Info => "notice info",
    }
}

/// History of every notice, newest first.
#[component]
pub fn NotificationPanel() -> Element {
    let mut notifications = use_notifications();

    if !notifications().visible {
        return rsx! {};
    }

    let entries = notifications().entries.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: NOTIFICATIONS_CSS }

        div {
            class: "notification-panel",
            div {
                class: "notification-header",
                span { "Notifications" }
                div {
                    class: "notification-header-actions",
                    button {
                        onclick: move |_| notifications.write().entries.clear(),
                        "Clear"
                    }
                    button {
                        onclick: move |_| notifications.write().visible = false,
                        "Close"
                    }
                }
            }
            div {
                class: "notification-entries",
                if entries.is_empty() {
                    div { class: "notice info", "Nothing yet" }
                }
                for entry in entries.iter().rev() {
                    div {
                        class: level_class(entry.level),
                        span { class: "notice-time", "{entry.timestamp}" }
                        span { " {entry.message}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotificationToggle() -> Element {
    let mut notifications = use_notifications();
    let count = notifications().entries.len();
    let has_errors = notifications().error_count() > 0;

    rsx! {
        button {
            class: if has_errors { "notification-toggle has-errors" } else { "notification-toggle" },
            onclick: move |_| {
                let visible = notifications().visible;
                notifications.write().visible = !visible;
            },
            title: "Notifications",
            if count > 0 {
                "{count}"
            } else {
                "Log"
            }
        }
    }
}

/// Blocking alert for the latest warning or error. Only the OK button
/// dismisses it.
#[component]
pub fn AlertDialog() -> Element {
    let mut notifications = use_notifications();

    let Some(alert) = notifications().alert.clone() else {
        return rsx! {};
    };
    let title = match alert.level {
        Level::Warning => "Check your input",
        _ => "Something went wrong",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NOTIFICATIONS_CSS }

        ModalOverlay {
            title: title.to_string(),
            dismissible: false,
            on_close: move |_| notifications.write().dismiss_alert(),
            p { class: "alert-message", "{alert.message}" }
            div {
                class: "dialog-actions",
                button {
                    class: "primary",
                    autofocus: true,
                    onclick: move |_| notifications.write().dismiss_alert(),
                    "OK"
                }
            }
        }
    }
}
