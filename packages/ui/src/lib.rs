//! Shared UI for the user directory front-end.
//!
//! Components here talk to the backend through the client provided by
//! [`DirectoryProvider`] and report outcomes through [`NotificationsProvider`].

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod directory;
pub use directory::{make_directory, use_directory, DirectoryProvider};

pub mod notifications;
pub use notifications::{notify, use_notifications, Level, Notifications, NotificationsProvider};

mod notification_panel;
pub use notification_panel::{AlertDialog, NotificationPanel, NotificationToggle};

mod header;
pub use header::Header;

mod search_bar;
pub use search_bar::SearchBar;

mod user_card;
pub use user_card::UserCard;

mod edit_interest_dialog;
pub use edit_interest_dialog::EditInterestDialog;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod add_user_dialog;
pub use add_user_dialog::AddUserDialog;

mod add_interest_dialog;
pub use add_interest_dialog::AddInterestDialog;

pub mod views;
pub use views::SearchView;
