//! Confirmation step in front of destructive actions.

use crate::directory::UserDirectory;
use crate::error::{Error, Result};
use crate::models::UserId;

/// Something the user asked to delete.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteTarget {
    Interest {
        user_id: UserId,
        interest_name: String,
    },
    User {
        user_id: UserId,
        name: String,
    },
}

impl DeleteTarget {
    /// Question shown in the confirmation dialog.
    pub fn prompt(&self) -> String {
        match self {
            DeleteTarget::Interest { interest_name, .. } => {
                format!("Delete interest \"{interest_name}\"?")
            }
            DeleteTarget::User { name, .. } => format!("Delete user {name}?"),
        }
    }

    /// Text of the confirming button.
    pub fn confirm_label(&self) -> &'static str {
        match self {
            DeleteTarget::Interest { .. } => "Delete interest",
            DeleteTarget::User { .. } => "Delete user",
        }
    }

    /// Notification text once the delete went through.
    pub fn done_message(&self) -> String {
        match self {
            DeleteTarget::Interest { interest_name, .. } => {
                format!("Deleted interest \"{interest_name}\"")
            }
            DeleteTarget::User { name, .. } => format!("Deleted user {name}"),
        }
    }

    pub fn failure_message(&self, err: &Error) -> String {
        match self {
            DeleteTarget::Interest { .. } => format!("Failed to delete interest: {err}"),
            DeleteTarget::User { .. } => format!("Failed to delete user: {err}"),
        }
    }

    /// Send the delete request for this target.
    pub async fn execute<D: UserDirectory>(&self, directory: &D) -> Result<()> {
        match self {
            DeleteTarget::Interest {
                user_id,
                interest_name,
            } => {
                let result = directory.remove_interest(*user_id, interest_name).await;
                if let Err(err) = &result {
                    tracing::error!(
                        "Failed to delete interest {interest_name} of user {user_id}: {err}"
                    );
                }
                result
            }
            DeleteTarget::User { user_id, .. } => directory.delete_user(*user_id).await,
        }
    }
}

/// Holds an action until the user confirms or declines it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confirmation<T> {
    pending: Option<T>,
}

impl<T> Default for Confirmation<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Confirmation<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for confirmation, replacing any unanswered question.
    pub fn request(&mut self, action: T) {
        self.pending = Some(action);
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The user agreed: hand the action over for execution.
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// The user declined. Not an error, nothing happens.
    pub fn decline(&mut self) {
        self.pending = None;
    }
}
