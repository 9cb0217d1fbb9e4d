//! # Create forms: new users and new interests
//!
//! Both dialogs share the same shape: editable fields, local validation, a
//! `submitting` flag while the request is in flight and an `error` shown
//! inside the dialog when something fails. A failed submit keeps every field
//! so the user can fix and retry.
//!
//! | Form | Validated into | Request |
//! |------|----------------|---------|
//! | [`UserForm`] | [`NewUser`] | `create_user` |
//! | [`InterestForm`] | [`NewInterest`] | `add_interest` for a user, `create_interest` otherwise |

use crate::directory::UserDirectory;
use crate::error::{Error, Result};
use crate::models::{NewUser, User, UserId};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    /// Raw text of the age field; empty means no age.
    pub age: String,
    pub submitting: bool,
    pub error: Option<Error>,
}

impl UserForm {
    pub fn validate(&self) -> Result<NewUser> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(Error::InvalidUser("Name is required"));
        }
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(Error::InvalidUser("Invalid email address"));
        }
        let age = match self.age.trim() {
            "" => None,
            raw => Some(
                raw.parse::<u32>()
                    .map_err(|_| Error::InvalidUser("Age must be a whole number"))?,
            ),
        };
        Ok(NewUser {
            name: name.to_string(),
            email: email.to_string(),
            age,
        })
    }

    /// Validate and mark as submitting. Validation errors are kept on the form.
    pub fn begin_submit(&mut self) -> Option<NewUser> {
        if self.submitting {
            return None;
        }
        match self.validate() {
            Ok(user) => {
                self.submitting = true;
                self.error = None;
                Some(user)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    /// Record the outcome. Returns the created user on success.
    pub fn finish_submit(&mut self, result: Result<User>) -> Option<User> {
        self.submitting = false;
        match result {
            Ok(user) => {
                *self = Self::default();
                Some(user)
            }
            Err(err) => {
                tracing::warn!("Failed to create user: {err}");
                self.error = Some(err);
                None
            }
        }
    }
}

/// A validated interest creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewInterest {
    /// Owner, or `None` for a global interest.
    pub user_id: Option<UserId>,
    pub interest_type: String,
}

impl NewInterest {
    pub async fn execute<D: UserDirectory>(&self, directory: &D) -> Result<()> {
        match self.user_id {
            Some(user_id) => directory
                .add_interest(user_id, &self.interest_type)
                .await
                .map(|_| ()),
            None => directory.create_interest(&self.interest_type).await.map(|_| ()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InterestForm {
    pub interest_type: String,
    pub user_id: Option<UserId>,
    pub submitting: bool,
    pub error: Option<Error>,
}

impl InterestForm {
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    /// Pick the owner from a `<select>` value. Empty means a global interest.
    pub fn select_owner(&mut self, raw: &str) {
        self.user_id = raw.parse::<UserId>().ok();
    }

    /// The `<select>` value for the current owner.
    pub fn owner_value(&self) -> String {
        self.user_id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn is_owner(&self, user_id: UserId) -> bool {
        self.user_id == Some(user_id)
    }

    pub fn validate(&self) -> Result<NewInterest> {
        let interest_type = self.interest_type.trim();
        if interest_type.is_empty() {
            return Err(Error::BlankInterest);
        }
        Ok(NewInterest {
            user_id: self.user_id,
            interest_type: interest_type.to_string(),
        })
    }

    pub fn begin_submit(&mut self) -> Option<NewInterest> {
        if self.submitting {
            return None;
        }
        match self.validate() {
            Ok(interest) => {
                self.submitting = true;
                self.error = None;
                Some(interest)
            }
            Err(err) => {
                self.error = Some(err);
                None
            }
        }
    }

    /// Record the outcome. `true` means created; the caller should refresh.
    pub fn finish_submit(&mut self, result: Result<()>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => {
                *self = Self::default();
                true
            }
            Err(err) => {
                tracing::warn!("Failed to create interest: {err}");
                self.error = Some(err);
                false
            }
        }
    }
}
