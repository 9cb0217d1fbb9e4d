//! # Domain models for users and their interests
//!
//! These are the JSON shapes exchanged with the backend. Field names follow
//! the backend's camelCase convention (`interestType`), and everything is
//! `Serialize + Deserialize + PartialEq` so values can live in UI signals and
//! be compared in tests.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A user record with its ordered list of interests. |
//! | [`Interest`] | A single free-text tag owned by one user. The `id` is absent until the server assigns one. |
//! | [`NewUser`] | The body of a create-user request. |
//! | [`InterestPayload`] | The `{ "interestType": ... }` body used to create or rename an interest. |
//!
//! [`User`] also carries the small derived values the user card displays
//! (initial, age label, joined interests).

use serde::{Deserialize, Serialize};

pub type UserId = i64;
pub type InterestId = i64;

/// Placeholder shown when a user has no age on record.
pub const AGE_PLACEHOLDER: &str = "-";

/// A user as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// The backend omits the field for users without interests.
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl User {
    /// First character of the name, upper-cased. `?` for an empty name.
    pub fn initial(&self) -> String {
        match self.name.trim().chars().next() {
            Some(c) => c.to_uppercase().collect(),
            None => "?".to_string(),
        }
    }

    pub fn age_label(&self) -> String {
        match self.age {
            Some(age) => age.to_string(),
            None => AGE_PLACEHOLDER.to_string(),
        }
    }

    /// Interest types joined for display: `"reading, running"`.
    pub fn interests_label(&self) -> String {
        self.interests
            .iter()
            .map(|i| i.interest_type.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Case-insensitive membership test on interest types.
    pub fn has_interest(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.interests
            .iter()
            .any(|i| i.interest_type.to_lowercase() == name)
    }

    pub fn interest(&self, id: InterestId) -> Option<&Interest> {
        self.interests.iter().find(|i| i.id == Some(id))
    }
}

/// An interest tag attached to a user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<InterestId>,
    pub interest_type: String,
}

impl Interest {
    pub fn new(id: InterestId, interest_type: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            interest_type: interest_type.into(),
        }
    }
}

/// Body of `POST /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// Body of the interest create/update endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterestPayload {
    pub interest_type: String,
}

impl InterestPayload {
    pub fn new(interest_type: impl Into<String>) -> Self {
        Self {
            interest_type: interest_type.into(),
        }
    }
}
