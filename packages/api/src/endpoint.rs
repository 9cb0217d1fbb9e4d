//! The backend routes, one variant per call.

use reqwest::Method;
use store::{InterestId, NewUser, UserId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Endpoint<'a> {
    ListUsers,
    ByInterest(&'a str),
    ByAllInterests(&'a [String]),
    ByAnyInterest(&'a [String]),
    CreateUser(&'a NewUser),
    DeleteUser(UserId),
    AddInterest(UserId, &'a str),
    CreateInterest(&'a str),
    UpdateInterest(UserId, InterestId, &'a str),
    RemoveInterest(UserId, &'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListUsers
            | Endpoint::ByInterest(_)
            | Endpoint::ByAllInterests(_)
            | Endpoint::ByAnyInterest(_) => Method::GET,
            Endpoint::CreateUser(_) | Endpoint::AddInterest(..) | Endpoint::CreateInterest(_) => {
                Method::POST
            }
            Endpoint::UpdateInterest(..) => Method::PUT,
            Endpoint::DeleteUser(_) | Endpoint::RemoveInterest(..) => Method::DELETE,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::ListUsers | Endpoint::CreateUser(_) => "/users".to_string(),
            Endpoint::ByInterest(_) => "/users/search".to_string(),
            Endpoint::ByAllInterests(_) => "/users/search/all".to_string(),
            Endpoint::ByAnyInterest(_) => "/users/search/any".to_string(),
            Endpoint::DeleteUser(id) => format!("/users/{id}"),
            Endpoint::AddInterest(id, _) | Endpoint::RemoveInterest(id, _) => {
                format!("/users/{id}/interests")
            }
            Endpoint::CreateInterest(_) => "/interests".to_string(),
            Endpoint::UpdateInterest(user_id, interest_id, _) => {
                format!("/users/{user_id}/interests/{interest_id}")
            }
        }
    }

    /// Query string pairs. List parameters repeat their key.
    pub fn query(&self) -> Vec<(&'static str, &str)> {
        match self {
            Endpoint::ByInterest(term) => vec![("interest", *term)],
            Endpoint::ByAllInterests(terms) | Endpoint::ByAnyInterest(terms) => {
                terms.iter().map(|t| ("interests", t.as_str())).collect()
            }
            Endpoint::RemoveInterest(_, name) => vec![("interestName", *name)],
            _ => Vec::new(),
        }
    }
}

impl std::fmt::Display for Endpoint<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}
