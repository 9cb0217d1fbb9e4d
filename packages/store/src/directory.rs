//! # Directory: the backend seam for users and interests
//!
//! Every workflow in this crate reaches the outside world through the
//! [`UserDirectory`] trait. The REST client in the `api` crate implements it
//! for the real application and [`crate::MemoryDirectory`] implements it in
//! memory for tests.
//!
//! The futures are not required to be `Send`: the UI runs every request on
//! its single thread, including on `wasm32`.
//!
//! | Method | Backend call |
//! |--------|--------------|
//! | [`list_users`](UserDirectory::list_users) | `GET /users` |
//! | [`find_by_interest`](UserDirectory::find_by_interest) | one-interest search |
//! | [`find_by_all_interests`](UserDirectory::find_by_all_interests) | users having every term |
//! | [`find_by_any_interest`](UserDirectory::find_by_any_interest) | users having at least one term |
//! | [`create_user`](UserDirectory::create_user) | `POST /users` |
//! | [`delete_user`](UserDirectory::delete_user) | `DELETE /users/{id}` |
//! | [`add_interest`](UserDirectory::add_interest) | `POST /users/{id}/interests` |
//! | [`create_interest`](UserDirectory::create_interest) | `POST /interests` |
//! | [`update_interest`](UserDirectory::update_interest) | `PUT /users/{id}/interests/{interestId}` |
//! | [`remove_interest`](UserDirectory::remove_interest) | `DELETE /users/{id}/interests?interestName=` |
//!
//! [`fetch_users`] dispatches a [`SearchRequest`] to the matching listing.

use std::future::Future;

use crate::error::Result;
use crate::models::{Interest, InterestId, NewUser, User, UserId};
use crate::query::SearchRequest;

/// Async access to the user directory.
pub trait UserDirectory {
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>>>;

    fn find_by_interest(&self, interest: &str) -> impl Future<Output = Result<Vec<User>>>;

    fn find_by_all_interests(
        &self,
        interests: &[String],
    ) -> impl Future<Output = Result<Vec<User>>>;

    fn find_by_any_interest(
        &self,
        interests: &[String],
    ) -> impl Future<Output = Result<Vec<User>>>;

    fn create_user(&self, user: &NewUser) -> impl Future<Output = Result<User>>;

    fn delete_user(&self, id: UserId) -> impl Future<Output = Result<()>>;

    /// Attach a new interest to a user, returning the updated user.
    fn add_interest(
        &self,
        user_id: UserId,
        interest_type: &str,
    ) -> impl Future<Output = Result<User>>;

    /// Create an interest that is not attached to any user.
    fn create_interest(&self, interest_type: &str) -> impl Future<Output = Result<Interest>>;

    fn update_interest(
        &self,
        user_id: UserId,
        interest_id: InterestId,
        interest_type: &str,
    ) -> impl Future<Output = Result<()>>;

    /// Remove an interest from a user by its name.
    fn remove_interest(
        &self,
        user_id: UserId,
        interest_name: &str,
    ) -> impl Future<Output = Result<()>>;
}

/// Run a search request against a directory.
pub async fn fetch_users<D: UserDirectory>(
    directory: &D,
    request: &SearchRequest,
) -> Result<Vec<User>> {
    tracing::debug!("Fetching {request}");
    match request {
        SearchRequest::Everyone => directory.list_users().await,
        SearchRequest::Interest(term) => directory.find_by_interest(term).await,
        SearchRequest::AllOf(terms) => directory.find_by_all_interests(terms).await,
        SearchRequest::AnyOf(terms) => directory.find_by_any_interest(terms).await,
    }
}
