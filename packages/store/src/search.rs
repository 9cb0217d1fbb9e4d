//! # Search state: query, mode, results and in-flight tracking
//!
//! [`SearchState`] is the plain data behind the search page. It is designed to
//! sit inside a UI signal, so the async part of a search is split in two
//! synchronous halves around the network call:
//!
//! 1. [`begin`](SearchState::begin) records the request, raises the loading
//!    flag and hands out a [`Ticket`].
//! 2. [`finish`](SearchState::finish) applies the response for that ticket.
//!
//! Tickets are issued in increasing order. A response for a ticket older than
//! the newest issued one is dropped, so the list always shows the most
//! recently *issued* search even when responses arrive out of order. The
//! loading flag clears only when the newest ticket resolves.
//!
//! Mutations made elsewhere report back through [`prepend`](SearchState::prepend)
//! and [`apply_delete`](SearchState::apply_delete), which decide whether the
//! list is patched locally or the last search has to run again.

use crate::confirm::DeleteTarget;
use crate::error::Result;
use crate::models::{User, UserId};
use crate::query::{SearchMode, SearchRequest};

/// Sequence number of an issued search request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// What happened to a finished request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The results were replaced.
    Updated,
    /// A newer request was issued meanwhile; the response was ignored.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub mode: SearchMode,
    pub results: Vec<User>,
    pub loading: bool,
    last_request: Option<SearchRequest>,
    issued: u64,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// The request the current query and mode describe.
    pub fn request(&self) -> SearchRequest {
        SearchRequest::new(&self.query, self.mode)
    }

    /// The request to re-run after a mutation: the last issued one, or the
    /// full list if nothing was issued yet.
    pub fn refresh_request(&self) -> SearchRequest {
        self.last_request.clone().unwrap_or_default()
    }

    /// Record `request` as in flight.
    pub fn begin(&mut self, request: SearchRequest) -> Ticket {
        self.issued += 1;
        self.loading = true;
        self.last_request = Some(request);
        Ticket(self.issued)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Apply the response for `ticket`.
    ///
    /// Errors from the current request are returned so the caller can notify
    /// the user; previous results are left in place. Stale responses are
    /// dropped whether they succeeded or not.
    pub fn finish(&mut self, ticket: Ticket, response: Result<Vec<User>>) -> Result<Applied> {
        if !self.is_current(ticket) {
            tracing::warn!(
                "Discarding response for search #{} (newest is #{})",
                ticket.0,
                self.issued
            );
            return Ok(Applied::Stale);
        }
        self.loading = false;
        let users = response?;
        tracing::debug!("Search #{} returned {} users", ticket.0, users.len());
        self.results = users;
        Ok(Applied::Updated)
    }

    /// Put a freshly created user at the top of the list.
    pub fn prepend(&mut self, user: User) {
        self.results.retain(|u| u.id != user.id);
        self.results.insert(0, user);
    }

    /// Drop a deleted user from the list.
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.results.iter().position(|u| u.id == id)?;
        Some(self.results.remove(index))
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.results.iter().find(|u| u.id == id)
    }

    /// Apply the outcome of a confirmed delete.
    ///
    /// A deleted user is dropped from the list. A deleted interest changes
    /// what the last search matches, so `Ok(true)` asks the caller to re-run
    /// it. Failures leave the list untouched.
    pub fn apply_delete(&mut self, target: &DeleteTarget, result: Result<()>) -> Result<bool> {
        result?;
        match target {
            DeleteTarget::User { user_id, .. } => {
                self.remove(*user_id);
                Ok(false)
            }
            DeleteTarget::Interest { .. } => Ok(true),
        }
    }
}

/// Run `request` against `directory` the way the search page does:
/// begin, fetch, finish.
#[cfg(test)]
pub(crate) async fn run_request<D: crate::directory::UserDirectory>(
    state: &mut SearchState,
    directory: &D,
    request: SearchRequest,
) -> Result<Applied> {
    let ticket = state.begin(request.clone());
    let response = crate::directory::fetch_users(directory, &request).await;
    state.finish(ticket, response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::memory::MemoryDirectory;

    fn directory() -> MemoryDirectory {
        let dir = MemoryDirectory::new();
        dir.seed("Ann", "ann@x.com", Some(30), &["reading", "running"]);
        dir.seed("Boris", "boris@x.com", None, &["reading"]);
        dir.seed("Clara", "clara@x.com", Some(25), &["running"]);
        dir
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    async fn search(state: &mut SearchState, dir: &MemoryDirectory) -> Result<Applied> {
        let request = state.request();
        run_request(state, dir, request).await
    }

    async fn refresh(state: &mut SearchState, dir: &MemoryDirectory) -> Result<Applied> {
        let request = state.refresh_request();
        run_request(state, dir, request).await
    }

    #[tokio::test]
    async fn test_search_all_scenario() {
        let dir = directory();
        let mut state = SearchState::new();
        state.set_query("reading, running");
        state.set_mode(SearchMode::All);

        assert_eq!(search(&mut state, &dir).await, Ok(Applied::Updated));
        assert_eq!(names(&state.results), vec!["Ann"]);
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_empty_query_ignores_previous_mode() {
        let dir = directory();
        let mut state = SearchState::new();
        state.set_mode(SearchMode::Any);
        state.set_query("running");
        search(&mut state, &dir).await.unwrap();
        assert_eq!(names(&state.results), vec!["Ann", "Clara"]);

        state.set_query("   ");
        assert_eq!(state.request(), SearchRequest::Everyone);
        search(&mut state, &dir).await.unwrap();
        assert_eq!(state.results.len(), 3);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_results() {
        let dir = directory();
        let mut state = SearchState::new();
        search(&mut state, &dir).await.unwrap();
        assert_eq!(state.results.len(), 3);

        dir.fail_next(Error::Transport("offline".to_string()));
        state.set_query("chess");
        let err = search(&mut state, &dir).await.unwrap_err();
        assert_eq!(err, Error::Transport("offline".to_string()));
        assert_eq!(state.results.len(), 3);
        assert!(!state.loading);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = SearchState::new();
        let first = state.begin(SearchRequest::Interest("reading".to_string()));
        let second = state.begin(SearchRequest::Everyone);
        assert!(state.loading);

        // The newer request resolves first
        let everyone = vec![User {
            id: 1,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            age: None,
            interests: Vec::new(),
        }];
        assert_eq!(state.finish(second, Ok(everyone.clone())), Ok(Applied::Updated));
        assert!(!state.loading);

        // The older one arrives late and must not overwrite anything
        assert_eq!(state.finish(first, Ok(Vec::new())), Ok(Applied::Stale));
        assert_eq!(state.results, everyone);
        assert_eq!(state.refresh_request(), SearchRequest::Everyone);
    }

    #[test]
    fn test_stale_response_keeps_loading_for_newest() {
        let mut state = SearchState::new();
        let first = state.begin(SearchRequest::Everyone);
        let _second = state.begin(SearchRequest::Everyone);

        let stale = state.finish(first, Err(Error::Transport("timeout".to_string())));
        assert_eq!(stale, Ok(Applied::Stale));
        assert!(state.loading);
    }

    #[tokio::test]
    async fn test_delete_user_removes_card_without_refetch() {
        let dir = directory();
        let mut state = SearchState::new();
        search(&mut state, &dir).await.unwrap();
        let requests = dir.request_count();

        let target = DeleteTarget::User {
            user_id: 2,
            name: "Boris".to_string(),
        };
        let result = target.execute(&dir).await;
        assert_eq!(state.apply_delete(&target, result), Ok(false));

        assert_eq!(names(&state.results), vec!["Ann", "Clara"]);
        assert!(dir.user(2).is_none());
        assert_eq!(dir.request_count(), requests + 1);
    }

    #[tokio::test]
    async fn test_delete_interest_refreshes_last_search() {
        let dir = directory();
        let mut state = SearchState::new();
        state.set_query("reading");
        search(&mut state, &dir).await.unwrap();
        assert_eq!(names(&state.results), vec!["Ann", "Boris"]);

        // The box changes but the refresh must re-run what was issued
        state.set_query("chess");
        let target = DeleteTarget::Interest {
            user_id: 2,
            interest_name: "reading".to_string(),
        };
        let result = target.execute(&dir).await;
        assert_eq!(state.apply_delete(&target, result), Ok(true));

        refresh(&mut state, &dir).await.unwrap();
        assert_eq!(names(&state.results), vec!["Ann"]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_results() {
        let dir = directory();
        let mut state = SearchState::new();
        search(&mut state, &dir).await.unwrap();

        let target = DeleteTarget::User {
            user_id: 1,
            name: "Ann".to_string(),
        };
        dir.fail_next(Error::Status {
            status: 500,
            message: "boom".to_string(),
        });
        let result = target.execute(&dir).await;
        assert!(state.apply_delete(&target, result).is_err());
        assert_eq!(state.results.len(), 3);

        let missing = DeleteTarget::Interest {
            user_id: 1,
            interest_name: "chess".to_string(),
        };
        let result = missing.execute(&dir).await;
        assert!(matches!(
            state.apply_delete(&missing, result),
            Err(Error::Status { status: 404, .. })
        ));
    }
}
