//! # Search query parsing
//!
//! Turns the raw text of the search box plus the selected [`SearchMode`] into
//! a [`SearchRequest`], the description of which backend listing to call.
//!
//! - A blank query always means "everyone", whatever the mode.
//! - `one` sends the trimmed query as a single term, commas included.
//! - `all` / `any` split on commas, trim each term and silently drop the
//!   empty ones. If nothing is left the request falls back to everyone.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// How the terms of a query are matched against a user's interests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchMode {
    /// A single interest.
    #[default]
    One,
    /// Users having every listed interest.
    All,
    /// Users having at least one listed interest.
    Any,
}

impl SearchMode {
    pub const ALL: [SearchMode; 3] = [SearchMode::One, SearchMode::All, SearchMode::Any];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::One => "one",
            SearchMode::All => "all",
            SearchMode::Any => "any",
        }
    }

    /// Label for the mode selector.
    pub fn label(&self) -> &'static str {
        match self {
            SearchMode::One => "By one",
            SearchMode::All => "By all",
            SearchMode::Any => "By any",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one" => Ok(SearchMode::One),
            "all" => Ok(SearchMode::All),
            "any" => Ok(SearchMode::Any),
            other => Err(format!("Unknown search mode: {other}")),
        }
    }
}

/// Which listing to fetch from the directory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SearchRequest {
    /// The unfiltered user list.
    #[default]
    Everyone,
    Interest(String),
    AllOf(Vec<String>),
    AnyOf(Vec<String>),
}

impl SearchRequest {
    pub fn new(query: &str, mode: SearchMode) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchRequest::Everyone;
        }
        match mode {
            SearchMode::One => SearchRequest::Interest(trimmed.to_string()),
            SearchMode::All => match split_terms(trimmed) {
                terms if terms.is_empty() => SearchRequest::Everyone,
                terms => SearchRequest::AllOf(terms),
            },
            SearchMode::Any => match split_terms(trimmed) {
                terms if terms.is_empty() => SearchRequest::Everyone,
                terms => SearchRequest::AnyOf(terms),
            },
        }
    }

    pub fn is_filtered(&self) -> bool {
        !matches!(self, SearchRequest::Everyone)
    }

    /// Notification text for a failed fetch of this request.
    pub fn failure_message(&self, err: &Error) -> String {
        if self.is_filtered() {
            format!("Search failed: {err}")
        } else {
            format!("Failed to load users: {err}")
        }
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchRequest::Everyone => write!(f, "all users"),
            SearchRequest::Interest(term) => write!(f, "interest \"{term}\""),
            SearchRequest::AllOf(terms) => write!(f, "all of [{}]", terms.join(", ")),
            SearchRequest::AnyOf(terms) => write!(f, "any of [{}]", terms.join(", ")),
        }
    }
}

/// Split a comma separated list, trimming terms and dropping empty ones.
pub fn split_terms(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_names_the_request_kind() {
        let err = Error::Transport("offline".to_string());
        assert!(SearchRequest::Everyone
            .failure_message(&err)
            .starts_with("Failed to load users: "));
        assert!(SearchRequest::AnyOf(vec!["chess".to_string()])
            .failure_message(&err)
            .starts_with("Search failed: "));
    }

    #[test]
    fn test_blank_query_is_everyone_in_every_mode() {
        for mode in SearchMode::ALL {
            assert_eq!(SearchRequest::new("", mode), SearchRequest::Everyone);
            assert_eq!(SearchRequest::new("   \t", mode), SearchRequest::Everyone);
        }
    }

    #[test]
    fn test_one_mode_keeps_the_whole_trimmed_query() {
        assert_eq!(
            SearchRequest::new("  reading  ", SearchMode::One),
            SearchRequest::Interest("reading".to_string())
        );
        assert_eq!(
            SearchRequest::new("reading, running", SearchMode::One),
            SearchRequest::Interest("reading, running".to_string())
        );
    }

    #[test]
    fn test_all_and_any_split_terms() {
        assert_eq!(
            SearchRequest::new("reading, running", SearchMode::All),
            SearchRequest::AllOf(vec!["reading".to_string(), "running".to_string()])
        );
        assert_eq!(
            SearchRequest::new(" chess ,, music ,", SearchMode::Any),
            SearchRequest::AnyOf(vec!["chess".to_string(), "music".to_string()])
        );
    }

    #[test]
    fn test_only_separators_falls_back_to_everyone() {
        assert_eq!(SearchRequest::new(" , ,", SearchMode::All), SearchRequest::Everyone);
        assert_eq!(SearchRequest::new(",", SearchMode::Any), SearchRequest::Everyone);
    }

    #[test]
    fn test_mode_parsing() {
        for mode in SearchMode::ALL {
            assert_eq!(mode.as_str().parse::<SearchMode>(), Ok(mode));
        }
        assert!("some".parse::<SearchMode>().is_err());
        assert_eq!(SearchMode::default(), SearchMode::One);
    }
}
