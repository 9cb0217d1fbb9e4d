//! Errors returned by directories and workflows.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Interest cannot be empty")]
    BlankInterest,

    #[error("Interest has not been saved yet")]
    UnsavedInterest,

    #[error("{0}")]
    InvalidUser(&'static str),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl Error {
    /// Local validation failures never reached the backend.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::BlankInterest | Error::UnsavedInterest | Error::InvalidUser(_)
        )
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Error::Status {
            status: 404,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Error::Status {
            status: 409,
            message: message.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
