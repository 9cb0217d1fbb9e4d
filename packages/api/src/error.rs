use thiserror::Error;

/// Failure talking to the backend.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },
}

impl From<ApiError> for store::Error {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http(e) if e.is_decode() => store::Error::Decode(e.to_string()),
            ApiError::Http(e) => store::Error::Transport(e.to_string()),
            ApiError::Status { status, message } => store::Error::Status { status, message },
        }
    }
}
