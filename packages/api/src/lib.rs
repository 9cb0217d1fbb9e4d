//! # API crate: HTTP access to the users backend
//!
//! The web, and any future desktop or mobile frontend, reach the REST backend
//! through this crate. It implements [`store::UserDirectory`] on top of
//! `reqwest`, so every workflow in `store` runs against the real backend
//! without knowing about HTTP.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: builds, sends and decodes requests |
//! | [`endpoint`] | [`Endpoint`]: method, path and query of every backend call |
//! | [`error`] | [`ApiError`] and its conversion into [`store::Error`] |
//! | [`settings`] | [`Settings`]: base URL from defaults, `meetyou.toml` and the environment |
//!
//! ## Routes
//!
//! - **Users**: `GET /users`, `POST /users`, `DELETE /users/{id}`
//! - **Search**: `GET /users/search?interest=`, `GET /users/search/all?interests=`,
//!   `GET /users/search/any?interests=`
//! - **Interests**: `POST /users/{id}/interests`, `POST /interests`,
//!   `PUT /users/{id}/interests/{interestId}`, `DELETE /users/{id}/interests?interestName=`

pub mod client;
pub mod endpoint;
pub mod error;
pub mod settings;

pub use client::ApiClient;
pub use endpoint::Endpoint;
pub use error::ApiError;
pub use settings::Settings;
