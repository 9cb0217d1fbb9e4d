pub mod confirm;
pub mod directory;
pub mod editor;
pub mod error;
pub mod forms;
pub mod models;
pub mod query;
pub mod search;

mod memory;
pub use memory::MemoryDirectory;

pub use confirm::{Confirmation, DeleteTarget};
pub use directory::{fetch_users, UserDirectory};
pub use editor::{EditSession, InterestEditor, InterestUpdate};
pub use error::{Error, Result};
pub use forms::{InterestForm, NewInterest, UserForm};
pub use models::{Interest, InterestId, InterestPayload, NewUser, User, UserId};
pub use query::{SearchMode, SearchRequest};
pub use search::{Applied, SearchState, Ticket};
