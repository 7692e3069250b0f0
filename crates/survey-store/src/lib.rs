//! Survey Store
//!
//! Persistence boundary of the questionnaire. The session never touches a
//! concrete storage backend; it receives a [`KeyValueStore`] and goes through
//! [`SurveyState`] for the two keys it cares about.
//!
//! ```text
//! SurveySession ──► SurveyState ──► dyn KeyValueStore ──► MemoryStore | FileStore
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod backend;
pub mod error;
pub mod state;

pub use backend::{FileStore, KeyValueStore, MemoryStore};
pub use error::StoreError;
pub use state::{SurveyState, ANSWERS_KEY, DONE_KEY};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
