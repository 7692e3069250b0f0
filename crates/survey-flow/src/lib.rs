//! Survey Flow
//!
//! Drives a questionnaire from the first question to the results page.
//!
//! # Core Concepts
//!
//! - [`FlowController`]: question-by-question navigation with the "answer
//!   before advancing" rule
//! - [`SurveySession`]: survey/results view switch, persistence and
//!   fire-and-forget submission
//! - [`SurveyConfig`]: TOML configuration for the front end
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use survey_catalog::Catalog;
//! use survey_flow::SurveySession;
//! use survey_store::MemoryStore;
//! use survey_submit::{NoopSubmitter, SubmissionDispatcher};
//!
//! let dispatcher = SubmissionDispatcher::from_current(Arc::new(NoopSubmitter))?;
//! let mut session = SurveySession::start(Arc::new(Catalog::builtin()), MemoryStore::new(), dispatcher)?;
//!
//! let flow = session.flow_mut()?;
//! flow.answer_current(4)?;
//! flow.advance()?;
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod flow;
pub mod session;

pub use config::{CatalogConfig, LogFormat, LoggingConfig, StorageConfig, SubmissionConfig, SurveyConfig};
pub use error::{ConfigError, FlowError, SessionError};
pub use flow::{FlowAction, FlowController};
pub use session::{SurveySession, View};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
