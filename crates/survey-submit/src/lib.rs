//! Survey Submit
//!
//! Outbound boundary: one best-effort `POST` per completed survey.
//!
//! # Core Concepts
//!
//! - [`SubmissionPayload`]: `{ timestamp, data }` JSON body
//! - [`Submitter`]: delivery port ([`HttpSubmitter`], [`NoopSubmitter`])
//! - [`SubmissionDispatcher`]: spawns delivery and logs the outcome; the
//!   caller never observes success or failure
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use survey_submit::{HttpSubmitter, SubmissionDispatcher, SubmissionPayload};
//!
//! let submitter = HttpSubmitter::new("https://example.org/api/submit", HttpSubmitter::DEFAULT_TIMEOUT)?;
//! let dispatcher = SubmissionDispatcher::from_current(Arc::new(submitter))?;
//! dispatcher.dispatch(SubmissionPayload::new(answers));
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod dispatch;
pub mod error;
pub mod payload;
pub mod submitter;

pub use dispatch::SubmissionDispatcher;
pub use error::SubmitError;
pub use payload::SubmissionPayload;
pub use submitter::{HttpSubmitter, NoopSubmitter, Submitter};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
