//! Survey CLI
//!
//! Terminal front end for the questionnaire:
//! - [`interactive`]: question-by-question loop over any reader/writer pair
//! - [`commands`]: `results`, `reset` and `catalog`
//! - [`telemetry`]: tracing subscriber setup

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod commands;
pub mod interactive;
pub mod telemetry;

pub use interactive::{Input, Outcome};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
