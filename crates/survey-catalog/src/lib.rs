//! Survey Catalog
//!
//! Static questionnaire data and the answers collected against it:
//! - [`Scale`]: answer range and endpoint labels
//! - [`Question`]: Likert item bound to a scale, optionally reverse-scored
//! - [`Catalog`]: validated, ordered question table with scale lookup
//! - [`AnswerSet`]: question id → raw response
//!
//! # Example
//!
//! ```rust
//! use survey_catalog::{AnswerSet, Catalog};
//!
//! let catalog = Catalog::builtin();
//! let mut answers = AnswerSet::new();
//!
//! catalog.check_answer("q1", 4).unwrap();
//! answers.insert("q1", 4);
//!
//! assert!(catalog.check_answer("q1", 6).is_err());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod answers;
mod builtin;
pub mod catalog;
pub mod error;
pub mod question;
pub mod scale;

pub use answers::AnswerSet;
pub use catalog::{Catalog, CatalogBuilder, CatalogDocument, ScaleGroup};
pub use error::{AnswerError, CatalogError};
pub use question::{Question, QuestionId};
pub use scale::{Scale, ScaleId};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
