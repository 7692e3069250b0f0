//! Survey Scoring
//!
//! Pure reductions from answers to what the results page shows:
//! - [`compute_statistics`]: per-scale mean and sample standard deviation
//! - [`RadarChart`] / [`ErrorBarChart`]: chart projections of the means
//! - [`ResultsReport`]: statistics plus both projections plus the
//!   anonymous-data notice
//! - [`render`]: text rendering for terminals
//!
//! Nothing here is cached; every call recomputes from the answer set.
//!
//! # Example
//!
//! ```rust
//! use survey_catalog::{AnswerSet, Catalog};
//! use survey_scoring::compute_statistics;
//!
//! let catalog = Catalog::builtin();
//! let answers = AnswerSet::new().with("q1", 4).with("q2", 2);
//!
//! let stats = compute_statistics(Some(&answers), &catalog);
//! assert_eq!(stats.get("Usability").unwrap().mean, 3.0);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod projection;
pub mod render;
pub mod statistics;

pub use projection::{
    ErrorBar, ErrorBarChart, RadarAxis, RadarChart, ResultsReport, ANONYMOUS_NOTICE,
    ERROR_BAR_LABEL, RADAR_LABEL,
};
pub use statistics::{
    compute_statistics, mean_and_sample_sd, ScaleStatistics, StatisticsOrigin, SurveyStatistics,
    PLACEHOLDER_SD,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
