//! Chart projections of scale statistics
//!
//! Two views of the same means:
//! - [`RadarChart`]: one axis per scale on a single zero-based radial axis.
//!   Scales with different ranges share that axis, so a 0-4 scale and a 1-7
//!   scale are not visually comparable.
//! - [`ErrorBarChart`]: one bar per scale with a `mean ± sd` whisker clamped
//!   to the scale's own range.

use crate::statistics::{compute_statistics, ScaleStatistics, SurveyStatistics};
use serde::Serialize;
use survey_catalog::{AnswerSet, Catalog};

/// Dataset label of the radar chart
pub const RADAR_LABEL: &str = "Mittelwert";

/// Dataset label of the error-bar chart
pub const ERROR_BAR_LABEL: &str = "Mittelwert mit Standardabweichung";

/// Shown when results are requested without any answers
pub const ANONYMOUS_NOTICE: &str = "Hinweis: Du hast die Umfrage bereits abgeschlossen. \
Da die Daten anonym erhoben wurden, siehst du hier keine detaillierten persönlichen Ergebnisse mehr.";

/// One radar axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    /// Scale display name
    pub label: String,
    /// Scale mean
    pub value: f64,
}

/// Radar projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    /// Dataset label
    pub label: &'static str,
    /// Axes in scale order
    pub axes: Vec<RadarAxis>,
    /// Radial axis origin, always zero
    pub radial_min: f64,
    /// Largest scale maximum, so every mean fits
    pub radial_max: f64,
}

impl RadarChart {
    /// Project statistics onto a shared radial axis
    #[must_use]
    pub fn from_statistics(stats: &SurveyStatistics) -> Self {
        let axes = stats
            .iter()
            .map(|s| RadarAxis {
                label: s.name.clone(),
                value: s.mean,
            })
            .collect();
        let radial_max = stats
            .iter()
            .map(|s| f64::from(s.max))
            .fold(0.0, f64::max);

        Self {
            label: RADAR_LABEL,
            axes,
            radial_min: 0.0,
            radial_max,
        }
    }
}

/// One bar with its error whisker
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBar {
    /// Scale display name
    pub label: String,
    /// Bar height (mean)
    pub y: f64,
    /// Lower whisker, `max(scale.min, mean - sd)`
    pub y_min: f64,
    /// Upper whisker, `min(scale.max, mean + sd)`
    pub y_max: f64,
}

impl ErrorBar {
    /// Bar for one scale
    #[must_use]
    pub fn from_scale(stats: &ScaleStatistics) -> Self {
        Self {
            label: stats.name.clone(),
            y: stats.mean,
            y_min: f64::from(stats.min).max(stats.mean - stats.sd),
            y_max: f64::from(stats.max).min(stats.mean + stats.sd),
        }
    }
}

/// Bar-with-error-bar projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBarChart {
    /// Dataset label
    pub label: &'static str,
    /// Bars in scale order
    pub bars: Vec<ErrorBar>,
    /// Value axis upper bound (largest scale maximum)
    pub axis_max: f64,
}

impl ErrorBarChart {
    /// Project statistics to bars
    #[must_use]
    pub fn from_statistics(stats: &SurveyStatistics) -> Self {
        Self {
            label: ERROR_BAR_LABEL,
            bars: stats.iter().map(ErrorBar::from_scale).collect(),
            axis_max: stats
                .iter()
                .map(|s| f64::from(s.max))
                .fold(0.0, f64::max),
        }
    }
}

/// Everything the results view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsReport {
    /// Underlying statistics
    pub statistics: SurveyStatistics,
    /// Radar projection
    pub radar: RadarChart,
    /// Error-bar projection
    pub bars: ErrorBarChart,
    /// Anonymous-data notice, present only without answers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'static str>,
}

impl ResultsReport {
    /// Score answers (if any) and project them
    #[must_use]
    pub fn build(catalog: &Catalog, answers: Option<&AnswerSet>) -> Self {
        let statistics = compute_statistics(answers, catalog);
        Self {
            radar: RadarChart::from_statistics(&statistics),
            bars: ErrorBarChart::from_statistics(&statistics),
            notice: answers.is_none().then_some(ANONYMOUS_NOTICE),
            statistics,
        }
    }

    /// Pretty JSON of the whole report
    ///
    /// # Errors
    /// Only if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
