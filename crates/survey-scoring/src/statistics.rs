//! Per-scale descriptive statistics
//!
//! [`compute_statistics`] reduces an answer set to one [`ScaleStatistics`] per
//! scale:
//! - reverse-flagged questions are scored as `max + min - raw`
//! - unanswered questions are skipped, never counted as zero
//! - mean over the scored values, sample standard deviation with `n - 1`
//! - a scale without any answer reports mean 0, sd 0 and no values
//!
//! Without an answer set every scale gets a neutral placeholder (midpoint
//! mean, sd 0.5) and the result is tagged [`StatisticsOrigin::Placeholder`].

use indexmap::IndexMap;
use serde::Serialize;
use survey_catalog::{AnswerSet, Catalog, Scale, ScaleId};

/// Spread reported for every scale when no answers are available
pub const PLACEHOLDER_SD: f64 = 0.5;

/// Where the numbers came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticsOrigin {
    /// Computed from an answer set
    Measured,
    /// Display defaults; not a measurement
    Placeholder,
}

/// Statistics of one scale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleStatistics {
    /// Scale identifier
    pub scale_id: ScaleId,
    /// Display name
    pub name: String,
    /// Scale minimum
    pub min: i32,
    /// Scale maximum
    pub max: i32,
    /// Scored values in catalog order
    pub values: Vec<i32>,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub sd: f64,
}

impl ScaleStatistics {
    fn measured(scale: &Scale, values: Vec<i32>) -> Self {
        let (mean, sd) = mean_and_sample_sd(&values);
        Self {
            scale_id: scale.id.clone(),
            name: scale.name.clone(),
            min: scale.min,
            max: scale.max,
            values,
            mean,
            sd,
        }
    }

    fn placeholder(scale: &Scale) -> Self {
        Self {
            scale_id: scale.id.clone(),
            name: scale.name.clone(),
            min: scale.min,
            max: scale.max,
            values: Vec::new(),
            mean: scale.midpoint(),
            sd: PLACEHOLDER_SD,
        }
    }

    /// Number of contributing questions
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

/// Statistics of every scale, in scale order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurveyStatistics {
    /// Measured or placeholder
    pub origin: StatisticsOrigin,
    /// Per-scale results
    pub scales: IndexMap<ScaleId, ScaleStatistics>,
}

impl SurveyStatistics {
    /// Statistics of one scale
    #[inline]
    #[must_use]
    pub fn get(&self, scale_id: &str) -> Option<&ScaleStatistics> {
        self.scales.get(scale_id)
    }

    /// Iterate in scale order
    pub fn iter(&self) -> impl Iterator<Item = &ScaleStatistics> {
        self.scales.values()
    }

    /// Number of scales
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    /// Whether there are no scales
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Whether these are display defaults rather than measurements
    #[inline]
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.origin == StatisticsOrigin::Placeholder
    }
}

/// Reduce answers to per-scale statistics
#[must_use]
pub fn compute_statistics(answers: Option<&AnswerSet>, catalog: &Catalog) -> SurveyStatistics {
    let groups = catalog.groups();

    let Some(answers) = answers else {
        tracing::debug!(scales = groups.len(), "no answers available, using placeholder statistics");
        let scales = groups
            .iter()
            .map(|g| (g.scale.id.clone(), ScaleStatistics::placeholder(g.scale)))
            .collect();
        return SurveyStatistics {
            origin: StatisticsOrigin::Placeholder,
            scales,
        };
    };

    let scales = groups
        .iter()
        .map(|group| {
            let values: Vec<i32> = group
                .questions
                .iter()
                .filter_map(|q| {
                    answers.get(q.id.as_str()).map(|raw| {
                        if q.reverse {
                            group.scale.reverse(raw)
                        } else {
                            raw
                        }
                    })
                })
                .collect();
            let stats = ScaleStatistics::measured(group.scale, values);
            tracing::debug!(
                scale = %stats.scale_id,
                count = stats.count(),
                mean = stats.mean,
                sd = stats.sd,
                "scale scored"
            );
            (group.scale.id.clone(), stats)
        })
        .collect();

    SurveyStatistics {
        origin: StatisticsOrigin::Measured,
        scales,
    }
}

/// Mean and Bessel-corrected standard deviation
///
/// Empty input yields `(0, 0)`; a single value has sd 0.
#[must_use]
pub fn mean_and_sample_sd(values: &[i32]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }

    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;

    if values.len() < 2 {
        return (mean, 0.0);
    }

    let squares: f64 = values
        .iter()
        .map(|&v| (f64::from(v) - mean).powi(2))
        .sum();
    (mean, (squares / (n - 1.0)).sqrt())
}
