//! Likert scales
//!
//! A scale is a named answer range shared by a group of questions, with a
//! label for each end of the range.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::ops::RangeInclusive;

/// Scale identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScaleId(String);

impl ScaleId {
    /// Create scale ID
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ScaleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScaleId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for ScaleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Scale definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scale {
    /// Identifier questions refer to
    pub id: ScaleId,
    /// Display name
    pub name: String,
    /// Lowest answer (inclusive)
    pub min: i32,
    /// Highest answer (inclusive)
    pub max: i32,
    /// Label for the low end
    #[serde(default)]
    pub min_label: String,
    /// Label for the high end
    #[serde(default)]
    pub max_label: String,
}

impl Scale {
    /// Create scale; the display name defaults to the identifier
    #[must_use]
    pub fn new(id: impl Into<String>, min: i32, max: i32) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id: ScaleId(id),
            min,
            max,
            min_label: String::new(),
            max_label: String::new(),
        }
    }

    /// With display name
    #[inline]
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// With endpoint labels
    #[inline]
    #[must_use]
    pub fn with_labels(mut self, min_label: impl Into<String>, max_label: impl Into<String>) -> Self {
        self.min_label = min_label.into();
        self.max_label = max_label.into();
        self
    }

    /// Whether `value` is an acceptable answer
    #[inline]
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Answer options in ascending order
    #[inline]
    #[must_use]
    pub fn points(&self) -> RangeInclusive<i32> {
        self.min..=self.max
    }

    /// Reverse-score a raw answer: `max + min - raw`
    ///
    /// Computed in `i64`, so wide ranges cannot overflow; the result is
    /// saturated to `i32` for raw values outside the range.
    #[inline]
    #[must_use]
    pub fn reverse(&self, raw: i32) -> i32 {
        let reversed = i64::from(self.max) + i64::from(self.min) - i64::from(raw);
        #[allow(clippy::cast_possible_truncation)]
        let saturated = reversed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        saturated
    }

    /// Center of the range
    #[inline]
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }
}
