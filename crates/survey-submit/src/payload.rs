//! Submission payload
//!
//! ```json
//! { "timestamp": "2026-10-17T09:30:00.000Z", "data": { "q1": 5, "q2": 4 } }
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use survey_catalog::AnswerSet;

/// Body of the submission request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// Completion time, ISO-8601 UTC with milliseconds
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Raw answers
    pub data: AnswerSet,
}

impl SubmissionPayload {
    /// Payload stamped with the current time
    #[inline]
    #[must_use]
    pub fn new(data: AnswerSet) -> Self {
        Self::at(Utc::now(), data)
    }

    /// Payload stamped with a given time
    #[inline]
    #[must_use]
    pub fn at(timestamp: DateTime<Utc>, data: AnswerSet) -> Self {
        Self { timestamp, data }
    }

    /// JSON body
    ///
    /// # Errors
    /// Only if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn iso_millis<S: Serializer>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}
