use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Total distance of the activities inside one Monday anchored week.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekBucket {
    /// Monday 00:01 of the week
    pub week_start: DateTime<FixedOffset>,
    /// Meters
    pub volume: f64,
}

/// How a boundary crossing that spans more than one week is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GapPolicy {
    /// Shift the week cursor back once per crossing activity, regardless of
    /// how far back that activity lies.
    #[default]
    Compat,
    /// Emit a zero volume bucket for every skipped calendar week.
    FillEmptyWeeks,
}
