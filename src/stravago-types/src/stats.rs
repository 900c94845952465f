use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// One of the totals subtrees of `GET /athletes/{id}/stats`.
///
/// The string form is the JSON key, e.g. `all_run_totals`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum StatsCategory {
    RecentRunTotals,
    YtdRunTotals,
    #[default]
    AllRunTotals,
    RecentRideTotals,
    YtdRideTotals,
    AllRideTotals,
    RecentSwimTotals,
    YtdSwimTotals,
    AllSwimTotals,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ActivityTotals {
    pub count: u32,
    /// Meters
    pub distance: f64,
    /// Seconds
    pub moving_time: u64,
    /// Seconds
    pub elapsed_time: u64,
    /// Meters
    pub elevation_gain: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievement_count: Option<u32>,
}

/// Partial schema of the athlete stats document. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthleteStats {
    #[serde(default)]
    pub biggest_ride_distance: Option<f64>,
    #[serde(default)]
    pub biggest_climb_elevation_gain: Option<f64>,
    #[serde(default)]
    pub recent_run_totals: Option<ActivityTotals>,
    #[serde(default)]
    pub ytd_run_totals: Option<ActivityTotals>,
    #[serde(default)]
    pub all_run_totals: Option<ActivityTotals>,
    #[serde(default)]
    pub recent_ride_totals: Option<ActivityTotals>,
    #[serde(default)]
    pub ytd_ride_totals: Option<ActivityTotals>,
    #[serde(default)]
    pub all_ride_totals: Option<ActivityTotals>,
    #[serde(default)]
    pub recent_swim_totals: Option<ActivityTotals>,
    #[serde(default)]
    pub ytd_swim_totals: Option<ActivityTotals>,
    #[serde(default)]
    pub all_swim_totals: Option<ActivityTotals>,
}

impl AthleteStats {
    pub fn totals(&self, category: StatsCategory) -> Option<&ActivityTotals> {
        match category {
            StatsCategory::RecentRunTotals => self.recent_run_totals.as_ref(),
            StatsCategory::YtdRunTotals => self.ytd_run_totals.as_ref(),
            StatsCategory::AllRunTotals => self.all_run_totals.as_ref(),
            StatsCategory::RecentRideTotals => self.recent_ride_totals.as_ref(),
            StatsCategory::YtdRideTotals => self.ytd_ride_totals.as_ref(),
            StatsCategory::AllRideTotals => self.all_ride_totals.as_ref(),
            StatsCategory::RecentSwimTotals => self.recent_swim_totals.as_ref(),
            StatsCategory::YtdSwimTotals => self.ytd_swim_totals.as_ref(),
            StatsCategory::AllSwimTotals => self.all_swim_totals.as_ref(),
        }
    }
}
