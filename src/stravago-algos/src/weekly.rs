use chrono::{DateTime, FixedOffset, NaiveDate, TimeDelta, TimeZone, Utc};
use stravago_types::{
    activities::Activity,
    volumes::{GapPolicy, WeekBucket},
};

use crate::helpers::week_math::{week_monday, week_start_at};

/// Folds a most-recent-first activity list into per week distance totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeeklyVolumeCalculator {
    policy: GapPolicy,
}

struct WeekCursor<Tz: TimeZone> {
    tz: Tz,
    monday: NaiveDate,
    start: DateTime<FixedOffset>,
}

impl<Tz: TimeZone> WeekCursor<Tz> {
    fn new(now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let monday = week_monday(now.date_naive());
        let start = week_start_at(&tz, monday);
        Self { tz, monday, start }
    }

    fn contains(&self, start_date: &DateTime<Utc>) -> bool {
        *start_date > self.start.with_timezone(&Utc)
    }

    fn previous(&mut self) {
        self.monday = self.monday - TimeDelta::weeks(1);
        self.start = week_start_at(&self.tz, self.monday);
    }

    fn bucket(&self, volume: f64) -> WeekBucket {
        WeekBucket {
            week_start: self.start,
            volume,
        }
    }
}

impl WeeklyVolumeCalculator {
    pub fn new(policy: GapPolicy) -> Self {
        Self { policy }
    }

    /// `activities` must be sorted by start date, newest first. The newest
    /// bucket is the week containing `now`; the last bucket is always
    /// emitted, even when it holds no activity.
    pub fn calculate<Tz: TimeZone>(
        &self,
        activities: &[Activity],
        now: &DateTime<Tz>,
    ) -> Vec<WeekBucket> {
        let mut cursor = WeekCursor::new(now);
        let mut weekly_volume = 0.0;
        let mut buckets = Vec::new();

        for activity in activities {
            if cursor.contains(&activity.start_date) {
                weekly_volume += activity.distance;
                continue;
            }

            buckets.push(cursor.bucket(weekly_volume));
            cursor.previous();

            if self.policy == GapPolicy::FillEmptyWeeks {
                while !cursor.contains(&activity.start_date) {
                    buckets.push(cursor.bucket(0.0));
                    cursor.previous();
                }
            }

            // the crossing activity opens the next week
            weekly_volume = activity.distance;
        }

        buckets.push(cursor.bucket(weekly_volume));
        trace!(
            "{} activities folded into {} weeks",
            activities.len(),
            buckets.len()
        );
        buckets
    }
}
