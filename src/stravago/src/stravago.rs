use chrono::{DateTime, Local, TimeZone};
use stravago_types::{stats::StatsCategory, volumes::GapPolicy};

use crate::{StravaApiClient, StravaResult, stats::filter_stats, volumes::weekly_volumes_json};

pub struct StravaGo {
    pub api: StravaApiClient,
}

impl StravaGo {
    pub fn new(api: StravaApiClient) -> Self {
        Self { api }
    }

    /// Raw stats document of the configured athlete.
    pub async fn athlete_stats(&self) -> StravaResult<String> {
        self.api.athlete_stats().await
    }

    /// The `all_run_totals` subtree as json bytes.
    pub async fn athlete_running_stats(&self) -> StravaResult<Vec<u8>> {
        self.athlete_category_stats(StatsCategory::AllRunTotals)
            .await
    }

    pub async fn athlete_category_stats(&self, category: StatsCategory) -> StravaResult<Vec<u8>> {
        let stats = self.athlete_stats().await?;
        filter_stats(&stats, category)
    }

    /// Raw activity list of the configured athlete.
    pub async fn athlete_activities(&self) -> StravaResult<String> {
        self.api.athlete_activities().await
    }

    pub async fn weekly_volumes(&self, policy: GapPolicy) -> StravaResult<String> {
        self.weekly_volumes_at(&Local::now(), policy).await
    }

    pub async fn weekly_volumes_at<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        policy: GapPolicy,
    ) -> StravaResult<String> {
        let activities = self.athlete_activities().await?;
        weekly_volumes_json(&activities, now, policy)
    }
}
