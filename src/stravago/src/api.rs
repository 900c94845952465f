use std::fmt;

use crate::{StravaError, StravaResult};

pub const DEFAULT_API_BASE: &str = "https://www.strava.com/api/v3";

#[derive(Clone)]
pub struct StravaConfig {
    pub base_url: String,
    pub athlete_id: u64,
    pub access_token: String,
}

impl fmt::Debug for StravaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StravaConfig")
            .field("base_url", &self.base_url)
            .field("athlete_id", &self.athlete_id)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

pub struct StravaApiClient {
    client: reqwest::Client,
    config: StravaConfig,
}

impl StravaApiClient {
    pub fn new(config: StravaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &StravaConfig {
        &self.config
    }

    fn athlete_url(&self, resource: &str) -> String {
        format!(
            "{}/athletes/{}/{resource}",
            self.config.base_url.trim_end_matches('/'),
            self.config.athlete_id
        )
    }

    /// Sends an authorized GET and returns the body as text.
    pub async fn execute(&self, url: &str) -> StravaResult<String> {
        debug!("GET {url}");

        let resp = self
            .client
            .get(url)
            .header("Authorization", format!("Bearer {}", self.config.access_token))
            .send()
            .await
            .map_err(|e| {
                error!("request to {url} failed: {e}");
                StravaError::Transport(e)
            })?;

        read_response(url, resp).await
    }

    pub async fn athlete_stats(&self) -> StravaResult<String> {
        self.execute(&self.athlete_url("stats")).await
    }

    /// First page only, in the API's newest first order.
    pub async fn athlete_activities(&self) -> StravaResult<String> {
        self.execute(&self.athlete_url("activities")).await
    }
}

async fn read_response(url: &str, resp: reqwest::Response) -> StravaResult<String> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_else(|e| {
            debug!("could not read {status} body from {url}: {e}");
            String::new()
        });
        warn!("{url} responded with {status}");
        return Err(StravaError::Status { status, body });
    }

    resp.text().await.map_err(|e| {
        error!("could not read response body from {url}: {e}");
        StravaError::Body(e)
    })
}
