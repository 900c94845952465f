use reqwest::StatusCode;
use stravago_types::stats::StatsCategory;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StravaError {
    #[error("request to Strava failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Strava responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("could not read response body: {0}")]
    Body(#[source] reqwest::Error),
    #[error("could not (de)serialize json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{0}` not present in athlete stats")]
    CategoryNotFound(StatsCategory),
}

pub type StravaResult<T> = Result<T, StravaError>;
