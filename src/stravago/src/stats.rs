use stravago_types::stats::{AthleteStats, StatsCategory};

use crate::{StravaError, StravaResult};

/// Picks one totals subtree out of a raw stats document and serializes it on
/// its own.
pub fn filter_stats(stats: &str, category: StatsCategory) -> StravaResult<Vec<u8>> {
    let stats: AthleteStats = serde_json::from_str(stats).inspect_err(|e| {
        error!("could not parse athlete stats: {e}");
    })?;

    let Some(totals) = stats.totals(category) else {
        warn!("{category} missing from athlete stats");
        return Err(StravaError::CategoryNotFound(category));
    };

    debug!("{category}: {totals:?}");
    Ok(serde_json::to_vec(totals)?)
}
