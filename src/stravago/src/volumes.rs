use chrono::{DateTime, TimeZone};
use stravago_algos::WeeklyVolumeCalculator;
use stravago_types::{activities::Activity, volumes::GapPolicy};

use crate::StravaResult;

/// Decodes a raw activity list and renders its weekly volumes as a json array
/// of `{ "weekStart", "volume" }` objects, newest week first.
pub fn weekly_volumes_json<Tz: TimeZone>(
    activities: &str,
    now: &DateTime<Tz>,
    policy: GapPolicy,
) -> StravaResult<String> {
    let activities: Vec<Activity> = serde_json::from_str(activities).inspect_err(|e| {
        error!("could not parse activities: {e}");
    })?;

    let buckets = WeeklyVolumeCalculator::new(policy).calculate(&activities, now);
    info!(
        "{} activities, {} weeks",
        activities.len(),
        buckets.len()
    );

    Ok(serde_json::to_string(&buckets)?)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use serde_json::json;
    use stravago_types::volumes::GapPolicy;

    use super::weekly_volumes_json;
    use crate::StravaError;

    const ACTIVITIES: &str = r#"[
        { "id": 3, "type": "Run", "sport_type": "Run", "distance": 5000.0,
          "start_date": "2024-01-09T06:00:00Z", "map": { "id": "a3", "summary_polyline": "" } },
        { "id": 2, "type": "Ride", "sport_type": "GravelRide", "distance": 40000.0,
          "start_date": "2024-01-08T16:00:00Z", "map": { "id": "a2", "summary_polyline": "" } },
        { "id": 1, "type": "Run", "sport_type": "Run", "distance": 12000.0,
          "start_date": "2024-01-03T06:00:00Z", "map": { "id": "a1", "summary_polyline": "" } }
    ]"#;

    #[test]
    fn test_weekly_volumes_json() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let now = cet.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();

        let json = weekly_volumes_json(ACTIVITIES, &now, GapPolicy::Compat).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            json!([
                { "weekStart": "2024-01-08T00:01:00+01:00", "volume": 45000.0 },
                { "weekStart": "2024-01-01T00:01:00+01:00", "volume": 12000.0 },
            ])
        );
    }

    #[test]
    fn test_no_activities() {
        let cet = FixedOffset::east_opt(3600).unwrap();
        let now = cet.with_ymd_and_hms(2024, 1, 14, 23, 0, 0).unwrap();

        let json = weekly_volumes_json("[]", &now, GapPolicy::Compat).unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&json).unwrap(),
            json!([{ "weekStart": "2024-01-08T00:01:00+01:00", "volume": 0.0 }])
        );
    }

    #[test]
    fn test_activities_without_gps() {
        let now = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 10, 12, 0, 0)
            .unwrap();
        let activities = r#"[{"id":1,"distance":5000.0,"start_date":"2024-01-09T06:00:00Z","map":{"id":"a1","summary_polyline":""},"start_latlng":null}]"#;

        let json = weekly_volumes_json(activities, &now, GapPolicy::Compat).unwrap();
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&json).unwrap(),
            json!([{ "weekStart": "2024-01-08T00:01:00+01:00", "volume": 5000.0 }])
        );
    }

    #[test]
    fn test_malformed_activities() {
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 10, 12, 0, 0)
            .unwrap();

        let err = weekly_volumes_json(r#"{"message":"Record Not Found"}"#, &now, GapPolicy::Compat)
            .unwrap_err();
        assert!(matches!(err, StravaError::Parse(_)));
    }
}
