use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Strava sends `null` for values it has no data for, e.g. the lat/lng of an
/// indoor activity.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Summary activity as returned by `GET /athletes/{id}/activities`.
///
/// Only `id`, `start_date`, `distance` and `map` are required, everything else
/// falls back to its default so trimmed documents still decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Activity {
    pub id: u64,
    pub start_date: DateTime<Utc>,
    /// Meters
    pub distance: f64,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub activity_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sport_type: String,
    pub map: ActivityMap,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub athlete: AthleteRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_state: u8,
    #[serde(default, deserialize_with = "null_as_default")]
    pub moving_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elapsed_time: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_elevation_gain: f64,
    /// Strava encodes local wall clock with a `Z` suffix.
    #[serde(default)]
    pub start_date_local: Option<DateTime<Utc>>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub utc_offset: f64,
    #[serde(default)]
    pub location_city: Option<String>,
    #[serde(default)]
    pub location_state: Option<String>,
    #[serde(default)]
    pub location_country: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub achievement_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kudos_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub athlete_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_photo_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pr_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trainer: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub commute: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub manual: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub private: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub flagged: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_kudoed: bool,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub gear_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_latlng: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_latlng: Vec<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_speed: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub max_speed: f64,
    #[serde(default)]
    pub average_cadence: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_heartrate: bool,
    #[serde(default)]
    pub average_heartrate: Option<f64>,
    #[serde(default)]
    pub max_heartrate: Option<f64>,
    #[serde(default)]
    pub elev_high: Option<f64>,
    #[serde(default)]
    pub elev_low: Option<f64>,
    #[serde(default)]
    pub upload_id: Option<u64>,
    #[serde(default)]
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct AthleteRef {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_state: u8,
}

/// Summary route of an activity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ActivityMap {
    pub id: String,
    #[serde(default)]
    pub summary_polyline: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resource_state: u8,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::Activity;

    #[test]
    fn decode_summary_activity() {
        let json = r#"{
            "resource_state": 2,
            "athlete": { "id": 130630970, "resource_state": 1 },
            "name": "Morning Run",
            "distance": 10012.3,
            "moving_time": 3021,
            "elapsed_time": 3100,
            "total_elevation_gain": 54.0,
            "type": "Run",
            "sport_type": "Run",
            "id": 11223344556,
            "start_date": "2024-01-09T06:30:00Z",
            "start_date_local": "2024-01-09T07:30:00Z",
            "timezone": "(GMT+01:00) Europe/Copenhagen",
            "utc_offset": 3600.0,
            "map": { "id": "a11223344556", "summary_polyline": "abc~", "resource_state": 2 },
            "gear_id": null,
            "start_latlng": [55.67, 12.56],
            "end_latlng": [55.68, 12.57],
            "average_speed": 3.314,
            "has_heartrate": true,
            "average_heartrate": 151.2
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.id, 11223344556);
        assert_eq!(activity.athlete.id, 130630970);
        assert_eq!(activity.activity_type, "Run");
        assert_eq!(activity.distance, 10012.3);
        assert_eq!(
            activity.start_date,
            Utc.with_ymd_and_hms(2024, 1, 9, 6, 30, 0).unwrap()
        );
        assert_eq!(activity.map.summary_polyline.as_deref(), Some("abc~"));
        assert_eq!(activity.gear_id, None);
        assert_eq!(activity.average_heartrate, Some(151.2));
        assert_eq!(activity.kudos_count, 0);
    }

    #[test]
    fn decode_minimal_activity() {
        let json = r#"{
            "id": 1,
            "start_date": "2024-01-01T00:00:00Z",
            "distance": 0.0,
            "map": { "id": "a1" }
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();
        assert_eq!(activity.map.summary_polyline, None);
        assert!(activity.start_latlng.is_empty());
        assert!(activity.sport_type.is_empty());
    }

    #[test]
    fn decode_nulls_as_defaults() {
        let json = r#"[{
            "id": 7,
            "start_date": "2024-01-09T06:00:00Z",
            "distance": 5000.0,
            "type": null,
            "sport_type": "VirtualRun",
            "name": null,
            "map": { "id": "a7", "summary_polyline": null, "resource_state": null },
            "athlete": { "id": 130630970, "resource_state": null },
            "start_latlng": null,
            "end_latlng": null,
            "kudos_count": null,
            "trainer": null,
            "average_speed": null,
            "utc_offset": null
        }]"#;

        let activities: Vec<Activity> = serde_json::from_str(json).unwrap();
        let activity = &activities[0];
        assert_eq!(activity.distance, 5000.0);
        assert!(activity.activity_type.is_empty());
        assert!(activity.start_latlng.is_empty());
        assert!(activity.end_latlng.is_empty());
        assert_eq!(activity.map.resource_state, 0);
        assert_eq!(activity.athlete.resource_state, 0);
        assert!(!activity.trainer);
        assert_eq!(activity.average_speed, 0.0);
    }
}
