use crate::error::{Error, Result};
use crate::leg::LegRecord;
use crate::profile::OperatorProfile;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;

/// Reads and deserializes a JSON file, tagging failures with its path.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// One round-trip pair plus, optionally, the operator it is scored for.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Scenario {
    pub outbound: LegRecord,
    pub inbound: LegRecord,
    #[serde(default)]
    pub profile: Option<OperatorProfile>,
}

impl Scenario {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        load_json(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scenario_without_profile() {
        let data = r#"{
            "outbound": {"dayLabel": "1日", "departureTime": "07:00", "flightDurationMinutes": 120,
                         "priorityIndex": 80, "preFlightBufferMinutes": 30, "postFlightBufferMinutes": 20},
            "inbound":  {"dayLabel": "1日", "departureTime": "14:30", "flightDurationMinutes": 150,
                         "priorityIndex": 70, "preFlightBufferMinutes": 40, "postFlightBufferMinutes": 10}
        }"#;
        let scenario: Scenario = serde_json::from_str(data).unwrap();
        assert_eq!(scenario.inbound.departure_time, "14:30");
        assert_eq!(scenario.profile, None);
    }

    #[test]
    fn test_parse_scenario_with_profile() {
        let data = r#"{
            "outbound": {"日付": "1日", "出発時刻": "07:00", "飛行時間": 120,
                         "優先順位指数": 80, "飛行前必要時間": 30, "飛行後必要時間": 20},
            "inbound":  {"日付": "2日", "出発時刻": "08:00", "飛行時間": 150,
                         "優先順位指数": 70, "飛行前必要時間": 40, "飛行後必要時間": 10},
            "profile": {"brand_recognition": 0.55, "base_demand": 85,
                        "operation_scales": ["中規模運航", "小規模運航"], "route_count_range": [15, 25]}
        }"#;
        let scenario: Scenario = serde_json::from_str(data).unwrap();
        assert_eq!(scenario.outbound.priority_index, 80.0);
        assert_eq!(scenario.profile.unwrap().route_count_range, (15, 25));
    }

    #[test]
    fn test_load_json_reports_malformed_file() {
        let path = std::env::temp_dir().join(format!("round_trip_malformed_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"outbound": "#).unwrap();

        let scenario = Scenario::load_from_file(&path).unwrap_err();
        let profile = OperatorProfile::load_from_file(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(scenario, Error::Json { .. }));
        assert!(matches!(profile, Error::Json { path: ref p, .. } if *p == path));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scenario::load_from_file(Path::new("no/such/scenario.json")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("no/such/scenario.json"));
    }
}
