use crate::error::Result;
use crate::time::{ClockTime, DayLabel};
use serde::Deserialize;
use tabled::Tabled;

/// One direction of a round trip, as supplied by the planning pipeline.
///
/// Fields are kept in their raw form; `day_label` and `departure_time` are
/// only parsed when the leg is scored.
#[derive(Clone, Debug, PartialEq, Deserialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct LegRecord {
    #[serde(alias = "日付")]
    #[tabled(rename = "day")]
    pub day_label: String,
    #[serde(alias = "出発時刻")]
    #[tabled(rename = "departure")]
    pub departure_time: String,
    #[serde(alias = "飛行時間")]
    #[tabled(rename = "duration (min)")]
    pub flight_duration_minutes: f64,
    #[serde(alias = "優先順位指数")]
    #[tabled(rename = "priority")]
    pub priority_index: f64,
    #[serde(alias = "飛行前必要時間")]
    #[tabled(rename = "pre-flight (min)")]
    pub pre_flight_buffer_minutes: f64,
    #[serde(alias = "飛行後必要時間")]
    #[tabled(rename = "post-flight (min)")]
    pub post_flight_buffer_minutes: f64,
}

impl LegRecord {
    pub fn day(&self) -> Result<DayLabel> {
        self.day_label.parse()
    }

    pub fn departure(&self) -> Result<ClockTime> {
        self.departure_time.parse()
    }

    pub fn normalized_priority(&self) -> f64 {
        self.priority_index / 100.0
    }

    /// Clock-minute (within the leg's day) at which the resource is free again.
    pub fn available_at(&self) -> Result<f64> {
        let arrival = self.departure()?.minutes() + self.flight_duration_minutes;
        Ok(arrival + self.post_flight_buffer_minutes)
    }

    /// Clock-minute (within the leg's day) at which ground preparation starts.
    pub fn required_at(&self) -> Result<f64> {
        Ok(self.departure()?.minutes() - self.pre_flight_buffer_minutes)
    }
}
