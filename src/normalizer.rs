use crate::error::{Error, Result};
use crate::leg::LegRecord;
use crate::tier::resource_waste_score;
use crate::weights::Weights;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;


/// Composite score for one outbound/inbound pair, with the intermediate values
/// it was built from.
#[derive(Clone, Debug, PartialEq, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
pub struct NormalizationResult {
    pub score: i64,
    #[tabled(rename = "gap (h)")]
    pub gap_hours: f64,
    #[tabled(rename = "resource waste")]
    pub resource_waste_score: f64,
    #[tabled(rename = "combined priority")]
    pub combined_priority: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundTripPriorityNormalizer {
    weights: Weights,
}

impl RoundTripPriorityNormalizer {
    pub fn new(weights: Weights) -> Self {
        RoundTripPriorityNormalizer { weights }
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    /// Signed idle time, in minutes, between the outbound leg freeing its
    /// resource and the inbound leg needing it. Negative means the pair
    /// overlaps.
    pub fn turnaround_gap_minutes(outbound: &LegRecord, inbound: &LegRecord) -> Result<f64> {
        let available = outbound.available_at()?;
        let required = inbound.required_at()?;
        let day_delta = outbound.day()?.offset_minutes_to(inbound.day()?);
        Ok(day_delta as f64 + (required - available))
    }

    /// Priority indices outside 0..=100 are not rejected; they push the score
    /// outside 0..=100 accordingly. NaN or infinite durations, buffers or
    /// priorities are rejected, since the integer score cannot represent them.
    pub fn normalize(&self, outbound: &LegRecord, inbound: &LegRecord) -> Result<NormalizationResult> {
        let gap_minutes = finite("turnaround gap", Self::turnaround_gap_minutes(outbound, inbound)?)?;
        let gap_hours = gap_minutes / 60.0;
        let resource_waste_score = resource_waste_score(gap_hours);

        let combined_priority = finite(
            "combined priority",
            (outbound.normalized_priority() + inbound.normalized_priority()) / 2.0,
        )?;
        let final_score = self.weights.blend(combined_priority, resource_waste_score);
        let score = (final_score * 100.0).round() as i64;

        debug!(
            gap_minutes,
            gap_hours,
            resource_waste_score,
            combined_priority,
            final_score,
            score,
            "normalized round trip"
        );

        Ok(NormalizationResult {
            score,
            gap_hours,
            resource_waste_score,
            combined_priority,
        })
    }
}

fn finite(quantity: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { quantity, value })
    }
}

/// Scores a pair with the reference calibration.
pub fn normalize_round_trip_priority(outbound: &LegRecord, inbound: &LegRecord) -> Result<NormalizationResult> {
    RoundTripPriorityNormalizer::default().normalize(outbound, inbound)
}
