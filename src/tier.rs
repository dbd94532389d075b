use tracing::trace;

/// Resource-efficiency bucket for a turnaround gap. A higher score means
/// better utilization of the aircraft and crew.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceTier {
    /// Inclusive upper bound of the gap, in hours.
    pub max_gap_hours: f64,
    pub score: f64,
}

/// Evaluated in order, first match wins. The last entry catches everything.
pub static RESOURCE_TIERS: [ResourceTier; 4] = [
    ResourceTier { max_gap_hours: 4.0, score: 1.0 },
    ResourceTier { max_gap_hours: 8.0, score: 0.8 },
    ResourceTier { max_gap_hours: 16.0, score: 0.5 },
    ResourceTier { max_gap_hours: f64::INFINITY, score: 0.2 },
];

/// Negative gaps (infeasible turnarounds) land in the first tier.
pub fn resource_tier(gap_hours: f64) -> &'static ResourceTier {
    let tier = RESOURCE_TIERS
        .iter()
        .find(|t| gap_hours <= t.max_gap_hours)
        .unwrap_or(&RESOURCE_TIERS[RESOURCE_TIERS.len() - 1]);
    trace!(gap_hours, max_gap_hours = tier.max_gap_hours, score = tier.score, "resolved resource tier");
    tier
}

pub fn resource_waste_score(gap_hours: f64) -> f64 {
    resource_tier(gap_hours).score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(resource_waste_score(4.0), 1.0);
        assert_eq!(resource_waste_score(4.0 + 1.0 / 60.0), 0.8);
        assert_eq!(resource_waste_score(8.0), 0.8);
        assert_eq!(resource_waste_score(8.5), 0.5);
        assert_eq!(resource_waste_score(16.0), 0.5);
        assert_eq!(resource_waste_score(16.0 + 1.0 / 60.0), 0.2);
        assert_eq!(resource_waste_score(200.0), 0.2);
    }

    #[test]
    fn test_negative_gap_scores_as_tightest() {
        assert_eq!(resource_waste_score(-1.0), 1.0);
        assert_eq!(resource_waste_score(-48.0), 1.0);
    }

    #[test]
    fn test_table_is_ordered() {
        for pair in RESOURCE_TIERS.windows(2) {
            assert!(pair[0].max_gap_hours < pair[1].max_gap_hours);
            assert!(pair[0].score > pair[1].score);
        }
        assert_eq!(RESOURCE_TIERS[3].max_gap_hours, f64::INFINITY);
    }

    #[test]
    fn test_nan_gap_falls_through_to_last_tier() {
        assert_eq!(resource_waste_score(f64::NAN), 0.2);
    }
}
