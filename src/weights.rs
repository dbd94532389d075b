use crate::profile::OperatorProfile;

/// Calibration pair for the composite score. The two weights sum to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub priority: f64,
    pub resource_waste: f64,
}

impl Weights {
    /// Calibration of the mid-size reference operator.
    pub const DEFAULT: Weights = Weights {
        priority: 0.759,
        resource_waste: 0.241,
    };

    const WASTE_BASE: f64 = 0.35;
    const WASTE_ABUNDANCE_FACTOR: f64 = 0.2;
    const WASTE_MIN: f64 = 0.10;
    const WASTE_MAX: f64 = 0.30;

    /// Operators with more spare capacity care less about idle ground time.
    pub fn from_profile(profile: &OperatorProfile) -> Weights {
        let waste = (Self::WASTE_BASE - profile.resource_abundance() * Self::WASTE_ABUNDANCE_FACTOR)
            .clamp(Self::WASTE_MIN, Self::WASTE_MAX);
        Weights {
            priority: round3(1.0 - waste),
            resource_waste: round3(waste),
        }
    }

    pub fn blend(&self, combined_priority: f64, resource_waste_score: f64) -> f64 {
        self.priority * combined_priority + self.resource_waste * resource_waste_score
    }
}

impl Default for Weights {
    fn default() -> Self {
        Weights::DEFAULT
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}
