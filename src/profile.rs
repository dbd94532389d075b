use crate::error::Result;
use crate::scenario::load_json;
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Operator characteristics used to calibrate the scoring weights.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct OperatorProfile {
    #[serde(default = "OperatorProfile::default_brand_recognition")]
    pub brand_recognition: f64,
    #[serde(default = "OperatorProfile::default_base_demand")]
    pub base_demand: f64,
    #[serde(default)]
    pub operation_scales: Vec<String>,
    #[serde(default = "OperatorProfile::default_route_count_range")]
    pub route_count_range: (u32, u32),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FleetClass {
    Large,
    Medium,
    Small,
}

impl fmt::Display for FleetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetClass::Large => write!(f, "large"),
            FleetClass::Medium => write!(f, "medium"),
            FleetClass::Small => write!(f, "small"),
        }
    }
}

impl OperatorProfile {
    const MAX_SCALES: f64 = 3.0;
    const DEMAND_REFERENCE: f64 = 200.0;
    const ROUTE_REFERENCE: f64 = 35.0;

    fn default_brand_recognition() -> f64 {
        0.5
    }

    fn default_base_demand() -> f64 {
        100.0
    }

    fn default_route_count_range() -> (u32, u32) {
        (10, 20)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        load_json(path)
    }

    pub fn fleet_class(&self) -> FleetClass {
        match self.operation_scales.len() {
            3 => FleetClass::Large,
            2 => FleetClass::Medium,
            _ => FleetClass::Small,
        }
    }

    /// Weighted 0..1 estimate of how much spare capacity the operator has.
    pub fn resource_abundance(&self) -> f64 {
        let (lo, hi) = self.route_count_range;
        let route_avg = (f64::from(lo) + f64::from(hi)) / 2.0;
        let scales = self.operation_scales.len() as f64;

        self.brand_recognition * 0.3
            + (self.base_demand / Self::DEMAND_REFERENCE) * 0.3
            + (scales / Self::MAX_SCALES) * 0.25
            + (route_avg / Self::ROUTE_REFERENCE) * 0.15
    }
}

impl Default for OperatorProfile {
    fn default() -> Self {
        OperatorProfile {
            brand_recognition: Self::default_brand_recognition(),
            base_demand: Self::default_base_demand(),
            operation_scales: vec![],
            route_count_range: Self::default_route_count_range(),
        }
    }
}
