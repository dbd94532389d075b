//! Priority scoring for round-trip flight pairs.
//!
//! A pair of legs is reduced to one 0..=100 score that blends the legs'
//! standalone priority indices with how efficiently the turnaround uses
//! the aircraft and crew on the ground.

pub mod error;
pub mod leg;
pub mod normalizer;
pub mod profile;
pub mod scenario;
pub mod tier;
pub mod time;
pub mod weights;

pub use error::{Error, Result};
pub use leg::LegRecord;
pub use normalizer::{normalize_round_trip_priority, NormalizationResult, RoundTripPriorityNormalizer};
pub use weights::Weights;
