//! Error types shared by the parsers, the normalizer and scenario loading.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Departure time that is not a zero-padded `HH:MM` clock time
    #[error("invalid time format {input:?}: {reason}")]
    InvalidTimeFormat { input: String, reason: &'static str },

    /// Day label without a leading non-negative integer
    #[error("invalid day label {input:?}: expected a non-negative integer followed by \"日\"")]
    InvalidDayLabel { input: String },

    /// NaN or infinite leg numbers reaching the composite
    #[error("non-finite {quantity} ({value}) cannot be scored")]
    NonFiniteValue { quantity: &'static str, value: f64 },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
