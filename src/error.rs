//! Error types for the helper routines.

use thiserror::Error;

/// Errors raised by strict-range conversions, rectangle growth and
/// configuration files.
#[derive(Error, Debug)]
pub enum HelperError {
    /// I/O error while reading or writing a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input channel outside its documented range
    #[error("{what} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending channel
        what: String,
        /// The rejected value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },

    /// Float input is NaN or infinite
    #[error("{what} is not a finite number")]
    NotFinite {
        /// Name of the offending channel
        what: String,
    },

    /// Growing the rectangle to the point would overflow `i32`
    #[error("Rectangle overflow while including point ({x}, {y})")]
    RectOverflow {
        /// Point x coordinate
        x: i32,
        /// Point y coordinate
        y: i32,
    },

    /// Configuration file written by a newer format version
    #[error("Unsupported config version: found {found}, expected at most {expected}")]
    UnsupportedVersion {
        /// Version found in the file
        found: u32,
        /// Newest version this crate reads
        expected: u32,
    },
}

impl HelperError {
    /// Create an out-of-range error for a named channel.
    pub fn out_of_range(
        what: impl Into<String>,
        value: impl Into<f64>,
        min: impl Into<f64>,
        max: impl Into<f64>,
    ) -> Self {
        Self::OutOfRange {
            what: what.into(),
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    /// Create a non-finite error for a named channel.
    pub fn not_finite(what: impl Into<String>) -> Self {
        Self::NotFinite { what: what.into() }
    }
}

/// Result type alias for helper operations.
pub type Result<T> = std::result::Result<T, HelperError>;
