//! Library error type.
//!
//! The distance operations themselves are total and never fail; only the
//! helpers that take user-supplied parameters (bounding-box radius, strategy
//! names from configuration) return `GeoResult`.

use thiserror::Error;

/// The error type shared by all `gd-*` crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("radius must be positive and finite, got {0} m")]
    InvalidRadius(f64),

    #[error("unknown distance calculator {0:?}")]
    UnknownCalc(String),
}

/// Shorthand result type for all `gd-*` crates.
pub type GeoResult<T> = Result<T, GeoError>;
