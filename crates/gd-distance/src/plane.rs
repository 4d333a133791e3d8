//! Flat-earth approximation for short distances.
//!
//! # Accuracy
//!
//! The longitude delta is scaled by the cosine of the *mean* latitude and the
//! result is treated as a Euclidean vector.  Error grows with latitude span,
//! proximity to the poles, and overall distance:
//!
//! | Separation | Typical error vs. [`SphericalDistance`](crate::SphericalDistance) |
//! |------------|-----------------------------------------------------------|
//! | 0.1°       | < 1 m                                                     |
//! | 1°         | < 10 m                                                    |
//! | 10°        | < 10 km                                                   |
//!
//! Pure north–south pairs have no scaling error at any range.

use gd_core::{GeoPoint, R};

use crate::DistanceCalc;

/// Equirectangular distance: `R·√(Δφ² + (cos φ̄ · Δλ)²)`.
///
/// Normalized unit: `(d / R)²`, the squared angular length.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaneProjection;

impl DistanceCalc for PlaneProjection {
    fn calc_dist(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        self.calc_denormalized_dist(self.calc_normalized_dist(from, to))
    }

    fn calc_normalized_dist(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let d_lat = (to.lat - from.lat).to_radians();
        let d_lon = (to.lon - from.lon).to_radians();
        let left = ((from.lat + to.lat) * 0.5).to_radians().cos() * d_lon;
        d_lat * d_lat + left * left
    }

    #[inline]
    fn normalize_dist(&self, dist_m: f64) -> f64 {
        let a = dist_m / R;
        a * a
    }

    #[inline]
    fn calc_denormalized_dist(&self, normalized: f64) -> f64 {
        R * normalized.sqrt()
    }
}
