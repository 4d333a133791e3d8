//! Exact great-circle distance on a spherical Earth.

use gd_core::{GeoPoint, R};

use crate::DistanceCalc;

/// Haversine distance on a sphere of radius [`R`].
///
/// Normalized unit: `sin²(θ/2)` where `θ` is the central angle, i.e. the
/// haversine term before `2R·asin(√·)` is applied.  It is monotonic in
/// distance up to half the circumference, which covers every pair of points
/// on the sphere.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SphericalDistance;

impl DistanceCalc for SphericalDistance {
    fn calc_dist(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        self.calc_denormalized_dist(self.calc_normalized_dist(from, to))
    }

    fn calc_normalized_dist(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let sin_d_lat = ((to.lat - from.lat).to_radians() * 0.5).sin();
        let sin_d_lon = ((to.lon - from.lon).to_radians() * 0.5).sin();

        // cos product grouped so that swapping the arguments is bit-exact.
        let cos_prod = from.lat_rad().cos() * to.lat_rad().cos();
        sin_d_lat * sin_d_lat + sin_d_lon * sin_d_lon * cos_prod
    }

    #[inline]
    fn normalize_dist(&self, dist_m: f64) -> f64 {
        let s = (dist_m / (2.0 * R)).sin();
        s * s
    }

    #[inline]
    fn calc_denormalized_dist(&self, normalized: f64) -> f64 {
        2.0 * R * normalized.sqrt().asin()
    }
}
