//! Spherical Earth constants and planet-scale helpers.
//!
//! Every strategy in `gd-distance` models the Earth as a sphere of radius
//! [`R`].  Ellipsoidal corrections are deliberately absent.

use std::f64::consts::PI;

/// Mean Earth radius, metres.
pub const R: f64 = 6_371_000.0;

/// Mean Earth circumference, metres.
pub const C: f64 = 2.0 * PI * R;

/// Length of the circle of latitude at `lat` degrees, in metres.
///
/// Returns exactly [`C`] at the equator.
#[inline]
pub fn calc_circumference(lat: f64) -> f64 {
    C * lat.to_radians().cos()
}

/// Worst-case position error of a bit-interleaved spatial key that uses
/// `bit_precision` bits.
///
/// Each bit refines only one of the two interleaved axes, so precisions `2k`
/// and `2k + 1` share the same bound `C / 2^(k + 1)`.
pub fn calc_spatial_key_max_dist(bit_precision: u32) -> f64 {
    let halvings = bit_precision / 2 + 1;
    // powi takes i32; anything past ~2100 halvings is 0.0 anyway.
    C / 2f64.powi(halvings.min(i32::MAX as u32) as i32)
}
