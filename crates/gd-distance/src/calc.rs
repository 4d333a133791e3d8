//! The distance-strategy trait.
//!
//! # Pluggability
//!
//! Callers hold a `&dyn DistanceCalc` (or a generic `D: DistanceCalc`) and
//! can swap the exact [`SphericalDistance`](crate::SphericalDistance) for the
//! cheaper [`PlaneProjection`](crate::PlaneProjection) without touching call
//! sites.
//!
//! # Normalized distances
//!
//! Each strategy defines its own *normalized* unit: a monotonic function of
//! metres that skips the final `asin`/`sqrt`.  Normalized values are only
//! comparable with values from the same strategy.  Use
//! [`normalize_dist`](DistanceCalc::normalize_dist) to turn a metre threshold
//! into that unit once, then compare many candidates against it.

use gd_core::{calc_circumference, BBox, GeoError, GeoPoint, GeoResult, C};
use tracing::trace;

/// A stateless strategy for computing distances on the Earth's surface.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; all shipped strategies are
/// zero-sized and can be shared freely.
pub trait DistanceCalc: Send + Sync {
    /// Distance in metres between `from` and `to`.
    fn calc_dist(&self, from: GeoPoint, to: GeoPoint) -> f64;

    /// Normalized distance between `from` and `to`, computed directly from
    /// the coordinates.
    fn calc_normalized_dist(&self, from: GeoPoint, to: GeoPoint) -> f64;

    /// Converts a distance in metres to this strategy's normalized unit.
    fn normalize_dist(&self, dist_m: f64) -> f64;

    /// Inverse of [`normalize_dist`](Self::normalize_dist): normalized unit
    /// back to metres.
    fn calc_denormalized_dist(&self, normalized: f64) -> f64;

    /// Perpendicular projection of `r` onto the infinite line through `a`
    /// and `b`.
    ///
    /// Longitudes are scaled by the cosine of the segment's mean latitude
    /// before projecting, so the foot of the perpendicular is correct for
    /// short segments away from the poles.  The projection factor is *not*
    /// clamped; use [`valid_edge_distance`](Self::valid_edge_distance) to
    /// check whether the result lies between `a` and `b`.
    ///
    /// Degenerate segments:
    /// * `a == b` → `a`
    /// * horizontal (`a.lat == b.lat`) → `(a.lat, r.lon)`
    /// * vertical (`a.lon == b.lon`) → `(r.lat, a.lon)`
    fn calc_crossing_point_to_edge(&self, r: GeoPoint, a: GeoPoint, b: GeoPoint) -> GeoPoint {
        let shrink = ((a.lat + b.lat) * 0.5).to_radians().cos();
        let a_lon = a.lon * shrink;
        let b_lon = b.lon * shrink;
        let r_lon = r.lon * shrink;

        let d_lon = b_lon - a_lon;
        let d_lat = b.lat - a.lat;

        if d_lat == 0.0 && d_lon == 0.0 {
            trace!(%a, "zero-length edge, projecting onto its single point");
            return a;
        }
        if d_lat == 0.0 {
            return GeoPoint::new(a.lat, r.lon);
        }
        if d_lon == 0.0 {
            return GeoPoint::new(r.lat, a.lon);
        }

        let norm = d_lon * d_lon + d_lat * d_lat;
        let t = ((r_lon - a_lon) * d_lon + (r.lat - a.lat) * d_lat) / norm;

        GeoPoint::new(a.lat + t * d_lat, (a_lon + t * d_lon) / shrink)
    }

    /// Normalized distance from `r` to its perpendicular projection onto the
    /// line through `a` and `b`.
    ///
    /// A zero-length segment yields the point-to-point distance to `a`, so
    /// the result is never NaN for finite input.
    fn calc_normalized_edge_distance(&self, r: GeoPoint, a: GeoPoint, b: GeoPoint) -> f64 {
        let crossing = self.calc_crossing_point_to_edge(r, a, b);
        self.calc_normalized_dist(r, crossing)
    }

    /// `true` if the perpendicular projection of `r` onto `a–b` lands inside
    /// the closed segment.
    ///
    /// Evaluated on raw degrees: both `AB·AR` and `BA·BR` must be
    /// non-negative.  A zero-length segment accepts every `r`, consistent
    /// with its edge distance collapsing onto `a`.
    fn valid_edge_distance(&self, r: GeoPoint, a: GeoPoint, b: GeoPoint) -> bool {
        let ab_lon = b.lon - a.lon;
        let ab_lat = b.lat - a.lat;

        let ar_dot = (r.lon - a.lon) * ab_lon + (r.lat - a.lat) * ab_lat;
        let rb_dot = (b.lon - r.lon) * ab_lon + (b.lat - r.lat) * ab_lat;

        ar_dot >= 0.0 && rb_dot >= 0.0
    }

    /// Bounding box enclosing every point within `radius_m` of `center`.
    ///
    /// The box is conservative: its corners lie farther than `radius_m`.
    fn create_bbox(&self, center: GeoPoint, radius_m: f64) -> GeoResult<BBox> {
        if !(radius_m > 0.0 && radius_m.is_finite()) {
            return Err(GeoError::InvalidRadius(radius_m));
        }
        let d_lat = 360.0 * radius_m / C;
        let d_lon = 360.0 * radius_m / calc_circumference(center.lat);

        Ok(BBox::new(
            center.lon - d_lon,
            center.lon + d_lon,
            center.lat - d_lat,
            center.lat + d_lat,
        ))
    }
}
