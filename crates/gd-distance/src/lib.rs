//! `gd-distance` — distance strategies over `gd-core` coordinates.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`calc`]  | `DistanceCalc` trait, shared edge-projection and bbox logic   |
//! | [`sphere`]| `SphericalDistance` (haversine, reference)                    |
//! | [`plane`] | `PlaneProjection` (flat-earth fast path)                      |
//! | [`kind`]  | `CalcKind` — pick a strategy by name or from configuration    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `CalcKind`.             |

pub mod calc;
pub mod kind;
pub mod plane;
pub mod sphere;


pub use calc::DistanceCalc;
pub use kind::CalcKind;
pub use plane::PlaneProjection;
pub use sphere::SphericalDistance;

pub use gd_core::{BBox, GeoError, GeoPoint, GeoResult};
