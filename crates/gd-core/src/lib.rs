//! `gd-core` — foundational types for the `geodist` distance library.
//!
//! This crate is a dependency of every other `gd-*` crate.  It has no `gd-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`geo`]   | `GeoPoint`, `BBox`                                         |
//! | [`earth`] | `R`, `C`, circle-of-latitude and spatial-key helpers       |
//! | [`error`] | `GeoError`, `GeoResult`                                    |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod earth;
pub mod error;
pub mod geo;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use earth::{calc_circumference, calc_spatial_key_max_dist, C, R};
pub use error::{GeoError, GeoResult};
pub use geo::{BBox, GeoPoint};
