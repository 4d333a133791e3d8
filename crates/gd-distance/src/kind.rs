//! Strategy selection by name.
//!
//! `CalcKind` is the configuration-facing handle for a distance strategy:
//! parse it from a string (CLI flag, env var) or deserialize it from a config
//! file with the `serde` feature, then call [`CalcKind::calc`].

use std::fmt;
use std::str::FromStr;

use gd_core::GeoError;
use tracing::{debug, warn};

use crate::{DistanceCalc, PlaneProjection, SphericalDistance};

static SPHERICAL: SphericalDistance = SphericalDistance;
static PLANE: PlaneProjection = PlaneProjection;

/// Which distance strategy to use.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum CalcKind {
    /// Exact great-circle distance.
    #[default]
    Spherical,
    /// Fast flat-earth approximation.
    PlaneProjection,
}

impl CalcKind {
    /// The shared, zero-sized strategy instance for this kind.
    pub fn calc(self) -> &'static dyn DistanceCalc {
        debug!(kind = %self, "selected distance calculator");
        match self {
            CalcKind::Spherical       => &SPHERICAL,
            CalcKind::PlaneProjection => &PLANE,
        }
    }

    /// Canonical name; parses back via `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            CalcKind::Spherical       => "spherical",
            CalcKind::PlaneProjection => "plane_projection",
        }
    }
}

impl fmt::Display for CalcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalcKind {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spherical" | "sphere" | "haversine" => Ok(CalcKind::Spherical),
            "plane" | "plane_projection" | "planeprojection" => Ok(CalcKind::PlaneProjection),
            _ => {
                warn!(name = s, "rejecting unknown distance calculator");
                Err(GeoError::UnknownCalc(s.to_owned()))
            }
        }
    }
}
