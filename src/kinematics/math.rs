// src/kinematics/math.rs
//! Small geometry helpers shared by the transforms.

use serde::{Deserialize, Serialize};

/// Half-width of the band around zero treated as exactly zero when
/// detecting the upright head configuration.
pub const FUZZY_ZERO_TOLERANCE: f64 = 0.00001;

/// A point or offset in machine Cartesian space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Convert a radius and two angles in degrees into a Cartesian offset.
///
/// `azimuth` rotates about Z, `polar` is measured from +Z.
pub fn spherical_to_cartesian(radius: f64, azimuth: f64, polar: f64) -> Cartesian {
    let (t, p) = (azimuth.to_radians(), polar.to_radians());
    Cartesian {
        x: radius * p.sin() * t.cos(),
        y: radius * p.sin() * t.sin(),
        z: radius * p.cos(),
    }
}

/// True when `n` lies strictly inside the fuzzy-zero band.
pub fn fuzzy_zero(n: f64) -> bool {
    n < FUZZY_ZERO_TOLERANCE && n > -FUZZY_ZERO_TOLERANCE
}
