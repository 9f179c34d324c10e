// src/kinematics/mod.rs
//! Joint-space / Cartesian-space transforms.
//!
//! A [`Kinematics`] implementation maps the machine's joint positions to the
//! tool-tip [`Pose`] and back. Transforms are pure: everything they read
//! besides their argument arrives in a [`KinsParams`] snapshot.

mod five_axis;
pub mod math;

pub use five_axis::FiveAxisKinematics;
pub use math::{Cartesian, FUZZY_ZERO_TOLERANCE, fuzzy_zero, spherical_to_cartesian};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default distance from the tilt-axis intersection to the tool reference point.
pub const DEFAULT_PIVOT_LENGTH: f64 = 250.0;

#[derive(Debug, Error, PartialEq)]
pub enum KinematicsError {
    #[error("unknown kinematics module '{0}'")]
    UnknownModule(String),
}

/// Which directions a kinematics module can solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KinematicsType {
    /// Joints and Cartesian axes are the same thing.
    Identity,
    ForwardOnly,
    InverseOnly,
    /// Both directions are closed-form.
    Both,
}

/// Joint positions of the 5-axis head machine.
///
/// Field order matches the host's positional joint numbering 0..=8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct JointVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Head tilt, degrees.
    pub tilt: f64,
    /// Spindle spin, degrees. Not part of the geometry.
    pub spin: f64,
    /// Head rotation about Z, degrees.
    pub rotation: f64,
    pub u: f64,
    pub v: f64,
    /// Tool-length-compensating linear joint.
    pub w: f64,
}

impl JointVector {
    pub fn to_array(&self) -> [f64; 9] {
        [
            self.x,
            self.y,
            self.z,
            self.tilt,
            self.spin,
            self.rotation,
            self.u,
            self.v,
            self.w,
        ]
    }
}

impl From<[f64; 9]> for JointVector {
    fn from(j: [f64; 9]) -> Self {
        Self {
            x: j[0],
            y: j[1],
            z: j[2],
            tilt: j[3],
            spin: j[4],
            rotation: j[5],
            u: j[6],
            v: j[7],
            w: j[8],
        }
    }
}

impl From<JointVector> for [f64; 9] {
    fn from(j: JointVector) -> Self {
        j.to_array()
    }
}

/// Tool-tip pose in machine space. Angles are degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub tran: Cartesian,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub u: f64,
    pub v: f64,
    pub w: f64,
}

impl From<[f64; 9]> for Pose {
    /// Positional order `x y z a b c u v w`.
    fn from(p: [f64; 9]) -> Self {
        Self {
            tran: Cartesian::new(p[0], p[1], p[2]),
            a: p[3],
            b: p[4],
            c: p[5],
            u: p[6],
            v: p[7],
            w: p[8],
        }
    }
}

/// Read-only copy of the externally owned scalars for one transform call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinsParams {
    pub pivot_length: f64,
    pub tool_length: f64,
}

impl Default for KinsParams {
    fn default() -> Self {
        Self {
            pivot_length: DEFAULT_PIVOT_LENGTH,
            tool_length: 0.0,
        }
    }
}

/// Scratch flags exchanged with the host alongside a transform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KinematicsFlags {
    pub forward: u64,
    pub inverse: u64,
}

/// Kinematics handler for a machine geometry
pub trait Kinematics: Send + Sync {
    /// Convert joint positions to the tool-tip pose
    fn forward(&self, joints: &JointVector, params: &KinsParams) -> Pose;

    /// Convert a tool-tip pose to joint positions
    fn inverse(&self, pose: &Pose, params: &KinsParams) -> JointVector;

    /// Pose at homing. Joint space is authoritative, so this resets the
    /// flags and runs the forward transform.
    fn home(&self, joints: &JointVector, params: &KinsParams, flags: &mut KinematicsFlags) -> Pose {
        *flags = KinematicsFlags::default();
        self.forward(joints, params)
    }

    fn kinematics_type(&self) -> KinematicsType;
}

/// Factory for creating kinematics handlers by module name
pub fn create_kinematics(name: &str) -> Result<Box<dyn Kinematics>, KinematicsError> {
    match name.trim().to_ascii_lowercase().as_str() {
        "5axiskins" | "5axis" => Ok(Box::new(FiveAxisKinematics)),
        _ => Err(KinematicsError::UnknownModule(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_array_order() {
        let arr = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let j = JointVector::from(arr);
        assert_eq!(j.tilt, 3.0);
        assert_eq!(j.spin, 4.0);
        assert_eq!(j.rotation, 5.0);
        assert_eq!(j.w, 8.0);
        assert_eq!(<[f64; 9]>::from(j), arr);
    }

    #[test]
    fn test_pose_array_order() {
        let p = Pose::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(p.tran, Cartesian::new(1.0, 2.0, 3.0));
        assert_eq!((p.a, p.b, p.c), (4.0, 5.0, 6.0));
        assert_eq!((p.u, p.v, p.w), (7.0, 8.0, 9.0));
    }

    #[test]
    fn test_default_params() {
        let p = KinsParams::default();
        assert_eq!(p.pivot_length, 250.0);
        assert_eq!(p.tool_length, 0.0);
    }

    #[test]
    fn test_create_kinematics() {
        assert!(create_kinematics("5axiskins").is_ok());
        assert!(create_kinematics(" 5AXIS ").is_ok());
        let err = create_kinematics("corexy").err();
        assert_eq!(err, Some(KinematicsError::UnknownModule("corexy".to_string())));
    }
}
