// src/kinematics/five_axis.rs
//! Gantry with a tilting/rotating head hung below a pivot.
//!
//! The head offset from the pivot is a vector of length
//! `pivot_length + tool_length - w` pointing at polar angle `180 - tilt`
//! and azimuth `rotation`. With both head angles at zero the tool hangs
//! straight down and Z is computed without trigonometry.

use super::math::{fuzzy_zero, spherical_to_cartesian, Cartesian};
use super::{JointVector, Kinematics, KinematicsType, KinsParams, Pose};

#[derive(Debug, Clone, Copy, Default)]
pub struct FiveAxisKinematics;

impl FiveAxisKinematics {
    fn head_offset(params: &KinsParams, w: f64, tilt: f64, rotation: f64) -> Cartesian {
        spherical_to_cartesian(
            params.pivot_length + params.tool_length - w,
            rotation,
            180.0 - tilt,
        )
    }

    fn is_upright(tilt: f64, rotation: f64) -> bool {
        fuzzy_zero(tilt) && fuzzy_zero(rotation)
    }
}

impl Kinematics for FiveAxisKinematics {
    fn forward(&self, joints: &JointVector, params: &KinsParams) -> Pose {
        let r = Self::head_offset(params, joints.w, joints.tilt, joints.rotation);

        let z = if Self::is_upright(joints.tilt, joints.rotation) {
            tracing::trace!("forward: head upright, z from w joint");
            joints.z + joints.w
        } else {
            joints.z + params.pivot_length + r.z + params.tool_length
        };

        Pose {
            tran: Cartesian::new(joints.x + r.x, joints.y + r.y, z),
            a: joints.tilt,
            b: joints.spin,
            c: joints.rotation,
            u: joints.u,
            v: joints.v,
            w: joints.w,
        }
    }

    fn inverse(&self, pose: &Pose, params: &KinsParams) -> JointVector {
        let r = Self::head_offset(params, pose.w, pose.a, pose.c);

        let z = if Self::is_upright(pose.a, pose.c) {
            tracing::trace!("inverse: head upright, z from w axis");
            pose.tran.z - pose.w
        } else {
            pose.tran.z - params.pivot_length - r.z - params.tool_length
        };

        JointVector {
            x: pose.tran.x - r.x,
            y: pose.tran.y - r.y,
            z,
            tilt: pose.a,
            spin: pose.b,
            rotation: pose.c,
            u: pose.u,
            v: pose.v,
            w: pose.w,
        }
    }

    fn kinematics_type(&self) -> KinematicsType {
        KinematicsType::Both
    }
}
