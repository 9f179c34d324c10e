// fiveaxis-kins: kinematics for a gantry carrying a tilting/rotating head

pub mod component;
pub mod config;
pub mod kinematics;

pub use component::{Component, ComponentError, Direction, ParamHandle, DEFAULT_COMPONENT_NAME};
pub use config::{load_config, Config, ConfigError};
pub use kinematics::{
    create_kinematics, Cartesian, FiveAxisKinematics, JointVector, Kinematics, KinematicsError,
    KinematicsFlags, KinematicsType, KinsParams, Pose,
};
