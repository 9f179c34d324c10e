// src/component.rs
//! Host-facing kinematics component.
//!
//! Owns the two scalars the transform reads: the tool-length input pin,
//! driven by the host every cycle, and the pivot-length parameter, tuned by
//! an operator. Each transform call works on a snapshot of both.

use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::kinematics::{
    JointVector, Kinematics, KinematicsFlags, KinematicsType, KinsParams, Pose,
};

pub const DEFAULT_COMPONENT_NAME: &str = "5axiskins";

#[derive(Debug, Error, PartialEq)]
pub enum ComponentError {
    #[error("no pin or parameter named '{0}'")]
    UnknownName(String),
    #[error("'{name}' is {actual:?}, not {expected:?}")]
    WrongDirection {
        name: String,
        expected: Direction,
        actual: Direction,
    },
    #[error("refusing non-finite value {value} for '{name}'")]
    NotFinite { name: String, value: f64 },
    #[error("parameter storage poisoned")]
    Poisoned,
}

/// How a named entry is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Input pin, driven by the host.
    In,
    /// Parameter, tuned by an operator.
    ReadWrite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    ToolLength,
    PivotLength,
}

#[derive(Debug, Clone)]
struct Entry {
    name: String,
    direction: Direction,
    slot: Slot,
}

/// Cloneable write handle onto the component's scalars.
#[derive(Debug, Clone)]
pub struct ParamHandle {
    params: Arc<RwLock<KinsParams>>,
}

impl ParamHandle {
    pub fn snapshot(&self) -> Result<KinsParams, ComponentError> {
        self.params
            .read()
            .map(|p| *p)
            .map_err(|_| ComponentError::Poisoned)
    }

    fn write(&self, slot: Slot, value: f64) -> Result<(), ComponentError> {
        let mut params = self.params.write().map_err(|_| ComponentError::Poisoned)?;
        match slot {
            Slot::ToolLength => params.tool_length = value,
            Slot::PivotLength => params.pivot_length = value,
        }
        Ok(())
    }

    fn read(&self, slot: Slot) -> Result<f64, ComponentError> {
        let params = self.snapshot()?;
        Ok(match slot {
            Slot::ToolLength => params.tool_length,
            Slot::PivotLength => params.pivot_length,
        })
    }

    /// Drive the tool-length input directly, bypassing name lookup.
    pub fn set_tool_length(&self, value: f64) -> Result<(), ComponentError> {
        check_finite("tool_length", value)?;
        self.write(Slot::ToolLength, value)
    }

    pub fn set_pivot_length(&self, value: f64) -> Result<(), ComponentError> {
        check_finite("pivot_length", value)?;
        self.write(Slot::PivotLength, value)
    }
}

fn check_finite(name: &str, value: f64) -> Result<(), ComponentError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ComponentError::NotFinite { name: name.to_string(), value })
    }
}

/// A kinematics module registered with the host under a name.
pub struct Component {
    name: String,
    kins: Box<dyn Kinematics>,
    handle: ParamHandle,
    entries: Vec<Entry>,
}

impl Component {
    /// Register `<name>.tooloffset.z` and `<name>.pivot-length` and seed
    /// them from `initial`.
    pub fn new(name: &str, kins: Box<dyn Kinematics>, initial: KinsParams) -> Result<Self, ComponentError> {
        check_finite("pivot_length", initial.pivot_length)?;
        check_finite("tool_length", initial.tool_length)?;

        let entries = vec![
            Entry {
                name: format!("{name}.tooloffset.z"),
                direction: Direction::In,
                slot: Slot::ToolLength,
            },
            Entry {
                name: format!("{name}.pivot-length"),
                direction: Direction::ReadWrite,
                slot: Slot::PivotLength,
            },
        ];

        tracing::info!(
            "{} ready: pivot_length={} tool_length={}",
            name,
            initial.pivot_length,
            initial.tool_length
        );

        Ok(Self {
            name: name.to_string(),
            kins,
            handle: ParamHandle {
                params: Arc::new(RwLock::new(initial)),
            },
            entries,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of all registered pins and parameters, in registration order.
    pub fn entry_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn handle(&self) -> ParamHandle {
        self.handle.clone()
    }

    pub fn snapshot(&self) -> Result<KinsParams, ComponentError> {
        self.handle.snapshot()
    }

    fn lookup(&self, name: &str) -> Result<&Entry, ComponentError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ComponentError::UnknownName(name.to_string()))
    }

    fn set(&self, name: &str, value: f64, expected: Direction) -> Result<(), ComponentError> {
        let entry = self.lookup(name)?;
        if entry.direction != expected {
            return Err(ComponentError::WrongDirection {
                name: name.to_string(),
                expected,
                actual: entry.direction,
            });
        }
        check_finite(name, value)?;
        self.handle.write(entry.slot, value)?;
        tracing::debug!("{} = {}", name, value);
        Ok(())
    }

    /// Write an input pin.
    pub fn set_pin(&self, name: &str, value: f64) -> Result<(), ComponentError> {
        self.set(name, value, Direction::In)
    }

    /// Write a read-write parameter.
    pub fn set_param(&self, name: &str, value: f64) -> Result<(), ComponentError> {
        self.set(name, value, Direction::ReadWrite)
    }

    pub fn get(&self, name: &str) -> Result<f64, ComponentError> {
        let entry = self.lookup(name)?;
        self.handle.read(entry.slot)
    }

    pub fn forward(&self, joints: &JointVector) -> Result<Pose, ComponentError> {
        Ok(self.kins.forward(joints, &self.snapshot()?))
    }

    pub fn inverse(&self, pose: &Pose) -> Result<JointVector, ComponentError> {
        Ok(self.kins.inverse(pose, &self.snapshot()?))
    }

    pub fn home(&self, joints: &JointVector, flags: &mut KinematicsFlags) -> Result<Pose, ComponentError> {
        Ok(self.kins.home(joints, &self.snapshot()?, flags))
    }

    pub fn kinematics_type(&self) -> KinematicsType {
        self.kins.kinematics_type()
    }
}

impl std::fmt::Debug for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("kinematics_type", &self.kins.kinematics_type())
            .field("params", &self.handle)
            .finish()
    }
}
