//! # smoothiepost Core
//!
//! Core types shared by the smoothiepost crates: axis letters, modal
//! selectors, the capability catalogue, and error types.

pub mod axis;
pub mod capabilities;
pub mod error;
pub mod units;

pub use axis::{Axis, AxisValues};
pub use capabilities::{CapabilitiesTrait, Capability};
pub use error::{Error, PostError, Result, ScriptError};
pub use units::{DistanceMode, MeasurementSystem, Plane};
