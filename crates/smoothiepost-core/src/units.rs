//! Unit, distance-mode, and plane selectors
//!
//! Each selector maps 1:1 onto a fixed modal G-code word.

use crate::error::PostError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl MeasurementSystem {
    /// Modal G-code word selecting this system
    pub fn gcode(&self) -> &'static str {
        match self {
            Self::Metric => "G21",
            Self::Imperial => "G20",
        }
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = PostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(PostError::invalid_value(
                "measurement_system",
                format!("unknown measurement system: {}", s),
            )),
        }
    }
}

/// Distance mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMode {
    /// Coordinates are absolute
    #[default]
    Absolute,
    /// Coordinates are relative to the current position
    Incremental,
}

impl DistanceMode {
    /// Modal G-code word selecting this mode
    pub fn gcode(&self) -> &'static str {
        match self {
            Self::Absolute => "G90",
            Self::Incremental => "G91",
        }
    }
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absolute => write!(f, "absolute"),
            Self::Incremental => write!(f, "incremental"),
        }
    }
}

/// Working plane for arcs and canned cycles
///
/// A closed set: there is no value that maps to "no plane".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    #[default]
    Xy,
    Xz,
    Yz,
}

impl Plane {
    /// Modal G-code word selecting this plane
    pub fn gcode(&self) -> &'static str {
        match self {
            Self::Xy => "G17",
            Self::Xz => "G18",
            Self::Yz => "G19",
        }
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Xy => write!(f, "XY"),
            Self::Xz => write!(f, "XZ"),
            Self::Yz => write!(f, "YZ"),
        }
    }
}

impl FromStr for Plane {
    type Err = PostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xy" | "g17" => Ok(Self::Xy),
            "xz" | "zx" | "g18" => Ok(Self::Xz),
            "yz" | "g19" => Ok(Self::Yz),
            _ => Err(PostError::invalid_value(
                "plane",
                format!("expected xy, xz or yz, got {}", s),
            )),
        }
    }
}
