//! Parameter blocks for creator operations
//!
//! Every field that names a coordinate is optional: `None` means the axis
//! is not involved. All blocks deserialize with missing fields defaulted so
//! program scripts only spell out what they use.

use serde::{Deserialize, Serialize};
use smoothiepost_core::{Axis, AxisValues};

/// Rapid positioning move (also used for homing targets)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RapidMove {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
    pub u: Option<f64>,
    pub v: Option<f64>,
    pub w: Option<f64>,
    /// Interpret the target in machine coordinates
    pub machine_coordinates: bool,
}

impl RapidMove {
    /// Axis values in canonical rapid order (x, y, z, a, b, c, u, v, w)
    pub fn axis_values(&self) -> AxisValues {
        vec![
            (Axis::X, self.x),
            (Axis::Y, self.y),
            (Axis::Z, self.z),
            (Axis::A, self.a),
            (Axis::B, self.b),
            (Axis::C, self.c),
            (Axis::U, self.u),
            (Axis::V, self.v),
            (Axis::W, self.w),
        ]
    }
}

/// Linear feed move
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearMove {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

impl LinearMove {
    /// Axis values in feed order (x, y, z)
    pub fn axis_values(&self) -> AxisValues {
        vec![(Axis::X, self.x), (Axis::Y, self.y), (Axis::Z, self.z)]
    }
}

/// Circular arc move
///
/// `i`, `j` and `k` are the absolute coordinates of the arc center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcMove {
    pub clockwise: bool,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub i: Option<f64>,
    pub j: Option<f64>,
    pub k: Option<f64>,
    /// Radius form of the arc
    pub r: Option<f64>,
}

impl Default for ArcMove {
    fn default() -> Self {
        Self {
            clockwise: true,
            x: None,
            y: None,
            z: None,
            i: None,
            j: None,
            k: None,
            r: None,
        }
    }
}

/// Drilling canned cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillCycle {
    pub x: Option<f64>,
    pub y: Option<f64>,
    /// Absolute Z of the material surface
    pub z: Option<f64>,
    /// Hole depth below `z`
    pub depth: Option<f64>,
    pub standoff: Option<f64>,
    /// Dwell at the bottom of the hole
    pub dwell: Option<f64>,
    pub peck_depth: Option<f64>,
    pub retract_mode: Option<i32>,
    pub spindle_mode: Option<i32>,
}

impl DrillCycle {
    /// True if any refinement parameter beyond a plain drill is set
    pub fn has_refinements(&self) -> bool {
        self.standoff.is_some()
            || self.dwell.is_some()
            || self.peck_depth.is_some()
            || self.retract_mode.is_some()
            || self.spindle_mode.is_some()
    }
}

/// Tapping cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TapCycle {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub zretract: Option<f64>,
    pub depth: Option<f64>,
    pub standoff: Option<f64>,
    pub dwell_bottom: Option<f64>,
    pub pitch: Option<f64>,
    pub stoppos: Option<f64>,
    pub spin_in: Option<f64>,
    pub spin_out: Option<f64>,
    pub tap_mode: Option<i32>,
    pub direction: Option<i32>,
}

/// Boring cycle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoreCycle {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub zretract: Option<f64>,
    pub depth: Option<f64>,
    pub standoff: Option<f64>,
    pub dwell_bottom: Option<f64>,
    pub feed_in: Option<f64>,
    pub feed_out: Option<f64>,
    pub stoppos: Option<f64>,
    pub shift_back: Option<f64>,
    pub shift_right: Option<f64>,
    pub backbore: bool,
    pub stop: bool,
}

/// A point with optional coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Point3 {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Offsets for datum and temporary origin operations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatumOffset {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub c: Option<f64>,
}

/// Tool table entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolDefinition {
    pub id: u32,
    pub name: String,
    pub radius: Option<f64>,
    pub length: Option<f64>,
    pub gradient: Option<f64>,
}

/// 3x3 transformation matrix, row-major
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformMatrix {
    pub a1: Option<f64>,
    pub b1: Option<f64>,
    pub c1: Option<f64>,
    pub a2: Option<f64>,
    pub b2: Option<f64>,
    pub c2: Option<f64>,
    pub a3: Option<f64>,
    pub b3: Option<f64>,
    pub c3: Option<f64>,
}

/// Rotation transform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotation {
    pub xyrot: Option<f64>,
    pub yzrot: Option<f64>,
    pub zxrot: Option<f64>,
    pub angle: Option<f64>,
}

/// Planes or lines referenced by a mirror transform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MirrorPlanes {
    pub plane1: Option<String>,
    pub plane2: Option<String>,
    pub plane3: Option<String>,
}

/// Probe the centre of a feature from outside
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeLinearCentre {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub depth: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
}

/// Probe a single point along an edge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeSinglePoint {
    pub point_along_edge_x: Option<f64>,
    pub point_along_edge_y: Option<f64>,
    pub depth: Option<f64>,
    pub retracted_point_x: Option<f64>,
    pub retracted_point_y: Option<f64>,
    pub destination_point_x: Option<f64>,
    pub destination_point_y: Option<f64>,
    pub intersection_variable_x: Option<String>,
    pub intersection_variable_y: Option<String>,
    pub probe_offset_x_component: Option<f64>,
    pub probe_offset_y_component: Option<f64>,
}

/// Probe straight down
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeDownwardPoint {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub depth: Option<f64>,
    pub intersection_variable_z: Option<String>,
}

/// Probe result report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeReport {
    /// Up to six reported points
    pub points: Vec<Point3>,
    pub xml_file_name: Option<String>,
}

/// Rapid to the midpoint between two points
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MidpointRapid {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub z1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub z2: Option<f64>,
}

/// Rapid to the intersection of the lines (p1, p2) and (p3, p4)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectionRapid {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub x3: f64,
    pub y3: f64,
    pub x4: f64,
    pub y4: f64,
    pub intersection_x: String,
    pub intersection_y: String,
    pub ua_numerator: String,
    pub ua_denominator: String,
    pub ua: String,
    pub ub_numerator: String,
    pub ub: String,
}

/// Rapid to a coordinate rotated about a reference point
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotatedRapid {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub ref_x: f64,
    pub ref_y: f64,
    pub x_current: String,
    pub y_current: String,
    pub x_final: String,
    pub y_final: String,
}

/// Path control (exact stop / blending) settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathControl {
    pub mode: Option<i32>,
    pub motion_blending_tolerance: Option<f64>,
    pub naive_cam_tolerance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rapid_axis_order() {
        let mv = RapidMove {
            w: Some(9.0),
            x: Some(1.0),
            ..Default::default()
        };
        let axes: Vec<Axis> = mv.axis_values().iter().map(|(a, _)| *a).collect();
        assert_eq!(axes, Axis::MOTION.to_vec());
        assert_eq!(mv.axis_values()[0], (Axis::X, Some(1.0)));
        assert_eq!(mv.axis_values()[8], (Axis::W, Some(9.0)));
    }

    #[test]
    fn test_arc_defaults_to_clockwise() {
        assert!(ArcMove::default().clockwise);
        let arc: ArcMove = serde_json::from_str(r#"{"x": 1.0}"#).unwrap();
        assert!(arc.clockwise);
        assert_eq!(arc.x, Some(1.0));
    }

    #[test]
    fn test_drill_refinements() {
        let plain = DrillCycle {
            z: Some(0.0),
            depth: Some(2.0),
            ..Default::default()
        };
        assert!(!plain.has_refinements());

        let peck = DrillCycle {
            peck_depth: Some(0.5),
            ..plain
        };
        assert!(peck.has_refinements());
    }
}
