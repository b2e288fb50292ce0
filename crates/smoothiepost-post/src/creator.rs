//! The creator interface driven by toolpath hosts
//!
//! `NcCreator` has one method per logical CNC operation. Every operation
//! defaults to writing a single `not supported: <name>` comment, so a
//! target only overrides what its firmware can actually do. Unsupported
//! operations never fail; only writing to the output can.

use crate::params::{
    ArcMove, BoreCycle, DatumOffset, DrillCycle, IntersectionRapid, LinearMove, MidpointRapid,
    MirrorPlanes, PathControl, Point3, ProbeDownwardPoint, ProbeLinearCentre, ProbeReport,
    ProbeSinglePoint, RapidMove, RotatedRapid, Rotation, TapCycle, ToolDefinition,
    TransformMatrix,
};
use smoothiepost_core::{Capability, Plane, Result};

/// Trait for G-code creators
pub trait NcCreator {
    /// Write `;<text>` as a full line
    fn comment(&mut self, text: &str) -> Result<()>;

    /// Report an operation this target cannot perform
    fn unsupported(&mut self, capability: Capability) -> Result<()> {
        tracing::debug!("Unsupported capability requested: {}", capability);
        self.comment(&format!("not supported: {}", capability))
    }

    /// Write the program header
    fn program_begin(&mut self, id: u32, comment: &str) -> Result<()>;

    /// Write the program footer
    fn program_end(&mut self) -> Result<()>;

    /// Flush any buffered output
    fn flush_nc(&mut self) -> Result<()> {
        Ok(())
    }

    // Settings

    fn imperial(&mut self) -> Result<()> {
        self.unsupported(Capability::Units)
    }

    fn metric(&mut self) -> Result<()> {
        self.unsupported(Capability::Units)
    }

    fn absolute(&mut self) -> Result<()> {
        self.unsupported(Capability::DistanceMode)
    }

    fn incremental(&mut self) -> Result<()> {
        self.unsupported(Capability::DistanceMode)
    }

    fn polar(&mut self, _on: bool) -> Result<()> {
        self.unsupported(Capability::Polar)
    }

    fn set_plane(&mut self, _plane: Plane) -> Result<()> {
        self.unsupported(Capability::SetPlane)
    }

    fn set_temporary_origin(&mut self, _offset: &DatumOffset) -> Result<()> {
        self.unsupported(Capability::TemporaryOrigin)
    }

    fn remove_temporary_origin(&mut self) -> Result<()> {
        self.unsupported(Capability::RemoveTemporaryOrigin)
    }

    // Subprograms

    fn sub_begin(&mut self, _id: u32, _name: &str) -> Result<()> {
        self.unsupported(Capability::SubBegin)
    }

    fn sub_call(&mut self, _id: u32) -> Result<()> {
        self.unsupported(Capability::SubCall)
    }

    fn sub_end(&mut self) -> Result<()> {
        self.unsupported(Capability::SubEnd)
    }

    // Tools

    fn tool_defn(&mut self, _tool: &ToolDefinition) -> Result<()> {
        self.unsupported(Capability::ToolDefinition)
    }

    fn tool_change(&mut self, _id: u32) -> Result<()> {
        self.unsupported(Capability::ToolChange)
    }

    fn offset_radius(&mut self, _id: u32, _radius: Option<f64>) -> Result<()> {
        self.unsupported(Capability::OffsetRadius)
    }

    fn offset_length(&mut self, _id: u32, _length: Option<f64>) -> Result<()> {
        self.unsupported(Capability::OffsetLength)
    }

    // Datums

    fn datum_shift(&mut self, _offset: &DatumOffset) -> Result<()> {
        self.unsupported(Capability::DatumShift)
    }

    fn datum_set(&mut self, _offset: &DatumOffset) -> Result<()> {
        self.unsupported(Capability::DatumSet)
    }

    fn workplane(&mut self, _id: u32) -> Result<()> {
        self.unsupported(Capability::Workplane)
    }

    fn clearanceplane(&mut self, _z: Option<f64>) -> Result<()> {
        self.unsupported(Capability::ClearancePlane)
    }

    // Transformations

    fn matrix(&mut self, _matrix: &TransformMatrix) -> Result<()> {
        self.unsupported(Capability::Matrix)
    }

    fn translate(&mut self, _offset: &Point3) -> Result<()> {
        self.unsupported(Capability::Translate)
    }

    fn rotate(&mut self, _rotation: &Rotation) -> Result<()> {
        self.unsupported(Capability::Rotate)
    }

    fn scale(&mut self, _k: Option<f64>) -> Result<()> {
        self.unsupported(Capability::Scale)
    }

    fn matrix_product(&mut self, _matrix1: Option<&str>, _matrix2: Option<&str>) -> Result<()> {
        self.unsupported(Capability::MatrixProduct)
    }

    fn mirror_plane(&mut self, _planes: &MirrorPlanes) -> Result<()> {
        self.unsupported(Capability::MirrorPlane)
    }

    fn mirror_line(&mut self, _line: Option<&str>) -> Result<()> {
        self.unsupported(Capability::MirrorLine)
    }

    // Rates and modes

    /// Set the nominal feed rate
    fn feedrate(&mut self, _f: f64) -> Result<()> {
        self.unsupported(Capability::Feedrate)
    }

    /// Set the horizontal and vertical feed rates
    fn feedrate_hv(&mut self, _fh: f64, _fv: f64) -> Result<()> {
        self.unsupported(Capability::Feedrate)
    }

    fn spindle(&mut self, _speed: Option<f64>, _clockwise: bool) -> Result<()> {
        self.unsupported(Capability::Spindle)
    }

    fn coolant(&mut self, _mode: u8) -> Result<()> {
        self.unsupported(Capability::Coolant)
    }

    fn gearrange(&mut self, _gear: u8) -> Result<()> {
        self.unsupported(Capability::GearRange)
    }

    // Moves

    fn rapid(&mut self, _target: &RapidMove) -> Result<()> {
        self.unsupported(Capability::Rapid)
    }

    fn feed(&mut self, _target: &LinearMove) -> Result<()> {
        self.unsupported(Capability::Feed)
    }

    fn arc(&mut self, _arc: &ArcMove) -> Result<()> {
        self.unsupported(Capability::Arc)
    }

    /// Clockwise arc, whatever `arc.clockwise` says
    fn arc_cw(&mut self, arc: &ArcMove) -> Result<()> {
        self.arc(&ArcMove {
            clockwise: true,
            ..arc.clone()
        })
    }

    /// Counter-clockwise arc, whatever `arc.clockwise` says
    fn arc_ccw(&mut self, arc: &ArcMove) -> Result<()> {
        self.arc(&ArcMove {
            clockwise: false,
            ..arc.clone()
        })
    }

    fn dwell(&mut self, _seconds: f64) -> Result<()> {
        self.unsupported(Capability::Dwell)
    }

    fn rapid_home(&mut self, _target: &RapidMove) -> Result<()> {
        self.unsupported(Capability::RapidHome)
    }

    fn rapid_unhome(&mut self) -> Result<()> {
        self.unsupported(Capability::RapidUnhome)
    }

    fn set_machine_coordinates(&mut self) -> Result<()> {
        self.unsupported(Capability::SetMachineCoordinates)
    }

    // Cutter radius compensation

    /// Whether the host may request cutter radius compensation
    fn use_crc(&self) -> bool {
        false
    }

    // Cycles

    fn pattern(&mut self) -> Result<()> {
        self.unsupported(Capability::Pattern)
    }

    fn pocket(&mut self) -> Result<()> {
        self.unsupported(Capability::Pocket)
    }

    fn profile(&mut self) -> Result<()> {
        self.unsupported(Capability::Profile)
    }

    fn drill(&mut self, _cycle: &DrillCycle) -> Result<()> {
        self.unsupported(Capability::Drill)
    }

    fn tap(&mut self, _cycle: &TapCycle) -> Result<()> {
        self.unsupported(Capability::Tap)
    }

    fn bore(&mut self, _cycle: &BoreCycle) -> Result<()> {
        self.unsupported(Capability::Bore)
    }

    fn end_canned_cycle(&mut self) -> Result<()> {
        self.unsupported(Capability::EndCannedCycle)
    }

    // Misc

    fn insert(&mut self, _text: &str) -> Result<()> {
        self.unsupported(Capability::Insert)
    }

    fn block_delete(&mut self, _on: bool) -> Result<()> {
        self.unsupported(Capability::BlockDelete)
    }

    fn variable(&mut self, _id: u32) -> Result<()> {
        self.unsupported(Capability::Variable)
    }

    fn variable_set(&mut self, _id: u32, _value: f64) -> Result<()> {
        self.unsupported(Capability::VariableSet)
    }

    // Probing

    fn probe_linear_centre_outside(&mut self, _probe: &ProbeLinearCentre) -> Result<()> {
        self.unsupported(Capability::ProbeLinearCentreOutside)
    }

    fn probe_single_point(&mut self, _probe: &ProbeSinglePoint) -> Result<()> {
        self.unsupported(Capability::ProbeSinglePoint)
    }

    fn probe_downward_point(&mut self, _probe: &ProbeDownwardPoint) -> Result<()> {
        self.unsupported(Capability::ProbeDownwardPoint)
    }

    fn report_probe_results(&mut self, _report: &ProbeReport) -> Result<()> {
        self.unsupported(Capability::ReportProbeResults)
    }

    // Logging

    fn open_log_file(&mut self, _xml_file_name: Option<&str>) -> Result<()> {
        self.unsupported(Capability::OpenLogFile)
    }

    fn log_coordinate(&mut self, _point: &Point3) -> Result<()> {
        self.unsupported(Capability::LogCoordinate)
    }

    fn log_message(&mut self, _message: &str) -> Result<()> {
        self.unsupported(Capability::LogMessage)
    }

    fn close_log_file(&mut self) -> Result<()> {
        self.unsupported(Capability::CloseLogFile)
    }

    // Rapid helpers

    fn rapid_to_midpoint(&mut self, _points: &MidpointRapid) -> Result<()> {
        self.unsupported(Capability::RapidToMidpoint)
    }

    fn rapid_to_intersection(&mut self, _lines: &IntersectionRapid) -> Result<()> {
        self.unsupported(Capability::RapidToIntersection)
    }

    fn rapid_to_rotated_coordinate(&mut self, _rotation: &RotatedRapid) -> Result<()> {
        self.unsupported(Capability::RapidToRotatedCoordinate)
    }

    fn set_path_control_mode(&mut self, _mode: &PathControl) -> Result<()> {
        self.unsupported(Capability::SetPathControlMode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records comment lines; implements nothing else.
    #[derive(Default)]
    struct CommentOnly {
        lines: Vec<String>,
    }

    impl NcCreator for CommentOnly {
        fn comment(&mut self, text: &str) -> Result<()> {
            self.lines.push(format!(";{}", text));
            Ok(())
        }

        fn program_begin(&mut self, _id: u32, comment: &str) -> Result<()> {
            self.comment(comment)
        }

        fn program_end(&mut self) -> Result<()> {
            self.comment("end")
        }
    }

    #[test]
    fn test_defaults_report_unsupported() {
        let mut creator = CommentOnly::default();
        creator.tool_change(3).unwrap();
        creator.rapid(&RapidMove::default()).unwrap();
        creator.set_plane(Plane::Xz).unwrap();
        assert_eq!(
            creator.lines,
            vec![
                ";not supported: tool_change",
                ";not supported: rapid",
                ";not supported: set_plane",
            ]
        );
    }

    #[test]
    fn test_default_crc_query() {
        let creator = CommentOnly::default();
        assert!(!creator.use_crc());
    }

    #[test]
    fn test_arc_direction_helpers_route_to_arc() {
        let mut creator = CommentOnly::default();
        creator.arc_cw(&ArcMove::default()).unwrap();
        creator.arc_ccw(&ArcMove::default()).unwrap();
        assert_eq!(creator.lines.len(), 2);
        assert!(creator.lines.iter().all(|l| l == ";not supported: arc"));
    }
}
