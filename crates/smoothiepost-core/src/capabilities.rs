//! Post-processor capabilities catalogue
//!
//! Every logical operation a host can request has a `Capability`. Its
//! stable name is what appears in `not supported: <name>` comments when a
//! target firmware cannot perform it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Capability flags for post-processor operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Metric / imperial selection
    Units,
    /// Absolute / incremental selection
    DistanceMode,
    /// Working plane selection
    SetPlane,
    /// Polar coordinate mode
    Polar,
    /// Temporary origin (G92)
    TemporaryOrigin,
    /// Removing a temporary origin (G92.1)
    RemoveTemporaryOrigin,
    /// Subprogram definition start
    SubBegin,
    /// Subprogram call
    SubCall,
    /// Subprogram definition end
    SubEnd,
    /// Tool table definition
    ToolDefinition,
    /// Tool change
    ToolChange,
    /// Tool radius offset
    OffsetRadius,
    /// Tool length offset
    OffsetLength,
    /// Datum shift
    DatumShift,
    /// Datum set
    DatumSet,
    /// Work plane / fixture selection
    Workplane,
    /// Clearance plane
    ClearancePlane,
    /// Transformation matrix definition
    Matrix,
    /// Translation transform
    Translate,
    /// Rotation transform
    Rotate,
    /// Scale transform
    Scale,
    /// Matrix product
    MatrixProduct,
    /// Mirror about a plane
    MirrorPlane,
    /// Mirror about a line
    MirrorLine,
    /// Nominal and vertical feedrates
    Feedrate,
    /// Spindle direction and speed
    Spindle,
    /// Coolant control
    Coolant,
    /// Gear range selection
    GearRange,
    /// Rapid move
    Rapid,
    /// Rapid move in machine coordinates
    MachineCoordinateRapid,
    /// Linear feed move
    Feed,
    /// Circular arc move
    Arc,
    /// Arc center offset along Z
    ArcCenterK,
    /// Arc given by radius
    ArcRadius,
    /// Dwell
    Dwell,
    /// Rapid to home position
    RapidHome,
    /// Rapid away from home position
    RapidUnhome,
    /// Set machine coordinates
    SetMachineCoordinates,
    /// Pattern cycle
    Pattern,
    /// Pocket cycle
    Pocket,
    /// Profile cycle
    Profile,
    /// Drilling canned cycle
    Drill,
    /// Tapping cycle
    Tap,
    /// Boring cycle
    Bore,
    /// Canned cycle termination
    EndCannedCycle,
    /// Raw text insertion
    Insert,
    /// Block delete toggle
    BlockDelete,
    /// Variable read
    Variable,
    /// Variable write
    VariableSet,
    /// Probe the centre of a feature from outside
    ProbeLinearCentreOutside,
    /// Probe a single edge point
    ProbeSinglePoint,
    /// Probe downwards
    ProbeDownwardPoint,
    /// Report probe results
    ReportProbeResults,
    /// Open a log file
    OpenLogFile,
    /// Log a coordinate
    LogCoordinate,
    /// Log a message
    LogMessage,
    /// Close the log file
    CloseLogFile,
    /// Rapid to the midpoint of two points
    RapidToMidpoint,
    /// Rapid to the intersection of two lines
    RapidToIntersection,
    /// Rapid to a rotated coordinate
    RapidToRotatedCoordinate,
    /// Path control (exact stop / blending) mode
    SetPathControlMode,
}

impl Capability {
    /// Every capability, in declaration order
    pub const ALL: [Capability; 61] = [
        Self::Units,
        Self::DistanceMode,
        Self::SetPlane,
        Self::Polar,
        Self::TemporaryOrigin,
        Self::RemoveTemporaryOrigin,
        Self::SubBegin,
        Self::SubCall,
        Self::SubEnd,
        Self::ToolDefinition,
        Self::ToolChange,
        Self::OffsetRadius,
        Self::OffsetLength,
        Self::DatumShift,
        Self::DatumSet,
        Self::Workplane,
        Self::ClearancePlane,
        Self::Matrix,
        Self::Translate,
        Self::Rotate,
        Self::Scale,
        Self::MatrixProduct,
        Self::MirrorPlane,
        Self::MirrorLine,
        Self::Feedrate,
        Self::Spindle,
        Self::Coolant,
        Self::GearRange,
        Self::Rapid,
        Self::MachineCoordinateRapid,
        Self::Feed,
        Self::Arc,
        Self::ArcCenterK,
        Self::ArcRadius,
        Self::Dwell,
        Self::RapidHome,
        Self::RapidUnhome,
        Self::SetMachineCoordinates,
        Self::Pattern,
        Self::Pocket,
        Self::Profile,
        Self::Drill,
        Self::Tap,
        Self::Bore,
        Self::EndCannedCycle,
        Self::Insert,
        Self::BlockDelete,
        Self::Variable,
        Self::VariableSet,
        Self::ProbeLinearCentreOutside,
        Self::ProbeSinglePoint,
        Self::ProbeDownwardPoint,
        Self::ReportProbeResults,
        Self::OpenLogFile,
        Self::LogCoordinate,
        Self::LogMessage,
        Self::CloseLogFile,
        Self::RapidToMidpoint,
        Self::RapidToIntersection,
        Self::RapidToRotatedCoordinate,
        Self::SetPathControlMode,
    ];

    /// Name used in `not supported: <name>` comments
    pub fn name(&self) -> &'static str {
        match self {
            Self::Units => "units",
            Self::DistanceMode => "distance_mode",
            Self::SetPlane => "set_plane",
            Self::Polar => "set polar coordinates",
            Self::TemporaryOrigin => "set_temporary_origin",
            Self::RemoveTemporaryOrigin => "remove_temporary_origin",
            Self::SubBegin => "sub_begin",
            Self::SubCall => "sub_call",
            Self::SubEnd => "sub_end",
            Self::ToolDefinition => "tool_defn",
            Self::ToolChange => "tool_change",
            Self::OffsetRadius => "offset_radius",
            Self::OffsetLength => "offset_length",
            Self::DatumShift => "datum_shift",
            Self::DatumSet => "datum_set",
            Self::Workplane => "workplane",
            Self::ClearancePlane => "clearanceplane",
            Self::Matrix => "matrix",
            Self::Translate => "translate",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::MatrixProduct => "matrix_product",
            Self::MirrorPlane => "mirror_plane",
            Self::MirrorLine => "mirror_line",
            Self::Feedrate => "feedrate",
            Self::Spindle => "spindle control disabled",
            Self::Coolant => "coolant",
            Self::GearRange => "gear range",
            Self::Rapid => "rapid",
            Self::MachineCoordinateRapid => "machine coordinates of rapid",
            Self::Feed => "feed",
            Self::Arc => "arc",
            Self::ArcCenterK => "arc center offset K",
            Self::ArcRadius => "arc radius",
            Self::Dwell => "dwell",
            Self::RapidHome => "rapid_home",
            Self::RapidUnhome => "rapid_unhome",
            Self::SetMachineCoordinates => "set_machine_coordinates",
            Self::Pattern => "pattern",
            Self::Pocket => "pocket",
            Self::Profile => "profile",
            Self::Drill => "drill",
            Self::Tap => "tap",
            Self::Bore => "bore",
            Self::EndCannedCycle => "end_canned_cycle",
            Self::Insert => "insert",
            Self::BlockDelete => "block_delete",
            Self::Variable => "variable",
            Self::VariableSet => "variable_set",
            Self::ProbeLinearCentreOutside => "probe_linear_centre_outside",
            Self::ProbeSinglePoint => "probe_single_point",
            Self::ProbeDownwardPoint => "probe_downward_point",
            Self::ReportProbeResults => "report_probe_results",
            Self::OpenLogFile => "open_log_file",
            Self::LogCoordinate => "log_coordinate",
            Self::LogMessage => "log_message",
            Self::CloseLogFile => "close_log_file",
            Self::RapidToMidpoint => "rapid_to_midpoint",
            Self::RapidToIntersection => "rapid_to_intersection",
            Self::RapidToRotatedCoordinate => "rapid_to_rotated_coordinate",
            Self::SetPathControlMode => "set_path_control_mode",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for querying which operations a target supports
pub trait CapabilitiesTrait {
    /// Check if a capability is supported
    fn has_capability(&self, capability: Capability) -> bool;

    /// Get all supported capabilities
    fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .iter()
            .copied()
            .filter(|cap| self.has_capability(*cap))
            .collect()
    }

    /// Get all capabilities that degrade to an unsupported comment
    fn unsupported_capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .iter()
            .copied()
            .filter(|cap| !self.has_capability(*cap))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct MotionOnly;

    impl CapabilitiesTrait for MotionOnly {
        fn has_capability(&self, capability: Capability) -> bool {
            matches!(capability, Capability::Rapid | Capability::Feed)
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<&str> = Capability::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), Capability::ALL.len());
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Capability::ToolChange.to_string(), "tool_change");
        assert_eq!(
            Capability::MachineCoordinateRapid.to_string(),
            "machine coordinates of rapid"
        );
    }

    #[test]
    fn test_capability_partition() {
        let target = MotionOnly;
        assert_eq!(
            target.capabilities(),
            vec![Capability::Rapid, Capability::Feed]
        );
        assert_eq!(
            target.unsupported_capabilities().len(),
            Capability::ALL.len() - 2
        );
    }
}
