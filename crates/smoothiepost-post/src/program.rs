//! Program scripts
//!
//! A program is an ordered list of creator operations that can be stored as
//! JSON and replayed against any `NcCreator`. Each command is an object
//! tagged by `"op"`:
//!
//! ```json
//! {"op": "feedrate", "f": 100}
//! {"op": "feed", "x": 1.0}
//! {"op": "drill", "x": 1, "y": 1, "z": 0, "depth": 2}
//! ```

use crate::creator::NcCreator;
use crate::params::{
    ArcMove, BoreCycle, DatumOffset, DrillCycle, IntersectionRapid, LinearMove, MidpointRapid,
    MirrorPlanes, PathControl, Point3, ProbeDownwardPoint, ProbeLinearCentre, ProbeReport,
    ProbeSinglePoint, RapidMove, RotatedRapid, Rotation, TapCycle, ToolDefinition,
    TransformMatrix,
};
use serde::{Deserialize, Serialize};
use smoothiepost_core::{Plane, Result, ScriptError};

/// One creator operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    ProgramBegin {
        #[serde(default)]
        id: u32,
        #[serde(default)]
        comment: String,
    },
    ProgramEnd,
    Comment {
        text: String,
    },
    Imperial,
    Metric,
    Absolute,
    Incremental,
    Polar {
        #[serde(default = "default_true")]
        on: bool,
    },
    SetPlane {
        plane: Plane,
    },
    SetTemporaryOrigin(DatumOffset),
    RemoveTemporaryOrigin,
    SubBegin {
        id: u32,
        #[serde(default)]
        name: String,
    },
    SubCall {
        id: u32,
    },
    SubEnd,
    ToolDefn(ToolDefinition),
    ToolChange {
        id: u32,
    },
    OffsetRadius {
        id: u32,
        #[serde(default)]
        radius: Option<f64>,
    },
    OffsetLength {
        id: u32,
        #[serde(default)]
        length: Option<f64>,
    },
    DatumShift(DatumOffset),
    DatumSet(DatumOffset),
    Workplane {
        id: u32,
    },
    Clearanceplane {
        #[serde(default)]
        z: Option<f64>,
    },
    Matrix(TransformMatrix),
    Translate(Point3),
    Rotate(Rotation),
    Scale {
        #[serde(default)]
        k: Option<f64>,
    },
    MatrixProduct {
        #[serde(default)]
        matrix1: Option<String>,
        #[serde(default)]
        matrix2: Option<String>,
    },
    MirrorPlane(MirrorPlanes),
    MirrorLine {
        #[serde(default)]
        line: Option<String>,
    },
    Feedrate {
        f: f64,
    },
    FeedrateHv {
        fh: f64,
        fv: f64,
    },
    Spindle {
        #[serde(default)]
        s: Option<f64>,
        #[serde(default = "default_true")]
        clockwise: bool,
    },
    Coolant {
        #[serde(default)]
        mode: u8,
    },
    Gearrange {
        #[serde(default)]
        gear: u8,
    },
    Rapid(RapidMove),
    Feed(LinearMove),
    Arc(ArcMove),
    ArcCw(ArcMove),
    ArcCcw(ArcMove),
    Dwell {
        t: f64,
    },
    RapidHome(RapidMove),
    RapidUnhome,
    SetMachineCoordinates,
    UseCrc,
    Pattern,
    Pocket,
    Profile,
    Drill(DrillCycle),
    Tap(TapCycle),
    Bore(BoreCycle),
    EndCannedCycle,
    Insert {
        text: String,
    },
    BlockDelete {
        #[serde(default)]
        on: bool,
    },
    Variable {
        id: u32,
    },
    VariableSet {
        id: u32,
        value: f64,
    },
    ProbeLinearCentreOutside(ProbeLinearCentre),
    ProbeSinglePoint(ProbeSinglePoint),
    ProbeDownwardPoint(ProbeDownwardPoint),
    ReportProbeResults(ProbeReport),
    OpenLogFile {
        #[serde(default)]
        xml_file_name: Option<String>,
    },
    LogCoordinate(Point3),
    LogMessage {
        #[serde(default)]
        message: String,
    },
    CloseLogFile,
    RapidToMidpoint(MidpointRapid),
    RapidToIntersection(IntersectionRapid),
    RapidToRotatedCoordinate(RotatedRapid),
    SetPathControlMode(PathControl),
}

fn default_true() -> bool {
    true
}

impl Command {
    /// Dispatch this command to a creator
    pub fn apply<C: NcCreator + ?Sized>(&self, creator: &mut C) -> Result<()> {
        match self {
            Self::ProgramBegin { id, comment } => creator.program_begin(*id, comment),
            Self::ProgramEnd => creator.program_end(),
            Self::Comment { text } => creator.comment(text),
            Self::Imperial => creator.imperial(),
            Self::Metric => creator.metric(),
            Self::Absolute => creator.absolute(),
            Self::Incremental => creator.incremental(),
            Self::Polar { on } => creator.polar(*on),
            Self::SetPlane { plane } => creator.set_plane(*plane),
            Self::SetTemporaryOrigin(offset) => creator.set_temporary_origin(offset),
            Self::RemoveTemporaryOrigin => creator.remove_temporary_origin(),
            Self::SubBegin { id, name } => creator.sub_begin(*id, name),
            Self::SubCall { id } => creator.sub_call(*id),
            Self::SubEnd => creator.sub_end(),
            Self::ToolDefn(tool) => creator.tool_defn(tool),
            Self::ToolChange { id } => creator.tool_change(*id),
            Self::OffsetRadius { id, radius } => creator.offset_radius(*id, *radius),
            Self::OffsetLength { id, length } => creator.offset_length(*id, *length),
            Self::DatumShift(offset) => creator.datum_shift(offset),
            Self::DatumSet(offset) => creator.datum_set(offset),
            Self::Workplane { id } => creator.workplane(*id),
            Self::Clearanceplane { z } => creator.clearanceplane(*z),
            Self::Matrix(matrix) => creator.matrix(matrix),
            Self::Translate(offset) => creator.translate(offset),
            Self::Rotate(rotation) => creator.rotate(rotation),
            Self::Scale { k } => creator.scale(*k),
            Self::MatrixProduct { matrix1, matrix2 } => {
                creator.matrix_product(matrix1.as_deref(), matrix2.as_deref())
            }
            Self::MirrorPlane(planes) => creator.mirror_plane(planes),
            Self::MirrorLine { line } => creator.mirror_line(line.as_deref()),
            Self::Feedrate { f } => creator.feedrate(*f),
            Self::FeedrateHv { fh, fv } => creator.feedrate_hv(*fh, *fv),
            Self::Spindle { s, clockwise } => creator.spindle(*s, *clockwise),
            Self::Coolant { mode } => creator.coolant(*mode),
            Self::Gearrange { gear } => creator.gearrange(*gear),
            Self::Rapid(target) => creator.rapid(target),
            Self::Feed(target) => creator.feed(target),
            Self::Arc(arc) => creator.arc(arc),
            Self::ArcCw(arc) => creator.arc_cw(arc),
            Self::ArcCcw(arc) => creator.arc_ccw(arc),
            Self::Dwell { t } => creator.dwell(*t),
            Self::RapidHome(target) => creator.rapid_home(target),
            Self::RapidUnhome => creator.rapid_unhome(),
            Self::SetMachineCoordinates => creator.set_machine_coordinates(),
            Self::UseCrc => {
                tracing::debug!("Cutter radius compensation available: {}", creator.use_crc());
                Ok(())
            }
            Self::Pattern => creator.pattern(),
            Self::Pocket => creator.pocket(),
            Self::Profile => creator.profile(),
            Self::Drill(cycle) => creator.drill(cycle),
            Self::Tap(cycle) => creator.tap(cycle),
            Self::Bore(cycle) => creator.bore(cycle),
            Self::EndCannedCycle => creator.end_canned_cycle(),
            Self::Insert { text } => creator.insert(text),
            Self::BlockDelete { on } => creator.block_delete(*on),
            Self::Variable { id } => creator.variable(*id),
            Self::VariableSet { id, value } => creator.variable_set(*id, *value),
            Self::ProbeLinearCentreOutside(probe) => creator.probe_linear_centre_outside(probe),
            Self::ProbeSinglePoint(probe) => creator.probe_single_point(probe),
            Self::ProbeDownwardPoint(probe) => creator.probe_downward_point(probe),
            Self::ReportProbeResults(report) => creator.report_probe_results(report),
            Self::OpenLogFile { xml_file_name } => creator.open_log_file(xml_file_name.as_deref()),
            Self::LogCoordinate(point) => creator.log_coordinate(point),
            Self::LogMessage { message } => creator.log_message(message),
            Self::CloseLogFile => creator.close_log_file(),
            Self::RapidToMidpoint(points) => creator.rapid_to_midpoint(points),
            Self::RapidToIntersection(lines) => creator.rapid_to_intersection(lines),
            Self::RapidToRotatedCoordinate(rotation) => {
                creator.rapid_to_rotated_coordinate(rotation)
            }
            Self::SetPathControlMode(mode) => creator.set_path_control_mode(mode),
        }
    }
}

/// An ordered list of commands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Program {
    pub commands: Vec<Command>,
}

impl Program {
    /// Create an empty program
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if the program has no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Parse a JSON array of commands
    pub fn from_json(content: &str) -> Result<Self> {
        let program = serde_json::from_str(content).map_err(ScriptError::Json)?;
        Ok(program)
    }

    /// Parse one JSON command per line
    ///
    /// Blank lines and lines starting with `#` or `//` are skipped.
    pub fn from_json_lines(content: &str) -> Result<Self> {
        let mut program = Self::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
                continue;
            }

            let command = serde_json::from_str(line).map_err(|e| ScriptError::Parse {
                line_number: index + 1,
                reason: e.to_string(),
            })?;
            program.push(command);
        }

        Ok(program)
    }

    /// Serialize as a pretty-printed JSON array
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self).map_err(ScriptError::Json)?;
        Ok(json)
    }

    /// Replay every command against a creator, in order
    pub fn run<C: NcCreator + ?Sized>(&self, creator: &mut C) -> Result<()> {
        tracing::debug!("Running program with {} commands", self.commands.len());
        for command in &self.commands {
            command.apply(creator)?;
        }
        creator.flush_nc()
    }
}
