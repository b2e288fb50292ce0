//! # smoothiepost-post
//!
//! Translates logical CNC operations into Smoothieware G-code.
//!
//! Toolpath hosts drive an [`NcCreator`] one call per operation;
//! [`SmoothiewareCreator`] is the Smoothieware implementation and writes
//! straight into any `std::io::Write`. A [`Program`] stores those calls as a
//! JSON script so they can be replayed later.

pub mod creator;
pub mod format;
pub mod params;
pub mod program;
pub mod smoothieware;
pub mod state;

pub use creator::NcCreator;
pub use params::{
    ArcMove, BoreCycle, DatumOffset, DrillCycle, IntersectionRapid, LinearMove, MidpointRapid,
    MirrorPlanes, PathControl, Point3, ProbeDownwardPoint, ProbeLinearCentre, ProbeReport,
    ProbeSinglePoint, RapidMove, RotatedRapid, Rotation, TapCycle, ToolDefinition,
    TransformMatrix,
};
pub use program::{Command, Program};
pub use smoothieware::{
    PostOptions, SmoothiewareCapabilities, SmoothiewareCreator, DEFAULT_HEADER,
    DEFAULT_TIMESTAMP_FORMAT,
};
pub use state::{MachineState, Z_EPSILON};
