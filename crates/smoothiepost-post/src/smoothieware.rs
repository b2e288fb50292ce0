//! Smoothieware post-processor
//!
//! Translates creator operations into Smoothieware G-code, tracking
//! position and feed rates so redundant words are left out:
//! - `F` is only written when the feed rate changed (vertical moves always
//!   carry the vertical rate)
//! - arc centers are converted to offsets from the current position
//! - drill depths are converted to absolute Z below the given surface
//!
//! Operations the firmware lacks fall back to the `NcCreator` defaults.

use crate::creator::NcCreator;
use crate::format::{format_axis_word, format_comment, format_feed_word, render_line};
use crate::params::{ArcMove, DrillCycle, LinearMove, RapidMove};
use crate::state::MachineState;
use chrono::{Local, NaiveDateTime};
use smoothiepost_core::{
    Axis, CapabilitiesTrait, Capability, DistanceMode, MeasurementSystem, Plane, PostError, Result,
};
use std::fmt::Write as _;
use std::io::Write;

/// Default header comment
pub const DEFAULT_HEADER: &str = "Created with Smoothieware post processor";

/// Default header timestamp format
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

/// Options fixed for one output session
#[derive(Debug, Clone, PartialEq)]
pub struct PostOptions {
    /// First block number; `None` disables line numbering
    pub line_numbers: Option<u32>,
    /// First header comment line
    pub header_comment: String,
    /// `chrono` format for the header timestamp
    pub timestamp_format: String,
}

impl Default for PostOptions {
    fn default() -> Self {
        Self {
            line_numbers: None,
            header_comment: DEFAULT_HEADER.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// What Smoothieware can do
#[derive(Debug, Clone, Copy, Default)]
pub struct SmoothiewareCapabilities;

impl CapabilitiesTrait for SmoothiewareCapabilities {
    fn has_capability(&self, capability: Capability) -> bool {
        matches!(
            capability,
            Capability::Units
                | Capability::DistanceMode
                | Capability::SetPlane
                | Capability::Feedrate
                | Capability::Rapid
                | Capability::Feed
                | Capability::Arc
                | Capability::Dwell
                | Capability::Drill
                | Capability::EndCannedCycle
        )
    }
}

/// Smoothieware G-code creator writing to `W`
#[derive(Debug)]
pub struct SmoothiewareCreator<W: Write> {
    out: W,
    state: MachineState,
    options: PostOptions,
    started_at: NaiveDateTime,
}

impl<W: Write> SmoothiewareCreator<W> {
    /// Create a creator with default options
    pub fn new(out: W) -> Self {
        Self::with_options(out, PostOptions::default())
    }

    /// Create a creator with the given options
    pub fn with_options(out: W, options: PostOptions) -> Self {
        let state = MachineState::with_line_number(options.line_numbers.unwrap_or(0));
        Self {
            out,
            state,
            options,
            started_at: Local::now().naive_local(),
        }
    }

    /// Override the session timestamp written by `program_begin`
    pub fn with_timestamp(mut self, started_at: NaiveDateTime) -> Self {
        self.started_at = started_at;
        self
    }

    /// Current machine state
    pub fn state(&self) -> &MachineState {
        &self.state
    }

    /// Session options
    pub fn options(&self) -> &PostOptions {
        &self.options
    }

    /// Capabilities of this target
    pub fn capabilities(&self) -> SmoothiewareCapabilities {
        SmoothiewareCapabilities
    }

    /// Flush the sink and hand it back, ending the session
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(PostError::Io)?;
        tracing::info!(
            "Smoothieware session finished at block {}",
            self.state.line_number
        );
        Ok(self.out)
    }

    /// Write one line; blocks are numbered when numbering is enabled
    ///
    /// A block is refused, and nothing written, once the counter has no
    /// successor.
    fn emit(&mut self, line: &str, counts_as_block: bool) -> Result<()> {
        let number = match self.options.line_numbers {
            Some(_) if counts_as_block => Some(self.state.line_number),
            _ => None,
        };
        let next = match number {
            Some(n) => Some(n.checked_add(1).ok_or_else(|| {
                PostError::invalid_value("line_number", format!("N{} is the last block number", n))
            })?),
            None => None,
        };
        let text = render_line(number, line);
        self.out.write_all(text.as_bytes()).map_err(PostError::Io)?;
        if let Some(next) = next {
            self.state.line_number = next;
        }
        tracing::trace!("{}", text.trim_end());
        Ok(())
    }

    fn block(&mut self, line: &str) -> Result<()> {
        self.emit(line, true)
    }

    /// Append the nominal feed word if it differs from the last one written
    fn push_nominal_feed(&mut self, cmd: &mut String) {
        if self.state.last_f != self.state.f {
            self.state.last_f = self.state.f;
            cmd.push_str(&format_feed_word(self.state.f));
        }
    }
}

impl<W: Write> NcCreator for SmoothiewareCreator<W> {
    fn comment(&mut self, text: &str) -> Result<()> {
        self.emit(&format_comment(text), false)
    }

    fn program_begin(&mut self, id: u32, comment: &str) -> Result<()> {
        tracing::info!("Program {} begin: {}", id, comment);
        let header = self.options.header_comment.clone();
        self.comment(&header)?;
        let mut stamp = String::new();
        if write!(stamp, "{}", self.started_at.format(&self.options.timestamp_format)).is_err() {
            tracing::warn!(
                "Invalid timestamp format '{}', using {}",
                self.options.timestamp_format,
                DEFAULT_TIMESTAMP_FORMAT
            );
            stamp = self.started_at.format(DEFAULT_TIMESTAMP_FORMAT).to_string();
        }
        self.comment(&stamp)
    }

    fn program_end(&mut self) -> Result<()> {
        self.comment("program end")?;
        self.emit("M5 ; spindle off", false)
    }

    fn flush_nc(&mut self) -> Result<()> {
        self.out.flush().map_err(PostError::Io)?;
        Ok(())
    }

    fn imperial(&mut self) -> Result<()> {
        self.block(MeasurementSystem::Imperial.gcode())
    }

    fn metric(&mut self) -> Result<()> {
        self.block(MeasurementSystem::Metric.gcode())
    }

    fn absolute(&mut self) -> Result<()> {
        self.block(DistanceMode::Absolute.gcode())
    }

    fn incremental(&mut self) -> Result<()> {
        self.block(DistanceMode::Incremental.gcode())
    }

    fn set_plane(&mut self, plane: Plane) -> Result<()> {
        self.block(plane.gcode())
    }

    fn feedrate(&mut self, f: f64) -> Result<()> {
        self.state.f = f;
        Ok(())
    }

    fn feedrate_hv(&mut self, fh: f64, fv: f64) -> Result<()> {
        self.feedrate(fh)?;
        self.state.fv = fv;
        Ok(())
    }

    fn rapid(&mut self, target: &RapidMove) -> Result<()> {
        let mut cmd = String::from("G0");

        for (axis, value) in target.axis_values() {
            let Some(value) = value else { continue };
            cmd.push_str(&format_axis_word(axis, value));
            match axis {
                Axis::X => self.state.x = value,
                Axis::Y => self.state.y = value,
                _ => {}
            }
        }

        self.block(&cmd)?;

        if target.machine_coordinates {
            self.unsupported(Capability::MachineCoordinateRapid)?;
        }
        Ok(())
    }

    fn feed(&mut self, target: &LinearMove) -> Result<()> {
        let mut cmd = String::from("G1");
        let mut vertical = false;

        for (axis, value) in target.axis_values() {
            let Some(value) = value else { continue };
            match axis {
                Axis::X => self.state.x = value,
                Axis::Y => self.state.y = value,
                Axis::Z => {
                    if self.state.is_vertical_move(value) {
                        let note = format!("zdiff {:.6} != {:.6}", value, self.state.z);
                        self.comment(&note)?;
                        vertical = true;
                    }
                    self.state.z = value;
                }
                _ => {}
            }
            cmd.push_str(&format_axis_word(axis, value));
        }

        if vertical {
            self.state.last_f = self.state.fv;
            cmd.push_str(&format_feed_word(self.state.fv));
        } else {
            self.push_nominal_feed(&mut cmd);
        }

        self.block(&cmd)
    }

    fn arc(&mut self, arc: &ArcMove) -> Result<()> {
        let mut cmd = String::from(if arc.clockwise { "G2" } else { "G3" });

        // Centers arrive absolute; offsets are taken before x/y move on.
        let i = arc.i.map(|i| i - self.state.x);
        let j = arc.j.map(|j| j - self.state.y);

        let words = [
            (Axis::X, arc.x),
            (Axis::Y, arc.y),
            (Axis::Z, arc.z),
            (Axis::I, i),
            (Axis::J, j),
        ];
        for (axis, value) in words {
            let Some(value) = value else { continue };
            cmd.push_str(&format_axis_word(axis, value));
            match axis {
                Axis::X => self.state.x = value,
                Axis::Y => self.state.y = value,
                _ => {}
            }
        }

        self.push_nominal_feed(&mut cmd);
        self.block(&cmd)?;

        if arc.k.is_some() {
            self.unsupported(Capability::ArcCenterK)?;
        }
        if arc.r.is_some() {
            self.unsupported(Capability::ArcRadius)?;
        }
        Ok(())
    }

    fn dwell(&mut self, seconds: f64) -> Result<()> {
        self.block(&format!("G4 P{}", seconds))
    }

    fn drill(&mut self, cycle: &DrillCycle) -> Result<()> {
        if !self.state.in_drill_cycle {
            self.block("G98 ; retract to Z plane")?;
            self.state.in_drill_cycle = true;
        }

        if cycle.has_refinements() {
            tracing::warn!("Smoothieware G81 ignores standoff, dwell, peck and mode parameters");
        }

        let mut cmd = String::from("G81");
        if let Some(x) = cycle.x {
            cmd.push_str(&format_axis_word(Axis::X, x));
        }
        if let Some(y) = cycle.y {
            cmd.push_str(&format_axis_word(Axis::Y, y));
        }
        if let Some(z) = cycle.z {
            if cycle.depth.is_none() {
                tracing::warn!("Drill at Z{} has no depth, drilling to the surface", z);
            }
            cmd.push_str(&format_axis_word(Axis::Z, z - cycle.depth.unwrap_or(0.0)));
        }

        self.block(&cmd)
    }

    fn end_canned_cycle(&mut self) -> Result<()> {
        if self.state.in_drill_cycle {
            self.block("G80")?;
            self.state.in_drill_cycle = false;
        }
        Ok(())
    }
}
