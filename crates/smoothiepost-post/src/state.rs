//! Machine state tracked while translating commands.

/// Z changes at or below this magnitude are not vertical moves.
pub const Z_EPSILON: f64 = 1e-10;

/// State tracked during post-processing
///
/// Positions are the last commanded absolute values and start at 0, the
/// power-on assumption. Axes a move omits keep their value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MachineState {
    /// Current X position
    pub x: f64,
    /// Current Y position
    pub y: f64,
    /// Current Z position (updated by linear feeds only)
    pub z: f64,
    /// Nominal horizontal feed rate
    pub f: f64,
    /// Vertical feed rate
    pub fv: f64,
    /// Feed rate most recently written to the output, 0 if none yet
    pub last_f: f64,
    /// Inside a drilling canned cycle
    pub in_drill_cycle: bool,
    /// Next block number (only advanced when line numbering is enabled)
    pub line_number: u32,
}

impl MachineState {
    /// Fresh state whose block numbering starts at `line_number`
    pub fn with_line_number(line_number: u32) -> Self {
        Self {
            line_number,
            ..Self::default()
        }
    }

    /// Current (x, y, z) position
    pub fn position(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// True when moving to `z` counts as a vertical move
    pub fn is_vertical_move(&self, z: f64) -> bool {
        (z - self.z).abs() > Z_EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let state = MachineState::default();
        assert_eq!(state.position(), (0.0, 0.0, 0.0));
        assert_eq!(state.last_f, 0.0);
        assert!(!state.in_drill_cycle);
    }

    #[test]
    fn test_vertical_move_threshold() {
        let state = MachineState::with_line_number(10);
        assert_eq!(state.line_number, 10);
        assert!(!state.is_vertical_move(0.0));
        assert!(!state.is_vertical_move(1e-11));
        assert!(state.is_vertical_move(-0.001));
    }
}
