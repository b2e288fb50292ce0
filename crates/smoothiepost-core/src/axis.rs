//! Axis letters and ordered axis word lists
//!
//! Commands describe their inputs as an ordered list of `(Axis, Option<f64>)`
//! pairs. `None` means the axis is not involved in the move.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A G-code address letter for a coordinate or arc offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
    A,
    B,
    C,
    U,
    V,
    W,
    /// Arc center offset along X
    I,
    /// Arc center offset along Y
    J,
}

impl Axis {
    /// Canonical order of the motion axes in a rapid move
    pub const MOTION: [Axis; 9] = [
        Axis::X,
        Axis::Y,
        Axis::Z,
        Axis::A,
        Axis::B,
        Axis::C,
        Axis::U,
        Axis::V,
        Axis::W,
    ];

    /// Uppercase address letter
    pub fn letter(&self) -> char {
        match self {
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::U => 'U',
            Self::V => 'V',
            Self::W => 'W',
            Self::I => 'I',
            Self::J => 'J',
        }
    }

    /// Look up an axis from its letter (case-insensitive)
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Some(Self::X),
            'Y' => Some(Self::Y),
            'Z' => Some(Self::Z),
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'U' => Some(Self::U),
            'V' => Some(Self::V),
            'W' => Some(Self::W),
            'I' => Some(Self::I),
            'J' => Some(Self::J),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Ordered axis values for one command
pub type AxisValues = Vec<(Axis, Option<f64>)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_round_trip() {
        for axis in Axis::MOTION {
            assert_eq!(Axis::from_letter(axis.letter()), Some(axis));
        }
        assert_eq!(Axis::from_letter('i'), Some(Axis::I));
        assert_eq!(Axis::from_letter('q'), None);
    }

    #[test]
    fn test_motion_order() {
        let letters: String = Axis::MOTION.iter().map(|a| a.letter()).collect();
        assert_eq!(letters, "XYZABCUVW");
    }
}
