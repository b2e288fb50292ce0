use smoothiepost_core::{
    Axis, CapabilitiesTrait, Capability, Error, MeasurementSystem, Plane, PostError,
};
use std::collections::HashSet;

struct MotionOnly;

impl CapabilitiesTrait for MotionOnly {
    fn has_capability(&self, capability: Capability) -> bool {
        matches!(capability, Capability::Rapid | Capability::Feed)
    }
}

#[test]
fn test_motion_axes_in_canonical_order() {
    let letters: String = Axis::MOTION.iter().map(|a| a.letter()).collect();
    assert_eq!(letters, "XYZABCUVW");
    assert!(!Axis::MOTION.contains(&Axis::I));
}

#[test]
fn test_axis_letters_parse_back() {
    for axis in Axis::MOTION {
        assert_eq!(Axis::from_letter(axis.letter()), Some(axis));
        assert_eq!(
            Axis::from_letter(axis.letter().to_ascii_lowercase()),
            Some(axis)
        );
    }
    assert_eq!(Axis::from_letter('Q'), None);
}

#[test]
fn test_plane_from_config_strings() {
    assert_eq!("XY".parse::<Plane>().unwrap(), Plane::Xy);
    assert_eq!("g18".parse::<Plane>().unwrap(), Plane::Xz);
    assert_eq!("yz".parse::<Plane>().unwrap().gcode(), "G19");

    let err = "xw".parse::<Plane>().unwrap_err();
    assert!(err.to_string().contains("plane"));
}

#[test]
fn test_default_units_are_metric() {
    assert_eq!(MeasurementSystem::default().gcode(), "G21");
    assert_eq!(Plane::default(), Plane::Xy);
}

#[test]
fn test_capability_catalogue() {
    let names: HashSet<&str> = Capability::ALL.iter().map(|c| c.name()).collect();
    assert_eq!(names.len(), Capability::ALL.len());

    let target = MotionOnly;
    assert_eq!(target.capabilities(), vec![Capability::Rapid, Capability::Feed]);
    assert_eq!(
        target.unsupported_capabilities().len(),
        Capability::ALL.len() - 2
    );
}

#[test]
fn test_error_wrapping() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
    let err: Error = io.into();
    assert!(err.is_io_error());
    assert!(err.to_string().starts_with("Failed to write G-code output"));

    let err: Error = PostError::invalid_value("feedrate", "must be positive").into();
    assert!(!err.is_io_error());
    assert_eq!(
        err.to_string(),
        "Invalid value for 'feedrate': must be positive"
    );
}
