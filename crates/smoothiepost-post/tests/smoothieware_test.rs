use chrono::NaiveDate;
use smoothiepost_core::Plane;
use smoothiepost_post::{
    ArcMove, DrillCycle, LinearMove, NcCreator, PostOptions, RapidMove, SmoothiewareCreator,
    ToolDefinition,
};
use std::io::{self, Write};

/// Sink that accepts `remaining` writes, then fails every write
struct LimitedSink {
    remaining: usize,
    written: Vec<u8>,
}

impl LimitedSink {
    fn new(remaining: usize) -> Self {
        Self {
            remaining,
            written: Vec::new(),
        }
    }
}

impl Write for LimitedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.remaining -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn render(run: impl FnOnce(&mut SmoothiewareCreator<Vec<u8>>)) -> Vec<String> {
    let mut creator = SmoothiewareCreator::new(Vec::new());
    run(&mut creator);
    let bytes = creator.finish().unwrap();
    String::from_utf8(bytes)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_feed_word_only_on_first_line_of_run() {
    let lines = render(|c| {
        c.feedrate(100.0).unwrap();
        for x in 1..=4 {
            c.feed(&LinearMove {
                x: Some(x as f64),
                ..Default::default()
            })
            .unwrap();
        }
    });

    assert_eq!(lines[0], "G1 X1.0000 F100");
    assert!(lines[1..].iter().all(|l| !l.contains('F')));
}

#[test]
fn test_feed_word_rewritten_when_rate_changes() {
    let lines = render(|c| {
        c.feedrate(100.0).unwrap();
        c.feed(&LinearMove {
            x: Some(1.0),
            ..Default::default()
        })
        .unwrap();
        c.feedrate(12.5).unwrap();
        c.feed(&LinearMove {
            x: Some(2.0),
            ..Default::default()
        })
        .unwrap();
    });

    assert_eq!(lines, vec!["G1 X1.0000 F100", "G1 X2.0000 F12.5"]);
}

#[test]
fn test_vertical_feed_substitution() {
    let mut creator = SmoothiewareCreator::new(Vec::new());
    creator.feedrate_hv(100.0, 50.0).unwrap();
    creator
        .feed(&LinearMove {
            z: Some(5.0),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(creator.state().z, 5.0);

    let text = String::from_utf8(creator.finish().unwrap()).unwrap();
    assert!(text.starts_with(";zdiff"));
    assert!(text.contains("G1 Z5.0000 F50\n"));
}

#[test]
fn test_arc_center_offsets_from_current_position() {
    let mut creator = SmoothiewareCreator::new(Vec::new());
    creator
        .rapid(&RapidMove {
            x: Some(10.0),
            y: Some(10.0),
            ..Default::default()
        })
        .unwrap();
    creator
        .arc(&ArcMove {
            clockwise: true,
            x: Some(20.0),
            y: Some(10.0),
            i: Some(15.0),
            j: Some(10.0),
            ..Default::default()
        })
        .unwrap();
    assert_eq!((creator.state().x, creator.state().y), (20.0, 10.0));

    let text = String::from_utf8(creator.finish().unwrap()).unwrap();
    assert!(text.contains("I5.0000 J0.0000"));
}

#[test]
fn test_drill_cycle_scenario() {
    let hole = DrillCycle {
        x: Some(1.0),
        y: Some(1.0),
        z: Some(0.0),
        depth: Some(2.0),
        ..Default::default()
    };

    let lines = render(|c| {
        c.drill(&hole).unwrap();
        c.drill(&hole).unwrap();
        c.end_canned_cycle().unwrap();
        c.end_canned_cycle().unwrap();
    });

    let retracts = lines.iter().filter(|l| l.starts_with("G98")).count();
    assert_eq!(retracts, 1);
    assert_eq!(lines[1], "G81 X1.0000 Y1.0000 Z-2.0000");
    assert_eq!(lines.iter().filter(|l| *l == "G80").count(), 1);
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_drill_refinements_ignored() {
    let lines = render(|c| {
        c.drill(&DrillCycle {
            x: Some(5.0),
            z: Some(1.0),
            depth: Some(4.0),
            standoff: Some(2.0),
            dwell: Some(0.5),
            peck_depth: Some(1.0),
            ..Default::default()
        })
        .unwrap();
    });

    assert_eq!(lines, vec!["G98 ; retract to Z plane", "G81 X5.0000 Z-3.0000"]);
}

#[test]
fn test_stub_emits_one_comment_and_keeps_state() {
    let mut creator = SmoothiewareCreator::new(Vec::new());
    creator.feedrate_hv(200.0, 40.0).unwrap();
    creator
        .feed(&LinearMove {
            x: Some(3.0),
            y: Some(4.0),
            ..Default::default()
        })
        .unwrap();
    let before = creator.state().clone();

    creator.tool_change(2).unwrap();
    creator
        .tool_defn(&ToolDefinition {
            id: 2,
            radius: Some(3.0),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(creator.state(), &before);

    let text = String::from_utf8(creator.finish().unwrap()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        &lines[1..],
        &[";not supported: tool_change", ";not supported: tool_defn"]
    );
}

#[test]
fn test_axes_are_sticky() {
    let lines = render(|c| {
        c.rapid(&RapidMove {
            x: Some(1.0),
            y: Some(2.0),
            ..Default::default()
        })
        .unwrap();
        c.rapid(&RapidMove {
            y: Some(3.0),
            ..Default::default()
        })
        .unwrap();
    });

    assert_eq!(lines[1], "G0 Y3.0000");
}

#[test]
fn test_line_numbering_from_ten() {
    let options = PostOptions {
        line_numbers: Some(10),
        ..Default::default()
    };
    let mut creator = SmoothiewareCreator::with_options(Vec::new(), options);
    creator.metric().unwrap();
    creator.absolute().unwrap();
    creator.set_plane(Plane::Xz).unwrap();

    let text = String::from_utf8(creator.finish().unwrap()).unwrap();
    assert_eq!(text, "N10 G21\nN11 G90\nN12 G18\n");
}

#[test]
fn test_complete_program() {
    let stamp = NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap();
    let options = PostOptions {
        header_comment: "bracket".to_string(),
        timestamp_format: "%Y-%m-%d".to_string(),
        ..Default::default()
    };
    let mut creator = SmoothiewareCreator::with_options(Vec::new(), options).with_timestamp(stamp);

    creator.program_begin(1, "bracket").unwrap();
    creator.metric().unwrap();
    creator.absolute().unwrap();
    creator.feedrate_hv(600.0, 120.0).unwrap();
    creator
        .rapid(&RapidMove {
            x: Some(0.0),
            y: Some(0.0),
            z: Some(5.0),
            ..Default::default()
        })
        .unwrap();
    creator
        .feed(&LinearMove {
            z: Some(-1.0),
            ..Default::default()
        })
        .unwrap();
    creator
        .feed(&LinearMove {
            x: Some(10.0),
            ..Default::default()
        })
        .unwrap();
    creator.spindle(Some(12000.0), true).unwrap();
    creator.program_end().unwrap();

    let text = String::from_utf8(creator.finish().unwrap()).unwrap();
    assert_eq!(
        text,
        ";bracket\n\
         ;2026-01-02\n\
         G21\n\
         G90\n\
         G0 X0.0000 Y0.0000 Z5.0000\n\
         ;zdiff -1.000000 != 0.000000\n\
         G1 Z-1.0000 F120\n\
         G1 X10.0000 F600\n\
         ;not supported: spindle control disabled\n\
         ;program end\n\
         M5 ; spindle off\n"
    );
}

#[test]
fn test_sink_failure_reaches_caller() {
    let mut creator = SmoothiewareCreator::new(LimitedSink::new(0));

    let err = creator
        .feed(&LinearMove {
            x: Some(1.0),
            ..Default::default()
        })
        .unwrap_err();
    assert!(err.is_io_error());
    assert_eq!(err.to_string(), "Failed to write G-code output: disk full");

    assert!(creator.comment("note").unwrap_err().is_io_error());
    assert!(creator.program_end().unwrap_err().is_io_error());
    assert!(creator.tool_change(1).unwrap_err().is_io_error());
}

#[test]
fn test_sink_failure_mid_program() {
    let mut creator = SmoothiewareCreator::new(LimitedSink::new(1));
    creator.metric().unwrap();
    assert!(creator.absolute().unwrap_err().is_io_error());

    let sink = creator.finish().unwrap();
    assert_eq!(String::from_utf8(sink.written).unwrap(), "G21\n");
}
