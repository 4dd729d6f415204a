use beamcut_core::{Path, Point, Segment, Transform};
use beamcut_toolpath::{machine_transform, plan_motion, total_cut_length, MotionEvent, PlannerConfig};

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::Line {
        p1: Point::new(x1, y1),
        p2: Point::new(x2, y2),
    }
}

fn cut(x: f64, y: f64) -> MotionEvent {
    MotionEvent::CutTo {
        target: Point::new(x, y),
        feed: 400.0,
    }
}

#[test]
fn test_distant_paths_get_a_travel_move() {
    let paths = vec![
        Path::new(vec![line(0.0, 0.0, 1.0, 0.0)], Transform::identity()),
        Path::new(vec![line(5.0, 5.0, 6.0, 5.0)], Transform::identity()),
    ];
    let config = PlannerConfig {
        step_size: 0.5,
        ..Default::default()
    };
    let events = plan_motion(&paths, &config);
    assert_eq!(
        events,
        vec![
            MotionEvent::ToolOn,
            cut(0.0, 0.0),
            cut(0.5, 0.0),
            cut(1.0, 0.0),
            MotionEvent::ToolOff,
            MotionEvent::TravelTo {
                target: Point::new(5.0, 5.0),
                feed: 800.0,
            },
            MotionEvent::ToolOn,
            cut(5.0, 5.0),
            cut(5.5, 5.0),
            cut(6.0, 5.0),
            MotionEvent::ToolOff,
        ]
    );
}

#[test]
fn test_small_gaps_cut_through() {
    // Euclidean distance here is ~0.085, but neither axis moves more
    // than the 0.07 threshold, so the tool stays down.
    let paths = vec![
        Path::new(vec![line(0.0, 0.0, 1.0, 0.0)], Transform::identity()),
        Path::new(vec![line(1.06, 0.06, 2.0, 1.0)], Transform::identity()),
    ];
    let config = PlannerConfig {
        step_size: 1.0,
        ..Default::default()
    };
    let events = plan_motion(&paths, &config);
    assert!(!events
        .iter()
        .any(|e| matches!(e, MotionEvent::TravelTo { .. })));
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, MotionEvent::ToolOn))
            .count(),
        1
    );
}

#[test]
fn test_single_axis_gap_triggers_travel() {
    let paths = vec![
        Path::new(vec![line(0.0, 0.0, 1.0, 0.0)], Transform::identity()),
        Path::new(vec![line(1.0, 0.08, 2.0, 0.08)], Transform::identity()),
    ];
    let config = PlannerConfig {
        step_size: 1.0,
        ..Default::default()
    };
    let events = plan_motion(&paths, &config);
    let travel_at = events
        .iter()
        .position(|e| matches!(e, MotionEvent::TravelTo { .. }))
        .unwrap();
    assert_eq!(events[travel_at - 1], MotionEvent::ToolOff);
    assert_eq!(events[travel_at + 1], MotionEvent::ToolOn);
}

#[test]
fn test_tool_off_closes_a_plan() {
    let paths = vec![Path::new(vec![line(0.0, 0.0, 1.0, 1.0)], Transform::identity())];
    let events = plan_motion(&paths, &PlannerConfig::default());
    assert_eq!(events.last(), Some(&MotionEvent::ToolOff));

    assert!(plan_motion(&[], &PlannerConfig::default()).is_empty());
}

#[test]
fn test_device_transform_applies_after_path_transform() {
    let paths = vec![Path::new(
        vec![line(1.0, 1.0, 1.0, 1.0)],
        Transform::scale(2.0, 2.0),
    )];
    let config = PlannerConfig {
        step_size: 1.0,
        device: Transform::translation(5.0, 0.0),
        ..Default::default()
    };
    let events = plan_motion(&paths, &config);
    assert_eq!(
        events,
        vec![
            MotionEvent::TravelTo {
                target: Point::new(7.0, 2.0),
                feed: 800.0,
            },
            MotionEvent::ToolOn,
            cut(7.0, 2.0),
            cut(7.0, 2.0),
            MotionEvent::ToolOff,
        ]
    );
}

#[test]
fn test_overshoot_sample_clamps_to_endpoint() {
    let paths = vec![Path::new(vec![line(0.0, 0.0, 1.0, 0.0)], Transform::identity())];
    let config = PlannerConfig {
        step_size: 0.4,
        ..Default::default()
    };
    let events = plan_motion(&paths, &config);
    let xs: Vec<f64> = events
        .iter()
        .filter_map(|e| match e {
            MotionEvent::CutTo { target, .. } => Some(target.x),
            _ => None,
        })
        .collect();
    assert_eq!(xs, vec![0.0, 0.4, 0.8, 1.0]);
}

#[test]
fn test_total_cut_length_measures_cuts_only() {
    let square = vec![
        line(0.0, 0.0, 1.0, 0.0),
        line(1.0, 0.0, 1.0, 1.0),
        line(1.0, 1.0, 0.0, 1.0),
        line(0.0, 1.0, 0.0, 0.0),
    ];
    let paths = vec![Path::new(square, Transform::identity())];
    let config = PlannerConfig {
        step_size: 1.0,
        ..Default::default()
    };
    assert_eq!(total_cut_length(&plan_motion(&paths, &config)), 4.0);

    let events = vec![
        MotionEvent::TravelTo {
            target: Point::new(3.0, 4.0),
            feed: 800.0,
        },
        MotionEvent::ToolOn,
        cut(0.0, 4.0),
        MotionEvent::ToolOff,
    ];
    assert_eq!(total_cut_length(&events), 3.0);
}

#[test]
fn test_machine_transform_flips_y_against_the_bed() {
    let device = machine_transform(5.0, 10.0, 220.0);
    assert_eq!(device.apply(Point::new(1.0, 2.0)), Point::new(6.0, 228.0));

    // Bed heights below 10 mm are clamped.
    let tiny = machine_transform(0.0, 0.0, 3.0);
    assert_eq!(tiny.apply(Point::ORIGIN), Point::new(0.0, 10.0));
}

#[test]
fn test_nonpositive_step_still_terminates() {
    let paths = vec![Path::new(vec![line(0.0, 0.0, 1.0, 0.0)], Transform::identity())];
    let config = PlannerConfig {
        step_size: 0.0,
        ..Default::default()
    };
    let events = plan_motion(&paths, &config);
    assert_eq!(events.last(), Some(&MotionEvent::ToolOff));
}
