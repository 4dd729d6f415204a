//! Plans motion events from collected paths.

use beamcut_core::{Path, Point, Transform};
use tracing::debug;

use crate::motion::MotionEvent;

/// Smallest accepted sampling step; anything lower would stall the walk.
const MIN_STEP_SIZE: f64 = 1e-6;

/// Sampling and motion parameters for the planner.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Sampling resolution along each segment's curve parameter.
    pub step_size: f64,
    /// Largest positional jump bridged without a travel move (mm).
    pub gap_threshold: f64,
    /// Feed rate for travel moves (mm/s).
    pub travel_feed: f64,
    /// Feed rate for cutting moves (mm/s).
    pub working_feed: f64,
    /// Device transform applied on top of each path's own transform.
    pub device: Transform,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            step_size: 0.01,
            gap_threshold: 0.07,
            travel_feed: 800.0,
            working_feed: 400.0,
            device: Transform::identity(),
        }
    }
}

/// Builds the device transform mapping page coordinates onto the bed.
///
/// SVG documents grow downward while the bed's Y axis grows upward from
/// the machine origin, so Y is flipped against the bed height. Bed
/// heights under 10 mm are treated as 10 mm.
pub fn machine_transform(offset_x: f64, offset_y: f64, bed_height: f64) -> Transform {
    let bed = bed_height.max(10.0);
    Transform::from_coefficients(1.0, 0.0, 0.0, -1.0, offset_x, bed + offset_y)
}

/// Plans an ordered motion-event sequence for a list of paths.
///
/// The cursor and tool state carry across path boundaries. A segment
/// starting farther than `gap_threshold` from the cursor on either axis
/// gets a travel move with the tool disengaged for the hop; otherwise
/// cutting continues directly. Each segment is sampled at `step_size`
/// increments of its curve parameter up to and including the endpoint,
/// and a final `ToolOff` closes the plan when the tool is still engaged.
pub fn plan_motion(paths: &[Path], config: &PlannerConfig) -> Vec<MotionEvent> {
    let step = config.step_size.max(MIN_STEP_SIZE);
    let mut events = Vec::new();
    let mut last_point = Point::ORIGIN;
    let mut tool_enabled = false;

    for path in paths {
        let effective = config.device * path.transform;
        for segment in &path.segments {
            let start = effective.apply(segment.point_at(0.0));
            if axis_distance(last_point, start) > config.gap_threshold {
                if tool_enabled {
                    events.push(MotionEvent::ToolOff);
                    tool_enabled = false;
                }
                events.push(MotionEvent::TravelTo {
                    target: start,
                    feed: config.travel_feed,
                });
            }
            if !tool_enabled {
                events.push(MotionEvent::ToolOn);
                tool_enabled = true;
            }
            // The final step may overshoot t=1; the sampler clamps it.
            let mut i = 0;
            loop {
                let t = i as f64 * step;
                if t >= 1.0 + step {
                    break;
                }
                events.push(MotionEvent::CutTo {
                    target: effective.apply(segment.point_at(t)),
                    feed: config.working_feed,
                });
                i += 1;
            }
            last_point = effective.apply(segment.point_at(1.0));
        }
    }
    if tool_enabled {
        events.push(MotionEvent::ToolOff);
    }

    debug!(
        "Planned {} motion events from {} paths",
        events.len(),
        paths.len()
    );
    events
}

/// Gap metric between consecutive drawn points: the larger axis delta,
/// not the Euclidean distance.
fn axis_distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Total length of the cutting moves in a plan (mm).
pub fn total_cut_length(events: &[MotionEvent]) -> f64 {
    let mut length = 0.0;
    let mut position = Point::ORIGIN;
    for event in events {
        match event {
            MotionEvent::TravelTo { target, .. } => position = *target,
            MotionEvent::CutTo { target, .. } => {
                length += position.distance_to(target);
                position = *target;
            }
            _ => {}
        }
    }
    length
}
