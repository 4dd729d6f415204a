//! Motion events produced by the planner.

use beamcut_core::Point;

/// One step of a planned toolpath, consumed in order.
///
/// Coordinates are final machine coordinates; the device transform has
/// already been applied by the planner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionEvent {
    /// Engage the tool.
    ToolOn,
    /// Disengage the tool.
    ToolOff,
    /// Reposition with the tool disengaged.
    TravelTo { target: Point, feed: f64 },
    /// Cut to the target with the tool engaged.
    CutTo { target: Point, feed: f64 },
}
