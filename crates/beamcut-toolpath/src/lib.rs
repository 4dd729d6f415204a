//! # BeamCut Toolpath
//!
//! Turns collected paths into an ordered motion plan and renders that
//! plan as G-code text or a raster preview image.

pub mod gcode;
pub mod motion;
pub mod planner;
pub mod preview;

pub use gcode::GcodeWriter;
pub use motion::MotionEvent;
pub use planner::{machine_transform, plan_motion, total_cut_length, PlannerConfig};
pub use preview::render_preview;
