//! Writes motion events as G-code text.

use chrono::Utc;

use crate::motion::MotionEvent;
use crate::planner::total_cut_length;

/// G-code writer mapping motion events to line-oriented commands.
///
/// Tool on/off events expand to caller-supplied snippets, so the output
/// fits lasers, plotters, drag knives or anything else with a binary
/// tool state. Feed changes are written as `M203` axis limits ahead of
/// the `G1` moves they apply to.
#[derive(Debug, Clone, Default)]
pub struct GcodeWriter {
    /// Lines inserted right after the preamble.
    pub start_gcode: String,
    /// Lines appended after the last motion command.
    pub end_gcode: String,
    /// Lines that engage the tool.
    pub tool_on_gcode: String,
    /// Lines that disengage the tool.
    pub tool_off_gcode: String,
}

impl GcodeWriter {
    /// Creates a writer with the given snippet set.
    pub fn new(
        start_gcode: String,
        end_gcode: String,
        tool_on_gcode: String,
        tool_off_gcode: String,
    ) -> Self {
        Self {
            start_gcode,
            end_gcode,
            tool_on_gcode,
            tool_off_gcode,
        }
    }

    /// Renders a complete G-code program for a plan.
    pub fn generate(&self, events: &[MotionEvent]) -> String {
        let mut gcode = String::new();
        gcode.push_str(&self.generate_header(total_cut_length(events)));
        gcode.push_str(&self.generate_body(events));
        gcode.push_str(&self.generate_footer());
        gcode
    }

    /// Generates the program preamble.
    ///
    /// The tool-off snippet runs before any motion so the tool state is
    /// known even when the start snippet leaves it undefined.
    pub fn generate_header(&self, cut_length: f64) -> String {
        let mut gcode = String::new();
        gcode.push_str("; BeamCut toolpath\n");
        gcode.push_str(&format!(
            "; Generated: {}\n",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));
        gcode.push_str(&format!("; Cut length: {:.3} mm\n", cut_length));
        gcode.push_str("G21 ; Metric system\n");
        gcode.push_str("G90 ; Absolute positioning\n");
        gcode.push_str("G28 ; Home all axes\n");
        gcode.push_str(&self.start_gcode);
        gcode.push('\n');
        gcode.push_str(&self.tool_off_gcode);
        gcode.push('\n');
        gcode
    }

    /// Generates the motion commands for a plan.
    pub fn generate_body(&self, events: &[MotionEvent]) -> String {
        let mut gcode = String::new();
        let mut current_feed = None;
        for event in events {
            match event {
                MotionEvent::ToolOn => {
                    gcode.push_str(&self.tool_on_gcode);
                    gcode.push('\n');
                }
                MotionEvent::ToolOff => {
                    gcode.push_str(&self.tool_off_gcode);
                    gcode.push('\n');
                }
                MotionEvent::TravelTo { target, feed }
                | MotionEvent::CutTo { target, feed } => {
                    if current_feed != Some(*feed) {
                        gcode.push_str(&format!("M203 X{feed:.0} Y{feed:.0}\n"));
                        current_feed = Some(*feed);
                    }
                    gcode.push_str(&format!("G1 X{:.3} Y{:.3}\n", target.x, target.y));
                }
            }
        }
        gcode
    }

    /// Generates the program tail: the end snippet, written as-is.
    pub fn generate_footer(&self) -> String {
        self.end_gcode.clone()
    }
}
