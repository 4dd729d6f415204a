//! # BeamCut
//!
//! Converts SVG vector paths into laser cutter G-code. Documents are
//! parsed into line and Bézier segments, flattened into an ordered
//! motion plan separating travel moves from cuts, and written out as
//! G-code with configurable snippets around tool state changes.
//!
//! ## Architecture
//!
//! BeamCut is organized as a workspace with multiple crates:
//!
//! 1. **beamcut-core** - Geometry primitives: points, transforms, path segments
//! 2. **beamcut-svg** - SVG parsing: documents, path data, transform lists
//! 3. **beamcut-toolpath** - Motion planning, G-code writing, plan previews
//! 4. **beamcut-settings** - Configuration loading, validation and persistence
//! 5. **beamcut** - Command-line exporter that ties the crates together

pub use beamcut_core::{Path, Point, Segment, Transform};
pub use beamcut_settings::{Config, SettingsError, SettingsResult};
pub use beamcut_svg::{collect_paths, load_paths, load_paths_from_file, SvgDocument, SvgError};
pub use beamcut_toolpath::{
    machine_transform, plan_motion, render_preview, total_cut_length, GcodeWriter, MotionEvent,
    PlannerConfig,
};

/// Builds the planner configuration for a loaded [`Config`], including
/// the device transform that maps page coordinates onto the bed.
pub fn planner_config(config: &Config) -> PlannerConfig {
    PlannerConfig {
        step_size: config.step_size,
        gap_threshold: config.gap_threshold,
        travel_feed: config.travel_feed,
        working_feed: config.working_feed,
        device: machine_transform(config.offset_x, config.offset_y, config.bed_height),
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
/// - UTC timestamps
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
