//! # BeamCut Core
//!
//! Geometry primitives and the path model shared by every BeamCut crate:
//! 2D points, homogeneous affine transforms, and the segment types
//! (lines and Bézier curves) that paths are built from, together with
//! parametric curve sampling.

pub mod geometry;
pub mod path;

pub use geometry::{Point, Transform};
pub use path::{Path, Segment};
