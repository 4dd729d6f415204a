//! # BeamCut SVG
//!
//! Reads SVG documents and turns them into the core path model. The
//! crate bundles a minimal XML reader, the `transform` attribute
//! parser, the path-data tokenizer and interpreter, and the document
//! walker that collects paths with their composed transforms.
//!
//! Parsing is strict: a failure anywhere in a document fails the whole
//! load, so callers never see a partial document. The one deliberate
//! exception is the `transform` attribute, which skips unrecognized or
//! mis-called functions and reads malformed numbers as zero.

pub mod collect;
pub mod document;
pub mod error;
pub mod path_data;
pub mod transform;

pub use collect::{collect_paths, load_paths, load_paths_from_file};
pub use document::{SvgDocument, SvgNode};
pub use error::{SvgError, SvgResult};
pub use path_data::{parse_path_data, tokenize, PathToken};
pub use transform::parse_transform_list;
