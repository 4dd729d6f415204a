//! Error types for SVG document reading and path parsing.
//!
//! A failure anywhere aborts the whole document load: there is no
//! partial or best-effort document.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading an SVG document or interpreting
/// its path data.
#[derive(Error, Debug)]
pub enum SvgError {
    /// The document text is not well-formed XML.
    #[error("Malformed document: {reason}")]
    MalformedDocument { reason: String },

    /// The document contains no `<svg>` root element.
    #[error("Document has no <svg> root element")]
    MissingSvgRoot,

    /// Path data ended while a command still required coordinates.
    #[error("Path data ended while reading arguments for '{command}'")]
    TruncatedPathData { command: char },

    /// A smooth shorthand command had no compatible preceding segment.
    #[error("'{command}' requires the previous segment to be a {expected} curve")]
    InvalidShorthand {
        command: char,
        expected: &'static str,
    },

    /// A command letter outside the supported path-data set.
    #[error("Unrecognized path command '{command}'")]
    UnknownCommand { command: char },

    /// A coordinate appeared with no command to apply it to.
    #[error("Unexpected coordinate '{value}' with no command to apply it to")]
    UnexpectedNumber { value: String },

    /// A numeric token could not be parsed as a coordinate.
    #[error("Invalid coordinate value '{value}'")]
    InvalidNumber { value: String },

    /// I/O error while reading a document file.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for SVG operations.
pub type SvgResult<T> = Result<T, SvgError>;
