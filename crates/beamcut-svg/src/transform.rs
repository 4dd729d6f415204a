//! Parser for SVG `transform` attribute strings.

use beamcut_core::Transform;

/// Parses a transform-list string into one composed transform.
///
/// Recognized functions: `translate`, `scale`, `rotate`, `skewX`,
/// `skewY`, `matrix` (case-sensitive). Each name/arity pair is scanned
/// independently by first occurrence, and the matched functions compose
/// in a fixed order regardless of where they appear in the input:
/// translate, two-argument scale, uniform scale, pivoted rotate, rotate,
/// skewX, skewY, matrix. A name that is absent, not followed directly by
/// parentheses, or applied to the wrong argument count contributes
/// nothing. Angles are given in degrees.
///
/// Returns the identity transform when nothing matched.
pub fn parse_transform_list(input: &str) -> Transform {
    let mut t = Transform::identity();
    if let Some(args) = function_args(input, "translate", 2) {
        t = t * Transform::translation(args[0], args[1]);
    }
    if let Some(args) = function_args(input, "scale", 2) {
        t = t * Transform::scale(args[0], args[1]);
    }
    if let Some(args) = function_args(input, "scale", 1) {
        t = t * Transform::scale(args[0], args[0]);
    }
    if let Some(args) = function_args(input, "rotate", 3) {
        t = t * Transform::rotation(args[1], args[2], args[0].to_radians());
    }
    if let Some(args) = function_args(input, "rotate", 1) {
        t = t * Transform::rotation(0.0, 0.0, args[0].to_radians());
    }
    if let Some(args) = function_args(input, "skewX", 1) {
        t = t * Transform::skew_x(args[0].to_radians());
    }
    if let Some(args) = function_args(input, "skewY", 1) {
        t = t * Transform::skew_y(args[0].to_radians());
    }
    if let Some(args) = function_args(input, "matrix", 6) {
        t = t * Transform::from_coefficients(args[0], args[1], args[2], args[3], args[4], args[5]);
    }
    t
}

/// Extracts the arguments of the first occurrence of `name(...)` when
/// the comma-separated argument count matches `arity` exactly. The name
/// must be followed directly by `(`.
fn function_args(input: &str, name: &str, arity: usize) -> Option<Vec<f64>> {
    let start = input.find(name)?;
    let rest = input[start + name.len()..].strip_prefix('(')?;
    let body = &rest[..rest.find(')')?];
    let raw: Vec<&str> = body.split(',').collect();
    if raw.len() != arity {
        return None;
    }
    Some(raw.into_iter().map(lenient_number).collect())
}

/// Keeps only digit, `.` and `-` characters, then parses the remainder;
/// anything malformed yields `0.0` rather than an error.
fn lenient_number(token: &str) -> f64 {
    let filtered: String = token
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    filtered.parse().unwrap_or(0.0)
}
