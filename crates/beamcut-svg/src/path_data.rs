//! Tokenizing and interpreting SVG path data.

use beamcut_core::{Point, Segment};

use crate::error::{SvgError, SvgResult};

/// One token of SVG path data.
#[derive(Debug, Clone, PartialEq)]
pub enum PathToken {
    /// A single-letter command such as `M` or `c`.
    Command(char),
    /// The raw text of one numeric literal.
    Number(String),
}

/// Splits raw path data into command-letter and numeric tokens.
///
/// Numbers follow the float grammar: an optional sign, one `.` in the
/// mantissa and an optional exponent. No separator is required between
/// adjacent numbers or before a command letter; a sign or a second `.`
/// starts a new token, so `"1.5-2.3"` splits into `1.5` and `-2.3`, and
/// `"-5.5.5"` into `-5.5` and `.5`. Whitespace and commas separate
/// tokens and emit nothing.
pub fn tokenize(data: &str) -> Vec<PathToken> {
    let bytes = data.as_bytes();
    let mut tokens = Vec::new();
    let mut number = String::new();
    for (i, &b) in bytes.iter().enumerate() {
        let c = b as char;
        match c {
            '0'..='9' => number.push(c),
            '.' => {
                if number.contains('.') || has_exponent(&number) {
                    flush_number(&mut number, &mut tokens);
                }
                number.push(c);
            }
            '+' | '-' => {
                if !number.ends_with(['e', 'E']) {
                    flush_number(&mut number, &mut tokens);
                }
                number.push(c);
            }
            'e' | 'E' if continues_exponent(&number, bytes, i) => number.push(c),
            'a'..='z' | 'A'..='Z' => {
                flush_number(&mut number, &mut tokens);
                tokens.push(PathToken::Command(c));
            }
            _ => flush_number(&mut number, &mut tokens),
        }
    }
    flush_number(&mut number, &mut tokens);
    tokens
}

fn flush_number(number: &mut String, tokens: &mut Vec<PathToken>) {
    if !number.is_empty() {
        tokens.push(PathToken::Number(std::mem::take(number)));
    }
}

fn has_exponent(number: &str) -> bool {
    number.contains(['e', 'E'])
}

/// An `e` extends the current number only when that number already has
/// mantissa digits, has no exponent yet, and a digit (or signed digit)
/// follows. Anywhere else the letter is a command token.
fn continues_exponent(number: &str, bytes: &[u8], i: usize) -> bool {
    if number.is_empty() || !number.bytes().any(|b| b.is_ascii_digit()) || has_exponent(number) {
        return false;
    }
    match bytes.get(i + 1) {
        Some(b) if b.is_ascii_digit() => true,
        Some(b'+') | Some(b'-') => matches!(bytes.get(i + 2), Some(d) if d.is_ascii_digit()),
        _ => false,
    }
}

/// Interprets path data into an ordered segment list.
///
/// Implements `M L H V C S Q T Z` in either case, with implicit command
/// repetition (a moveto degrades to lineto for repeated coordinates).
/// Arcs (`A`/`a`) are recognized but unsupported: their seven parameters
/// are skipped and nothing is emitted. Any failure aborts the parse.
pub fn parse_path_data(data: &str) -> SvgResult<Vec<Segment>> {
    let tokens = tokenize(data);
    let mut segments = Vec::new();
    let mut current = Point::ORIGIN;
    let mut subpath_start = Point::ORIGIN;
    let mut command: Option<char> = None;
    let mut i = 0;

    while i < tokens.len() {
        let letter = match &tokens[i] {
            PathToken::Command(c) => {
                command = Some(*c);
                i += 1;
                *c
            }
            PathToken::Number(value) => match command {
                Some(c) => c,
                None => {
                    return Err(SvgError::UnexpectedNumber {
                        value: value.clone(),
                    })
                }
            },
        };
        let relative = letter.is_ascii_lowercase();
        let reference = if relative { current } else { Point::ORIGIN };

        match letter.to_ascii_uppercase() {
            'M' => {
                let p = take_point(&tokens, &mut i, letter, reference)?;
                current = p;
                subpath_start = p;
                // Implicit repeats after a moveto degrade to lineto.
                command = Some(if relative { 'l' } else { 'L' });
            }
            'L' => {
                let p = take_point(&tokens, &mut i, letter, reference)?;
                segments.push(Segment::Line { p1: current, p2: p });
                current = p;
            }
            'H' => {
                let x = take_number(&tokens, &mut i, letter)?;
                let p = Point::new(reference.x + x, current.y);
                segments.push(Segment::Line { p1: current, p2: p });
                current = p;
            }
            'V' => {
                let y = take_number(&tokens, &mut i, letter)?;
                let p = Point::new(current.x, reference.y + y);
                segments.push(Segment::Line { p1: current, p2: p });
                current = p;
            }
            'C' => {
                let c1 = take_point(&tokens, &mut i, letter, reference)?;
                let c2 = take_point(&tokens, &mut i, letter, reference)?;
                let end = take_point(&tokens, &mut i, letter, reference)?;
                segments.push(Segment::CubicBezier {
                    p1: current,
                    p2: c1,
                    p3: c2,
                    p4: end,
                });
                current = end;
            }
            'S' => {
                let reflected = match segments.last() {
                    Some(Segment::CubicBezier { p3, .. }) => current * 2.0 - *p3,
                    _ => {
                        return Err(SvgError::InvalidShorthand {
                            command: letter,
                            expected: "cubic",
                        })
                    }
                };
                let c2 = take_point(&tokens, &mut i, letter, reference)?;
                let end = take_point(&tokens, &mut i, letter, reference)?;
                segments.push(Segment::CubicBezier {
                    p1: current,
                    p2: reflected,
                    p3: c2,
                    p4: end,
                });
                current = end;
            }
            'Q' => {
                let ctrl = take_point(&tokens, &mut i, letter, reference)?;
                let end = take_point(&tokens, &mut i, letter, reference)?;
                segments.push(Segment::QuadraticBezier {
                    p1: current,
                    p2: ctrl,
                    p3: end,
                });
                current = end;
            }
            'T' => {
                let reflected = match segments.last() {
                    Some(Segment::QuadraticBezier { p2, .. }) => current * 2.0 - *p2,
                    _ => {
                        return Err(SvgError::InvalidShorthand {
                            command: letter,
                            expected: "quadratic",
                        })
                    }
                };
                let end = take_point(&tokens, &mut i, letter, reference)?;
                segments.push(Segment::QuadraticBezier {
                    p1: current,
                    p2: reflected,
                    p3: end,
                });
                current = end;
            }
            'Z' => {
                segments.push(Segment::Line {
                    p1: current,
                    p2: subpath_start,
                });
                current = subpath_start;
                // Z takes no parameters, so numbers cannot repeat it.
                command = None;
            }
            'A' => {
                // Arcs are not supported: skip their seven parameters.
                i = (i + 7).min(tokens.len());
            }
            _ => return Err(SvgError::UnknownCommand { command: letter }),
        }
    }
    Ok(segments)
}

fn take_number(tokens: &[PathToken], i: &mut usize, command: char) -> SvgResult<f64> {
    match tokens.get(*i) {
        Some(PathToken::Number(value)) => {
            let parsed = value.parse().map_err(|_| SvgError::InvalidNumber {
                value: value.clone(),
            })?;
            *i += 1;
            Ok(parsed)
        }
        _ => Err(SvgError::TruncatedPathData { command }),
    }
}

fn take_point(
    tokens: &[PathToken],
    i: &mut usize,
    command: char,
    reference: Point,
) -> SvgResult<Point> {
    let x = take_number(tokens, i, command)?;
    let y = take_number(tokens, i, command)?;
    Ok(reference + Point::new(x, y))
}
