//! XYZR input parsing.
//!
//! The calculator core only consumes coordinate/radius arrays; XYZR is the
//! minimal on-disk form of that boundary: one atom per line, the last four
//! whitespace-separated fields parsing as `x y z r`. A negative radius is
//! passed through unchanged and keeps its "ignore" meaning.

use std::io::{self, BufRead};

use log::debug;

use crate::types::Ball;

/// Parse XYZR content from a reader.
///
/// Blank lines and lines starting with `#` are skipped. Lines with leading
/// annotation fields (e.g. atom names) are tolerated as long as the final
/// four fields are numeric.
///
/// # Errors
///
/// Returns an [`io::Error`] with the offending line number if a non-comment
/// line does not end in four numeric fields.
pub fn parse_xyzr<R: BufRead>(reader: R) -> io::Result<Vec<Ball>> {
    let mut balls = Vec::new();

    for (line_number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let ball = parse_fields(&fields).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: expected `x y z r` fields", line_number + 1),
            )
        })?;
        balls.push(ball);
    }

    debug!("parsed {} atoms from XYZR input", balls.len());
    Ok(balls)
}

fn parse_fields(fields: &[&str]) -> Option<Ball> {
    if fields.len() < 4 {
        return None;
    }
    let n = fields.len();
    let x: f64 = fields[n - 4].parse().ok()?;
    let y: f64 = fields[n - 3].parse().ok()?;
    let z: f64 = fields[n - 2].parse().ok()?;
    let r: f64 = fields[n - 1].parse().ok()?;
    Some(Ball::new(x, y, z, r))
}
