//! Classification of the external routine's stdout.
//!
//! Only the first line is part of the protocol: either the token `null` (any case) or three numbers
//! giving the intersection point. Later lines are free for the routine's own diagnostics.

use crate::codec::parse_vec3;
use crate::vec3::Vec3;

/// Token reported when the ray does not hit the box (compared case-insensitively).
pub const NO_HIT_TOKEN: &str = "null";

/// What the external routine reported for one case.
#[derive(Debug, Clone, PartialEq)]
pub enum IntersectionResult {
    NoHit,
    Hit(Vec3),
    /// First line was neither `null` nor a point.
    Malformed { raw: String, error: String },
}

impl IntersectionResult {
    /// `true` for `NoHit` and `Hit`. This is the whole pass criterion.
    pub fn is_parseable(&self) -> bool {
        !matches!(self, IntersectionResult::Malformed { .. })
    }

    pub fn point(&self) -> Option<Vec3> {
        match self {
            IntersectionResult::Hit(p) => Some(*p),
            _ => None,
        }
    }
}

/// Classify captured stdout.
pub fn parse_output(stdout: &str) -> IntersectionResult {
    let first_line = stdout.trim().lines().next().unwrap_or("").trim();

    if first_line.eq_ignore_ascii_case(NO_HIT_TOKEN) {
        return IntersectionResult::NoHit;
    }

    if first_line.is_empty() {
        return IntersectionResult::Malformed {
            raw: String::new(),
            error: "no output".to_string(),
        };
    }

    match parse_vec3(first_line) {
        Ok(point) => IntersectionResult::Hit(point),
        Err(error) => IntersectionResult::Malformed {
            raw: first_line.to_string(),
            error,
        },
    }
}
