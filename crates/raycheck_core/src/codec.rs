//! Four-line text format shared by persisted case files and the external routine's stdin.
//!
//! ```text
//! <ray_begin.x> <ray_begin.y> <ray_begin.z>
//! <ray_end.x>   <ray_end.y>   <ray_end.z>
//! <box_min.x>   <box_min.y>   <box_min.z>
//! <box_max.x>   <box_max.y>   <box_max.z>
//! ```
//!
//! ## Notes
//!
//! - Encoding is deterministic, so regenerating the catalogue yields byte-identical files.
//! - Decoding skips blank lines and ignores anything after the fourth non-empty line.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::case::{CaseId, TestCase};
use crate::vec3::Vec3;

/// Labels of the four lines, in wire order.
pub const LINE_LABELS: [&str; 4] = ["ray begin", "ray end", "box min", "box max"];

/// Errors produced while reading a persisted case.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed test case, line {line} ({label}): {reason}")]
    MalformedTestCase {
        /// 1-based line in the file, blank lines included.
        line: usize,
        label: &'static str,
        reason: String,
    },

    #[error("malformed test case: expected 4 non-empty lines, found {found}")]
    MissingLines { found: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a case to its four-line wire form.
pub fn encode(case: &TestCase) -> String {
    format!(
        "{}\n{}\n{}\n{}\n",
        case.ray_begin, case.ray_end, case.box_min, case.box_max
    )
}

/// Deserialize the first four non-empty lines of `text`.
///
/// ## Parameters
/// - `id`: identifier to attach to the decoded case (the wire format does not carry one).
/// - `text`: file contents.
///
/// ## Errors
/// - `MalformedTestCase` when a line does not hold exactly three finite numbers.
/// - `MissingLines` when fewer than four non-empty lines are present.
pub fn decode(id: CaseId, text: &str) -> Result<TestCase, CodecError> {
    let mut vectors = [Vec3::ZERO; 4];
    let mut found = 0;

    let non_empty = text.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());
    for (index, line) in non_empty.take(4) {
        vectors[found] = parse_vec3(line).map_err(|reason| CodecError::MalformedTestCase {
            line: index + 1,
            label: LINE_LABELS[found],
            reason,
        })?;
        found += 1;
    }

    if found < 4 {
        return Err(CodecError::MissingLines { found });
    }

    let [ray_begin, ray_end, box_min, box_max] = vectors;
    Ok(TestCase {
        id,
        name: id.file_name(),
        ray_begin,
        ray_end,
        box_min,
        box_max,
    })
}

/// Read and decode a persisted case file.
///
/// The id comes from the numeric file stem; files with another stem get id `0`.
pub fn read_case(path: &Path) -> Result<TestCase, CodecError> {
    let text = fs::read_to_string(path)?;
    let id = CaseId::from_path(path).unwrap_or(CaseId(0));
    let mut case = decode(id, &text)?;
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        case.name = name.to_string();
    }
    Ok(case)
}

/// Parse exactly three whitespace-separated finite numbers.
///
/// Shared with output classification, which applies the same rules to the reported point.
pub(crate) fn parse_vec3(line: &str) -> Result<Vec3, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 {
        return Err(format!("expected 3 numbers, found {} token(s) in '{}'", tokens.len(), line.trim()));
    }

    let mut components = [0.0; 3];
    for (slot, token) in components.iter_mut().zip(&tokens) {
        let value: f64 = token
            .parse()
            .map_err(|_| format!("'{token}' is not a number"))?;
        if !value.is_finite() {
            return Err(format!("'{token}' is not a finite number"));
        }
        *slot = value;
    }

    Ok(Vec3::from(components))
}
