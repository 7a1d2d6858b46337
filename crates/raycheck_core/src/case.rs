//! Test case model.

use std::fmt;
use std::path::Path;

use crate::vec3::Vec3;

/// Extension of persisted case files (`01.in`, `02.in`, ...).
pub const CASE_FILE_EXTENSION: &str = "in";

/// Stable ordinal of a case, rendered as two zero-padded digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaseId(pub u8);

impl CaseId {
    /// File name the case is persisted under, e.g. `03.in`.
    pub fn file_name(&self) -> String {
        format!("{self}.{CASE_FILE_EXTENSION}")
    }

    /// Recover the id from a persisted file's stem. Stems that are not numbers yield `None`.
    pub fn from_path(path: &Path) -> Option<CaseId> {
        path.file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.parse::<u8>().ok())
            .map(CaseId)
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// One geometric scenario: a ray given by two points and an axis-aligned box.
///
/// `box_min <= box_max` on every axis is expected but not checked; a malformed box is the caller's
/// problem and is passed to the external routine as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub id: CaseId,
    /// Human-readable scenario name. Not persisted; decoded cases carry their file name here.
    pub name: String,
    pub ray_begin: Vec3,
    pub ray_end: Vec3,
    pub box_min: Vec3,
    pub box_max: Vec3,
}

impl TestCase {
    pub fn new(
        id: u8,
        name: impl Into<String>,
        ray_begin: impl Into<Vec3>,
        ray_end: impl Into<Vec3>,
        box_min: impl Into<Vec3>,
        box_max: impl Into<Vec3>,
    ) -> Self {
        Self {
            id: CaseId(id),
            name: name.into(),
            ray_begin: ray_begin.into(),
            ray_end: ray_end.into(),
            box_min: box_min.into(),
            box_max: box_max.into(),
        }
    }

    pub fn file_name(&self) -> String {
        self.id.file_name()
    }

    /// Extent of the box along each axis.
    pub fn box_size(&self) -> Vec3 {
        self.box_max - self.box_min
    }

    /// The eight box corners, min corner first and max corner last.
    pub fn box_corners(&self) -> [Vec3; 8] {
        let (l, u) = (self.box_min, self.box_max);
        [
            Vec3::new(l.x, l.y, l.z),
            Vec3::new(u.x, l.y, l.z),
            Vec3::new(l.x, u.y, l.z),
            Vec3::new(u.x, u.y, l.z),
            Vec3::new(l.x, l.y, u.z),
            Vec3::new(u.x, l.y, u.z),
            Vec3::new(l.x, u.y, u.z),
            Vec3::new(u.x, u.y, u.z),
        ]
    }
}
