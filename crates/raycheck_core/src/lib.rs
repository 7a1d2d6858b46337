//! Provide the shared, mostly pure domain model for the raycheck harness.
//!
//! This crate holds everything the harness needs that does not involve spawning processes or
//! talking to a terminal:
//! - the geometric model (`Vec3`, `TestCase`) and the four-line wire codec,
//! - the fixed catalogue of hand-picked scenarios,
//! - classification of the external routine's stdout,
//! - scene geometry for visual inspection, and verdict records.
//!
//! ## Notes
//!
//! - The only I/O here is reading and writing persisted case files (`codec::read_case`,
//!   `catalogue::write_catalogue`).
//! - Nothing in this crate decides whether a reported intersection is *correct*. A parseable answer is
//!   all the verdict logic looks at.

pub mod catalogue;
pub mod codec;
pub mod result;
pub mod scene;
pub mod vec3;
pub mod verdict;

mod case;

pub use case::{CASE_FILE_EXTENSION, CaseId, TestCase};
pub use codec::CodecError;
pub use result::{IntersectionResult, parse_output};
pub use scene::Scene;
pub use vec3::Vec3;
pub use verdict::{VerdictRecord, format_elapsed};
