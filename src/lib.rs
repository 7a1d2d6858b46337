#![forbid(unsafe_code)]
//! raycheck: verification and visualization harness for ray/AABB intersection routines
//!
//! The routine under test is an external executable. raycheck persists a catalogue of cases,
//! feeds each one to the routine on stdin, classifies the answer, renders the scene and prints a
//! verdict table. The geometry, codec and verdict types live in `raycheck_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `harness` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod harness;
pub mod render;
pub mod report;

pub use config::{HarnessConfig, ReportStyle};
pub use harness::{CaseError, CaseExecutor, ConfigError, Harness, discover_cases};
pub use render::{Presentation, RenderError, SceneVisualizer, SvgVisualizer};
pub use report::{ConsoleReporter, Reporter, RunSummary};
