//! Execution harness
//!
//! Drives the routine under test over every persisted case, one at a time:
//!
//! 1. spawn the routine with the case file as stdin (`CaseExecutor`)
//! 2. classify line 1 of its stdout (`raycheck_core::parse_output`)
//! 3. show the scene and wait for it to be dismissed (`SceneVisualizer`)
//! 4. emit a verdict row (`Reporter`)
//!
//! ## Error handling
//!
//! Configuration problems are returned from [`discover_cases`] and
//! `HarnessConfig::resolve_executable` before anything runs. Everything that goes wrong inside the
//! loop becomes a failed verdict for that case and the loop continues.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod errors;
mod executor;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use raycheck_core::codec::read_case;
use raycheck_core::{CASE_FILE_EXTENSION, IntersectionResult, Scene, VerdictRecord, parse_output};

pub use errors::{CaseError, ConfigError};
pub use executor::{CaseExecutor, ExecutionOutcome, ProcessExecutor};

use crate::render::SceneVisualizer;
use crate::report::{Reporter, RunSummary};

/// List the `*.in` files directly inside `dir`, sorted by file name.
///
/// ## Errors
///
/// - `TestDirMissing` when `dir` is not a directory
/// - `NoTestCases` when no case survives the optional `filter`
pub fn discover_cases(dir: &Path, filter: Option<&str>) -> Result<Vec<PathBuf>, ConfigError> {
    if !dir.is_dir() {
        return Err(ConfigError::TestDirMissing(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|source| ConfigError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut cases: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == CASE_FILE_EXTENSION))
        .filter(|path| match filter {
            Some(keyword) => file_name(path).contains(keyword),
            None => true,
        })
        .collect();

    if cases.is_empty() {
        return Err(ConfigError::NoTestCases(dir.to_path_buf()));
    }

    cases.sort();
    Ok(cases)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Sequential runner over a fixed list of case files.
pub struct Harness {
    cases: Vec<PathBuf>,
}

impl Harness {
    pub fn new(cases: Vec<PathBuf>) -> Self {
        Self { cases }
    }

    /// Run every case in order and report each verdict as soon as it is known.
    pub fn run(
        &self,
        executor: &mut dyn CaseExecutor,
        visualizer: &mut dyn SceneVisualizer,
        reporter: &mut dyn Reporter,
    ) -> RunSummary {
        let start = Instant::now();
        let mut summary = RunSummary::default();

        reporter.on_run_start(self.cases.len());
        for path in &self.cases {
            let record = run_case(path, executor, visualizer);
            summary.record(&record);
            reporter.on_case_complete(&record);
        }
        summary.duration = start.elapsed();
        reporter.on_run_complete(&summary);

        summary
    }
}

/// Execute, classify and show one case.
fn run_case(path: &Path, executor: &mut dyn CaseExecutor, visualizer: &mut dyn SceneVisualizer) -> VerdictRecord {
    let name = file_name(path);

    let outcome = match executor.execute(path) {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_test_file_error() {
                tracing::warn!(case = %name, error = %e, "test file unavailable");
            } else {
                tracing::error!(case = %name, error = %e, "case did not run");
            }
            return VerdictRecord::fail(name, 0, e.to_string());
        }
    };

    let case = match read_case(path) {
        Ok(case) => case,
        Err(source) => {
            let e = CaseError::TestCase {
                path: path.to_path_buf(),
                source,
            };
            return VerdictRecord::fail(name, outcome.elapsed_ms, e.to_string());
        }
    };

    let result = parse_output(&outcome.stdout);
    let shown = visualizer.visualize(&Scene::build(&case, &result));

    match (result, shown) {
        (IntersectionResult::Malformed { raw, error }, shown) => {
            if let Err(e) = shown {
                tracing::warn!(case = %name, error = %e, "scene not shown");
            }
            let e = CaseError::MalformedOutput { raw, error };
            VerdictRecord::fail(name, outcome.elapsed_ms, e.to_string())
        }
        (_, Err(e)) => VerdictRecord::fail(name, outcome.elapsed_ms, CaseError::from(e).to_string()),
        (_, Ok(())) => VerdictRecord::pass(name, outcome.elapsed_ms),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("raycheck_discover_{}_{}", name, process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_discover_sorted_and_filtered_by_extension() {
        let dir = scratch_dir("sorted");
        for name in ["10.in", "02.in", "01.in", "notes.txt", "03.out"] {
            fs::write(dir.join(name), "0 0 0\n").unwrap();
        }
        fs::create_dir(dir.join("sub.in")).unwrap();

        let cases = discover_cases(&dir, None).unwrap();
        let names: Vec<String> = cases.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, ["01.in", "02.in", "10.in"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discover_keyword_filter() {
        let dir = scratch_dir("filter");
        for name in ["01.in", "02.in", "10.in"] {
            fs::write(dir.join(name), "").unwrap();
        }
        let cases = discover_cases(&dir, Some("0")).unwrap();
        assert_eq!(cases.len(), 3);
        let cases = discover_cases(&dir, Some("1")).unwrap();
        let names: Vec<String> = cases.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, ["01.in", "10.in"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = env::temp_dir().join(format!("raycheck_no_such_dir_{}", process::id()));
        assert!(matches!(discover_cases(&dir, None), Err(ConfigError::TestDirMissing(_))));
    }

    #[test]
    fn test_discover_empty_dir() {
        let dir = scratch_dir("empty");
        assert!(matches!(discover_cases(&dir, None), Err(ConfigError::NoTestCases(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discover_filter_matching_nothing() {
        let dir = scratch_dir("nomatch");
        fs::write(dir.join("01.in"), "").unwrap();
        assert!(matches!(
            discover_cases(&dir, Some("zz")),
            Err(ConfigError::NoTestCases(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }
}
