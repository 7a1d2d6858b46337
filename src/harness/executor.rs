//! Running the routine under test for one case.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Instant;

use super::CaseError;

/// Captured result of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was killed by a signal.
    pub exit_code: Option<i32>,
    pub elapsed_ms: u64,
}

/// Execute the routine against one persisted case.
///
/// The harness loop only talks to this trait, so it can be driven without spawning processes.
pub trait CaseExecutor {
    /// Run the routine with `case_file` as its input.
    ///
    /// A non-zero exit status is not an error; it is reported in the outcome.
    fn execute(&mut self, case_file: &Path) -> Result<ExecutionOutcome, CaseError>;
}

/// Spawns the routine with the case file as stdin and the test-mode flag as its only argument.
pub struct ProcessExecutor {
    executable: PathBuf,
    flag: String,
}

impl ProcessExecutor {
    pub fn new(executable: impl Into<PathBuf>, flag: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            flag: flag.into(),
        }
    }
}

impl CaseExecutor for ProcessExecutor {
    #[tracing::instrument(skip_all, fields(case = %case_file.display()))]
    fn execute(&mut self, case_file: &Path) -> Result<ExecutionOutcome, CaseError> {
        let input = File::open(case_file).map_err(|source| CaseError::TestFile {
            path: case_file.to_path_buf(),
            source,
        })?;

        tracing::debug!(executable = %self.executable.display(), flag = %self.flag, "spawning");
        let start = Instant::now();
        let output = Command::new(&self.executable)
            .arg(&self.flag)
            .stdin(Stdio::from(input))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| CaseError::ProcessInvocation {
                executable: self.executable.clone(),
                input: case_file.to_path_buf(),
                source,
            })?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        let outcome = ExecutionOutcome {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
            elapsed_ms,
        };

        tracing::debug!(elapsed_ms, exit_code = ?outcome.exit_code, "process finished");
        if !output.status.success() {
            tracing::warn!(
                case = %case_file.display(),
                exit_code = ?outcome.exit_code,
                "routine exited unsuccessfully"
            );
        }
        if !outcome.stderr.trim().is_empty() {
            tracing::warn!(case = %case_file.display(), stderr = %outcome.stderr.trim(), "routine wrote to stderr");
        }

        Ok(outcome)
    }
}
