//! Harness error taxonomy
//!
//! Two tiers:
//! - `ConfigError` aborts the whole run before any case is executed.
//! - `CaseError` fails a single case; the loop moves on to the next one.

use std::path::PathBuf;

use miette::Diagnostic;
use raycheck_core::CodecError;
use thiserror::Error;

use crate::render::RenderError;

/// Fatal setup problems. No verdict rows are printed when one of these occurs.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("executable {} not found", .0.display())]
    #[diagnostic(
        code(raycheck::config::executable_not_found),
        help("build the intersection routine into ./bin, or point --exe at it")
    )]
    ExecutableNotFound(PathBuf),

    #[error("test directory {} not found", .0.display())]
    #[diagnostic(
        code(raycheck::config::test_dir_missing),
        help("run `raycheck generate` to create the catalogue")
    )]
    TestDirMissing(PathBuf),

    #[error("no .in files found in {}", .0.display())]
    #[diagnostic(code(raycheck::config::no_cases))]
    NoTestCases(PathBuf),

    #[error("cannot list test directory {}: {source}", .path.display())]
    #[diagnostic(code(raycheck::config::io))]
    ReadDir { path: PathBuf, source: std::io::Error },
}

/// Problems confined to one case.
#[derive(Debug, Error)]
pub enum CaseError {
    /// The persisted case could not be opened as stdin.
    #[error("cannot open test file {}: {source}", .path.display())]
    TestFile { path: PathBuf, source: std::io::Error },

    /// The persisted case could not be read back for the scene.
    #[error("cannot read test case {}: {source}", .path.display())]
    TestCase { path: PathBuf, source: CodecError },

    #[error("error running {} with {}: {source}", .executable.display(), .input.display())]
    ProcessInvocation {
        executable: PathBuf,
        input: PathBuf,
        source: std::io::Error,
    },

    #[error("intersection parse error: {error} (got '{raw}')")]
    MalformedOutput { raw: String, error: String },

    #[error("cannot show scene: {0}")]
    Render(#[from] RenderError),
}

impl CaseError {
    /// Test-file problems (open, read or decode).
    pub fn is_test_file_error(&self) -> bool {
        matches!(self, CaseError::TestFile { .. } | CaseError::TestCase { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::ExecutableNotFound(PathBuf::from("bin/rt"));
        assert_eq!(err.to_string(), "executable bin/rt not found");

        let err = ConfigError::TestDirMissing(PathBuf::from("tests"));
        assert_eq!(err.to_string(), "test directory tests not found");
    }

    #[test]
    fn test_config_error_has_help() {
        let err = ConfigError::ExecutableNotFound(PathBuf::from("bin/rt"));
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("--exe"));
    }

    #[test]
    fn test_malformed_output_message_surfaces_parse_error() {
        let err = CaseError::MalformedOutput {
            raw: "garbage text".into(),
            error: "expected 3 numbers".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("expected 3 numbers"));
        assert!(msg.contains("garbage text"));
    }

    #[test]
    fn test_test_file_errors_are_classified() {
        let open = CaseError::TestFile {
            path: PathBuf::from("01.in"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(open.is_test_file_error());

        let malformed = CaseError::MalformedOutput {
            raw: String::new(),
            error: "no output".into(),
        };
        assert!(!malformed.is_test_file_error());
    }
}
