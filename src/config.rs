//! Harness configuration
//!
//! Conventional layout, relative to the working directory:
//! - `bin/rt` (`bin/rt.exe` on Windows): the routine under test
//! - `tests/NN.in`: persisted cases
//! - `target/raycheck/scenes/NN.svg`: rendered scenes

use std::env;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::harness::ConfigError;
use crate::render::Presentation;

/// Default directory holding the routine under test.
pub const DEFAULT_BIN_DIR: &str = "bin";
/// Default executable name, before the platform suffix.
pub const DEFAULT_EXE_NAME: &str = "rt";
/// Default directory of persisted cases.
pub const DEFAULT_TEST_DIR: &str = "tests";
/// Default directory rendered scenes are written to.
pub const DEFAULT_SCENE_DIR: &str = "target/raycheck/scenes";
/// Flag that puts the routine into test mode.
pub const TEST_MODE_FLAG: &str = "-t";

/// Platform-specific executable file name: `rt.exe` on Windows, `rt` elsewhere.
pub fn platform_exe_name(stem: &str, os: &str) -> String {
    if os == "windows" {
        format!("{stem}.exe")
    } else {
        stem.to_string()
    }
}

/// Harness configuration
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Explicit path to the routine. When `None`, the conventional `bin/rt` path is used.
    pub executable: Option<PathBuf>,
    /// Directory scanned for `*.in` cases
    pub test_dir: PathBuf,
    /// Directory scenes are written to
    pub scene_dir: PathBuf,
    /// Flag passed to the routine
    pub test_flag: String,
    /// Keep only cases whose file name contains this keyword
    pub filter: Option<String>,
    /// How each scene is shown before moving on
    pub presentation: Presentation,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            executable: None,
            test_dir: PathBuf::from(DEFAULT_TEST_DIR),
            scene_dir: PathBuf::from(DEFAULT_SCENE_DIR),
            test_flag: TEST_MODE_FLAG.to_string(),
            filter: None,
            presentation: Presentation::Prompt,
        }
    }
}

impl HarnessConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.executable = Some(path.into());
        self
    }

    pub fn with_test_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.test_dir = dir.into();
        self
    }

    pub fn with_scene_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scene_dir = dir.into();
        self
    }

    pub fn with_filter(mut self, keyword: Option<String>) -> Self {
        self.filter = keyword;
        self
    }

    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    /// Path the routine is expected at, before checking that it exists.
    pub fn executable_path(&self) -> PathBuf {
        match &self.executable {
            Some(path) => path.clone(),
            None => Path::new(DEFAULT_BIN_DIR).join(platform_exe_name(DEFAULT_EXE_NAME, env::consts::OS)),
        }
    }

    /// Locate the routine.
    ///
    /// ## Errors
    ///
    /// `ConfigError::ExecutableNotFound` when nothing exists at [`Self::executable_path`].
    pub fn resolve_executable(&self) -> Result<PathBuf, ConfigError> {
        let path = self.executable_path();
        if !path.is_file() {
            return Err(ConfigError::ExecutableNotFound(path));
        }
        // Absolute so the spawn does not depend on PATH lookup rules.
        Ok(path.canonicalize().unwrap_or(path))
    }
}

/// Console styling, decided once before the first report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    pub color: bool,
}

impl ReportStyle {
    pub const PLAIN: ReportStyle = ReportStyle { color: false };
    pub const COLORED: ReportStyle = ReportStyle { color: true };

    /// Color unless disabled by flag or `NO_COLOR`, or stdout is not a terminal.
    pub fn detect(no_color_flag: bool) -> Self {
        let color = !no_color_flag && env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal();
        Self { color }
    }

    pub fn pass(&self) -> &'static str {
        if self.color { "\x1b[32m" } else { "" }
    }

    pub fn fail(&self) -> &'static str {
        if self.color { "\x1b[31m" } else { "" }
    }

    pub fn reset(&self) -> &'static str {
        if self.color { "\x1b[0m" } else { "" }
    }
}
