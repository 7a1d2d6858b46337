//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::path::{Path, PathBuf};

use miette::{GraphicalReportHandler, GraphicalTheme};
use raycheck_core::catalogue::{catalogue, write_catalogue};

use crate::config::{HarnessConfig, ReportStyle};
use crate::harness::{ConfigError, Harness, ProcessExecutor, discover_cases};
use crate::render::{Presentation, Presenter, SvgVisualizer};
use crate::report::{ConsoleReporter, Reporter};

use super::{CliError, CliResult, ExitCode};

// ============================================================================
// generate / list
// ============================================================================

/// Write the ten catalogue cases into `dir`, creating it if needed.
pub fn generate(dir: &Path) -> CliResult<ExitCode> {
    let written = write_catalogue(dir).map_err(|e| CliError::failure(format!("Error: {e}")))?;
    println!("{} tests successfully created in '{}' directory", written.len(), dir.display());
    Ok(ExitCode::SUCCESS)
}

/// Print the id and name of every catalogue case.
pub fn list() -> CliResult<ExitCode> {
    for case in catalogue() {
        println!("{}  {}", case.id, case.name);
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// check
// ============================================================================

/// Options collected from `raycheck check`.
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    pub tests: PathBuf,
    pub exe: Option<PathBuf>,
    pub scenes: PathBuf,
    pub no_show: bool,
    pub viewer: Option<String>,
    pub no_color: bool,
    pub filter: Option<String>,
}

impl CheckOptions {
    pub fn presentation(&self) -> Presentation {
        if self.no_show {
            Presentation::Off
        } else if let Some(command) = &self.viewer {
            Presentation::Viewer(command.clone())
        } else {
            Presentation::Prompt
        }
    }

    pub fn to_config(&self) -> HarnessConfig {
        let mut config = HarnessConfig::new()
            .with_test_dir(&self.tests)
            .with_scene_dir(&self.scenes)
            .with_filter(self.filter.clone())
            .with_presentation(self.presentation());
        if let Some(exe) = &self.exe {
            config = config.with_executable(exe);
        }
        config
    }
}

/// Run every case with console output on stdout.
pub fn check(options: &CheckOptions) -> CliResult<ExitCode> {
    let style = ReportStyle::detect(options.no_color);
    let mut reporter = ConsoleReporter::stdout(style);
    check_with(&options.to_config(), &mut reporter).map_err(|e| config_failure(&e, style))
}

/// Run every case described by `config`, reporting through `reporter`.
///
/// ## Returns
///
/// `ExitCode::SUCCESS` when every case passed, `ExitCode::FAILURE` otherwise.
///
/// ## Errors
///
/// Configuration problems (missing executable, missing or empty test directory) are returned
/// before the reporter sees anything.
pub fn check_with(config: &HarnessConfig, reporter: &mut dyn Reporter) -> Result<ExitCode, ConfigError> {
    let executable = config.resolve_executable()?;
    let cases = discover_cases(&config.test_dir, config.filter.as_deref())?;
    tracing::info!(executable = %executable.display(), cases = cases.len(), "starting run");

    let mut executor = ProcessExecutor::new(executable, config.test_flag.clone());
    let mut visualizer = SvgVisualizer::new(&config.scene_dir, Presenter::new(config.presentation.clone()));

    let summary = Harness::new(cases).run(&mut executor, &mut visualizer, reporter);
    if summary.all_passed() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Render a configuration error with its diagnostic code and help text.
fn config_failure(error: &ConfigError, style: ReportStyle) -> CliError {
    let theme = if style.color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let mut rendered = String::new();
    if GraphicalReportHandler::new_themed(theme)
        .render_report(&mut rendered, error)
        .is_err()
    {
        rendered = format!("Error: {error}");
    }
    CliError::failure(rendered.trim_end())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_presentation_from_flags() {
        let mut options = CheckOptions::default();
        assert_eq!(options.presentation(), Presentation::Prompt);

        options.viewer = Some("eog".into());
        assert_eq!(options.presentation(), Presentation::Viewer("eog".into()));

        options.no_show = true;
        assert_eq!(options.presentation(), Presentation::Off);
    }

    #[test]
    fn test_options_to_config() {
        let options = CheckOptions {
            tests: "cases".into(),
            exe: Some("build/rt".into()),
            scenes: "out".into(),
            no_show: true,
            viewer: None,
            no_color: true,
            filter: Some("07".into()),
        };
        let config = options.to_config();
        assert_eq!(config.test_dir, PathBuf::from("cases"));
        assert_eq!(config.scene_dir, PathBuf::from("out"));
        assert_eq!(config.executable_path(), PathBuf::from("build/rt"));
        assert_eq!(config.filter.as_deref(), Some("07"));
        assert_eq!(config.presentation, Presentation::Off);
    }

    #[test]
    fn test_config_failure_includes_help() {
        let err = ConfigError::ExecutableNotFound(PathBuf::from("bin/rt"));
        let cli_err = config_failure(&err, ReportStyle::PLAIN);
        assert_eq!(cli_err.exit_code, ExitCode::FAILURE);
        assert!(cli_err.message.contains("executable bin/rt not found"));
        assert!(cli_err.message.contains("--exe"));
        assert!(!cli_err.message.contains('\x1b'));
    }
}
