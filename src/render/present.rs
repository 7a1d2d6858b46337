//! Blocking scene presentation.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::Command;

use super::RenderError;

/// How a written scene is shown before the harness continues.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Presentation {
    /// Print the scene path and wait for Enter on stdin. EOF continues.
    #[default]
    Prompt,
    /// Run `<command> <scene>` and wait for it to exit.
    Viewer(String),
    /// Write the scene only.
    Off,
}

/// Carries out a [`Presentation`].
#[derive(Debug, Clone)]
pub struct Presenter {
    presentation: Presentation,
}

impl Presenter {
    pub fn new(presentation: Presentation) -> Self {
        Self { presentation }
    }

    /// Show the scene at `path`; returns once the user is done with it.
    pub fn present(&mut self, path: &Path) -> Result<(), RenderError> {
        match &self.presentation {
            Presentation::Off => Ok(()),
            Presentation::Prompt => {
                let stdin = io::stdin();
                prompt(path, &mut stdin.lock(), &mut io::stderr())
            }
            Presentation::Viewer(command) => launch_viewer(command, path),
        }
    }
}

/// Print the scene location and wait for one line of input.
pub(crate) fn prompt(path: &Path, input: &mut dyn BufRead, out: &mut dyn Write) -> Result<(), RenderError> {
    if let Err(e) = write!(out, "scene: {} (press Enter to continue) ", path.display()).and_then(|()| out.flush()) {
        tracing::warn!(error = %e, "cannot show prompt");
    }

    let mut line = String::new();
    input.read_line(&mut line).map_err(RenderError::Prompt)?;
    if line.is_empty() {
        // EOF; nothing to wait for
        if let Err(e) = writeln!(out) {
            tracing::warn!(error = %e, "cannot show prompt");
        }
    }
    Ok(())
}

/// Run the viewer with the scene path appended and wait for it to exit.
fn launch_viewer(command: &str, path: &Path) -> Result<(), RenderError> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(RenderError::EmptyViewer);
    };

    tracing::debug!(viewer = command, scene = %path.display(), "launching viewer");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|source| RenderError::ViewerLaunch {
            command: command.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(RenderError::ViewerStatus {
            command: command.to_string(),
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_off_returns_immediately() {
        let mut presenter = Presenter::new(Presentation::Off);
        presenter.present(Path::new("nowhere.svg")).unwrap();
    }

    #[test]
    fn test_prompt_waits_for_a_line() {
        let mut input = Cursor::new(b"\nsecond\n".to_vec());
        let mut out = Vec::new();
        prompt(Path::new("s/01.svg"), &mut input, &mut out).unwrap();

        let shown = String::from_utf8(out).unwrap();
        assert!(shown.contains("s/01.svg"));
        assert!(shown.contains("press Enter"));
        // exactly one line consumed
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_prompt_continues_on_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        prompt(Path::new("01.svg"), &mut input, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with('\n'));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_prompt_still_waits_when_output_is_closed() {
        let mut input = Cursor::new(b"\nnext\n".to_vec());
        prompt(Path::new("01.svg"), &mut input, &mut ClosedPipe).unwrap();
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_empty_viewer_command() {
        let err = launch_viewer("   ", Path::new("01.svg")).unwrap_err();
        assert!(matches!(err, RenderError::EmptyViewer));
    }

    #[test]
    fn test_missing_viewer_binary() {
        let err = launch_viewer("raycheck-no-such-viewer-binary", Path::new("01.svg")).unwrap_err();
        assert!(matches!(err, RenderError::ViewerLaunch { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_viewer_exit_status() {
        launch_viewer("true", Path::new("01.svg")).unwrap();
        let err = launch_viewer("false", Path::new("01.svg")).unwrap_err();
        assert!(matches!(err, RenderError::ViewerStatus { .. }));
    }

    #[test]
    fn test_default_is_prompt() {
        assert_eq!(Presentation::default(), Presentation::Prompt);
    }
}
