//! Scene visualization
//!
//! A scene is rendered to an SVG file and then presented. Presentation blocks until the user is done
//! with the scene, so cases are inspected strictly one after another.
//!
//! ## Modules
//!
//! - `svg` - isometric SVG projection of a `Scene`
//! - `present` - blocking presentation modes (prompt, external viewer, off)

pub mod present;
pub mod svg;

use std::fs;
use std::path::PathBuf;

use raycheck_core::Scene;
use thiserror::Error;

pub use present::{Presentation, Presenter};

/// Errors raised while writing or presenting a scene.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot write scene {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("viewer command is empty")]
    EmptyViewer,

    #[error("cannot launch viewer '{command}': {source}")]
    ViewerLaunch { command: String, source: std::io::Error },

    #[error("viewer '{command}' exited with {status}")]
    ViewerStatus { command: String, status: std::process::ExitStatus },

    #[error("cannot read from stdin: {0}")]
    Prompt(#[source] std::io::Error),
}

/// Shows one scene and returns once the user has moved on.
pub trait SceneVisualizer {
    fn visualize(&mut self, scene: &Scene) -> Result<(), RenderError>;
}

/// Writes `<scene_dir>/<title stem>.svg`, then hands the file to a [`Presenter`].
pub struct SvgVisualizer {
    scene_dir: PathBuf,
    presenter: Presenter,
}

impl SvgVisualizer {
    pub fn new(scene_dir: impl Into<PathBuf>, presenter: Presenter) -> Self {
        Self {
            scene_dir: scene_dir.into(),
            presenter,
        }
    }

    /// Where the scene titled `title` is written.
    pub fn scene_path(&self, title: &str) -> PathBuf {
        let stem = title.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(title);
        let stem = if stem.is_empty() { "scene" } else { stem };
        self.scene_dir.join(format!("{stem}.svg"))
    }
}

impl SceneVisualizer for SvgVisualizer {
    #[tracing::instrument(skip_all, fields(scene = %scene.title))]
    fn visualize(&mut self, scene: &Scene) -> Result<(), RenderError> {
        let path = self.scene_path(&scene.title);
        fs::create_dir_all(&self.scene_dir).map_err(|source| RenderError::Write {
            path: self.scene_dir.clone(),
            source,
        })?;
        fs::write(&path, svg::render_svg(scene, svg::DEFAULT_WIDTH, svg::DEFAULT_HEIGHT))
            .map_err(|source| RenderError::Write {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), "scene written");

        self.presenter.present(&path)
    }
}
