//! Fixed catalogue of hand-picked ray/box scenarios.
//!
//! Order matters: ids are assigned 01..10 in the order below and the report lists cases by file name.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::case::TestCase;
use crate::codec;

/// Errors produced while persisting the catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("cannot create test directory '{}': {source}", .path.display())]
    CreateDir { path: PathBuf, source: std::io::Error },

    #[error("cannot write test case '{}': {source}", .path.display())]
    WriteCase { path: PathBuf, source: std::io::Error },
}

/// Build the catalogue.
///
/// Every call returns the same cases with the same ids.
pub fn catalogue() -> Vec<TestCase> {
    vec![
        TestCase::new(
            1,
            "ray hits the center of the box",
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.5, 0.5, 0.5],
            [2.0, 2.0, 2.0],
        ),
        TestCase::new(
            2,
            "ray starts inside the box and exits at the upper corner",
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0],
            [0.0, 0.0, 0.0],
            [3.0, 3.0, 3.0],
        ),
        TestCase::new(
            3,
            "ray misses the box completely",
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 2.0, 2.0],
            [3.0, 3.0, 3.0],
        ),
        TestCase::new(
            4,
            "ray passes through a face of the box",
            [0.0, 1.0, 1.0],
            [2.0, 1.0, 1.0],
            [1.0, 0.0, 0.0],
            [3.0, 2.0, 2.0],
        ),
        TestCase::new(
            5,
            "ray passes through a vertex of the box",
            [0.0, 0.0, 0.0],
            [3.0, 3.0, 3.0],
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0],
        ),
        TestCase::new(
            6,
            "ray parallel to the X axis hits the box",
            [0.0, 1.0, 1.0],
            [5.0, 1.0, 1.0],
            [1.0, 0.0, 0.0],
            [3.0, 2.0, 2.0],
        ),
        TestCase::new(
            7,
            "ray parallel to the X axis misses the box",
            [0.0, 3.0, 3.0],
            [5.0, 3.0, 3.0],
            [1.0, 0.0, 0.0],
            [3.0, 2.0, 2.0],
        ),
        TestCase::new(
            8,
            "ray starts on a face and goes inside",
            [1.0, 1.0, 0.0],
            [1.0, 1.0, 2.0],
            [0.0, 0.0, 0.0],
            [2.0, 2.0, 2.0],
        ),
        TestCase::new(
            9,
            "ray starts on an edge and goes inside",
            [0.0, 0.0, 0.0],
            [2.0, 2.0, 0.0],
            [0.0, 0.0, 0.0],
            [2.0, 2.0, 2.0],
        ),
        TestCase::new(
            10,
            "ray starts on a vertex and goes inside",
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0],
            [2.0, 2.0, 2.0],
        ),
    ]
}

/// Persist every catalogue case as `<dir>/NN.in`, creating `dir` if needed.
///
/// Existing files are overwritten, so running this twice leaves byte-identical files behind.
///
/// ## Returns
/// - the written paths, in catalogue order.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn write_catalogue(dir: &Path) -> Result<Vec<PathBuf>, CatalogueError> {
    fs::create_dir_all(dir).map_err(|source| CatalogueError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    for case in catalogue() {
        let path = dir.join(case.file_name());
        fs::write(&path, codec::encode(&case)).map_err(|source| CatalogueError::WriteCase {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(case = %case.id, path = %path.display(), "wrote test case");
        written.push(path);
    }

    Ok(written)
}
