//! Site file discovery and loading.
//!
//! A site file is found by walking from a start directory toward the
//! filesystem root and taking the first directory that holds
//! `{dir}/{file_name}`. The [`Boundary`] decides where the walk gives up.

use std::path::{Path, PathBuf};

use crate::error::SitefigError;
use crate::types::Boundary;

/// File name looked for when none is configured.
pub const DEFAULT_FILE_NAME: &str = "site.toml";

/// Directories from `start` up to the boundary, in **deepest-first** order.
///
/// - [`Root`](Boundary::Root) continues to the filesystem root.
/// - [`Marker(name)`](Boundary::Marker) stops (inclusive) at the first
///   directory containing a file or subdirectory named `name`. Falls back to
///   root if the marker is never found.
pub fn ancestors_from(start: &Path, boundary: &Boundary) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    for dir in start.ancestors() {
        dirs.push(dir.to_path_buf());
        if let Boundary::Marker(name) = boundary
            && dir.join(name).exists()
        {
            break;
        }
    }
    dirs
}

/// The nearest `file_name` at or above `start`, if any.
pub fn find_site_file(start: &Path, file_name: &str, boundary: &Boundary) -> Option<PathBuf> {
    ancestors_from(start, boundary)
        .into_iter()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}

/// Read a site file into a string.
pub fn read_site_file(path: &Path) -> Result<String, SitefigError> {
    std::fs::read_to_string(path).map_err(|e| SitefigError::IoError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Find and read the nearest site file.
///
/// Fails with [`SitefigError::SiteFileNotFound`] when the walk reaches the
/// boundary without a hit.
pub fn load_site_file(
    start: &Path,
    file_name: &str,
    boundary: &Boundary,
) -> Result<(PathBuf, String), SitefigError> {
    let path = find_site_file(start, file_name, boundary).ok_or_else(|| {
        SitefigError::SiteFileNotFound {
            file_name: file_name.to_string(),
            start: start.to_path_buf(),
        }
    })?;
    tracing::debug!(path = %path.display(), "found site file");
    let content = read_site_file(&path)?;
    Ok((path, content))
}
