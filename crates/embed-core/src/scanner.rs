//! Directory scanner for shader source files.
//!
//! Lists the entries of a single input directory, skipping anything that is
//! itself a directory. Sub-directories are never descended into, and no
//! extension filter is applied: every plain file counts as a shader.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::EmbedError;

/// List every non-directory entry of `dir`, sorted by file name.
///
/// Sorting makes the generated artifact deterministic regardless of the
/// order the filesystem enumerates entries in.
pub fn scan_sources(dir: &Path) -> Result<Vec<PathBuf>, EmbedError> {
    let entries = fs::read_dir(dir).map_err(|source| EmbedError::Filesystem {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| EmbedError::Filesystem {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        // is_dir() follows symlinks, so a link to a directory is skipped too
        if path.is_dir() {
            log::debug!("Skipping directory {:?}", path);
            continue;
        }
        sources.push(path);
    }

    sources.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    log::info!("Found {} shader sources in {:?}", sources.len(), dir);
    Ok(sources)
}
