// SPDX-FileCopyrightText: 2026 Mapwire Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hand-off of mapping rule files to the external rule engine.
//!
//! Files are found by extension under the configured folder, opened, and
//! passed one by one to a [`MappingEngine`] once all mapper functions are
//! registered. Parsing them is the engine's business.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use walkdir::WalkDir;

use crate::registry::FunctionRegistry;

/// One opened mapping rule file.
pub struct MappingStream {
    pub path: PathBuf,
    pub reader: Box<dyn Read + Send>,
}

impl fmt::Debug for MappingStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingStream")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// Stream-based registration entry point of the rule engine.
pub trait MappingEngine: Send {
    /// Register the mapping rules read from `stream`. `functions` is the
    /// fully wired registry the rules may call into.
    fn register_from_reader(
        &mut self,
        functions: &Arc<FunctionRegistry>,
        stream: MappingStream,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Failure enumerating or opening mapping files.
#[derive(Debug, Error)]
pub enum MappingSourceError {
    #[error("`{}` does not exist or is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to walk folder: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to open `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Mapping files under `folder` whose extension is `extension`, sorted by path.
///
/// A leading dot on `extension` is ignored. Without `recursive`, only the
/// folder's direct children are considered.
pub fn find_mapping_files(
    folder: &Path,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>, MappingSourceError> {
    if !folder.is_dir() {
        return Err(MappingSourceError::NotADirectory(folder.to_path_buf()));
    }

    let extension = extension.trim_start_matches('.');
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut files = Vec::new();
    for entry in WalkDir::new(folder).follow_links(true).max_depth(max_depth) {
        let entry = entry?;
        let matches = entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == extension);
        if matches {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Open every mapping file under `folder`.
pub fn open_mapping_streams(
    folder: &Path,
    extension: &str,
    recursive: bool,
) -> Result<Vec<MappingStream>, MappingSourceError> {
    find_mapping_files(folder, extension, recursive)?
        .into_iter()
        .map(|path| {
            let file = File::open(&path).map_err(|source| MappingSourceError::Open {
                path: path.clone(),
                source,
            })?;
            Ok(MappingStream {
                path,
                reader: Box::new(file),
            })
        })
        .collect()
}
