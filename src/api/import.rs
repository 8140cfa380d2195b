use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use super::api::RunError;
use crate::import_data::{self, ImportError, ImportOptions, ImportedTrack};

/// Result of importing one file. A failed file never aborts the run.
#[derive(Debug)]
pub enum FileOutcome {
    Imported(ImportedTrack),
    Failed(ImportError),
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|x| x.to_str())
        .map(|name| {
            name.to_ascii_lowercase()
                .ends_with(&format!(".{}", extension.to_ascii_lowercase()))
        })
        .unwrap_or(false)
}

fn readable_entry<T>(folder: &Path, entry: io::Result<T>) -> Option<T> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("Skipping unreadable entry in {}: {}", folder.display(), e);
            None
        }
    }
}

/// Regular files in `folder` whose name ends in `.<extension>` (ASCII case
/// insensitive), sorted by file name.
pub fn scan_folder(folder: &Path, extension: &str) -> Result<Vec<PathBuf>, RunError> {
    if !folder.is_dir() {
        return Err(RunError::MissingInputFolder(folder.to_owned()));
    }
    let entries = fs::read_dir(folder).map_err(|source| RunError::ReadInputFolder {
        path: folder.to_owned(),
        source,
    })?;
    let files: Vec<PathBuf> = entries
        .filter_map(|entry| readable_entry(folder, entry))
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_extension(path, extension))
        .sorted_by(|a, b| a.file_name().cmp(&b.file_name()))
        .collect();
    if files.is_empty() {
        return Err(RunError::NoMatchingFiles {
            path: folder.to_owned(),
            extension: extension.to_owned(),
        });
    }
    Ok(files)
}

pub fn import_file(path: &Path, options: &ImportOptions) -> FileOutcome {
    match import_data::load_igc(path, options) {
        Ok(imported) => FileOutcome::Imported(imported),
        Err(e) => {
            error!("{}", e);
            FileOutcome::Failed(e)
        }
    }
}
