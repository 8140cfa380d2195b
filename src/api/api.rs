use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use thiserror::Error;

use super::import::{self, FileOutcome};
use crate::config::{Config, ConfigError};
use crate::export_data;
use crate::import_data::ImportStats;
use crate::renderer::{MapDocument, MapRenderer};
use crate::track::{BoundingBox, TrackCollection};

/// Errors that end a run. Anything smaller (a bad line, an unreadable file)
/// is logged and skipped instead.
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),

    #[error("folder not found at '{}'", .0.display())]
    MissingInputFolder(PathBuf),

    #[error("cannot list '{}': {source}", path.display())]
    ReadInputFolder {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no .{extension} files found in '{}'", path.display())]
    NoMatchingFiles { path: PathBuf, extension: String },

    #[error("no valid track data found in any file, map not generated")]
    NoTrackData,

    #[error("cannot render the map: {0:#}")]
    Render(anyhow::Error),

    #[error("error saving the map to '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("error saving GPX to '{}': {cause:#}", path.display())]
    GpxWrite { path: PathBuf, cause: anyhow::Error },
}

impl RunError {
    /// Configuration problems are detected before any file is processed.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            RunError::InvalidConfig(_)
                | RunError::MissingInputFolder(_)
                | RunError::ReadInputFolder { .. }
                | RunError::NoMatchingFiles { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub files_found: usize,
    pub files_rendered: usize,
    pub files_empty: usize,
    pub files_failed: usize,
    pub stats: ImportStats,
    pub bounding_box: BoundingBox,
    pub map_file: PathBuf,
    pub gpx_file: Option<PathBuf>,
}

/// Per-file results folded in order.
#[derive(Debug, Default)]
pub struct ImportedTracks {
    pub tracks: TrackCollection,
    pub stats: ImportStats,
    pub files_empty: usize,
    pub files_failed: usize,
}

pub fn collect_tracks(outcomes: impl IntoIterator<Item = FileOutcome>) -> ImportedTracks {
    outcomes
        .into_iter()
        .fold(ImportedTracks::default(), |mut acc, outcome| {
            match outcome {
                FileOutcome::Failed(_) => acc.files_failed += 1,
                FileOutcome::Imported(imported) => {
                    let name = imported.track.name.clone();
                    let stats = imported.stats;
                    acc.stats += stats;
                    if acc.tracks.push(imported.track) {
                        info!(
                            "Found {} valid coordinates in {} ({} skipped as jumps).",
                            stats.accepted, name, stats.rejected
                        );
                    } else {
                        info!("No valid coordinates found in {}. Skipping.", name);
                        acc.files_empty += 1;
                    }
                }
            }
            acc
        })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|x| x.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Scans the input folder, imports every track, renders one map document and
/// writes it (plus the optional GPX export).
pub fn run(config: &Config, renderer: &dyn MapRenderer) -> Result<RunSummary, RunError> {
    info!(
        "Searching for .{} files in: {}",
        config.extension,
        config.input_folder.display()
    );
    let files = import::scan_folder(&config.input_folder, &config.extension)?;
    info!(
        "Found {} .{} files: {}",
        files.len(),
        config.extension,
        files.iter().map(|path| display_name(path)).join(", ")
    );

    let options = config.import_options();
    let outcomes = files.iter().map(|path| {
        info!("Processing: {}", display_name(path));
        import::import_file(path, &options)
    });
    let imported = collect_tracks(outcomes);

    let bounding_box = imported
        .tracks
        .bounding_box()
        .ok_or(RunError::NoTrackData)?;
    let document = MapDocument::from_tracks(&imported.tracks, &config.line_style)
        .ok_or(RunError::NoTrackData)?;
    let html = renderer.render(&document).map_err(RunError::Render)?;
    export_data::save_map(&config.output_map_file, &html).map_err(|source| {
        RunError::OutputWrite {
            path: config.output_map_file.clone(),
            source,
        }
    })?;
    info!(
        "Map successfully generated: {}",
        fs::canonicalize(&config.output_map_file)
            .unwrap_or_else(|_| config.output_map_file.clone())
            .display()
    );

    if let Some(gpx_file) = &config.gpx_output_file {
        export_data::save_gpx(gpx_file, &imported.tracks).map_err(|cause| RunError::GpxWrite {
            path: gpx_file.clone(),
            cause,
        })?;
        info!("GPX written to: {}", gpx_file.display());
    }

    Ok(RunSummary {
        files_found: files.len(),
        files_rendered: imported.tracks.len(),
        files_empty: imported.files_empty,
        files_failed: imported.files_failed,
        stats: imported.stats,
        bounding_box,
        map_file: config.output_map_file.clone(),
        gpx_file: config.gpx_output_file.clone(),
    })
}
