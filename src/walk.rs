use crate::config::RunConfig;
use crate::error::{Error, Result};
use crate::run::RunFolder;
use crate::transform::{extension, process_image};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Outcome of a run that got through the whole input tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub run_folder: PathBuf,
    /// Source files in the order they were processed.
    pub processed: Vec<PathBuf>,
}

/// Whether `path` carries one of `extensions`, compared case-insensitively.
pub fn is_candidate(path: &Path, extensions: &[String]) -> bool {
    match extension(path) {
        Some(ext) => {
            let ext = ext.to_lowercase();
            extensions.iter().any(|allowed| *allowed == ext)
        }
        None => false,
    }
}

/// Walks `config.input_root` in file name order and splits every candidate
/// image into `run_folder`.
///
/// The first traversal, decode or write error ends the walk and is returned
/// as is; output already written stays on disk.
pub fn process_tree(config: &RunConfig, run_folder: &RunFolder) -> Result<RunSummary> {
    let mut processed = Vec::new();

    for entry in WalkDir::new(&config.input_root).sort_by_file_name() {
        let entry = entry.map_err(|source| Error::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| config.input_root.clone()),
            source,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }

        if !is_candidate(entry.path(), &config.extensions) {
            tracing::trace!("skipping {}", entry.path().display());
            continue;
        }

        process_image(entry.path(), run_folder.path(), config.thumbnail_edge)?;
        processed.push(entry.into_path());
    }

    Ok(RunSummary {
        run_folder: run_folder.path().to_path_buf(),
        processed,
    })
}
