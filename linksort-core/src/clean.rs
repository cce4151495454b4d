use crate::config::SortConfig;
use crate::error::{Result, SortError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Recursively delete `path`. Returns `false` if there was nothing to delete.
pub fn remove_dir_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path) {
        Ok(()) => {
            info!("Removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Nothing to remove at {}", path.display());
            Ok(false)
        }
        Err(e) => Err(SortError::io(path, e)),
    }
}

/// Delete the output directory. Returns the directories actually removed.
pub fn clean(config: &SortConfig) -> Result<Vec<PathBuf>> {
    remove_all(&[config.output_dir.as_path()])
}

/// Delete the input and output directories. Returns the directories actually
/// removed.
pub fn clean_all(config: &SortConfig) -> Result<Vec<PathBuf>> {
    remove_all(&[config.input_dir.as_path(), config.output_dir.as_path()])
}

fn remove_all(dirs: &[&Path]) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for dir in dirs {
        if remove_dir_if_exists(dir)? {
            removed.push(dir.to_path_buf());
        }
    }
    Ok(removed)
}
