//! Project root discovery.
//!
//! The project root is the directory the input paths are relative to. It is
//! found by walking upward from the executable, then from the working
//! directory, until a directory holding the system prompt is found.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::sources::PayloadSources;

/// Walk `start` and its ancestors, returning the first directory that
/// contains `marker`.
pub fn find_root(start: &Path, marker: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).is_file())
        .map(Path::to_path_buf)
}

/// Resolve the project root for a run.
///
/// An explicit root is used as-is. Otherwise the executable's directory and
/// then the current directory are searched for the system prompt file; if
/// neither turns it up, the current directory is returned and the later
/// reads report the missing files.
pub fn resolve_root(explicit: Option<&Path>, sources: &PayloadSources) -> Result<PathBuf, String> {
    if let Some(root) = explicit {
        debug!("Using explicit project root {}", root.display());
        return Ok(root.to_path_buf());
    }

    let cwd = std::env::current_dir()
        .map_err(|e| format!("failed to determine current directory: {e}"))?;

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));

    let found = exe_dir
        .iter()
        .chain(std::iter::once(&cwd))
        .find_map(|start| find_root(start, &sources.system_prompt));

    match found {
        Some(root) => {
            debug!("Discovered project root {}", root.display());
            Ok(root)
        }
        None => {
            debug!(
                "No directory containing {} found; using {}",
                sources.system_prompt.display(),
                cwd.display()
            );
            Ok(cwd)
        }
    }
}
