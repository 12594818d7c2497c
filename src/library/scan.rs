use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::error::{Error, Result};

/// Whether the file name ends with `extension`, ignoring ASCII case.
pub fn matches_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .and_then(|name| {
            let at = name.len().checked_sub(extension.len())?;
            name.get(at..)
        })
        .map(|tail| tail.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the entries under `dir`, ordered by file name within each directory.
///
/// Recursive listings include `dir` itself and every nested directory and
/// file; otherwise only the immediate children are listed. The caller filters
/// for files. Unreadable nested entries are logged and skipped.
pub fn list(dir: &Path, settings: &LibrarySettings) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.to_path_buf()));
    }

    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    // Non-recursive = only the root directory's children.
    if settings.recursive {
        if let Some(d) = settings.max_depth {
            walker = walker.max_depth(d);
        }
    } else {
        walker = walker.min_depth(1).max_depth(1);
    }

    let mut paths = Vec::new();
    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        match entry {
            Ok(entry) => paths.push(entry.into_path()),
            Err(e) if e.depth() == 0 => {
                return Err(Error::Walk {
                    path: dir.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => tracing::warn!(error = %e, "skipping unreadable entry"),
        }
    }
    Ok(paths)
}
