//! Project descriptor discovery in an application source tree.

use std::path::{Path, PathBuf};

use crate::config::PlatslimConfig;
use crate::error::PlatslimResult;
use crate::walk::{dir_named, relative_to, walk_files};

/// Lazily yields every project descriptor below `root`, relative to `root`.
///
/// Version-control metadata directories (per `config.excluded_dirs`) are
/// pruned. A missing or unreadable root is yielded as an error.
pub fn iterate_projects<'a>(
    root: &'a Path,
    config: &'a PlatslimConfig,
) -> impl Iterator<Item = PlatslimResult<PathBuf>> + 'a {
    let descriptor = config.descriptor_file.as_str();
    walk_files(root, dir_named(&config.excluded_dirs), move |e| {
        e.file_name() == descriptor
    })
    .map(move |found| found.map(|path| relative_to(&path, root)))
}
