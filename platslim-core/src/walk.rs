//! Directory traversal with subtree pruning.
//!
//! Every scan in platslim goes through [`walk_files`]: one predicate decides
//! which directories are skipped entirely, the other which files are
//! yielded. Pruning happens in `WalkDir::filter_entry`, so an excluded
//! directory costs a single check no matter how large it is.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{PlatslimError, PlatslimResult};

/// Lazily walks `root`, yielding the full path of every accepted file.
///
/// `prune_dir` is consulted for directories below the root only; the root
/// itself is always entered. Entries are visited in file-name order.
/// A missing or unreadable root surfaces as a [`PlatslimError::Walk`] item.
pub fn walk_files<P, A>(
    root: &Path,
    mut prune_dir: P,
    mut accept_file: A,
) -> impl Iterator<Item = PlatslimResult<PathBuf>>
where
    P: FnMut(&DirEntry) -> bool,
    A: FnMut(&DirEntry) -> bool,
{
    let root_buf = root.to_path_buf();
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(move |e| !(e.depth() > 0 && e.file_type().is_dir() && prune_dir(e)))
        .filter_map(move |entry| match entry {
            Ok(e) => {
                if e.path().is_file() && accept_file(&e) {
                    Some(Ok(e.into_path()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(PlatslimError::walk(&root_buf, e))),
        })
}

/// Directory predicate matching entries whose name is in `names`.
pub fn dir_named<'a>(names: &'a [String]) -> impl FnMut(&DirEntry) -> bool + 'a {
    move |e| {
        e.file_name()
            .to_str()
            .is_some_and(|name| names.iter().any(|n| n == name))
    }
}

/// Returns `path` relative to `base`, or `path` unchanged if it lies elsewhere.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_prunes_named_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("a/keep.txt"));
        touch(&root.join(".git/objects/skip.txt"));
        touch(&root.join("b/.hg/skip.txt"));

        let excludes = vec![".git".to_string(), ".hg".to_string()];
        let found: Vec<PathBuf> = walk_files(root, dir_named(&excludes), |_| true)
            .collect::<PlatslimResult<_>>()
            .unwrap();

        assert_eq!(found, vec![root.join("a/keep.txt")]);
    }

    #[test]
    fn test_root_is_never_pruned() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join(".git");
        touch(&root.join("inside.txt"));

        let excludes = vec![".git".to_string()];
        let found: Vec<PathBuf> = walk_files(&root, dir_named(&excludes), |_| true)
            .collect::<PlatslimResult<_>>()
            .unwrap();
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_accept_predicate_filters_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("x/one.xml"));
        touch(&root.join("x/two.jar"));

        let found: Vec<PathBuf> = walk_files(root, |_| false, |e| {
            e.path().extension().is_some_and(|ext| ext == "xml")
        })
        .collect::<PlatslimResult<_>>()
        .unwrap();
        assert_eq!(found, vec![root.join("x/one.xml")]);
    }

    #[test]
    fn test_missing_root_is_walk_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let results: Vec<_> = walk_files(&missing, |_| false, |_| true).collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], Err(PlatslimError::Walk { .. })));
    }

    #[test]
    fn test_relative_to() {
        assert_eq!(
            relative_to(Path::new("/nb/ide/modules/a.jar"), Path::new("/nb")),
            PathBuf::from("ide/modules/a.jar")
        );
        assert_eq!(
            relative_to(Path::new("/other/a.jar"), Path::new("/nb")),
            PathBuf::from("/other/a.jar")
        );
    }
}
