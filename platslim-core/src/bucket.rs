//! Grouping of located files by containing directory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// One directory and the file names located in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub dir: PathBuf,
    pub files: Vec<String>,
}

/// Directory → file names, in the order paths were supplied.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct BucketMap {
    buckets: Vec<Bucket>,
    #[serde(skip)]
    index: HashMap<PathBuf, usize>,
}

impl BucketMap {
    /// Adds `path` under its parent directory.
    pub fn insert(&mut self, path: &Path) {
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let slot = match self.index.get(&dir) {
            Some(&i) => i,
            None => {
                self.index.insert(dir.clone(), self.buckets.len());
                self.buckets.push(Bucket {
                    dir,
                    files: Vec::new(),
                });
                self.buckets.len() - 1
            }
        };
        self.buckets[slot].files.push(name);
    }

    /// File names located in `dir`, if any.
    pub fn get(&self, dir: &Path) -> Option<&[String]> {
        self.index.get(dir).map(|&i| self.buckets[i].files.as_slice())
    }

    /// Buckets in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.iter()
    }

    /// Number of directories.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if no file has been inserted.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Groups archives then configs by directory, preserving supplied order.
pub fn organize_files(jars: &[PathBuf], configs: &[PathBuf]) -> BucketMap {
    let mut buckets = BucketMap::default();
    for path in jars.iter().chain(configs) {
        buckets.insert(path);
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_groups_by_directory_in_supplied_order() {
        let jars = paths(&["java/modules/org-b.jar", "ide/modules/org-a.jar", "java/modules/org-c.jar"]);
        let configs = paths(&["java/config/Modules/org-b.xml", "ide/config/Modules/org-a.xml"]);

        let buckets = organize_files(&jars, &configs);
        let dirs: Vec<_> = buckets.iter().map(|b| b.dir.clone()).collect();
        assert_eq!(
            dirs,
            paths(&["java/modules", "ide/modules", "java/config/Modules", "ide/config/Modules"])
        );
        assert_eq!(
            buckets.get(Path::new("java/modules")).unwrap(),
            ["org-b.jar", "org-c.jar"]
        );
    }

    #[test]
    fn test_top_level_file_has_empty_dir() {
        let buckets = organize_files(&paths(&["core.jar"]), &[]);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets.get(Path::new("")).unwrap(), ["core.jar"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(organize_files(&[], &[]).is_empty());
    }
}
