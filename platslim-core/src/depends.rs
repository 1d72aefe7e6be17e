//! Dependency extraction from project descriptors.
//!
//! A project descriptor names each module it depends on in a namespaced
//! `code-name-base` element. The namespace carries a schema version, and
//! descriptors written by different tool generations use different
//! versions, so every configured version is checked in every document.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::config::PlatslimConfig;
use crate::error::{IoResultExt, PlatslimResult};
use crate::scan::iterate_projects;
use crate::xml::parse_document;

/// A set of module identifiers, ordered for deterministic output.
pub type ModuleSet = BTreeSet<String>;

/// Extracts the referenced module names from descriptor XML text.
///
/// Elements are yielded version by version, in document order within each
/// version. `path` is only used for error reporting.
pub fn extract_depends(
    path: &Path,
    content: &str,
    config: &PlatslimConfig,
) -> PlatslimResult<Vec<String>> {
    let doc = parse_document(path, content)?;
    let mut names = Vec::new();

    for namespace in config.dependency_namespaces() {
        let tag = (namespace.as_str(), config.dependency_tag.as_str());
        for node in doc.descendants().filter(|n| n.has_tag_name(tag)) {
            if let Some(text) = node.text().map(str::trim).filter(|t| !t.is_empty()) {
                names.push(text.to_string());
            }
        }
    }

    Ok(names)
}

/// Reads a descriptor file and extracts its referenced module names.
pub fn iterate_depends(path: &Path, config: &PlatslimConfig) -> PlatslimResult<Vec<String>> {
    let content = fs::read_to_string(path).with_path(path)?;
    extract_depends(path, &content, config)
}

/// Union of the dependencies of every project below `root`.
///
/// References into the application's own module family
/// (`config.excluded_prefix`) are dropped. An empty result means nothing
/// was found; deciding whether that is fatal is left to the caller.
pub fn find_depends_set(root: &Path, config: &PlatslimConfig) -> PlatslimResult<ModuleSet> {
    let mut results = ModuleSet::new();
    let mut projects = 0usize;

    for relative in iterate_projects(root, config) {
        let descriptor = root.join(relative?);
        projects += 1;
        for name in iterate_depends(&descriptor, config)? {
            if !name.starts_with(&config.excluded_prefix) {
                results.insert(name);
            }
        }
    }

    tracing::info!(
        root = %root.display(),
        projects,
        depends = results.len(),
        "scanned project descriptors"
    );
    Ok(results)
}
