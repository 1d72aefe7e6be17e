//! Resolution of module identifiers to their files in a platform installation.
//!
//! Every installed module is backed by an archive and a configuration
//! file whose names derive from the module identifier (`org.foo.bar` →
//! `org-foo-bar.jar` / `org-foo-bar.xml`). The locator walks the whole
//! installation once and fails loudly, listing every missing name, unless
//! both files were found for every requested module.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::PlatslimConfig;
use crate::depends::ModuleSet;
use crate::error::{PlatslimError, PlatslimResult};
use crate::walk::{relative_to, walk_files};

/// Expected on-disk file names for one module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPair {
    pub archive: String,
    pub config: String,
}

/// Derives the archive and config file names for a module identifier.
pub fn artifact_names(module: &str, config: &PlatslimConfig) -> ArtifactPair {
    let stem = module.replace('.', "-");
    ArtifactPair {
        archive: format!("{}.{}", stem, config.archive_ext),
        config: format!("{}.{}", stem, config.config_ext),
    }
}

/// Located files, relative to the platform root, in walk order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModuleFiles {
    pub jars: Vec<PathBuf>,
    pub configs: Vec<PathBuf>,
}

/// Locates the archive and config file of every module in `modules`.
///
/// The generated `config.auto_deps_dir` subtree is never searched. A name
/// found more than once counts only at its first location. Fails with
/// [`PlatslimError::MissingArtifacts`] naming every file not found.
pub fn find_module_files(
    platform: &Path,
    modules: &ModuleSet,
    config: &PlatslimConfig,
) -> PlatslimResult<ModuleFiles> {
    let mut jar_names = BTreeSet::new();
    let mut xml_names = BTreeSet::new();
    for module in modules {
        let pair = artifact_names(module, config);
        if !jar_names.insert(pair.archive) {
            tracing::debug!(module = %module, "file names shared with another module");
        }
        xml_names.insert(pair.config);
    }
    // Identifiers differing only in '.' versus '-' share their files.
    let expected_jars = jar_names.len();
    let expected_configs = xml_names.len();

    let mut files = ModuleFiles::default();
    let auto_deps = config.auto_deps_dir.as_str();
    let candidates = walk_files(platform, |e| e.file_name() == auto_deps, |_| true);

    for found in candidates {
        let path = found?;
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if jar_names.remove(name) {
            files.jars.push(relative_to(&path, platform));
        } else if xml_names.remove(name) {
            files.configs.push(relative_to(&path, platform));
        }
    }

    if files.jars.len() != expected_jars || files.configs.len() != expected_configs {
        return Err(PlatslimError::MissingArtifacts {
            archives: jar_names.into_iter().collect(),
            configs: xml_names.into_iter().collect(),
        });
    }

    tracing::info!(
        platform = %platform.display(),
        jars = files.jars.len(),
        configs = files.configs.len(),
        "located module files"
    );
    Ok(files)
}
