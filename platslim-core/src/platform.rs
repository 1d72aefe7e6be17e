//! Enumeration of the modules installed in a platform.
//!
//! Each cluster of a platform installation keeps one small XML status file
//! per module under `<cluster>/config/Modules`. The root element of such a
//! file is `<module name="...">`; anything else in that directory is not a
//! module descriptor and is skipped.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::PlatslimConfig;
use crate::depends::ModuleSet;
use crate::error::{IoResultExt, PlatslimError, PlatslimResult};
use crate::walk::walk_files;
use crate::xml::parse_document;

/// Returns the module name declared by module descriptor XML, if it is one.
pub fn parse_module_name(path: &Path, content: &str) -> PlatslimResult<Option<String>> {
    let doc = parse_document(path, content)?;
    let root = doc.root_element();
    if root.tag_name().namespace().is_none() && root.tag_name().name() == "module" {
        return Ok(root.attribute("name").map(str::to_string));
    }
    Ok(None)
}

/// Reads a module descriptor file and returns its module name, if any.
pub fn get_module_name(path: &Path) -> PlatslimResult<Option<String>> {
    let content = fs::read_to_string(path).with_path(path)?;
    parse_module_name(path, &content)
}

/// Module configuration directories of the configured clusters.
pub fn module_config_dirs(platform: &Path, config: &PlatslimConfig) -> Vec<PathBuf> {
    config
        .clusters
        .iter()
        .map(|cluster| platform.join(cluster).join(&config.module_config_dir))
        .collect()
}

/// Names of all modules installed in the configured clusters of `platform`.
///
/// A cluster without a module configuration directory contributes nothing.
pub fn find_all_modules(platform: &Path, config: &PlatslimConfig) -> PlatslimResult<ModuleSet> {
    let mut mods = ModuleSet::new();
    let ext = config.module_descriptor_ext.as_str();

    for dir in module_config_dirs(platform, config) {
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "cluster has no module configuration directory");
            continue;
        }
        let before = mods.len();
        let descriptors = walk_files(&dir, |_| false, |e| {
            e.path().extension().is_some_and(|x| x == ext)
        });
        for descriptor in descriptors {
            if let Some(name) = get_module_name(&descriptor?)? {
                mods.insert(name);
            }
        }
        tracing::debug!(dir = %dir.display(), modules = mods.len() - before, "enumerated cluster");
    }

    tracing::info!(platform = %platform.display(), modules = mods.len(), "enumerated platform modules");
    Ok(mods)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_xml(name: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE module PUBLIC "-//NetBeans//DTD Module Status 1.0//EN"
                        "http://www.netbeans.org/dtds/module-status-1_0.dtd">
<module name="{name}">
    <param name="autoload">true</param>
    <param name="eager">false</param>
    <param name="jar">modules/{jar}.jar</param>
    <param name="reloadable">false</param>
</module>
"#,
            jar = name.replace('.', "-")
        )
    }

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_parse_module_name_with_doctype() {
        let name = parse_module_name(Path::new("x.xml"), &status_xml("org.netbeans.api.debugger"))
            .unwrap();
        assert_eq!(name.as_deref(), Some("org.netbeans.api.debugger"));
    }

    #[test]
    fn test_other_root_tag_is_skipped() {
        let name = parse_module_name(Path::new("x.xml"), "<filesystem name=\"org.foo\"/>").unwrap();
        assert!(name.is_none());
    }

    #[test]
    fn test_find_all_modules_across_clusters() {
        let dir = tempfile::tempdir().unwrap();
        let nb = dir.path();
        write(&nb.join("ide/config/Modules/org-alpha.xml"), &status_xml("org.alpha"));
        write(&nb.join("java/config/Modules/org-beta.xml"), &status_xml("org.beta"));
        write(&nb.join("java/config/Modules/notes.txt"), "not xml at all");
        write(&nb.join("java/config/Modules/layer.xml"), "<filesystem/>");
        // Not one of the configured clusters.
        write(&nb.join("platform/config/Modules/org-gamma.xml"), &status_xml("org.gamma"));

        let mods = find_all_modules(nb, &PlatslimConfig::default()).unwrap();
        assert_eq!(mods.into_iter().collect::<Vec<_>>(), vec!["org.alpha", "org.beta"]);
    }

    #[test]
    fn test_missing_clusters_are_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mods = find_all_modules(dir.path(), &PlatslimConfig::default()).unwrap();
        assert!(mods.is_empty());
    }

    #[test]
    fn test_malformed_module_descriptor_is_error() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("ide/config/Modules/broken.xml"), "<module name=");
        let err = find_all_modules(dir.path(), &PlatslimConfig::default()).unwrap_err();
        assert!(matches!(err, PlatslimError::Xml { .. }));
    }
}
