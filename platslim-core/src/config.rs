//! Configuration loading from platslim.toml.
//!
//! Every constant the scanners rely on lives here so that callers (and
//! tests) can substitute their own values. A config file only needs the
//! keys it overrides.

use serde::Deserialize;
use std::{fs, path::Path};

use crate::error::{IoResultExt, PlatslimError, PlatslimResult};

/// Name of the optional config file looked up in the source root.
pub const CONFIG_FILE: &str = "platslim.toml";

/// Main configuration structure for platslim.toml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlatslimConfig {
    /// File name of a project descriptor in the application source tree.
    pub descriptor_file: String,
    /// Directory names never descended into while scanning sources.
    pub excluded_dirs: Vec<String>,
    /// Namespace prefix of the dependency tags; a schema version is appended.
    pub namespace: String,
    /// Local name of the dependency tag.
    pub dependency_tag: String,
    /// Schema versions checked for the dependency tag.
    pub schema_versions: Vec<u32>,
    /// Module family belonging to the application itself.
    pub excluded_prefix: String,
    /// Platform clusters the application draws modules from.
    pub clusters: Vec<String>,
    /// Module configuration directory, relative to a cluster.
    pub module_config_dir: String,
    /// Extension of module descriptor files.
    pub module_descriptor_ext: String,
    /// Extension of module archives.
    pub archive_ext: String,
    /// Extension of module configuration files.
    pub config_ext: String,
    /// Generated directory whose files never satisfy an artifact lookup.
    pub auto_deps_dir: String,
    /// Properties file holding the disabled list, relative to the source root.
    pub properties_file: String,
    /// Key of the disabled list in the properties file.
    pub disabled_key: String,
}

impl Default for PlatslimConfig {
    fn default() -> Self {
        Self {
            descriptor_file: "project.xml".to_string(),
            excluded_dirs: [".git", ".hg", ".svn"].map(String::from).to_vec(),
            namespace: "http://www.netbeans.org/ns/nb-module-project/".to_string(),
            dependency_tag: "code-name-base".to_string(),
            schema_versions: vec![1, 2, 3, 4],
            excluded_prefix: "com.bluemarsh.jswat".to_string(),
            clusters: ["ide", "java"].map(String::from).to_vec(),
            module_config_dir: "config/Modules".to_string(),
            module_descriptor_ext: "xml".to_string(),
            archive_ext: "jar".to_string(),
            config_ext: "xml".to_string(),
            auto_deps_dir: "ModuleAutoDeps".to_string(),
            properties_file: "suite/nbproject/platform.properties".to_string(),
            disabled_key: "disabled.modules".to_string(),
        }
    }
}

impl PlatslimConfig {
    /// Fully-qualified namespaces of the dependency tag, one per schema version.
    pub fn dependency_namespaces(&self) -> Vec<String> {
        self.schema_versions
            .iter()
            .map(|v| format!("{}{}", self.namespace, v))
            .collect()
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(path: &Path, content: &str) -> PlatslimResult<PlatslimConfig> {
    toml::from_str(content).map_err(|e| PlatslimError::config(path, e.to_string()))
}

/// Loads configuration from platslim.toml in `root` if it exists.
pub fn load_config(root: &Path) -> PlatslimResult<Option<PlatslimConfig>> {
    let path = root.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Loads configuration from an explicit file; the file must exist.
pub fn load_config_file(path: &Path) -> PlatslimResult<PlatslimConfig> {
    let content = fs::read_to_string(path).with_path(path)?;
    let cfg = parse_config(path, &content)?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(cfg)
}
