//! Builder pattern API composing the scanners into the two modes.
//!
//! ```rust,ignore
//! use platslim_core::prelude::*;
//!
//! let report = Platslim::new("/opt/netbeans")
//!     .source_root("/src/app")
//!     .disabled_modules()?;
//!
//! println!("{:?}", report.disabled);
//! ```

use std::path::PathBuf;

use serde::Serialize;

use crate::artifacts::{find_module_files, ModuleFiles};
use crate::bucket::{organize_files, BucketMap};
use crate::config::PlatslimConfig;
use crate::depends::{find_depends_set, ModuleSet};
use crate::detect::{find_disabled, find_enabled};
use crate::error::{PlatslimError, PlatslimResult};
use crate::platform::find_all_modules;
use crate::properties::read_disabled_modules;

/// Builder for configuring a platslim run.
#[derive(Debug, Clone)]
pub struct Platslim {
    /// Root of the platform installation
    platform: PathBuf,

    /// Root of the application source tree
    source_root: PathBuf,

    /// Scanner configuration
    config: PlatslimConfig,

    /// Explicit properties file; derived from the source root when unset
    properties: Option<PathBuf>,
}

impl Platslim {
    /// Create a builder for the given platform installation.
    ///
    /// The source root defaults to the current directory.
    pub fn new(platform: impl Into<PathBuf>) -> Self {
        Self {
            platform: platform.into(),
            source_root: PathBuf::from("."),
            config: PlatslimConfig::default(),
            properties: None,
        }
    }

    /// Set the application source tree to scan.
    pub fn source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }

    /// Replace the scanner configuration.
    pub fn config(mut self, config: PlatslimConfig) -> Self {
        self.config = config;
        self
    }

    /// Read the disabled list from this file instead of the configured one.
    pub fn properties_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.properties = Some(path.into());
        self
    }

    /// Properties file consulted by [`Platslim::build_files`].
    pub fn properties_path(&self) -> PathBuf {
        self.properties
            .clone()
            .unwrap_or_else(|| self.source_root.join(&self.config.properties_file))
    }

    /// Compute the platform modules the application does not need.
    ///
    /// Fails with [`PlatslimError::NoDependencies`] when the source tree
    /// yields no dependencies, which almost always means a wrong source root.
    pub fn disabled_modules(&self) -> PlatslimResult<DisabledReport> {
        let depends = find_depends_set(&self.source_root, &self.config)?;
        if depends.is_empty() {
            return Err(PlatslimError::NoDependencies {
                root: self.source_root.clone(),
            });
        }

        let universe = find_all_modules(&self.platform, &self.config)?;
        let disabled = find_disabled(&universe, &depends);
        tracing::info!(
            universe = universe.len(),
            depends = depends.len(),
            disabled = disabled.len(),
            "computed disabled modules"
        );

        Ok(DisabledReport {
            key: self.config.disabled_key.clone(),
            depends,
            universe,
            disabled,
        })
    }

    /// Resolve the files of every module not listed as disabled.
    pub fn build_files(&self) -> PlatslimResult<BuildReport> {
        let disabled = read_disabled_modules(&self.properties_path(), &self.config.disabled_key)?;
        let universe = find_all_modules(&self.platform, &self.config)?;
        let enabled = find_enabled(&universe, &disabled);
        tracing::info!(
            universe = universe.len(),
            disabled = disabled.len(),
            enabled = enabled.len(),
            "computed enabled modules"
        );

        let files = find_module_files(&self.platform, &enabled, &self.config)?;
        let buckets = organize_files(&files.jars, &files.configs);

        Ok(BuildReport {
            enabled,
            files,
            buckets,
        })
    }
}

/// Result of the disabled-list computation.
#[derive(Debug, Clone, Serialize)]
pub struct DisabledReport {
    /// Properties key the list is rendered under
    pub key: String,

    /// Modules the application references directly
    pub depends: ModuleSet,

    /// Modules installed in the configured clusters
    pub universe: ModuleSet,

    /// Installed modules not referenced, sorted
    pub disabled: ModuleSet,
}

impl DisabledReport {
    /// The disabled list in output order.
    pub fn disabled_list(&self) -> Vec<&str> {
        self.disabled.iter().map(String::as_str).collect()
    }
}

/// Result of the build-list computation.
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    /// Modules to package
    pub enabled: ModuleSet,

    /// Their archives and configs, relative to the platform root
    pub files: ModuleFiles,

    /// The same files grouped by directory
    pub buckets: BucketMap,
}
