//! platslim-core: platform module resolution for modular applications
//!
//! An application built on a modular platform declares, per project, the
//! platform modules it depends on. This library collects those
//! declarations, compares them with the modules actually installed in a
//! platform, and answers two questions:
//!
//! - **Which platform modules can be disabled?** Installed modules that no
//!   project references.
//! - **Which files must be packaged?** The archive and configuration file
//!   of every module that is not disabled, grouped by directory.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use platslim_core::prelude::*;
//!
//! let slim = Platslim::new("/opt/netbeans").source_root(".");
//! let report = slim.disabled_modules()?;
//! print_disabled_plain(&report.key, &report.disabled_list());
//! ```
//!
//! # Module Organization
//!
//! - [`walk`]: Directory traversal with subtree pruning
//! - [`xml`]: Descriptor XML parsing
//! - [`scan`]: Project descriptor discovery
//! - [`depends`]: Dependency extraction from project descriptors
//! - [`platform`]: Installed module enumeration
//! - [`properties`]: Properties-file reader for the stored disabled list
//! - [`detect`]: Disabled/enabled partitioning
//! - [`artifacts`]: Module file resolution
//! - [`bucket`]: Grouping of resolved files by directory
//! - [`report`]: Output formatting
//! - [`builder`]: Fluent API composing the above
//! - [`error`]: Typed error handling

pub mod artifacts;
pub mod bucket;
pub mod builder;
pub mod config;
pub mod depends;
pub mod detect;
pub mod error;
pub mod logging;
pub mod platform;
pub mod prelude;
pub mod properties;
pub mod report;
pub mod scan;
pub mod walk;
pub mod xml;

// ============================================================================
// Explicit Re-exports
// ============================================================================

// Error types
pub use error::{IoResultExt, PlatslimError, PlatslimResult};

// Builder API
pub use builder::{BuildReport, DisabledReport, Platslim};

// Configuration
pub use config::{load_config, load_config_file, parse_config, PlatslimConfig, CONFIG_FILE};

// Source scanning and dependency extraction
pub use depends::{extract_depends, find_depends_set, iterate_depends, ModuleSet};
pub use scan::iterate_projects;

// Platform enumeration
pub use platform::{find_all_modules, get_module_name, module_config_dirs, parse_module_name};

// Properties
pub use properties::{
    parse_properties, read_disabled_modules, read_module_list, read_properties, split_list,
    Properties,
};

// Partitioning
pub use detect::{find_disabled, find_enabled};

// Artifact resolution
pub use artifacts::{artifact_names, find_module_files, ArtifactPair, ModuleFiles};
pub use bucket::{organize_files, Bucket, BucketMap};

// Logging
pub use logging::init_structured_logging;

// Reporting
pub use report::{
    print_buckets_plain, print_disabled_plain, print_json, render_buckets,
    render_disabled_properties,
};

// Traversal
pub use walk::walk_files;
