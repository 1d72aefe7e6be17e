//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use platslim_core::prelude::*;
//! ```

// Core types
pub use crate::depends::ModuleSet;
pub use crate::error::{PlatslimError, PlatslimResult};

// Builder API
pub use crate::builder::{BuildReport, DisabledReport, Platslim};

// Configuration
pub use crate::config::{load_config, PlatslimConfig};

// Output
pub use crate::report::{print_buckets_plain, print_disabled_plain, print_json};
