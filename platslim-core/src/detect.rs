//! Disabled/enabled module partitioning.

use crate::depends::ModuleSet;

/// Platform modules that nothing in the application depends on.
pub fn find_disabled(universe: &ModuleSet, depends: &ModuleSet) -> ModuleSet {
    universe.difference(depends).cloned().collect()
}

/// Platform modules that remain once the disabled ones are removed.
pub fn find_enabled(universe: &ModuleSet, disabled: &ModuleSet) -> ModuleSet {
    universe.difference(disabled).cloned().collect()
}
