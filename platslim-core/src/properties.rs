//! Reader for the properties-file dialect used by the suite configuration.
//!
//! Three rules only: `#` starts a comment line, a trailing backslash
//! continues the logical line onto the next physical line, and the first
//! `=` separates key from value. Keys are lowercased.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::depends::ModuleSet;
use crate::error::{IoResultExt, PlatslimError, PlatslimResult};

/// Parsed properties, keyed by lowercased name.
pub type Properties = BTreeMap<String, String>;

/// An odd number of trailing backslashes marks a continuation; an even
/// number is a run of escaped backslashes.
fn continues(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Joins physical lines into logical lines, dropping comments and blanks.
fn logical_lines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Option<String> = None;

    for raw in text.lines() {
        // Leading whitespace of a continuation line is not part of the value.
        let line = raw.trim_start();
        if current.is_none() && (line.is_empty() || line.starts_with('#')) {
            continue;
        }

        let (body, more) = if continues(line) {
            (&line[..line.len() - 1], true)
        } else {
            (line, false)
        };

        let acc = current.get_or_insert_with(String::new);
        acc.push_str(body);
        if !more {
            if let Some(done) = current.take() {
                out.push(done);
            }
        }
    }

    // A continuation on the last line simply ends the value.
    if let Some(done) = current {
        out.push(done);
    }
    out
}

/// Parses properties text into a key/value map.
///
/// A key appearing twice keeps its last value. A line without `=` is a key
/// with an empty value.
pub fn parse_properties(text: &str) -> Properties {
    logical_lines(text)
        .into_iter()
        .map(|line| match line.split_once('=') {
            Some((key, value)) => (key.trim().to_lowercase(), value.trim().to_string()),
            None => (line.trim().to_lowercase(), String::new()),
        })
        .collect()
}

/// Reads and parses a properties file.
pub fn read_properties(path: &Path) -> PlatslimResult<Properties> {
    let text = fs::read_to_string(path).with_path(path)?;
    Ok(parse_properties(&text))
}

/// Splits a comma-separated list value into its trimmed, non-empty elements.
pub fn split_list(value: &str) -> ModuleSet {
    value
        .split(',')
        .map(|item| item.trim_matches(|c: char| c == '\\' || c.is_whitespace()))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the module list stored under `key`, or `None` when the key is absent.
pub fn read_module_list(path: &Path, key: &str) -> PlatslimResult<Option<ModuleSet>> {
    let props = read_properties(path)?;
    Ok(props.get(&key.to_lowercase()).map(|v| split_list(v)))
}

/// Reads the disabled-modules list; an absent key is an error.
pub fn read_disabled_modules(path: &Path, key: &str) -> PlatslimResult<ModuleSet> {
    let disabled = read_module_list(path, key)?.ok_or_else(|| PlatslimError::MissingProperty {
        path: path.to_path_buf(),
        key: key.to_string(),
    })?;
    tracing::debug!(path = %path.display(), disabled = disabled.len(), "read disabled modules");
    Ok(disabled)
}
