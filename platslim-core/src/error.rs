//! Typed error handling for platslim.
//!
//! Every failure mode of the tool is fatal for the run, but library
//! consumers still get structured errors they can match on, with the
//! offending path attached wherever there is one.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for platslim operations.
#[derive(Error, Debug)]
pub enum PlatslimError {
    /// I/O error when reading a file
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Directory traversal failed (missing root, unreadable directory)
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A descriptor file is not well-formed XML
    #[error("Malformed XML in {path}: {message}")]
    Xml {
        path: PathBuf,
        message: String,
        /// Line number (1-indexed) if available
        line: Option<u32>,
        /// Column number (1-indexed) if available
        column: Option<u32>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// The source tree produced no module dependencies at all.
    #[error("Found no module dependencies under {root}; is this the application source directory?")]
    NoDependencies { root: PathBuf },

    /// The properties file does not define the requested key.
    #[error("Property '{key}' not found in {path}")]
    MissingProperty { path: PathBuf, key: String },

    /// Requested modules whose archive or config file is absent on disk.
    #[error("Missing platform module files: {}; {}", .archives.join(", "), .configs.join(", "))]
    MissingArtifacts {
        archives: Vec<String>,
        configs: Vec<String>,
    },
}

impl PlatslimError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a traversal error, keeping the path walkdir reported if any.
    pub fn walk(root: impl Into<PathBuf>, err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.into());
        Self::Walk { path, source: err }
    }

    /// Create an XML error from the parser's diagnostic.
    pub fn xml(path: impl Into<PathBuf>, err: &roxmltree::Error) -> Self {
        let pos = err.pos();
        Self::Xml {
            path: path.into(),
            message: err.to_string(),
            line: Some(pos.row),
            column: Some(pos.col),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Walk { path, .. } => Some(path),
            Self::Xml { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            Self::NoDependencies { root } => Some(root),
            Self::MissingProperty { path, .. } => Some(path),
            Self::MissingArtifacts { .. } => None,
        }
    }
}

/// Convenience type alias for platslim results.
pub type PlatslimResult<T> = Result<T, PlatslimError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> PlatslimResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> PlatslimResult<T> {
        self.map_err(|e| PlatslimError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error() {
        let err = PlatslimError::io(
            PathBuf::from("/test/project.xml"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        assert!(matches!(err, PlatslimError::Io { .. }));
        assert_eq!(err.path(), Some(&PathBuf::from("/test/project.xml")));
        assert!(err.to_string().contains("/test/project.xml"));
    }

    #[test]
    fn test_xml_error_carries_position() {
        let parse_err = roxmltree::Document::parse("<project>\n<unclosed></project>").unwrap_err();
        let err = PlatslimError::xml("/src/nbproject/project.xml", &parse_err);
        if let PlatslimError::Xml { line, column, .. } = &err {
            assert_eq!(*line, Some(2));
            assert!(column.is_some());
        } else {
            panic!("Expected Xml error");
        }
    }

    #[test]
    fn test_missing_artifacts_message_lists_both_kinds() {
        let err = PlatslimError::MissingArtifacts {
            archives: vec!["org-alpha.jar".to_string(), "org-beta.jar".to_string()],
            configs: vec!["org-beta.xml".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Missing platform module files: org-alpha.jar, org-beta.jar; org-beta.xml"
        );
        assert!(err.path().is_none());
    }

    #[test]
    fn test_io_result_ext() {
        let result: std::io::Result<()> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"));
        let platslim_result = result.with_path("/missing/platform.properties");
        assert!(platslim_result.is_err());
    }
}
