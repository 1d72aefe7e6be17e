//! XML parsing shared by the descriptor readers.

use std::path::Path;

use roxmltree::{Document, ParsingOptions};

use crate::error::{PlatslimError, PlatslimResult};

/// Parses descriptor XML, accepting a DOCTYPE declaration.
///
/// `path` is only used for error reporting.
pub fn parse_document<'a>(path: &Path, content: &'a str) -> PlatslimResult<Document<'a>> {
    let mut opts = ParsingOptions::default();
    opts.allow_dtd = true;
    Document::parse_with_options(content, opts).map_err(|e| PlatslimError::xml(path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctype_accepted() {
        let doc = parse_document(
            Path::new("project.xml"),
            "<?xml version=\"1.0\"?>\n<!DOCTYPE project>\n<project/>",
        )
        .unwrap();
        assert_eq!(doc.root_element().tag_name().name(), "project");
    }

    #[test]
    fn test_malformed_is_xml_error() {
        let err = parse_document(Path::new("bad.xml"), "<project>").unwrap_err();
        assert!(matches!(err, PlatslimError::Xml { .. }));
    }
}
