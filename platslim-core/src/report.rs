//! Output formatting - properties fragments, grouped listings and JSON.

use serde_json::json;

use crate::bucket::BucketMap;

/// Renders a module list as a properties entry ready to paste into a
/// properties file, one module per continuation line.
pub fn render_disabled_properties<S: AsRef<str>>(key: &str, modules: &[S]) -> String {
    if modules.is_empty() {
        return format!("{}=\n", key);
    }
    let mut out = format!("{}=\\\n", key);
    let last = modules.len() - 1;
    for (i, module) in modules.iter().enumerate() {
        out.push_str("    ");
        out.push_str(module.as_ref());
        out.push_str(if i == last { "\n" } else { ",\\\n" });
    }
    out
}

/// Renders buckets as each directory followed by its indented file names.
pub fn render_buckets(buckets: &BucketMap) -> String {
    let mut out = String::new();
    for bucket in buckets.iter() {
        out.push_str(&bucket.dir.display().to_string());
        out.push('\n');
        for name in &bucket.files {
            out.push_str("   ");
            out.push_str(name);
            out.push('\n');
        }
    }
    out
}

/// Prints the disabled list as a properties fragment.
pub fn print_disabled_plain<S: AsRef<str>>(key: &str, modules: &[S]) {
    print!("{}", render_disabled_properties(key, modules));
}

/// Prints the grouped build listing.
pub fn print_buckets_plain(buckets: &BucketMap) {
    print!("{}", render_buckets(buckets));
}

/// Prints any serializable report as pretty JSON.
///
/// Falls back to the debug rendering of the error if serialization fails.
pub fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::warn!(error = %e, "JSON serialization failed");
            println!("{}", json!({ "error": e.to_string() }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_render_disabled_properties() {
        let out = render_disabled_properties("disabled.modules", &["org.a", "org.b", "org.c"]);
        assert_eq!(
            out,
            "disabled.modules=\\\n    org.a,\\\n    org.b,\\\n    org.c\n"
        );
    }

    #[test]
    fn test_render_single_and_empty() {
        assert_eq!(
            render_disabled_properties("disabled.modules", &["org.gamma"]),
            "disabled.modules=\\\n    org.gamma\n"
        );
        assert_eq!(
            render_disabled_properties::<&str>("disabled.modules", &[]),
            "disabled.modules=\n"
        );
    }

    #[test]
    fn test_rendered_fragment_reads_back() {
        let modules = ["org.a", "org.b"];
        let text = render_disabled_properties("disabled.modules", &modules);
        let props = crate::properties::parse_properties(&text);
        let back = crate::properties::split_list(&props["disabled.modules"]);
        assert_eq!(back.into_iter().collect::<Vec<_>>(), modules);
    }

    #[test]
    fn test_render_buckets() {
        let buckets = crate::bucket::organize_files(
            &[PathBuf::from("ide/modules/org-a.jar")],
            &[PathBuf::from("ide/config/Modules/org-a.xml")],
        );
        assert_eq!(
            render_buckets(&buckets),
            "ide/modules\n   org-a.jar\nide/config/Modules\n   org-a.xml\n"
        );
    }
}
