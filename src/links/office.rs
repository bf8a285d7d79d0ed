//! Office launch URIs: rewrite document links so the OS opens them in the
//! native application instead of downloading a copy.
//!
//! Uses the `ofv` (Office File View) verb so files open read-only without a
//! security prompt; users can enable editing from inside the application.
//! Resolution happens per render and is never persisted back into the
//! document.

use std::collections::HashMap;

/// Extension → URI scheme table used by default. Keys are lowercase, no dot.
const OFFICE_SCHEMES: [(&str, &str); 10] = [
    ("xlsx", "ms-excel:ofv|u|"),
    ("xls", "ms-excel:ofv|u|"),
    ("xlsm", "ms-excel:ofv|u|"),
    ("xlsb", "ms-excel:ofv|u|"),
    ("docx", "ms-word:ofv|u|"),
    ("doc", "ms-word:ofv|u|"),
    ("docm", "ms-word:ofv|u|"),
    ("pptx", "ms-powerpoint:ofv|u|"),
    ("ppt", "ms-powerpoint:ofv|u|"),
    ("pptm", "ms-powerpoint:ofv|u|"),
];

/// Maps Office-document links to platform launch URIs; everything else
/// passes through unchanged. Pure and stateless apart from the scheme table
/// fixed at construction.
pub struct OfficeUriResolver {
    schemes: HashMap<String, String>,
}

impl OfficeUriResolver {
    pub fn new() -> Self {
        Self::with_schemes(
            OFFICE_SCHEMES
                .iter()
                .map(|(ext, scheme)| ((*ext).to_string(), (*scheme).to_string())),
        )
    }

    /// Build a resolver over an alternate extension table.
    pub fn with_schemes<I: IntoIterator<Item = (String, String)>>(table: I) -> Self {
        Self {
            schemes: table.into_iter().collect(),
        }
    }

    /// Resolve one link against `base_root`. Non-Office links, external
    /// URLs, and empty strings come back unchanged; Office links become
    /// `<scheme><absolute path with backslashes>`.
    pub fn resolve(&self, link: &str, base_root: &str) -> String {
        if link.is_empty() || link.starts_with("http://") || link.starts_with("https://") {
            return link.to_string();
        }

        let Some(scheme) = self.scheme_for(link) else {
            return link.to_string();
        };

        // file:/// links already name an absolute location once unwrapped.
        let (mut path, from_file_uri) = match link.strip_prefix("file:///") {
            Some(rest) => (rest.to_string(), true),
            None => (link.to_string(), false),
        };
        if !from_file_uri && !is_absolute_path(&path) {
            let root = base_root.trim_end_matches(['/', '\\']);
            path = format!("{root}/{path}");
        }

        // The launch scheme expects native Windows path syntax.
        format!("{scheme}{}", path.replace('/', "\\"))
    }

    fn scheme_for(&self, link: &str) -> Option<&str> {
        let segment = link.rsplit(['/', '\\']).next()?;
        let (_, ext) = segment.rsplit_once('.')?;
        self.schemes.get(&ext.to_lowercase()).map(String::as_str)
    }
}

impl Default for OfficeUriResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Drive-style (`H:\` or `H:/`) or UNC prefixes already name an absolute
/// location and must not get the base root prepended.
fn is_absolute_path(path: &str) -> bool {
    let mut chars = path.chars();
    let drive = matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(d), Some(':'), Some('/' | '\\')) if d.is_ascii_alphabetic()
    );
    drive || path.starts_with(r"\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "H:/nev_window/";

    #[test]
    fn excel_link_gets_scheme_and_backslash_path() {
        let resolver = OfficeUriResolver::new();
        assert_eq!(
            resolver.resolve("reports/budget.xlsx", BASE),
            r"ms-excel:ofv|u|H:\nev_window\reports\budget.xlsx"
        );
    }

    #[test]
    fn word_and_powerpoint_schemes() {
        let resolver = OfficeUriResolver::new();
        assert!(resolver
            .resolve("a/b.docx", BASE)
            .starts_with("ms-word:ofv|u|"));
        assert!(resolver
            .resolve("a/b.PPTX", BASE)
            .starts_with("ms-powerpoint:ofv|u|"));
    }

    #[test]
    fn non_office_extension_passes_through() {
        let resolver = OfficeUriResolver::new();
        assert_eq!(resolver.resolve("notes/readme.txt", BASE), "notes/readme.txt");
        assert_eq!(
            resolver.resolve("共通コーナー/NEV 組織.pdf", BASE),
            "共通コーナー/NEV 組織.pdf"
        );
    }

    #[test]
    fn external_and_empty_links_pass_through() {
        let resolver = OfficeUriResolver::new();
        let url = "https://example.com/sheet.xlsx";
        assert_eq!(resolver.resolve(url, BASE), url);
        assert_eq!(resolver.resolve("", BASE), "");
    }

    #[test]
    fn absolute_paths_skip_the_base_root() {
        let resolver = OfficeUriResolver::new();
        assert_eq!(
            resolver.resolve("H:/archive/plan.xlsx", BASE),
            r"ms-excel:ofv|u|H:\archive\plan.xlsx"
        );
        assert_eq!(
            resolver.resolve(r"\\server\share\plan.xlsx", BASE),
            r"ms-excel:ofv|u|\\server\share\plan.xlsx"
        );
    }

    #[test]
    fn file_uri_prefix_is_stripped_before_resolving() {
        let resolver = OfficeUriResolver::new();
        assert_eq!(
            resolver.resolve("file:///H:/archive/plan.xlsx", BASE),
            r"ms-excel:ofv|u|H:\archive\plan.xlsx"
        );
    }

    #[test]
    fn different_base_roots_give_different_uris() {
        let resolver = OfficeUriResolver::new();
        let a = resolver.resolve("plan.xlsx", "H:/one/");
        let b = resolver.resolve("plan.xlsx", "H:/two/");
        assert_ne!(a, b);
    }

    #[test]
    fn alternate_scheme_table_is_injectable() {
        let resolver = OfficeUriResolver::with_schemes([(
            "pdf".to_string(),
            "test-viewer:|".to_string(),
        )]);
        assert!(resolver.resolve("a/b.pdf", BASE).starts_with("test-viewer:|"));
        assert_eq!(resolver.resolve("a/b.xlsx", BASE), "a/b.xlsx");
    }

    #[test]
    fn extensionless_final_segment_passes_through() {
        let resolver = OfficeUriResolver::new();
        assert_eq!(resolver.resolve("folder.xlsx/readme", BASE), "folder.xlsx/readme");
    }
}
