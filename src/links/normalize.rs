//! Link normalization: every stored link becomes a canonical relative path.
//!
//! Canonical form: forward slashes only, URL-decoded, no leading or trailing
//! separator. External URLs are never touched. Normalization fails closed —
//! when a rewrite would leave fewer than three characters the raw input is
//! returned unchanged, because an over-aggressive strip can destroy a valid
//! short filename and partial data beats a halted generation run.

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::links::dialect::{classify, Dialect};
use crate::types::BoardDocument;

/// Converts raw link strings of any supported dialect into canonical
/// relative paths. Construct once; the UNC prefix patterns are compiled at
/// construction.
pub struct LinkNormalizer {
    /// Network-mount prefixes ordered longest first. The first pattern that
    /// strips wins; real inputs vary in how many share-folder levels precede
    /// the meaningful relative path.
    unc_prefixes: Vec<Regex>,
}

impl LinkNormalizer {
    pub fn new() -> Self {
        let patterns = [
            // \\server\share\folder1\folder2\
            r"^\\\\[^\\]+\\[^\\]+\\[^\\]+\\[^\\]+\\",
            // \\server\share\folder\
            r"^\\\\[^\\]+\\[^\\]+\\[^\\]+\\",
            // \\server\share\
            r"^\\\\[^\\]+\\[^\\]+\\",
        ];
        let unc_prefixes = patterns
            .iter()
            .map(|p| Regex::new(p).expect("static UNC prefix pattern"))
            .collect();
        Self { unc_prefixes }
    }

    /// Normalize one raw link. Returns the raw input unchanged for empty
    /// strings, external URLs, and results that trip the fail-safe.
    pub fn normalize(&self, raw: &str) -> String {
        let mut rest = match classify(raw) {
            Dialect::Empty | Dialect::ExternalUrl => return raw.to_string(),
            Dialect::FileUri => {
                // Strip the URI wrapper and handle the remainder as a path.
                let stripped = &raw["file:///".len()..];
                match classify(stripped) {
                    Dialect::UncAbsolute => self.strip_unc_prefix(stripped),
                    _ => stripped.to_string(),
                }
            }
            Dialect::UncAbsolute => self.strip_unc_prefix(raw),
            Dialect::WindowsRelative | Dialect::ForwardSlashRelative => raw.to_string(),
        };

        rest = rest.replace('\\', "/");

        // Decode failure is non-fatal: keep the pre-decode string.
        if let Ok(decoded) = percent_decode_str(&rest).decode_utf8() {
            rest = decoded.into_owned();
        }

        let trimmed = rest.trim_matches('/');

        if trimmed.chars().count() < 3 {
            log::warn!("link not confidently normalizable, keeping raw: {raw:?}");
            return raw.to_string();
        }
        trimmed.to_string()
    }

    fn strip_unc_prefix(&self, path: &str) -> String {
        for prefix in &self.unc_prefixes {
            if let Some(m) = prefix.find(path) {
                return path[m.end()..].to_string();
            }
        }
        path.to_string()
    }

    /// Rewrite every `link` field of the document in place. Text fields are
    /// never touched.
    pub fn normalize_document(&self, doc: &mut BoardDocument) {
        let mut total = 0usize;
        let mut rewritten = 0usize;
        doc.for_each_link_mut(|link| {
            total += 1;
            let normalized = self.normalize(link);
            if normalized != *link {
                log::debug!("normalized {link:?} -> {normalized:?}");
                *link = normalized;
                rewritten += 1;
            }
        });
        log::debug!("normalized document: {rewritten} of {total} links rewritten");
    }
}

impl Default for LinkNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
