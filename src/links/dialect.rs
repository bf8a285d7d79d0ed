//! Classification of raw link strings into their source dialect.
//!
//! The extracted spreadsheet data mixes several path notations for the same
//! network share, so every other link operation starts by deciding which
//! notation it is looking at. Classification is pure and ordered: the first
//! matching rule wins.

/// The source format family of a raw link string, prior to normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Empty string: nothing to normalize or resolve.
    Empty,
    /// `http://` or `https://` — never rewritten, byte-for-byte pass-through.
    ExternalUrl,
    /// `file:///...` URI wrapping one of the other dialects.
    FileUri,
    /// `\\server\share\...` network share path.
    UncAbsolute,
    /// Contains backslashes but is not UNC, e.g. `INFORMATION\file.pdf`.
    WindowsRelative,
    /// Already forward-slash relative (possibly still URL-encoded).
    ForwardSlashRelative,
}

pub fn classify(raw: &str) -> Dialect {
    if raw.is_empty() {
        Dialect::Empty
    } else if raw.starts_with("http://") || raw.starts_with("https://") {
        Dialect::ExternalUrl
    } else if raw.starts_with("file:///") {
        Dialect::FileUri
    } else if raw.starts_with(r"\\") {
        Dialect::UncAbsolute
    } else if raw.contains('\\') {
        Dialect::WindowsRelative
    } else {
        Dialect::ForwardSlashRelative
    }
}
