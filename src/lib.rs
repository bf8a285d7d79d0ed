//! boardgen - Generate a static bulletin-board site from structured JSON
//! data, normalizing heterogeneous file-path references into canonical
//! relative links and rewriting Office-document links into native launch URIs.

pub mod handlers;
pub mod links;
pub mod renderers;
pub mod types;

pub use handlers::{NormalizeLinksHandler, RenderPagesHandler, DEFAULT_BASE_ROOT};
pub use links::{classify, Dialect, LinkNormalizer, OfficeUriResolver};
pub use types::{BoardDocument, Item, Section, SectionContent, Subsection, Tab};
