//! The link engine: dialect detection, normalization, Office launch URIs.

mod dialect;
mod normalize;
mod office;

pub use dialect::{classify, Dialect};
pub use normalize::LinkNormalizer;
pub use office::OfficeUriResolver;
