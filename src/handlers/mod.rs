mod normalize;
mod render;

pub use normalize::NormalizeLinksHandler;
pub use render::{RenderPagesHandler, DEFAULT_BASE_ROOT};
