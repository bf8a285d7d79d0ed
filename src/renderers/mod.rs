//! HTML emission over the document model.

mod escape;
mod page;

pub use escape::escape_html;
pub use page::{render_index_page, render_tab_page};
