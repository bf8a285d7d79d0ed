//! Render static HTML pages from a persisted board document.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::links::OfficeUriResolver;
use crate::renderers::{render_index_page, render_tab_page};
use crate::types::BoardDocument;

/// Default filesystem root that relative Office links resolve against. The
/// share is mounted as H: on the machines the board is browsed from.
pub const DEFAULT_BASE_ROOT: &str = "H:/nev_window/";

pub struct RenderPagesHandler {
    resolver: OfficeUriResolver,
    base_root: String,
}

impl RenderPagesHandler {
    pub fn new(base_root: Option<&str>) -> Self {
        Self {
            resolver: OfficeUriResolver::new(),
            base_root: base_root.unwrap_or(DEFAULT_BASE_ROOT).to_string(),
        }
    }

    /// Load the document read-only and emit the landing page plus one page
    /// per tab into `out_dir`.
    pub async fn render(&self, data_path: &str, out_dir: &str) -> Result<()> {
        let bytes = fs::read(data_path)
            .await
            .with_context(|| format!("reading {data_path}"))?;
        let doc: BoardDocument =
            serde_json::from_slice(&bytes).with_context(|| format!("parsing {data_path}"))?;

        fs::create_dir_all(out_dir)
            .await
            .with_context(|| format!("creating {out_dir}"))?;

        let pages = [
            ("index.html".to_string(), render_index_page(&doc)),
            (
                "all_staff.html".to_string(),
                render_tab_page(
                    &doc.all_staff,
                    &[
                        ("index.html", "トップページ"),
                        ("staff.html", doc.staff.title.as_str()),
                    ],
                    &self.resolver,
                    &self.base_root,
                ),
            ),
            (
                "staff.html".to_string(),
                render_tab_page(
                    &doc.staff,
                    &[
                        ("index.html", "トップページ"),
                        ("all_staff.html", doc.all_staff.title.as_str()),
                    ],
                    &self.resolver,
                    &self.base_root,
                ),
            ),
        ];

        for (name, html) in pages {
            let out_path = Path::new(out_dir).join(&name);
            fs::write(&out_path, html.as_bytes())
                .await
                .with_context(|| format!("writing {}", out_path.display()))?;
            log::debug!("generated {}", out_path.display());
        }

        Ok(())
    }
}
