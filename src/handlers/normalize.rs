//! Normalize link fields of a persisted board document in place.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

use crate::links::LinkNormalizer;
use crate::types::BoardDocument;

pub struct NormalizeLinksHandler {
    normalizer: LinkNormalizer,
}

impl NormalizeLinksHandler {
    pub fn new() -> Self {
        Self {
            normalizer: LinkNormalizer::new(),
        }
    }

    /// Load the document at `data_path`, take a backup copy, rewrite every
    /// link field, and atomically replace the file. A missing input file is
    /// the only fatal condition; per-link anomalies degrade to pass-through
    /// inside the normalizer.
    pub async fn normalize(&self, data_path: &str) -> Result<()> {
        let path = Path::new(data_path);
        if !fs::try_exists(path).await.unwrap_or(false) {
            anyhow::bail!("input file not found: {}", path.display());
        }

        let backup_path = suffixed(path, "backup");
        fs::copy(path, &backup_path)
            .await
            .with_context(|| format!("writing backup {}", backup_path.display()))?;
        log::debug!("backup created: {}", backup_path.display());

        let bytes = fs::read(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let mut doc: BoardDocument = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing {}", path.display()))?;

        self.normalizer.normalize_document(&mut doc);

        let json = serde_json::to_string_pretty(&doc).context("serializing document")?;

        // Write a sibling temp file and rename over the original so an
        // interrupted run never leaves a truncated document behind.
        let tmp_path = suffixed(path, "tmp");
        fs::write(&tmp_path, json.as_bytes())
            .await
            .with_context(|| format!("writing {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path)
            .await
            .with_context(|| format!("replacing {}", path.display()))?;

        log::debug!("normalized links written to {}", path.display());
        Ok(())
    }
}

impl Default for NormalizeLinksHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn suffixed(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data.json".to_string());
    name.push('.');
    name.push_str(suffix);
    path.with_file_name(name)
}
