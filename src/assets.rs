//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BLOG: &str = include_str!("../assets/blog.css");

/// Writes bundled stylesheet to output directory
///
/// Creates the directory when missing and returns the path written.
pub fn write_css_assets(assets_dir: &Path) -> Result<std::path::PathBuf> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;
    let path = assets_dir.join("blog.css");
    fs::write(&path, BLOG).with_context(|| format!("Failed to write CSS asset: {}", path.display()))?;
    Ok(path)
}
