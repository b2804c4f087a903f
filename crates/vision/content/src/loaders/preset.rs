//! Vision preset catalog loader.

use std::path::Path;

use crate::catalog::PresetCatalog;
use crate::loaders::{DataFormat, LoadResult, load_document};

/// Loader for preset catalogs from TOML or RON files.
///
/// TOML:
///
/// ```toml
/// [[presets]]
/// name = "Darkvision"
/// kind = "blocky_round"
/// distance = 60
/// ```
///
/// RON: `(presets: [(name: "Lantern", kind: facing_conic, distance: 30)])`
pub struct PresetLoader;

impl PresetLoader {
    /// Load a catalog, choosing TOML or RON from the file extension.
    pub fn load(path: &Path) -> LoadResult<PresetCatalog> {
        let catalog: PresetCatalog = load_document(path, "preset catalog")?;
        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid preset catalog {}: {}", path.display(), e))?;
        tracing::debug!(presets = catalog.len(), "loaded preset catalog");
        Ok(catalog)
    }

    /// Parse a catalog from text in the given format.
    pub fn parse(content: &str, format: DataFormat) -> LoadResult<PresetCatalog> {
        let catalog: PresetCatalog = format.parse(content, "preset catalog")?;
        catalog
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid preset catalog: {}", e))?;
        Ok(catalog)
    }
}
