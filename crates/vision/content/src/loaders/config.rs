//! Region tessellation config loader.

use std::path::Path;

use vision_core::VisionConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`VisionConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`VisionConfig::default`]; the result is
    /// validated before it is returned.
    pub fn load(path: &Path) -> LoadResult<VisionConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<VisionConfig> {
        let config: VisionConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid vision config: {}", e))?;
        Ok(config)
    }
}
