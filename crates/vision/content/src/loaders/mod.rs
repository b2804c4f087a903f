//! Content loaders for reading vision data from files.
//!
//! Scenes and preset catalogs accept TOML or RON, picked by file extension.
//! Tuning config is TOML only.

pub mod config;
pub mod preset;
pub mod scene;

pub use config::ConfigLoader;
pub use preset::PresetLoader;
pub use scene::SceneLoader;

use std::path::Path;

use serde::de::DeserializeOwned;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Text formats understood by the loaders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DataFormat {
    Toml,
    Ron,
}

impl DataFormat {
    /// Picks the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> LoadResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(DataFormat::Toml),
            Some("ron") => Ok(DataFormat::Ron),
            _ => Err(anyhow::anyhow!(
                "Unsupported file extension for {} (expected .toml or .ron)",
                path.display()
            )),
        }
    }

    /// Deserializes `content`; `what` names the document in error messages.
    pub fn parse<T: DeserializeOwned>(self, content: &str, what: &str) -> LoadResult<T> {
        match self {
            DataFormat::Toml => toml::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {} TOML: {}", what, e)),
            DataFormat::Ron => ron::from_str(content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", what, e)),
        }
    }
}

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Reads and parses `path` in the format its extension names.
pub(crate) fn load_document<T: DeserializeOwned>(path: &Path, what: &str) -> LoadResult<T> {
    let format = DataFormat::from_path(path)?;
    let content = read_file(path)?;
    tracing::debug!(path = %path.display(), %format, "loading {}", what);
    format.parse(&content, what)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            DataFormat::from_path(Path::new("maps/keep.TOML")).unwrap(),
            DataFormat::Toml
        );
        assert_eq!(
            DataFormat::from_path(Path::new("keep.ron")).unwrap(),
            DataFormat::Ron
        );
        let err = DataFormat::from_path(Path::new("keep.json")).unwrap_err();
        assert!(err.to_string().contains("expected .toml or .ron"));
    }
}
