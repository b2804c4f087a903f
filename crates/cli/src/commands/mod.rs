//! Subcommands of the `vision` binary.

mod area;
mod presets;

pub use area::Area;
pub use presets::Presets;

use std::path::Path;

use anyhow::Result;
use vision_content::{PresetCatalog, PresetLoader};

/// Loads `path`, or the built-in catalog when none is given.
fn load_catalog(path: Option<&Path>) -> Result<PresetCatalog> {
    match path {
        Some(path) => PresetLoader::load(path),
        None => Ok(PresetCatalog::builtin()),
    }
}
