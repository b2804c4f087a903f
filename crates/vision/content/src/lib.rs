//! Data-driven vision content and loaders.
//!
//! This crate provides named vision presets and loaders for RON/TOML data files:
//! - Scenes: grid, distance scale and tokens (TOML or RON)
//! - Preset catalogs: named visions with a strategy and distance (TOML or RON)
//! - Region tessellation settings (TOML)
//!
//! Loaded data is turned into `vision-core` types; nothing here computes regions.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{Preset, PresetCatalog, PresetError};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, DataFormat, PresetLoader, SceneLoader};
