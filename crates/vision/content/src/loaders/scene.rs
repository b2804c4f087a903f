//! Scene loader.
//!
//! A scene is the zone a vision is computed against: grid, distance scale
//! and the tokens facing cones can follow.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vision_core::{Grid, GridSize, HexOrientation, Token, ZoneSnapshot};

use crate::loaders::{DataFormat, LoadResult, load_document};

/// Grid family as written in scene files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum GridKindSpec {
    #[default]
    Square,
    Hex,
    Gridless,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GridSpec {
    #[serde(default)]
    kind: GridKindSpec,
    #[serde(default = "default_grid_size")]
    size: u32,
    #[serde(default)]
    orientation: HexOrientation,
}

impl GridSpec {
    fn into_grid(self) -> Grid {
        match self.kind {
            GridKindSpec::Square => Grid::square(self.size),
            GridKindSpec::Hex => Grid::hex(self.size, self.orientation),
            GridKindSpec::Gridless => Grid::gridless(self.size),
        }
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            kind: GridKindSpec::default(),
            size: default_grid_size(),
            orientation: HexOrientation::default(),
        }
    }
}

/// Scene structure for TOML/RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SceneFile {
    #[serde(default)]
    grid: GridSpec,
    #[serde(default = "default_units_per_cell")]
    units_per_cell: u32,
    #[serde(default)]
    tokens: Vec<Token>,
}

const fn default_grid_size() -> u32 {
    GridSize::DEFAULT
}

const fn default_units_per_cell() -> u32 {
    ZoneSnapshot::DEFAULT_UNITS_PER_CELL
}

/// Loader for scenes from TOML or RON files.
pub struct SceneLoader;

impl SceneLoader {
    /// Load a scene, choosing TOML or RON from the file extension.
    ///
    /// Grid sizes outside the supported range are clamped; duplicate token
    /// ids and a zero distance scale are rejected.
    pub fn load(path: &Path) -> LoadResult<ZoneSnapshot> {
        let scene: SceneFile = load_document(path, "scene")?;
        Self::build(scene)
            .map_err(|e| anyhow::anyhow!("Invalid scene {}: {}", path.display(), e))
    }

    /// Parse a scene from text in the given format.
    pub fn parse(content: &str, format: DataFormat) -> LoadResult<ZoneSnapshot> {
        let scene: SceneFile = format.parse(content, "scene")?;
        Self::build(scene)
    }

    fn build(scene: SceneFile) -> LoadResult<ZoneSnapshot> {
        if scene.units_per_cell == 0 {
            anyhow::bail!("units_per_cell must be at least 1");
        }
        if scene.grid.size < GridSize::MIN || scene.grid.size > GridSize::MAX {
            tracing::warn!(
                size = scene.grid.size,
                min = GridSize::MIN,
                max = GridSize::MAX,
                "grid size out of range, clamping"
            );
        }

        let mut seen = BTreeSet::new();
        let mut zone = ZoneSnapshot::new(scene.grid.into_grid())
            .with_units_per_cell(scene.units_per_cell);
        for token in scene.tokens {
            if !seen.insert(token.id) {
                anyhow::bail!("duplicate token id {}", token.id);
            }
            zone.insert_token(token);
        }
        Ok(zone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vision_core::{TokenId, ZoneOracle};

    #[test]
    fn defaults_fill_missing_sections() {
        let zone = SceneLoader::parse("", DataFormat::Toml).unwrap();
        assert_eq!(zone.grid, Grid::square(50));
        assert_eq!(zone.units_per_cell, 5);
        assert_eq!(zone.tokens().count(), 0);
    }

    #[test]
    fn duplicate_token_ids_are_rejected() {
        let toml = r#"
            [[tokens]]
            id = 3

            [[tokens]]
            id = 3
            facing = 90
        "#;
        let err = SceneLoader::parse(toml, DataFormat::Toml).unwrap_err();
        assert_eq!(err.to_string(), "duplicate token id #3");
    }

    #[test]
    fn oversized_grid_is_clamped() {
        let zone = SceneLoader::parse("grid = { size = 1000 }", DataFormat::Toml).unwrap();
        assert_eq!(zone.grid().size(), GridSize::MAX);
    }

    #[test]
    fn ron_scene_with_hex_grid() {
        let ron = r#"(
            grid: (kind: hex, size: 60, orientation: horizontal),
            units_per_cell: 10,
            tokens: [(id: 1, facing: Some(45))],
        )"#;
        let zone = SceneLoader::parse(ron, DataFormat::Ron).unwrap();
        assert_eq!(zone.grid, Grid::hex(60, HexOrientation::Horizontal));
        assert_eq!(zone.points_per_cell(), 6);
        assert_eq!(zone.token(TokenId(1)).and_then(|t| t.facing), Some(45));
    }

    #[test]
    fn zero_units_per_cell_is_rejected() {
        assert!(SceneLoader::parse("units_per_cell = 0", DataFormat::Toml).is_err());
    }
}
