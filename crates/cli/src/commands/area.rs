//! Compute a preset's visible region against a scene.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use serde::Serialize;
use vision_content::{ConfigLoader, SceneLoader};
use vision_core::{Region, TokenId, Vision, VisionConfig};

use super::load_catalog;
use crate::config::CliConfig;

/// Compute the region a preset covers in a scene
#[derive(Parser)]
pub struct Area {
    /// Scene file (.toml or .ron)
    #[arg(short, long, value_name = "FILE")]
    scene: PathBuf,

    /// Preset name (exact, or case-insensitive)
    #[arg(short, long, value_name = "NAME")]
    preset: String,

    /// Preset catalog (.toml or .ron); built-in presets when omitted
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Token a facing cone follows
    #[arg(short, long, value_name = "ID")]
    token: Option<u64>,

    /// Tessellation config (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Edges per disk, overrides config file and VISION_DISK_SEGMENTS
    #[arg(long, value_name = "N")]
    disk_segments: Option<u32>,

    /// Print JSON instead of a summary
    #[arg(long)]
    json: bool,
}

/// Serializable description of a computed region.
#[derive(Serialize)]
struct AreaReport {
    preset: String,
    label: String,
    kind: String,
    anchor: String,
    distance: u32,
    enabled: bool,
    area: f64,
    /// `[min_x, min_y, max_x, max_y]`, absent for an empty region.
    bounds: Option<[f64; 4]>,
    polygons: Vec<Vec<[f64; 2]>>,
}

impl AreaReport {
    fn new(preset: &str, vision: &Vision, region: &Region) -> Self {
        Self {
            preset: preset.to_owned(),
            label: vision.label(),
            kind: vision.kind().to_string(),
            anchor: vision.anchor().to_string(),
            distance: vision.distance(),
            enabled: vision.is_enabled(),
            area: region.area(),
            bounds: region
                .bounds()
                .map(|b| [b.min.x, b.min.y, b.max.x, b.max.y]),
            polygons: region
                .polygons()
                .iter()
                .map(|p| p.vertices().iter().map(|v| [v.x, v.y]).collect())
                .collect(),
        }
    }
}

impl Area {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let vision_config = self.resolve_config(env)?;

        let zone = SceneLoader::load(&self.scene)?;
        let catalog = load_catalog(self.catalog.as_deref())?;
        let vision = catalog
            .instantiate(&self.preset, self.token.map(TokenId))
            .with_context(|| format!("Cannot use preset '{}'", self.preset))?;
        let mut vision = vision.with_config(vision_config)?;

        tracing::info!(label = %vision.label(), scene = %self.scene.display(), "computing region");
        let region = vision.area(&zone).clone();
        let report = AreaReport::new(&self.preset, &vision, &region);

        if self.json || env.output_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_summary(&report);
        }
        Ok(())
    }

    /// Config file, then environment, then flag; later sources win.
    fn resolve_config(&self, env: &CliConfig) -> Result<VisionConfig> {
        let base = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => VisionConfig::default(),
        };
        match self.disk_segments.or(env.disk_segments) {
            Some(segments) => VisionConfig::with_disk_segments(segments)
                .context("Invalid disk segment override"),
            None => Ok(base),
        }
    }
}

fn print_summary(report: &AreaReport) {
    println!("{}", style(&report.label).bold());
    println!("  {:<10} {}", style("Strategy:").dim(), report.kind);
    println!("  {:<10} {}", style("Anchor:").dim(), report.anchor);
    if !report.enabled {
        println!("  {}", style("(disabled)").yellow());
    }

    if report.polygons.is_empty() {
        println!("  {}", style("Nothing visible").yellow());
        return;
    }
    println!("  {:<10} {}", style("Pieces:").dim(), report.polygons.len());
    println!("  {:<10} {:.2}", style("Area:").dim(), report.area);
    if let Some([min_x, min_y, max_x, max_y]) = report.bounds {
        println!(
            "  {:<10} ({:.2}, {:.2}) .. ({:.2}, {:.2})",
            style("Bounds:").dim(),
            min_x,
            min_y,
            max_x,
            max_y
        );
    }
}
