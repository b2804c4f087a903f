//! List the presets of a catalog.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;
use vision_content::Preset;

use super::load_catalog;
use crate::config::CliConfig;

/// List presets with their labels
#[derive(Parser)]
pub struct Presets {
    /// Preset catalog (.toml or .ron); built-in presets when omitted
    #[arg(short, long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Print JSON instead of a list
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct PresetEntry<'a> {
    name: &'a str,
    kind: String,
    distance: i32,
    enabled: bool,
    label: String,
}

impl<'a> PresetEntry<'a> {
    fn new(preset: &'a Preset) -> Self {
        Self {
            name: &preset.name,
            kind: preset.kind.to_string(),
            distance: preset.distance,
            enabled: preset.enabled,
            label: preset.label(),
        }
    }
}

impl Presets {
    pub fn execute(self, env: &CliConfig) -> Result<()> {
        let catalog = load_catalog(self.catalog.as_deref())?;
        let entries: Vec<_> = catalog.iter().map(PresetEntry::new).collect();

        if self.json || env.output_json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        if entries.is_empty() {
            println!("{}", style("No presets defined").yellow());
            return Ok(());
        }
        for entry in &entries {
            let marker = if entry.enabled {
                style("●").green()
            } else {
                style("○").dim()
            };
            println!("{marker} {}", entry.label);
        }
        Ok(())
    }
}
