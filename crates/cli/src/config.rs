//! CLI settings read from the process environment.
use std::env;

/// Defaults for command flags, taken from the environment.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub disk_segments: Option<u32>,
    pub output_json: bool,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `VISION_DISK_SEGMENTS` - Edges per disk (default: 64)
    /// - `VISION_OUTPUT_JSON` - Print JSON instead of text (default: false)
    pub fn from_env() -> Self {
        let mut config = Self {
            disk_segments: read_env::<u32>("VISION_DISK_SEGMENTS"),
            ..Self::default()
        };

        if let Some(json) = read_env::<bool>("VISION_OUTPUT_JSON") {
            config.output_json = json;
        } else if env::var("VISION_OUTPUT_JSON").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.output_json = true;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
