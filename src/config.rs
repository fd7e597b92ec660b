//! Validated settings record for the surrounding comparison tool.
//!
//! Covers the perceptual-metric knobs (field of view, gamma, luminance,
//! per-pixel threshold, color factor) plus the pyramid depth. Settings come
//! either from CLI arguments (both `--opt` and `-opt` spellings are accepted)
//! or from a JSON file via `--config`. Image paths and decoding are handled
//! elsewhere.

use crate::pyramid::DEFAULT_LEVELS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const USAGE: &str = "Options:
 --verbose        Turn on verbose mode
 --fov deg        Field of view in degrees (0.1 to 89.9)
 --threshold p    Number of pixels p below which differences are ignored
 --gamma g        Value to convert rgb into linear space (default 2.2)
 --luminance l    White luminance (default 100.0 cd m^-2)
 --luminanceonly  Only consider luminance; ignore chroma
 --colorfactor f  How much of color to use, 0.0 to 1.0
 --sum-errors     Print a sum of the luminance and color differences
 --output o.ppm   Write difference to the file o.ppm
 --maxlevels n    Maximum number of pyramid levels (default 8)
 --config c.json  Load all settings from a JSON file
";

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompareConfig {
    pub verbose: bool,
    pub field_of_view: f32,
    pub gamma: f32,
    pub threshold_pixels: u32,
    pub luminance: f32,
    pub luminance_only: bool,
    pub color_factor: f32,
    pub sum_errors: bool,
    pub output: Option<PathBuf>,
    pub max_levels: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            field_of_view: 45.0,
            gamma: 2.2,
            threshold_pixels: 100,
            luminance: 100.0,
            luminance_only: false,
            color_factor: 1.0,
            sum_errors: false,
            output: None,
            max_levels: DEFAULT_LEVELS,
        }
    }
}

impl CompareConfig {
    /// Range checks shared by the CLI and config-file paths.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.1..=89.9).contains(&self.field_of_view) {
            return Err(format!(
                "field of view must be in 0.1 to 89.9 degrees, got {}",
                self.field_of_view
            ));
        }
        if self.gamma <= 0.0 {
            return Err(format!("gamma must be positive, got {}", self.gamma));
        }
        if self.luminance <= 0.0 {
            return Err(format!("luminance must be positive, got {}", self.luminance));
        }
        if !(0.0..=1.0).contains(&self.color_factor) {
            return Err(format!(
                "color factor must be in 0.0 to 1.0, got {}",
                self.color_factor
            ));
        }
        if self.max_levels == 0 {
            return Err("maxlevels must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Load the whole settings record from a JSON file.
pub fn load_config(path: &Path) -> Result<CompareConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: CompareConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// Parse CLI arguments (program name already stripped).
pub fn parse_cli<I>(args: I) -> Result<CompareConfig, String>
where
    I: IntoIterator<Item = String>,
{
    let mut config = CompareConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if option_matches(&arg, "fov") {
            config.field_of_view = parse_value(&mut args, "fov")?;
        } else if option_matches(&arg, "verbose") {
            config.verbose = true;
        } else if option_matches(&arg, "threshold") {
            config.threshold_pixels = parse_value(&mut args, "threshold")?;
        } else if option_matches(&arg, "gamma") {
            config.gamma = parse_value(&mut args, "gamma")?;
        } else if option_matches(&arg, "maxlevels") {
            config.max_levels = parse_value(&mut args, "maxlevels")?;
        } else if option_matches(&arg, "luminance") {
            config.luminance = parse_value(&mut args, "luminance")?;
        } else if option_matches(&arg, "luminanceonly") {
            config.luminance_only = true;
        } else if option_matches(&arg, "sum-errors") {
            config.sum_errors = true;
        } else if option_matches(&arg, "colorfactor") {
            config.color_factor = parse_value(&mut args, "colorfactor")?;
        } else if option_matches(&arg, "output") {
            let path: String = parse_value(&mut args, "output")?;
            config.output = Some(PathBuf::from(path));
        } else if option_matches(&arg, "config") {
            let path: String = parse_value(&mut args, "config")?;
            config = load_config(Path::new(&path))?;
        } else {
            return Err(format!("Unknown option {arg}\n\n{USAGE}"));
        }
    }

    config.validate()?;
    Ok(config)
}

fn option_matches(arg: &str, name: &str) -> bool {
    arg == format!("--{name}") || arg == format!("-{name}")
}

fn parse_value<I, T>(args: &mut I, name: &str) -> Result<T, String>
where
    I: Iterator<Item = String>,
    T: FromStr,
{
    let raw = args
        .next()
        .ok_or_else(|| format!("Missing value for option {name}"))?;
    raw.parse()
        .map_err(|_| format!("Invalid value for option {name}: {raw}"))
}
