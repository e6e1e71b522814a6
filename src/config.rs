use crate::constants::paths;
use anyhow::{bail, Context, Result};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_glyph")]
    pub glyph: String,
    #[serde(default = "default_top_color")]
    pub top_color: String,
    #[serde(default = "default_bottom_color")]
    pub bottom_color: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_glyph() -> String {
    "W".to_string()
}

fn default_top_color() -> String {
    "#8B5CF6".to_string() // violet
}

fn default_bottom_color() -> String {
    "#EC4899".to_string() // pink
}

fn default_output_dir() -> String {
    paths::OUTPUT_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            glyph: default_glyph(),
            top_color: default_top_color(),
            bottom_color: default_bottom_color(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Load `icon.yaml` from the working directory, falling back to defaults
    /// when the file is absent. The tools must run with zero setup, so a
    /// missing file is not an error and is never auto-created.
    pub fn load_or_default() -> Result<Self> {
        Self::load_from(Path::new(paths::CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let glyph_chars = self.glyph.chars().count();
        if glyph_chars == 0 {
            bail!("glyph cannot be empty");
        }
        if glyph_chars > 1 {
            bail!("glyph must be a single character, got {:?}", self.glyph);
        }

        parse_hex_color(&self.top_color)
            .with_context(|| format!("invalid top_color {:?}", self.top_color))?;
        parse_hex_color(&self.bottom_color)
            .with_context(|| format!("invalid bottom_color {:?}", self.bottom_color))?;

        if self.output_dir.is_empty() {
            bail!("output_dir cannot be empty");
        }

        Ok(())
    }

    pub fn glyph_char(&self) -> char {
        // validate() guarantees exactly one char
        self.glyph.chars().next().unwrap_or('W')
    }

    pub fn top_color(&self) -> Result<Rgba<u8>> {
        parse_hex_color(&self.top_color)
            .with_context(|| format!("invalid top_color {:?}", self.top_color))
    }

    pub fn bottom_color(&self) -> Result<Rgba<u8>> {
        parse_hex_color(&self.bottom_color)
            .with_context(|| format!("invalid bottom_color {:?}", self.bottom_color))
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.output_dir)
    }
}

/// Parse an opaque `#RRGGBB` color.
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>> {
    let hex = s
        .strip_prefix('#')
        .with_context(|| format!("color {s:?} must start with '#'"))?;
    if hex.len() != 6 {
        bail!("color {s:?} must be #RRGGBB");
    }

    let r = u8::from_str_radix(&hex[0..2], 16).context("invalid red component")?;
    let g = u8::from_str_radix(&hex[2..4], 16).context("invalid green component")?;
    let b = u8::from_str_radix(&hex[4..6], 16).context("invalid blue component")?;

    Ok(Rgba([r, g, b, 255]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.glyph_char(), 'W');
        assert_eq!(config.output_dir, "build");
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#8B5CF6").unwrap(), Rgba([139, 92, 246, 255]));
        assert_eq!(parse_hex_color("#EC4899").unwrap(), Rgba([236, 72, 153, 255]));
        assert_eq!(parse_hex_color("#000000").unwrap(), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_hex_color("8B5CF6").is_err()); // missing '#'
        assert!(parse_hex_color("#8B5C").is_err()); // too short
        assert!(parse_hex_color("#8B5CF6FF").is_err()); // alpha not supported
        assert!(parse_hex_color("#GGGGGG").is_err()); // not hex
    }

    #[test]
    fn rejects_invalid_glyph() {
        let mut config = Config::default();
        config.glyph = String::new();
        assert!(config.validate().is_err());

        config.glyph = "WA".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_empty_output_dir() {
        let mut config = Config::default();
        config.output_dir = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("glyph: \"A\"").unwrap();
        assert_eq!(config.glyph, "A");
        assert_eq!(config.top_color, "#8B5CF6");
        assert_eq!(config.output_dir, "build");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("icon.yaml")).unwrap();
        assert_eq!(config.glyph, "W");
    }

    #[test]
    fn invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.yaml");
        std::fs::write(&path, "glyph: \"\"\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
