use crate::operation::Operation;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub type Rgb = (u8, u8, u8);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Operation selected when a session starts.
    pub operation: Operation,
    pub display: DisplayConfig,
    /// Set to false for plain, uncoloured output.
    pub colour: bool,
    pub colours: Colours,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operation: Operation::Add,
            display: DisplayConfig::default(),
            colour: true,
            colours: Colours::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Significant digits shown for non-integral results.
    pub digits: usize,
    pub group_digits: bool,
    pub separator: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            digits: 12,
            group_digits: true,
            separator: ',',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Colours {
    pub active_field: Rgb,
    pub field: Rgb,
    pub unused_field: Rgb,
    pub operation: Rgb,
    pub result: Rgb,
    pub error: Rgb,
    pub message: Rgb,
    pub keypad: Rgb,
}

impl Default for Colours {
    fn default() -> Self {
        Self {
            active_field: (0xDC, 0xF0, 0x32), // Bright yellow
            field: (0xB4, 0xB4, 0xB4),        // Light gray
            unused_field: (0x50, 0x50, 0x50), // Dark gray
            operation: (0xB4, 0xBE, 0x3C),    // Olive green
            result: (0xFF, 0xFF, 0xFF),       // White
            error: (0xDC, 0x64, 0x5A),        // Soft red
            message: (0x78, 0xB4, 0x78),      // Soft green
            keypad: (0x8C, 0x8C, 0xB4),       // Muted blue
        }
    }
}

impl Config {
    /// Default location: `<config dir>/keypadcalc/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keypadcalc").join("config.toml"))
    }

    /// Loads the config from `config_path`, or from [`Config::default_path`]
    /// when none is given. A missing file yields the defaults.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path.or_else(Self::default_path) {
            Some(path) => path,
            None => {
                debug!("no config directory, using defaults");
                return Ok(Config::default());
            }
        };

        if !path.exists() {
            debug!("{} not found, using defaults", path.display());
            return Ok(Config::default());
        }

        let config = Self::from_file(&path)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "operation = \"log\"\n\n[display]\ndigits = 6\n\n[colours]\nerror = [255, 0, 0]"
        )
        .unwrap();

        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.operation, Operation::Log);
        assert_eq!(config.display.digits, 6);
        assert!(config.display.group_digits);
        assert!(config.colour);
        assert_eq!(config.colours.error, (255, 0, 0));
        assert_eq!(config.colours.result, Colours::default().result);
    }

    #[test]
    fn operation_accepts_long_names() {
        let config: Config = toml::from_str("operation = \"modulo\"").unwrap();
        assert_eq!(config.operation, Operation::Modulo);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "operation = \"sqrt\"").unwrap();
        let err = Config::load(Some(file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
