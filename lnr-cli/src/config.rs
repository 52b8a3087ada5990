// ABOUTME: Configuration file loading and merging for the lnr CLI
// ABOUTME: Supports TOML config files with XDG Base Directory discovery

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

use crate::estimates::EstimateScale;

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    /// API endpoint base override, mainly for self-hosted proxies.
    #[serde(default)]
    pub api_url: Option<String>,
    /// Estimate scale to render: none, tshirt, fibonacci, or points.
    #[serde(default, deserialize_with = "validate_scale")]
    pub estimate_scale: Option<String>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations.
    pub fn load() -> Result<Self> {
        let paths = Self::get_config_paths();
        Self::load_from_paths(&paths.iter().map(|p| p.as_str()).collect::<Vec<_>>())
    }

    /// Load configuration from specific file paths, later paths overriding
    /// earlier ones. Missing files are skipped; a file that exists but does
    /// not parse is an error, never silently dropped.
    pub fn load_from_paths(paths: &[&str]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            if !Path::new(path).exists() {
                continue;
            }
            let file_config = Self::load_from_file(path)?;
            config = config.merge(file_config);
        }

        Ok(config)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        Ok(config)
    }

    /// Standard config file paths, lowest precedence first.
    pub fn get_config_paths() -> Vec<String> {
        let mut paths = Vec::new();

        if let Some(home_dir) = dirs::home_dir() {
            let path = home_dir.join(".config").join("lnr").join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            let path = PathBuf::from(config_home).join("lnr").join("config.toml");
            paths.push(path.to_string_lossy().to_string());
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config.
    pub fn merge(self, other: Config) -> Config {
        Config {
            api_url: other.api_url.or(self.api_url),
            estimate_scale: other.estimate_scale.or(self.estimate_scale),
        }
    }

    pub fn scale(&self) -> EstimateScale {
        self.estimate_scale
            .as_deref()
            .and_then(EstimateScale::from_name)
            .unwrap_or_default()
    }
}

// Custom deserializer so an unknown scale name fails at load time
fn validate_scale<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let value: Option<String> = Option::deserialize(deserializer)?;

    if let Some(ref scale) = value {
        if EstimateScale::from_name(scale).is_none() {
            return Err(D::Error::custom(format!(
                "Invalid estimate_scale '{}'. Must be one of: {}",
                scale,
                EstimateScale::NAMES.join(", ")
            )));
        }
    }

    Ok(value)
}
