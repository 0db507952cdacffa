use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// One document to convert and where to write its JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Conversion configuration for docx2json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Documents processed in order; the first one must exist
    pub jobs: Vec<ConversionJob>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            jobs: vec![
                ConversionJob::new("Who We Are.docx", "converted_content.json"),
                ConversionJob::new("Biz Kimiz.docx", "converted_content_biz_kimiz.json"),
            ],
        }
    }
}

impl ConversionConfig {
    /// Config with a single ad-hoc job
    pub fn single(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        ConversionConfig {
            jobs: vec![ConversionJob::new(input, output)],
        }
    }

    /// Load config from an explicit path, else the config directory, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file {} does not exist", path.display());
            }
            return Self::load_from(path);
        }

        if let Some(config_path) = Self::get_config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        // Fall back to the built-in job list if no config found
        Ok(ConversionConfig::default())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: ConversionConfig = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Save config to the given path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the path to the user config file
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("docx2json").join("config.toml"))
    }

    /// Write the default config to the user config directory
    pub fn init_default() -> Result<PathBuf> {
        let path = Self::get_config_path().context("No config directory on this platform")?;
        ConversionConfig::default().save_to(&path)?;
        Ok(path)
    }
}
