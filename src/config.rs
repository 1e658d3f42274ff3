use crate::OutputFormat;
use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub parse: ParseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ParseConfig {
    /// Expect `H:MM:SS` (true) or `H:MM` (false) when no flag says otherwise
    #[serde(default = "default_include_seconds")]
    pub include_seconds: bool,
}

fn default_include_seconds() -> bool {
    true
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            include_seconds: default_include_seconds(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Location of the user config file (`~/.hour/config.toml`)
pub fn default_path() -> Result<PathBuf> {
    let config_dir = home::home_dir()
        .context("Could not find home directory")?
        .join(".hour");
    Ok(config_dir.join("config.toml"))
}

/// Read one TOML file; sections or keys it leaves out take their defaults.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let settings = ConfigBuilder::builder()
        .add_source(File::from(path).format(FileFormat::Toml).required(true))
        .build()
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = settings
        .try_deserialize()
        .with_context(|| format!("Invalid settings in {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        include_seconds = config.parse.include_seconds,
        format = ?config.output.format,
        "loaded config"
    );
    Ok(config)
}

/// Load the user config, falling back to defaults when no file exists.
pub fn load() -> Result<Config> {
    let config_path = default_path()?;

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    load_from_path(&config_path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
