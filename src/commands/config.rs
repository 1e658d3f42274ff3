use crate::config::Config;
use anyhow::{Context, Result};
use std::path::Path;

/// Effective settings as TOML, headed by the file they would be read from
pub fn render_list(config: &Config, source: &Path) -> Result<String> {
    let body = toml::to_string_pretty(config).context("Failed to serialize config")?;
    let origin = if source.exists() { "" } else { " (not found, defaults)" };
    Ok(format!("# {}{}\n{}", source.display(), origin, body))
}

pub fn list(config: &Config, source: &Path) -> Result<()> {
    print!("{}", render_list(config, source)?);
    Ok(())
}

/// Look up a dotted key such as `parse.include_seconds`
pub fn lookup(key: &str, config: &Config) -> Result<String> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .with_context(|| format!("Key not found: {}", part))?;
    }

    Ok(match current {
        serde_json::Value::String(s) => s.clone(),
        v => v.to_string(),
    })
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    println!("{}", lookup(key, config)?);
    Ok(())
}
