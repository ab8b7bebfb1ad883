use anyhow::Context;
use astro_wheel::config::WheelConfig;
use std::fs;
use std::path::Path;

/// Relative locations searched when no config path is given
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/wheel.toml", "../../configs/wheel.toml"];

/// Try common relative paths for `configs/wheel.toml`.
pub fn read_wheel_toml_text() -> anyhow::Result<String> {
    for p in &DEFAULT_CONFIG_PATHS {
        if let Ok(c) = fs::read_to_string(p) {
            log::debug!("using wheel config at {}", p);
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load wheel.toml from {:?}", DEFAULT_CONFIG_PATHS);
}

pub fn parse_wheel_config(text: &str) -> anyhow::Result<WheelConfig> {
    WheelConfig::from_toml_str(text).map_err(|e| anyhow::anyhow!("Failed to parse wheel.toml: {e}"))
}

/// Load the wheel configuration.
///
/// An explicit path must exist. Without one the default locations are tried and
/// a missing file falls back to the built-in defaults.
pub fn load_wheel_config(path: Option<&Path>) -> anyhow::Result<WheelConfig> {
    let text = match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("Failed to read wheel config {}", p.display()))?,
        None => match read_wheel_toml_text() {
            Ok(text) => text,
            Err(e) => {
                log::debug!("{e}; using built-in defaults");
                return Ok(WheelConfig::default());
            }
        },
    };
    parse_wheel_config(&text)
}
