//! YAML configuration files
//!
//! Used for `PadConfig`, but generic over any serde type with a default so
//! a broken file never stops the pad from starting.

use std::any::type_name;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Load configuration, falling back to `T::default()`
///
/// A missing file is normal on first run. A file that can't be read or
/// parsed is reported with a warning and otherwise ignored.
pub fn load_config<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    if !path.exists() {
        log::info!("load_config: No config at {:?}, using defaults", path);
        return T::default();
    }

    match read_config(path) {
        Ok(config) => {
            log::info!("load_config: Loaded {:?}", path);
            config
        }
        Err(e) => {
            log::warn!(
                "load_config: {:#}; using default {}",
                e,
                short_type_name::<T>()
            );
            T::default()
        }
    }
}

/// Write configuration as YAML, creating parent directories
pub fn save_config<T>(config: &T, path: &Path) -> Result<()>
where
    T: Serialize,
{
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config)
        .with_context(|| format!("Failed to encode {}", short_type_name::<T>()))?;
    std::fs::write(path, yaml).with_context(|| format!("Failed to write config: {:?}", path))?;

    log::info!("save_config: Wrote {} to {:?}", short_type_name::<T>(), path);
    Ok(())
}

fn read_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {:?}", path))?;
    serde_yaml::from_str(&contents).with_context(|| format!("Invalid config: {:?}", path))
}

/// `PadConfig` rather than `xypad_core::config::PadConfig`
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PadConfig;

    #[test]
    fn test_load_nonexistent_returns_default() {
        let config: PadConfig = load_config(Path::new("/nonexistent/path/config.yaml"));
        assert_eq!(config, PadConfig::default());
    }

    #[test]
    fn test_invalid_yaml_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "double_click_ms: [not, a, number").unwrap();

        let config: PadConfig = load_config(&path);
        assert_eq!(config, PadConfig::default());
    }

    #[test]
    fn test_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = PadConfig::default();
        config.presets_folder = dir.path().join("my-presets");
        config.follow_host_automation = false;
        config.double_click_ms = 250;

        save_config(&config, &path).unwrap();
        let loaded: PadConfig = load_config(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_read_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "double_click_ms: nope\n").unwrap();

        let err = read_config::<PadConfig>(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("config.yaml"));
        assert_eq!(short_type_name::<PadConfig>(), "PadConfig");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "standalone:\n  window_size: 400\n").unwrap();

        let config: PadConfig = load_config(&path);
        assert_eq!(config.standalone.window_size, 400.0);
        assert_eq!(config.standalone.pad_padding, 26.0);
        assert_eq!(config.plugin, crate::config::ShellConfig::plugin());
        assert!(config.follow_host_automation);
    }
}
