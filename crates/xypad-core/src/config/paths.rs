//! Standard locations for configuration, presets and the host session

use std::path::PathBuf;

/// Application directory name under the platform config dir
const APP_DIR: &str = "xypad";

/// Get the application config directory
///
/// Returns: `~/.config/xypad` (platform equivalent elsewhere)
pub fn app_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(APP_DIR)
}

/// Get the default config file path
///
/// Returns: `~/.config/xypad/config.yaml`
pub fn default_config_path() -> PathBuf {
    app_config_dir().join("config.yaml")
}

/// Get the default presets folder
///
/// Returns: `~/Documents/XYPad Presets`, falling back to the home directory
pub fn default_presets_folder() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("XYPad Presets")
}

/// Get the host session file used by the plugin shell
///
/// Returns: `~/.config/xypad/session.bin`
pub fn default_session_path() -> PathBuf {
    app_config_dir().join("session.bin")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_with_filename() {
        assert!(default_config_path().ends_with("xypad/config.yaml"));
        assert!(default_session_path().ends_with("xypad/session.bin"));
    }

    #[test]
    fn test_presets_folder_name() {
        assert!(default_presets_folder().ends_with("XYPad Presets"));
    }
}
