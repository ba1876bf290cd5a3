//! Configuration for the XY pad shells
//!
//! Stored as YAML. Missing keys fall back to defaults, so older files keep
//! working as fields are added.
//!
//! # Usage
//!
//! ```ignore
//! use xypad_core::config::{default_config_path, load_config, PadConfig};
//!
//! let config: PadConfig = load_config(&default_config_path());
//! ```

mod io;
mod paths;

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use io::{load_config, save_config};
pub use paths::{app_config_dir, default_config_path, default_presets_folder, default_session_path};

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadConfig {
    /// Folder the save dialog and preset browser are rooted at
    pub presets_folder: PathBuf,
    /// Pull host automation into the pad while the plugin editor is open
    pub follow_host_automation: bool,
    /// Maximum gap between the presses of a double-click, in milliseconds
    pub double_click_ms: u64,
    /// Standalone window geometry
    pub standalone: ShellConfig,
    /// Plugin editor geometry
    pub plugin: ShellConfig,
}

impl Default for PadConfig {
    fn default() -> Self {
        Self {
            presets_folder: default_presets_folder(),
            follow_host_automation: true,
            double_click_ms: 400,
            standalone: ShellConfig::standalone(),
            plugin: ShellConfig::plugin(),
        }
    }
}

impl PadConfig {
    pub fn double_click_interval(&self) -> Duration {
        Duration::from_millis(self.double_click_ms)
    }
}

/// Window geometry for one shell
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Square window edge in logical pixels
    pub window_size: f32,
    /// Clickable margin between window edge and pad
    pub pad_padding: f32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::standalone()
    }
}

impl ShellConfig {
    pub fn standalone() -> Self {
        Self {
            window_size: 368.0,
            pad_padding: 26.0,
        }
    }

    pub fn plugin() -> Self {
        Self {
            window_size: 700.0,
            pad_padding: 100.0,
        }
    }
}
