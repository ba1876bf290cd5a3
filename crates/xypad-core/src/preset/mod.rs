//! Preset persistence
//!
//! A preset file is a flat, indented JSON object:
//!
//! ```json
//! {
//!   "x": 0.25,
//!   "y": 0.75,
//!   "preset": 1
//! }
//! ```
//!
//! Files are overwritten in place. Loading validates every field and never
//! touches the caller's state on failure; the caller decides how to report
//! the error.

mod error;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::types::{PadState, Preset};

pub use error::{PresetError, PresetResult};

/// File extension for preset files
pub const PRESET_EXTENSION: &str = "json";

/// On-disk preset record
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PresetFile {
    pub x: f32,
    pub y: f32,
    pub preset: usize,
}

impl From<&PadState> for PresetFile {
    fn from(state: &PadState) -> Self {
        Self {
            x: state.x(),
            y: state.y(),
            preset: state.preset().index(),
        }
    }
}

/// Write `state` to `path`, replacing any existing file
pub fn save_preset(path: &Path, state: &PadState) -> PresetResult<()> {
    log::info!("save_preset: Saving to {:?}", path);

    let json = serde_json::to_string_pretty(&PresetFile::from(state)).map_err(|source| {
        PresetError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;

    std::fs::write(path, json).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("save_preset: Saved {:?}", state);
    Ok(())
}

/// Read and validate the preset at `path`
pub fn load_preset(path: &Path) -> PresetResult<PadState> {
    log::info!("load_preset: Loading from {:?}", path);

    let contents = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let state = parse_preset(path, &contents)?;
    log::info!("load_preset: Loaded {:?}", state);
    Ok(state)
}

/// Validate preset JSON; `path` is only used for error reporting
pub fn parse_preset(path: &Path, contents: &str) -> PresetResult<PadState> {
    let value: Value = serde_json::from_str(contents).map_err(|source| PresetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(object) = value else {
        return Err(PresetError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let x = number_field(path, &object, "x")?;
    let y = number_field(path, &object, "y")?;
    let index = integer_field(path, &object, "preset")?;

    let preset = Preset::from_index(index).ok_or_else(|| PresetError::InvalidPreset {
        path: path.to_path_buf(),
        index,
    })?;

    // Out-of-range coordinates are clamped by the pad state
    Ok(PadState::new(x as f32, y as f32, preset))
}

fn field<'a>(
    path: &Path,
    object: &'a Map<String, Value>,
    name: &'static str,
) -> PresetResult<&'a Value> {
    object.get(name).ok_or_else(|| PresetError::MissingField {
        path: path.to_path_buf(),
        field: name,
    })
}

fn number_field(path: &Path, object: &Map<String, Value>, name: &'static str) -> PresetResult<f64> {
    field(path, object, name)?
        .as_f64()
        .ok_or_else(|| PresetError::InvalidField {
            path: path.to_path_buf(),
            field: name,
        })
}

/// Integer field; integral floats such as `1.0` are accepted
fn integer_field(path: &Path, object: &Map<String, Value>, name: &'static str) -> PresetResult<i64> {
    let value = field(path, object, name)?;
    if let Some(index) = value.as_i64() {
        return Ok(index);
    }
    match value.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
        _ => Err(PresetError::InvalidField {
            path: path.to_path_buf(),
            field: name,
        }),
    }
}

/// Resolve a user-entered name to a file inside `folder`
///
/// Appends `.json` when missing. Rejects empty names and anything that
/// would escape the folder.
pub fn preset_path(folder: &Path, name: &str) -> PresetResult<PathBuf> {
    let trimmed = name.trim();
    let invalid = trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\'])
        || trimmed.contains('\0');
    if invalid {
        return Err(PresetError::InvalidName(name.to_string()));
    }

    let mut file_name = trimmed.to_string();
    let has_extension = Path::new(trimmed)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PRESET_EXTENSION));
    if !has_extension {
        file_name.push('.');
        file_name.push_str(PRESET_EXTENSION);
    }

    Ok(folder.join(file_name))
}

/// Create the presets folder (and parents) if it doesn't exist
pub fn ensure_presets_folder(folder: &Path) -> PresetResult<()> {
    std::fs::create_dir_all(folder).map_err(|source| PresetError::Io {
        path: folder.to_path_buf(),
        source,
    })
}

/// Preset files in `folder`, sorted by file name
///
/// A missing folder yields an empty list.
pub fn list_presets(folder: &Path) -> PresetResult<Vec<PathBuf>> {
    if !folder.exists() {
        log::debug!("list_presets: {:?} does not exist", folder);
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(folder).map_err(|source| PresetError::Io {
        path: folder.to_path_buf(),
        source,
    })?;

    let mut presets: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case(PRESET_EXTENSION))
        })
        .collect();
    presets.sort();

    log::debug!("list_presets: Found {} presets in {:?}", presets.len(), folder);
    Ok(presets)
}

/// Display name for a preset file (file name without extension)
pub fn preset_display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
