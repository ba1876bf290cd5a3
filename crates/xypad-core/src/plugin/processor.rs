//! Pass-through audio processor
//!
//! The audio path does no processing: buffers leave `process` exactly as they
//! arrived. The processor exists to own the parameters and to save and
//! restore them for the host.

use std::sync::Arc;

use super::error::{StateError, StateResult};
use super::params::{ParamSnapshot, PluginParams};
use crate::types::Preset;

/// Plugin name reported to the host
pub const PLUGIN_NAME: &str = "XY Pad";

/// Size of the saved state: f32 x, f32 y, i32 preset
pub const STATE_SIZE: usize = 12;

/// Channel layout offered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLayout {
    pub input_channels: usize,
    pub output_channels: usize,
}

impl BusLayout {
    pub const MONO: BusLayout = BusLayout {
        input_channels: 1,
        output_channels: 1,
    };
    pub const STEREO: BusLayout = BusLayout {
        input_channels: 2,
        output_channels: 2,
    };
}

/// Pass-through processor holding the shared parameters
#[derive(Debug)]
pub struct PassThroughProcessor {
    params: Arc<PluginParams>,
    sample_rate: f64,
    max_block_size: usize,
}

impl Default for PassThroughProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl PassThroughProcessor {
    pub fn new() -> Self {
        Self {
            params: Arc::new(PluginParams::new()),
            sample_rate: 48_000.0,
            max_block_size: 512,
        }
    }

    /// Shared handle to the parameters (for the editor)
    pub fn params(&self) -> Arc<PluginParams> {
        Arc::clone(&self.params)
    }

    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    pub fn accepts_midi(&self) -> bool {
        false
    }

    pub fn produces_midi(&self) -> bool {
        false
    }

    pub fn tail_seconds(&self) -> f64 {
        0.0
    }

    /// Single fixed program; presets live in the editor, not in host programs
    pub fn num_programs(&self) -> usize {
        1
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn max_block_size(&self) -> usize {
        self.max_block_size
    }

    /// Mono or stereo, with matching input and output
    pub fn is_layout_supported(&self, layout: BusLayout) -> bool {
        matches!(layout.output_channels, 1 | 2) && layout.input_channels == layout.output_channels
    }

    pub fn prepare(&mut self, sample_rate: f64, max_block_size: usize) {
        log::info!(
            "prepare: {} Hz, up to {} samples per block",
            sample_rate,
            max_block_size
        );
        self.sample_rate = sample_rate;
        self.max_block_size = max_block_size;
    }

    /// Audio callback; intentionally leaves every channel untouched
    pub fn process(&mut self, _channels: &mut [&mut [f32]]) {}

    /// Serialize the parameters for the host
    pub fn state(&self) -> Vec<u8> {
        encode_state(&self.params.snapshot()).to_vec()
    }

    /// Restore host-saved parameters; on error nothing changes
    pub fn set_state(&self, data: &[u8]) -> StateResult<()> {
        let snapshot = decode_state(data)?;
        log::info!("set_state: Restoring {:?}", snapshot);
        self.params.apply(snapshot);
        Ok(())
    }
}

/// Encode as little-endian f32 x, f32 y, i32 preset; no header or checksum
pub fn encode_state(snapshot: &ParamSnapshot) -> [u8; STATE_SIZE] {
    let mut out = [0u8; STATE_SIZE];
    out[0..4].copy_from_slice(&snapshot.x.to_le_bytes());
    out[4..8].copy_from_slice(&snapshot.y.to_le_bytes());
    out[8..12].copy_from_slice(&(snapshot.preset.index() as i32).to_le_bytes());
    out
}

/// Decode the fixed layout; trailing bytes are ignored
pub fn decode_state(data: &[u8]) -> StateResult<ParamSnapshot> {
    let Some(fixed) = data.get(..STATE_SIZE) else {
        return Err(StateError::Truncated {
            expected: STATE_SIZE,
            actual: data.len(),
        });
    };

    let word = |i: usize| [fixed[i], fixed[i + 1], fixed[i + 2], fixed[i + 3]];
    let x = f32::from_le_bytes(word(0));
    let y = f32::from_le_bytes(word(4));
    let index = i32::from_le_bytes(word(8));

    let preset = Preset::from_index(index as i64).ok_or(StateError::InvalidPreset(index))?;
    Ok(ParamSnapshot { x, y, preset })
}
