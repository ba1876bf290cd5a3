//! Host-automatable parameters
//!
//! Values live in atomics so the host's audio thread and the editor's UI
//! thread can read and write them without locking.

use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};

use crate::types::{clamp_unit, PadState, Preset, DEFAULT_POSITION, NUM_PRESETS};

/// A continuous parameter stored as f32 bits
#[derive(Debug)]
pub struct FloatParam {
    pub id: &'static str,
    pub name: &'static str,
    pub min: f32,
    pub max: f32,
    pub default: f32,
    bits: AtomicU32,
}

impl FloatParam {
    pub fn new(id: &'static str, name: &'static str, min: f32, max: f32, default: f32) -> Self {
        Self {
            id,
            name,
            min,
            max,
            default,
            bits: AtomicU32::new(default.to_bits()),
        }
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// Set the value, clamped to the parameter range (NaN resets to default)
    pub fn set(&self, value: f32) {
        let value = if value.is_nan() {
            self.default
        } else {
            value.clamp(self.min, self.max)
        };
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// A stepped integer parameter
#[derive(Debug)]
pub struct IntParam {
    pub id: &'static str,
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
    pub default: i32,
    value: AtomicI32,
}

impl IntParam {
    pub fn new(id: &'static str, name: &'static str, min: i32, max: i32, default: i32) -> Self {
        Self {
            id,
            name,
            min,
            max,
            default,
            value: AtomicI32::new(default),
        }
    }

    pub fn get(&self) -> i32 {
        self.value.load(Ordering::Relaxed)
    }

    /// Set the value, clamped to the parameter range
    pub fn set(&self, value: i32) {
        self.value.store(value.clamp(self.min, self.max), Ordering::Relaxed);
    }
}

/// Point-in-time copy of the three parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSnapshot {
    pub x: f32,
    pub y: f32,
    pub preset: Preset,
}

impl ParamSnapshot {
    pub fn from_pad(state: &PadState) -> Self {
        Self {
            x: state.x(),
            y: state.y(),
            preset: state.preset(),
        }
    }

    pub fn to_pad(self) -> PadState {
        PadState::new(self.x, self.y, self.preset)
    }
}

/// The plugin's parameter set: x, y and preset index
#[derive(Debug)]
pub struct PluginParams {
    pub x: FloatParam,
    pub y: FloatParam,
    pub preset: IntParam,
}

impl Default for PluginParams {
    fn default() -> Self {
        Self {
            x: FloatParam::new("x", "X Position", 0.0, 1.0, DEFAULT_POSITION),
            y: FloatParam::new("y", "Y Position", 0.0, 1.0, DEFAULT_POSITION),
            preset: IntParam::new("preset", "Preset", 0, NUM_PRESETS as i32 - 1, 0),
        }
    }
}

impl PluginParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            x: self.x.get(),
            y: self.y.get(),
            // The int param is clamped on every write, so this never falls back
            preset: Preset::from_index(self.preset.get() as i64).unwrap_or_default(),
        }
    }

    pub fn apply(&self, snapshot: ParamSnapshot) {
        self.x.set(clamp_unit(snapshot.x));
        self.y.set(clamp_unit(snapshot.y));
        self.preset.set(snapshot.preset.index() as i32);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PluginParams::new();
        let snap = params.snapshot();
        assert_eq!(snap.x, 0.5);
        assert_eq!(snap.y, 0.5);
        assert_eq!(snap.preset, Preset::Blue);
        assert_eq!(params.x.id, "x");
        assert_eq!(params.preset.name, "Preset");
    }

    #[test]
    fn test_set_clamps() {
        let params = PluginParams::new();
        params.x.set(4.0);
        params.y.set(f32::NAN);
        params.preset.set(9);
        assert_eq!(params.x.get(), 1.0);
        assert_eq!(params.y.get(), 0.5);
        assert_eq!(params.preset.get(), 2);
        assert_eq!(params.snapshot().preset, Preset::Black);
    }

    #[test]
    fn test_apply_snapshot() {
        let params = PluginParams::new();
        let snap = ParamSnapshot::from_pad(&PadState::new(0.1, 0.9, Preset::Red));
        params.apply(snap);
        assert_eq!(params.snapshot(), snap);
        assert!((params.x.get() - 0.1).abs() < 1e-6);
    }
}
