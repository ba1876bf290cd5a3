//! Plugin shell support
//!
//! - [`PluginParams`]: the three host-automatable parameters (x, y, preset)
//! - [`PassThroughProcessor`]: audio pass-through plus fixed-layout state save/restore
//! - [`HostParamBridge`]: keeps the pad and the parameters in step

mod bridge;
mod error;
mod params;
mod processor;

pub use bridge::{HostParamBridge, ParameterBridge, BRIDGE_INTERVAL};
pub use error::{StateError, StateResult};
pub use params::{FloatParam, IntParam, ParamSnapshot, PluginParams};
pub use processor::{
    decode_state, encode_state, BusLayout, PassThroughProcessor, PLUGIN_NAME, STATE_SIZE,
};
