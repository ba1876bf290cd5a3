//! XY Pad Core - pad state, gestures and persistence shared by both shells
//!
//! Nothing in this crate depends on a GUI toolkit. The widgets crate renders
//! what lives here; the application crate wires it to a window.
//!
//! - [`types`]: `Preset`, `PadState` and geometry
//! - [`gesture`]: hold-to-reveal state machine, double-click tracking, ring appearance
//! - [`controller`]: input handling over the `PadSurface` capability trait
//! - [`preset`]: JSON preset files
//! - [`plugin`]: host parameters, parameter bridge, pass-through processor
//! - [`config`]: YAML configuration

pub mod config;
pub mod controller;
pub mod gesture;
pub mod plugin;
pub mod preset;
pub mod types;

pub use types::*;
