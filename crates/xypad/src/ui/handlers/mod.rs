//! Message handlers organized by feature domain
//!
//! Each sub-module provides handler methods on PadApp.

pub mod pointer;
pub mod presets;
pub mod tick;
