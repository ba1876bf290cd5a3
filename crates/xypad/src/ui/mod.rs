//! UI module for XY Pad
//!
//! Built with iced. One canvas fills the window; dialogs are stacked over
//! it as modal overlays.

pub mod app;
mod handlers;
pub mod message;
