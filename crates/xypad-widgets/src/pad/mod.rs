//! XY pad widget
//!
//! A single canvas covering the whole window. It draws the backdrop, the
//! pad's drop shadow, the pad itself, the position thumb and the hold ring,
//! and reports raw pointer activity. Deciding whether a press is a drag, a
//! hold or a double-click is left to `PadController`.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  backdrop (hold / dbl-click) │
//! │   ╭──────────────────────╮   │
//! │   │          ┆           │   │
//! │   │ ┄┄┄┄┄┄┄┄ ● ┄┄┄┄┄┄┄┄┄ │   │  ← ring hugs this outline while holding
//! │   │          ┆           │   │
//! │   ╰──────────────────────╯   │
//! └──────────────────────────────┘
//! ```

mod canvas;
mod view;

use iced::Color;
use xypad_core::Point;

pub use canvas::{PadCanvas, PadInteraction, THUMB_RADIUS};
pub use view::xy_pad;

/// Pointer position with the canvas size it was measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    /// Canvas-local position (may lie outside the canvas while dragging)
    pub position: Point,
    pub width: f32,
    pub height: f32,
}

/// Raw pointer activity on the pad canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PadEvent {
    Pressed(PointerSample),
    Moved(PointerSample),
    Released,
}

/// How the area around the pad is filled
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backdrop {
    /// Use the preset palette's background (standalone)
    FollowPreset,
    /// Fixed colour regardless of preset (plugin editor)
    Fixed(Color),
}
