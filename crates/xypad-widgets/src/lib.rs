//! iced widgets for the XY pad
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: Pure data (`SaveDialogState`, `PresetBrowserState`, `Notice`)
//! - **View functions**: Take state + callbacks, return `Element<Message>`
//! - **Canvas Programs**: Custom rendering and event-to-callback translation (`PadCanvas`)
//!
//! ## View Functions
//!
//! - `xy_pad`: The pad, its backdrop and the hold ring
//! - `preset_menu`: Save / Load / Cancel
//! - `save_dialog`, `preset_browser`, `notice`: Dialogs opened from the menu
//! - `with_modal_overlay`: Stack any of the above over the pad

pub mod dialogs;
pub mod pad;
pub mod preset_menu;
pub mod theme;

pub use theme::{palette, ring_color, Palette, PLUGIN_BACKGROUND};

pub use pad::{xy_pad, Backdrop, PadCanvas, PadEvent, PadInteraction, PointerSample};

pub use preset_menu::preset_menu;

pub use dialogs::{
    notice, preset_browser, save_dialog, with_modal_overlay, BrowserMessage, Notice,
    PresetBrowserState, SaveDialogAction, SaveDialogMessage, SaveDialogState,
};
