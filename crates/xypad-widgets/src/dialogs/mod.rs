//! In-window dialogs opened from the preset menu
//!
//! - [`save`]: name entry for writing the current state
//! - [`browser`]: pick a preset file to load
//! - [`notice`]: one-shot message (load or save failures)
//! - [`overlay`]: backdrop + centring shared by all of the above

pub mod browser;
pub mod notice;
pub mod overlay;
pub mod save;

pub use browser::{preset_browser, BrowserMessage, PresetBrowserState};
pub use notice::{notice, Notice};
pub use overlay::with_modal_overlay;
pub use save::{save_dialog, SaveDialogAction, SaveDialogMessage, SaveDialogState};
