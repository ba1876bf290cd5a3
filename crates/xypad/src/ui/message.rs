//! Messages for the XY pad application

use std::path::PathBuf;
use std::time::Instant;

use xypad_core::controller::MenuChoice;
use xypad_core::PadState;
use xypad_widgets::{BrowserMessage, PadEvent, SaveDialogMessage};

/// Top-level application message
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer activity on the pad canvas
    Pad(PadEvent),
    /// Hold animation tick (16ms, only while holding)
    HoldTick(Instant),
    /// Host parameter mirror tick (33ms, plugin shell only)
    BridgeTick,

    // Preset menu and dialogs
    Menu(MenuChoice),
    SaveDialog(SaveDialogMessage),
    Browser(BrowserMessage),
    /// Background save finished; carries the written path
    PresetSaved(Result<PathBuf, String>),
    /// Background load finished
    PresetLoaded(PathBuf, Result<PadState, String>),
    DismissNotice,
}
