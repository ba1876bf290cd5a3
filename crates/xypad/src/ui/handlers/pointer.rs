//! Pointer message handlers
//!
//! Handles: Pad(Pressed), Pad(Moved), Pad(Released)

use std::time::Instant;

use iced::Task;
use xypad_core::controller::PointerOutcome;
use xypad_widgets::{PadEvent, PointerSample};

use super::super::app::{Modal, PadApp};
use super::super::message::Message;

impl PadApp {
    /// Handle pointer activity on the pad canvas
    pub fn handle_pad_event(&mut self, event: PadEvent) -> Task<Message> {
        match event {
            PadEvent::Pressed(sample) => {
                if !matches!(self.modal, Modal::None) {
                    return Task::none();
                }
                self.sync_pad_bounds(sample);
                let outcome =
                    self.controller
                        .pointer_down(&mut self.pad, sample.position, Instant::now());
                match outcome {
                    PointerOutcome::PresetCycled(preset) => {
                        log::info!("pointer: Preset is now {}", preset);
                    }
                    other => log::debug!("pointer: {:?} at {:?}", other, sample.position),
                }
            }
            PadEvent::Moved(sample) => {
                self.sync_pad_bounds(sample);
                self.controller.pointer_moved(&mut self.pad, sample.position);
            }
            PadEvent::Released => {
                if self.controller.pointer_up() {
                    log::debug!("pointer: Hold released early");
                }
            }
        }
        Task::none()
    }

    /// The canvas fills the window, so its size drives the pad rectangle
    fn sync_pad_bounds(&mut self, sample: PointerSample) {
        self.pad
            .set_bounds(self.layout.pad_bounds(sample.width, sample.height));
    }
}
