//! Tick message handlers
//!
//! - HoldTick (16ms): advances the hold ring, opens the preset menu on completion
//! - BridgeTick (33ms, plugin shell): mirrors pad and host parameters, saves the session

use std::time::Instant;

use iced::Task;
use xypad_core::gesture::TickOutcome;

use super::super::app::{Modal, PadApp};
use super::super::message::Message;

impl PadApp {
    pub fn handle_hold_tick(&mut self, now: Instant) -> Task<Message> {
        if self.controller.tick(now) == TickOutcome::MenuTriggered {
            log::info!("hold: Showing preset menu");
            self.modal = Modal::Menu;
        }
        Task::none()
    }

    pub fn handle_bridge_tick(&mut self) -> Task<Message> {
        self.controller.bridge_tick(&mut self.pad);

        // Mid-drag values are transient; wait for the release
        if !self.controller.is_dragging() {
            if let Some(host) = self.host.as_mut() {
                if let Err(e) = host.persist() {
                    log::warn!("bridge: {:#}", e);
                }
            }
        }
        Task::none()
    }
}
