//! Preset menu and dialog handlers
//!
//! Handles: Menu, SaveDialog, Browser, PresetSaved, PresetLoaded
//!
//! Preset files are read and written on tokio's blocking pool.

use std::path::PathBuf;

use iced::Task;
use xypad_core::controller::MenuChoice;
use xypad_core::preset::{ensure_presets_folder, load_preset, preset_path, save_preset};
use xypad_core::PadState;
use xypad_widgets::{
    BrowserMessage, Notice, PresetBrowserState, SaveDialogAction, SaveDialogMessage,
    SaveDialogState,
};

use super::super::app::{Modal, PadApp};
use super::super::message::Message;

impl PadApp {
    /// Handle a preset menu entry
    pub fn handle_menu_choice(&mut self, choice: MenuChoice) -> Task<Message> {
        if !matches!(self.modal, Modal::Menu) {
            return Task::none();
        }
        log::info!("menu: {:?}", choice);

        match choice {
            MenuChoice::Save => self.modal = Modal::Save(SaveDialogState::default()),
            MenuChoice::Load => {
                self.modal = Modal::Browser(PresetBrowserState::open(&self.config.presets_folder));
            }
            MenuChoice::Cancel => self.close_menu(),
        }
        Task::none()
    }

    /// Handle save dialog input; writing happens off the UI thread
    pub fn handle_save_dialog(&mut self, message: SaveDialogMessage) -> Task<Message> {
        let Modal::Save(dialog) = &mut self.modal else {
            return Task::none();
        };

        match dialog.handle_message(message) {
            None => Task::none(),
            Some(SaveDialogAction::Cancel) => {
                self.close_menu();
                Task::none()
            }
            Some(SaveDialogAction::Save(name)) => {
                let path = match preset_path(&self.config.presets_folder, &name) {
                    Ok(path) => path,
                    Err(e) => {
                        dialog.fail(e.to_string());
                        return Task::none();
                    }
                };
                let folder = self.config.presets_folder.clone();
                let state = *self.pad.state();

                Task::perform(
                    async move {
                        tokio::task::spawn_blocking(move || {
                            ensure_presets_folder(&folder)
                                .and_then(|()| save_preset(&path, &state))
                                .map(|()| path)
                                .map_err(|e| e.to_string())
                        })
                        .await
                        .unwrap_or_else(|e| Err(format!("Save task failed: {}", e)))
                    },
                    Message::PresetSaved,
                )
            }
        }
    }

    pub fn handle_preset_saved(&mut self, result: Result<PathBuf, String>) -> Task<Message> {
        // The dialog was dismissed while writing; the menu flow is already over
        let Modal::Save(dialog) = &mut self.modal else {
            log::debug!("Ignoring save result after the dialog closed: {:?}", result);
            return Task::none();
        };

        match result {
            Ok(path) => {
                log::info!("Preset saved to {:?}", path);
                self.controller.menu_closed();
                self.modal = Modal::Notice(Notice::saved(&path));
            }
            Err(e) => {
                log::error!("Failed to save preset: {}", e);
                dialog.fail(e);
            }
        }
        Task::none()
    }

    /// Handle preset browser input; reading happens off the UI thread
    pub fn handle_browser(&mut self, message: BrowserMessage) -> Task<Message> {
        if !matches!(self.modal, Modal::Browser(_)) {
            return Task::none();
        }

        match message {
            BrowserMessage::Select(path) => Task::perform(
                async move {
                    let target = path.clone();
                    let result = tokio::task::spawn_blocking(move || {
                        load_preset(&target).map_err(|e| e.to_string())
                    })
                    .await
                    .unwrap_or_else(|e| Err(format!("Load task failed: {}", e)));
                    (path, result)
                },
                |(path, result)| Message::PresetLoaded(path, result),
            ),
            BrowserMessage::Cancel => {
                self.close_menu();
                Task::none()
            }
        }
    }

    /// Apply a loaded preset, or explain why nothing changed
    pub fn handle_preset_loaded(
        &mut self,
        path: PathBuf,
        result: Result<PadState, String>,
    ) -> Task<Message> {
        // Browser cancelled before the read finished
        if !matches!(self.modal, Modal::Browser(_)) {
            log::debug!("Ignoring load result for {:?} after the browser closed", path);
            return Task::none();
        }

        match result {
            Ok(state) => {
                self.controller.apply_preset(&mut self.pad, &state);
                log::info!("Loaded {:?}: {:?}", path, state);
                self.controller.menu_closed();
                self.modal = Modal::Notice(Notice::loaded(&path));
            }
            Err(e) => {
                log::warn!("Failed to load preset: {}", e);
                self.controller.menu_closed();
                self.modal = Modal::Notice(Notice::load_failed(&path, &e));
            }
        }
        Task::none()
    }
}
