//! Main application state and top-level update/view

use iced::{time, Element, Subscription, Task, Theme};

use xypad_core::config::{default_session_path, PadConfig, ShellConfig};
use xypad_core::controller::{MenuChoice, Pad, PadController, PadLayout};
use xypad_core::gesture::{ring_style, TICK_INTERVAL};
use xypad_core::plugin::{HostParamBridge, BRIDGE_INTERVAL};
use xypad_widgets::{
    notice, palette, preset_browser, preset_menu, save_dialog, with_modal_overlay, xy_pad,
    Backdrop, BrowserMessage, Notice, PresetBrowserState, SaveDialogMessage, SaveDialogState,
    PLUGIN_BACKGROUND,
};

use super::message::Message;
use crate::host::PluginHost;

/// Which shell the pad runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// Plain window, preset palette fills the background
    Standalone,
    /// Plugin editor: fixed background, host parameters, session restore
    Plugin,
}

impl Shell {
    pub fn geometry(self, config: &PadConfig) -> ShellConfig {
        match self {
            Shell::Standalone => config.standalone,
            Shell::Plugin => config.plugin,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Shell::Standalone => "XY Pad",
            Shell::Plugin => "XY Pad (Plugin)",
        }
    }
}

/// Overlay currently stacked over the pad
#[derive(Debug, Default)]
pub enum Modal {
    #[default]
    None,
    /// Save / Load / Cancel, shown after a completed hold
    Menu,
    Save(SaveDialogState),
    Browser(PresetBrowserState),
    Notice(Notice),
}

/// Application state
pub struct PadApp {
    pub(crate) shell: Shell,
    pub(crate) config: PadConfig,
    pub(crate) layout: PadLayout,
    pub(crate) pad: Pad,
    pub(crate) controller: PadController,
    pub(crate) modal: Modal,
    /// Present in the plugin shell only
    pub(crate) host: Option<PluginHost>,
}

impl PadApp {
    pub fn new(config: PadConfig, shell: Shell) -> (Self, Task<Message>) {
        let host = match shell {
            Shell::Plugin => Some(PluginHost::open(default_session_path())),
            Shell::Standalone => None,
        };
        (Self::with_host(config, shell, host), Task::none())
    }

    pub(crate) fn with_host(config: PadConfig, shell: Shell, host: Option<PluginHost>) -> Self {
        let geometry = shell.geometry(&config);
        let layout = PadLayout::new(geometry.pad_padding);

        let mut pad = Pad::default();
        pad.set_bounds(layout.pad_bounds(geometry.window_size, geometry.window_size));

        let mut controller = PadController::new(config.double_click_interval());
        if let Some(host) = &host {
            let bridge = HostParamBridge::new(host.params(), config.follow_host_automation);
            controller = controller.with_bridge(Box::new(bridge));
            controller.attach(&mut pad);
        }

        log::info!(
            "PadApp: {:?} shell, {}px window, presets in {:?}",
            shell,
            geometry.window_size,
            config.presets_folder
        );

        Self {
            shell,
            config,
            layout,
            pad,
            controller,
            modal: Modal::None,
            host,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pad(event) => self.handle_pad_event(event),
            Message::HoldTick(now) => self.handle_hold_tick(now),
            Message::BridgeTick => self.handle_bridge_tick(),
            Message::Menu(choice) => self.handle_menu_choice(choice),
            Message::SaveDialog(msg) => self.handle_save_dialog(msg),
            Message::Browser(msg) => self.handle_browser(msg),
            Message::PresetSaved(result) => self.handle_preset_saved(result),
            Message::PresetLoaded(path, result) => self.handle_preset_loaded(path, result),
            Message::DismissNotice => {
                self.modal = Modal::None;
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = Vec::new();

        // Hold animation runs only while a hold is in progress
        if self.controller.gesture().is_ticking() {
            subscriptions.push(time::every(TICK_INTERVAL).map(Message::HoldTick));
        }
        if self.host.is_some() {
            subscriptions.push(time::every(BRIDGE_INTERVAL).map(|_| Message::BridgeTick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let backdrop = match self.shell {
            Shell::Standalone => Backdrop::FollowPreset,
            Shell::Plugin => Backdrop::Fixed(PLUGIN_BACKGROUND),
        };
        let pad = xy_pad(
            self.pad.state(),
            self.layout,
            backdrop,
            ring_style(self.controller.gesture().progress()),
            Message::Pad,
        );

        match &self.modal {
            Modal::None => pad,
            Modal::Menu => with_modal_overlay(
                pad,
                preset_menu(Message::Menu),
                Message::Menu(MenuChoice::Cancel),
            ),
            Modal::Save(state) => with_modal_overlay(
                pad,
                save_dialog(state, &self.config.presets_folder, Message::SaveDialog),
                Message::SaveDialog(SaveDialogMessage::Cancel),
            ),
            Modal::Browser(state) => with_modal_overlay(
                pad,
                preset_browser(state, Message::Browser),
                Message::Browser(BrowserMessage::Cancel),
            ),
            Modal::Notice(state) => {
                with_modal_overlay(pad, notice(state, Message::DismissNotice), Message::DismissNotice)
            }
        }
    }

    pub fn theme(&self) -> Theme {
        match self.shell {
            Shell::Plugin => Theme::Light,
            Shell::Standalone if palette(self.pad.state().preset()).dark => Theme::Dark,
            Shell::Standalone => Theme::Light,
        }
    }

    /// Leave the menu flow and re-arm the hold gesture
    pub(crate) fn close_menu(&mut self) {
        self.modal = Modal::None;
        self.controller.menu_closed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::{Duration, Instant};
    use xypad_core::gesture::{GesturePhase, HOLD_DURATION};
    use xypad_core::preset::save_preset;
    use xypad_core::{PadState, Point, Preset};
    use xypad_widgets::{PadEvent, PointerSample};

    fn standalone(presets: &Path) -> PadApp {
        let config = PadConfig {
            presets_folder: presets.to_path_buf(),
            ..PadConfig::default()
        };
        PadApp::with_host(config, Shell::Standalone, None)
    }

    fn press(app: &mut PadApp, x: f32, y: f32) {
        let _ = app.update(Message::Pad(PadEvent::Pressed(PointerSample {
            position: Point::new(x, y),
            width: 368.0,
            height: 368.0,
        })));
    }

    fn open_menu(app: &mut PadApp) {
        press(app, 5.0, 5.0);
        assert!(app.controller.gesture().is_ticking());
        let start = Instant::now();
        let _ = app.update(Message::HoldTick(start + HOLD_DURATION + Duration::from_millis(50)));
        assert!(matches!(app.modal, Modal::Menu));
    }

    #[test]
    fn test_drag_moves_thumb() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = standalone(dir.path());

        // Pad spans 26..342 in a 368px window
        press(&mut app, 26.0, 342.0 - 0.001);
        let (x, y) = app.pad.state().position();
        assert_eq!(x, 0.0);
        assert!(y > 0.99);

        let _ = app.update(Message::Pad(PadEvent::Moved(PointerSample {
            position: Point::new(184.0, 900.0),
            width: 368.0,
            height: 368.0,
        })));
        assert_eq!(app.pad.state().position(), (0.5, 1.0));

        let _ = app.update(Message::Pad(PadEvent::Released));
        assert!(!app.controller.is_dragging());
    }

    #[test]
    fn test_hold_opens_menu_and_cancel_rearms() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = standalone(dir.path());
        open_menu(&mut app);

        // Presses are ignored while the menu is up
        press(&mut app, 184.0, 184.0);
        assert!(!app.controller.is_dragging());

        let _ = app.update(Message::Menu(MenuChoice::Cancel));
        assert!(matches!(app.modal, Modal::None));
        assert_eq!(app.controller.gesture().phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_load_applies_preset() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = standalone(dir.path());
        open_menu(&mut app);

        let _ = app.update(Message::Menu(MenuChoice::Load));
        assert!(matches!(app.modal, Modal::Browser(_)));

        let state = PadState::new(0.1, 0.8, Preset::Red);
        let path = dir.path().join("red.json");
        save_preset(&path, &state).unwrap();

        let _ = app.update(Message::PresetLoaded(path, Ok(state)));
        assert_eq!(*app.pad.state(), state);
        match &app.modal {
            Modal::Notice(notice) => assert_eq!(notice.title, "Preset Loaded"),
            _ => panic!("expected a confirmation"),
        }
        assert_eq!(app.controller.gesture().phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_failed_load_keeps_state_and_notifies() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = standalone(dir.path());
        let before = *app.pad.state();
        open_menu(&mut app);
        let _ = app.update(Message::Menu(MenuChoice::Load));

        let path = dir.path().join("bad.json");
        let _ = app.update(Message::PresetLoaded(path, Err("preset index 5".into())));
        assert_eq!(*app.pad.state(), before);
        assert!(matches!(app.modal, Modal::Notice(_)));
        assert_eq!(app.controller.gesture().phase(), GesturePhase::Idle);

        let _ = app.update(Message::DismissNotice);
        assert!(matches!(app.modal, Modal::None));
    }

    #[test]
    fn test_invalid_save_name_stays_in_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = standalone(dir.path());
        open_menu(&mut app);
        let _ = app.update(Message::Menu(MenuChoice::Save));

        let _ = app.update(Message::SaveDialog(SaveDialogMessage::SetName("../up".into())));
        let _ = app.update(Message::SaveDialog(SaveDialogMessage::Submit));
        match &app.modal {
            Modal::Save(dialog) => assert!(dialog.error.is_some()),
            _ => panic!("save dialog closed on invalid name"),
        }

        let _ = app.update(Message::PresetSaved(Ok(dir.path().join("x.json"))));
        assert!(matches!(app.modal, Modal::Notice(_)));
        assert_eq!(app.controller.gesture().phase(), GesturePhase::Idle);
    }

    #[test]
    fn test_late_load_result_after_cancel_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = standalone(dir.path());
        let before = *app.pad.state();
        open_menu(&mut app);
        let _ = app.update(Message::Menu(MenuChoice::Load));
        let _ = app.update(Message::Browser(BrowserMessage::Cancel));

        // Far from the last press so it is not a double-click
        press(&mut app, 362.0, 362.0);
        assert_eq!(app.controller.gesture().phase(), GesturePhase::Holding);

        let late = PadState::new(0.9, 0.1, Preset::Black);
        let _ = app.update(Message::PresetLoaded(dir.path().join("late.json"), Ok(late)));
        assert_eq!(*app.pad.state(), before);
        assert!(matches!(app.modal, Modal::None));
        assert_eq!(app.controller.gesture().phase(), GesturePhase::Holding);
    }

    #[test]
    fn test_late_save_result_after_cancel_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = standalone(dir.path());
        open_menu(&mut app);
        let _ = app.update(Message::Menu(MenuChoice::Save));
        let _ = app.update(Message::SaveDialog(SaveDialogMessage::Cancel));

        let _ = app.update(Message::PresetSaved(Ok(dir.path().join("late.json"))));
        assert!(matches!(app.modal, Modal::None));
        let _ = app.update(Message::PresetSaved(Err("disk full".into())));
        assert!(matches!(app.modal, Modal::None));
    }

    #[test]
    fn test_session_waits_for_drag_release() {
        let dir = tempfile::tempdir().unwrap();
        let session = dir.path().join("session.bin");
        let config = PadConfig {
            presets_folder: dir.path().to_path_buf(),
            ..PadConfig::default()
        };
        let host = PluginHost::open(session.clone());
        let mut app = PadApp::with_host(config, Shell::Plugin, Some(host));

        // Pad spans 100..600 in the 700px editor
        let _ = app.update(Message::Pad(PadEvent::Pressed(PointerSample {
            position: Point::new(200.0, 300.0),
            width: 700.0,
            height: 700.0,
        })));
        assert!(app.controller.is_dragging());
        let _ = app.update(Message::BridgeTick);
        assert!(!session.exists());

        let _ = app.update(Message::Pad(PadEvent::Released));
        let _ = app.update(Message::BridgeTick);
        assert!(session.exists());

        let snapshot = PluginHost::open(session).params().snapshot();
        assert!((snapshot.x - 0.2).abs() < 1e-6);
        assert!((snapshot.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_plugin_shell_restores_and_mirrors() {
        let dir = tempfile::tempdir().unwrap();
        let session = dir.path().join("session.bin");

        let host = PluginHost::open(session.clone());
        host.params().x.set(0.25);
        host.params().preset.set(2);

        let config = PadConfig {
            presets_folder: dir.path().to_path_buf(),
            ..PadConfig::default()
        };
        let mut app = PadApp::with_host(config, Shell::Plugin, Some(host));
        assert_eq!(app.pad.state().x(), 0.25);
        assert_eq!(app.pad.state().preset(), Preset::Black);
        assert!(matches!(app.theme(), Theme::Light));

        // Double-click outside the 500px pad cycles the preset and reaches the host
        for _ in 0..2 {
            let _ = app.update(Message::Pad(PadEvent::Pressed(PointerSample {
                position: Point::new(20.0, 20.0),
                width: 700.0,
                height: 700.0,
            })));
            let _ = app.update(Message::Pad(PadEvent::Released));
        }
        assert_eq!(app.pad.state().preset(), Preset::Blue);

        let _ = app.update(Message::BridgeTick);
        assert!(session.exists());
        let reopened = PluginHost::open(session);
        assert_eq!(reopened.params().snapshot().preset, Preset::Blue);
    }
}
