//! Pad controller shared by the standalone and plugin shells
//!
//! The controller owns the hold gesture, double-click tracking and drag state.
//! It talks to the pad through [`PadSurface`] and, in the plugin shell, to the
//! host through an injected [`ParameterBridge`]. The standalone shell runs the
//! same controller with no bridge.
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = PadController::new(config.double_click_interval());
//! match controller.pointer_down(&mut pad, position, Instant::now()) {
//!     PointerOutcome::HoldStarted => { /* start the 16ms tick */ }
//!     PointerOutcome::PresetCycled(preset) => { /* repaint */ }
//!     _ => {}
//! }
//! ```

use std::time::{Duration, Instant};

use crate::gesture::{ClickKind, ClickTracker, GesturePhase, HoldGesture, TickOutcome};
use crate::plugin::ParameterBridge;
use crate::types::{PadState, Point, Preset, Rect};

/// Corner radius of the pad outline
pub const PAD_CORNER_RADIUS: f32 = 24.0;

/// What the controller needs from a pad widget
pub trait PadSurface {
    /// Pad rectangle in window coordinates
    fn bounds(&self) -> Rect;
    fn current_preset(&self) -> Preset;
    fn set_preset(&mut self, preset: Preset);
    /// Normalized (x, y)
    fn position(&self) -> (f32, f32);
    fn set_position(&mut self, x: f32, y: f32);
}

/// Places the pad inside the window: the largest centred square leaving
/// `padding` on every side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadLayout {
    pub padding: f32,
}

impl PadLayout {
    pub fn new(padding: f32) -> Self {
        Self { padding }
    }

    pub fn pad_bounds(&self, window_width: f32, window_height: f32) -> Rect {
        let side = (window_width.min(window_height) - 2.0 * self.padding).max(0.0);
        Rect::new(
            (window_width - side) / 2.0,
            (window_height - side) / 2.0,
            side,
            side,
        )
    }
}

/// Pad state together with its on-screen bounds
#[derive(Debug, Clone, Default)]
pub struct Pad {
    state: PadState,
    bounds: Rect,
}

impl Pad {
    pub fn new(state: PadState) -> Self {
        Self {
            state,
            bounds: Rect::default(),
        }
    }

    pub fn state(&self) -> &PadState {
        &self.state
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }
}

impl PadSurface for Pad {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn current_preset(&self) -> Preset {
        self.state.preset()
    }

    fn set_preset(&mut self, preset: Preset) {
        self.state.set_preset(preset);
    }

    fn position(&self) -> (f32, f32) {
        self.state.position()
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.state.set_position(x, y);
    }
}

/// Entry chosen in the preset menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Cancel,
    Save,
    Load,
}

impl MenuChoice {
    /// Decode a menu result code (1 = Save, 2 = Load, anything else = Cancel)
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => MenuChoice::Save,
            2 => MenuChoice::Load,
            _ => MenuChoice::Cancel,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            MenuChoice::Cancel => 0,
            MenuChoice::Save => 1,
            MenuChoice::Load => 2,
        }
    }
}

/// Result of a pointer press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Press landed on the pad; dragging started
    Drag,
    /// Press outside the pad started a hold
    HoldStarted,
    /// Second press of a double-click outside the pad
    PresetCycled(Preset),
    /// Nothing happened (menu pending)
    Ignored,
}

/// Input handling for one pad
pub struct PadController {
    gesture: HoldGesture,
    clicks: ClickTracker,
    dragging: bool,
    bridge: Option<Box<dyn ParameterBridge>>,
}

impl std::fmt::Debug for PadController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PadController")
            .field("gesture", &self.gesture)
            .field("dragging", &self.dragging)
            .field("bridged", &self.bridge.is_some())
            .finish()
    }
}

impl PadController {
    pub fn new(double_click_interval: Duration) -> Self {
        Self {
            gesture: HoldGesture::new(),
            clicks: ClickTracker::new(double_click_interval),
            dragging: false,
            bridge: None,
        }
    }

    /// Attach a host parameter bridge (plugin shell only)
    pub fn with_bridge(mut self, bridge: Box<dyn ParameterBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn gesture(&self) -> &HoldGesture {
        &self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn has_bridge(&self) -> bool {
        self.bridge.is_some()
    }

    /// Initialise the pad from host parameters, once, when the editor opens
    pub fn attach(&mut self, surface: &mut dyn PadSurface) {
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.pull(surface);
        }
    }

    pub fn pointer_down(
        &mut self,
        surface: &mut dyn PadSurface,
        at: Point,
        now: Instant,
    ) -> PointerOutcome {
        if self.gesture.phase() == GesturePhase::MenuShown {
            return PointerOutcome::Ignored;
        }

        let bounds = surface.bounds();
        if bounds.contains(at) {
            self.clicks.reset();
            self.dragging = true;
            let (x, y) = bounds.normalize(at);
            surface.set_position(x, y);
            return PointerOutcome::Drag;
        }

        match self.clicks.press(at, now) {
            ClickKind::Double => {
                self.gesture.cancel();
                let next = surface.current_preset().next();
                surface.set_preset(next);
                self.push(surface);
                log::info!("pointer_down: Double-click cycled preset to {}", next);
                PointerOutcome::PresetCycled(next)
            }
            ClickKind::Single => {
                if self.gesture.begin(now) {
                    PointerOutcome::HoldStarted
                } else {
                    PointerOutcome::Ignored
                }
            }
        }
    }

    /// Pointer moved; returns true if a drag updated the position
    pub fn pointer_moved(&mut self, surface: &mut dyn PadSurface, at: Point) -> bool {
        if !self.dragging {
            return false;
        }
        let (x, y) = surface.bounds().normalize(at);
        surface.set_position(x, y);
        true
    }

    /// Pointer released; returns true if a hold was aborted
    pub fn pointer_up(&mut self) -> bool {
        self.dragging = false;
        self.gesture.release()
    }

    /// Advance the hold animation
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        self.gesture.tick(now)
    }

    /// The preset menu (and any dialog it opened) has closed
    pub fn menu_closed(&mut self) {
        self.gesture.menu_closed();
    }

    /// Apply a loaded preset to the pad and, in the plugin shell, the host
    pub fn apply_preset(&mut self, surface: &mut dyn PadSurface, state: &PadState) {
        surface.set_preset(state.preset());
        surface.set_position(state.x(), state.y());
        self.push(surface);
    }

    /// Periodic parameter mirror (plugin shell, 30 Hz)
    pub fn bridge_tick(&mut self, surface: &mut dyn PadSurface) {
        let dragging = self.dragging;
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.sync(surface, dragging);
        }
    }

    fn push(&mut self, surface: &dyn PadSurface) {
        if let Some(bridge) = self.bridge.as_mut() {
            bridge.push(surface);
        }
    }
}
