//! Hold-to-reveal gesture
//!
//! A press outside the pad starts a timed hold. While held, a periodic tick
//! converts elapsed time into a progress ratio; once the hold lasts
//! [`HOLD_DURATION`] the preset menu is requested exactly once.
//!
//! ```text
//!            pointer-down outside pad
//!   Idle ─────────────────────────────▶ Holding ──┐ tick (progress < 1)
//!    ▲  ◀──── pointer-up / double-click ──┘  ▲────┘
//!    │                                       │
//!    │                              elapsed ≥ 3000ms
//!    │                                       ▼
//!    └──────────── menu closed ─────────── MenuShown
//! ```
//!
//! Time is passed in by the caller so the machine is deterministic under test.

mod click;
mod ring;

use std::time::{Duration, Instant};

pub use click::{ClickKind, ClickTracker, DEFAULT_DOUBLE_CLICK_INTERVAL, DOUBLE_CLICK_DISTANCE};
pub use ring::{ring_style, visible_progress, RingStyle, RING_COLOR_RGB, RING_CORNER_RADIUS};

/// How long the pointer must be held before the menu is revealed
pub const HOLD_DURATION: Duration = Duration::from_millis(3000);

/// Animation tick cadence while holding (~60 Hz)
pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Progress below this ratio is not rendered (~210ms into the hold)
pub const VISIBILITY_THRESHOLD: f32 = 0.07;

/// Phase of the hold gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Holding,
    MenuShown,
}

/// Result of advancing the gesture by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Not holding; the tick did nothing
    Inactive,
    /// Still holding; carries the new progress ratio (redraw needed)
    Progress(f32),
    /// The hold completed on this tick; show the preset menu
    MenuTriggered,
}

/// Hold gesture state
#[derive(Debug, Clone, Default)]
pub struct HoldGesture {
    phase: GesturePhase,
    start: Option<Instant>,
    progress: f32,
    menu_triggered: bool,
}

impl HoldGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Raw progress ratio in [0,1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the periodic tick should be running
    pub fn is_ticking(&self) -> bool {
        self.phase == GesturePhase::Holding
    }

    pub fn menu_triggered(&self) -> bool {
        self.menu_triggered
    }

    /// Start a hold at `now`. Returns false if a gesture is already in flight.
    pub fn begin(&mut self, now: Instant) -> bool {
        if self.phase != GesturePhase::Idle {
            log::debug!("hold: ignoring press in {:?}", self.phase);
            return false;
        }
        self.phase = GesturePhase::Holding;
        self.start = Some(now);
        self.progress = 0.0;
        self.menu_triggered = false;
        log::debug!("hold: started");
        true
    }

    /// Advance the hold to `now`
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.phase != GesturePhase::Holding || self.menu_triggered {
            return TickOutcome::Inactive;
        }
        let Some(start) = self.start else {
            return TickOutcome::Inactive;
        };

        let elapsed = now.saturating_duration_since(start);
        if elapsed >= HOLD_DURATION {
            self.menu_triggered = true;
            self.phase = GesturePhase::MenuShown;
            self.progress = 0.0;
            log::debug!("hold: completed after {}ms", elapsed.as_millis());
            return TickOutcome::MenuTriggered;
        }

        let ratio = (elapsed.as_secs_f32() / HOLD_DURATION.as_secs_f32()).min(1.0);
        // Never move backwards, even if the caller hands us an earlier instant
        self.progress = self.progress.max(ratio);
        TickOutcome::Progress(self.progress)
    }

    /// Pointer released. Aborts a hold in progress; returns true if one was aborted.
    ///
    /// Releasing after the menu has been triggered leaves the menu up.
    pub fn release(&mut self) -> bool {
        if self.phase != GesturePhase::Holding {
            return false;
        }
        log::debug!("hold: released at progress {:.3}", self.progress);
        self.reset();
        true
    }

    /// Abort a hold in progress without showing the menu (double-click)
    pub fn cancel(&mut self) {
        if self.phase == GesturePhase::Holding {
            self.reset();
        }
    }

    /// The preset menu was dismissed (Save, Load or Cancel)
    ///
    /// Only acts in `MenuShown`; a hold started after the menu went away is
    /// left alone.
    pub fn menu_closed(&mut self) {
        if self.phase != GesturePhase::MenuShown {
            return;
        }
        log::debug!("hold: menu closed");
        self.reset();
    }

    /// Progress remapped for display, `None` below the visibility threshold
    pub fn visible_progress(&self) -> Option<f32> {
        if self.phase != GesturePhase::Holding {
            return None;
        }
        visible_progress(self.progress)
    }

    fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.start = None;
        self.progress = 0.0;
        self.menu_triggered = false;
    }
}
