//! Parameter bridge between the pad and the host parameters
//!
//! The plugin editor mirrors the pad into the host parameters on a 30 Hz
//! tick. With `follow_host` enabled the tick first looks for host-side
//! changes (automation) made since the last push and pulls them into the
//! pad. While the pointer is down on the pad the drag wins and inbound
//! changes are overwritten.

use std::sync::Arc;
use std::time::Duration;

use super::params::{ParamSnapshot, PluginParams};
use crate::controller::PadSurface;
use crate::types::PadState;

/// Parameter mirror cadence in the plugin shell (30 Hz)
pub const BRIDGE_INTERVAL: Duration = Duration::from_millis(33);

/// Synchronisation strategy between a pad and a parameter store
pub trait ParameterBridge {
    /// Copy stored values into the pad (editor construction)
    fn pull(&mut self, surface: &mut dyn PadSurface);

    /// Copy pad values out immediately (preset load, preset cycle)
    fn push(&mut self, surface: &dyn PadSurface);

    /// Periodic mirror; `dragging` is true while the pointer holds the pad
    fn sync(&mut self, surface: &mut dyn PadSurface, dragging: bool);
}

/// Bridge onto the plugin's atomic host parameters
#[derive(Debug)]
pub struct HostParamBridge {
    params: Arc<PluginParams>,
    follow_host: bool,
    last_pushed: Option<ParamSnapshot>,
}

impl HostParamBridge {
    pub fn new(params: Arc<PluginParams>, follow_host: bool) -> Self {
        Self {
            params,
            follow_host,
            last_pushed: None,
        }
    }

    fn snapshot_of(surface: &dyn PadSurface) -> ParamSnapshot {
        let (x, y) = surface.position();
        ParamSnapshot::from_pad(&PadState::new(x, y, surface.current_preset()))
    }

    fn apply_to(surface: &mut dyn PadSurface, snapshot: ParamSnapshot) {
        surface.set_preset(snapshot.preset);
        surface.set_position(snapshot.x, snapshot.y);
    }
}

impl ParameterBridge for HostParamBridge {
    fn pull(&mut self, surface: &mut dyn PadSurface) {
        let snapshot = self.params.snapshot();
        log::info!("bridge: Initialising pad from host {:?}", snapshot);
        Self::apply_to(surface, snapshot);
        self.last_pushed = Some(snapshot);
    }

    fn push(&mut self, surface: &dyn PadSurface) {
        let snapshot = Self::snapshot_of(surface);
        self.params.apply(snapshot);
        // Read back so comparisons see exactly what the params hold
        self.last_pushed = Some(self.params.snapshot());
    }

    fn sync(&mut self, surface: &mut dyn PadSurface, dragging: bool) {
        if self.follow_host && !dragging {
            let host = self.params.snapshot();
            if self.last_pushed.is_some_and(|pushed| pushed != host) {
                log::debug!("bridge: Host automation {:?}", host);
                Self::apply_to(surface, host);
            }
        }
        self.push(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Pad;
    use crate::types::Preset;

    #[test]
    fn test_pull_then_push() {
        let params = Arc::new(PluginParams::new());
        params.x.set(0.9);
        let mut pad = Pad::default();
        let mut bridge = HostParamBridge::new(Arc::clone(&params), true);

        bridge.pull(&mut pad);
        assert_eq!(pad.position(), (0.9, 0.5));

        pad.set_position(0.3, 0.4);
        pad.set_preset(Preset::Red);
        bridge.sync(&mut pad, false);
        assert_eq!(params.snapshot(), ParamSnapshot { x: 0.3, y: 0.4, preset: Preset::Red });
    }

    #[test]
    fn test_host_automation_followed_when_idle() {
        let params = Arc::new(PluginParams::new());
        let mut pad = Pad::default();
        let mut bridge = HostParamBridge::new(Arc::clone(&params), true);
        bridge.pull(&mut pad);

        // Host automates between ticks
        params.x.set(0.1);
        params.preset.set(2);
        bridge.sync(&mut pad, false);
        assert_eq!(pad.position(), (0.1, 0.5));
        assert_eq!(pad.current_preset(), Preset::Black);
    }

    #[test]
    fn test_drag_wins_over_automation() {
        let params = Arc::new(PluginParams::new());
        let mut pad = Pad::default();
        let mut bridge = HostParamBridge::new(Arc::clone(&params), true);
        bridge.pull(&mut pad);

        pad.set_position(0.8, 0.8);
        params.x.set(0.1);
        bridge.sync(&mut pad, true);
        assert_eq!(pad.position(), (0.8, 0.8));
        assert_eq!(params.x.get(), 0.8);
    }

    #[test]
    fn test_construction_only_mode_ignores_host() {
        let params = Arc::new(PluginParams::new());
        let mut pad = Pad::default();
        let mut bridge = HostParamBridge::new(Arc::clone(&params), false);
        bridge.pull(&mut pad);

        params.y.set(0.0);
        bridge.sync(&mut pad, false);
        assert_eq!(pad.position(), (0.5, 0.5));
        assert_eq!(params.y.get(), 0.5);
    }
}
