//! Progress ring appearance
//!
//! The ring hugs the pad outline. It stays hidden until the hold passes
//! [`VISIBILITY_THRESHOLD`](super::VISIBILITY_THRESHOLD) so quick double-clicks
//! don't flash it; above that, opacity and stroke width grow linearly.

use super::VISIBILITY_THRESHOLD;

/// Ring colour (#007AFF)
pub const RING_COLOR_RGB: (u8, u8, u8) = (0x00, 0x7A, 0xFF);

/// Corner radius of the ring, matching the pad outline
pub const RING_CORNER_RADIUS: f32 = 24.0;

const MIN_OPACITY: f32 = 0.3;
const MIN_STROKE: f32 = 2.0;
const STROKE_RANGE: f32 = 10.0;

/// Resolved ring appearance for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingStyle {
    /// Alpha in [0.3, 1.0]
    pub opacity: f32,
    /// Stroke width in pixels, [2, 12]
    pub stroke_width: f32,
}

/// Remap raw progress so the visible ring starts at 0 exactly at the threshold
pub fn visible_progress(progress: f32) -> Option<f32> {
    if progress <= VISIBILITY_THRESHOLD {
        return None;
    }
    Some(((progress - VISIBILITY_THRESHOLD) / (1.0 - VISIBILITY_THRESHOLD)).min(1.0))
}

/// Ring appearance for a raw progress ratio, `None` when hidden
pub fn ring_style(progress: f32) -> Option<RingStyle> {
    visible_progress(progress).map(|r| RingStyle {
        opacity: MIN_OPACITY + r * (1.0 - MIN_OPACITY),
        stroke_width: MIN_STROKE + r * STROKE_RANGE,
    })
}
