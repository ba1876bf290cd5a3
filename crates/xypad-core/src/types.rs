//! Core types for the XY pad
//!
//! Shared between the widgets crate and the application shells.

use serde::{Deserialize, Serialize};

/// Number of cosmetic presets
pub const NUM_PRESETS: usize = 3;

/// Default normalized position on both axes
pub const DEFAULT_POSITION: f32 = 0.5;

/// Cosmetic preset applied to the pad and its container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    Blue,
    Red,
    Black,
}

impl Preset {
    /// All presets in cycle order
    pub const ALL: [Preset; NUM_PRESETS] = [Preset::Blue, Preset::Red, Preset::Black];

    /// Integer index as stored in preset files and host parameters (0-2)
    pub fn index(self) -> usize {
        match self {
            Preset::Blue => 0,
            Preset::Red => 1,
            Preset::Black => 2,
        }
    }

    /// Convert from an index, `None` when out of range
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Preset::Blue),
            1 => Some(Preset::Red),
            2 => Some(Preset::Black),
            _ => None,
        }
    }

    /// Next preset with wraparound (Blue → Red → Black → Blue)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % NUM_PRESETS]
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Preset::Blue => "Blue",
            Preset::Red => "Red",
            Preset::Black => "Black",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pad position and preset
///
/// Position is normalized to [0,1] on both axes with y = 0 at the top edge.
/// Setters clamp, so a `PadState` never holds an out-of-range coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PadState {
    x: f32,
    y: f32,
    preset: Preset,
}

impl Default for PadState {
    fn default() -> Self {
        Self {
            x: DEFAULT_POSITION,
            y: DEFAULT_POSITION,
            preset: Preset::default(),
        }
    }
}

impl PadState {
    pub fn new(x: f32, y: f32, preset: Preset) -> Self {
        let mut state = Self {
            x: DEFAULT_POSITION,
            y: DEFAULT_POSITION,
            preset,
        };
        state.set_position(x, y);
        state
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Current position as (x, y)
    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Set the position, clamping both axes to [0,1] (NaN maps to the default)
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.x = clamp_unit(x);
        self.y = clamp_unit(y);
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn set_preset(&mut self, preset: Preset) {
        self.preset = preset;
    }
}

/// Clamp to [0,1]; NaN becomes the default position
pub fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        DEFAULT_POSITION
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// A point in window coordinates (logical pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Axis-aligned rectangle in window coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Whether the point lies inside (left/top edges inclusive, right/bottom exclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }

    /// Map a point to normalized coordinates within this rectangle, clamped to [0,1]
    pub fn normalize(&self, point: Point) -> (f32, f32) {
        if self.width <= 0.0 || self.height <= 0.0 {
            return (DEFAULT_POSITION, DEFAULT_POSITION);
        }
        (
            ((point.x - self.x) / self.width).clamp(0.0, 1.0),
            ((point.y - self.y) / self.height).clamp(0.0, 1.0),
        )
    }

    /// Map normalized coordinates back to a point inside this rectangle
    pub fn denormalize(&self, x: f32, y: f32) -> Point {
        Point::new(self.x + x * self.width, self.y + y * self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_cycle_wraps() {
        assert_eq!(Preset::Blue.next(), Preset::Red);
        assert_eq!(Preset::Red.next(), Preset::Black);
        assert_eq!(Preset::Black.next(), Preset::Blue);
    }

    #[test]
    fn test_preset_index_range() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_index(preset.index() as i64), Some(preset));
        }
        assert_eq!(Preset::from_index(3), None);
        assert_eq!(Preset::from_index(-1), None);
    }

    #[test]
    fn test_pad_state_clamps_position() {
        let state = PadState::new(1.5, -0.25, Preset::Red);
        assert_eq!(state.position(), (1.0, 0.0));

        let mut state = PadState::default();
        state.set_position(f32::NAN, 0.3);
        assert_eq!(state.position(), (DEFAULT_POSITION, 0.3));
    }

    #[test]
    fn test_rect_contains_and_normalize() {
        let rect = Rect::new(26.0, 26.0, 316.0, 316.0);
        assert!(rect.contains(Point::new(26.0, 26.0)));
        assert!(!rect.contains(Point::new(342.0, 100.0)));
        assert!(!rect.contains(Point::new(10.0, 10.0)));

        let (x, y) = rect.normalize(Point::new(184.0, 26.0));
        assert!((x - 0.5).abs() < 1e-6);
        assert_eq!(y, 0.0);

        let (x, y) = rect.normalize(Point::new(500.0, -20.0));
        assert_eq!((x, y), (1.0, 0.0));
    }
}
