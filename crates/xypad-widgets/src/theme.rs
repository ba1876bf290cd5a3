//! Preset palettes and shared colours
//!
//! Each preset recolours both the pad and the window around it.

use iced::Color;
use xypad_core::gesture::RING_COLOR_RGB;
use xypad_core::Preset;

/// Neutral window background used by the plugin editor
pub const PLUGIN_BACKGROUND: Color = Color::from_rgb(0.961, 0.961, 0.969); // #F5F5F7

/// Colours for one preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    /// Window background (standalone shell)
    pub background: Color,
    /// Pad fill
    pub pad: Color,
    /// Pad outline
    pub border: Color,
    /// Crosshair guide lines
    pub guide: Color,
    /// Position thumb
    pub thumb: Color,
    /// Drop shadow under the pad
    pub shadow: Color,
    /// Whether text on `background` should be light
    pub dark: bool,
}

/// Palette for a preset
pub fn palette(preset: Preset) -> Palette {
    match preset {
        Preset::Blue => Palette {
            background: Color::WHITE,
            pad: Color::from_rgb8(0x00, 0x7A, 0xFF),
            border: Color::BLACK,
            guide: Color::from_rgba(1.0, 1.0, 1.0, 0.25),
            thumb: Color::WHITE,
            shadow: Color::from_rgba8(0, 0, 0, 0x14 as f32 / 255.0),
            dark: false,
        },
        Preset::Red => Palette {
            background: Color::from_rgb8(0xFF, 0x00, 0x00),
            pad: Color::WHITE,
            border: Color::BLACK,
            guide: Color::from_rgba(1.0, 0.0, 0.0, 0.2),
            thumb: Color::from_rgb8(0xFF, 0x00, 0x00),
            shadow: Color::from_rgba8(0, 0, 0, 0x30 as f32 / 255.0),
            dark: false,
        },
        Preset::Black => Palette {
            background: Color::from_rgb8(0x0A, 0x0A, 0x0A),
            pad: Color::from_rgb8(0x1C, 0x1C, 0x1E),
            border: Color::WHITE,
            guide: Color::from_rgba(1.0, 1.0, 1.0, 0.15),
            thumb: Color::WHITE,
            shadow: Color::from_rgba8(0, 0, 0, 0x40 as f32 / 255.0),
            dark: true,
        },
    }
}

/// Hold ring colour at the given opacity
pub fn ring_color(opacity: f32) -> Color {
    let (r, g, b) = RING_COLOR_RGB;
    Color::from_rgba8(r, g, b, opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_darkens_with_preset() {
        let alphas: Vec<f32> = Preset::ALL.iter().map(|p| palette(*p).shadow.a).collect();
        assert!(alphas[0] < alphas[1] && alphas[1] < alphas[2]);
    }

    #[test]
    fn test_black_preset_uses_light_border() {
        assert_eq!(palette(Preset::Black).border, Color::WHITE);
        assert!(palette(Preset::Black).dark);
        assert!(!palette(Preset::Blue).dark);
    }

    #[test]
    fn test_ring_color_opacity() {
        let c = ring_color(0.65);
        assert!((c.a - 0.65).abs() < 1e-6);
        assert!((c.b - 1.0).abs() < 1e-6);
    }
}
