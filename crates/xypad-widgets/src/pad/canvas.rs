//! Canvas program for the pad

use iced::widget::canvas::{self, Event, Frame, Geometry, Path, Program, Stroke};
use iced::{mouse, Color, Point, Rectangle, Size, Theme};
use xypad_core::controller::{PadLayout, PAD_CORNER_RADIUS};
use xypad_core::gesture::RingStyle;
use xypad_core::PadState;

use super::{Backdrop, PadEvent, PointerSample};
use crate::theme;

/// Radius of the position thumb
pub const THUMB_RADIUS: f32 = 10.0;

/// Layers used to fake a soft drop shadow
const SHADOW_LAYERS: usize = 6;
/// Spread of the outermost shadow layer
const SHADOW_SPREAD: f32 = 18.0;
/// Vertical shadow offset
const SHADOW_OFFSET_Y: f32 = 4.0;

/// Canvas state: whether the left button went down on this canvas
#[derive(Debug, Clone, Copy, Default)]
pub struct PadInteraction {
    pub pressed: bool,
}

/// Canvas program drawing the pad and translating pointer events
pub struct PadCanvas<'a, Message, F>
where
    F: Fn(PadEvent) -> Message,
{
    pub state: &'a PadState,
    pub layout: PadLayout,
    pub backdrop: Backdrop,
    pub ring: Option<RingStyle>,
    pub on_event: F,
}

impl<'a, Message, F> Program<Message> for PadCanvas<'a, Message, F>
where
    Message: Clone,
    F: Fn(PadEvent) -> Message,
{
    type State = PadInteraction;

    fn update(
        &self,
        interaction: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                interaction.pressed = true;
                let sample = pointer_sample(position, bounds.size());
                Some(canvas::Action::publish((self.on_event)(PadEvent::Pressed(sample))).and_capture())
            }
            Event::Mouse(mouse::Event::CursorMoved { .. }) if interaction.pressed => {
                // Keep tracking outside the canvas so drags clamp at the edge
                let absolute = cursor.position()?;
                let position = Point::new(absolute.x - bounds.x, absolute.y - bounds.y);
                let sample = pointer_sample(position, bounds.size());
                Some(canvas::Action::publish((self.on_event)(PadEvent::Moved(sample))))
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) if interaction.pressed => {
                interaction.pressed = false;
                Some(canvas::Action::publish((self.on_event)(PadEvent::Released)))
            }
            _ => None,
        }
    }

    fn mouse_interaction(
        &self,
        interaction: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let Some(position) = cursor.position_in(bounds) else {
            return mouse::Interaction::default();
        };
        let pad = self.layout.pad_bounds(bounds.width, bounds.height);
        if pad.contains(xypad_core::Point::new(position.x, position.y)) {
            if interaction.pressed {
                mouse::Interaction::Grabbing
            } else {
                mouse::Interaction::Pointer
            }
        } else {
            mouse::Interaction::default()
        }
    }

    fn draw(
        &self,
        _interaction: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let palette = theme::palette(self.state.preset());

        let background = match self.backdrop {
            Backdrop::FollowPreset => palette.background,
            Backdrop::Fixed(color) => color,
        };
        frame.fill_rectangle(Point::ORIGIN, bounds.size(), background);

        let pad = self.layout.pad_bounds(bounds.width, bounds.height);
        let top_left = Point::new(pad.x, pad.y);
        let size = Size::new(pad.width, pad.height);
        if size.width <= 0.0 {
            return vec![frame.into_geometry()];
        }

        draw_shadow(&mut frame, top_left, size, palette.shadow);

        let outline = Path::rounded_rectangle(top_left, size, PAD_CORNER_RADIUS.into());
        frame.fill(&outline, palette.pad);

        // Crosshair through the thumb
        let thumb = pad.denormalize(self.state.x(), self.state.y());
        let guide = Stroke::default().with_color(palette.guide).with_width(1.0);
        frame.stroke(
            &Path::line(Point::new(pad.x, thumb.y), Point::new(pad.x + pad.width, thumb.y)),
            guide,
        );
        frame.stroke(
            &Path::line(Point::new(thumb.x, pad.y), Point::new(thumb.x, pad.y + pad.height)),
            guide,
        );

        frame.stroke(
            &outline,
            Stroke::default().with_color(palette.border).with_width(1.0),
        );

        let thumb_path = Path::circle(Point::new(thumb.x, thumb.y), THUMB_RADIUS);
        frame.fill(&thumb_path, palette.thumb);
        frame.stroke(
            &thumb_path,
            Stroke::default().with_color(palette.border).with_width(1.5),
        );

        if let Some(ring) = self.ring {
            frame.stroke(
                &outline,
                Stroke::default()
                    .with_color(theme::ring_color(ring.opacity))
                    .with_width(ring.stroke_width),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Stack translucent, progressively larger outlines under the pad
fn draw_shadow(frame: &mut Frame, top_left: Point, size: Size, color: Color) {
    for (spread, alpha) in shadow_layers(color.a) {
        let path = Path::rounded_rectangle(
            Point::new(top_left.x - spread, top_left.y - spread + SHADOW_OFFSET_Y),
            Size::new(size.width + 2.0 * spread, size.height + 2.0 * spread),
            (PAD_CORNER_RADIUS + spread).into(),
        );
        frame.fill(&path, Color { a: alpha, ..color });
    }
}

/// (spread, alpha) per shadow layer, outermost first; alphas sum to `total_alpha`
fn shadow_layers(total_alpha: f32) -> impl Iterator<Item = (f32, f32)> {
    let step = SHADOW_SPREAD / SHADOW_LAYERS as f32;
    let alpha = total_alpha / SHADOW_LAYERS as f32;
    (0..SHADOW_LAYERS).rev().map(move |i| ((i + 1) as f32 * step, alpha))
}

fn pointer_sample(position: Point, size: Size) -> PointerSample {
    PointerSample {
        position: xypad_core::Point::new(position.x, position.y),
        width: size.width,
        height: size.height,
    }
}
