//! View function for the XY pad

use iced::widget::Canvas;
use iced::{Element, Length};
use xypad_core::controller::PadLayout;
use xypad_core::gesture::RingStyle;
use xypad_core::PadState;

use super::canvas::PadCanvas;
use super::{Backdrop, PadEvent};

/// Create the pad element, filling the available space
///
/// # Arguments
///
/// * `state` - Pad position and preset to draw
/// * `layout` - Where the pad sits inside the canvas
/// * `backdrop` - Fill for the area around the pad
/// * `ring` - Hold ring appearance for this frame (`None` hides it)
/// * `on_event` - Callback for pointer activity
///
/// # Example
///
/// ```ignore
/// let pad = xy_pad(
///     self.pad.state(),
///     self.layout,
///     Backdrop::FollowPreset,
///     ring_style(self.controller.gesture().progress()),
///     Message::Pad,
/// );
/// ```
pub fn xy_pad<'a, Message>(
    state: &'a PadState,
    layout: PadLayout,
    backdrop: Backdrop,
    ring: Option<RingStyle>,
    on_event: impl Fn(PadEvent) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    Canvas::new(PadCanvas {
        state,
        layout,
        backdrop,
        ring,
        on_event,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
