//! Modal overlay building utilities

use iced::widget::{center, container, mouse_area, opaque, stack, Space};
use iced::{Color, Element, Length};

/// Full-window dark backdrop that sends `close_message` when clicked
pub fn build_backdrop<'a, Message>(close_message: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme| container::Style {
                background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.6).into()),
                ..Default::default()
            }),
    )
    .on_press(close_message)
    .into()
}

/// Stack `modal_content` centred above `base`, behind a click-to-close backdrop
///
/// # Example
/// ```ignore
/// with_modal_overlay(pad, preset_menu(Message::MenuChoice), Message::MenuChoice(MenuChoice::Cancel))
/// ```
pub fn with_modal_overlay<'a, Message>(
    base: Element<'a, Message>,
    modal_content: Element<'a, Message>,
    close_message: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = build_backdrop(close_message);

    let modal = center(opaque(modal_content))
        .width(Length::Fill)
        .height(Length::Fill);

    stack![base, backdrop, modal].into()
}
