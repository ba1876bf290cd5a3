//! Save / Load / Cancel menu shown when a hold completes

use iced::widget::{button, column, container, text};
use iced::{Element, Length};
use xypad_core::controller::MenuChoice;

/// Entries in display order
pub const MENU_ENTRIES: [(MenuChoice, &str); 3] = [
    (MenuChoice::Save, "Save"),
    (MenuChoice::Load, "Load"),
    (MenuChoice::Cancel, "Cancel"),
];

/// Render the preset menu
///
/// Every entry dismisses the menu; the caller routes `MenuChoice` to the
/// save dialog, the preset browser, or nothing.
pub fn preset_menu<'a, Message>(
    on_choice: impl Fn(MenuChoice) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let entries = MENU_ENTRIES.iter().map(|&(choice, label)| {
        let style = if choice == MenuChoice::Cancel {
            button::secondary
        } else {
            button::primary
        };
        button(text(label).size(14))
            .width(Length::Fill)
            .padding([8, 16])
            .style(style)
            .on_press(on_choice(choice))
            .into()
    });

    container(column(entries).spacing(6).width(Length::Fixed(160.0)))
        .padding(12)
        .style(container::rounded_box)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_every_choice_once() {
        let codes: Vec<i32> = MENU_ENTRIES.iter().map(|(c, _)| c.code()).collect();
        assert_eq!(codes, vec![1, 2, 0]);
    }
}
