//! Save preset dialog

use std::path::Path;

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Color, Element, Length};

/// Name pre-filled when the dialog opens
pub const DEFAULT_PRESET_NAME: &str = "XYPad Preset";

/// Save dialog state
#[derive(Debug, Clone)]
pub struct SaveDialogState {
    pub name: String,
    /// Last failure, shown under the input until the name is edited
    pub error: Option<String>,
}

impl Default for SaveDialogState {
    fn default() -> Self {
        Self {
            name: DEFAULT_PRESET_NAME.to_string(),
            error: None,
        }
    }
}

/// Messages from the save dialog
#[derive(Debug, Clone)]
pub enum SaveDialogMessage {
    SetName(String),
    Submit,
    Cancel,
}

/// What the owner should do after a dialog message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDialogAction {
    /// Write the preset under this (trimmed) name
    Save(String),
    Cancel,
}

impl SaveDialogState {
    pub fn can_save(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Keep the dialog open and show `error`
    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn handle_message(&mut self, message: SaveDialogMessage) -> Option<SaveDialogAction> {
        match message {
            SaveDialogMessage::SetName(name) => {
                self.name = name;
                self.error = None;
                None
            }
            SaveDialogMessage::Submit => {
                if self.can_save() {
                    Some(SaveDialogAction::Save(self.name.trim().to_string()))
                } else {
                    None
                }
            }
            SaveDialogMessage::Cancel => Some(SaveDialogAction::Cancel),
        }
    }
}

/// Render the save dialog
///
/// `folder` is shown so the user knows where the file lands.
pub fn save_dialog<'a, Message, F>(
    state: &'a SaveDialogState,
    folder: &Path,
    on_message: F,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: Fn(SaveDialogMessage) -> Message + Clone + 'a,
{
    let can_save = state.can_save();

    let header = row![
        text("Save Preset").size(18),
        Space::new().width(Length::Fill),
        button(text("×").size(14))
            .padding([4, 8])
            .style(button::secondary)
            .on_press(on_message(SaveDialogMessage::Cancel)),
    ]
    .align_y(Alignment::Center);

    let mut input = text_input("Enter preset name...", &state.name)
        .on_input({
            let on_message = on_message.clone();
            move |name| on_message(SaveDialogMessage::SetName(name))
        })
        .padding(8)
        .size(14);
    if can_save {
        input = input.on_submit(on_message(SaveDialogMessage::Submit));
    }

    let location = text(format!("Folder: {}", folder.display()))
        .size(12)
        .color(Color::from_rgb(0.5, 0.5, 0.5));

    let error: Element<'a, Message> = match &state.error {
        Some(error) => text(error.as_str())
            .size(12)
            .color(Color::from_rgb(0.9, 0.2, 0.2))
            .into(),
        None => Space::new().height(0).into(),
    };

    let save_btn = if can_save {
        button(text("Save").size(14))
            .padding([8, 16])
            .style(button::primary)
            .on_press(on_message(SaveDialogMessage::Submit))
    } else {
        button(text("Save").size(14)).padding([8, 16])
    };

    let actions = row![
        button(text("Cancel").size(14))
            .padding([8, 16])
            .style(button::secondary)
            .on_press(on_message(SaveDialogMessage::Cancel)),
        Space::new().width(Length::Fill),
        save_btn,
    ]
    .spacing(8);

    container(
        column![header, text("Preset Name:").size(14), input, location, error, actions]
            .spacing(12)
            .width(Length::Fixed(300.0)),
    )
    .padding(16)
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_trims_name() {
        let mut state = SaveDialogState::default();
        state.handle_message(SaveDialogMessage::SetName("  warm pad ".into()));
        assert_eq!(
            state.handle_message(SaveDialogMessage::Submit),
            Some(SaveDialogAction::Save("warm pad".into()))
        );
    }

    #[test]
    fn test_blank_name_cannot_submit() {
        let mut state = SaveDialogState::default();
        state.handle_message(SaveDialogMessage::SetName("   ".into()));
        assert!(!state.can_save());
        assert_eq!(state.handle_message(SaveDialogMessage::Submit), None);
        assert_eq!(
            state.handle_message(SaveDialogMessage::Cancel),
            Some(SaveDialogAction::Cancel)
        );
    }

    #[test]
    fn test_editing_clears_error() {
        let mut state = SaveDialogState::default();
        state.fail("disk full");
        assert!(state.error.is_some());
        state.handle_message(SaveDialogMessage::SetName("other".into()));
        assert!(state.error.is_none());
    }
}
