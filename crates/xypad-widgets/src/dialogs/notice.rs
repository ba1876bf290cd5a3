//! One-button notification dialog

use std::fmt::Display;
use std::path::Path;

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

/// A message for the user with a single dismiss button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Confirmation after a successful save
    pub fn saved(path: &Path) -> Self {
        Self::new("Preset Saved", format!("Saved to {}", path.display()))
    }

    /// Confirmation after a successful load
    pub fn loaded(path: &Path) -> Self {
        Self::new("Preset Loaded", format!("Loaded {}", file_name(path)))
    }

    /// Preset file could not be loaded; the pad is left unchanged
    pub fn load_failed(path: &Path, error: impl Display) -> Self {
        Self::new(
            "Preset Load Failed",
            format!("{} was not loaded: {}", file_name(path), error),
        )
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render a notice; `on_dismiss` is sent by the OK button
pub fn notice<'a, Message>(notice: &'a Notice, on_dismiss: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    container(
        column![
            text(notice.title.as_str()).size(18),
            text(notice.body.as_str()).size(14),
            row![
                Space::new().width(Length::Fill),
                button(text("OK").size(14))
                    .padding([8, 16])
                    .style(button::primary)
                    .on_press(on_dismiss),
            ],
        ]
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
    use std::path::PathBuf;
    use xypad_core::preset::PresetError;

    #[test]
    fn test_load_failed_names_file() {
        let path = PathBuf::from("/presets/broken.json");
        let error = PresetError::InvalidPreset {
            path: path.clone(),
            index: 7,
        };
        let notice = Notice::load_failed(&path, &error);
        assert!(notice.body.starts_with("broken.json"));
        assert!(notice.body.contains('7'));
        assert_eq!(notice.title, "Preset Load Failed");
    }

    #[test]
    fn test_confirmations_name_file() {
        let path = PathBuf::from("/presets/warm.json");
        assert!(Notice::saved(&path).body.contains("warm.json"));
        assert_eq!(Notice::loaded(&path).body, "Loaded warm.json");
    }
}
