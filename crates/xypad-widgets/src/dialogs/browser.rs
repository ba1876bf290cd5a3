//! Preset browser: lists preset files in the presets folder

use std::path::{Path, PathBuf};

use iced::widget::{button, column, container, row, scrollable, text, Space};
use iced::{Alignment, Color, Element, Length};
use xypad_core::preset::{list_presets, preset_display_name};

/// Messages from the preset browser
#[derive(Debug, Clone)]
pub enum BrowserMessage {
    Select(PathBuf),
    Cancel,
}

/// Preset browser state
#[derive(Debug, Clone, Default)]
pub struct PresetBrowserState {
    pub folder: PathBuf,
    pub entries: Vec<PathBuf>,
    /// Folder could not be read
    pub error: Option<String>,
}

impl PresetBrowserState {
    /// Scan `folder` for preset files
    pub fn open(folder: &Path) -> Self {
        let mut state = Self {
            folder: folder.to_path_buf(),
            ..Self::default()
        };
        state.refresh();
        state
    }

    pub fn refresh(&mut self) {
        match list_presets(&self.folder) {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(e) => {
                log::warn!("preset_browser: {}", e);
                self.entries.clear();
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Render the preset browser
pub fn preset_browser<'a, Message>(
    state: &'a PresetBrowserState,
    on_message: impl Fn(BrowserMessage) -> Message + 'a,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let header = row![
        text("Load Preset").size(18),
        Space::new().width(Length::Fill),
        button(text("×").size(14))
            .padding([4, 8])
            .style(button::secondary)
            .on_press(on_message(BrowserMessage::Cancel)),
    ]
    .align_y(Alignment::Center);

    let muted = Color::from_rgb(0.5, 0.5, 0.5);
    let listing: Element<'a, Message> = if let Some(error) = &state.error {
        text(error.as_str())
            .size(12)
            .color(Color::from_rgb(0.9, 0.2, 0.2))
            .into()
    } else if state.entries.is_empty() {
        text(format!("No presets in {}", state.folder.display()))
            .size(12)
            .color(muted)
            .into()
    } else {
        let items = state.entries.iter().map(|path| {
            button(text(preset_display_name(path)).size(14))
                .width(Length::Fill)
                .padding([6, 12])
                .style(button::text)
                .on_press(on_message(BrowserMessage::Select(path.clone())))
                .into()
        });
        scrollable(column(items).spacing(2))
            .height(Length::Fixed(180.0))
            .into()
    };

    let actions = row![
        Space::new().width(Length::Fill),
        button(text("Cancel").size(14))
            .padding([8, 16])
            .style(button::secondary)
            .on_press(on_message(BrowserMessage::Cancel)),
    ];

    container(
        column![header, listing, actions]
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
    fn test_open_lists_json_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), "{}").unwrap();
        std::fs::write(dir.path().join("a.json"), "{}").unwrap();
        std::fs::write(dir.path().join("readme.txt"), "").unwrap();

        let state = PresetBrowserState::open(dir.path());
        assert!(state.error.is_none());
        let names: Vec<String> = state.entries.iter().map(|p| preset_display_name(p)).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_refresh_picks_up_new_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = PresetBrowserState::open(dir.path());
        assert!(state.entries.is_empty());

        std::fs::write(dir.path().join("new.json"), "{}").unwrap();
        state.refresh();
        assert_eq!(state.entries.len(), 1);
    }
}
