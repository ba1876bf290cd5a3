//! XY Pad
//!
//! Entry point for both shells:
//! 1. Loads `~/.config/xypad/config.yaml` (writing defaults on first run)
//! 2. Picks the standalone window or the plugin editor shell
//! 3. Launches the iced application
//!
//! ## Command line flags
//!
//! - `--plugin`: Run the plugin editor shell (700×700, host parameters, session restore)

mod host;
mod ui;

use iced::{Size, Task};

use ui::app::{PadApp, Shell};
use ui::message::Message;
use xypad_core::config::{default_config_path, load_config, save_config, PadConfig};

fn main() -> iced::Result {
    let args: Vec<String> = std::env::args().collect();
    let shell = if args.iter().any(|arg| arg == "--plugin") {
        Shell::Plugin
    } else {
        Shell::Standalone
    };

    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("xypad starting up ({:?} shell)", shell);

    let config_path = default_config_path();
    let config: PadConfig = load_config(&config_path);
    if !config_path.exists() {
        // Write the defaults so there is a file to edit
        if let Err(e) = save_config(&config, &config_path) {
            log::warn!("Could not write default config: {:#}", e);
        }
    }
    let window_size = shell.geometry(&config).window_size;

    iced::application(
        move || -> (PadApp, Task<Message>) { PadApp::new(config.clone(), shell) },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title(shell.title())
    .window_size(Size::new(window_size, window_size))
    .run()
}

/// Update function for iced
fn update(app: &mut PadApp, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &PadApp) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &PadApp) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &PadApp) -> iced::Theme {
    app.theme()
}
