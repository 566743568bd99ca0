//! Sortscope Player - interactive sorting visualizer with tone feedback
//!
//! This is the main entry point for the GUI application. It:
//! 1. Starts the CPAL tone output (falling back to silent operation)
//! 2. Launches the iced GUI application
//! 3. Hands the shared tone controls to the UI and run worker

mod audio;
mod config;
mod ui;
mod worker;

use iced::{Size, Task};

use ui::{app::Message, App};

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("sortscope-player starting up");

    let config_path = config::default_config_path();
    let config = config::load_config(&config_path);

    // Start the tone output; a missing device is not fatal, the run just
    // plays silently
    let (audio_handle, tones) = match audio::start_audio(config.audio.volume) {
        Ok((handle, tones)) => {
            log::info!("Tone feedback enabled ({} Hz)", handle.sample_rate());
            (Some(handle), Some(tones))
        }
        Err(e) => {
            eprintln!("Warning: could not start audio output: {}", e);
            eprintln!("Running without tone feedback");
            (None, None)
        }
    };

    let result = iced::application(
        move || {
            let app = App::new(config.clone(), config_path.clone(), tones.clone());
            (app, Task::none())
        },
        update,
        view,
    )
    .subscription(subscription)
    .theme(theme)
    .title("Sortscope")
    .window_size(Size::new(1000.0, 700.0))
    .run();

    // Keep the audio stream alive until the GUI exits
    drop(audio_handle);
    log::info!("sortscope-player stopped");

    result
}

/// Update function for iced
fn update(app: &mut App, message: Message) -> Task<Message> {
    app.update(message)
}

/// View function for iced
fn view(app: &App) -> iced::Element<'_, Message> {
    app.view()
}

/// Subscription function for iced
fn subscription(app: &App) -> iced::Subscription<Message> {
    app.subscription()
}

/// Theme function for iced
fn theme(app: &App) -> iced::Theme {
    app.theme()
}
