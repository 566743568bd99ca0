//! Main iced application for Sortscope Player
//!
//! Manages the control panel (algorithm picker, array size, start/stop),
//! mirrors the run worker's published frames for the canvas, and persists
//! control changes back to the config file.

use std::path::PathBuf;
use std::sync::Arc;

use iced::time;
use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Center, Element, Fill, Subscription, Task, Theme};

use sortscope_core::run::RunOutcome;
use sortscope_core::{Algorithm, MAX_SEQUENCE_LEN, MIN_SEQUENCE_LEN};

use crate::audio::ToneChannels;
use crate::config::{save_config, PlayerConfig};
use crate::worker::{DisplayFrame, RunHandle, SharedFrame};
use super::canvas;

/// Application state
pub struct App {
    /// Persisted settings (algorithm, array size, volume)
    config: PlayerConfig,
    config_path: PathBuf,
    /// Draft text in the array size field
    size_input: String,
    /// Tone channel controls, absent when audio failed to start
    tones: Option<Arc<ToneChannels>>,
    /// Frame slot shared with the run thread
    frame: SharedFrame,
    /// Local copy of the latest frame for the view
    current: DisplayFrame,
    /// In-flight run, if any
    run: Option<RunHandle>,
    /// Status line
    status: String,
}

/// Messages that can be sent to the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Tick for periodic UI updates while a run is live
    Tick,
    /// Algorithm picked from the combo box
    AlgorithmSelected(Algorithm),
    /// Array size field edited
    ArraySizeChanged(String),
    /// Start a visualization run
    Start,
    /// Request the active run stop
    Stop,
}

impl App {
    pub fn new(config: PlayerConfig, config_path: PathBuf, tones: Option<Arc<ToneChannels>>) -> Self {
        let status = if tones.is_some() {
            "Ready".to_string()
        } else {
            "Ready (no audio output)".to_string()
        };
        Self {
            size_input: config.playback.array_size.to_string(),
            config,
            config_path,
            tones,
            frame: SharedFrame::default(),
            current: DisplayFrame::default(),
            run: None,
            status,
        }
    }

    /// Update application state
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                // Mirror the run thread's latest frame; skip a tick rather
                // than stall the UI if the slot is being written
                if let Ok(frame) = self.frame.try_lock() {
                    self.current = frame.clone();
                }

                if let Some(report) = self.run.as_ref().and_then(|run| run.try_finish()) {
                    self.run = None;
                    self.status = match report.outcome {
                        RunOutcome::Completed => {
                            format!("{} completed", self.config.playback.algorithm)
                        }
                        RunOutcome::Cancelled => "Stopped".to_string(),
                    };
                    self.current.values = report.values;
                    self.current.index_a = None;
                    self.current.index_b = None;
                }
                Task::none()
            }

            Message::AlgorithmSelected(algorithm) => {
                self.config.playback.algorithm = algorithm;
                self.persist_config();
                Task::none()
            }

            Message::ArraySizeChanged(input) => {
                // Accept only digits while typing; clamping happens on start
                if input.is_empty() || input.chars().all(|c| c.is_ascii_digit()) {
                    self.size_input = input;
                }
                Task::none()
            }

            Message::Start => {
                if self.run.is_some() {
                    return Task::none();
                }

                let length = self
                    .size_input
                    .parse::<usize>()
                    .unwrap_or(self.config.playback.array_size)
                    .clamp(MIN_SEQUENCE_LEN, MAX_SEQUENCE_LEN);
                self.size_input = length.to_string();
                self.config.playback.array_size = length;
                self.persist_config();

                let algorithm = self.config.playback.algorithm;
                self.run = Some(RunHandle::spawn(
                    algorithm,
                    length,
                    self.frame.clone(),
                    self.tones.clone(),
                ));
                self.status = format!("Running {} over {} elements", algorithm, length);
                Task::none()
            }

            Message::Stop => {
                if let Some(run) = &self.run {
                    run.stop();
                    self.status = "Stopping...".to_string();
                }
                Task::none()
            }
        }
    }

    /// Subscribe to periodic updates while a run is live
    pub fn subscription(&self) -> Subscription<Message> {
        if self.run.is_some() {
            // ~30fps mirror of the run thread's frames
            time::every(std::time::Duration::from_millis(33)).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        let header = self.view_header();

        let bars = canvas::bars(
            &self.current.values,
            self.current.index_a,
            self.current.index_b,
        );

        let status_bar = container(text(&self.status).size(12)).padding(5);

        let content = column![header, bars, status_bar].spacing(10).padding(10);

        container(content).width(Fill).height(Fill).into()
    }

    /// View for the header/control panel
    fn view_header(&self) -> Element<'_, Message> {
        let running = self.run.is_some();

        let algorithm_picker = pick_list(
            &Algorithm::ALL[..],
            Some(self.config.playback.algorithm),
            Message::AlgorithmSelected,
        )
        .width(160);

        let size_label = text("Array size").size(14);
        let size_input = text_input("256", &self.size_input)
            .on_input(Message::ArraySizeChanged)
            .width(80);

        let start_button = button(text("Visualize"))
            .on_press_maybe((!running).then_some(Message::Start));
        let stop_button = button(text("Stop")).on_press_maybe(running.then_some(Message::Stop));

        row![
            text("SORTSCOPE").size(24),
            Space::new().width(Fill),
            algorithm_picker,
            size_label,
            size_input,
            start_button,
            stop_button,
        ]
        .spacing(20)
        .align_y(Center)
        .padding(10)
        .into()
    }

    /// Get the theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn persist_config(&self) {
        if let Err(e) = save_config(&self.config, &self.config_path) {
            log::warn!("Failed to save config: {:#}", e);
        }
    }
}
