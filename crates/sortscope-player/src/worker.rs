//! Background run worker
//!
//! Runs the whole shuffle-and-sort sequence on a dedicated thread so pacing
//! never blocks the UI. The run thread publishes each step into a shared
//! frame slot and drives the tone channels; the UI polls the frame and the
//! result channel at tick rate.

use std::sync::mpsc::{Receiver, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use sortscope_core::cancel::CancelToken;
use sortscope_core::pitch::AudioMapper;
use sortscope_core::run::{run_visualization, RunOutcome, RunReport};
use sortscope_core::step::{StepEvent, StepSink};
use sortscope_core::{Algorithm, Value};

use crate::audio::ToneChannels;

/// Latest frame published by the run thread for the canvas
#[derive(Debug, Clone, Default)]
pub struct DisplayFrame {
    pub values: Vec<Value>,
    pub index_a: Option<usize>,
    pub index_b: Option<usize>,
}

/// Shared frame slot: the run thread writes, the UI reads at tick rate
pub type SharedFrame = Arc<Mutex<DisplayFrame>>;

/// Step sink that publishes frames and drives the tone channels
struct PlayerSink {
    frame: SharedFrame,
    tones: Option<Arc<ToneChannels>>,
    mapper: AudioMapper,
}

impl StepSink for PlayerSink {
    fn on_step(&mut self, event: &StepEvent<'_>) {
        if let Ok(mut frame) = self.frame.lock() {
            frame.values.clear();
            frame.values.extend_from_slice(event.values);
            frame.index_a = event.index_a;
            frame.index_b = event.index_b;
        }
        if let Some(tones) = &self.tones {
            tones.apply(self.mapper.pitches(event));
        }
    }
}

/// Handle to an in-flight run
pub struct RunHandle {
    rx: Receiver<RunReport>,
    cancel: CancelToken,
    _handle: JoinHandle<()>,
}

impl RunHandle {
    /// Spawn the run thread for the selected algorithm and length
    pub fn spawn(
        algorithm: Algorithm,
        length: usize,
        frame: SharedFrame,
        tones: Option<Arc<ToneChannels>>,
    ) -> Self {
        let cancel = CancelToken::new();
        let run_cancel = cancel.clone();
        let (tx, rx) = std::sync::mpsc::channel::<RunReport>();

        let handle = thread::Builder::new()
            .name("sort-run".to_string())
            .spawn(move || {
                let mut sink = PlayerSink {
                    frame,
                    tones: tones.clone(),
                    mapper: AudioMapper::default(),
                };
                let report = run_visualization(algorithm, length, &mut sink, run_cancel);
                if let Some(tones) = &tones {
                    tones.silence();
                }
                // Receiver may be gone if the app quit mid-run
                let _ = tx.send(report);
            })
            .expect("Failed to spawn run thread");

        Self {
            rx,
            cancel,
            _handle: handle,
        }
    }

    /// Request the run stop at its next poll point
    pub fn stop(&self) {
        self.cancel.request();
    }

    /// Non-blocking poll for the finished report
    pub fn try_finish(&self) -> Option<RunReport> {
        match self.rx.try_recv() {
            Ok(report) => Some(report),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::error!("run thread disconnected unexpectedly");
                Some(RunReport {
                    values: Vec::new(),
                    outcome: RunOutcome::Cancelled,
                })
            }
        }
    }
}
