//! Tone feedback backend
//!
//! Two independent tone channels track the step highlights: channel A and B
//! each synthesize a sine at `BASE_TONE_HZ * pitch`. The UI/run threads and
//! the audio callback share only atomics:
//!
//! - Run thread: writes pitch and audible flags once per step
//! - CPAL callback: reads them while rendering, owns the oscillator phases
//!
//! A muted channel keeps its phase accumulating so resuming does not
//! restart the waveform, and pitch updates never reset phase - no
//! retrigger popping on step-dense algorithms.

use std::f32::consts::TAU;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};
use thiserror::Error;

use sortscope_core::pitch::BASE_TONE_HZ;

/// Number of simultaneous tone channels (one per step highlight)
pub const NUM_TONE_CHANNELS: usize = 2;

/// Errors that can occur during audio startup
#[derive(Error, Debug)]
pub enum AudioError {
    /// No audio devices available
    #[error("No audio output devices found")]
    NoDevices,

    /// Failed to get device configuration
    #[error("Failed to get device config: {0}")]
    ConfigError(String),

    /// Unsupported sample format
    #[error("Unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Failed to build audio stream
    #[error("Failed to build audio stream: {0}")]
    StreamBuildError(String),

    /// Failed to start/play stream
    #[error("Failed to start audio stream: {0}")]
    StreamPlayError(String),
}

/// Result type for audio operations
pub type AudioResult<T> = Result<T, AudioError>;

/// One lock-free tone channel
#[derive(Debug)]
pub struct ToneChannel {
    /// Pitch multiplier as f32 bits
    pitch_bits: AtomicU32,
    /// Whether the channel is currently sounding
    audible: AtomicBool,
}

impl ToneChannel {
    fn new() -> Self {
        Self {
            pitch_bits: AtomicU32::new(1.0f32.to_bits()),
            audible: AtomicBool::new(false),
        }
    }

    /// Update the pitch without touching playback state
    pub fn set_pitch(&self, pitch: f32) {
        self.pitch_bits.store(pitch.to_bits(), Ordering::Relaxed);
    }

    /// Start sounding; a no-op if already audible (no retrigger)
    pub fn play_if_idle(&self) {
        self.audible.store(true, Ordering::Relaxed);
    }

    /// Mute without resetting the waveform
    pub fn pause(&self) {
        self.audible.store(false, Ordering::Relaxed);
    }

    pub fn pitch(&self) -> f32 {
        f32::from_bits(self.pitch_bits.load(Ordering::Relaxed))
    }

    pub fn is_audible(&self) -> bool {
        self.audible.load(Ordering::Relaxed)
    }
}

/// Control surface for both tone channels, shared with the audio callback
#[derive(Debug)]
pub struct ToneChannels {
    channels: [ToneChannel; NUM_TONE_CHANNELS],
    /// Master volume as f32 bits
    volume_bits: AtomicU32,
}

impl ToneChannels {
    pub fn new(volume: f32) -> Self {
        Self {
            channels: [ToneChannel::new(), ToneChannel::new()],
            volume_bits: AtomicU32::new(volume.clamp(0.0, 1.0).to_bits()),
        }
    }

    pub fn channel(&self, index: usize) -> &ToneChannel {
        &self.channels[index]
    }

    pub fn volume(&self) -> f32 {
        f32::from_bits(self.volume_bits.load(Ordering::Relaxed))
    }

    /// Apply mapped highlight pitches from one step.
    ///
    /// A highlighted channel gets its pitch updated and starts sounding if
    /// idle; an un-highlighted channel is paused.
    pub fn apply(&self, pitches: [Option<f32>; NUM_TONE_CHANNELS]) {
        for (channel, pitch) in self.channels.iter().zip(pitches) {
            match pitch {
                Some(pitch) => {
                    channel.set_pitch(pitch);
                    channel.play_if_idle();
                }
                None => channel.pause(),
            }
        }
    }

    /// Pause both channels (end of run, stop request)
    pub fn silence(&self) {
        for channel in &self.channels {
            channel.pause();
        }
    }
}

/// Keeps the tone stream alive. Drop this to stop audio.
pub struct ToneHandle {
    _stream: Stream,
    sample_rate: u32,
}

impl ToneHandle {
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// Start the tone output on the default device
///
/// Returns the stream handle and the shared channel controls. A missing or
/// unusable device surfaces here, before any run begins; the player then
/// falls back to silent operation.
pub fn start_audio(volume: f32) -> AudioResult<(ToneHandle, Arc<ToneChannels>)> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(AudioError::NoDevices)?;
    let device_name = device.name().unwrap_or_else(|_| "Unknown".to_string());
    log::info!("Using audio device: {}", device_name);

    let supported_config = device
        .default_output_config()
        .map_err(|e| AudioError::ConfigError(e.to_string()))?;
    if supported_config.sample_format() != SampleFormat::F32 {
        return Err(AudioError::UnsupportedFormat(format!(
            "{:?}",
            supported_config.sample_format()
        )));
    }

    let sample_rate = supported_config.sample_rate().0;
    let out_channels = supported_config.channels() as usize;
    let stream_config: StreamConfig = supported_config.into();

    let tones = Arc::new(ToneChannels::new(volume));
    let callback_tones = tones.clone();
    let mut phases = [0.0f32; NUM_TONE_CHANNELS];

    let stream = device
        .build_output_stream(
            &stream_config,
            move |data: &mut [f32], _| {
                render_tones(data, out_channels, sample_rate, &callback_tones, &mut phases);
            },
            |err| log::error!("audio stream error: {}", err),
            None,
        )
        .map_err(|e| AudioError::StreamBuildError(e.to_string()))?;
    stream
        .play()
        .map_err(|e| AudioError::StreamPlayError(e.to_string()))?;

    log::info!(
        "Tone output started: {} Hz, {} channels",
        sample_rate,
        out_channels
    );

    Ok((
        ToneHandle {
            _stream: stream,
            sample_rate,
        },
        tones,
    ))
}

/// Render both tone channels into an interleaved f32 buffer
fn render_tones(
    data: &mut [f32],
    out_channels: usize,
    sample_rate: u32,
    tones: &ToneChannels,
    phases: &mut [f32; NUM_TONE_CHANNELS],
) {
    let volume = tones.volume();
    for frame in data.chunks_mut(out_channels) {
        let mut sample = 0.0;
        for (i, channel) in tones.channels.iter().enumerate() {
            // Phase advances even while muted so resuming picks the
            // waveform up where it left off
            phases[i] = (phases[i] + BASE_TONE_HZ * channel.pitch() / sample_rate as f32) % 1.0;
            if channel.is_audible() {
                sample += (phases[i] * TAU).sin() * volume;
            }
        }
        for out in frame.iter_mut() {
            *out = sample;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortscope_core::pitch::{MAX_PITCH, MIN_PITCH};

    #[test]
    fn apply_drives_both_channels() {
        let tones = ToneChannels::new(0.1);
        tones.apply([Some(MAX_PITCH), Some(MIN_PITCH)]);

        assert!(tones.channel(0).is_audible());
        assert_eq!(tones.channel(0).pitch(), MAX_PITCH);
        assert!(tones.channel(1).is_audible());
        assert_eq!(tones.channel(1).pitch(), MIN_PITCH);
    }

    #[test]
    fn unhighlighted_channel_is_paused_not_reset() {
        let tones = ToneChannels::new(0.1);
        tones.apply([Some(1.25), None]);
        tones.apply([None, None]);

        assert!(!tones.channel(0).is_audible());
        // Pitch survives the pause; resuming does not retrigger
        assert_eq!(tones.channel(0).pitch(), 1.25);
    }

    #[test]
    fn silence_pauses_everything() {
        let tones = ToneChannels::new(0.1);
        tones.apply([Some(1.0), Some(1.0)]);
        tones.silence();
        assert!(!tones.channel(0).is_audible());
        assert!(!tones.channel(1).is_audible());
    }

    #[test]
    fn muted_render_output_is_silent_but_phase_advances() {
        let tones = ToneChannels::new(0.5);
        let mut phases = [0.0f32; NUM_TONE_CHANNELS];
        let mut buffer = vec![0.0f32; 128];

        render_tones(&mut buffer, 2, 48_000, &tones, &mut phases);

        assert!(buffer.iter().all(|&s| s == 0.0));
        assert!(phases.iter().all(|&p| p > 0.0));
    }

    #[test]
    fn volume_is_clamped() {
        assert_eq!(ToneChannels::new(2.0).volume(), 1.0);
        assert_eq!(ToneChannels::new(-1.0).volume(), 0.0);
    }
}
