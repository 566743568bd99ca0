//! Audio pitch mapping
//!
//! Maps a highlighted value's magnitude, relative to the sequence maximum,
//! onto a bounded pitch multiplier for up to two simultaneous tone channels.
//! A channel with no highlight is muted rather than stopped; consumers must
//! update pitch in place without retriggering an already-sounding channel,
//! which avoids audible popping on step-dense algorithms.

use crate::step::StepEvent;
use crate::types::Value;

/// Lower bound of the pitch multiplier range
pub const MIN_PITCH: f32 = 0.5;

/// Upper bound of the pitch multiplier range
pub const MAX_PITCH: f32 = 1.5;

/// Base tone frequency; the audible frequency is `BASE_TONE_HZ * pitch`
pub const BASE_TONE_HZ: f32 = 1000.0;

/// Maps highlighted values onto the pitch range
#[derive(Debug, Clone, Copy)]
pub struct AudioMapper {
    min_pitch: f32,
    max_pitch: f32,
}

impl Default for AudioMapper {
    fn default() -> Self {
        Self {
            min_pitch: MIN_PITCH,
            max_pitch: MAX_PITCH,
        }
    }
}

impl AudioMapper {
    pub fn new(min_pitch: f32, max_pitch: f32) -> Self {
        Self {
            min_pitch,
            max_pitch,
        }
    }

    /// Pitch multiplier for a value relative to the sequence maximum.
    ///
    /// Monotonically non-decreasing in `value`, always within
    /// `[min_pitch, max_pitch]`; `pitch_for(max, max)` is exactly the top of
    /// the range.
    pub fn pitch_for(&self, value: Value, max_value: Value) -> f32 {
        if max_value == 0 {
            return self.min_pitch;
        }
        let normalized = value as f32 / max_value as f32;
        (self.min_pitch + normalized * (self.max_pitch - self.min_pitch))
            .clamp(self.min_pitch, self.max_pitch)
    }

    /// Pitches for the two highlight channels of a step.
    ///
    /// `None` means the channel has no highlight this step and should be
    /// muted (paused, not stopped).
    pub fn pitches(&self, event: &StepEvent<'_>) -> [Option<f32>; 2] {
        let max_value = event.values.iter().copied().max().unwrap_or(0);
        let pitch_at = |index: Option<usize>| {
            index
                .and_then(|i| event.values.get(i))
                .map(|&v| self.pitch_for(v, max_value))
        };
        [pitch_at(event.index_a), pitch_at(event.index_b)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_is_monotone_and_bounded() {
        let mapper = AudioMapper::default();
        let mut previous = 0.0f32;
        for value in 1..=1024 {
            let pitch = mapper.pitch_for(value, 1024);
            assert!(pitch >= previous);
            assert!((MIN_PITCH..=MAX_PITCH).contains(&pitch));
            previous = pitch;
        }
    }

    #[test]
    fn pitch_endpoints() {
        let mapper = AudioMapper::default();
        assert_eq!(mapper.pitch_for(1024, 1024), MAX_PITCH);
        // Small values approach the bottom of the range
        assert!(mapper.pitch_for(1, 1024) - MIN_PITCH < 0.01);
    }

    #[test]
    fn zero_max_stays_at_min_pitch() {
        let mapper = AudioMapper::default();
        assert_eq!(mapper.pitch_for(0, 0), MIN_PITCH);
    }

    #[test]
    fn channels_follow_highlights() {
        let mapper = AudioMapper::default();
        let values = [1, 2, 3, 4];

        let both = StepEvent::new(&values, Some(3), Some(0));
        let [a, b] = mapper.pitches(&both);
        assert_eq!(a, Some(MAX_PITCH));
        assert_eq!(b, Some(mapper.pitch_for(1, 4)));

        let one = StepEvent::new(&values, Some(1), None);
        let [a, b] = mapper.pitches(&one);
        assert!(a.is_some());
        assert_eq!(b, None);

        let none = StepEvent::plain(&values);
        assert_eq!(mapper.pitches(&none), [None, None]);
    }
}
