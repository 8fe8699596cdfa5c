#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single timed note as it appears in a parsed score.
///
/// `time` is the onset and `duration` the length, both in score time units
/// (`time >= 0`, `duration > 0`: provider contract, not checked here).
/// `frequency` is in Hz, `volume` in `0.0..=1.0`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreNote {
    /// Onset, in score time units from the start of the score.
    pub time: f64,
    /// Length, in score time units.
    pub duration: f64,
    /// Pitch in Hz.
    pub frequency: f32,
    /// Loudness, nominally `0.0..=1.0`.
    pub volume: f32,
}

impl ScoreNote {
    /// Create a note.
    pub fn new(time: f64, duration: f64, frequency: f32, volume: f32) -> Self {
        Self {
            time,
            duration,
            frequency,
            volume,
        }
    }

    /// Split this note at `len` into a head covering the first `len` time
    /// units and a tail covering the rest. Pitch and volume carry over to
    /// both halves; only time and duration change.
    ///
    /// Caller guarantees `0 < len < self.duration`.
    pub fn split_at(self, len: f64) -> (ScoreNote, ScoreNote) {
        let head = ScoreNote {
            duration: len,
            ..self
        };
        let tail = ScoreNote {
            time: self.time + len,
            duration: self.duration - len,
            ..self
        };
        (head, tail)
    }
}
