//! The playback engine: score in, timed note-ons out.
//!
//! [`Synthesizer`] quantizes a score into quaver steps at construction,
//! lays the steps out into parallel channels (one lane per simultaneous
//! voice), and then converts caller-supplied time steps into note-on events
//! via [`advance`](Synthesizer::advance).

pub mod quantize;

use log::{debug, info};

use crate::playback::{Channel, Note, NoteQueue, NoteSink, TickError};
use crate::score::Score;

/// Errors from building a [`Synthesizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// The score's bar length was zero, negative, or not finite.
    InvalidBarLength { value: f64 },
    /// The playback note duration was zero, negative, or not finite.
    InvalidNoteDuration { value: f64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidBarLength { value } => {
                write!(f, "bar length must be positive and finite, got {}", value)
            }
            ConfigError::InvalidNoteDuration { value } => {
                write!(
                    f,
                    "note duration must be positive and finite, got {}",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Converts a score into fixed playback channels and drives them forward.
///
/// Construction does all the layout work; afterwards the engine holds only
/// its channels. Every channel queue has the same length (the step count),
/// so all channels exhaust on the same tick.
pub struct Synthesizer {
    channels: Vec<Channel>,
    note_duration: f64,
}

impl Synthesizer {
    /// Quantize `score` and build one channel per simultaneous voice.
    ///
    /// `note_duration` is the fixed cadence every channel dequeues on, in
    /// the same time units the caller will pass to
    /// [`advance`](Synthesizer::advance). Fails before any channel is built
    /// if `score.bar_length` or `note_duration` is not positive and finite.
    pub fn new(score: &Score, note_duration: f64) -> Result<Self, ConfigError> {
        if !(score.bar_length > 0.0 && score.bar_length.is_finite()) {
            return Err(ConfigError::InvalidBarLength {
                value: score.bar_length,
            });
        }
        if !(note_duration > 0.0 && note_duration.is_finite()) {
            return Err(ConfigError::InvalidNoteDuration {
                value: note_duration,
            });
        }

        let quaver_length = score.quaver_length();
        let steps = quantize::quantize(score, quaver_length);
        let voices = steps.iter().map(Vec::len).max().unwrap_or(0);
        debug!(
            "quantized {} notes into {} steps, {} voices at peak",
            score.note_count(),
            steps.len(),
            voices
        );

        // Transpose: lane s takes each step's s-th note, or a rest where the
        // step has fewer voices. Every lane sees every step.
        let channels = (0..voices)
            .map(|lane| {
                let slots = steps
                    .iter()
                    .map(|step| {
                        step.get(lane)
                            .map(|note| Note::new(note.frequency, note.volume))
                    })
                    .collect();
                Channel::new(lane, NoteQueue::new(slots), note_duration)
            })
            .collect::<Vec<_>>();

        info!(
            "engine ready: {} channels x {} steps",
            channels.len(),
            steps.len()
        );

        // `steps` falls out of scope here: the quantization tables are
        // build-time scratch, not engine state.
        Ok(Self {
            channels,
            note_duration,
        })
    }

    /// Advance every channel by `dt` time units, firing note-ons at `sink`.
    ///
    /// With no channels this is a no-op, but `dt` is still validated.
    pub fn advance<S: NoteSink>(&mut self, dt: f64, sink: &mut S) -> Result<(), TickError> {
        if dt.is_nan() {
            return Err(TickError::NanStep);
        }
        if dt < 0.0 {
            return Err(TickError::NegativeStep { dt });
        }
        for channel in &mut self.channels {
            channel.advance(dt, sink)?;
        }
        Ok(())
    }

    /// The channels, for visualization. Lane ids index this slice.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// The fixed dequeue cadence shared by every channel.
    pub fn note_duration(&self) -> f64 {
        self.note_duration
    }

    /// Number of steps every channel queue was built with.
    pub fn step_count(&self) -> usize {
        self.channels.first().map(Channel::queue_len).unwrap_or(0)
    }

    /// Whether every channel has consumed its queue. Vacuously true for an
    /// empty score.
    pub fn is_finished(&self) -> bool {
        self.channels.iter().all(Channel::is_exhausted)
    }
}
