//! Score data model.
//!
//! A [`Score`] is what a parser front-end hands to the engine: a bar length
//! and a set of tracks, each holding timed notes. Nothing here reads files;
//! these types are the interchange format between whatever produced the score
//! and the playback engine.

pub mod note;
pub mod pitch;
pub mod track;

pub use note::ScoreNote;
pub use track::Track;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::QUAVERS_PER_BAR;

/// A parsed musical score: a bar length and the tracks that sound in it.
///
/// Times and durations throughout the score share one unit (seconds, beats,
/// or ticks; the engine never cares, it only divides). `bar_length` must be
/// positive and finite; the engine checks this at construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Score {
    /// Duration of one bar, in score time units.
    pub bar_length: f64,
    /// The tracks of this score, in voice order.
    pub tracks: Vec<Track>,
}

impl Score {
    /// Create an empty score with the given bar length.
    pub fn new(bar_length: f64) -> Self {
        Self {
            bar_length,
            tracks: Vec::new(),
        }
    }

    /// Add a track, returning `self` for chaining.
    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// Duration of one quaver step (`bar_length / 8`), the quantization grain.
    pub fn quaver_length(&self) -> f64 {
        self.bar_length / QUAVERS_PER_BAR as f64
    }

    /// Total number of notes across all tracks.
    pub fn note_count(&self) -> usize {
        self.tracks.iter().map(|t| t.notes.len()).sum()
    }
}
