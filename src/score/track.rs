use log::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::note::ScoreNote;
use super::pitch;

/// One voice of a score: a named, time-ordered list of notes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct Track {
    /// Display name.
    pub name: String,
    /// The notes of this track.
    pub notes: Vec<ScoreNote>,
}

impl Track {
    /// Create an empty track.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: Vec::new(),
        }
    }

    /// Add a note, returning `self` for chaining.
    pub fn with_note(mut self, note: ScoreNote) -> Self {
        self.notes.push(note);
        self
    }

    /// Build a track of evenly spaced notes from pitch names, one note per
    /// `note_length` slot at full volume.
    ///
    /// Names that fail to parse (see [`pitch::frequency_of`]) are skipped
    /// with a warning; the remaining notes keep their slot positions.
    pub fn melody(name: impl Into<String>, pitches: &[&str], note_length: f64) -> Self {
        let mut track = Track::new(name);
        for (slot, pitch_name) in pitches.iter().enumerate() {
            match pitch::frequency_of(pitch_name) {
                Some(frequency) => {
                    track.notes.push(ScoreNote::new(
                        slot as f64 * note_length,
                        note_length,
                        frequency,
                        1.0,
                    ));
                }
                None => warn!("track {:?}: unknown pitch {:?}, skipping", track.name, pitch_name),
            }
        }
        track
    }
}
