/// An immutable playable event: a pitch at a loudness.
///
/// Frequency is in Hz and expected positive; volume is nominally
/// `0.0..=1.0`. Neither is range-checked here; that is the score
/// provider's contract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    frequency: f32,
    volume: f32,
}

impl Note {
    /// Create a note.
    pub fn new(frequency: f32, volume: f32) -> Self {
        Self { frequency, volume }
    }

    /// Pitch in Hz.
    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    /// Loudness, nominally `0.0..=1.0`.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Fire this note at the rendering backend.
    pub fn trigger<S: NoteSink>(&self, sink: &mut S) {
        sink.play(self);
    }
}

/// The seam to the rendering backend: accepts note-on events.
///
/// Delivery is fire-and-forget: the scheduler never waits on the backend,
/// and an implementation must not block.
pub trait NoteSink {
    fn play(&mut self, note: &Note);
}

/// Realtime-safe transport toward an audio thread. A full ring buffer drops
/// the event rather than blocking.
#[cfg(feature = "rtrb")]
impl NoteSink for rtrb::Producer<Note> {
    fn play(&mut self, note: &Note) {
        let _ = self.push(*note);
    }
}

/// Collector sink for tests and offline use.
impl NoteSink for Vec<Note> {
    fn play(&mut self, note: &Note) {
        self.push(*note);
    }
}
