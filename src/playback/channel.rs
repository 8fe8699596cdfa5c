use log::trace;

use super::note::{Note, NoteSink};
use super::queue::{Dequeued, NoteQueue};

/// Errors from advancing a channel or the engine clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickError {
    /// The time step was negative.
    NegativeStep { dt: f64 },
    /// The time step was NaN.
    NanStep,
}

impl std::fmt::Display for TickError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickError::NegativeStep { dt } => {
                write!(f, "time step must be non-negative, got {}", dt)
            }
            TickError::NanStep => write!(f, "time step must not be NaN"),
        }
    }
}

impl std::error::Error for TickError {}

/// One playback lane: a note queue consumed on a fixed cadence.
///
/// Each call to [`advance`](Channel::advance) accumulates elapsed time;
/// for every full `note_duration` accumulated, the next queue slot is
/// dequeued and, if it holds a note, fired at the sink. Once the queue
/// reports exhausted the channel goes permanently silent: further advances
/// are no-ops, and time bookkeeping stops with them.
#[derive(Debug)]
pub struct Channel {
    id: usize,
    queue: NoteQueue,
    note_duration: f64,
    elapsed: f64,
    current: Option<Note>,
    exhausted: bool,
}

impl Channel {
    /// Create a channel over a queue. `note_duration` must be positive; the
    /// engine validates it before any channel is built.
    pub fn new(id: usize, queue: NoteQueue, note_duration: f64) -> Self {
        Self {
            id,
            queue,
            note_duration,
            elapsed: 0.0,
            current: None,
            exhausted: false,
        }
    }

    /// Advance this channel by `dt` time units, firing note-ons at `sink`.
    ///
    /// A `dt` spanning several note durations dequeues several slots, one
    /// per crossing, so coarse ticks never lose beats.
    pub fn advance<S: NoteSink>(&mut self, dt: f64, sink: &mut S) -> Result<(), TickError> {
        if dt.is_nan() {
            return Err(TickError::NanStep);
        }
        if dt < 0.0 {
            return Err(TickError::NegativeStep { dt });
        }
        if self.exhausted {
            return Ok(());
        }

        self.elapsed += dt;
        while self.elapsed >= self.note_duration {
            self.elapsed -= self.note_duration;
            match self.queue.dequeue() {
                Dequeued::Play(note) => {
                    self.current = Some(note);
                    trace!("channel {}: note on {:.2} Hz", self.id, note.frequency());
                    note.trigger(sink);
                }
                Dequeued::Rest => {
                    self.current = None;
                }
                Dequeued::Exhausted => {
                    self.current = None;
                    self.exhausted = true;
                    break;
                }
            }
        }
        Ok(())
    }

    /// Lane identity, stable across the engine's lifetime.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The note most recently dequeued, if it was a sounding note.
    /// For visualization; `None` during rests and after exhaustion.
    pub fn current_note(&self) -> Option<Note> {
        self.current
    }

    /// Whether the queue has been fully consumed and the channel is silent.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Total number of queue slots this channel was built with.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}
