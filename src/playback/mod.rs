//! Playback primitives: notes, per-channel queues, and channels.
//!
//! A [`Channel`] owns one [`NoteQueue`] and converts elapsed time into
//! note-on events, delivered through the [`NoteSink`] seam. Channels are
//! mutually independent; the engine advances them all under one clock.

pub mod channel;
pub mod note;
pub mod queue;

pub use channel::{Channel, TickError};
pub use note::{Note, NoteSink};
pub use queue::{Dequeued, NoteQueue};
