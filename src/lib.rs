pub mod engine; // Score quantization, channel layout, tick dispatch
pub mod playback; // Channels, note queues, and the note sink seam
pub mod score; // Score data model and pitch helpers

/// Number of quaver steps in one bar. The quantization grain of the playback
/// grid is `bar_length / QUAVERS_PER_BAR`.
pub const QUAVERS_PER_BAR: usize = 8;
