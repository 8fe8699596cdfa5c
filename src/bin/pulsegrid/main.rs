//! pulsegrid - plays a built-in score to the terminal
//!
//! Run with: cargo run
//!
//! Drives the engine from a wall-clock loop: each iteration sleeps one
//! nominal tick but feeds the engine the time that actually passed, so
//! sleep jitter never accumulates into drift.

use std::thread;
use std::time::{Duration, Instant};

use pulsegrid::{
    engine::Synthesizer,
    playback::{Note, NoteSink},
    score::{Score, Track},
};

/// Prints note-ons as they fire.
struct ConsoleSink;

impl NoteSink for ConsoleSink {
    fn play(&mut self, note: &Note) {
        println!("note on: {:7.2} Hz  vol {:.2}", note.frequency(), note.volume());
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    // One bar per second; each melody slot is one quaver.
    let bar_length = 1.0;
    let quaver = bar_length / 8.0;

    let score = Score::new(bar_length)
        .with_track(Track::melody(
            "lead",
            &["C4", "E4", "G4", "C5", "G4", "E4", "C4", "E4"],
            quaver,
        ))
        .with_track(Track::melody(
            "bass",
            &["C3", "G2", "C3", "G2", "C3", "G2", "C3", "G2"],
            quaver,
        ));

    let mut synth = Synthesizer::new(&score, quaver)?;
    println!(
        "playing {} channels x {} steps",
        synth.channels().len(),
        synth.step_count()
    );

    let tick = Duration::from_millis(10);
    let mut sink = ConsoleSink;
    let mut last = Instant::now();

    while !synth.is_finished() {
        thread::sleep(tick);
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f64();
        last = now;
        synth.advance(dt, &mut sink)?;
    }

    println!("done");
    Ok(())
}
