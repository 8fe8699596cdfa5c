//! Note quantization: timed score notes into quaver-sized steps.
//!
//! Every note lands in the step `floor(time / quaver_length)`. Notes longer
//! than one quaver are split at quaver boundaries into chained fragments
//! that keep the source pitch and volume, so a long note re-fires once per
//! step it spans.

use crate::score::{Score, ScoreNote};

/// Group every note of `score` into quaver steps.
///
/// Returns one entry per step from 0 to the highest occupied index; steps
/// nothing sounds in are present and empty, keeping the grid gap-free.
/// Within a step, notes appear in track order, then in the order the track
/// listed them.
pub fn quantize(score: &Score, quaver_length: f64) -> Vec<Vec<ScoreNote>> {
    let mut steps: Vec<Vec<ScoreNote>> = Vec::new();

    for track in &score.tracks {
        for &note in &track.notes {
            let mut fragment = note;
            while fragment.duration > quaver_length {
                let (head, tail) = fragment.split_at(quaver_length);
                place(&mut steps, quaver_length, head);
                fragment = tail;
            }
            place(&mut steps, quaver_length, fragment);
        }
    }

    steps
}

fn place(steps: &mut Vec<Vec<ScoreNote>>, quaver_length: f64, note: ScoreNote) {
    let index = (note.time / quaver_length).floor() as usize;
    if steps.len() <= index {
        steps.resize_with(index + 1, Vec::new);
    }
    steps[index].push(note);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Track;

    const QUAVER: f64 = 0.5;

    fn score_of(notes: Vec<ScoreNote>) -> Score {
        Score::new(QUAVER * 8.0).with_track(Track {
            name: "t".into(),
            notes,
        })
    }

    #[test]
    fn short_note_lands_in_its_step() {
        let score = score_of(vec![ScoreNote::new(1.2, 0.3, 440.0, 1.0)]);
        let steps = quantize(&score, QUAVER);

        // floor(1.2 / 0.5) = 2
        assert_eq!(steps.len(), 3);
        assert!(steps[0].is_empty());
        assert!(steps[1].is_empty());
        assert_eq!(steps[2].len(), 1);
    }

    #[test]
    fn exact_quaver_duration_is_not_split() {
        let score = score_of(vec![ScoreNote::new(0.0, QUAVER, 440.0, 1.0)]);
        let steps = quantize(&score, QUAVER);

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].len(), 1);
        assert_eq!(steps[0][0].duration, QUAVER);
    }

    #[test]
    fn long_note_splits_across_consecutive_steps() {
        // 2.5 quavers starting at 0: fragments in steps 0, 1, 2.
        let score = score_of(vec![ScoreNote::new(0.0, 2.5 * QUAVER, 330.0, 0.7)]);
        let steps = quantize(&score, QUAVER);

        assert_eq!(steps.len(), 3);
        for step in &steps {
            assert_eq!(step.len(), 1);
        }
        assert_eq!(steps[0][0].duration, QUAVER);
        assert_eq!(steps[1][0].duration, QUAVER);
        assert_eq!(steps[2][0].duration, 0.5 * QUAVER);
    }

    #[test]
    fn splitting_conserves_duration_and_pitch() {
        let original = ScoreNote::new(0.25, 3.6 * QUAVER, 523.25, 0.4);
        let score = score_of(vec![original]);
        let steps = quantize(&score, QUAVER);

        let fragments: Vec<ScoreNote> = steps.into_iter().flatten().collect();
        let total: f64 = fragments.iter().map(|f| f.duration).sum();

        assert!((total - original.duration).abs() < 1e-9);
        assert!(fragments.iter().all(|f| f.duration <= QUAVER));
        assert!(fragments.iter().all(|f| f.frequency == original.frequency));
        assert!(fragments.iter().all(|f| f.volume == original.volume));
    }

    #[test]
    fn step_order_follows_track_order() {
        let first = ScoreNote::new(0.0, QUAVER, 100.0, 1.0);
        let second = ScoreNote::new(0.0, QUAVER, 200.0, 1.0);
        let score = Score::new(QUAVER * 8.0)
            .with_track(Track {
                name: "a".into(),
                notes: vec![first],
            })
            .with_track(Track {
                name: "b".into(),
                notes: vec![second],
            });

        let steps = quantize(&score, QUAVER);
        assert_eq!(steps[0].len(), 2);
        assert_eq!(steps[0][0].frequency, 100.0);
        assert_eq!(steps[0][1].frequency, 200.0);
    }

    #[test]
    fn silent_gaps_are_materialized_as_empty_steps() {
        let score = score_of(vec![
            ScoreNote::new(0.0, QUAVER, 440.0, 1.0),
            ScoreNote::new(4.0 * QUAVER, QUAVER, 440.0, 1.0),
        ]);
        let steps = quantize(&score, QUAVER);

        assert_eq!(steps.len(), 5);
        assert!(steps[1].is_empty());
        assert!(steps[2].is_empty());
        assert!(steps[3].is_empty());
    }

    #[test]
    fn empty_score_has_no_steps() {
        let score = Score::new(4.0);
        assert!(quantize(&score, QUAVER).is_empty());
    }
}
