/*
Pitch helpers
=============

Scientific pitch names map to equal-temperament frequencies through the MIDI
note scale (A4 = 440 Hz = MIDI note 69).

Naming convention:
- Natural notes: C4, D4, E4, etc.
- Sharps: "C#4" or "Cs4"
- Flats: "Db4" (same frequency as the matching sharp)

The MIDI formula: note_number = 12 * (octave + 1) + semitone
Where semitone: C=0, C#=1, D=2, D#=3, E=4, F=5, F#=6, G=7, G#=8, A=9, A#=10, B=11
*/

/// Convert a MIDI note number to its equal-temperament frequency in Hz.
/// A4 = 440 Hz = MIDI note 69.
#[inline]
pub fn midi_to_frequency(note: u8) -> f32 {
    440.0 * 2.0_f32.powf((note as f32 - 69.0) / 12.0)
}

/// Look up the frequency of a pitch by scientific name.
///
/// Accepts names like `"C4"`, `"Eb3"`, `"F#5"`, `"Fs5"`. Returns `None` for
/// anything that does not parse or falls outside the MIDI range.
pub fn frequency_of(name: &str) -> Option<f32> {
    let mut chars = name.chars();

    let semitone: i32 = match chars.next()? {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let (accidental, octave_str) = match rest.chars().next() {
        Some('#') | Some('s') => (1, &rest[1..]),
        Some('b') => (-1, &rest[1..]),
        _ => (0, rest),
    };

    let octave: i32 = octave_str.parse().ok()?;
    let number = 12 * (octave + 1) + semitone + accidental;
    if (0..=127).contains(&number) {
        Some(midi_to_frequency(number as u8))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a440_reference() {
        assert_eq!(frequency_of("A4"), Some(440.0));
    }

    #[test]
    fn middle_c() {
        let c4 = frequency_of("C4").unwrap();
        assert!((c4 - 261.63).abs() < 0.01);
    }

    #[test]
    fn octaves_double_frequency() {
        let a4 = frequency_of("A4").unwrap();
        let a5 = frequency_of("A5").unwrap();
        assert!((a5 - 2.0 * a4).abs() < 0.01);
    }

    #[test]
    fn sharps_and_flats_are_equal() {
        assert_eq!(frequency_of("C#4"), frequency_of("Db4"));
        assert_eq!(frequency_of("Cs4"), frequency_of("Db4"));
        assert_eq!(frequency_of("A#3"), frequency_of("Bb3"));
    }

    #[test]
    fn rejects_malformed_names() {
        assert_eq!(frequency_of(""), None);
        assert_eq!(frequency_of("H4"), None);
        assert_eq!(frequency_of("C"), None);
        assert_eq!(frequency_of("C#"), None);
        assert_eq!(frequency_of("4C"), None);
    }

    #[test]
    fn rejects_out_of_range_octaves() {
        assert_eq!(frequency_of("C99"), None);
        assert_eq!(frequency_of("C-2"), None);
    }
}
