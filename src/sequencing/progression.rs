#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SynthError;

/// One step of the progression: pad voicing plus bass notes, in Hz.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Chord {
    pub pad: Vec<f64>,
    pub bass: Vec<f64>,
}

impl Chord {
    pub fn new(pad: &[f64], bass: &[f64]) -> Self {
        Self {
            pad: pad.to_vec(),
            bass: bass.to_vec(),
        }
    }

    /// Pad tone used by the melody: the root on even steps, the next tone on
    /// odd ones.
    pub fn melody_tone(&self, step: usize) -> f64 {
        let pick = if step % 2 == 1 { 1 } else { 0 };
        self.pad
            .get(pick)
            .or_else(|| self.pad.first())
            .copied()
            .unwrap_or(0.0)
    }
}

/// Cyclic chord table. Never empty, and no chord has an empty pad.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "ChordTable")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct ChordProgression {
    chords: Vec<Chord>,
}

/// Unchecked wire form; deserialization goes through `ChordProgression::new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct ChordTable {
    chords: Vec<Chord>,
}

#[cfg(feature = "serde")]
impl TryFrom<ChordTable> for ChordProgression {
    type Error = SynthError;

    fn try_from(table: ChordTable) -> Result<Self, Self::Error> {
        Self::new(table.chords)
    }
}

impl ChordProgression {
    /// Build a progression; every chord needs at least one pad tone.
    pub fn new(chords: Vec<Chord>) -> Result<Self, SynthError> {
        if chords.is_empty() || chords.iter().any(|chord| chord.pad.is_empty()) {
            return Err(SynthError::InvalidParameter {
                name: "chords",
                value: chords.len() as f64,
            });
        }
        Ok(Self { chords })
    }

    /// The game's eight-step minor-key loop.
    pub fn a_minor() -> Self {
        let chords = vec![
            Chord::new(&[220.0, 262.0, 330.0], &[110.0, 165.0]),
            Chord::new(&[294.0, 349.0, 440.0], &[147.0, 220.0]),
            Chord::new(&[262.0, 311.0, 392.0], &[131.0, 196.0]),
            Chord::new(&[349.0, 415.0, 523.0], &[174.0, 261.0]),
            Chord::new(&[247.0, 294.0, 370.0], &[123.0, 185.0]),
            Chord::new(&[330.0, 392.0, 494.0], &[165.0, 247.0]),
            Chord::new(&[294.0, 370.0, 440.0], &[147.0, 220.0]),
            Chord::new(&[220.0, 277.0, 330.0], &[110.0, 165.0]),
        ];
        Self { chords }
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    /// `floor(t / chord_duration) mod len`
    pub fn chord_index(&self, t: f64, chord_duration: f64) -> usize {
        let step = (t.max(0.0) / chord_duration).floor() as usize;
        step % self.chords.len()
    }

    pub fn chord_at(&self, t: f64, chord_duration: f64) -> &Chord {
        &self.chords[self.chord_index(t, chord_duration)]
    }
}

impl Default for ChordProgression {
    fn default() -> Self {
        Self::a_minor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHORD: f64 = 5.625;

    #[test]
    fn index_changes_exactly_at_the_boundary() {
        let progression = ChordProgression::a_minor();
        assert_eq!(progression.chord_index(CHORD - 1e-9, CHORD), 0);
        assert_eq!(progression.chord_index(CHORD, CHORD), 1);
        assert_eq!(progression.chord_index(CHORD + 1e-9, CHORD), 1);
    }

    #[test]
    fn index_wraps_after_the_last_chord() {
        let progression = ChordProgression::a_minor();
        assert_eq!(progression.chord_index(7.0 * CHORD + 0.1, CHORD), 7);
        assert_eq!(progression.chord_index(8.0 * CHORD + 0.1, CHORD), 0);
        assert_eq!(progression.chord_at(45.1, CHORD).pad[0], 220.0);
    }

    #[test]
    fn empty_tables_are_rejected() {
        assert!(ChordProgression::new(Vec::new()).is_err());
        assert!(ChordProgression::new(vec![Chord::new(&[], &[110.0])]).is_err());
        assert!(ChordProgression::new(vec![Chord::new(&[220.0], &[])]).is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_tables_are_validated() {
        let empty = serde_json::from_str::<ChordProgression>(r#"{"chords":[]}"#);
        assert!(empty.is_err());

        let no_pad =
            serde_json::from_str::<ChordProgression>(r#"{"chords":[{"pad":[],"bass":[110.0]}]}"#);
        assert!(no_pad.is_err());

        let json = serde_json::to_string(&ChordProgression::a_minor()).unwrap();
        let parsed: ChordProgression = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, ChordProgression::a_minor());
    }

    #[test]
    fn melody_alternates_between_first_two_tones() {
        let chord = Chord::new(&[220.0, 262.0, 330.0], &[110.0]);
        assert_eq!(chord.melody_tone(0), 220.0);
        assert_eq!(chord.melody_tone(1), 262.0);
        assert_eq!(Chord::new(&[330.0], &[]).melody_tone(1), 330.0);
    }
}
