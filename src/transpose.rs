//! Transposer
//!
//! Shifts chord names around the chromatic circle. The sharp or flat style of
//! each note is inherited from that note's own spelling before the shift.

use tracing::trace;

use crate::{
    chord::{parse_chord, ParsedChord},
    note::{uses_flat_spelling, PitchClass},
};

/// Transpose a single note spelling.
///
/// Text that is not a note spelling is returned unchanged.
pub fn transpose_note(spelling: &str, semitones: i32) -> String {
    match PitchClass::from_spelling(spelling) {
        Some(pitch) => pitch
            .transpose(semitones)
            .spelling(uses_flat_spelling(spelling))
            .to_string(),
        None => {
            trace!(spelling, "unrecognized note left as is");
            spelling.to_string()
        }
    }
}

impl ParsedChord {
    /// A copy of this chord moved by `semitones`. The modifier is untouched.
    pub fn transposed(&self, semitones: i32) -> ParsedChord {
        let key_pitch = self.key_pitch().transpose(semitones);
        let key_note = key_pitch.spelling(uses_flat_spelling(self.key_note()));
        let bass_note = if self.has_bass() {
            transpose_note(self.bass_note(), semitones)
        } else {
            String::new()
        };
        self.with_notes(key_pitch, key_note, bass_note)
    }
}

/// Transpose chord text, leaving anything that does not parse as a chord
/// (`N.C.`, empty text, annotations) unchanged.
pub fn transpose_chord_text(chord: &str, semitones: i32) -> String {
    match parse_chord(chord) {
        Some(parsed) => parsed.transposed(semitones).to_string(),
        None => {
            trace!(chord, "not a chord, passing through");
            chord.to_string()
        }
    }
}

/// Transpose an optional chord name. `None` stays `None`.
pub fn transpose_chord(chord: Option<&str>, semitones: i32) -> Option<String> {
    chord.map(|text| transpose_chord_text(text, semitones))
}

/// Transpose every chord of a sheet. Cells without a chord stay empty.
pub fn transpose_sheet<'a, I>(chords: I, semitones: i32) -> Vec<Option<String>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    chords
        .into_iter()
        .map(|chord| transpose_chord(chord, semitones))
        .collect()
}
