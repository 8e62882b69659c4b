//! Note Table
//!
//! The twelve pitch classes of the chromatic circle and their accepted
//! spellings. Index 0 is A; five slots carry a flat alternative next to the
//! sharp form.

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, str::FromStr};
use thiserror::Error;

/// Number of pitch classes on the chromatic circle.
pub const SEMITONES: usize = 12;

/// The only accepted flat glyph. ASCII `b` is not a flat.
pub const FLAT_SIGN: char = '♭';

/// Accepted spellings per pitch class, starting at A.
///
/// Slots with two spellings list the sharp form first and the flat form second.
pub const NOTE_TABLE: [&[&str]; SEMITONES] = [
    &["A"],
    &["A#", "B♭"],
    &["B"],
    &["C"],
    &["C#", "D♭"],
    &["D"],
    &["D#", "E♭"],
    &["E"],
    &["F"],
    &["F#", "G♭"],
    &["G"],
    &["G#", "A♭"],
];

lazy_static! {
    /// Spelling -> index map, equivalent to scanning `NOTE_TABLE`.
    static ref SPELLING_INDEX: HashMap<&'static str, usize> = NOTE_TABLE
        .iter()
        .enumerate()
        .flat_map(|(idx, spellings)| spellings.iter().map(move |&s| (s, idx)))
        .collect();

    /// Every spelling, longest first, for prefix matching.
    static ref SPELLINGS_LONGEST_FIRST: Vec<&'static str> = {
        let mut all: Vec<&'static str> = NOTE_TABLE.iter().flat_map(|s| s.iter().copied()).collect();
        all.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        all
    };
}

/// Errors when reading a note spelling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NoteError {
    /// The text is not one of the spellings in `NOTE_TABLE`.
    #[error("`{spelling}` is not a recognized note spelling")]
    Unknown {
        /// The rejected text.
        spelling: String,
    },
}

/// Wrap any integer onto the circle: `((i % 12) + 12) % 12`.
pub fn normalize_index(index: i32) -> usize {
    index.rem_euclid(SEMITONES as i32) as usize
}

/// Index (0..12) of a spelling, or `None` if it is not in the table.
pub fn note_index(spelling: &str) -> Option<usize> {
    SPELLING_INDEX.get(spelling).copied()
}

/// True iff `spelling` exactly matches a table entry. No trimming, case-sensitive.
pub fn is_valid_note(spelling: &str) -> bool {
    note_index(spelling).is_some()
}

/// True if the spelling carries the flat glyph.
pub fn uses_flat_spelling(spelling: &str) -> bool {
    spelling.contains(FLAT_SIGN)
}

/// Spelling for an index, wrapping it onto the circle first.
///
/// With `prefer_flat` the flat form is returned where the slot has one;
/// otherwise the natural or sharp form.
pub fn note_by_spelling_preference(index: i32, prefer_flat: bool) -> &'static str {
    PitchClass::from_index(index).spelling(prefer_flat)
}

/// Spellings ordered so that a two-character spelling is tried before
/// its one-character prefix.
pub(crate) fn spellings_longest_first() -> &'static [&'static str] {
    &SPELLINGS_LONGEST_FIRST
}

/// One of the twelve pitch classes, stored as its table index.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Pitch class at `index`, wrapped onto the circle.
    pub fn from_index(index: i32) -> Self {
        PitchClass(normalize_index(index) as u8)
    }

    /// Pitch class of a spelling, if the spelling is valid.
    pub fn from_spelling(spelling: &str) -> Option<Self> {
        note_index(spelling).map(|idx| PitchClass(idx as u8))
    }

    /// Table index, 0 = A.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Spelling of this pitch class; see [`note_by_spelling_preference`].
    pub fn spelling(self, prefer_flat: bool) -> &'static str {
        let spellings = NOTE_TABLE[self.index()];
        match spellings {
            [_, flat] if prefer_flat => *flat,
            [first, ..] => *first,
            [] => "",
        }
    }

    /// Move `semitones` around the circle. Any magnitude is accepted.
    pub fn transpose(self, semitones: i32) -> Self {
        let shift = semitones.rem_euclid(SEMITONES as i32) as usize;
        PitchClass(((self.index() + shift) % SEMITONES) as u8)
    }

    /// Upward distance in semitones from `self` to `target`, in 0..12.
    pub fn offset_to(self, target: PitchClass) -> usize {
        (target.index() + SEMITONES - self.index()) % SEMITONES
    }
}

impl FromStr for PitchClass {
    type Err = NoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PitchClass::from_spelling(s).ok_or_else(|| NoteError::Unknown {
            spelling: s.to_string(),
        })
    }
}

impl Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spelling(false))
    }
}
