//! Chord Parser
//!
//! Splits a chord name such as `C#m7/G#` into key note, modifier and bass note.

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

use crate::note::{spellings_longest_first, PitchClass};

/// Errors when parsing a chord name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChordError {
    /// The chord text was empty.
    #[error("empty chord name")]
    Empty,

    /// No note spelling is a prefix of the chord text.
    #[error("`{text}` does not start with a recognized key note")]
    UnknownKeyNote {
        /// The rejected chord text.
        text: String,
    },
}

/// A chord name split into its parts.
///
/// The key note is always a valid spelling. The modifier is opaque and kept
/// verbatim. The bass note is empty when absent and is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedChord {
    key_note: String,
    key_pitch: PitchClass,
    modifier: String,
    bass_note: String,
}

impl ParsedChord {
    /// Build a chord from parts. Fails if `key_note` is not a valid spelling.
    pub fn new(
        key_note: impl Into<String>,
        modifier: impl Into<String>,
        bass_note: impl Into<String>,
    ) -> Result<Self, ChordError> {
        let key_note = key_note.into();
        let Some(key_pitch) = PitchClass::from_spelling(&key_note) else {
            return Err(ChordError::UnknownKeyNote { text: key_note });
        };
        Ok(ParsedChord {
            key_note,
            key_pitch,
            modifier: modifier.into(),
            bass_note: bass_note.into(),
        })
    }

    /// Key note spelling, e.g. `C#`.
    pub fn key_note(&self) -> &str {
        &self.key_note
    }

    /// Suffix after the key note, e.g. `m7`. May be empty.
    pub fn modifier(&self) -> &str {
        &self.modifier
    }

    /// Bass note after the slash, or an empty string.
    pub fn bass_note(&self) -> &str {
        &self.bass_note
    }

    /// Whether the chord carries a bass note.
    pub fn has_bass(&self) -> bool {
        !self.bass_note.is_empty()
    }

    /// Pitch class of the key note.
    pub fn key_pitch(&self) -> PitchClass {
        self.key_pitch
    }

    /// Pitch class of the bass note, if present and recognized.
    pub fn bass_pitch(&self) -> Option<PitchClass> {
        PitchClass::from_spelling(&self.bass_note)
    }

    /// Same modifier under a new key and bass. `key_note` must spell `key_pitch`.
    pub(crate) fn with_notes(&self, key_pitch: PitchClass, key_note: &str, bass_note: String) -> Self {
        ParsedChord {
            key_note: key_note.to_string(),
            key_pitch,
            modifier: self.modifier.clone(),
            bass_note,
        }
    }
}

impl FromStr for ParsedChord {
    type Err = ChordError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(ChordError::Empty);
        }

        // anything after a second slash is dropped
        let mut segments = text.split('/');
        let main = segments.next().unwrap_or_default();
        let bass = segments.next().unwrap_or_default();

        let key_note = spellings_longest_first()
            .iter()
            .find(|spelling| main.starts_with(**spelling))
            .ok_or_else(|| ChordError::UnknownKeyNote {
                text: text.to_string(),
            })?;

        Self::new(*key_note, &main[key_note.len()..], bass)
    }
}

impl Display for ParsedChord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.key_note, self.modifier)?;
        if self.has_bass() {
            write!(f, "/{}", self.bass_note)?;
        }
        Ok(())
    }
}

/// Parse a chord name, returning `None` for empty text or an unknown key note.
pub fn parse_chord(text: &str) -> Option<ParsedChord> {
    text.parse().ok()
}
