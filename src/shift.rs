//! Key shift settings
//!
//! Song-key and capo selections of a chord sheet, and the `Transposer` that
//! applies their combined offset.

use std::fmt::Display;
use thiserror::Error;

use crate::{note::FLAT_SIGN, transpose};

/// Errors when building key shift settings
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShiftError {
    /// A setting was outside its selectable range.
    #[error("{setting} must be within {min}..={max}, got {value}")]
    OutOfRange {
        /// Which setting was rejected.
        setting: &'static str,
        /// The rejected value.
        value: i32,
        /// Lowest accepted value.
        min: i32,
        /// Highest accepted value.
        max: i32,
    },
}

fn checked(setting: &'static str, value: i32, min: i32, max: i32) -> Result<i8, ShiftError> {
    if (min..=max).contains(&value) {
        Ok(value as i8)
    } else {
        Err(ShiftError::OutOfRange {
            setting,
            value,
            min,
            max,
        })
    }
}

/// Semitone offset from the original key of a song, -6..=5.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SongKey(i8);

impl SongKey {
    /// Lowest selectable offset.
    pub const MIN: i32 = -6;
    /// Highest selectable offset.
    pub const MAX: i32 = 5;
    /// The original key.
    pub const ORIGINAL: SongKey = SongKey(0);
    /// Selectable offsets, highest first.
    pub const OPTIONS: [i32; 12] = [5, 4, 3, 2, 1, 0, -1, -2, -3, -4, -5, -6];

    /// Validate an offset.
    pub fn new(value: i32) -> Result<Self, ShiftError> {
        checked("song key", value, Self::MIN, Self::MAX).map(SongKey)
    }

    /// Offset in semitones.
    pub fn value(self) -> i32 {
        self.0 as i32
    }

    /// Semitones to move displayed chords when switching from `self` to `next`.
    pub fn semitones_to(self, next: SongKey) -> i32 {
        next.value() - self.value()
    }

    /// Short text for a badge; `None` in the original key.
    pub fn badge(self) -> Option<String> {
        match self.0 {
            0 => None,
            n if n > 0 => Some(format!("#{n}")),
            n => Some(format!("{FLAT_SIGN}{}", n.unsigned_abs())),
        }
    }
}

impl TryFrom<i32> for SongKey {
    type Error = ShiftError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        SongKey::new(value)
    }
}

impl Display for SongKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => f.write_str("Original key"),
            n if n > 0 => write!(f, "+{n}"),
            n => write!(f, "{n}"),
        }
    }
}

/// Capo or detuning, as a semitone offset applied to displayed chords, -9..=2.
///
/// A negative value `-n` is a capo on fret `n`. `1` and `2` stand for a
/// guitar tuned down a half or a whole step.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Capo(i8);

impl Capo {
    /// Lowest selectable offset (capo on fret 9).
    pub const MIN: i32 = -9;
    /// Highest selectable offset (whole step down).
    pub const MAX: i32 = 2;
    /// No capo, standard tuning.
    pub const NONE: Capo = Capo(0);
    /// Selectable offsets, highest first.
    pub const OPTIONS: [i32; 12] = [2, 1, 0, -1, -2, -3, -4, -5, -6, -7, -8, -9];

    /// Validate an offset.
    pub fn new(value: i32) -> Result<Self, ShiftError> {
        checked("capo", value, Self::MIN, Self::MAX).map(Capo)
    }

    /// Offset in semitones.
    pub fn value(self) -> i32 {
        self.0 as i32
    }

    /// Fret the capo sits on, if any.
    pub fn fret(self) -> Option<u8> {
        (self.0 < 0).then_some(self.0.unsigned_abs())
    }

    /// Semitones to move displayed chords when switching from `self` to `next`.
    pub fn semitones_to(self, next: Capo) -> i32 {
        next.value() - self.value()
    }

    /// Short text for a badge; `None` without capo.
    pub fn badge(self) -> Option<String> {
        match self.0 {
            0 => None,
            _ => Some(self.to_string()),
        }
    }
}

impl TryFrom<i32> for Capo {
    type Error = ShiftError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Capo::new(value)
    }
}

impl Display for Capo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            2 => f.write_str("Whole step down"),
            1 => f.write_str("Half step down"),
            0 => f.write_str("No capo"),
            n => write!(f, "Capo {}", n.unsigned_abs()),
        }
    }
}

/// Builder for `Transposer` to set song key and capo
pub struct TransposerBuilder {
    song_key: i32,
    capo: i32,
}

impl TransposerBuilder {
    /// Create a new builder: original key, no capo
    pub fn new() -> Self {
        TransposerBuilder {
            song_key: 0,
            capo: 0,
        }
    }

    /// Set the song key offset (-6..=5)
    pub fn song_key(mut self, value: i32) -> Self {
        self.song_key = value;
        self
    }

    /// Set the capo offset (-9..=2)
    pub fn capo(mut self, value: i32) -> Self {
        self.capo = value;
        self
    }

    /// Validate and build the `Transposer`
    pub fn build(self) -> Result<Transposer, ShiftError> {
        Ok(Transposer {
            song_key: SongKey::new(self.song_key)?,
            capo: Capo::new(self.capo)?,
        })
    }
}

impl Default for TransposerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies a song key and capo to chord names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Transposer {
    song_key: SongKey,
    capo: Capo,
}

impl Transposer {
    /// Return a builder to set song key and capo
    pub fn builder() -> TransposerBuilder {
        TransposerBuilder::new()
    }

    /// Transposer from already validated settings.
    pub fn new(song_key: SongKey, capo: Capo) -> Self {
        Transposer { song_key, capo }
    }

    /// Song key setting.
    pub fn song_key(&self) -> SongKey {
        self.song_key
    }

    /// Capo setting.
    pub fn capo(&self) -> Capo {
        self.capo
    }

    /// Net shift applied to chords written in the original key.
    pub fn semitones(&self) -> i32 {
        self.song_key.value() + self.capo.value()
    }

    /// Shift that takes chords displayed under `self` to chords displayed under `next`.
    pub fn semitones_to(&self, next: &Transposer) -> i32 {
        next.semitones() - self.semitones()
    }

    /// Transpose a chord written in the original key.
    pub fn transpose(&self, chord: &str) -> String {
        transpose::transpose_chord_text(chord, self.semitones())
    }

    /// Transpose a sheet written in the original key.
    pub fn transpose_sheet<'a, I>(&self, chords: I) -> Vec<Option<String>>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        transpose::transpose_sheet(chords, self.semitones())
    }
}
