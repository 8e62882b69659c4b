//! Fingering model
//!
//! Chord diagrams as drawing instructions: one fret per string plus optional
//! barres.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::note::SEMITONES;

/// Strings on the guitar. String 1 is the highest-pitched.
pub const STRING_COUNT: usize = 6;

/// Fret value of a string that is not played.
pub const MUTED: i8 = -1;

/// Fret value of a string played open.
pub const OPEN: i8 = 0;

/// Errors when checking a fingering received from outside the crate
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    /// A fret was below `MUTED`.
    #[error("string {string} has invalid fret {fret}")]
    InvalidFret {
        /// String number, 1-based.
        string: usize,
        /// The rejected fret value.
        fret: i8,
    },

    /// A barre referenced strings outside 1..=6 or ran backwards.
    #[error("barre #{index} covers invalid strings {start}..={end}")]
    InvalidBarre {
        /// Position of the barre in the list, 0-based.
        index: usize,
        /// First string.
        start: u8,
        /// Last string.
        end: u8,
    },
}

/// One finger pressing every string in `strings` at `fret`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Barre {
    /// Fret of the bar. 0 marks the nut of a movable shape.
    pub fret: i8,
    /// First and last string covered, inclusive.
    pub strings: [u8; 2],
}

impl Barre {
    /// Barre at `fret` from string `first` to string `last`.
    pub const fn new(fret: i8, first: u8, last: u8) -> Self {
        Barre {
            fret,
            strings: [first, last],
        }
    }

    /// Whether the barre lies on `string` (1-based).
    pub fn covers(&self, string: usize) -> bool {
        let [first, last] = self.strings;
        (first as usize..=last as usize).contains(&string)
    }
}

/// A chord diagram.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FingerPosition {
    /// Fret per string, string 1 first. `OPEN` or `MUTED` where not fretted.
    pub frets: [i8; STRING_COUNT],
    /// Barres in drawing order.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub barres: Vec<Barre>,
}

impl FingerPosition {
    /// Diagram without barres.
    pub fn new(frets: [i8; STRING_COUNT]) -> Self {
        FingerPosition {
            frets,
            barres: Vec::new(),
        }
    }

    /// Add a barre.
    pub fn with_barre(mut self, barre: Barre) -> Self {
        self.barres.push(barre);
        self
    }

    /// Fret on `string` (1-based), `None` outside 1..=6.
    pub fn fret(&self, string: usize) -> Option<i8> {
        string
            .checked_sub(1)
            .and_then(|idx| self.frets.get(idx))
            .copied()
    }

    /// Whether `string` (1-based) is muted.
    pub fn is_muted(&self, string: usize) -> bool {
        self.fret(string) == Some(MUTED)
    }

    /// Whether `string` (1-based) is played open.
    pub fn is_open(&self, string: usize) -> bool {
        self.fret(string) == Some(OPEN)
    }

    /// A shape that can slide up the neck: exactly one barre, sitting at fret 0.
    pub fn is_movable(&self) -> bool {
        matches!(self.barres.as_slice(), [barre] if barre.fret == 0)
    }

    /// The shape moved up by `offset` semitones under a barre.
    ///
    /// Fretted strings move one fret up, since the barre finger takes the
    /// place of the nut. Open and muted strings stay as they are. Each barre
    /// moves by `offset` taken modulo an octave; its strings do not change.
    /// Frets saturate at `i8::MAX`.
    pub fn shifted(&self, offset: u8) -> FingerPosition {
        let offset = (offset as usize % SEMITONES) as i8;
        let mut frets = self.frets;
        for fret in frets.iter_mut().filter(|f| **f > OPEN) {
            *fret = fret.saturating_add(1);
        }
        FingerPosition {
            frets,
            barres: self
                .barres
                .iter()
                .map(|b| {
                    let [first, last] = b.strings;
                    Barre::new(b.fret.saturating_add(offset), first, last)
                })
                .collect(),
        }
    }

    /// Check fret values and barre string ranges.
    pub fn validate(&self) -> Result<(), PositionError> {
        for (idx, &fret) in self.frets.iter().enumerate() {
            if fret < MUTED {
                return Err(PositionError::InvalidFret {
                    string: idx + 1,
                    fret,
                });
            }
        }
        for (index, barre) in self.barres.iter().enumerate() {
            let [start, end] = barre.strings;
            if start < 1 || end as usize > STRING_COUNT || start > end || barre.fret < 0 {
                return Err(PositionError::InvalidBarre { index, start, end });
            }
        }
        Ok(())
    }
}

/// A chord name with every diagram found for it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChordPattern {
    /// Chord name as given.
    pub name: String,
    /// Diagrams, most playable first.
    pub positions: Vec<FingerPosition>,
}
