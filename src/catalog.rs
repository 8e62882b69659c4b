//! Fingering Catalog
//!
//! Open-position fingerings for the keys where an open form exists. Every
//! other (bucket, key) pair is derived at query time.

use std::fmt::Display;

use crate::{
    fingering::{Barre, FingerPosition, MUTED, STRING_COUNT},
    note::PitchClass,
};

const X: i8 = MUTED;

/// Families of chords that have catalog entries.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChordBucket {
    /// Major triad
    Major,
    /// Minor triad
    Minor,
    /// Dominant seventh
    Seventh,
    /// Minor seventh
    MinorSeventh,
    /// Major seventh
    MajorSeventh,
}

impl ChordBucket {
    /// All buckets in catalog order.
    pub const ALL: [ChordBucket; 5] = [
        ChordBucket::Major,
        ChordBucket::Minor,
        ChordBucket::Seventh,
        ChordBucket::MinorSeventh,
        ChordBucket::MajorSeventh,
    ];

    /// Bucket by its catalog name: `major`, `minor`, `7`, `m7`, `maj7`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "major" => Some(ChordBucket::Major),
            "minor" => Some(ChordBucket::Minor),
            "7" => Some(ChordBucket::Seventh),
            "m7" => Some(ChordBucket::MinorSeventh),
            "maj7" => Some(ChordBucket::MajorSeventh),
            _ => None,
        }
    }

    /// Bucket for a chord modifier.
    ///
    /// `""`, `m` and `M7` are aliases; any other modifier is read as a
    /// catalog name as is.
    pub fn from_modifier(modifier: &str) -> Option<Self> {
        let name = match modifier {
            "" => "major",
            "m" => "minor",
            "M7" => "maj7",
            other => other,
        };
        Self::from_name(name)
    }

    /// Catalog name.
    pub fn name(self) -> &'static str {
        match self {
            ChordBucket::Major => "major",
            ChordBucket::Minor => "minor",
            ChordBucket::Seventh => "7",
            ChordBucket::MinorSeventh => "m7",
            ChordBucket::MajorSeventh => "maj7",
        }
    }

    /// Open positions of this bucket, in C..B order.
    pub fn entries(self) -> &'static [CatalogEntry] {
        match self {
            ChordBucket::Major => MAJOR,
            ChordBucket::Minor => MINOR,
            ChordBucket::Seventh => SEVENTH,
            ChordBucket::MinorSeventh => MINOR_SEVENTH,
            ChordBucket::MajorSeventh => MAJOR_SEVENTH,
        }
    }

    /// Open position for `key`, if the catalog has one.
    pub fn open_position(self, key: PitchClass) -> Option<&'static CatalogEntry> {
        self.entries().iter().find(|entry| entry.pitch() == Some(key))
    }
}

impl Display for ChordBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An open-position fingering stored for one key.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Key note spelling the fingering is stored under.
    pub key: &'static str,
    /// Fret per string, string 1 first.
    pub frets: [i8; STRING_COUNT],
    /// Barres; a single barre at fret 0 marks a movable shape.
    pub barres: &'static [Barre],
}

impl CatalogEntry {
    const fn new(key: &'static str, frets: [i8; STRING_COUNT], barres: &'static [Barre]) -> Self {
        CatalogEntry { key, frets, barres }
    }

    /// Pitch class of the entry's key.
    pub fn pitch(&self) -> Option<PitchClass> {
        PitchClass::from_spelling(self.key)
    }

    /// Owned diagram.
    pub fn position(&self) -> FingerPosition {
        FingerPosition {
            frets: self.frets,
            barres: self.barres.to_vec(),
        }
    }
}

const NUT_1_6: &[Barre] = &[Barre::new(0, 1, 6)];
const NUT_1_5: &[Barre] = &[Barre::new(0, 1, 5)];
const NUT_4_4: &[Barre] = &[Barre::new(0, 4, 4)];

#[rustfmt::skip]
const MAJOR: &[CatalogEntry] = &[
    CatalogEntry::new("C", [0, 1, 0, 2, 3, X], NUT_1_5),
    CatalogEntry::new("D", [2, 3, 2, 0, X, X], NUT_4_4),
    CatalogEntry::new("E", [0, 0, 1, 2, 2, 0], NUT_1_6),
    CatalogEntry::new("G", [3, 0, 0, 0, 2, 3], &[]),
    CatalogEntry::new("A", [0, 2, 2, 2, 0, X], NUT_1_5),
];

#[rustfmt::skip]
const MINOR: &[CatalogEntry] = &[
    CatalogEntry::new("D", [1, 3, 2, 0, X, X], &[]),
    CatalogEntry::new("E", [0, 0, 0, 2, 2, 0], NUT_1_6),
    CatalogEntry::new("A", [0, 1, 2, 2, 0, X], NUT_1_5),
];

#[rustfmt::skip]
const SEVENTH: &[CatalogEntry] = &[
    CatalogEntry::new("D", [2, 1, 2, 0, X, X], &[]),
    CatalogEntry::new("E", [0, 0, 1, 0, 2, 0], NUT_1_6),
    CatalogEntry::new("G", [1, 0, 0, 0, 2, 3], &[]),
    CatalogEntry::new("A", [0, 2, 0, 2, 0, X], NUT_1_5),
];

#[rustfmt::skip]
const MINOR_SEVENTH: &[CatalogEntry] = &[
    CatalogEntry::new("D", [1, 1, 2, 0, X, X], &[]),
    CatalogEntry::new("E", [0, 0, 0, 0, 2, 0], NUT_1_6),
    CatalogEntry::new("A", [0, 1, 0, 2, 0, X], NUT_1_5),
];

#[rustfmt::skip]
const MAJOR_SEVENTH: &[CatalogEntry] = &[
    CatalogEntry::new("C", [0, 0, 0, 2, 3, 0], &[]),
    CatalogEntry::new("E", [0, 0, 1, 1, 2, 0], NUT_1_6),
    CatalogEntry::new("G", [2, 0, 0, 0, 2, 3], &[]),
    CatalogEntry::new("A", [0, 2, 1, 2, 0, X], NUT_1_5),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_is_a_valid_diagram() {
        for bucket in ChordBucket::ALL {
            for entry in bucket.entries() {
                assert!(entry.pitch().is_some(), "{bucket}/{}: bad key", entry.key);
                assert_eq!(entry.position().validate(), Ok(()), "{bucket}/{}", entry.key);
            }
        }
    }

    #[test]
    fn keys_are_unique_and_in_c_to_b_order() {
        for bucket in ChordBucket::ALL {
            // C is index 3 in the note table
            let order: Vec<usize> = bucket
                .entries()
                .iter()
                .filter_map(|e| e.pitch())
                .map(|p| (p.index() + 12 - 3) % 12)
                .collect();
            let mut sorted = order.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(order, sorted, "{bucket}");
        }
    }

    #[test]
    fn e_and_a_shapes_are_movable_in_every_bucket() {
        for bucket in ChordBucket::ALL {
            for key in ["E", "A"] {
                let pitch = PitchClass::from_spelling(key).unwrap();
                let entry = bucket.open_position(pitch).unwrap();
                assert!(entry.position().is_movable(), "{bucket}/{key}");
            }
        }
    }

    #[test]
    fn modifier_aliases() {
        assert_eq!(ChordBucket::from_modifier(""), Some(ChordBucket::Major));
        assert_eq!(ChordBucket::from_modifier("m"), Some(ChordBucket::Minor));
        assert_eq!(ChordBucket::from_modifier("M7"), Some(ChordBucket::MajorSeventh));
        assert_eq!(ChordBucket::from_modifier("maj7"), Some(ChordBucket::MajorSeventh));
        assert_eq!(ChordBucket::from_modifier("7"), Some(ChordBucket::Seventh));
        assert_eq!(ChordBucket::from_modifier("m7"), Some(ChordBucket::MinorSeventh));
        assert_eq!(ChordBucket::from_modifier("sus4"), None);
        for bucket in ChordBucket::ALL {
            assert_eq!(ChordBucket::from_name(bucket.name()), Some(bucket));
        }
    }
}
