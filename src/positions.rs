//! Fingering Deriver
//!
//! Collects the diagrams for a chord: the open position when the catalog has
//! one, then every movable catalog shape slid up to the chord's key.

use tracing::trace;

use crate::{
    catalog::{CatalogEntry, ChordBucket},
    chord::{parse_chord, ParsedChord},
    fingering::{ChordPattern, FingerPosition},
};

/// Keys whose A-shape barre sits lower on the neck than the E-shape one.
pub const A_SHAPE_PRIORITY_NOTES: [&str; 9] =
    ["A#", "B", "C", "C#", "D", "D#", "B♭", "D♭", "E♭"];

/// Which open form a derived shape descends from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum ShapeRoot {
    E,
    A,
    Other,
}

impl ShapeRoot {
    fn of(entry: &CatalogEntry) -> Self {
        match entry.key {
            "E" => ShapeRoot::E,
            "A" => ShapeRoot::A,
            _ => ShapeRoot::Other,
        }
    }
}

/// Whether `key_note` prefers A-shape barre forms over E-shape ones.
pub fn prefers_a_shape(key_note: &str) -> bool {
    A_SHAPE_PRIORITY_NOTES.contains(&key_note)
}

/// Diagrams for an already parsed chord, most playable first.
///
/// Duplicates are kept: two catalog shapes landing on the same diagram
/// both appear.
pub fn positions_for(chord: &ParsedChord) -> Vec<FingerPosition> {
    let Some(bucket) = ChordBucket::from_modifier(chord.modifier()) else {
        trace!(modifier = chord.modifier(), "no catalog bucket for modifier");
        return Vec::new();
    };
    let target = chord.key_pitch();

    let mut e_shapes = Vec::new();
    let mut a_shapes = Vec::new();
    let mut others = Vec::new();

    for entry in bucket.entries() {
        let position = entry.position();
        if !position.is_movable() {
            continue;
        }
        let Some(source) = entry.pitch() else {
            continue;
        };
        let offset = source.offset_to(target);
        if offset == 0 {
            continue;
        }
        let derived = position.shifted(offset as u8);
        match ShapeRoot::of(entry) {
            ShapeRoot::E => e_shapes.push(derived),
            ShapeRoot::A => a_shapes.push(derived),
            ShapeRoot::Other => others.push(derived),
        }
    }

    let (first, second) = if prefers_a_shape(chord.key_note()) {
        (a_shapes, e_shapes)
    } else {
        (e_shapes, a_shapes)
    };

    bucket
        .open_position(target)
        .map(CatalogEntry::position)
        .into_iter()
        .chain(first)
        .chain(second)
        .chain(others)
        .collect()
}

/// Diagrams for chord text. Empty when the text is not a chord or the
/// catalog knows nothing for its modifier.
pub fn get_chord_positions(chord: &str) -> Vec<FingerPosition> {
    parse_chord(chord)
        .map(|parsed| positions_for(&parsed))
        .unwrap_or_default()
}

/// Chord text paired with its diagrams.
pub fn chord_pattern(chord: &str) -> ChordPattern {
    ChordPattern {
        name: chord.to_string(),
        positions: get_chord_positions(chord),
    }
}
