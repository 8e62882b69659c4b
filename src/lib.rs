//! # chordbook
//!
//! Chord names for chord sheets: parse them, transpose them around the
//! chromatic circle while keeping each note's sharp or flat spelling, and
//! find guitar diagrams for them, open positions first and barre forms after.
//!
//! ## Example
//! ```rust
//! use chordbook::{get_chord_positions, parse_chord, transpose_chord, Transposer};
//!
//! fn run() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1) Parse a chord name
//!     let chord = parse_chord("C#m/G#").ok_or("not a chord")?;
//!     assert_eq!(chord.key_note(), "C#");
//!     assert_eq!(chord.modifier(), "m");
//!     assert_eq!(chord.bass_note(), "G#");
//!
//!     // 2) Transpose; flats stay flats, text that is not a chord passes through
//!     assert_eq!(transpose_chord(Some("B♭m"), 2).as_deref(), Some("Cm"));
//!     assert_eq!(transpose_chord(Some("N.C."), 5).as_deref(), Some("N.C."));
//!
//!     // 3) Apply a song key and capo to a whole sheet
//!     let transposer = Transposer::builder().song_key(2).capo(-3).build()?;
//!     assert_eq!(transposer.transpose("G"), "F#");
//!
//!     // 4) Diagrams, open position first
//!     let positions = get_chord_positions("C");
//!     assert_eq!(positions[0].frets, [0, 1, 0, 2, 3, -1]);
//!     println!("{} diagrams for C", positions.len());
//!
//!     Ok(())
//! }
//! # run().unwrap();
//! ```
//!
//! ## Features
//! - `serde` (default): `Serialize`/`Deserialize` for the diagram types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

/// Note table and pitch classes.
pub use note::{
    is_valid_note, normalize_index, note_by_spelling_preference, note_index, uses_flat_spelling,
    NoteError, PitchClass, FLAT_SIGN, NOTE_TABLE, SEMITONES,
};

/// Chord name parsing.
pub use chord::{parse_chord, ChordError, ParsedChord};

/// Transposition of notes, chords and sheets.
pub use transpose::{transpose_chord, transpose_chord_text, transpose_note, transpose_sheet};

/// Song key and capo settings.
pub use shift::{Capo, ShiftError, SongKey, Transposer, TransposerBuilder};

/// Diagram types.
pub use fingering::{
    Barre, ChordPattern, FingerPosition, PositionError, MUTED, OPEN, STRING_COUNT,
};

/// Open-position catalog.
pub use catalog::{CatalogEntry, ChordBucket};

/// Diagram lookup and barre derivation.
pub use positions::{
    chord_pattern, get_chord_positions, positions_for, prefers_a_shape, A_SHAPE_PRIORITY_NOTES,
};

/// Note table module.
pub mod note;

/// Chord parser module.
pub mod chord;

/// Transposition module.
pub mod transpose;

/// Song key and capo module.
pub mod shift;

/// Fingering model module.
pub mod fingering;

/// Fingering catalog module.
pub mod catalog;

/// Fingering derivation module.
pub mod positions;
