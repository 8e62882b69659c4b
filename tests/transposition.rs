//! Integration tests for transposition and key shift settings.

use chordbook::{
    parse_chord, transpose_chord, transpose_chord_text, transpose_note, transpose_sheet, Capo,
    ShiftError, SongKey, Transposer, FLAT_SIGN, NOTE_TABLE,
};
use lazy_static::lazy_static;
use pretty_assertions::assert_eq;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

lazy_static! {
    /// Chord names covering sharps, flats, modifiers and slash chords.
    static ref CHORDS: Vec<String> = {
        let mut chords = Vec::new();
        for spellings in NOTE_TABLE {
            for key in spellings {
                for modifier in ["", "m", "7", "M7", "sus4"] {
                    chords.push(format!("{key}{modifier}"));
                    chords.push(format!("{key}{modifier}/E"));
                    chords.push(format!("{key}{modifier}/A♭"));
                }
            }
        }
        chords
    };
}

fn t(chord: &str, semitones: i32) -> String {
    transpose_chord_text(chord, semitones)
}

/// Pitch content of a chord, ignoring spelling: (key, modifier, bass).
fn pitches(chord: &str) -> (usize, String, Option<usize>) {
    let parsed = parse_chord(chord).unwrap();
    (
        parsed.key_pitch().index(),
        parsed.modifier().to_string(),
        parsed.bass_pitch().map(|p| p.index()),
    )
}

#[test]
fn basic_shifts() {
    assert_eq!(t("C", 1), "C#");
    assert_eq!(t("C", 2), "D");
    assert_eq!(t("C", -1), "B");
}

#[test]
fn sharps_down() {
    assert_eq!(t("C#", -1), "C");
    assert_eq!(t("D#", -1), "D");
    assert_eq!(t("F#", -1), "F");
    assert_eq!(t("G#", -1), "G");
    assert_eq!(t("A#", -1), "A");
    assert_eq!(t("C#", -2), "B");
    assert_eq!(t("F#", -2), "E");
}

#[test]
fn modifiers_are_kept() {
    assert_eq!(t("Cm", 1), "C#m");
    assert_eq!(t("CM7", 2), "DM7");
    assert_eq!(t("Csus4", -1), "Bsus4");
    // a modifier that looks like a note is not shifted
    assert_eq!(t("CaddE", 2), "DaddE");
}

#[test]
fn slash_chords_shift_both_notes() {
    assert_eq!(t("C/G", 1), "C#/G#");
    assert_eq!(t("Dm/F", 2), "Em/G");
    assert_eq!(t("Em/B", -1), "D#m/A#");
    // only the first bass segment is kept
    assert_eq!(t("C/G/B", 2), "D/A");
}

#[test]
fn flat_spelling_is_inherited_per_note() {
    assert_eq!(t("E♭", 1), "E");
    assert_eq!(t("E♭", -1), "D");
    assert_eq!(t("D", -1), "C#");
    assert_eq!(t("B♭m", 2), "Cm");
    assert_eq!(t("A♭/E♭", -1), "G/D");
    assert_eq!(t("B♭/E♭", 2), "C/F");
    assert_eq!(t("B♭", 3), "D♭");
    // key and bass pick their style independently
    assert_eq!(t("E♭/G", 1), "E/G#");
    assert_eq!(t("C#/B♭", 2), "D#/C");
    assert_eq!(t("C#/E♭", 3), "E/G♭");
}

#[test]
fn full_turns_are_identity() {
    assert_eq!(t("C", 12), "C");
    assert_eq!(t("Dm", 24), "Dm");
    assert_eq!(t("E/B", -12), "E/B");
    CHORDS.par_iter().for_each(|chord| {
        for turns in [-3, -2, -1, 1, 2, 3] {
            assert_eq!(&t(chord, 12 * turns), chord);
        }
    });
}

#[test]
fn shifting_back_restores_the_chord() {
    CHORDS.par_iter().for_each(|chord| {
        for n in -13..=13 {
            let up = t(chord, n);
            let back = t(&up, -n);
            assert_eq!(pitches(&back), pitches(chord), "{chord} by {n} via {up}");
            // sharps and naturals never turn into flats, so they come back exactly
            if !chord.contains(FLAT_SIGN) {
                assert_eq!(&back, chord, "{chord} by {n} via {up}");
            }
        }
    });
}

#[test]
fn flat_spelling_lost_on_a_natural() {
    // the style comes from the note right before each shift
    assert_eq!(t("E♭", 1), "E");
    assert_eq!(t(&t("E♭", 1), -1), "D#");
    assert_eq!(t(&t("E♭", 3), -3), "E♭");
}

#[test]
fn zero_shift_keeps_spelling() {
    assert_eq!(t("B♭m7/A♭", 0), "B♭m7/A♭");
    assert_eq!(t("F#/C#", 0), "F#/C#");
}

#[test]
fn extreme_shifts_do_not_overflow() {
    assert_eq!(t("C", i32::MAX), t("C", i32::MAX % 12));
    assert_eq!(t("C", i32::MIN), t("C", i32::MIN % 12));
}

#[test]
fn non_chords_pass_through() {
    assert_eq!(t("N.C.", 5), "N.C.");
    assert_eq!(t("", 1), "");
    assert_eq!(t("XXX", 1), "XXX");
    assert_eq!(transpose_chord(None, 3), None);
    assert_eq!(transpose_chord(Some("N.C."), 1).as_deref(), Some("N.C."));
    assert_eq!(transpose_chord(Some("G"), 2).as_deref(), Some("A"));
}

#[test]
fn unknown_bass_passes_through() {
    assert_eq!(t("C/H", 2), "D/H");
    assert_eq!(t("Am/", 2), "Bm");
    assert_eq!(transpose_note("H", 4), "H");
    assert_eq!(transpose_note("G♭", 1), "G");
    assert_eq!(transpose_note("G♭", 2), "A♭");
}

#[test]
fn whole_sheet() {
    let sheet = [Some("C"), None, Some("Am7/G"), Some("N.C."), Some("F")];
    assert_eq!(
        transpose_sheet(sheet, -3),
        vec![
            Some("A".to_string()),
            None,
            Some("F#m7/E".to_string()),
            Some("N.C.".to_string()),
            Some("D".to_string()),
        ]
    );
}

#[test]
fn song_key_range_and_labels() {
    for value in SongKey::OPTIONS {
        assert_eq!(SongKey::new(value).map(SongKey::value), Ok(value));
    }
    assert_eq!(
        SongKey::new(6),
        Err(ShiftError::OutOfRange {
            setting: "song key",
            value: 6,
            min: -6,
            max: 5
        })
    );
    assert!(SongKey::try_from(-7).is_err());

    let key = |v| SongKey::new(v).unwrap();
    assert_eq!(key(0).to_string(), "Original key");
    assert_eq!(key(3).to_string(), "+3");
    assert_eq!(key(-2).to_string(), "-2");
    assert_eq!(key(0).badge(), None);
    assert_eq!(key(3).badge().as_deref(), Some("#3"));
    assert_eq!(key(-2).badge().as_deref(), Some("♭2"));
    assert_eq!(key(2).semitones_to(key(-1)), -3);
    assert_eq!(SongKey::default(), SongKey::ORIGINAL);
}

#[test]
fn capo_range_and_labels() {
    for value in Capo::OPTIONS {
        assert_eq!(Capo::new(value).map(Capo::value), Ok(value));
    }
    assert!(Capo::new(3).is_err());
    assert!(Capo::new(-10).is_err());

    let capo = |v| Capo::new(v).unwrap();
    assert_eq!(capo(2).to_string(), "Whole step down");
    assert_eq!(capo(1).to_string(), "Half step down");
    assert_eq!(capo(0).to_string(), "No capo");
    assert_eq!(capo(-4).to_string(), "Capo 4");
    assert_eq!(capo(0).badge(), None);
    assert_eq!(capo(-4).badge().as_deref(), Some("Capo 4"));
    assert_eq!(capo(-4).fret(), Some(4));
    assert_eq!(capo(1).fret(), None);
    assert_eq!(capo(0).semitones_to(capo(-2)), -2);
    assert_eq!(Capo::default(), Capo::NONE);
}

#[test]
fn transposer_combines_key_and_capo() {
    let transposer = Transposer::builder().song_key(2).capo(-3).build().unwrap();
    assert_eq!(transposer.semitones(), -1);
    assert_eq!(transposer.song_key().value(), 2);
    assert_eq!(transposer.capo().fret(), Some(3));
    assert_eq!(transposer.transpose("G"), "F#");
    assert_eq!(transposer.transpose("E♭/B♭"), "D/A");
    assert_eq!(
        transposer.transpose_sheet([Some("C"), None]),
        vec![Some("B".to_string()), None]
    );

    let plain = Transposer::default();
    assert_eq!(plain.semitones(), 0);
    assert_eq!(plain.semitones_to(&transposer), -1);
    assert_eq!(plain, Transposer::new(SongKey::ORIGINAL, Capo::NONE));
}

#[test]
fn transposer_applies_changes_incrementally() {
    // moving displayed chords by the delta matches transposing the source
    let before = Transposer::builder().song_key(-2).build().unwrap();
    let after = Transposer::builder().song_key(1).capo(-5).build().unwrap();
    CHORDS.par_iter().for_each(|chord| {
        let shown = before.transpose(chord);
        let moved = t(&shown, before.semitones_to(&after));
        assert_eq!(pitches(&moved), pitches(&after.transpose(chord)), "{chord}");
    });
}

#[test]
fn transposer_rejects_out_of_range() {
    assert!(matches!(
        Transposer::builder().song_key(9).build(),
        Err(ShiftError::OutOfRange {
            setting: "song key",
            ..
        })
    ));
    assert!(matches!(
        Transposer::builder().capo(5).build(),
        Err(ShiftError::OutOfRange {
            setting: "capo",
            ..
        })
    ));
}
