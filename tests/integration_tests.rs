//! Integration tests for the pitch speller
//!
//! Tests the full pipeline from note names to spelled output.

use respell::tpc::{candidates, Tpc};
use respell::{
    format_names, parse_note_name, parse_sheet, process_chord, spell_chord, spell_sheet,
    to_musicxml_sheet, SpellError,
};

#[test]
fn test_c_major_is_stable() {
    assert_eq!(process_chord(&["C", "E", "G"], 0).unwrap(), vec!["C", "E", "G"]);
}

#[test]
fn test_single_note_is_unchanged() {
    assert_eq!(process_chord(&["C#"], 0).unwrap(), vec!["C#"]);
}

#[test]
fn test_flat_key_keeps_flats() {
    let result = process_chord(&["Ab", "C", "Eb"], -3).unwrap();
    assert_eq!(result, vec!["Ab", "C", "Eb"]);
    for sharp in ["G#", "B#", "D#"] {
        assert!(!result.contains(&sharp.to_string()));
    }
}

#[test]
fn test_sharp_input_in_flat_key_is_respelled() {
    assert_eq!(
        process_chord(&["G#", "C", "D#"], -3).unwrap(),
        vec!["Ab", "C", "Eb"]
    );
    // Same notes with no key signature stay sharp
    assert_eq!(
        process_chord(&["G#", "C", "D#"], 0).unwrap(),
        vec!["G#", "B#", "D#"]
    );
}

#[test]
fn test_minor_third_above_bass() {
    assert_eq!(
        process_chord(&["C", "D#", "G"], 0).unwrap(),
        vec!["C", "Eb", "G"]
    );
}

#[test]
fn test_dominant_seventh_in_sharp_key() {
    assert_eq!(
        process_chord(&["D", "Gb", "A", "C"], 1).unwrap(),
        vec!["D", "F#", "A", "C"]
    );
}

#[test]
fn test_key_shift_can_move_the_bass() {
    // Fbb alone is 15 fifths flat of C
    assert_eq!(process_chord(&["Fbb"], 0).unwrap(), vec!["Eb"]);
}

#[test]
fn test_bass_spelling_kept_when_in_range() {
    for bass in ["C", "F#", "Gb", "Bb", "E", "Db"] {
        let result = process_chord(&[bass, "E", "G#", "B"], 0).unwrap();
        assert_eq!(result[0], bass);
    }
}

#[test]
fn test_output_has_same_length_and_pitch_classes() {
    let input = ["Ebb", "F#", "bb", "c", "G#", "D"];
    let result = process_chord(&input, 2).unwrap();
    assert_eq!(result.len(), input.len());
    for (before, after) in input.iter().zip(&result) {
        let (pc_before, _) = parse_note_name(before).unwrap();
        let (pc_after, _) = parse_note_name(after).unwrap();
        assert_eq!(pc_before, pc_after, "{} -> {}", before, after);
    }
}

#[test]
fn test_whole_chord_fails_on_bad_note() {
    assert_eq!(
        process_chord(&["C", "E", "H"], 0),
        Err(SpellError::InvalidLetter {
            name: "H".to_string()
        })
    );
    assert_eq!(process_chord(&["C", ""], 0), Err(SpellError::EmptyInput));
    assert!(matches!(
        process_chord(&["C#b"], 0),
        Err(SpellError::UnsupportedAccidental { .. })
    ));
}

#[test]
fn test_error_message_names_input() {
    let err = process_chord(&["C", "E#b"], 0).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported accidental format: E#b");
}

#[test]
fn test_empty_chord() {
    let empty: [&str; 0] = [];
    assert!(process_chord(&empty, 0).unwrap().is_empty());
}

#[test]
fn test_pitch_class_round_trip() {
    for pc in 0..12 {
        for &tpc in candidates(pc) {
            let (parsed_pc, parsed) = parse_note_name(&tpc.name()).unwrap();
            assert_eq!(parsed_pc, pc);
            assert_eq!(parsed, tpc);
        }
    }
    assert_eq!(Tpc(20).to_string(), "F#");
}

#[test]
fn test_spelled_notes_carry_step_and_alter() {
    let chord = spell_chord(&["D#", "F##", "A#"], 5).unwrap();
    assert_eq!(chord.names(), vec!["D#", "F##", "A#"]);
    let alters: Vec<i32> = chord.notes.iter().map(|n| n.alter).collect();
    assert_eq!(alters, vec![1, 2, 1]);
    assert_eq!(chord.notes[1].input, "F##");
}

#[test]
fn test_yaml_output() {
    let chord = spell_chord(&["Ab", "C", "Eb"], -3).unwrap();
    let yaml = serde_yaml::to_string(&chord).unwrap();
    assert!(yaml.contains("key-signature: -3"));
    assert!(yaml.contains("tpc: 10"));
    assert!(yaml.contains("step: A"));
    assert!(yaml.contains("alter: -1"));
    assert!(!yaml.contains("label"));
}

#[test]
fn test_format_names() {
    let names = process_chord(&["Ab", "C", "Eb"], -3).unwrap();
    assert_eq!(format_names(&names), "[Ab, C, Eb]");
}

#[test]
fn test_sheet_to_musicxml() {
    let sheet = parse_sheet(
        r#"
title: Two chords
key-signature: 1
chords:
  - [G, B, D]
  - notes: [D, Gb, A, C]
    label: V7
"#,
    )
    .unwrap();
    let chords = spell_sheet(&sheet).unwrap();
    assert_eq!(chords[1].names(), vec!["D", "F#", "A", "C"]);

    let xml = to_musicxml_sheet(sheet.title.as_deref(), &chords);
    assert!(xml.contains("<work-title>Two chords</work-title>"));
    assert!(xml.contains("<fifths>1</fifths>"));
    assert!(xml.contains("<words>V7</words>"));
    assert_eq!(xml.matches("<measure number=").count(), 2);
    assert_eq!(xml.matches("<step>F</step>").count(), 1);
}

#[test]
fn test_extreme_key_signatures_keep_pitch_classes() {
    for key in [i32::MAX, i32::MIN, 400_000_000, -400_000_000] {
        let chord = spell_chord(&["C", "E", "G"], key).unwrap();
        let pitch_classes: Vec<i32> = chord.notes.iter().map(|n| n.tpc.pitch_class()).collect();
        assert_eq!(pitch_classes, vec![0, 4, 7], "key {}", key);
        assert_eq!(chord.key_signature, key);
    }
    assert_eq!(process_chord(&["C", "E", "G"], 12).unwrap(), vec!["C", "E", "G"]);
}
