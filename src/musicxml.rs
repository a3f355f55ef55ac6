use crate::{SpelledChord, SpelledNote};

/// Octave of the lowest voice (middle C = octave 4)
const BASS_OCTAVE: i32 = 3;

/// Whole note at 4 divisions per quarter
const WHOLE_NOTE_DIVISIONS: u32 = 16;

/// Convert a single spelled chord to a MusicXML document.
pub fn to_musicxml(chord: &SpelledChord) -> String {
    to_musicxml_sheet(None, std::slice::from_ref(chord))
}

/// Convert spelled chords to a MusicXML document, one measure per chord.
pub fn to_musicxml_sheet(title: Option<&str>, chords: &[SpelledChord]) -> String {
    let mut xml = String::new();

    // XML declaration and doctype
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<!DOCTYPE score-partwise PUBLIC "-//Recordare//DTD MusicXML 4.0 Partwise//EN" "http://www.musicxml.org/dtds/partwise.dtd">"#);
    xml.push('\n');

    xml.push_str(r#"<score-partwise version="4.0">"#);
    xml.push('\n');

    if let Some(title) = title {
        xml.push_str("  <work>\n");
        xml.push_str(&format!("    <work-title>{}</work-title>\n", escape_xml(title)));
        xml.push_str("  </work>\n");
    }

    xml.push_str("  <part-list>\n");
    xml.push_str("    <score-part id=\"P1\">\n");
    xml.push_str("      <part-name>Music</part-name>\n");
    xml.push_str("    </score-part>\n");
    xml.push_str("  </part-list>\n");

    xml.push_str("  <part id=\"P1\">\n");

    let mut previous_key: Option<i32> = None;
    for (i, chord) in chords.iter().enumerate() {
        // Attributes on the first measure and whenever the key changes
        let key = (previous_key != Some(chord.key_signature)).then_some(chord.key_signature);
        xml.push_str(&measure_to_xml(chord, i + 1, key, i == 0));
        previous_key = Some(chord.key_signature);
    }

    xml.push_str("  </part>\n");
    xml.push_str("</score-partwise>\n");

    xml
}

fn measure_to_xml(chord: &SpelledChord, number: usize, key: Option<i32>, first: bool) -> String {
    let mut xml = String::new();

    xml.push_str(&format!("    <measure number=\"{}\">\n", number));

    if first || key.is_some() {
        xml.push_str("      <attributes>\n");
        if first {
            xml.push_str("        <divisions>4</divisions>\n");
        }
        if let Some(fifths) = key {
            xml.push_str("        <key>\n");
            xml.push_str(&format!("          <fifths>{}</fifths>\n", fifths));
            xml.push_str("        </key>\n");
        }
        if first {
            xml.push_str("        <time>\n");
            xml.push_str("          <beats>4</beats>\n");
            xml.push_str("          <beat-type>4</beat-type>\n");
            xml.push_str("        </time>\n");
            xml.push_str("        <clef>\n");
            xml.push_str("          <sign>G</sign>\n");
            xml.push_str("          <line>2</line>\n");
            xml.push_str("        </clef>\n");
        }
        xml.push_str("      </attributes>\n");
    }

    if let Some(label) = &chord.label {
        xml.push_str("      <direction placement=\"above\">\n");
        xml.push_str("        <direction-type>\n");
        xml.push_str(&format!("          <words>{}</words>\n", escape_xml(label)));
        xml.push_str("        </direction-type>\n");
        xml.push_str("      </direction>\n");
    }

    let octaves = voice_octaves(&chord.notes);
    for (i, (note, octave)) in chord.notes.iter().zip(octaves).enumerate() {
        xml.push_str(&note_to_xml(note, octave, i > 0));
    }

    xml.push_str("    </measure>\n");
    xml
}

fn note_to_xml(note: &SpelledNote, octave: i32, in_chord: bool) -> String {
    let mut xml = String::new();

    xml.push_str("      <note>\n");
    if in_chord {
        xml.push_str("        <chord/>\n");
    }

    xml.push_str("        <pitch>\n");
    xml.push_str(&format!("          <step>{}</step>\n", note.step));
    if note.alter != 0 {
        xml.push_str(&format!("          <alter>{}</alter>\n", note.alter));
    }
    xml.push_str(&format!("          <octave>{}</octave>\n", octave));
    xml.push_str("        </pitch>\n");

    xml.push_str(&format!("        <duration>{}</duration>\n", WHOLE_NOTE_DIVISIONS));
    xml.push_str("        <type>whole</type>\n");

    if let Some(accidental) = accidental_name(note.alter) {
        xml.push_str(&format!("        <accidental>{}</accidental>\n", accidental));
    }

    xml.push_str("      </note>\n");
    xml
}

/// Stack voices upwards from the bass: each note goes in the lowest octave
/// that puts its letter above the previous note's letter.
fn voice_octaves(notes: &[SpelledNote]) -> Vec<i32> {
    let mut octaves = Vec::with_capacity(notes.len());
    let mut previous: Option<i32> = None;

    for note in notes {
        let letter = note.step.index() as i32;
        let octave = match previous {
            None => BASS_OCTAVE,
            Some(position) => {
                let octave = position.div_euclid(7);
                if octave * 7 + letter > position {
                    octave
                } else {
                    octave + 1
                }
            }
        };
        previous = Some(octave * 7 + letter);
        octaves.push(octave);
    }

    octaves
}

fn accidental_name(alter: i32) -> Option<&'static str> {
    match alter {
        1 => Some("sharp"),
        -1 => Some("flat"),
        2 => Some("double-sharp"),
        -2 => Some("flat-flat"),
        3 => Some("triple-sharp"),
        -3 => Some("triple-flat"),
        _ => None,
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spell_chord;

    #[test]
    fn test_basic_musicxml_output() {
        let chord = spell_chord(&["C", "E", "G"], 0).unwrap();
        let xml = to_musicxml(&chord);
        assert!(xml.contains("<score-partwise"));
        assert!(xml.contains("<step>C</step>"));
        assert!(xml.contains("<step>G</step>"));
        assert!(xml.contains("<fifths>0</fifths>"));
        assert_eq!(xml.matches("<chord/>").count(), 2);
        assert!(!xml.contains("<alter>"));
    }

    #[test]
    fn test_alter_and_accidental() {
        let chord = spell_chord(&["Ab", "C", "Eb"], -3).unwrap();
        let xml = to_musicxml(&chord);
        assert!(xml.contains("<fifths>-3</fifths>"));
        assert_eq!(xml.matches("<alter>-1</alter>").count(), 2);
        assert_eq!(xml.matches("<accidental>flat</accidental>").count(), 2);
    }

    #[test]
    fn test_voice_octaves_follow_letters() {
        // B# is written on B, so it stays in the bass octave above G#
        let chord = spell_chord(&["G#", "B#", "D#"], 0).unwrap();
        assert_eq!(chord.names(), vec!["G#", "B#", "D#"]);
        assert_eq!(voice_octaves(&chord.notes), vec![3, 3, 4]);

        let chord = spell_chord(&["C", "C", "C"], 0).unwrap();
        assert_eq!(voice_octaves(&chord.notes), vec![3, 4, 5]);
    }

    #[test]
    fn test_sheet_with_title_and_key_change() {
        let mut first = spell_chord(&["C", "E", "G"], 0).unwrap();
        first.label = Some("I & V".to_string());
        let second = spell_chord(&["Bb", "D", "F"], -2).unwrap();
        let third = spell_chord(&["Eb", "G", "Bb"], -2).unwrap();
        let xml = to_musicxml_sheet(Some("Cadence <1>"), &[first, second, third]);

        assert!(xml.contains("<work-title>Cadence &lt;1&gt;</work-title>"));
        assert!(xml.contains("<words>I &amp; V</words>"));
        assert!(xml.contains("<measure number=\"3\">"));
        assert_eq!(xml.matches("<key>").count(), 2);
        assert_eq!(xml.matches("<divisions>").count(), 1);
    }
}
