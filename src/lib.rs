pub mod batch;
pub mod chord;
pub mod error;
pub mod key_signature;
pub mod musicxml;
pub mod respell;
pub mod tpc;

pub use batch::{parse_sheet, spell_sheet, ChordSheet};
pub use chord::{parse_chord, Note};
pub use error::*;
pub use key_signature::apply_key_signature_adjustment;
pub use musicxml::{to_musicxml, to_musicxml_sheet};
pub use respell::respell_relative_to_bass;
pub use tpc::{note_name_from_tpc, parse_note_name, Letter, Tpc};

use serde::Serialize;

/// A note after spelling, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SpelledNote {
    /// Name as it was given
    pub input: String,
    pub name: String,
    pub tpc: Tpc,
    pub step: Letter,
    /// Signed accidental count (sharps positive)
    pub alter: i32,
}

impl SpelledNote {
    fn from_note(note: &Note) -> Self {
        Self {
            input: note.name.clone(),
            name: note.tpc.name(),
            tpc: note.tpc,
            step: note.tpc.letter(),
            alter: note.tpc.alter(),
        }
    }
}

/// A spelled chord, lowest voice first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SpelledChord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub key_signature: i32,
    pub notes: Vec<SpelledNote>,
}

impl SpelledChord {
    pub fn names(&self) -> Vec<String> {
        self.notes.iter().map(|n| n.name.clone()).collect()
    }
}

/// Spell a chord given lowest to highest in the given key signature
/// (sharps positive, flats negative).
///
/// # Pipeline
/// 1. Parse note names
/// 2. Respell upper voices relative to the bass
/// 3. Shift the chord by octaves of fifths towards the key
/// 4. Order by voice
///
/// # Example
/// ```rust
/// use respell::spell_chord;
///
/// let chord = spell_chord(&["G#", "C", "D#"], -3)?;
/// assert_eq!(chord.names(), vec!["Ab", "C", "Eb"]);
/// assert_eq!(chord.notes[0].alter, -1);
/// # Ok::<(), respell::SpellError>(())
/// ```
pub fn spell_chord<S: AsRef<str>>(
    note_names: &[S],
    key_signature: i32,
) -> Result<SpelledChord, SpellError> {
    let notes = parse_chord(note_names)?;
    let notes = respell_relative_to_bass(&notes);
    let mut notes = apply_key_signature_adjustment(&notes, key_signature);
    notes.sort_by_key(|n| n.pitch);

    Ok(SpelledChord {
        label: None,
        key_signature,
        notes: notes.iter().map(SpelledNote::from_note).collect(),
    })
}

/// Spell a chord and return just the note names.
///
/// ```rust
/// use respell::process_chord;
///
/// assert_eq!(process_chord(&["Ab", "C", "Eb"], -3)?, vec!["Ab", "C", "Eb"]);
/// assert_eq!(process_chord(&["C", "D#", "G"], 0)?, vec!["C", "Eb", "G"]);
/// # Ok::<(), respell::SpellError>(())
/// ```
pub fn process_chord<S: AsRef<str>>(
    note_names: &[S],
    key_signature: i32,
) -> Result<Vec<String>, SpellError> {
    Ok(spell_chord(note_names, key_signature)?.names())
}

/// Bracketed, comma-separated names, e.g. `[Ab, C, Eb]`.
pub fn format_names(names: &[String]) -> String {
    format!("[{}]", names.join(", "))
}
