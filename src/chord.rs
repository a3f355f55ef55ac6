//! Chord parsing
//!
//! Turns note names given lowest to highest into [`Note`] records.

use crate::error::SpellError;
use crate::tpc::{parse_note_name, Tpc};

/// One chord tone.
///
/// `pitch` is `voice_index * 12 + pitch_class`. It only orders the voices and
/// picks out the bass; it carries no real octave information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub name: String,
    pub pitch: i32,
    pub tpc: Tpc,
}

impl Note {
    /// Same note with a different spelling.
    pub fn with_tpc(&self, tpc: Tpc) -> Note {
        Note {
            name: self.name.clone(),
            pitch: self.pitch,
            tpc,
        }
    }
}

/// Parse note names in voicing order. Fails on the first bad name.
pub fn parse_chord<S: AsRef<str>>(note_names: &[S]) -> Result<Vec<Note>, SpellError> {
    let notes = note_names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let name = name.as_ref();
            let (pitch_class, tpc) = parse_note_name(name)?;
            Ok(Note {
                name: name.to_string(),
                pitch: idx as i32 * 12 + pitch_class,
                tpc,
            })
        })
        .collect::<Result<Vec<_>, SpellError>>()?;

    log::debug!(
        "parsed chord: {:?}",
        notes.iter().map(|n| (n.pitch, n.tpc.0)).collect::<Vec<_>>()
    );
    Ok(notes)
}

/// The note with the lowest `pitch`; the first one wins ties.
pub fn bass(notes: &[Note]) -> Option<&Note> {
    notes.iter().min_by_key(|n| n.pitch)
}
