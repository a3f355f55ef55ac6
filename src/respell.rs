//! Bass-relative respelling
//!
//! Each upper voice takes the spelling of its pitch class that lies closest to
//! the bass on the line of fifths. Short distances read as simple intervals, so
//! over a C bass a pitch class 3 comes out as Eb (minor third) rather than D#
//! (augmented second).

use crate::chord::{bass, Note};
use crate::tpc::{candidates, Tpc};

/// Spelling of `pitch_class` closest to `bass`. Ties go to the earlier table entry.
pub fn closest_spelling(pitch_class: i32, bass: Tpc) -> Tpc {
    let spellings = candidates(pitch_class);
    // Table rows are never empty
    let mut closest = spellings[0];
    for &tpc in &spellings[1..] {
        if tpc.distance(bass) < closest.distance(bass) {
            closest = tpc;
        }
    }
    closest
}

/// Respell every note except the bass relative to the bass.
///
/// Returns new notes in the same order; chords with fewer than two notes come
/// back unchanged.
pub fn respell_relative_to_bass(notes: &[Note]) -> Vec<Note> {
    if notes.len() < 2 {
        return notes.to_vec();
    }
    let Some(bass_note) = bass(notes) else {
        return notes.to_vec();
    };
    log::debug!("bass: {} ({})", bass_note.tpc, bass_note.tpc.0);

    notes
        .iter()
        .map(|note| {
            if std::ptr::eq(note, bass_note) {
                return note.clone();
            }
            let tpc = closest_spelling(note.tpc.pitch_class(), bass_note.tpc);
            if tpc != note.tpc {
                log::trace!("respelled {} as {}", note.tpc, tpc);
            }
            note.with_tpc(tpc)
        })
        .collect()
}
