//! Key-signature correction
//!
//! Respelling relative to the bass can leave a whole chord a dozen fifths away
//! from the key (G# B# D# in E-flat major). Spellings that differ by 12 on the
//! line of fifths sound the same, so the chord is shifted by whole multiples
//! of 12 until its centre is within 12 fifths of the key.

use crate::chord::Note;
use crate::tpc::{Tpc, C_NATURAL};

/// TPC at the centre of a key: C for no accidentals, one fifth per sharp,
/// minus one per flat.
pub fn key_center(key_signature: i32) -> Tpc {
    Tpc(C_NATURAL + i64::from(key_signature))
}

/// Shift, in fifths, needed to bring `notes` back towards the key.
///
/// The chord's centre is the midpoint of its lowest and highest TPC, not the
/// mean. Halfway cases round to the even multiple of 12.
pub fn key_signature_adjustment(notes: &[Note], key_signature: i32) -> i64 {
    let (Some(min_tpc), Some(max_tpc)) = (
        notes.iter().map(|n| n.tpc.0).min(),
        notes.iter().map(|n| n.tpc.0).max(),
    ) else {
        return 0;
    };

    let average_tpc = (min_tpc + max_tpc) as f64 / 2.0;
    let difference = key_center(key_signature).0 as f64 - average_tpc;
    if difference.abs() < 12.0 {
        return 0;
    }

    (difference / 12.0).round_ties_even() as i64 * 12
}

/// Apply [`key_signature_adjustment`] to every note.
pub fn apply_key_signature_adjustment(notes: &[Note], key_signature: i32) -> Vec<Note> {
    let adjustment = key_signature_adjustment(notes, key_signature);
    if adjustment == 0 {
        return notes.to_vec();
    }

    log::debug!(
        "shifting chord by {} fifths for key signature {}",
        adjustment,
        key_signature
    );
    notes
        .iter()
        .map(|note| note.with_tpc(Tpc(note.tpc.0 + adjustment)))
        .collect()
}
