//! # Tonal Pitch Classes
//!
//! Spellings are encoded as positions on the line of fifths ("tonal pitch
//! class", TPC). Consecutive integers are a perfect fifth apart and TPC 14 is
//! C natural, so F is 13, G is 15, F# is 20 and Bb is 12.
//!
//! A TPC determines both the sounding pitch class and the letter it is written
//! on. The reverse is ambiguous: each pitch class can be written on two or three
//! letters, and [`candidates`] lists the spellings this crate considers.
//!
//! ## Example
//! ```rust
//! use respell::tpc::{parse_note_name, Tpc};
//!
//! let (pitch_class, tpc) = parse_note_name("Eb")?;
//! assert_eq!(pitch_class, 3);
//! assert_eq!(tpc, Tpc(11));
//! assert_eq!(Tpc(23).name(), "D#");
//! # Ok::<(), respell::SpellError>(())
//! ```

use crate::error::SpellError;
use serde::Serialize;
use std::fmt;

/// TPC of C natural, the centre of the line of fifths.
pub const C_NATURAL: i64 = 14;

/// Every spelling from double flat to double sharp, grouped by pitch class.
///
/// Pitch class 8 has no double-sharp or double-flat spelling in range, so it
/// only lists two entries. No row is empty. Order matters: respelling breaks
/// distance ties by taking the first entry.
const PITCH_CLASS_TO_TPCS: [&[Tpc]; 12] = [
    &[Tpc(2), Tpc(14), Tpc(26)],
    &[Tpc(9), Tpc(21), Tpc(33)],
    &[Tpc(4), Tpc(16), Tpc(28)],
    &[Tpc(-1), Tpc(11), Tpc(23)],
    &[Tpc(6), Tpc(18), Tpc(30)],
    &[Tpc(1), Tpc(13), Tpc(25)],
    &[Tpc(8), Tpc(20), Tpc(32)],
    &[Tpc(3), Tpc(15), Tpc(27)],
    &[Tpc(10), Tpc(22)],
    &[Tpc(5), Tpc(17), Tpc(29)],
    &[Tpc(0), Tpc(12), Tpc(24)],
    &[Tpc(7), Tpc(19), Tpc(31)],
];

/// Note letter, in scale order starting from C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

/// Letters indexed by position (C = 0 ... B = 6).
pub const LETTERS: [Letter; 7] = [
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::A,
    Letter::B,
];

const NATURAL_PITCH_CLASSES: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

impl Letter {
    /// Position of the letter in C D E F G A B.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Pitch class of the unaltered letter.
    pub fn natural_pitch_class(self) -> i32 {
        NATURAL_PITCH_CLASSES[self.index()]
    }

    /// Case-insensitive letter lookup.
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A position on the line of fifths.
///
/// Wider than a key signature so that shifting a chord towards any `i32` key
/// cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Tpc(pub i64);

impl Tpc {
    /// Sounding pitch class, 0 (C) to 11 (B).
    pub fn pitch_class(self) -> i32 {
        // Reduce before multiplying
        ((self.0 - C_NATURAL).rem_euclid(12) * 7).rem_euclid(12) as i32
    }

    /// Index of the written letter, 0 (C) to 6 (B).
    pub fn letter_index(self) -> usize {
        ((self.0 - C_NATURAL).rem_euclid(7) * 4).rem_euclid(7) as usize
    }

    pub fn letter(self) -> Letter {
        LETTERS[self.letter_index()]
    }

    /// Signed accidental count: positive for sharps, negative for flats.
    ///
    /// Clamped into -6..=6 so far-out positions still render with a bounded
    /// number of accidentals.
    pub fn alter(self) -> i32 {
        let mut diff = self.pitch_class() - self.letter().natural_pitch_class();
        while diff > 6 {
            diff -= 12;
        }
        while diff < -6 {
            diff += 12;
        }
        diff
    }

    /// Letter plus accidentals, e.g. `"F#"` or `"Bbb"`.
    pub fn name(self) -> String {
        note_name_from_tpc(self)
    }

    /// Distance on the line of fifths.
    pub fn distance(self, other: Tpc) -> i64 {
        (self.0 - other.0).abs()
    }
}

impl fmt::Display for Tpc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// Candidate spellings for a pitch class, in table order. Never empty.
///
/// The pitch class is reduced modulo 12 first.
pub fn candidates(pitch_class: i32) -> &'static [Tpc] {
    PITCH_CLASS_TO_TPCS[pitch_class.rem_euclid(12) as usize]
}

/// Render a TPC as a note name.
pub fn note_name_from_tpc(tpc: Tpc) -> String {
    let alter = tpc.alter();
    let mut name = String::from(tpc.letter().as_str());
    let accidental = if alter > 0 { '#' } else { 'b' };
    for _ in 0..alter.unsigned_abs() {
        name.push(accidental);
    }
    name
}

/// Parse a note name like `"Ab"`, `"c#"` or `"Ebb"` into its pitch class and TPC.
///
/// Accidentals must be all `#` or all `b`; `"C#b"` is rejected.
pub fn parse_note_name(name: &str) -> Result<(i32, Tpc), SpellError> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();

    let first = chars.next().ok_or(SpellError::EmptyInput)?;
    let letter = Letter::from_char(first).ok_or_else(|| SpellError::InvalidLetter {
        name: trimmed.to_string(),
    })?;

    let accidentals = chars.as_str();
    let sharps = accidentals.chars().filter(|&c| c == '#').count() as i32;
    let flats = accidentals.chars().filter(|&c| c == 'b').count() as i32;
    let length = accidentals.chars().count() as i32;

    // Homogeneous accidentals only
    if sharps != length && flats != length {
        return Err(SpellError::UnsupportedAccidental {
            name: trimmed.to_string(),
        });
    }

    let pitch_class = (letter.natural_pitch_class() + sharps - flats).rem_euclid(12);

    candidates(pitch_class)
        .iter()
        .copied()
        .find(|tpc| tpc.letter() == letter)
        .map(|tpc| (pitch_class, tpc))
        .ok_or_else(|| SpellError::UnmappablePitchClass {
            name: trimmed.to_string(),
        })
}
