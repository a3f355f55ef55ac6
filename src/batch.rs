//! # Chord Sheets
//!
//! Spell many chords at once from a YAML document.
//!
//! ## Format
//! ```yaml
//! title: Turnaround
//! key-signature: -3
//! chords:
//!   - [Ab, C, Eb]
//!   - notes: [G#, B#, D#, F#]
//!     key-signature: 4
//!     label: E7/G#
//! ```
//!
//! `key-signature` at the top level is the default for every chord (0 when
//! omitted). A chord is either a plain list of note names or a mapping with
//! `notes` and optional `key-signature` and `label`.
//!
//! ## Example
//! ```rust
//! use respell::{parse_sheet, spell_sheet};
//!
//! let sheet = parse_sheet("key-signature: -3\nchords:\n  - [G#, C, D#]\n")?;
//! let chords = spell_sheet(&sheet)?;
//! assert_eq!(chords[0].names(), vec!["Ab", "C", "Eb"]);
//! # Ok::<(), respell::SpellError>(())
//! ```

use crate::error::SpellError;
use crate::{spell_chord, SpelledChord};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawSheet {
    title: Option<String>,
    key_signature: Option<i32>,
    #[serde(default)]
    chords: Vec<RawChord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawChord {
    Notes(Vec<String>),
    Detailed {
        notes: Vec<String>,
        #[serde(rename = "key-signature")]
        key_signature: Option<i32>,
        label: Option<String>,
    },
}

/// One chord of a sheet, before spelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetChord {
    pub notes: Vec<String>,
    pub key_signature: i32,
    pub label: Option<String>,
}

/// A parsed chord sheet with per-chord key signatures resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordSheet {
    pub title: Option<String>,
    pub chords: Vec<SheetChord>,
}

/// Parse a YAML chord sheet.
pub fn parse_sheet(content: &str) -> Result<ChordSheet, SpellError> {
    let raw: RawSheet =
        serde_yaml::from_str(content).map_err(|e| SpellError::BatchError(e.to_string()))?;
    let default_key = raw.key_signature.unwrap_or(0);

    let chords = raw
        .chords
        .into_iter()
        .enumerate()
        .map(|(i, chord)| {
            let (notes, key_signature, label) = match chord {
                RawChord::Notes(notes) => (notes, None, None),
                RawChord::Detailed {
                    notes,
                    key_signature,
                    label,
                } => (notes, key_signature, label),
            };
            if notes.is_empty() {
                return Err(SpellError::BatchError(format!(
                    "chord {} has no notes",
                    i + 1
                )));
            }
            Ok(SheetChord {
                notes,
                key_signature: key_signature.unwrap_or(default_key),
                label,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("parsed chord sheet with {} chords", chords.len());
    Ok(ChordSheet {
        title: raw.title,
        chords,
    })
}

/// Spell every chord of a sheet. Stops at the first bad note name.
pub fn spell_sheet(sheet: &ChordSheet) -> Result<Vec<SpelledChord>, SpellError> {
    sheet
        .chords
        .iter()
        .map(|chord| {
            let mut spelled = spell_chord(&chord.notes, chord.key_signature)?;
            spelled.label = chord.label.clone();
            Ok(spelled)
        })
        .collect()
}
