//! # Error Types
//!
//! This module defines all error types for the pitch speller.
//!
//! Spelling a chord can only fail while note names are being parsed; every later
//! stage is total. Errors carry the offending note name so the caller can point
//! at the bad input.
//!
//! ## Error Types
//! - `EmptyInput` - A note name that is empty after trimming
//! - `InvalidLetter` - First character is not one of C D E F G A B
//! - `UnsupportedAccidental` - Accidentals are not all `#` or all `b`
//! - `UnmappablePitchClass` - No table spelling matches the parsed letter
//! - `BatchError` - Malformed YAML chord sheet
//!
//! ## Usage
//! ```rust
//! use respell::{process_chord, SpellError};
//!
//! match process_chord(&["C", "H"], 0) {
//!     Ok(names) => println!("{:?}", names),
//!     Err(SpellError::InvalidLetter { name }) => eprintln!("bad letter in {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpellError {
    /// Note name is empty or only whitespace.
    ///
    /// # Example
    /// ```
    /// # use respell::SpellError;
    /// assert_eq!(SpellError::EmptyInput.to_string(), "Empty note name");
    /// ```
    #[error("Empty note name")]
    EmptyInput,

    /// Note name does not start with a letter from A to G.
    ///
    /// # Example
    /// ```
    /// # use respell::SpellError;
    /// let err = SpellError::InvalidLetter { name: "H".to_string() };
    /// assert_eq!(err.to_string(), "Invalid note letter: H");
    /// ```
    #[error("Invalid note letter: {name}")]
    InvalidLetter { name: String },

    /// Accidentals are mixed or contain something other than `#` and `b`.
    ///
    /// # Example
    /// ```
    /// # use respell::SpellError;
    /// let err = SpellError::UnsupportedAccidental { name: "C#b".to_string() };
    /// assert_eq!(err.to_string(), "Unsupported accidental format: C#b");
    /// ```
    #[error("Unsupported accidental format: {name}")]
    UnsupportedAccidental { name: String },

    /// The pitch class has no candidate spelling on the parsed letter
    /// (e.g. triple flats).
    #[error("Could not map note name to TPC: {name}")]
    UnmappablePitchClass { name: String },

    /// Invalid YAML chord sheet.
    #[error("Invalid chord sheet: {0}")]
    BatchError(String),
}
