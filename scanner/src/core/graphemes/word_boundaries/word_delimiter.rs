// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use strum_macros::{AsRefStr, EnumCount, EnumIter, EnumString};

/// The closed set of single character tokens that separate words.
///
/// Each variant serializes to (and parses from) its literal, so membership is a string
/// parse:
///
/// ```
/// use std::str::FromStr;
/// use text_scanner::{WordDelimiter, is_delimiter};
///
/// assert_eq!(WordDelimiter::from_str(","), Ok(WordDelimiter::Comma));
/// assert_eq!(WordDelimiter::Space.as_ref(), " ");
/// assert!(is_delimiter("!"));
/// assert!(!is_delimiter("-"));
/// assert!(!is_delimiter(", "));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString, EnumIter, EnumCount)]
pub enum WordDelimiter {
    #[strum(serialize = " ")]
    Space,
    #[strum(serialize = ",")]
    Comma,
    #[strum(serialize = ".")]
    Period,
    #[strum(serialize = "{")]
    BraceIn,
    #[strum(serialize = "}")]
    BraceOut,
    #[strum(serialize = "[")]
    BracketIn,
    #[strum(serialize = "]")]
    BracketOut,
    #[strum(serialize = "?")]
    QuestionMark,
    #[strum(serialize = "!")]
    ExclamationMark,
}

/// Returns `true` if `grapheme` exactly matches one of the [`WordDelimiter`] literals.
/// Multi character strings never match.
#[must_use]
pub fn is_delimiter(grapheme: &str) -> bool { WordDelimiter::from_str(grapheme).is_ok() }
