// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Boundary predicates. A word is a maximal run of non-delimiters, so a word boundary
//! is decided by looking at the grapheme under the cursor and its immediate neighbors.
//!
//! ```text
//!              start   end   start+end  start  end
//!                ↓      ↓        ↓        ↓     ↓
//! Content:   ␣ ␣ w o r d ,  ␣    a    ␣   w o r d
//! ```
//!
//! A one character word (the `a` above) is both the start and the end of a word.

use crate::{Scanner, is_delimiter};

impl Scanner {
    /// `true` if the grapheme under the cursor is one of the
    /// [`crate::WordDelimiter`]s.
    #[must_use]
    pub fn at_delimiter(&self) -> bool { is_delimiter(self.current_character()) }

    #[must_use]
    pub fn at_start_of_string(&self) -> bool { self.position.as_usize() == 0 }

    /// `true` if the cursor is on the last grapheme cluster. The cursor never rests one
    /// past the end.
    #[must_use]
    pub fn at_end_of_string(&self) -> bool { self.position == self.last_index() }

    /// `true` if the cursor is on a non-delimiter that is either the first grapheme of
    /// the string or preceded by a delimiter.
    #[must_use]
    pub fn at_start_of_word(&self) -> bool {
        !self.at_delimiter() && self.previous_character().is_none_or(is_delimiter)
    }

    /// `true` if the cursor is on a non-delimiter that is either the last grapheme of
    /// the string or followed by a delimiter.
    #[must_use]
    pub fn at_end_of_word(&self) -> bool {
        !self.at_delimiter() && self.next_character().is_none_or(is_delimiter)
    }
}
