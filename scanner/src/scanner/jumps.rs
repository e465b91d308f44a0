// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Jumps to string and word boundaries.
//!
//! The word jumps are all compositions of [`Scanner::advance_until`] /
//! [`Scanner::precede_until`] with a boundary predicate, so they are bounded by the
//! length of the text and fail with a typed error instead of looping.
//!
//! The previous / next word jumps always take one mandatory step out of the current
//! word before skipping delimiters. So from anywhere inside `Hello` in `"Hello, world!"`
//! the next word is `world`, never `Hello` again:
//!
//! ```text
//!                 jump_to_start_of_next_word()
//!        ╭──────────────────────────────────────────╮
//!        │   end of word   1 step   skip delimiters ▼
//! Index: 0 1 2 3 4 ──────▶ 5 ─────▶ 6 ─────────────▶ 7
//!        H e l l o         ,        ␣                w o r l d !
//! ```

use crate::{Scanner, ScannerError, ScannerResult, seg_index};

impl Scanner {
    pub fn jump_to_start_of_string(&mut self) { self.position = seg_index(0); }

    pub fn jump_to_end_of_string(&mut self) { self.position = self.last_index(); }

    /// Move backward until the cursor is at the start of a word. From inside a word
    /// this is the start of that word. From a delimiter it is the start of the closest
    /// word before it.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if there is no start of word at or before the
    /// cursor (eg the cursor is on leading delimiters).
    pub fn jump_to_start_of_word(&mut self) -> ScannerResult<()> {
        let from = self.position;
        self.precede_until(Self::at_start_of_word)?;
        tracing::trace!(%from, to = %self.position, "jump_to_start_of_word");
        Ok(())
    }

    /// Move forward until the cursor is at the end of a word. From inside a word this
    /// is the end of that word. From a delimiter it is the end of the closest word after
    /// it.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if there is no end of word at or after the cursor
    /// (eg the cursor is on trailing delimiters).
    pub fn jump_to_end_of_word(&mut self) -> ScannerResult<()> {
        let from = self.position;
        self.advance_until(Self::at_end_of_word)?;
        tracing::trace!(%from, to = %self.position, "jump_to_end_of_word");
        Ok(())
    }

    /// Move to the first grapheme of the word before the current one. From a delimiter,
    /// that is the closest word before the delimiter.
    ///
    /// # Errors
    ///
    /// [`ScannerError::WordDoesNotExist`] if the cursor is in the first word of the
    /// text, or only delimiters precede it. The cursor may have moved by then.
    pub fn jump_to_start_of_previous_word(&mut self) -> ScannerResult<()> {
        let from = self.position;

        if !self.at_delimiter() {
            self.jump_to_start_of_word()?;
            if self.at_start_of_string() {
                return Err(ScannerError::WordDoesNotExist);
            }
            // Step onto the delimiter in front of this word.
            self.precede()?;
        }

        self.precede_until(|it| !it.at_delimiter())
            .map_err(|_| ScannerError::WordDoesNotExist)?;
        self.jump_to_start_of_word()?;

        tracing::trace!(%from, to = %self.position, "jump_to_start_of_previous_word");
        Ok(())
    }

    /// Move to the first grapheme of the word after the current one. From a delimiter,
    /// that is the closest word after the delimiter.
    ///
    /// # Errors
    ///
    /// [`ScannerError::WordDoesNotExist`] if the cursor is in the last word of the text,
    /// or only delimiters follow it. The cursor may have moved by then.
    pub fn jump_to_start_of_next_word(&mut self) -> ScannerResult<()> {
        let from = self.position;

        if !self.at_delimiter() {
            self.jump_to_end_of_word()?;
            if self.at_end_of_string() {
                return Err(ScannerError::WordDoesNotExist);
            }
            // Step onto the delimiter after this word.
            self.advance()?;
        }

        self.advance_until(|it| !it.at_delimiter())
            .map_err(|_| ScannerError::WordDoesNotExist)?;

        tracing::trace!(%from, to = %self.position, "jump_to_start_of_next_word");
        Ok(())
    }
}
