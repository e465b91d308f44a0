// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read only queries. Anything that needs to look around runs on a
//! [`Scanner::fork`], and every `&str` that comes back is a slice of the shared text.
//!
//! The word queries ([`Scanner::current_word`], [`Scanner::next_word`],
//! [`Scanner::previous_word`]) all propagate errors from the jumps they make, rather
//! than turning "no such word" into an empty string.

use std::ops::RangeInclusive;

use crate::{Scanner, ScannerError, ScannerResult, SegIndex, SegLength, seg_index,
            seg_length};

impl Scanner {
    /// The grapheme cluster under the cursor.
    #[must_use]
    pub fn current_character(&self) -> &str {
        self.text.get_str(self.position).unwrap_or_default()
    }

    /// The grapheme cluster before the cursor, or [`None`] at the start of the string.
    #[must_use]
    pub fn previous_character(&self) -> Option<&str> {
        let index = self.position.as_usize().checked_sub(1)?;
        self.text.get_str(seg_index(index))
    }

    /// The grapheme cluster after the cursor, or [`None`] at the end of the string.
    #[must_use]
    pub fn next_character(&self) -> Option<&str> {
        self.text.get_str(seg_index(self.position.as_usize() + 1))
    }

    /// The positions of the first and last grapheme of the word under the cursor. A
    /// delimiter is a word of its own, so its range is just its own position.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Scanner::jump_to_start_of_word`] and
    /// [`Scanner::jump_to_end_of_word`]. From a non-delimiter both jumps always
    /// succeed.
    pub fn current_word_range(&self) -> ScannerResult<RangeInclusive<SegIndex>> {
        if self.at_delimiter() {
            return Ok(self.position..=self.position);
        }

        let mut start = self.fork();
        start.jump_to_start_of_word()?;

        let mut end = self.fork();
        end.jump_to_end_of_word()?;

        Ok(start.position..=end.position)
    }

    /// The word under the cursor.
    ///
    /// ```
    /// use text_scanner::Scanner;
    ///
    /// let scanner = Scanner::new_at("Hello, world!", 9)?;
    /// assert_eq!(scanner.current_word()?, "world");
    ///
    /// let scanner = Scanner::new_at("Hello, world!", 5)?;
    /// assert_eq!(scanner.current_word()?, ",");
    /// # Ok::<(), text_scanner::ScannerError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Scanner::current_word_range`].
    pub fn current_word(&self) -> ScannerResult<&str> {
        let range = self.current_word_range()?;
        Ok(self.slice(range))
    }

    /// The word that [`Scanner::jump_to_start_of_next_word`] would land on.
    ///
    /// # Errors
    ///
    /// [`ScannerError::WordDoesNotExist`] if there is no word after the current one.
    pub fn next_word(&self) -> ScannerResult<&str> {
        let mut scanner = self.fork();
        scanner.jump_to_start_of_next_word()?;
        let range = scanner.current_word_range()?;
        Ok(self.slice(range))
    }

    /// The word that [`Scanner::jump_to_start_of_previous_word`] would land on.
    ///
    /// # Errors
    ///
    /// [`ScannerError::WordDoesNotExist`] if there is no word before the current one.
    pub fn previous_word(&self) -> ScannerResult<&str> {
        let mut scanner = self.fork();
        scanner.jump_to_start_of_previous_word()?;
        let range = scanner.current_word_range()?;
        Ok(self.slice(range))
    }

    /// The `from + to` grapheme clusters that follow the anchor at `position - from`,
    /// excluding the anchor itself.
    ///
    /// ```text
    /// relative_range(from: 2, to: 3) with the cursor at 5
    ///
    ///              anchor  cursor
    ///                 ↓      ↓
    /// Index:    0 1 2 3 4    5 6 7 8 9
    /// Content:  H e l l o    , ␣ w o r
    ///                   ╰────────────╯
    ///                   "o, wo" (5 graphemes)
    /// ```
    ///
    /// This is strict, unlike [`Scanner::next_x_characters`].
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if `from` is greater than the cursor position, or
    /// the span runs past the end of the text.
    pub fn relative_range(&self, from: usize, to: usize) -> ScannerResult<&str> {
        let anchor = self
            .position
            .as_usize()
            .checked_sub(from)
            .ok_or(ScannerError::PastBounds)?;
        let count = from.checked_add(to).ok_or(ScannerError::PastBounds)?;

        let anchor_scanner = self.fork_at(seg_index(anchor));
        if count > anchor_scanner.characters_left().as_usize() {
            return Err(ScannerError::PastBounds);
        }

        if count == 0 {
            return Ok("");
        }

        Ok(self.slice(seg_index(anchor + 1)..=seg_index(anchor + count)))
    }

    /// Up to `count` grapheme clusters after the cursor. Stops quietly at the end of the
    /// text, so the result may be shorter than asked for (or empty).
    #[must_use]
    pub fn next_x_characters(&self, count: usize) -> &str {
        let available = count.min(self.characters_left().as_usize());
        if available == 0 {
            return "";
        }
        let start = self.position.as_usize() + 1;
        self.slice(seg_index(start)..=seg_index(start + available - 1))
    }

    /// Count of grapheme clusters strictly after the cursor.
    #[must_use]
    pub fn characters_left(&self) -> SegLength {
        seg_length(self.last_index().as_usize() - self.position.as_usize())
    }

    /// The terminal column where the grapheme under the cursor starts. Wide graphemes
    /// (eg most emoji) take up 2 columns, so this can be larger than the position.
    #[must_use]
    pub fn current_display_col(&self) -> usize {
        self.text
            .get_seg(self.position)
            .map_or(0, |seg| seg.start_display_col_index)
    }
}
