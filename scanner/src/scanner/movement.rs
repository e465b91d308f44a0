// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Single step movement, and the predicate bounded search loops that every word jump is
//! built on.

use crate::{Scanner, ScannerError, ScannerResult, ok, seg_index};

impl Scanner {
    /// Move forward by one grapheme cluster.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if the cursor is at the end of the string.
    pub fn advance(&mut self) -> ScannerResult<()> { self.advance_by(1) }

    /// Move forward by `count` grapheme clusters, one bounds checked step at a time.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] at the first step that would go past the end of the
    /// string. The steps taken before that one stay applied.
    pub fn advance_by(&mut self, count: usize) -> ScannerResult<()> {
        for _ in 0..count {
            if self.at_end_of_string() {
                return Err(ScannerError::PastBounds);
            }
            self.position = seg_index(self.position.as_usize() + 1);
        }
        ok!()
    }

    /// Move backward by one grapheme cluster.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if the cursor is at the start of the string.
    pub fn precede(&mut self) -> ScannerResult<()> { self.precede_by(1) }

    /// Move backward by `count` grapheme clusters, one bounds checked step at a time.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] at the first step that would go before the start of
    /// the string. The steps taken before that one stay applied.
    pub fn precede_by(&mut self, count: usize) -> ScannerResult<()> {
        for _ in 0..count {
            if self.at_start_of_string() {
                return Err(ScannerError::PastBounds);
            }
            self.position = seg_index(self.position.as_usize() - 1);
        }
        ok!()
    }

    /// Step forward while `stopper` returns `false`. The predicate sees the scanner
    /// before each step, so if it is already satisfied nothing moves.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if the end of the string is reached first. The
    /// cursor is left on the last grapheme cluster in that case.
    pub fn advance_until(
        &mut self,
        mut stopper: impl FnMut(&Self) -> bool,
    ) -> ScannerResult<()> {
        while !stopper(self) {
            self.advance()?;
        }
        ok!()
    }

    /// Step backward while `stopper` returns `false`. Mirror of
    /// [`Scanner::advance_until`].
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if the start of the string is reached first.
    pub fn precede_until(
        &mut self,
        mut stopper: impl FnMut(&Self) -> bool,
    ) -> ScannerResult<()> {
        while !stopper(self) {
            self.precede()?;
        }
        ok!()
    }
}
