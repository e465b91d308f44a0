// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::RangeInclusive,
          sync::Arc};

use crate::{GCText, ScannerError, ScannerResult, SegIndex, SegLength, seg_index};

/// A read position ("cursor") over an immutable text.
///
/// - `text` is an [`Arc<GCText>`]. It is never mutated, and every [`Scanner::fork`]
///   shares it. Forking costs one atomic increment plus copying the position.
/// - `position` is a [`SegIndex`] (grapheme cluster index) that always satisfies
///   `0 <= position <= last_index`. Operations that would break this fail with
///   [`ScannerError::PastBounds`] instead.
///
/// Since an empty text has no valid position at all, it can't be scanned: the
/// constructors reject it.
///
/// ```text
///             position = 5
///                  ↓
/// Index:    0 1 2 3 4 5 6 7 8 9 10 11 12
///         ┌─┬─┬─┬─┬─┬─┬─┬─┬─┬─┬──┬──┬──┐
/// Content:│H│e│l│l│o│,│ │w│o│r│l │d │! │
///         └─┴─┴─┴─┴─┴─┴─┴─┴─┴─┴──┴──┴──┘
///          ↑                          ↑
///   start of string            end of string (last_index)
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    pub(crate) text: Arc<GCText>,
    pub(crate) position: SegIndex,
}

impl Scanner {
    /// Create a scanner at the start of `text`.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if `text` is empty.
    pub fn new(text: impl Into<GCText>) -> ScannerResult<Self> {
        Self::new_at(text, seg_index(0))
    }

    /// Create a scanner at `position` (a grapheme cluster index) in `text`.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if `text` is empty or `position` is past its last
    /// grapheme cluster.
    pub fn new_at(
        text: impl Into<GCText>,
        position: impl Into<SegIndex>,
    ) -> ScannerResult<Self> {
        Self::from_shared(Arc::new(text.into()), position)
    }

    /// Create a scanner over text that is already shared, eg by other scanners or by the
    /// caller's own document model.
    ///
    /// # Errors
    ///
    /// [`ScannerError::PastBounds`] if `text` is empty or `position` is past its last
    /// grapheme cluster.
    pub fn from_shared(
        text: Arc<GCText>,
        position: impl Into<SegIndex>,
    ) -> ScannerResult<Self> {
        let position = position.into();
        match text.last_index() {
            Some(last_index) if position <= last_index => Ok(Self { text, position }),
            _ => Err(ScannerError::PastBounds),
        }
    }

    /// An independent copy that shares the text and copies only the position. Moving the
    /// fork leaves `self` untouched.
    #[must_use]
    pub fn fork(&self) -> Self { self.clone() }

    /// A fork at some other position. The caller must have checked that `position` is in
    /// bounds.
    pub(crate) fn fork_at(&self, position: SegIndex) -> Self {
        debug_assert!(position <= self.last_index());
        Self {
            text: Arc::clone(&self.text),
            position,
        }
    }

    #[must_use]
    pub fn position(&self) -> SegIndex { self.position }

    #[must_use]
    pub fn text(&self) -> &Arc<GCText> { &self.text }

    #[must_use]
    pub fn as_str(&self) -> &str { self.text.as_str() }

    /// Number of grapheme clusters in the text. Never zero.
    #[must_use]
    pub fn text_len(&self) -> SegLength { self.text.len() }

    /// Index of the last grapheme cluster in the text.
    #[must_use]
    pub fn last_index(&self) -> SegIndex {
        // The constructors reject empty text, so there always is a last index.
        seg_index(self.text.segments().len().saturating_sub(1))
    }

    /// Slice of the text covering `range`. The range comes from this scanner's own
    /// positions, which are always in bounds.
    pub(crate) fn slice(&self, range: RangeInclusive<SegIndex>) -> &str {
        self.text.get_str_in_range(range).unwrap_or_default()
    }
}

/// Renders the text with the grapheme under the cursor wrapped in `⟨` `⟩`.
///
/// ```
/// use text_scanner::Scanner;
///
/// let scanner = Scanner::new_at("Hello, world!", 5)?;
/// assert_eq!(scanner.to_string(), "Hello⟨,⟩ world!");
/// # Ok::<(), text_scanner::ScannerError>(())
/// ```
impl Display for Scanner {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let string = self.as_str();
        match self.text.get_seg(self.position) {
            Some(seg) => write!(
                f,
                "{}⟨{}⟩{}",
                &string[..seg.start_byte_index],
                seg.get_str(string),
                &string[seg.end_byte_index..]
            ),
            None => write!(f, "{string}"),
        }
    }
}
