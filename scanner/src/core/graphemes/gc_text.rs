// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`GCText`] is the immutable, grapheme segmented text that a [`crate::Scanner`] walks
//! over.

use std::{fmt::{Debug, Display, Formatter, Result as FmtResult},
          ops::RangeInclusive};

use crate::{Seg, SegIndex, SegLength, SegmentArray, build_segments_for_str,
            calculate_display_width, seg_length};

/// Immutable text with pre-computed grapheme cluster segment metadata.
///
/// It is built once and then shared (via [`std::sync::Arc`]) by every scanner that is
/// forked from the first one. [`GCText::new`] is the only way to build one and the fields
/// are private, so the segment array always describes the string exactly.
///
/// ```compile_fail
/// use text_scanner::GCText;
///
/// let mut text = GCText::new("😀a");
/// text.string = "ab".into();
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct GCText {
    string: Box<str>,
    segments: SegmentArray,
    display_width: usize,
}

impl GCText {
    /// Create a new `GCText` from a string, computing grapheme cluster segments.
    pub fn new(input: impl AsRef<str>) -> Self {
        let string: Box<str> = input.as_ref().into();
        let segments = build_segments_for_str(&string);
        let display_width = calculate_display_width(&segments);
        Self {
            string,
            segments,
            display_width,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.string }

    /// Pre-computed grapheme cluster segments, one per position.
    #[must_use]
    pub fn segments(&self) -> &[Seg] { &self.segments }

    /// Number of terminal columns the whole text occupies.
    #[must_use]
    pub fn display_width(&self) -> usize { self.display_width }

    /// Number of grapheme clusters (not bytes, not chars).
    #[must_use]
    pub fn len(&self) -> SegLength { seg_length(self.segments.len()) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.segments.is_empty() }

    /// Index of the last grapheme cluster, or [`None`] if the text is empty.
    #[must_use]
    pub fn last_index(&self) -> Option<SegIndex> { self.len().convert_to_seg_index() }

    #[must_use]
    pub fn get_seg(&self, index: SegIndex) -> Option<Seg> {
        self.segments.get(index.as_usize()).copied()
    }

    /// The grapheme cluster at `index`, as a slice of the underlying string.
    #[must_use]
    pub fn get_str(&self, index: SegIndex) -> Option<&str> {
        self.get_seg(index).map(|seg| seg.get_str(&self.string))
    }

    /// The grapheme clusters in `range` (both ends inclusive) as one contiguous slice of
    /// the underlying string. Returns [`None`] if either end is out of bounds or the
    /// range is inverted.
    #[must_use]
    pub fn get_str_in_range(&self, range: RangeInclusive<SegIndex>) -> Option<&str> {
        let (start, end) = range.into_inner();
        if start > end {
            return None;
        }
        let start_seg = self.get_seg(start)?;
        let end_seg = self.get_seg(end)?;
        Some(&self.string[start_seg.start_byte_index..end_seg.end_byte_index])
    }
}

impl Debug for GCText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "GCText({:?}, len: {})", self.as_str(), self.len())
    }
}

impl Display for GCText {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.as_str()) }
}

impl AsRef<str> for GCText {
    fn as_ref(&self) -> &str { self.as_str() }
}

impl From<&str> for GCText {
    fn from(value: &str) -> Self { Self::new(value) }
}

impl From<String> for GCText {
    fn from(value: String) -> Self { Self::new(value) }
}

impl From<&String> for GCText {
    fn from(value: &String) -> Self { Self::new(value) }
}

impl<'a> IntoIterator for &'a GCText {
    type Item = Seg;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Seg>>;

    fn into_iter(self) -> Self::IntoIter { self.segments.iter().copied() }
}
