// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use crate::SegIndex;

/// `Seg` represents a grapheme cluster segment within a [`super::GCText`].
///
/// A Unicode "grapheme" is a user-perceived character. The `🙏🏽` emoji is an amalgamation
/// of two code points (`'🙏' + '🏽'`); [`str::chars()`] would give you two [char]s, while
/// [`unicode_segmentation::UnicodeSegmentation`] gives you a single grapheme cluster,
/// which is what a cursor should step over.
///
/// This struct does not allocate anything and is [Copy]. The [`super::GCText`] owns the
/// memory, and this struct is a "view" into one grapheme cluster of it.
///
/// ## Fields
///
/// - `start_byte_index` & `end_byte_index`: the byte range of the cluster in the string.
/// - `seg_index`: the position of this segment in the logical sequence.
/// - `display_width`: the number of terminal columns this cluster occupies.
/// - `start_display_col_index`: the terminal column where this cluster begins.
///
/// ## Example
///
/// ```
/// use text_scanner::{GCText, seg_index};
///
/// let text = GCText::new("📦😀");
/// let segment = text.segments()[1];
/// assert_eq!(segment.start_byte_index, 4);
/// assert_eq!(segment.end_byte_index, 8);
/// assert_eq!(segment.display_width, 2);
/// assert_eq!(segment.seg_index, seg_index(1));
/// assert_eq!(segment.start_display_col_index, 2);
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Seg {
    /// The start index (bytes), in the string slice, of this grapheme cluster.
    pub start_byte_index: usize,

    /// The end index (bytes, exclusive), in the string slice, of this grapheme cluster.
    pub end_byte_index: usize,

    /// Display width of the grapheme cluster calculated using
    /// [`unicode_width::UnicodeWidthStr`].
    pub display_width: usize,

    /// The index of this entry in the segment array.
    pub seg_index: SegIndex,

    /// The terminal column at which this grapheme cluster starts.
    pub start_display_col_index: usize,
}

impl Seg {
    /// Get the string slice for the grapheme cluster segment. The `string` must be the
    /// one this segment was built from.
    #[must_use]
    pub fn get_str<'a>(&self, string: &'a str) -> &'a str {
        &string[self.start_byte_index..self.end_byte_index]
    }
}

impl Debug for Seg {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "Seg[{}, bytes: {}..{}, col: {}, width: {}]",
            self.seg_index,
            self.start_byte_index,
            self.end_byte_index,
            self.start_display_col_index,
            self.display_width
        )
    }
}
