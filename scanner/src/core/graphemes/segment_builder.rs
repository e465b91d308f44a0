// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Segment building utilities for grapheme clusters.
//!
//! See the [module docs](crate::graphemes) for information about Unicode handling and
//! the index types used in this crate.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::{Seg, seg_index};

/// Inline capacity of [`SegmentArray`]. Short strings (a word, a label, a line of a
/// form) never touch the heap for their segment metadata.
pub const DEFAULT_SEGMENT_ARRAY_SIZE: usize = 28;

/// Segment metadata for a [`crate::GCText`].
pub type SegmentArray = SmallVec<[Seg; DEFAULT_SEGMENT_ARRAY_SIZE]>;

/// Build grapheme cluster segments for any string slice.
///
/// This function analyzes a UTF-8 string and creates a segment for each grapheme
/// cluster (user-perceived character). It includes an ASCII fast path for better
/// performance when dealing with ASCII-only text. `"\r\n"` is a single grapheme cluster
/// made of two ASCII bytes, so text containing `'\r'` takes the Unicode path.
///
/// # Returns
///
/// A [`SegmentArray`] containing one [`Seg`] for each grapheme cluster in the input.
#[must_use]
pub fn build_segments_for_str(input: &str) -> SegmentArray {
    // ASCII fast path. Every byte is its own cluster, except for "\r\n".
    if input.is_ascii() && !input.contains('\r') {
        return build_ascii_segments(input);
    }

    let mut segments = SegmentArray::new();
    let mut display_col = 0;

    for (seg_idx, (byte_offset, grapheme)) in input.grapheme_indices(true).enumerate() {
        let display_width = UnicodeWidthStr::width(grapheme);

        segments.push(Seg {
            start_byte_index: byte_offset,
            end_byte_index: byte_offset + grapheme.len(),
            display_width,
            seg_index: seg_index(seg_idx),
            start_display_col_index: display_col,
        });

        display_col += display_width;
    }

    segments
}

/// Build segments for ASCII-only strings (optimized path).
///
/// ASCII characters are always 1 byte and are treated as 1 display column wide, so no
/// Unicode analysis is needed. The input must not contain `'\r'`.
fn build_ascii_segments(input: &str) -> SegmentArray {
    let mut segments = SegmentArray::with_capacity(input.len());

    for i in 0..input.len() {
        segments.push(Seg {
            start_byte_index: i,
            end_byte_index: i + 1,
            display_width: 1,
            seg_index: seg_index(i),
            start_display_col_index: i,
        });
    }

    segments
}

/// Calculate total display width from segments.
#[must_use]
pub fn calculate_display_width(segments: &[Seg]) -> usize {
    segments.last().map_or(
        /* None */ 0,
        /* Some */ |seg| seg.start_display_col_index + seg.display_width,
    )
}
