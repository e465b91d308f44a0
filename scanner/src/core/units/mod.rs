// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type safe units for positions and counts measured in grapheme cluster segments. See
//! [`SegIndex`] and [`SegLength`].

// Attach sources.
pub mod seg_index;

// Re-export.
pub use seg_index::*;
