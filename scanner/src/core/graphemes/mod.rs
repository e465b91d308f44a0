// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rust uses `UTF-8` to represent text in [String]. `UTF-8` is a variable width encoding,
//! so each character can take up between 1 and 4 bytes. On top of that, a user perceived
//! character (a grapheme cluster) can be made of several code points:
//!
//! | Character | Byte size | Code points | Display width |
//! | --------- | --------- | ----------- | ------------- |
//! | `H`       | 1         | 1           | 1             |
//! | `😀`      | 4         | 1           | 2             |
//! | `🙏🏽`      | 8         | 2           | 2             |
//! | `é` (NFD) | 3         | 2           | 1             |
//!
//! A text cursor that moves "one character to the right" has to move by grapheme
//! cluster, otherwise it lands in the middle of `🙏🏽` or splits an accent from its
//! letter. So the text that a [`crate::Scanner`] walks over is pre-segmented once, when
//! the [`GCText`] is built, using the
//! [`unicode-segmentation`](https://crates.io/crates/unicode-segmentation) crate. Every
//! position after that is a [`crate::SegIndex`] into the segment array, and turning a
//! run of segments back into a `&str` is a single slice of the original string.
//!
//! ```text
//! String: "H😀!"
//!
//! ByteIndex: 0 1 2 3 4 5
//! Content:  [H][😀----][!]
//!
//! SegIndex:  0    1     2
//! Segments: [H] [😀]  [!]
//!
//! ColIndex:  0  1  2   3
//! Display:  [H][😀--] [!]
//! ```
//!
//! Normalization is out of scope: `"é"` (NFC, 1 code point) and `"é"` (NFD, 2 code
//! points) are both a single segment, but they are not considered equal.

// Attach sources.
pub mod gc_text;
pub mod seg;
pub mod segment_builder;
pub mod word_boundaries;

// Re-export.
pub use gc_text::*;
pub use seg::*;
pub use segment_builder::*;
pub use word_boundaries::*;
