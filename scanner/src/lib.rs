// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # text_scanner
//!
//! A grapheme aware text cursor. You give it an immutable string, and it gives you a
//! [`Scanner`] that you can move through that text one character or one word at a time.
//! It answers questions about the characters and words around the cursor, and it can
//! tell you whether the cursor sits on a word or string boundary.
//!
//! This is the low level primitive behind word-wise cursor motion in an editor
//! (`Alt+Left`, `Alt+Right`, "select word", and friends), or a hand written tokenizer
//! that needs to peek around without losing its place.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Characters are grapheme clusters](#characters-are-grapheme-clusters)
//! - [Words and delimiters](#words-and-delimiters)
//! - [Moving the cursor](#moving-the-cursor)
//! - [Asking questions](#asking-questions)
//! - [Errors](#errors)
//! - [Logging](#logging)
//! <!-- /TOC -->
//!
//! # Characters are grapheme clusters
//!
//! The unit of movement is the grapheme cluster (a user perceived character), not the
//! byte and not the [`char`]. `"H😀!"` has 3 positions, and `"🙏🏽"` has 1. See
//! [`mod@crate::core::graphemes`] for how the text is segmented.
//!
//! ```text
//! String:    "H😀!"
//!
//! ByteIndex:  0 1 2 3 4 5
//! Content:   [H][😀----][!]
//!
//! SegIndex:   0    1     2
//! Segments:  [H] [😀]  [!]
//! ```
//!
//! # Words and delimiters
//!
//! The delimiter alphabet is fixed: space `,` `.` `{` `}` `[` `]` `?` `!`. A word is a
//! maximal run of non-delimiters. Each delimiter is also a one character word of its
//! own when you ask for [`Scanner::current_word`] while standing on it.
//!
//! ```text
//!            ╭─word─╮      ╭─word─╮
//! Index:     0 1 2 3 4 5 6 7 8 9 10 11 12
//!          ┌─┬─┬─┬─┬─┬─┬─┬─┬─┬─┬──┬──┬──┐
//! Content: │H│e│l│l│o│,│ │w│o│r│l │d │! │
//!          └─┴─┴─┴─┴─┴─┴─┴─┴─┴─┴──┴──┴──┘
//!                     ╰┬╯             ╰┬╯
//!                 delimiters       delimiter
//! ```
//!
//! # Moving the cursor
//!
//! ```
//! use text_scanner::{Scanner, ScannerError, seg_index};
//!
//! let mut scanner = Scanner::new("Hello, world!")?;
//! scanner.jump_to_start_of_next_word()?;
//! assert_eq!(scanner.position(), seg_index(7));
//! assert_eq!(scanner.current_word()?, "world");
//!
//! // The cursor never leaves the text. The last valid position is 12.
//! scanner.jump_to_start_of_string();
//! assert_eq!(scanner.advance_by(13), Err(ScannerError::PastBounds));
//! # Ok::<(), ScannerError>(())
//! ```
//!
//! # Asking questions
//!
//! Every query is read only. Lookahead happens on a [`Scanner::fork`], which shares the
//! text with the original (an [`std::sync::Arc`] clone) and copies only the position.
//! Strings come back as `&str` slices that borrow the shared text.
//!
//! ```
//! use text_scanner::{Scanner, ScannerError};
//!
//! let scanner = Scanner::new("Hello, world!")?;
//! assert_eq!(scanner.current_word()?, "Hello");
//! assert_eq!(scanner.next_word()?, "world");
//! assert_eq!(scanner.next_x_characters(4), "ello");
//! assert_eq!(scanner.relative_range(0, 4)?, "ello");
//! # Ok::<(), ScannerError>(())
//! ```
//!
//! # Errors
//!
//! There are exactly two ways to fail, see [`ScannerError`]. Both are ordinary,
//! recoverable outcomes and they are always returned to the caller.
//!
//! # Logging
//!
//! Successful jumps emit `trace!` events through [`tracing`]. Nothing is printed unless a
//! subscriber is installed, eg with [`try_initialize_logging_global`].

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod core;
pub mod scanner;

// Re-export.
pub use core::*;
pub use scanner::*;
