// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Word boundary detection for text editing operations.
//!
//! The delimiter alphabet is fixed at compile time, see [`WordDelimiter`]. A grapheme
//! cluster is a delimiter if it is exactly one of these nine strings:
//!
//! ```text
//! " "  ","  "."  "{"  "}"  "["  "]"  "?"  "!"
//! ```
//!
//! Everything else, including tabs, newlines, hyphens, and emoji, is considered a word
//! character.
//!
//! ## Examples
//!
//! ```text
//! "hello world"   → words: ["hello", "world"]
//! "hello-world"   → words: ["hello-world"] (hyphen is not a delimiter)
//! "foo.bar[0]"    → words: ["foo", "bar", "0"]
//! "hello  world"  → words: ["hello", "world"] (runs of delimiters separate once)
//! ```

// Attach sources.
pub mod word_delimiter;

// Re-export.
pub use word_delimiter::*;
