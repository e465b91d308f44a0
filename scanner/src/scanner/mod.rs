// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`Scanner`] is a read position over an immutable, shared [`crate::GCText`].
//!
//! The impl blocks are split by concern:
//!
//! | File            | What it does                                                     |
//! | :-------------- | :--------------------------------------------------------------- |
//! | `scanner_struct`| Construction, forking, accessors, [`std::fmt::Display`].         |
//! | `movement`      | `advance*` / `precede*` and the predicate bounded search loops.  |
//! | `jumps`         | Jumps to string and word boundaries, built on the search loops.  |
//! | `predicates`    | `at_*` boundary tests.                                           |
//! | `extraction`    | Read only character, word, and range queries.                    |
//!
//! Movement is **not** transactional. A failed `advance_by(5)` that managed 3 steps
//! leaves the cursor 3 steps further along. Queries never expose this because they run
//! on a [`Scanner::fork`].

// Attach sources.
pub mod extraction;
pub mod jumps;
pub mod movement;
pub mod predicates;
pub mod scanner_error;
pub mod scanner_struct;

#[cfg(test)]
mod test_scanner_properties;

// Re-export.
pub use scanner_error::*;
pub use scanner_struct::*;
