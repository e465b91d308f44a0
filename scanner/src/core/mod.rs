// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Building blocks that [`crate::Scanner`] stands on: index units, grapheme segmented
//! text, the delimiter alphabet, logging setup, and a few declarative macros.

// Attach sources.
pub mod decl_macros;
pub mod graphemes;
pub mod log;
pub mod units;

// Re-export.
pub use graphemes::*;
pub use log::*;
pub use units::*;
