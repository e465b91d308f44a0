// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Index and length newtypes for grapheme cluster segments.
//!
//! An index is zero based and a length is a count, so for content of length `N` the
//! valid indices are `0..N`. Keeping them as two distinct types means the "- 1" and
//! "+ 1" conversions between them are spelled out instead of being sprinkled around.
//!
//! ```text
//!           ╭─── length=5 ───╮
//! Index:    0   1   2   3   4
//!         ┌───┬───┬───┬───┬───┐
//! Content:│ h │ e │ l │ l │ o │
//!         └───┴───┴───┴───┴───┘
//!           ╰─ valid indices ╯
//! ```

use std::{fmt::{Display, Formatter, Result as FmtResult},
          ops::Deref};

/// Represents a grapheme segment index inside of [`crate::GCText`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct SegIndex(pub usize);

pub fn seg_index(arg_seg_index: impl Into<SegIndex>) -> SegIndex { arg_seg_index.into() }

mod seg_index_impl_block {
    use super::{Deref, Display, FmtResult, Formatter, SegIndex};

    impl SegIndex {
        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }
    }

    impl Deref for SegIndex {
        type Target = usize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl From<usize> for SegIndex {
        fn from(it: usize) -> Self { Self(it) }
    }

    impl Display for SegIndex {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.0) }
    }
}

/// Represents a count of grapheme segments inside of [`crate::GCText`]. The length is
/// max index (zero based) + 1.
#[derive(Debug, Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct SegLength(pub usize);

pub fn seg_length(arg_seg_length: impl Into<SegLength>) -> SegLength {
    arg_seg_length.into()
}

mod seg_length_impl_block {
    use super::{Deref, Display, FmtResult, Formatter, SegIndex, SegLength, seg_index};

    impl SegLength {
        /// Converts the length to the index of the last segment, by subtracting 1.
        /// Returns [`None`] for a zero length, since there is no last segment.
        #[must_use]
        pub fn convert_to_seg_index(&self) -> Option<SegIndex> {
            self.0.checked_sub(1).map(seg_index)
        }

        #[must_use]
        pub fn as_usize(&self) -> usize { self.0 }

        #[must_use]
        pub fn is_zero(&self) -> bool { self.0 == 0 }
    }

    impl Deref for SegLength {
        type Target = usize;
        fn deref(&self) -> &Self::Target { &self.0 }
    }

    impl From<usize> for SegLength {
        fn from(it: usize) -> Self { Self(it) }
    }

    impl Display for SegLength {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult { write!(f, "{}", self.0) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn seg_index_conversions() {
        let length = seg_length(1);
        assert_eq2!(length.convert_to_seg_index(), Some(seg_index(0)));
        assert_eq2!(seg_length(5).convert_to_seg_index(), Some(seg_index(4)));
    }

    #[test]
    fn seg_length_zero_has_no_last_index() {
        let length = seg_length(0);
        assert!(length.is_zero());
        assert_eq2!(length.convert_to_seg_index(), None);
    }

    #[test]
    fn seg_index_and_length_as_usize() {
        assert_eq2!(seg_index(12).as_usize(), 12);
        assert_eq2!(*seg_length(13), 13);
        assert_eq2!(seg_index(3).to_string(), "3");
    }
}
