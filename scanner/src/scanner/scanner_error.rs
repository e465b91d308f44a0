// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The two ways a [`crate::Scanner`] operation can fail. See [`ScannerError`].

/// Errors from [`crate::Scanner`] operations.
///
/// Both are ordinary, recoverable outcomes of a request that can't be satisfied at the
/// current boundary. They are always returned to the immediate caller, never logged or
/// swallowed inside this crate.
///
/// | Variant              | Code | Cause                                                  |
/// | :------------------- | :--- | :----------------------------------------------------- |
/// | [`WordDoesNotExist`] | 10   | No previous / next word relative to the cursor.        |
/// | [`PastBounds`]       | 20   | A move would leave `0..=last_index` of the text.       |
///
/// [`WordDoesNotExist`]: Self::WordDoesNotExist
/// [`PastBounds`]: Self::PastBounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, miette::Diagnostic)]
pub enum ScannerError {
    /// The cursor is already on the first (or last) word of the text.
    #[error("The requested word does not exist.")]
    #[diagnostic(
        code(text_scanner::word_does_not_exist),
        help("There is no word in that direction. Treat this as \"stop here\".")
    )]
    WordDoesNotExist,

    /// A step would move the cursor before the first or after the last grapheme.
    #[error("Attempting to move outside of the bounds.")]
    #[diagnostic(
        code(text_scanner::past_bounds),
        help("Valid positions are 0 through the number of characters minus 1.")
    )]
    PastBounds,
}

/// Type alias for results of [`crate::Scanner`] operations.
pub type ScannerResult<T> = Result<T, ScannerError>;

impl ScannerError {
    /// Stable numeric code for this error kind.
    #[must_use]
    pub const fn numeric_code(&self) -> u16 {
        match self {
            Self::WordDoesNotExist => 10,
            Self::PastBounds => 20,
        }
    }

    /// Human readable description, identical to the [`std::fmt::Display`] output.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::WordDoesNotExist => "The requested word does not exist.",
            Self::PastBounds => "Attempting to move outside of the bounds.",
        }
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case(ScannerError::WordDoesNotExist, 10, "text_scanner::word_does_not_exist")]
    #[test_case(ScannerError::PastBounds, 20, "text_scanner::past_bounds")]
    fn test_codes(error: ScannerError, numeric_code: u16, diagnostic_code: &str) {
        assert_eq2!(error.numeric_code(), numeric_code);
        assert_eq2!(
            error.code().map(|it| it.to_string()),
            Some(diagnostic_code.to_string())
        );
        assert!(error.help().is_some());
    }

    #[test]
    fn test_description_matches_display() {
        for error in [ScannerError::WordDoesNotExist, ScannerError::PastBounds] {
            assert_eq2!(error.to_string(), error.description());
        }
    }

    #[test]
    fn test_converts_into_miette_report() {
        fn fails() -> miette::Result<()> { Err(ScannerError::PastBounds)? }
        let report = fails().unwrap_err();
        assert_eq2!(
            report.to_string(),
            "Attempting to move outside of the bounds."
        );
        assert_eq2!(
            report.downcast_ref::<ScannerError>(),
            Some(&ScannerError::PastBounds)
        );
    }
}
