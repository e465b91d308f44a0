// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Wrapper for [`pretty_assertions::assert_eq!`] macro, which prints a colorized diff
/// when the two values are not equal.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Type safe way to return `Ok(())` from a function that returns a [`Result`].
///
/// ```
/// use text_scanner::ok;
///
/// fn do_nothing() -> miette::Result<()> { ok!() }
/// assert!(do_nothing().is_ok());
/// ```
#[macro_export]
macro_rules! ok {
    () => {
        Ok(())
    };
    ($value:expr) => {
        Ok($value)
    };
}
