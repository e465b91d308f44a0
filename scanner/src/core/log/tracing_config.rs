// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::Add;

use tracing_core::LevelFilter;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level. Use
/// [`crate::try_initialize_logging_global`] or
/// [`crate::try_initialize_logging_thread_local`] to install it.
///
/// Anything that implements [`Into<TracingConfig>`] can be passed to those functions,
/// and configs compose with `+`:
///
/// ```
/// use text_scanner::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let level: TracingConfig = tracing::Level::DEBUG.into();
/// let display: TracingConfig = DisplayPreference::Stderr.into();
/// let both = level + display;
/// assert_eq!(
///     both.writer_config,
///     WriterConfig::DisplayAndFile(DisplayPreference::Stderr, "log.txt".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
}

/// - `tracing_log_file_path_and_prefix`: [String] is the file path and prefix to use for
///   the log file. Eg: `/tmp/scan.log` or `scan.log`.
/// - `DisplayPreference`: [`DisplayPreference`] is the preferred display to use for
///   logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* tracing_log_file_path_and_prefix */),
    DisplayAndFile(DisplayPreference, String /* tracing_log_file_path_and_prefix */),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

impl TracingConfig {
    /// Logging is **DISABLED** by **default**.
    #[must_use]
    pub fn new_off() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::OFF,
        }
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

impl Default for TracingConfig {
    fn default() -> Self { Self::new_off() }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self {
        Self {
            level_filter: level.into(),
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(preferred_display: DisplayPreference) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::Display(preferred_display),
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config,
        }
    }
}

/// Merge two [`TracingConfig`] instances together. The more verbose level wins.
impl Add<TracingConfig> for TracingConfig {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            level_filter: self.level_filter.max(rhs.level_filter),
            writer_config: self.writer_config + rhs.writer_config,
        }
    }
}

/// Merge two [`WriterConfig`] instances together. The `rhs` will clobber the `self` if
/// it has a "some" value. That is, the value in `rhs` has higher specificity.
///
/// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
/// - `{a: None } + {a: "bar"} = {a: "bar"}`.
/// - `{a: "foo"} + {a: None } = {a: "foo"}`.
impl Add<WriterConfig> for WriterConfig {
    type Output = Self;

    fn add(self, rhs: WriterConfig) -> Self::Output {
        use WriterConfig::{Display, DisplayAndFile, File, None};

        match (self, rhs) {
            // No collision merge.
            (None, wc_rhs) => wc_rhs,
            (wc_lhs, None) => wc_lhs,
            (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

            // Collision (rhs has higher specificity).
            (Display(_), Display(dp_rhs)) => Display(dp_rhs),
            (File(_), File(f_rhs)) => File(f_rhs),
            (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp_rhs, f_rhs)) => {
                DisplayAndFile(dp_rhs, f_rhs)
            }
            (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),
            (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
        }
    }
}

#[cfg(test)]
mod tests_add_writer_configs {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_add_writer_configs() {
        let fname = "log.txt".to_string();
        let none = WriterConfig::None;
        let stdout = WriterConfig::Display(DisplayPreference::Stdout);
        let stderr = WriterConfig::Display(DisplayPreference::Stderr);
        let file = WriterConfig::File(fname.clone());
        let stdout_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, fname.clone());
        let stderr_and_file =
            WriterConfig::DisplayAndFile(DisplayPreference::Stderr, fname.clone());

        // No collision merge.
        assert_eq2!(none.clone() + none.clone(), none);
        assert_eq2!(stdout.clone() + none.clone(), stdout);
        assert_eq2!(none.clone() + stdout.clone(), stdout);
        assert_eq2!(file.clone() + none.clone(), file);
        assert_eq2!(stdout.clone() + file.clone(), stdout_and_file);
        assert_eq2!(file.clone() + stderr.clone(), stderr_and_file);

        // Collision (rhs has higher specificity).
        assert_eq2!(stdout.clone() + stderr.clone(), stderr);
        assert_eq2!(stdout.clone() + stderr_and_file.clone(), stderr_and_file);
        assert_eq2!(stderr_and_file.clone() + stdout.clone(), stdout_and_file);
        assert_eq2!(
            stdout_and_file.clone() + WriterConfig::File("other.txt".to_string()),
            WriterConfig::DisplayAndFile(DisplayPreference::Stdout, "other.txt".to_string())
        );
    }

    #[test]
    fn test_add_tracing_configs_keeps_more_verbose_level() {
        let quiet: TracingConfig = LevelFilter::WARN.into();
        let loud: TracingConfig = DisplayPreference::Stdout.into();
        let merged = quiet + loud;
        assert_eq2!(merged.level_filter, LevelFilter::DEBUG);
        assert_eq2!(
            merged.writer_config,
            WriterConfig::DisplayAndFile(
                DisplayPreference::Stdout,
                DEFAULT_LOG_FILE_NAME.to_string()
            )
        );
    }

    #[test]
    fn test_default_is_off() {
        let config = TracingConfig::default();
        assert_eq2!(config.get_level_filter(), LevelFilter::OFF);
        assert_eq2!(config.get_writer_config(), WriterConfig::None);
    }
}
