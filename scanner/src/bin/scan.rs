// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `scan` drives a [`Scanner`] over some text with a script of ops, then prints where the
//! cursor ended up and what it can see from there.
//!
//! ```text
//! $ scan "Hello, world!" --op next-word-start --op end-of-word
//! ```

use clap::Parser;
use miette::WrapErr;
use text_scanner::{Scanner, ScannerResult, try_initialize_logging_global};

use crate::clap_config::{CLIArg, Op};

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    try_initialize_logging_global(cli_arg.global_options.tracing_config())?;
    tracing::debug!(?cli_arg, "scan started");

    let mut scanner = Scanner::new_at(cli_arg.text.as_str(), cli_arg.at)
        .wrap_err_with(|| format!("can't start scanning at position {}", cli_arg.at))?;

    for (step, op) in cli_arg.ops.iter().enumerate() {
        run_op(&mut scanner, *op)
            .wrap_err_with(|| format!("op #{} `{op}` failed", step + 1))?;
        tracing::debug!(%op, position = %scanner.position(), "op applied");
    }

    print!("{}", report(&scanner));

    Ok(())
}

fn run_op(scanner: &mut Scanner, op: Op) -> ScannerResult<()> {
    match op {
        Op::Advance => scanner.advance(),
        Op::Precede => scanner.precede(),
        Op::AdvanceBy(count) => scanner.advance_by(count),
        Op::PrecedeBy(count) => scanner.precede_by(count),
        Op::StartOfString => {
            scanner.jump_to_start_of_string();
            Ok(())
        }
        Op::EndOfString => {
            scanner.jump_to_end_of_string();
            Ok(())
        }
        Op::StartOfWord => scanner.jump_to_start_of_word(),
        Op::EndOfWord => scanner.jump_to_end_of_word(),
        Op::PrevWordStart => scanner.jump_to_start_of_previous_word(),
        Op::NextWordStart => scanner.jump_to_start_of_next_word(),
    }
}

fn report(scanner: &Scanner) -> String {
    let word = |it: ScannerResult<&str>| match it {
        Ok(word) => format!("{word:?}"),
        Err(_) => "-".to_string(),
    };

    let rows = [
        ("text", scanner.to_string()),
        ("position", scanner.position().to_string()),
        ("display col", scanner.current_display_col().to_string()),
        ("display width", scanner.text().display_width().to_string()),
        ("current character", format!("{:?}", scanner.current_character())),
        ("current word", word(scanner.current_word())),
        ("previous word", word(scanner.previous_word())),
        ("next word", word(scanner.next_word())),
        ("at delimiter", scanner.at_delimiter().to_string()),
        ("at start of word", scanner.at_start_of_word().to_string()),
        ("at end of word", scanner.at_end_of_word().to_string()),
        ("at start of string", scanner.at_start_of_string().to_string()),
        ("at end of string", scanner.at_end_of_string().to_string()),
        ("characters left", scanner.characters_left().to_string()),
    ];

    rows.iter()
        .map(|(label, value)| format!("{:<20}{value}\n", format!("{label}:")))
        .collect()
}

mod clap_config {
    use std::{fmt::{Display, Formatter, Result as FmtResult},
              str::FromStr};

    use clap::{Args, Parser, ValueEnum};
    use text_scanner::{DisplayPreference, TracingConfig, WriterConfig};
    use tracing_core::LevelFilter;

    /// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
    #[derive(Debug, Parser)]
    #[command(bin_name = "scan")]
    #[command(about = "Move a cursor through text by characters and words")]
    #[command(version)]
    #[command(next_line_help = true)]
    #[command(arg_required_else_help(true))]
    pub struct CLIArg {
        /// The text to scan.
        pub text: String,

        /// Starting position, as a grapheme cluster index.
        #[arg(long, default_value_t = 0)]
        pub at: usize,

        /// An op to apply, in order. One of: advance, precede, advance-by:N,
        /// precede-by:N, start-of-string, end-of-string, start-of-word, end-of-word,
        /// prev-word-start, next-word-start.
        #[arg(long = "op", value_name = "OP")]
        pub ops: Vec<Op>,

        #[command(flatten)]
        pub global_options: GlobalOption,
    }

    #[derive(Debug, Args)]
    pub struct GlobalOption {
        #[arg(
            global = true,
            long,
            value_enum,
            default_value_t = LogLevel::Off,
            help = "Log level. Logs go to stderr unless --log-file is given."
        )]
        pub log_level: LogLevel,

        #[arg(global = true, long, help = "Write logs to this file instead of stderr.")]
        pub log_file: Option<String>,
    }

    impl GlobalOption {
        pub fn tracing_config(&self) -> TracingConfig {
            let writer_config = match &self.log_file {
                Some(path) => WriterConfig::File(path.clone()),
                None => WriterConfig::Display(DisplayPreference::Stderr),
            };
            TracingConfig {
                writer_config,
                level_filter: self.log_level.into(),
            }
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
    pub enum LogLevel {
        Off,
        Error,
        Warn,
        Info,
        Debug,
        Trace,
    }

    impl From<LogLevel> for LevelFilter {
        fn from(it: LogLevel) -> Self {
            match it {
                LogLevel::Off => LevelFilter::OFF,
                LogLevel::Error => LevelFilter::ERROR,
                LogLevel::Warn => LevelFilter::WARN,
                LogLevel::Info => LevelFilter::INFO,
                LogLevel::Debug => LevelFilter::DEBUG,
                LogLevel::Trace => LevelFilter::TRACE,
            }
        }
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Op {
        Advance,
        Precede,
        AdvanceBy(usize),
        PrecedeBy(usize),
        StartOfString,
        EndOfString,
        StartOfWord,
        EndOfWord,
        PrevWordStart,
        NextWordStart,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("unknown op `{0}`, run with --help to see the list of ops")]
    pub struct ParseOpError(String);

    impl FromStr for Op {
        type Err = ParseOpError;

        fn from_str(input: &str) -> Result<Self, Self::Err> {
            let counted = |prefix: &str| {
                input
                    .strip_prefix(prefix)
                    .and_then(|count| count.parse::<usize>().ok())
            };

            let op = match input {
                "advance" => Op::Advance,
                "precede" => Op::Precede,
                "start-of-string" => Op::StartOfString,
                "end-of-string" => Op::EndOfString,
                "start-of-word" => Op::StartOfWord,
                "end-of-word" => Op::EndOfWord,
                "prev-word-start" => Op::PrevWordStart,
                "next-word-start" => Op::NextWordStart,
                _ => {
                    if let Some(count) = counted("advance-by:") {
                        Op::AdvanceBy(count)
                    } else if let Some(count) = counted("precede-by:") {
                        Op::PrecedeBy(count)
                    } else {
                        return Err(ParseOpError(input.to_string()));
                    }
                }
            };
            Ok(op)
        }
    }

    impl Display for Op {
        fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
            match self {
                Op::Advance => write!(f, "advance"),
                Op::Precede => write!(f, "precede"),
                Op::AdvanceBy(count) => write!(f, "advance-by:{count}"),
                Op::PrecedeBy(count) => write!(f, "precede-by:{count}"),
                Op::StartOfString => write!(f, "start-of-string"),
                Op::EndOfString => write!(f, "end-of-string"),
                Op::StartOfWord => write!(f, "start-of-word"),
                Op::EndOfWord => write!(f, "end-of-word"),
                Op::PrevWordStart => write!(f, "prev-word-start"),
                Op::NextWordStart => write!(f, "next-word-start"),
            }
        }
    }
}
