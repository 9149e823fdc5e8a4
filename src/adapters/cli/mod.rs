//! CLI Adapter
//!
//! Command-line interface shared by the two quote programs.
//! Uses clap derive macros for argument parsing.

mod commands;

pub use commands::{bin_name, execute, parse_args, run, ParseOutcome, QuoteCli};
