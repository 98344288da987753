//! CLI module for taskmaster - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for task operations and
//! the terminal rendering of their results.

pub mod commands;
pub mod render;

pub use commands::Cli;
