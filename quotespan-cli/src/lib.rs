//! Quotespan CLI library
//!
//! This library provides the command-line interface for the quotespan
//! quote span extraction system.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
