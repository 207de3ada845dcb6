//! Polisight CLI - Command-line interface for the insurance extraction pipeline.

#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
