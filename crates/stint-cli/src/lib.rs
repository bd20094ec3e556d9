//! Session timer CLI library.
//!
//! This crate provides the CLI interface for the stint session timer.

mod cli;
mod config;
pub mod host;
pub mod sound;

pub use cli::{Cli, Commands};
pub use config::Config;
