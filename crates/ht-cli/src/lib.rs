//! Hackatime client CLI library.
//!
//! This crate provides the CLI interface and dashboard session handling.

mod cli;
pub mod commands;
mod config;
pub mod dashboard;

pub use cli::{Cli, Commands};
pub use config::{Config, KeySource};
