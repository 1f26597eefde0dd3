//! Breed inquiry CLI
//!
//! This crate provides the command-line interface including:
//! - run: Start the server
//! - init: Write a starter configuration
//! - completion: Generate shell completions

pub mod commands;

pub use commands::{Cli, Commands};
