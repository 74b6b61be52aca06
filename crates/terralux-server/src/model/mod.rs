//! Server-side models: CLI and configuration

pub mod config;

pub use config::{Cli, Command, Configuration};
