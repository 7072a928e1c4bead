// CLI module for id3scan
//
// Only compiled into the binary; the library has no CLI dependencies at the
// API level.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{Commands, Config};
pub use output::OutputFormatter;
