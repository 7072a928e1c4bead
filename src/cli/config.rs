// CLI configuration
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use id3scan::{ParseOptions, Utf16Policy};

/// id3scan - ID3v2 tag reader
#[derive(Parser, Debug)]
#[command(name = "id3scan")]
#[command(about = "Read ID3v2 text frames from audio files", long_about = None)]
#[command(version)]
#[command(author = "xwsjjctz <xwsjjctz@icloud.com>")]
pub struct Config {
    /// Output format
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Quiet mode (suppress progress messages)
    #[arg(short, long)]
    pub quiet: bool,

    /// Load parse options from a JSON file
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// How to treat UTF-16 text frames (overrides the options file)
    #[arg(long, value_enum)]
    pub utf16: Option<Utf16Policy>,

    /// Stop at the first all-zero frame header and skip the padding
    #[arg(long)]
    pub stop_at_padding: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Read text frames from file(s)
    Read {
        /// Audio file path(s)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,

        /// Standard fields to display (comma-separated, e.g. title,artist)
        #[arg(long)]
        fields: Option<String>,
    },

    /// Show the ID3v2 header of file(s)
    Header {
        /// Audio file path(s)
        #[arg(value_name = "FILE", required = true)]
        files: Vec<PathBuf>,
    },
}

/// Output format for metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Pretty,
    /// Compact JSON
    Json,
    /// Key-value pairs
    KeyValue,
}

impl Config {
    /// Build parse options from the options file, then apply flag overrides
    pub fn parse_options(&self) -> anyhow::Result<ParseOptions> {
        use anyhow::Context;

        let mut options = match &self.options {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading options file {}", path.display()))?;
                ParseOptions::from_json(&json)
                    .with_context(|| format!("parsing options file {}", path.display()))?
            }
            None => ParseOptions::default(),
        };

        if let Some(policy) = self.utf16 {
            options.utf16 = policy;
        }
        if self.stop_at_padding {
            options.stop_at_padding = true;
        }
        Ok(options)
    }
}
