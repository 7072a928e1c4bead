// Parser configuration
//
// Only content-level behaviour is configurable. Structural checks (markers,
// short reads) are always enforced regardless of these options.

use serde::{Deserialize, Serialize};

/// How frames with a UTF-16 indicator (1 or 2) are turned into text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Utf16Policy {
    /// Decode as UTF-16, honouring a byte order mark, and trim trailing NULs
    #[default]
    Decode,
    /// Return the payload bytes untouched, indicator byte included
    Raw,
}

/// Options for a single parse call
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub utf16: Utf16Policy,
    /// End the frame loop at the first all-zero frame header and skip the
    /// rest of the frame region as padding
    pub stop_at_padding: bool,
}

impl ParseOptions {
    /// Load options from a JSON document; missing keys take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
