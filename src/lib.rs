//! id3scan - a permissive ID3v2 tag reader
//!
//! Reads the ID3v2 block at the current position of a stream and returns its
//! frames as a map from four-character frame id to decoded text.
//!
//! ```no_run
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let mut reader = BufReader::new(File::open("song.mp3")?);
//! let frames = id3scan::parse(&mut reader)?;
//! if let Some(title) = frames.get("TIT2") {
//!     println!("{title}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;
use std::io::Read;

pub mod config;
pub mod error;
pub mod field_mapping;
pub mod id3;
mod utils;

pub use config::{ParseOptions, Utf16Policy};
pub use error::{Id3Error, Result};
pub use id3::{Id3v2Header, Id3v2Tag};
pub use utils::encoding::TextEncoding;
pub use utils::io::synchsafe;

/// Parse an ID3v2 block with default options
pub fn parse<R: Read>(reader: &mut R) -> Result<HashMap<String, String>> {
    parse_with(reader, &ParseOptions::default())
}

/// Parse an ID3v2 block, returning only the frame map
pub fn parse_with<R: Read>(reader: &mut R, options: &ParseOptions) -> Result<HashMap<String, String>> {
    read_tag(reader, options).map(|tag| tag.frames)
}

/// Parse an ID3v2 block, keeping the header alongside the frames
pub fn read_tag<R: Read>(reader: &mut R, options: &ParseOptions) -> Result<Id3v2Tag> {
    Id3v2Tag::read(reader, options)
}
