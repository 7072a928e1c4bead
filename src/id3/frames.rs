// ID3v2 frame headers and text payload decoding

use std::io::Read;

use crate::config::Utf16Policy;
use crate::error::{Id3Error, Result};
use crate::utils::encoding::{self, TextEncoding};
use crate::utils::io::synchsafe;

/// Size of a frame header in bytes
pub const FRAME_HEADER_SIZE: usize = 10;

/// Common ID3v2 frame identifiers
pub mod frame_ids {
    pub const TITLE: &str = "TIT2";
    pub const ARTIST: &str = "TPE1";
    pub const ALBUM: &str = "TALB";
    pub const YEAR: &str = "TYER";
    pub const RECORDING_TIME: &str = "TDRC";
    pub const TRACK: &str = "TRCK";
    pub const GENRE: &str = "TCON";
    pub const COMMENT: &str = "COMM";
}

/// ID3v2 frame header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHeader {
    /// Four identifier bytes as text, never validated
    pub frame_id: String,
    /// Declared payload length
    pub size: u32,
    /// Raw status and format flags, kept but not interpreted
    pub flags: [u8; 2],
}

impl FrameHeader {
    /// Parse a frame header from its raw 10 bytes
    pub fn parse(raw: &[u8; FRAME_HEADER_SIZE]) -> Self {
        FrameHeader {
            frame_id: String::from_utf8_lossy(&raw[0..4]).into_owned(),
            size: synchsafe(&raw[4..8]),
            flags: [raw[8], raw[9]],
        }
    }

    /// Padding after the last frame shows up as a header of zero bytes
    pub fn is_padding(raw: &[u8; FRAME_HEADER_SIZE]) -> bool {
        raw.iter().all(|&b| b == 0)
    }
}

/// ID3v2 frame with its raw payload
#[derive(Debug, Clone)]
pub struct Frame {
    pub header: FrameHeader,
    pub data: Vec<u8>,
}

impl Frame {
    /// Read exactly `header.size` payload bytes following a frame header
    pub fn read<R: Read>(header: FrameHeader, reader: &mut R) -> Result<Self> {
        // Grow with the data actually present instead of trusting the size
        let mut data = Vec::new();
        reader
            .by_ref()
            .take(header.size as u64)
            .read_to_end(&mut data)?;

        if data.len() < header.size as usize {
            return Err(Id3Error::TruncatedPayload {
                frame_id: header.frame_id,
                declared: header.size,
            });
        }

        Ok(Frame { header, data })
    }

    /// Decoded text of the payload
    pub fn decoded(&self, utf16: Utf16Policy) -> String {
        decode_text_frame(&self.data, utf16)
    }
}

/// Decode text frame data
///
/// Single-byte and UTF-8 frames drop the indicator byte and the trailing
/// terminator. Unknown indicators come back untouched. Multi-string frames
/// are not split; separators stay in the text.
pub fn decode_text_frame(data: &[u8], utf16: Utf16Policy) -> String {
    let Some(&indicator) = data.first() else {
        return String::new();
    };

    match TextEncoding::from_byte(indicator) {
        Some(encoding) if encoding.is_wide() => match utf16 {
            Utf16Policy::Decode => encoding::decode_text(&data[1..], encoding)
                .trim_end_matches('\0')
                .to_string(),
            Utf16Policy::Raw => encoding::raw_text(data),
        },
        Some(encoding) => encoding::decode_text(strip_terminated(data), encoding),
        None => encoding::raw_text(data),
    }
}

// Drop the indicator byte and the final byte
fn strip_terminated(data: &[u8]) -> &[u8] {
    if data.len() < 2 {
        &[]
    } else {
        &data[1..data.len() - 1]
    }
}
