// Error types for ID3v2 parsing
//
// Every variant here is structural: the block cannot be walked any further.
// Content problems (odd frame ids, unknown encodings, sizes that overrun the
// block) are not errors and never show up in this enum.

use thiserror::Error;

/// Errors returned while reading an ID3v2 block
#[derive(Error, Debug)]
pub enum Id3Error {
    /// The underlying reader failed
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// The stream does not start with "ID3"
    #[error("ID3 header not found")]
    MarkerNotFound,

    /// A full 10-byte header carries neither "ID3" nor "3DI"
    #[error("not an ID3 block: marker {found:02X?}")]
    InvalidBlock { found: [u8; 3] },

    /// Fewer than 10 header bytes were available
    #[error("truncated ID3 header: got {got} of 10 bytes")]
    TruncatedHeader { got: usize },

    /// The extended header size field or body was cut short
    #[error("truncated extended header: needed {needed} bytes, {available} available")]
    TruncatedExtendedHeader { needed: u64, available: u64 },

    /// A frame header stopped partway through its 10 bytes
    #[error("truncated frame header: got {got} of 10 bytes")]
    TruncatedFrameHeader { got: usize },

    /// A frame payload was shorter than its declared size
    #[error("truncated payload for frame {frame_id}: declared {declared} bytes")]
    TruncatedPayload { frame_id: String, declared: u32 },

    /// Padding after the last frame was shorter than the block claims
    #[error("truncated padding: {missing} bytes missing")]
    TruncatedPadding { missing: u64 },

    /// The footer flag is set but fewer than 10 bytes follow the frames
    #[error("truncated footer")]
    TruncatedFooter,
}

impl Id3Error {
    /// Whether this error was caused by the input ending early
    pub fn is_truncation(&self) -> bool {
        matches!(
            self,
            Id3Error::TruncatedHeader { .. }
                | Id3Error::TruncatedExtendedHeader { .. }
                | Id3Error::TruncatedFrameHeader { .. }
                | Id3Error::TruncatedPayload { .. }
                | Id3Error::TruncatedPadding { .. }
                | Id3Error::TruncatedFooter
        )
    }
}

pub type Result<T> = std::result::Result<T, Id3Error>;
