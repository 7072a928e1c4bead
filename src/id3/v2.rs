// ID3v2 tag implementation

use std::collections::HashMap;
use std::io::Read;

use log::{debug, trace};

use crate::config::ParseOptions;
use crate::error::{Id3Error, Result};
use crate::id3::frames::{Frame, FrameHeader, FRAME_HEADER_SIZE};
use crate::id3::region::FrameRegion;
use crate::utils::io::{read_fill, synchsafe};

/// Size of the tag header (and footer) in bytes
pub const HEADER_SIZE: usize = 10;

const ID: [u8; 3] = *b"ID3";
const FOOTER_ID: [u8; 3] = *b"3DI";

const FLAG_UNSYNCHRONISATION: u8 = 0x80;
const FLAG_EXTENDED_HEADER: u8 = 0x40;
const FLAG_EXPERIMENTAL: u8 = 0x20;
const FLAG_FOOTER: u8 = 0x10;

/// ID3v2 header structure
///
/// Immutable once parsed. Flags are only reachable through the named
/// predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id3v2Header {
    marker: [u8; 3],
    version: (u8, u8),
    flags: u8,
    size: u32,
}

impl Id3v2Header {
    /// Parse a header or footer from its raw 10 bytes
    pub fn parse(raw: &[u8; HEADER_SIZE]) -> Result<Self> {
        let marker = [raw[0], raw[1], raw[2]];
        if marker != ID && marker != FOOTER_ID {
            return Err(Id3Error::InvalidBlock { found: marker });
        }

        Ok(Id3v2Header {
            marker,
            version: (raw[3], raw[4]),
            flags: raw[5],
            size: synchsafe(&raw[6..10]),
        })
    }

    /// Read a standalone header or footer from reader
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buffer = [0u8; HEADER_SIZE];
        let got = read_fill(reader, &mut buffer)?;
        if got < HEADER_SIZE {
            return Err(Id3Error::TruncatedHeader { got });
        }
        Self::parse(&buffer)
    }

    /// Major version and revision
    pub fn version(&self) -> (u8, u8) {
        self.version
    }

    pub fn version_string(&self) -> String {
        let (major, revision) = self.version();
        format!("2.{}.{}", major, revision)
    }

    /// Size of the frame region, excluding header and footer
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_unsynchronised(&self) -> bool {
        self.flags & FLAG_UNSYNCHRONISATION != 0
    }

    pub fn has_extended_header(&self) -> bool {
        self.flags & FLAG_EXTENDED_HEADER != 0
    }

    pub fn is_experimental(&self) -> bool {
        self.flags & FLAG_EXPERIMENTAL != 0
    }

    pub fn has_footer(&self) -> bool {
        self.flags & FLAG_FOOTER != 0
    }

    /// Whether this was read from the "3DI" footer rather than a header
    pub fn is_footer(&self) -> bool {
        self.marker == FOOTER_ID
    }
}

/// ID3v2 tag structure
#[derive(Debug, Clone)]
pub struct Id3v2Tag {
    pub header: Id3v2Header,
    /// Decoded text by frame id; a repeated id keeps the last frame
    pub frames: HashMap<String, String>,
}

impl Id3v2Tag {
    /// Read an ID3v2 tag from a reader positioned at its first byte
    ///
    /// The reader is left just past the tag (after the footer when present).
    /// Any error is fatal and no frames are returned.
    pub fn read<R: Read>(reader: &mut R, options: &ParseOptions) -> Result<Self> {
        let header = read_header(reader)?;
        debug!(
            "ID3v{} tag: {} bytes, extended header {}, footer {}",
            header.version_string(),
            header.size(),
            header.has_extended_header(),
            header.has_footer()
        );

        let mut region = FrameRegion::new(header.size());
        if header.has_extended_header() {
            skip_extended_header(reader, &mut region)?;
        }

        let mut frames = HashMap::new();
        while !region.is_exhausted() {
            let mut raw = [0u8; FRAME_HEADER_SIZE];
            let got = region.read(reader, &mut raw)?;
            if got == 0 {
                break;
            }
            if got < FRAME_HEADER_SIZE {
                return Err(Id3Error::TruncatedFrameHeader { got });
            }

            if options.stop_at_padding && FrameHeader::is_padding(&raw) {
                skip_padding(reader, &mut region)?;
                break;
            }

            let frame = Frame::read(FrameHeader::parse(&raw), reader)?;
            region.consume_unbounded(frame.header.size as u64);
            trace!(
                "frame {:?}: {} bytes, {} left in region",
                frame.header.frame_id,
                frame.header.size,
                region.remaining()
            );

            let text = frame.decoded(options.utf16);
            frames.insert(frame.header.frame_id, text);
        }

        if header.has_footer() {
            let mut footer = [0u8; HEADER_SIZE];
            if read_fill(reader, &mut footer)? < HEADER_SIZE {
                return Err(Id3Error::TruncatedFooter);
            }
            debug!("skipped footer");
        }

        Ok(Id3v2Tag { header, frames })
    }
}

// Fails fast on the first three bytes before reading the rest of the header
fn read_header<R: Read>(reader: &mut R) -> Result<Id3v2Header> {
    let mut buffer = [0u8; HEADER_SIZE];

    let got = read_fill(reader, &mut buffer[..3])?;
    if got < 3 {
        return Err(Id3Error::TruncatedHeader { got });
    }
    if buffer[..3] != ID {
        return Err(Id3Error::MarkerNotFound);
    }

    let got = 3 + read_fill(reader, &mut buffer[3..])?;
    if got < HEADER_SIZE {
        return Err(Id3Error::TruncatedHeader { got });
    }

    Id3v2Header::parse(&buffer)
}

// The size field counts itself, so only size - 4 bytes follow it
fn skip_extended_header<R: Read>(reader: &mut R, region: &mut FrameRegion) -> Result<()> {
    let mut size_field = [0u8; 4];
    let got = region.read(reader, &mut size_field)?;
    if got < size_field.len() {
        return Err(Id3Error::TruncatedExtendedHeader {
            needed: size_field.len() as u64,
            available: got as u64,
        });
    }

    let body = (synchsafe(&size_field) as u64).saturating_sub(4);
    let skipped = region.skip(reader, body)?;
    if skipped < body {
        return Err(Id3Error::TruncatedExtendedHeader {
            needed: body,
            available: skipped,
        });
    }

    debug!("skipped extended header of {} bytes", body + 4);
    Ok(())
}

fn skip_padding<R: Read>(reader: &mut R, region: &mut FrameRegion) -> Result<()> {
    let wanted = region.remaining();
    let skipped = region.skip(reader, wanted)?;
    if skipped < wanted {
        return Err(Id3Error::TruncatedPadding {
            missing: wanted - skipped,
        });
    }

    debug!("skipped {} bytes of padding", wanted + FRAME_HEADER_SIZE as u64);
    Ok(())
}
