// Encoding utilities

use encoding_rs::{UTF_16BE, UTF_16LE, UTF_8, WINDOWS_1252};

/// Text encoding types, keyed by the indicator byte that leads a text frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Iso8859_1 = 0,
    Utf16 = 1,
    Utf16BE = 2,
    Utf8 = 3,
}

impl TextEncoding {
    /// Map an indicator byte to its encoding, `None` for unknown values
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(TextEncoding::Iso8859_1),
            1 => Some(TextEncoding::Utf16),
            2 => Some(TextEncoding::Utf16BE),
            3 => Some(TextEncoding::Utf8),
            _ => None,
        }
    }

    /// Whether this encoding uses two bytes per code unit
    pub fn is_wide(self) -> bool {
        matches!(self, TextEncoding::Utf16 | TextEncoding::Utf16BE)
    }
}

/// Decode text with specified encoding
pub fn decode_text(data: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Iso8859_1 => {
            WINDOWS_1252.decode_without_bom_handling(data).0.into_owned()
        }
        TextEncoding::Utf16 => {
            // Detect BOM, little-endian when absent
            if data.len() >= 2 {
                if data[0..2] == [0xFF, 0xFE] {
                    UTF_16LE.decode_without_bom_handling(&data[2..]).0.into_owned()
                } else if data[0..2] == [0xFE, 0xFF] {
                    UTF_16BE.decode_without_bom_handling(&data[2..]).0.into_owned()
                } else {
                    UTF_16LE.decode_without_bom_handling(data).0.into_owned()
                }
            } else {
                String::new()
            }
        }
        TextEncoding::Utf16BE => {
            UTF_16BE.decode_without_bom_handling(data).0.into_owned()
        }
        TextEncoding::Utf8 => {
            UTF_8.decode_without_bom_handling(data).0.into_owned()
        }
    }
}

/// Bytes as text with no encoding applied beyond lossy UTF-8
pub fn raw_text(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}
