// Standard field names for ID3v2 frames
//
// Maps the handful of frame ids most tools care about onto plain names
// (title, artist, ...), so callers can pick fields without knowing frame ids.

use std::collections::HashMap;

use crate::id3::frames::frame_ids;

/// Standard metadata fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardField {
    Title,
    Artist,
    Album,
    Year,
    Track,
    Genre,
    Comment,
}

impl StandardField {
    pub const ALL: [StandardField; 7] = [
        StandardField::Title,
        StandardField::Artist,
        StandardField::Album,
        StandardField::Year,
        StandardField::Track,
        StandardField::Genre,
        StandardField::Comment,
    ];

    /// Get standard field name (lowercase)
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardField::Title => "title",
            StandardField::Artist => "artist",
            StandardField::Album => "album",
            StandardField::Year => "year",
            StandardField::Track => "track",
            StandardField::Genre => "genre",
            StandardField::Comment => "comment",
        }
    }

    /// Parse from string, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "title" => Some(StandardField::Title),
            "artist" => Some(StandardField::Artist),
            "album" => Some(StandardField::Album),
            "year" | "date" => Some(StandardField::Year),
            "track" => Some(StandardField::Track),
            "genre" => Some(StandardField::Genre),
            "comment" => Some(StandardField::Comment),
            _ => None,
        }
    }

    /// Frame ids carrying this field, preferred id first
    pub fn frame_ids(&self) -> &'static [&'static str] {
        match self {
            StandardField::Title => &[frame_ids::TITLE],
            StandardField::Artist => &[frame_ids::ARTIST],
            StandardField::Album => &[frame_ids::ALBUM],
            StandardField::Year => &[frame_ids::RECORDING_TIME, frame_ids::YEAR],
            StandardField::Track => &[frame_ids::TRACK],
            StandardField::Genre => &[frame_ids::GENRE],
            StandardField::Comment => &[frame_ids::COMMENT],
        }
    }

    /// Convert ID3v2 frame id to standard field
    pub fn from_frame_id(frame_id: &str) -> Option<Self> {
        StandardField::ALL
            .into_iter()
            .find(|field| field.frame_ids().contains(&frame_id))
    }

    /// Look this field up in a parsed frame map
    pub fn lookup<'a>(&self, frames: &'a HashMap<String, String>) -> Option<&'a str> {
        self.frame_ids()
            .iter()
            .find_map(|id| frames.get(*id))
            .map(String::as_str)
    }
}

/// Parse a comma-separated field list such as "title,artist"
///
/// Unknown names are returned in the error so the caller can report them.
pub fn parse_field_list(list: &str) -> Result<Vec<StandardField>, String> {
    list.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| StandardField::parse(name).ok_or_else(|| name.trim().to_string()))
        .collect()
}
