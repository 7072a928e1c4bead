// ID3 metadata handling module
pub mod frames;
pub mod region;
pub mod v2;

pub use frames::{Frame, FrameHeader};
pub use region::FrameRegion;
pub use v2::{Id3v2Header, Id3v2Tag};
