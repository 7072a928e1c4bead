// Shared helpers for byte-level reading and text decoding
pub mod encoding;
pub mod io;
