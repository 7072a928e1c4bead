// End-to-end parsing through the public API

use std::io::{self, Cursor, Read};

use id3scan::{parse, parse_with, read_tag, synchsafe, Id3Error, ParseOptions, Utf16Policy};

/// Builds an ID3v2.4 block byte by byte
struct TagBuilder {
    flags: u8,
    body: Vec<u8>,
    size: Option<u32>,
}

impl TagBuilder {
    fn new() -> Self {
        TagBuilder {
            flags: 0,
            body: Vec::new(),
            size: None,
        }
    }

    fn flags(mut self, flags: u8) -> Self {
        self.flags = flags;
        self
    }

    fn declared_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    fn frame(mut self, id: &[u8; 4], payload: &[u8]) -> Self {
        self.body.extend_from_slice(id);
        self.body.extend_from_slice(&encode_synchsafe(payload.len() as u32));
        self.body.extend_from_slice(&[0, 0]);
        self.body.extend_from_slice(payload);
        self
    }

    fn build(self) -> Vec<u8> {
        let size = self.size.unwrap_or(self.body.len() as u32);
        let mut bytes = b"ID3\x04\x00".to_vec();
        bytes.push(self.flags);
        bytes.extend_from_slice(&encode_synchsafe(size));
        bytes.extend_from_slice(&self.body);
        bytes
    }
}

fn encode_synchsafe(n: u32) -> [u8; 4] {
    [
        ((n >> 21) & 0x7F) as u8,
        ((n >> 14) & 0x7F) as u8,
        ((n >> 7) & 0x7F) as u8,
        (n & 0x7F) as u8,
    ]
}

#[test]
fn synchsafe_reference_values() {
    assert_eq!(synchsafe(&[0x00, 0x00, 0x00, 0x00]), 0);
    assert_eq!(synchsafe(&[0x00, 0x00, 0x02, 0x01]), 257);
    assert_eq!(synchsafe(&[0x7F, 0x7F, 0x7F, 0x7F]), (1 << 28) - 1);
    assert_eq!(synchsafe(&encode_synchsafe(1_000_000)), 1_000_000);
}

#[test]
fn empty_block_yields_empty_map() {
    let bytes = TagBuilder::new().build();
    let frames = parse(&mut Cursor::new(bytes)).unwrap();
    assert!(frames.is_empty());
}

#[test]
fn non_id3_input_is_rejected() {
    let mut reader = Cursor::new(b"RIFF\x00\x00\x00\x00WAVEfmt ".to_vec());
    assert!(matches!(parse(&mut reader), Err(Id3Error::MarkerNotFound)));

    let mut reader = Cursor::new(Vec::new());
    assert!(matches!(parse(&mut reader), Err(Id3Error::TruncatedHeader { got: 0 })));
}

#[test]
fn utf8_frame_is_trimmed() {
    let bytes = TagBuilder::new().frame(b"TIT2", b"\x03Hi\x00").build();
    let frames = parse(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames["TIT2"], "Hi");
}

#[test]
fn latin1_frame_is_trimmed() {
    let bytes = TagBuilder::new().frame(b"TPE1", b"\x00A\x00").build();
    let frames = parse(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(frames["TPE1"], "A");
}

#[test]
fn several_frames() {
    let bytes = TagBuilder::new()
        .frame(b"TIT2", b"\x03Song\x00")
        .frame(b"TPE1", b"\x00Band\x00")
        .frame(b"TALB", "\x03Caf\u{e9}\x00".as_bytes())
        .frame(b"PRIV", b"owner")
        .build();
    let frames = parse(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(frames["TIT2"], "Song");
    assert_eq!(frames["TPE1"], "Band");
    assert_eq!(frames["TALB"], "Café");
    // Unknown indicator: the payload comes back untouched
    assert_eq!(frames["PRIV"], "owner");
}

#[test]
fn duplicate_ids_keep_last() {
    let bytes = TagBuilder::new()
        .frame(b"TIT2", b"\x03First\x00")
        .frame(b"TIT2", b"\x03Second\x00")
        .build();
    let frames = parse(&mut Cursor::new(bytes)).unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames["TIT2"], "Second");
}

#[test]
fn footer_consumes_ten_bytes() {
    let mut bytes = TagBuilder::new()
        .flags(0x10)
        .frame(b"TIT2", b"\x03Hi\x00")
        .build();
    bytes.extend_from_slice(b"whatever!!");
    bytes.extend_from_slice(b"AUDIO");

    let mut reader = Cursor::new(bytes);
    let frames = parse(&mut reader).unwrap();
    assert_eq!(frames["TIT2"], "Hi");
    assert_eq!(reader.position(), 10 + 14 + 10);
}

#[test]
fn footer_short_is_error() {
    let mut bytes = TagBuilder::new()
        .flags(0x10)
        .frame(b"TIT2", b"\x03Hi\x00")
        .build();
    bytes.extend_from_slice(b"3DI");
    assert!(matches!(parse(&mut Cursor::new(bytes)), Err(Id3Error::TruncatedFooter)));
}

#[test]
fn oversized_payload_is_truncation() {
    let mut bytes = b"ID3\x04\x00\x00\x00\x00\x00\x20".to_vec();
    bytes.extend_from_slice(b"TIT2\x00\x00\x01\x00\x00\x00");
    bytes.extend_from_slice(b"\x03short\x00");

    let err = parse(&mut Cursor::new(bytes)).unwrap_err();
    assert!(err.is_truncation());
    assert!(matches!(err, Id3Error::TruncatedPayload { declared: 128, .. }));
}

#[test]
fn block_stops_at_declared_size() {
    // Only the first frame fits inside the declared size
    let bytes = TagBuilder::new()
        .frame(b"TIT2", b"\x03Hi\x00")
        .frame(b"TPE1", b"\x03Them\x00")
        .declared_size(14)
        .build();

    let mut reader = Cursor::new(bytes);
    let frames = parse(&mut reader).unwrap();
    assert_eq!(frames.len(), 1);
    assert!(!frames.contains_key("TPE1"));
    assert_eq!(reader.position(), 24);
}

#[test]
fn extended_header_is_skipped() {
    let mut body = vec![0, 0, 0, 10, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06];
    let frame = TagBuilder::new().frame(b"TRCK", b"\x003/12\x00").build();
    body.extend_from_slice(&frame[10..]);

    let mut bytes = b"ID3\x04\x00\x40".to_vec();
    bytes.extend_from_slice(&encode_synchsafe(body.len() as u32));
    bytes.extend_from_slice(&body);

    let tag = read_tag(&mut Cursor::new(bytes), &ParseOptions::default()).unwrap();
    assert!(tag.header.has_extended_header());
    assert_eq!(tag.frames["TRCK"], "3/12");
}

#[test]
fn utf16_frames_follow_policy() {
    let bytes = TagBuilder::new()
        .frame(b"TIT2", &[0x01, 0xFE, 0xFF, 0x00, b'H', 0x00, b'i', 0x00, 0x00])
        .build();

    let frames = parse(&mut Cursor::new(bytes.clone())).unwrap();
    assert_eq!(frames["TIT2"], "Hi");

    let options = ParseOptions {
        utf16: Utf16Policy::Raw,
        ..ParseOptions::default()
    };
    let frames = parse_with(&mut Cursor::new(bytes), &options).unwrap();
    assert!(frames["TIT2"].starts_with('\u{1}'));
}

#[test]
fn failed_parse_returns_no_frames() {
    let mut bytes = TagBuilder::new()
        .frame(b"TIT2", b"\x03Hi\x00")
        .declared_size(30)
        .build();
    bytes.extend_from_slice(b"TPE");

    let result = parse(&mut Cursor::new(bytes));
    assert!(matches!(result, Err(Id3Error::TruncatedFrameHeader { got: 3 })));
}

#[test]
fn header_reports_version() {
    let bytes = b"ID3\x03\x00\x80\x00\x00\x00\x00".to_vec();
    let tag = read_tag(&mut Cursor::new(bytes), &ParseOptions::default()).unwrap();
    assert_eq!(tag.header.version_string(), "2.3.0");
    assert!(tag.header.is_unsynchronised());
    assert!(tag.frames.is_empty());
}

/// Serves `data` until `fail_at` bytes have been handed out, then errors
struct FailingReader {
    data: Cursor<Vec<u8>>,
    fail_at: u64,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let pos = self.data.position();
        if pos >= self.fail_at {
            return Err(io::Error::new(io::ErrorKind::Other, "disk read failed"));
        }
        let allowed = ((self.fail_at - pos) as usize).min(buf.len());
        self.data.read(&mut buf[..allowed])
    }
}

#[test]
fn io_failure_in_frame_region_is_stream_error() {
    let bytes = TagBuilder::new().frame(b"TIT2", b"\x03Hi\x00").build();
    let mut reader = FailingReader {
        data: Cursor::new(bytes),
        fail_at: 12,
    };

    match parse(&mut reader) {
        Err(Id3Error::Stream(e)) => {
            assert_eq!(e.kind(), io::ErrorKind::Other);
            assert_eq!(e.to_string(), "disk read failed");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn io_failure_in_payload_is_stream_error() {
    let bytes = TagBuilder::new().frame(b"TIT2", b"\x03Hello\x00").build();
    let mut reader = FailingReader {
        data: Cursor::new(bytes),
        fail_at: 23,
    };

    let err = parse(&mut reader).unwrap_err();
    assert!(matches!(err, Id3Error::Stream(_)));
    assert!(!err.is_truncation());
}
