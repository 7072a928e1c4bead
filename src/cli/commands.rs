// CLI command implementations
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use anyhow::Context;
use log::debug;
use serde_json::{json, Value};

use id3scan::field_mapping::{parse_field_list, StandardField};
use id3scan::{Id3v2Header, Id3v2Tag, ParseOptions};

use crate::cli::output::OutputFormatter;

/// Read text frames from files, returning how many files failed
pub fn command_read(
    files: &[impl AsRef<Path>],
    fields: Option<&str>,
    options: &ParseOptions,
    formatter: &OutputFormatter,
    writer: &mut impl Write,
) -> anyhow::Result<usize> {
    let fields = match fields {
        Some(list) => Some(
            parse_field_list(list).map_err(|name| anyhow::anyhow!("unknown field: {}", name))?,
        ),
        None => None,
    };

    let mut failures = 0;
    for path in files {
        let path = path.as_ref();
        match read_tag(path, options) {
            Ok(tag) => {
                formatter.print_info(&format!("{}: {} frames", path.display(), tag.frames.len()));
                formatter.output_record(&frames_record(path, &tag, fields.as_deref()), writer)?;
            }
            Err(e) => {
                formatter.print_error(&format!("{}: {:#}", path.display(), e));
                failures += 1;
            }
        }
    }
    Ok(failures)
}

/// Show the tag header of files, returning how many files failed
pub fn command_header(
    files: &[impl AsRef<Path>],
    formatter: &OutputFormatter,
    writer: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut failures = 0;
    for path in files {
        let path = path.as_ref();
        match read_header(path) {
            Ok(header) => formatter.output_record(&header_record(path, &header), writer)?,
            Err(e) => {
                formatter.print_error(&format!("{}: {:#}", path.display(), e));
                failures += 1;
            }
        }
    }
    Ok(failures)
}

fn read_tag(path: &Path, options: &ParseOptions) -> anyhow::Result<Id3v2Tag> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut reader = BufReader::new(file);
    debug!("reading tag from {}", path.display());
    let tag = Id3v2Tag::read(&mut reader, options).context("reading ID3v2 tag")?;
    Ok(tag)
}

fn read_header(path: &Path) -> anyhow::Result<Id3v2Header> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let header = Id3v2Header::read(&mut BufReader::new(file)).context("reading ID3v2 header")?;
    Ok(header)
}

fn frames_record(path: &Path, tag: &Id3v2Tag, fields: Option<&[StandardField]>) -> Value {
    let mut record = json!({
        "file": path.display().to_string(),
        "version": tag.header.version_string(),
    });

    match fields {
        Some(fields) => {
            let selected: serde_json::Map<String, Value> = fields
                .iter()
                .map(|field| (field.as_str().to_string(), json!(field.lookup(&tag.frames))))
                .collect();
            record["fields"] = Value::Object(selected);
        }
        None => {
            // Sorted for stable output
            let frames: BTreeMap<&str, &str> = tag
                .frames
                .iter()
                .map(|(id, text)| (id.as_str(), text.as_str()))
                .collect();
            record["frames"] = json!(frames);
        }
    }
    record
}

fn header_record(path: &Path, header: &Id3v2Header) -> Value {
    json!({
        "file": path.display().to_string(),
        "version": header.version_string(),
        "size": header.size(),
        "footer_marker": header.is_footer(),
        "flags": {
            "unsynchronisation": header.is_unsynchronised(),
            "extended_header": header.has_extended_header(),
            "experimental": header.is_experimental(),
            "footer": header.has_footer(),
        },
    })
}
