//! I/O helpers shared by the reader and the writer.
//!
//! - **Decoding**: `encoding_rs_io` strips a leading byte-order mark and
//!   passes the rest through untouched; every field is then decoded as
//!   strict UTF-8, so a bad byte fails the run instead of being replaced.
//! - **Reader construction**: strict field counts (`flexible(false)`) so a
//!   row that does not match the header is rejected by the parser.
//! - **Card files**: `<uuid>.vcf` naming under the output directory.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use csv::{ByteRecord, StringRecord};
use encoding_rs::UTF_8;
use encoding_rs_io::{DecodeReaderBytes, DecodeReaderBytesBuilder};
use uuid::Uuid;

use crate::error::{ConvertError, Result};

pub const DEFAULT_CSV_DELIMITER: u8 = b';';
pub const CARD_EXTENSION: &str = "vcf";

pub fn utf8_reader<R: Read>(reader: R) -> DecodeReaderBytes<R, Vec<u8>> {
    DecodeReaderBytesBuilder::new()
        .encoding(None)
        .utf8_passthru(true)
        .strip_bom(true)
        .build(reader)
}

pub fn decode_bytes(bytes: &[u8]) -> Option<String> {
    let (text, had_errors) = UTF_8.decode_without_bom_handling(bytes);
    if had_errors {
        None
    } else {
        Some(text.into_owned())
    }
}

/// Decodes every field of `record` as UTF-8.
pub fn decode_record(record: &ByteRecord) -> Result<StringRecord> {
    let line = record.position().map(|pos| pos.line()).unwrap_or(0);
    let mut decoded = StringRecord::with_capacity(record.as_slice().len(), record.len());
    for field in record {
        let text = decode_bytes(field).ok_or(ConvertError::Decode { line })?;
        decoded.push_field(&text);
    }
    Ok(decoded)
}

pub fn open_csv_reader<R>(reader: R, delimiter: u8) -> csv::Reader<R>
where
    R: Read,
{
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .delimiter(delimiter)
        .double_quote(true)
        .flexible(false);
    builder.from_reader(reader)
}

/// Returns a fresh `<uuid>.vcf` path inside `outdir`.
pub fn card_path(outdir: &Path) -> PathBuf {
    outdir.join(format!("{}.{CARD_EXTENSION}", Uuid::new_v4()))
}

/// Writes `contents` as the whole of a new file at `path`.
///
/// No existence check is made; random naming makes a clash negligible.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    let file = File::create(path).map_err(|err| ConvertError::file_access(path, err))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|err| ConvertError::file_access(path, err))
}
