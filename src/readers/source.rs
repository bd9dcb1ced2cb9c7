use crate::error::{ProcessingError, Result};
use crate::utils::constants::NULL_TOKENS;
use encoding_rs::{Encoding, WINDOWS_1252};
use std::borrow::Cow;
use std::path::Path;

/// Read a delimited source file into text.
///
/// A byte order mark selects the encoding. Without one the bytes must be
/// UTF-8, otherwise they are decoded as Windows-1252.
pub fn read_source_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| ProcessingError::SourceRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_source(&bytes).into_owned())
}

pub fn decode_source(bytes: &[u8]) -> Cow<'_, str> {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
        return text;
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => WINDOWS_1252.decode_without_bom_handling(bytes).0,
    }
}

pub fn is_null_token(raw: &str) -> bool {
    NULL_TOKENS.contains(&raw.trim())
}

/// Text cell as-is, or `None` for a null token
pub fn parse_text(raw: &str) -> Option<String> {
    if is_null_token(raw) {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Numeric cell; null tokens are `None`, anything else must parse as a number
pub fn parse_number(
    raw: &str,
    table: &'static str,
    column: &'static str,
    row: usize,
) -> Result<Option<f64>> {
    if is_null_token(raw) {
        return Ok(None);
    }

    raw.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ProcessingError::InvalidValue {
            table,
            column,
            row,
            value: raw.to_string(),
        })
}

/// Locate each required header, failing with every missing name at once
pub fn resolve_columns(
    headers: &csv::StringRecord,
    required: &[&str],
    table: &'static str,
    path: &Path,
) -> Result<Vec<usize>> {
    let mut positions = Vec::with_capacity(required.len());
    let mut missing = Vec::new();

    for name in required {
        match headers.iter().position(|header| header == *name) {
            Some(position) => positions.push(position),
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(ProcessingError::SchemaMismatch {
            table,
            path: path.to_path_buf(),
            missing,
        });
    }

    Ok(positions)
}

/// CSV reader over decoded text with trimmed headers
pub fn csv_reader(text: &str, has_headers: bool) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes())
}

/// One-based line of a record, for error messages
pub fn record_line(record: &csv::StringRecord) -> usize {
    record
        .position()
        .map(|position| position.line() as usize)
        .unwrap_or_default()
}
