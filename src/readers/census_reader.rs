use super::source::{csv_reader, parse_number, read_source_text, record_line, resolve_columns};
use crate::error::{ProcessingError, Result};
use crate::models::CensusSection;
use crate::utils::constants::PCODE_COLUMN;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Reads a census extract by header name into sections keyed by `pcode_ts`.
pub struct CensusReader;

impl CensusReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_section<S: CensusSection>(&self, path: &Path) -> Result<HashMap<String, S>> {
        let table = S::SOURCE.display_name();
        let text = read_source_text(path)?;
        let mut reader = csv_reader(&text, true);

        let mut required = Vec::with_capacity(S::COLUMNS.len() + 1);
        required.push(PCODE_COLUMN);
        required.extend_from_slice(S::COLUMNS);
        let positions = resolve_columns(reader.headers()?, &required, table, path)?;

        let mut sections = HashMap::new();
        let mut values = Vec::with_capacity(S::COLUMNS.len());
        let mut skipped = 0usize;

        for result in reader.records() {
            let record = result?;
            let line = record_line(&record);
            let pcode = record.get(positions[0]).unwrap_or_default();
            if pcode.is_empty() {
                skipped += 1;
                continue;
            }

            values.clear();
            for (column, &position) in S::COLUMNS.iter().zip(&positions[1..]) {
                let raw = record.get(position).unwrap_or_default();
                values.push(parse_number(raw, table, *column, line)?);
            }

            if sections
                .insert(pcode.to_string(), S::from_values(&values))
                .is_some()
            {
                return Err(ProcessingError::DuplicateKey {
                    table,
                    pcode: pcode.to_string(),
                });
            }
        }

        if skipped > 0 {
            warn!(table, skipped, "Skipped census rows without a township code");
        }

        debug!(
            table,
            path = %path.display(),
            townships = sections.len(),
            "Read census extract"
        );

        Ok(sections)
    }
}

impl Default for CensusReader {
    fn default() -> Self {
        Self::new()
    }
}
