use super::source::{csv_reader, parse_number, parse_text, read_source_text};
use crate::error::{ProcessingError, Result};
use crate::models::{BaselineRecord, SourceKind};
use crate::utils::constants::{BASELINE_HEADER_ROWS, BASELINE_POSITIONS, BASELINE_SKIP_ROWS};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::collections::HashSet;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, warn};

const TABLE: &str = "baseline";

/// A cell before conversion, from either a spreadsheet or a delimited file
enum RawCell<'a> {
    Text(&'a str),
    Number(f64),
    Empty,
    Other(String),
}

impl<'a> RawCell<'a> {
    fn from_data(cell: Option<&'a Data>) -> Self {
        match cell {
            None | Some(Data::Empty) | Some(Data::Error(_)) => RawCell::Empty,
            Some(Data::String(value)) => RawCell::Text(value),
            Some(Data::Float(value)) => RawCell::Number(*value),
            Some(Data::Int(value)) => RawCell::Number(*value as f64),
            Some(other) => RawCell::Other(other.to_string()),
        }
    }

    fn text(&self) -> Option<String> {
        match self {
            RawCell::Text(value) => parse_text(value),
            RawCell::Number(value) => Some(value.to_string()),
            RawCell::Other(value) => Some(value.clone()),
            RawCell::Empty => None,
        }
    }

    fn number(&self, column: &'static str, row: usize) -> Result<Option<f64>> {
        match self {
            RawCell::Text(value) => parse_number(value, TABLE, column, row),
            RawCell::Number(value) => Ok(Some(*value)),
            RawCell::Empty => Ok(None),
            RawCell::Other(value) => Err(ProcessingError::InvalidValue {
                table: TABLE,
                column,
                row,
                value: value.clone(),
            }),
        }
    }
}

/// Reads the census baseline sheet by column position.
///
/// The sheet has one header row and two further non-data rows; data starts
/// on the fourth row. Positions are absolute and zero-based.
pub struct BaselineReader {
    header_rows: usize,
    skip_rows: usize,
    positions: [usize; 7],
}

impl BaselineReader {
    pub fn new() -> Self {
        Self {
            header_rows: BASELINE_HEADER_ROWS,
            skip_rows: BASELINE_SKIP_ROWS,
            positions: BASELINE_POSITIONS,
        }
    }

    pub fn with_layout(header_rows: usize, skip_rows: usize, positions: [usize; 7]) -> Self {
        Self {
            header_rows,
            skip_rows,
            positions,
        }
    }

    fn first_data_row(&self) -> usize {
        self.header_rows + self.skip_rows
    }

    fn required_width(&self) -> usize {
        self.positions.iter().max().map_or(0, |max| max + 1)
    }

    /// Read baseline rows in sheet order. `.csv`/`.txt` files are read as
    /// delimited text, anything else as a workbook (first worksheet).
    pub fn read_baseline(&self, path: &Path) -> Result<Vec<BaselineRecord>> {
        let delimited = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("txt"));

        let records = if delimited {
            self.read_delimited(path)?
        } else {
            self.read_workbook(path)?
        };

        debug!(
            path = %path.display(),
            townships = records.len(),
            "Read baseline statistics"
        );

        Ok(records)
    }

    fn read_workbook(&self, path: &Path) -> Result<Vec<BaselineRecord>> {
        let bytes = std::fs::read(path).map_err(|source| ProcessingError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = workbook.worksheet_range_at(0).ok_or_else(|| {
            ProcessingError::MissingData(format!("{} has no worksheets", path.display()))
        })??;

        let Some((end_row, end_col)) = range.end() else {
            return Err(ProcessingError::MissingData(format!(
                "first worksheet of {} is empty",
                path.display()
            )));
        };
        self.check_width(path, end_col as usize + 1)?;

        let mut rows = RowCollector::new(self.first_data_row());
        for row in self.first_data_row()..=end_row as usize {
            let cell = |position: usize| {
                RawCell::from_data(range.get_value((row as u32, position as u32)))
            };
            rows.push(self.build_record(row + 1, cell)?)?;
        }

        Ok(rows.finish())
    }

    fn read_delimited(&self, path: &Path) -> Result<Vec<BaselineRecord>> {
        let text = read_source_text(path)?;
        let mut reader = csv_reader(&text, false);
        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        let width = records.first().map_or(0, |header| header.len());
        self.check_width(path, width)?;

        let mut rows = RowCollector::new(self.first_data_row());
        for (row, record) in records.iter().enumerate().skip(self.first_data_row()) {
            let cell = |position: usize| record.get(position).map_or(RawCell::Empty, RawCell::Text);
            rows.push(self.build_record(row + 1, cell)?)?;
        }

        Ok(rows.finish())
    }

    fn check_width(&self, path: &Path, found: usize) -> Result<()> {
        let expected = self.required_width();
        if found < expected {
            return Err(ProcessingError::ColumnCount {
                table: TABLE,
                path: path.to_path_buf(),
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Build one record; `None` when the row has no township code
    fn build_record<'a>(
        &self,
        row: usize,
        cell: impl Fn(usize) -> RawCell<'a>,
    ) -> Result<Option<BaselineRecord>> {
        let [pcode, name, pop, urban, lit_total, lit_urban, lit_rural] = self.positions;
        let columns = BaselineRecord::COLUMNS;

        let Some(pcode_ts) = cell(pcode).text() else {
            return Ok(None);
        };

        Ok(Some(BaselineRecord {
            pcode_ts,
            township_name: cell(name).text(),
            pop_total: cell(pop).number(columns[2], row)?,
            urban_perc: cell(urban).number(columns[3], row)?,
            literacy_perc_total: cell(lit_total).number(columns[4], row)?,
            literacy_perc_urban: cell(lit_urban).number(columns[5], row)?,
            literacy_perc_rural: cell(lit_rural).number(columns[6], row)?,
        }))
    }
}

impl Default for BaselineReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects baseline rows, rejecting repeated township codes
struct RowCollector {
    records: Vec<BaselineRecord>,
    seen: HashSet<String>,
    skipped: usize,
    first_row: usize,
}

impl RowCollector {
    fn new(first_row: usize) -> Self {
        Self {
            records: Vec::new(),
            seen: HashSet::new(),
            skipped: 0,
            first_row,
        }
    }

    fn push(&mut self, record: Option<BaselineRecord>) -> Result<()> {
        let Some(record) = record else {
            self.skipped += 1;
            return Ok(());
        };

        if !self.seen.insert(record.pcode_ts.clone()) {
            return Err(ProcessingError::DuplicateKey {
                table: SourceKind::Baseline.display_name(),
                pcode: record.pcode_ts,
            });
        }
        self.records.push(record);
        Ok(())
    }

    fn finish(self) -> Vec<BaselineRecord> {
        if self.skipped > 0 {
            warn!(
                skipped = self.skipped,
                first_row = self.first_row + 1,
                "Skipped baseline rows without a township code"
            );
        }
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// A compact layout: code, name, pop, urban, three literacy columns
    fn compact_reader() -> BaselineReader {
        BaselineReader::with_layout(1, 2, [0, 1, 2, 3, 4, 5, 6])
    }

    fn write_compact_sheet(file: &mut NamedTempFile, rows: &[&str]) -> std::io::Result<()> {
        writeln!(file, "Pcode,Township,Population,Urban,Literacy,,")?;
        writeln!(file, ",,Total,%,Total,Urban,Rural")?;
        writeln!(file, "note,,,,,,")?;
        for row in rows {
            writeln!(file, "{}", row)?;
        }
        Ok(())
    }

    #[test]
    fn test_read_compact_csv() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        write_compact_sheet(
            &mut file,
            &[
                "MMR001001,Myitkyina,306949,68.9,94.1,96.9,88.2",
                "MMR001002,Waingmaw,110455,16.2,85.0,-,84.1",
            ],
        )?;

        let records = compact_reader().read_baseline(file.path())?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pcode_ts, "MMR001001");
        assert_eq!(records[0].township_name.as_deref(), Some("Myitkyina"));
        assert_eq!(records[0].pop_total, Some(306949.0));
        assert_eq!(records[1].literacy_perc_urban, None);
        assert_eq!(records[1].literacy_perc_rural, Some(84.1));
        Ok(())
    }

    #[test]
    fn test_default_positions_select_wide_columns() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        let mut row = vec![String::new(); 79];
        for (i, position) in BASELINE_POSITIONS.iter().enumerate() {
            row[*position] = format!("{}", i + 1);
        }
        row[4] = "MMR014001".to_string();
        row[5] = "Hpa-An".to_string();
        let header = vec!["h"; 79].join(",");

        writeln!(file, "{}", header)?;
        writeln!(file, "{}", header)?;
        writeln!(file, "{}", header)?;
        writeln!(file, "{}", row.join(","))?;

        let records = BaselineReader::new().read_baseline(file.path())?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pcode_ts, "MMR014001");
        assert_eq!(records[0].pop_total, Some(3.0));
        assert_eq!(records[0].urban_perc, Some(4.0));
        assert_eq!(records[0].literacy_perc_rural, Some(7.0));
        Ok(())
    }

    #[test]
    fn test_narrow_sheet_is_column_count_error() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        write_compact_sheet(&mut file, &["MMR001001,Myitkyina,1,2,3,4,5"])?;

        let err = BaselineReader::new().read_baseline(file.path()).unwrap_err();
        assert!(matches!(
            err,
            ProcessingError::ColumnCount {
                expected: 79,
                found: 7,
                ..
            }
        ));
        Ok(())
    }

    #[test]
    fn test_rows_without_code_are_skipped() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        write_compact_sheet(
            &mut file,
            &[
                "MMR001001,Myitkyina,1,2,3,4,5",
                ",Source: 2014 Census,,,,,",
            ],
        )?;

        let records = compact_reader().read_baseline(file.path())?;
        assert_eq!(records.len(), 1);
        Ok(())
    }

    #[test]
    fn test_duplicate_code_is_rejected() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile()?;
        write_compact_sheet(
            &mut file,
            &[
                "MMR001001,Myitkyina,1,2,3,4,5",
                "MMR001001,Myitkyina,1,2,3,4,5",
            ],
        )?;

        let err = compact_reader().read_baseline(file.path()).unwrap_err();
        assert!(matches!(err, ProcessingError::DuplicateKey { .. }));
        Ok(())
    }

    #[test]
    fn test_read_xlsx_workbook() -> Result<()> {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile()?;
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let sheet = workbook.add_worksheet();
        let cells: [(u32, u16, &str); 4] = [
            (0, 0, "Pcode"),
            (1, 0, "sub-header"),
            (2, 0, "note"),
            (3, 0, "MMR001001"),
        ];
        for (row, col, value) in cells {
            sheet.write_string(row, col, value).unwrap();
        }
        sheet.write_string(3, 1, "Myitkyina").unwrap();
        sheet.write_number(3, 2, 306949.0).unwrap();
        sheet.write_number(3, 3, 68.9).unwrap();
        sheet.write_string(3, 4, "-").unwrap();
        sheet.write_number(3, 6, 88.2).unwrap();
        workbook.save(file.path()).unwrap();

        let records = compact_reader().read_baseline(file.path())?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pcode_ts, "MMR001001");
        assert_eq!(records[0].pop_total, Some(306949.0));
        assert_eq!(records[0].literacy_perc_total, None);
        assert_eq!(records[0].literacy_perc_urban, None);
        assert_eq!(records[0].literacy_perc_rural, Some(88.2));
        Ok(())
    }
}
