use super::{
    BaselineRecord, CensusSection, Communication, GeoLocation, HomeOwnership, HouseholdSize,
    LightSource, TownshipRecord, Transportation,
};
use crate::error::Result;
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Number of leading text columns (`pcode_ts`, `township_name`)
const TEXT_COLUMNS: usize = 2;

/// A single value of the flattened township table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Null,
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Null, Cell::Number)
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map_or(Cell::Null, Cell::Text)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(value) => write!(f, "{}", value),
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Null => write!(f, "null"),
        }
    }
}

/// The merged township dataset: ordered columns over base-ordered rows.
#[derive(Debug, Clone, PartialEq)]
pub struct TownshipTable {
    columns: Vec<&'static str>,
    records: Vec<TownshipRecord>,
    include_coordinates: bool,
    index: HashMap<String, usize>,
}

impl TownshipTable {
    pub fn new(records: Vec<TownshipRecord>, include_coordinates: bool) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.pcode_ts().to_string(), i))
            .collect();

        Self {
            columns: Self::canonical_columns(include_coordinates),
            records,
            include_coordinates,
            index,
        }
    }

    /// Output column order: baseline, household, light, transportation,
    /// ownership, communication, then optional coordinates
    pub fn canonical_columns(include_coordinates: bool) -> Vec<&'static str> {
        let mut columns: Vec<&'static str> = BaselineRecord::COLUMNS.to_vec();
        columns.extend_from_slice(HouseholdSize::COLUMNS);
        columns.extend_from_slice(LightSource::COLUMNS);
        columns.extend_from_slice(Transportation::COLUMNS);
        columns.extend_from_slice(HomeOwnership::COLUMNS);
        columns.extend_from_slice(Communication::COLUMNS);
        if include_coordinates {
            columns.extend_from_slice(&GeoLocation::COLUMNS);
        }
        columns
    }

    pub fn column_names(&self) -> &[&'static str] {
        &self.columns
    }

    pub fn includes_coordinates(&self) -> bool {
        self.include_coordinates
    }

    pub fn records(&self) -> &[TownshipRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, pcode: &str) -> Option<&TownshipRecord> {
        self.index.get(pcode).map(|&i| &self.records[i])
    }

    pub fn pcodes(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(TownshipRecord::pcode_ts)
    }

    /// Flattened values of row `i`, aligned with `column_names()`
    pub fn row(&self, i: usize) -> Option<Vec<Cell>> {
        self.records
            .get(i)
            .map(|record| record_cells(record, self.include_coordinates))
    }

    /// All values of one column, or `None` for an unknown column name
    pub fn column(&self, name: &str) -> Option<Vec<Cell>> {
        let position = self.columns.iter().position(|c| *c == name)?;
        Some(
            self.records
                .iter()
                .map(|record| {
                    record_cells(record, self.include_coordinates).swap_remove(position)
                })
                .collect(),
        )
    }

    /// Arrow view of the table: Utf8 identity columns, nullable Float64 measures
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let fields: Vec<Field> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i < TEXT_COLUMNS {
                    Field::new(*name, DataType::Utf8, i != 0)
                } else {
                    Field::new(*name, DataType::Float64, true)
                }
            })
            .collect();
        let schema = Arc::new(Schema::new(fields));

        let rows: Vec<Vec<Cell>> = self
            .records
            .iter()
            .map(|record| record_cells(record, self.include_coordinates))
            .collect();

        let arrays: Vec<ArrayRef> = (0..self.columns.len())
            .map(|i| -> ArrayRef {
                if i < TEXT_COLUMNS {
                    let values: Vec<Option<&str>> = rows.iter().map(|row| row[i].as_text()).collect();
                    Arc::new(StringArray::from(values))
                } else {
                    let values: Vec<Option<f64>> =
                        rows.iter().map(|row| row[i].as_number()).collect();
                    Arc::new(Float64Array::from(values))
                }
            })
            .collect();

        Ok(RecordBatch::try_new(schema, arrays)?)
    }
}

fn section_cells<S: CensusSection>(section: Option<&S>) -> Vec<Cell> {
    match section {
        Some(section) => section.values().into_iter().map(Cell::from).collect(),
        None => vec![Cell::Null; S::COLUMNS.len()],
    }
}

fn record_cells(record: &TownshipRecord, include_coordinates: bool) -> Vec<Cell> {
    let baseline = &record.baseline;
    let mut cells = vec![
        Cell::Text(baseline.pcode_ts.clone()),
        Cell::from(baseline.township_name.clone()),
    ];
    cells.extend(baseline.measures().into_iter().map(Cell::from));
    cells.extend(section_cells(record.household.as_ref()));
    cells.extend(section_cells(record.light.as_ref()));
    cells.extend(section_cells(record.transportation.as_ref()));
    cells.extend(section_cells(record.ownership.as_ref()));
    cells.extend(section_cells(record.communication.as_ref()));
    if include_coordinates {
        match record.location {
            Some(location) => {
                cells.push(Cell::Number(location.longitude));
                cells.push(Cell::Number(location.latitude));
            }
            None => cells.extend([Cell::Null, Cell::Null]),
        }
    }
    cells
}
