use crate::error::Result;
use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use std::sync::Arc;

/// Description of one output column of the township table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnMetadata {
    pub column: &'static str,
    pub datatype_category: &'static str,
    pub description: &'static str,
    pub source_url: &'static str,
}

/// Read-only view over the static column catalog, in documented order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataCatalog {
    entries: &'static [ColumnMetadata],
}

impl MetadataCatalog {
    pub const fn new(entries: &'static [ColumnMetadata]) -> Self {
        Self { entries }
    }

    pub fn get(&self, column: &str) -> Option<&'static ColumnMetadata> {
        self.entries.iter().find(|entry| entry.column == column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static ColumnMetadata> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &'static [ColumnMetadata] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sharing a category tag, e.g. "household"
    pub fn by_category<'a>(
        &self,
        category: &'a str,
    ) -> impl Iterator<Item = &'static ColumnMetadata> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.datatype_category == category)
    }

    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let schema = Arc::new(Schema::new(vec![
            Field::new("column", DataType::Utf8, false),
            Field::new("datatype_category", DataType::Utf8, false),
            Field::new("description", DataType::Utf8, false),
            Field::new("source_url", DataType::Utf8, false),
        ]));

        let column = |f: fn(&ColumnMetadata) -> &'static str| -> ArrayRef {
            Arc::new(StringArray::from(
                self.entries.iter().map(f).collect::<Vec<&str>>(),
            ))
        };

        let batch = RecordBatch::try_new(
            schema,
            vec![
                column(|e| e.column),
                column(|e| e.datatype_category),
                column(|e| e.description),
                column(|e| e.source_url),
            ],
        )?;

        Ok(batch)
    }
}

impl IntoIterator for MetadataCatalog {
    type Item = &'static ColumnMetadata;
    type IntoIter = std::slice::Iter<'static, ColumnMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
