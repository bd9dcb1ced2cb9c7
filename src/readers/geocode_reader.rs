use super::source::{csv_reader, parse_number, read_source_text, record_line, resolve_columns};
use crate::error::Result;
use crate::models::{GeoLocation, SourceKind};
use crate::utils::constants::{
    GEOCODE_LATITUDE_HEADER, GEOCODE_LONGITUDE_HEADER, GEOCODE_PCODE_HEADER,
};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
struct CoordinateSum {
    longitude: f64,
    latitude: f64,
    villages: usize,
}

/// Reads the village-level place code file and averages coordinates per
/// township.
pub struct GeocodeReader;

impl GeocodeReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read_locations(&self, path: &Path) -> Result<HashMap<String, GeoLocation>> {
        let table = SourceKind::Geocodes.display_name();
        let text = read_source_text(path)?;
        let mut reader = csv_reader(&text, true);

        let positions = resolve_columns(
            reader.headers()?,
            &[
                GEOCODE_PCODE_HEADER,
                GEOCODE_LONGITUDE_HEADER,
                GEOCODE_LATITUDE_HEADER,
            ],
            table,
            path,
        )?;

        let mut sums: HashMap<String, CoordinateSum> = HashMap::new();
        let mut villages = 0usize;

        for result in reader.records() {
            let record = result?;
            let line = record_line(&record);
            villages += 1;

            let pcode = record.get(positions[0]).unwrap_or_default();
            if pcode.is_empty() {
                continue;
            }

            let longitude = parse_number(
                record.get(positions[1]).unwrap_or_default(),
                table,
                "longitude",
                line,
            )?;
            let latitude = parse_number(
                record.get(positions[2]).unwrap_or_default(),
                table,
                "latitude",
                line,
            )?;

            if let (Some(longitude), Some(latitude)) = (longitude, latitude) {
                let sum = sums.entry(pcode.to_string()).or_default();
                sum.longitude += longitude;
                sum.latitude += latitude;
                sum.villages += 1;
            }
        }

        debug!(
            path = %path.display(),
            villages,
            townships = sums.len(),
            "Read village place codes"
        );

        Ok(sums
            .into_iter()
            .map(|(pcode, sum)| {
                let count = sum.villages as f64;
                (
                    pcode,
                    GeoLocation::new(sum.longitude / count, sum.latitude / count),
                )
            })
            .collect())
    }
}

impl Default for GeocodeReader {
    fn default() -> Self {
        Self::new()
    }
}
