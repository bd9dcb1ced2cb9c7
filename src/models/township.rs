use super::{Communication, HomeOwnership, HouseholdSize, LightSource, Transportation};
use serde::Serialize;

/// Baseline statistics row, the base of every join.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaselineRecord {
    pub pcode_ts: String,
    pub township_name: Option<String>,
    pub pop_total: Option<f64>,
    pub urban_perc: Option<f64>,
    pub literacy_perc_total: Option<f64>,
    pub literacy_perc_urban: Option<f64>,
    pub literacy_perc_rural: Option<f64>,
}

impl BaselineRecord {
    pub const COLUMNS: [&'static str; 7] = [
        "pcode_ts",
        "township_name",
        "pop_total",
        "urban_perc",
        "literacy_perc_total",
        "literacy_perc_urban",
        "literacy_perc_rural",
    ];

    pub fn new(pcode_ts: impl Into<String>, township_name: Option<String>) -> Self {
        Self {
            pcode_ts: pcode_ts.into(),
            township_name,
            pop_total: None,
            urban_perc: None,
            literacy_perc_total: None,
            literacy_perc_urban: None,
            literacy_perc_rural: None,
        }
    }

    /// Numeric measures in column order, after the two identity columns
    pub fn measures(&self) -> [Option<f64>; 5] {
        [
            self.pop_total,
            self.urban_perc,
            self.literacy_perc_total,
            self.literacy_perc_urban,
            self.literacy_perc_rural,
        ]
    }
}

/// Township centroid averaged from village coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoLocation {
    pub const COLUMNS: [&'static str; 2] = ["longitude", "latitude"];

    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// One merged township row. A `None` section means the source had no row
/// for this township.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TownshipRecord {
    pub baseline: BaselineRecord,
    pub household: Option<HouseholdSize>,
    pub light: Option<LightSource>,
    pub transportation: Option<Transportation>,
    pub ownership: Option<HomeOwnership>,
    pub communication: Option<Communication>,
    pub location: Option<GeoLocation>,
}

impl TownshipRecord {
    pub fn new(baseline: BaselineRecord) -> Self {
        Self {
            baseline,
            household: None,
            light: None,
            transportation: None,
            ownership: None,
            communication: None,
            location: None,
        }
    }

    pub fn pcode_ts(&self) -> &str {
        &self.baseline.pcode_ts
    }

    pub fn township_name(&self) -> Option<&str> {
        self.baseline.township_name.as_deref()
    }

    /// True when every census section found a match
    pub fn is_complete(&self) -> bool {
        self.household.is_some()
            && self.light.is_some()
            && self.transportation.is_some()
            && self.ownership.is_some()
            && self.communication.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_census_sections() {
        let record = TownshipRecord::new(BaselineRecord::new(
            "MMR001001",
            Some("Myitkyina".to_string()),
        ));

        assert_eq!(record.pcode_ts(), "MMR001001");
        assert_eq!(record.township_name(), Some("Myitkyina"));
        assert!(!record.is_complete());
        assert!(record.location.is_none());
    }
}
