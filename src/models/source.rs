use crate::utils::constants::{
    BASELINE_FILE, COMMUNICATION_FILE, GEOCODES_FILE, HOME_OWNERSHIP_FILE, HOUSEHOLD_SIZE_FILE,
    LIGHT_SOURCE_FILE, MIMU_BASELINE_URL, MIMU_PCODES_URL, ODM_CENSUS_URL, TRANSPORTATION_FILE,
};
use serde::{Deserialize, Serialize};

/// The independently published tables that feed the township dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Geocodes,
    Baseline,
    HouseholdSize,
    LightSource,
    Transportation,
    HomeOwnership,
    Communication,
}

impl SourceKind {
    /// Census extracts joined onto the baseline, in join order
    pub const CENSUS: [SourceKind; 5] = [
        SourceKind::HouseholdSize,
        SourceKind::LightSource,
        SourceKind::Transportation,
        SourceKind::HomeOwnership,
        SourceKind::Communication,
    ];

    pub fn default_file_name(&self) -> &'static str {
        match self {
            SourceKind::Geocodes => GEOCODES_FILE,
            SourceKind::Baseline => BASELINE_FILE,
            SourceKind::HouseholdSize => HOUSEHOLD_SIZE_FILE,
            SourceKind::LightSource => LIGHT_SOURCE_FILE,
            SourceKind::Transportation => TRANSPORTATION_FILE,
            SourceKind::HomeOwnership => HOME_OWNERSHIP_FILE,
            SourceKind::Communication => COMMUNICATION_FILE,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::Geocodes => "geo-codes",
            SourceKind::Baseline => "baseline",
            SourceKind::HouseholdSize => "household size",
            SourceKind::LightSource => "light source",
            SourceKind::Transportation => "transportation",
            SourceKind::HomeOwnership => "home ownership",
            SourceKind::Communication => "communication",
        }
    }

    pub fn source_url(&self) -> &'static str {
        match self {
            SourceKind::Geocodes => MIMU_PCODES_URL,
            SourceKind::Baseline => MIMU_BASELINE_URL,
            _ => ODM_CENSUS_URL,
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
