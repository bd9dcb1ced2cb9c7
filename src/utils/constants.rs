/// Default source file names, as staged in the data directory
pub const GEOCODES_FILE: &str = "Myanmar PCodes Release-VIII_Aug2015 (Villages).csv";
pub const BASELINE_FILE: &str = "BaselineData_Census_Dataset_Township_MIMU_16Jun2016_ENG.xlsx";
pub const HOUSEHOLD_SIZE_FILE: &str = "CensusmeanHHsizetsp.csv";
pub const LIGHT_SOURCE_FILE: &str = "Censussourceoflighttsp.csv";
pub const TRANSPORTATION_FILE: &str = "Censustransportationtsp.csv";
pub const HOME_OWNERSHIP_FILE: &str = "Censusownershipofhousingtsp.csv";
pub const COMMUNICATION_FILE: &str = "Censuscommuniationtsp.csv";

/// Join key shared by every source after renaming
pub const PCODE_COLUMN: &str = "pcode_ts";

/// Geo-code headers (village level file)
pub const GEOCODE_PCODE_HEADER: &str = "TS_Pcode";
pub const GEOCODE_LONGITUDE_HEADER: &str = "Longitude";
pub const GEOCODE_LATITUDE_HEADER: &str = "Latitude";

/// Baseline sheet layout: one header row followed by two non-data rows
pub const BASELINE_HEADER_ROWS: usize = 1;
pub const BASELINE_SKIP_ROWS: usize = 2;

/// Zero-based baseline positions, in output order:
/// pcode_ts, township_name, pop_total, urban_perc,
/// literacy_perc_total, literacy_perc_urban, literacy_perc_rural
pub const BASELINE_POSITIONS: [usize; 7] = [4, 5, 6, 24, 54, 66, 78];

/// Cell contents read as null
pub const NULL_TOKENS: &[&str] = &["", "-", "NA", "N/A", "NaN", "nan", "null", "NULL", "#N/A", ".."];

/// Provenance URLs
pub const MIMU_BASELINE_URL: &str = "http://themimu.info/doc-type/census-baseline-data";
pub const ODM_CENSUS_URL: &str = "https://data.opendevelopmentmekong.net/dataset/2014-myanmar-census";
pub const MIMU_PCODES_URL: &str = "http://themimu.info/place-codes";

/// Environment prefix for layered configuration
pub const ENV_PREFIX: &str = "TOWNSHIP";
