//! Hand-authored description of every township table column.
//!
//! The catalog is not derived from the loaded data; a column may be loaded
//! without an entry here and vice versa.

use crate::models::{ColumnMetadata, MetadataCatalog};
use crate::utils::constants::{MIMU_BASELINE_URL, MIMU_PCODES_URL, ODM_CENSUS_URL};

const fn entry(
    column: &'static str,
    datatype_category: &'static str,
    description: &'static str,
    source_url: &'static str,
) -> ColumnMetadata {
    ColumnMetadata {
        column,
        datatype_category,
        description,
        source_url,
    }
}

static COLUMN_METADATA: [ColumnMetadata; 50] = [
    // identity
    entry("pcode_ts", "id", "Township place code (MIMU Pcode)", MIMU_BASELINE_URL),
    entry("township_name", "id", "Township name (English)", MIMU_BASELINE_URL),
    // general
    entry("pop_total", "general", "Total population of the township", MIMU_BASELINE_URL),
    entry("urban_perc", "general", "Percentage of the population living in urban areas", MIMU_BASELINE_URL),
    // literacy
    entry("literacy_perc_total", "literacy", "Literacy rate of persons aged 15 and over (%)", MIMU_BASELINE_URL),
    entry("literacy_perc_urban", "literacy", "Literacy rate of persons aged 15 and over in urban areas (%)", MIMU_BASELINE_URL),
    entry("literacy_perc_rural", "literacy", "Literacy rate of persons aged 15 and over in rural areas (%)", MIMU_BASELINE_URL),
    // household
    entry("mean_hhsize", "household", "Mean number of persons per conventional household", ODM_CENSUS_URL),
    entry("hh_1", "household", "Number of households with 1 member", ODM_CENSUS_URL),
    entry("hh_2", "household", "Number of households with 2 members", ODM_CENSUS_URL),
    entry("hh_3", "household", "Number of households with 3 members", ODM_CENSUS_URL),
    entry("hh_4", "household", "Number of households with 4 members", ODM_CENSUS_URL),
    entry("hh_5", "household", "Number of households with 5 members", ODM_CENSUS_URL),
    entry("hh_6", "household", "Number of households with 6 members", ODM_CENSUS_URL),
    entry("hh_7", "household", "Number of households with 7 members", ODM_CENSUS_URL),
    entry("hh_8", "household", "Number of households with 8 members", ODM_CENSUS_URL),
    entry("hh_9", "household", "Number of households with 9 or more members", ODM_CENSUS_URL),
    // light source
    entry("light_total", "light", "Total households reporting a main source of lighting", ODM_CENSUS_URL),
    entry("electricity", "light", "Households lit mainly by electricity", ODM_CENSUS_URL),
    entry("kerosene", "light", "Households lit mainly by kerosene", ODM_CENSUS_URL),
    entry("candle", "light", "Households lit mainly by candles", ODM_CENSUS_URL),
    entry("lbattery", "light", "Households lit mainly by battery", ODM_CENSUS_URL),
    entry("generator", "light", "Households lit mainly by a private generator", ODM_CENSUS_URL),
    entry("water", "light", "Households lit mainly by a water mill", ODM_CENSUS_URL),
    entry("solar", "light", "Households lit mainly by solar power", ODM_CENSUS_URL),
    entry("other", "light", "Households lit mainly by another source", ODM_CENSUS_URL),
    // transportation
    entry("trans_t", "transportation", "Total households reporting on means of transport", ODM_CENSUS_URL),
    entry("trans_car", "transportation", "Households owning a car, truck or van", ODM_CENSUS_URL),
    entry("trans_mcyc", "transportation", "Households owning a motorcycle or moped", ODM_CENSUS_URL),
    entry("trans_bicyc", "transportation", "Households owning a bicycle", ODM_CENSUS_URL),
    entry("trans_4wheel", "transportation", "Households owning a 4-wheel tractor", ODM_CENSUS_URL),
    entry("trans_canoe", "transportation", "Households owning a canoe or boat", ODM_CENSUS_URL),
    entry("trans_mboat", "transportation", "Households owning a motor boat", ODM_CENSUS_URL),
    entry("trans_cart", "transportation", "Households owning a bullock cart", ODM_CENSUS_URL),
    // home ownership
    entry("ownshp_t", "ownership", "Total households reporting tenure of housing", ODM_CENSUS_URL),
    entry("ownshp_own", "ownership", "Households living in an owned dwelling", ODM_CENSUS_URL),
    entry("ownshp_rent", "ownership", "Households living in a rented dwelling", ODM_CENSUS_URL),
    entry("ownshp_free", "ownership", "Households living in a dwelling provided free", ODM_CENSUS_URL),
    entry("ownshp_gov", "ownership", "Households living in government quarters", ODM_CENSUS_URL),
    entry("ownshp_com", "ownership", "Households living in private company quarters", ODM_CENSUS_URL),
    entry("ownshp_oth", "ownership", "Households with another tenure arrangement", ODM_CENSUS_URL),
    // communication
    entry("com_t", "communication", "Total households reporting on communication amenities", ODM_CENSUS_URL),
    entry("com_radio", "communication", "Households with a radio", ODM_CENSUS_URL),
    entry("com_tv", "communication", "Households with a television", ODM_CENSUS_URL),
    entry("com_lline", "communication", "Households with a landline phone", ODM_CENSUS_URL),
    entry("com_mob", "communication", "Households with a mobile phone", ODM_CENSUS_URL),
    entry("com_comp", "communication", "Households with a computer", ODM_CENSUS_URL),
    entry("com_int", "communication", "Households with internet access at home", ODM_CENSUS_URL),
    // location
    entry("longitude", "location", "Township centroid longitude, averaged from village coordinates", MIMU_PCODES_URL),
    entry("latitude", "location", "Township centroid latitude, averaged from village coordinates", MIMU_PCODES_URL),
];

/// The process-wide column catalog.
pub static CATALOG: MetadataCatalog = MetadataCatalog::new(&COLUMN_METADATA);

/// Column metadata keyed by output column name: category, description and
/// source URL. Never fails and returns the same entries on every call.
pub fn load_column_metadata() -> MetadataCatalog {
    CATALOG
}
