pub mod baseline_reader;
pub mod census_reader;
pub mod geocode_reader;
pub mod source;

pub use baseline_reader::BaselineReader;
pub use census_reader::CensusReader;
pub use geocode_reader::GeocodeReader;
