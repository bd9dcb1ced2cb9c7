pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;

pub use catalog::load_column_metadata;
pub use config::{JoinPolicy, LoaderConfig};
pub use error::{ProcessingError, Result};
pub use models::{MetadataCatalog, TownshipTable};

/// Load and join every township source from the current working directory,
/// using the literal source file names and a left join onto the baseline.
pub fn load_township_data() -> Result<TownshipTable> {
    processors::TownshipProcessor::new(LoaderConfig::default()).load()
}
