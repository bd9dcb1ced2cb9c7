pub mod data_merger;
pub mod integrity_checker;
pub mod township_processor;

pub use data_merger::{CensusTables, DataMerger};
pub use integrity_checker::{IntegrityChecker, MergeReport, SourceCoverage};
pub use township_processor::TownshipProcessor;
