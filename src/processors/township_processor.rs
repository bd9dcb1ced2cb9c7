use super::data_merger::{CensusTables, DataMerger};
use super::integrity_checker::{IntegrityChecker, MergeReport};
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::models::{BaselineRecord, SourceKind, TownshipTable};
use crate::readers::{BaselineReader, CensusReader, GeocodeReader};
use crate::utils::progress::ProgressReporter;
use tracing::{info, warn};

/// Reads every source named by a `LoaderConfig` and joins them.
pub struct TownshipProcessor {
    config: LoaderConfig,
}

impl TownshipProcessor {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn load(&self) -> Result<TownshipTable> {
        let (table, _report) = self.load_with_report(None)?;
        Ok(table)
    }

    /// Load the merged table together with its join coverage report
    pub fn load_with_report(
        &self,
        progress: Option<&ProgressReporter>,
    ) -> Result<(TownshipTable, MergeReport)> {
        let (baseline, tables) = self.read_sources(progress)?;

        if let Some(p) = progress {
            p.set_message("Joining sources...");
        }
        let merger = DataMerger::with_policy(self.config.join_policy);
        let table = merger.merge(baseline.clone(), &tables);

        let report =
            IntegrityChecker::new().check(&baseline, &tables, &table, self.config.join_policy);
        for coverage in report.coverage.iter().filter(|c| !c.is_complete()) {
            warn!(
                source = %coverage.source,
                unmatched = coverage.unmatched_base.len(),
                "Baseline townships without a match"
            );
        }

        Ok((table, report))
    }

    /// Read the baseline and every census extract, geo-codes first
    pub fn read_sources(
        &self,
        progress: Option<&ProgressReporter>,
    ) -> Result<(Vec<BaselineRecord>, CensusTables)> {
        let announce = |kind: SourceKind| {
            if let Some(p) = progress {
                p.source(kind);
            }
            self.config.path_for(kind)
        };

        let locations = GeocodeReader::new().read_locations(&announce(SourceKind::Geocodes))?;
        let baseline = BaselineReader::new().read_baseline(&announce(SourceKind::Baseline))?;

        let census = CensusReader::new();
        let tables = CensusTables {
            household: census.read_section(&announce(SourceKind::HouseholdSize))?,
            light: census.read_section(&announce(SourceKind::LightSource))?,
            transportation: census.read_section(&announce(SourceKind::Transportation))?,
            ownership: census.read_section(&announce(SourceKind::HomeOwnership))?,
            communication: census.read_section(&announce(SourceKind::Communication))?,
            locations: self.config.include_coordinates.then_some(locations),
        };

        info!(
            data_dir = %self.config.data_dir.display(),
            townships = baseline.len(),
            "Read township sources"
        );

        Ok((baseline, tables))
    }
}
