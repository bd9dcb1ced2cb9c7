use super::data_merger::CensusTables;
use crate::config::JoinPolicy;
use crate::models::{BaselineRecord, SourceKind, TownshipTable};
use std::collections::HashSet;
use std::fmt::Write;

/// Join coverage of a single source against the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCoverage {
    pub source: SourceKind,
    pub source_rows: usize,
    /// Baseline townships with no row in this source, in baseline order
    pub unmatched_base: Vec<String>,
    /// Source rows whose township is not in the baseline
    pub orphaned_rows: usize,
}

impl SourceCoverage {
    pub fn is_complete(&self) -> bool {
        self.unmatched_base.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MergeReport {
    pub policy: JoinPolicy,
    pub base_rows: usize,
    pub output_rows: usize,
    pub coverage: Vec<SourceCoverage>,
}

impl MergeReport {
    /// Rows removed by an inner join
    pub fn dropped_rows(&self) -> usize {
        self.base_rows - self.output_rows
    }

    pub fn has_gaps(&self) -> bool {
        self.coverage.iter().any(|c| !c.is_complete())
    }

    pub fn coverage_for(&self, source: SourceKind) -> Option<&SourceCoverage> {
        self.coverage.iter().find(|c| c.source == source)
    }

    pub fn summary(&self) -> String {
        let mut summary = String::new();
        let _ = writeln!(summary, "Township Merge Report");
        let _ = writeln!(summary, "=====================");
        let _ = writeln!(summary, "Join policy: {}", self.policy);
        let _ = writeln!(summary, "Baseline townships: {}", self.base_rows);
        let _ = writeln!(summary, "Output townships: {}", self.output_rows);
        if self.policy == JoinPolicy::Inner {
            let _ = writeln!(summary, "Dropped by inner join: {}", self.dropped_rows());
        }

        let _ = writeln!(summary, "\nSource coverage:");
        for coverage in &self.coverage {
            let _ = writeln!(
                summary,
                "  {:<16} rows={:<6} unmatched={:<4} not-in-baseline={}",
                coverage.source.display_name(),
                coverage.source_rows,
                coverage.unmatched_base.len(),
                coverage.orphaned_rows
            );
            if !coverage.unmatched_base.is_empty() {
                let preview: Vec<&str> = coverage
                    .unmatched_base
                    .iter()
                    .take(5)
                    .map(String::as_str)
                    .collect();
                let more = coverage.unmatched_base.len().saturating_sub(preview.len());
                let _ = write!(summary, "    missing: {}", preview.join(", "));
                if more > 0 {
                    let _ = write!(summary, " (+{} more)", more);
                }
                let _ = writeln!(summary);
            }
        }

        summary
    }
}

/// Reports how well each source lines up with the baseline townships.
/// Never fails a load; mismatches are only counted.
pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(
        &self,
        baseline: &[BaselineRecord],
        tables: &CensusTables,
        output: &TownshipTable,
        policy: JoinPolicy,
    ) -> MergeReport {
        let base_keys: HashSet<&str> = baseline.iter().map(|r| r.pcode_ts.as_str()).collect();

        let coverage = tables
            .joined_sources()
            .into_iter()
            .map(|source| {
                let keys = tables.keys(source);
                let orphaned_rows = keys.iter().filter(|k| !base_keys.contains(*k)).count();
                let unmatched_base = baseline
                    .iter()
                    .filter(|r| !tables.contains(source, &r.pcode_ts))
                    .map(|r| r.pcode_ts.clone())
                    .collect();

                SourceCoverage {
                    source,
                    source_rows: keys.len(),
                    unmatched_base,
                    orphaned_rows,
                }
            })
            .collect();

        MergeReport {
            policy,
            base_rows: baseline.len(),
            output_rows: output.len(),
            coverage,
        }
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Communication, HomeOwnership, HouseholdSize, LightSource, Transportation};
    use crate::processors::DataMerger;

    fn scenario() -> (Vec<BaselineRecord>, CensusTables) {
        let baseline = ["A", "B", "C"]
            .iter()
            .map(|p| BaselineRecord::new(*p, None))
            .collect();

        let mut tables = CensusTables::default();
        for p in ["A", "B"] {
            tables.household.insert(p.to_string(), HouseholdSize::default());
        }
        for p in ["A", "B", "C", "Z"] {
            tables.light.insert(p.to_string(), LightSource::default());
            tables
                .transportation
                .insert(p.to_string(), Transportation::default());
            tables.ownership.insert(p.to_string(), HomeOwnership::default());
            tables
                .communication
                .insert(p.to_string(), Communication::default());
        }
        (baseline, tables)
    }

    #[test]
    fn test_report_counts_unmatched_and_orphaned() {
        let (baseline, tables) = scenario();
        let output = DataMerger::new().merge(baseline.clone(), &tables);
        let report = IntegrityChecker::new().check(&baseline, &tables, &output, JoinPolicy::Left);

        assert_eq!(report.base_rows, 3);
        assert_eq!(report.output_rows, 3);
        assert!(report.has_gaps());

        let household = report.coverage_for(SourceKind::HouseholdSize).unwrap();
        assert_eq!(household.unmatched_base, vec!["C".to_string()]);
        assert_eq!(household.orphaned_rows, 0);

        let light = report.coverage_for(SourceKind::LightSource).unwrap();
        assert!(light.is_complete());
        assert_eq!(light.orphaned_rows, 1);
    }

    #[test]
    fn test_summary_mentions_dropped_rows() {
        let (baseline, tables) = scenario();
        let output = DataMerger::with_policy(JoinPolicy::Inner).merge(baseline.clone(), &tables);
        let report = IntegrityChecker::new().check(&baseline, &tables, &output, JoinPolicy::Inner);

        assert_eq!(report.dropped_rows(), 1);
        let summary = report.summary();
        assert!(summary.contains("Dropped by inner join: 1"));
        assert!(summary.contains("missing: C"));
    }
}
