use crate::config::JoinPolicy;
use crate::models::{
    BaselineRecord, Communication, GeoLocation, HomeOwnership, HouseholdSize, LightSource,
    SourceKind, TownshipRecord, TownshipTable, Transportation,
};
use std::collections::HashMap;
use tracing::info;

/// Census extracts keyed by `pcode_ts`, ready to join onto the baseline.
#[derive(Debug, Clone, Default)]
pub struct CensusTables {
    pub household: HashMap<String, HouseholdSize>,
    pub light: HashMap<String, LightSource>,
    pub transportation: HashMap<String, Transportation>,
    pub ownership: HashMap<String, HomeOwnership>,
    pub communication: HashMap<String, Communication>,
    /// Present only when coordinates are joined
    pub locations: Option<HashMap<String, GeoLocation>>,
}

impl CensusTables {
    /// Sources joined onto the baseline, in join order
    pub fn joined_sources(&self) -> Vec<SourceKind> {
        let mut sources = SourceKind::CENSUS.to_vec();
        if self.locations.is_some() {
            sources.push(SourceKind::Geocodes);
        }
        sources
    }

    /// Township codes present in one joined source
    pub fn keys(&self, kind: SourceKind) -> Vec<&str> {
        fn keys_of<V>(map: &HashMap<String, V>) -> Vec<&str> {
            map.keys().map(String::as_str).collect()
        }

        match kind {
            SourceKind::HouseholdSize => keys_of(&self.household),
            SourceKind::LightSource => keys_of(&self.light),
            SourceKind::Transportation => keys_of(&self.transportation),
            SourceKind::HomeOwnership => keys_of(&self.ownership),
            SourceKind::Communication => keys_of(&self.communication),
            SourceKind::Geocodes => self.locations.as_ref().map(keys_of).unwrap_or_default(),
            SourceKind::Baseline => Vec::new(),
        }
    }

    pub fn contains(&self, kind: SourceKind, pcode: &str) -> bool {
        match kind {
            SourceKind::HouseholdSize => self.household.contains_key(pcode),
            SourceKind::LightSource => self.light.contains_key(pcode),
            SourceKind::Transportation => self.transportation.contains_key(pcode),
            SourceKind::HomeOwnership => self.ownership.contains_key(pcode),
            SourceKind::Communication => self.communication.contains_key(pcode),
            SourceKind::Geocodes => self
                .locations
                .as_ref()
                .is_some_and(|locations| locations.contains_key(pcode)),
            SourceKind::Baseline => false,
        }
    }
}

/// Joins census sections onto baseline rows by exact `pcode_ts` equality.
pub struct DataMerger {
    policy: JoinPolicy,
}

impl DataMerger {
    pub fn new() -> Self {
        Self {
            policy: JoinPolicy::Left,
        }
    }

    pub fn with_policy(policy: JoinPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> JoinPolicy {
        self.policy
    }

    /// Merge every joined source onto the baseline, keeping baseline order
    pub fn merge(&self, baseline: Vec<BaselineRecord>, tables: &CensusTables) -> TownshipTable {
        let base_rows = baseline.len();
        let include_coordinates = tables.locations.is_some();

        let records: Vec<TownshipRecord> = baseline
            .into_iter()
            .map(|base| self.join_record(base, tables))
            .filter(|record| match self.policy {
                JoinPolicy::Left => true,
                JoinPolicy::Inner => {
                    record.is_complete() && (!include_coordinates || record.location.is_some())
                }
            })
            .collect();

        info!(
            policy = %self.policy,
            base_rows,
            output_rows = records.len(),
            "Merged township sources"
        );

        TownshipTable::new(records, include_coordinates)
    }

    fn join_record(&self, base: BaselineRecord, tables: &CensusTables) -> TownshipRecord {
        let pcode = base.pcode_ts.as_str();
        let household = tables.household.get(pcode).cloned();
        let light = tables.light.get(pcode).cloned();
        let transportation = tables.transportation.get(pcode).cloned();
        let ownership = tables.ownership.get(pcode).cloned();
        let communication = tables.communication.get(pcode).cloned();
        let location = tables
            .locations
            .as_ref()
            .and_then(|locations| locations.get(pcode).copied());

        TownshipRecord {
            baseline: base,
            household,
            light,
            transportation,
            ownership,
            communication,
            location,
        }
    }
}

impl Default for DataMerger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables_for(all: &[&str], household: &[&str]) -> CensusTables {
        let mut tables = CensusTables::default();
        for pcode in household {
            tables
                .household
                .insert(pcode.to_string(), HouseholdSize::default());
        }
        for pcode in all {
            tables.light.insert(pcode.to_string(), LightSource::default());
            tables
                .transportation
                .insert(pcode.to_string(), Transportation::default());
            tables
                .ownership
                .insert(pcode.to_string(), HomeOwnership::default());
            tables
                .communication
                .insert(pcode.to_string(), Communication::default());
        }
        tables
    }

    fn baseline(pcodes: &[&str]) -> Vec<BaselineRecord> {
        pcodes
            .iter()
            .map(|pcode| BaselineRecord::new(*pcode, None))
            .collect()
    }

    #[test]
    fn test_left_join_keeps_every_base_row() {
        let tables = tables_for(&["A", "B", "C"], &["A", "B"]);
        let table = DataMerger::new().merge(baseline(&["A", "B", "C"]), &tables);

        assert_eq!(table.pcodes().collect::<Vec<_>>(), vec!["A", "B", "C"]);
        assert!(table.get("A").unwrap().household.is_some());
        assert!(table.get("C").unwrap().household.is_none());
        assert!(table.get("C").unwrap().light.is_some());
    }

    #[test]
    fn test_inner_join_drops_unmatched_rows() {
        let tables = tables_for(&["A", "B", "C"], &["A", "B"]);
        let table =
            DataMerger::with_policy(JoinPolicy::Inner).merge(baseline(&["A", "B", "C"]), &tables);

        assert_eq!(table.pcodes().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_keys_are_compared_exactly() {
        let tables = tables_for(&["mmr001001", "MMR001002 "], &["mmr001001", "MMR001002 "]);
        let table = DataMerger::new().merge(baseline(&["MMR001001", "MMR001002"]), &tables);

        assert_eq!(table.len(), 2);
        assert!(table.records().iter().all(|r| r.household.is_none()));
    }

    #[test]
    fn test_base_order_is_preserved() {
        let tables = tables_for(&["A", "B", "C"], &["A", "B", "C"]);
        let table = DataMerger::new().merge(baseline(&["C", "A", "B"]), &tables);

        assert_eq!(table.pcodes().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_locations_join_under_policy() {
        let mut tables = tables_for(&["A", "B"], &["A", "B"]);
        let mut locations = HashMap::new();
        locations.insert("A".to_string(), GeoLocation::new(97.0, 25.0));
        tables.locations = Some(locations);

        let left = DataMerger::new().merge(baseline(&["A", "B"]), &tables);
        assert!(left.includes_coordinates());
        assert_eq!(left.get("A").unwrap().location, Some(GeoLocation::new(97.0, 25.0)));
        assert_eq!(left.get("B").unwrap().location, None);

        let inner = DataMerger::with_policy(JoinPolicy::Inner).merge(baseline(&["A", "B"]), &tables);
        assert_eq!(inner.pcodes().collect::<Vec<_>>(), vec!["A"]);
    }

    #[test]
    fn test_joined_sources() {
        let mut tables = CensusTables::default();
        assert_eq!(tables.joined_sources().len(), 5);

        tables.locations = Some(HashMap::new());
        assert_eq!(tables.joined_sources().last(), Some(&SourceKind::Geocodes));
        assert!(!tables.contains(SourceKind::Geocodes, "A"));
    }
}
