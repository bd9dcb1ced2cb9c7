use crate::error::Result;
use crate::models::SourceKind;
use crate::utils::constants::ENV_PREFIX;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How census tables are attached to the baseline table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinPolicy {
    /// Keep every baseline township; unmatched sections are null
    #[default]
    Left,
    /// Keep only townships present in every joined source
    Inner,
}

impl std::str::FromStr for JoinPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(JoinPolicy::Left),
            "inner" => Ok(JoinPolicy::Inner),
            other => Err(format!("unknown join policy '{}' (expected left or inner)", other)),
        }
    }
}

impl std::fmt::Display for JoinPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JoinPolicy::Left => write!(f, "left"),
            JoinPolicy::Inner => write!(f, "inner"),
        }
    }
}

/// Source file names, relative to the data directory unless absolute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFiles {
    pub geocodes: PathBuf,
    pub baseline: PathBuf,
    pub household_size: PathBuf,
    pub light_source: PathBuf,
    pub transportation: PathBuf,
    pub home_ownership: PathBuf,
    pub communication: PathBuf,
}

impl SourceFiles {
    pub fn get(&self, kind: SourceKind) -> &Path {
        match kind {
            SourceKind::Geocodes => &self.geocodes,
            SourceKind::Baseline => &self.baseline,
            SourceKind::HouseholdSize => &self.household_size,
            SourceKind::LightSource => &self.light_source,
            SourceKind::Transportation => &self.transportation,
            SourceKind::HomeOwnership => &self.home_ownership,
            SourceKind::Communication => &self.communication,
        }
    }
}

impl Default for SourceFiles {
    fn default() -> Self {
        let name = |kind: SourceKind| PathBuf::from(kind.default_file_name());
        Self {
            geocodes: name(SourceKind::Geocodes),
            baseline: name(SourceKind::Baseline),
            household_size: name(SourceKind::HouseholdSize),
            light_source: name(SourceKind::LightSource),
            transportation: name(SourceKind::Transportation),
            home_ownership: name(SourceKind::HomeOwnership),
            communication: name(SourceKind::Communication),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    pub data_dir: PathBuf,
    pub join_policy: JoinPolicy,
    pub include_coordinates: bool,
    pub files: SourceFiles,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            join_policy: JoinPolicy::default(),
            include_coordinates: false,
            files: SourceFiles::default(),
        }
    }
}

impl LoaderConfig {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_join_policy(mut self, join_policy: JoinPolicy) -> Self {
        self.join_policy = join_policy;
        self
    }

    pub fn with_coordinates(mut self, include_coordinates: bool) -> Self {
        self.include_coordinates = include_coordinates;
        self
    }

    /// Layer defaults, an optional config file, then `TOWNSHIP_*` variables
    pub fn load(file: Option<&Path>) -> Result<Self> {
        Self::load_layers(file, Self::environment())
    }

    /// `TOWNSHIP_JOIN_POLICY`, `TOWNSHIP_FILES__BASELINE`, ...
    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
    }

    fn load_layers(file: Option<&Path>, environment: config::Environment) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let settings = builder.add_source(environment).build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Resolved location of a source file
    pub fn path_for(&self, kind: SourceKind) -> PathBuf {
        self.data_dir.join(self.files.get(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_paths_use_literal_names() {
        let config = LoaderConfig::default();

        assert_eq!(config.join_policy, JoinPolicy::Left);
        assert_eq!(
            config.path_for(SourceKind::Communication),
            Path::new(".").join("Censuscommuniationtsp.csv")
        );
    }

    #[test]
    fn test_join_policy_from_str() {
        assert_eq!("Inner".parse::<JoinPolicy>(), Ok(JoinPolicy::Inner));
        assert_eq!("left".parse::<JoinPolicy>(), Ok(JoinPolicy::Left));
        assert!("outer".parse::<JoinPolicy>().is_err());
    }

    #[test]
    fn test_load_from_toml_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_dir = \"/srv/census\"")?;
        writeln!(file, "join_policy = \"inner\"")?;
        writeln!(file, "[files]")?;
        writeln!(file, "baseline = \"baseline.csv\"")?;

        let config = LoaderConfig::load(Some(file.path()))?;

        assert_eq!(config.data_dir, PathBuf::from("/srv/census"));
        assert_eq!(config.join_policy, JoinPolicy::Inner);
        assert_eq!(config.files.baseline, PathBuf::from("baseline.csv"));
        // untouched keys keep their defaults
        assert_eq!(
            config.files.household_size,
            PathBuf::from("CensusmeanHHsizetsp.csv")
        );
        assert!(!config.include_coordinates);
        Ok(())
    }

    fn variables(pairs: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        LoaderConfig::environment().source(Some(map))
    }

    #[test]
    fn test_environment_overrides_defaults() -> Result<()> {
        let config = LoaderConfig::load_layers(
            None,
            variables(&[
                ("TOWNSHIP_JOIN_POLICY", "inner"),
                ("TOWNSHIP_INCLUDE_COORDINATES", "true"),
                ("TOWNSHIP_FILES__BASELINE", "baseline.csv"),
                ("UNRELATED_JOIN_POLICY", "left"),
            ]),
        )?;

        assert_eq!(config.join_policy, JoinPolicy::Inner);
        assert!(config.include_coordinates);
        assert_eq!(config.files.baseline, PathBuf::from("baseline.csv"));
        assert_eq!(config.data_dir, PathBuf::from("."));
        Ok(())
    }

    #[test]
    fn test_environment_wins_over_file() -> Result<()> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(file, "data_dir = \"/srv/census\"")?;
        writeln!(file, "join_policy = \"inner\"")?;

        let config = LoaderConfig::load_layers(
            Some(file.path()),
            variables(&[("TOWNSHIP_JOIN_POLICY", "left")]),
        )?;

        assert_eq!(config.join_policy, JoinPolicy::Left);
        assert_eq!(config.data_dir, PathBuf::from("/srv/census"));
        Ok(())
    }
}
