//! Search configuration
//!
//! Loaded from YAML, e.g.
//!
//! ```yaml
//! denylist: ["Enterprise Computer", "Ensign", "Starfleet Officer"]
//! max_expansions: 250000
//! max_depth: 12
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;

/// Generic crew roles that would otherwise turn into high-degree hubs
pub const DEFAULT_DENYLIST: [&str; 3] = ["Enterprise Computer", "Ensign", "Starfleet Officer"];

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Tuning for the chain search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Display names never used as intermediate links (case-insensitive)
    pub denylist: Vec<String>,
    /// Persons the search may expand before giving up
    pub max_expansions: Option<NonZeroUsize>,
    /// Longest chain, counted in events, the search will consider
    pub max_depth: Option<NonZeroUsize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            denylist: DEFAULT_DENYLIST.iter().map(|s| s.to_string()).collect(),
            max_expansions: None,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    /// A config with an empty denylist and no limits
    pub fn unrestricted() -> Self {
        Self {
            denylist: Vec::new(),
            max_expansions: None,
            max_depth: None,
        }
    }

    pub fn with_denylist<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.denylist = names.into_iter().map(Into::into).collect();
        self
    }

    /// Cap the number of persons a search may expand. Zero is rejected.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Result<Self, ConfigError> {
        self.max_expansions = Some(non_zero("max_expansions", max_expansions)?);
        Ok(self)
    }

    /// Cap the chain length, in events. Zero is rejected.
    pub fn with_max_depth(mut self, max_depth: usize) -> Result<Self, ConfigError> {
        self.max_depth = Some(non_zero("max_depth", max_depth)?);
        Ok(self)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.denylist.iter().any(|n| n.trim().is_empty()) {
            return Err(ConfigError::Invalid("denylist entries must not be blank".into()));
        }
        Ok(())
    }

    pub(crate) fn denylist(&self) -> Denylist {
        Denylist::new(&self.denylist)
    }
}

fn non_zero(field: &str, value: usize) -> Result<NonZeroUsize, ConfigError> {
    NonZeroUsize::new(value)
        .ok_or_else(|| ConfigError::Invalid(format!("{} must be at least 1", field)))
}

/// Lowercased denylist, built once per search
#[derive(Debug, Clone, Default)]
pub(crate) struct Denylist {
    names: HashSet<String>,
}

impl Denylist {
    fn new(names: &[String]) -> Self {
        Self {
            names: names.iter().map(|n| n.to_lowercase()).collect(),
        }
    }

    pub(crate) fn is_denied(&self, name: &str) -> bool {
        !self.names.is_empty() && self.names.contains(&name.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_denies_generic_roles() {
        let denylist = SearchConfig::default().denylist();
        assert!(denylist.is_denied("Ensign"));
        assert!(denylist.is_denied("enterprise computer"));
        assert!(!denylist.is_denied("Ensign Ro Laren"));
    }

    #[test]
    fn test_yaml_missing_fields_take_defaults() {
        let config = SearchConfig::from_yaml_str("max_depth: 4\n").unwrap();
        assert_eq!(config.max_depth, NonZeroUsize::new(4));
        assert_eq!(config.max_expansions, None);
        assert_eq!(config.denylist.len(), DEFAULT_DENYLIST.len());
    }

    #[test]
    fn test_yaml_overrides_denylist() {
        let yaml = "denylist: [\"Narrator\"]\nmax_expansions: 100\n";
        let config = SearchConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.denylist, vec!["Narrator".to_string()]);
        assert_eq!(config.max_expansions, NonZeroUsize::new(100));
        assert!(!config.denylist().is_denied("Ensign"));
    }

    #[test]
    fn test_yaml_empty_denylist() {
        let config = SearchConfig::from_yaml_str("denylist: []\n").unwrap();
        assert!(!config.denylist().is_denied("Ensign"));
    }

    #[test]
    fn test_yaml_rejects_unknown_field() {
        let result = SearchConfig::from_yaml_str("max_hops: 3\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_zero_limits_rejected_from_yaml() {
        assert!(SearchConfig::from_yaml_str("max_expansions: 0\n").is_err());
        assert!(SearchConfig::from_yaml_str("max_depth: 0\n").is_err());
    }

    #[test]
    fn test_zero_limits_rejected_by_setters() {
        assert!(matches!(
            SearchConfig::default().with_max_expansions(0),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            SearchConfig::default().with_max_depth(0),
            Err(ConfigError::Invalid(_))
        ));

        let config = SearchConfig::default()
            .with_max_expansions(1)
            .unwrap()
            .with_max_depth(3)
            .unwrap();
        assert_eq!(config.max_expansions, NonZeroUsize::new(1));
        assert_eq!(config.max_depth, NonZeroUsize::new(3));
    }

    #[test]
    fn test_blank_denylist_entry_is_invalid() {
        let result = SearchConfig::from_yaml_str("denylist: [\"  \"]\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("search.yaml");
        std::fs::write(&path, "denylist: [\"Crewman\"]\nmax_depth: 6\n").unwrap();

        let config = SearchConfig::load(&path).unwrap();
        assert_eq!(config.max_depth, NonZeroUsize::new(6));
        assert!(config.denylist().is_denied("CREWMAN"));
    }
}
