//! Repository-wide facts shown on the root resource

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const FIXITY_CHECK_COUNTER: &str = "LowLevelStorageService.fixity-check-counter";
pub const FIXITY_ERROR_COUNTER: &str = "LowLevelStorageService.fixity-error-counter";
pub const FIXITY_REPAIRED_COUNTER: &str = "LowLevelStorageService.fixity-repaired-counter";

/// Read-only snapshot of backend descriptors, cluster settings and counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryEnvironment {
    /// Backend descriptor keys in dotted form, e.g. `jcr.repository.name`
    #[serde(default)]
    pub descriptors: IndexMap<String, String>,

    /// Cluster configuration when the repository is clustered
    #[serde(default)]
    pub cluster: Option<IndexMap<String, String>>,

    /// Named operational counters
    #[serde(default)]
    pub counters: IndexMap<String, i64>,
}

impl RepositoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_descriptor(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.descriptors.insert(key.into(), value.into());
        self
    }

    pub fn with_cluster_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cluster
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_counter(mut self, name: impl Into<String>, value: i64) -> Self {
        self.counters.insert(name.into(), value);
        self
    }

    pub fn counter(&self, name: &str) -> Option<i64> {
        self.counters.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let env = RepositoryEnvironment::new()
            .with_descriptor("jcr.repository.name", "repo")
            .with_counter(FIXITY_ERROR_COUNTER, 2);
        assert!(env.cluster.is_none());
        assert_eq!(env.counter(FIXITY_ERROR_COUNTER), Some(2));
        assert_eq!(env.counter(FIXITY_CHECK_COUNTER), None);

        let env = env.with_cluster_entry("clusterName", "c1");
        assert_eq!(env.cluster.unwrap().get("clusterName").map(String::as_str), Some("c1"));
    }

    #[test]
    fn test_yaml_defaults() {
        let env: RepositoryEnvironment = serde_yaml::from_str("counters: {a: 1}").unwrap();
        assert!(env.descriptors.is_empty());
        assert_eq!(env.counter("a"), Some(1));
    }
}
