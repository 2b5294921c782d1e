//! Version history entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in a resource's version history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    /// Labels in the order they were applied; the first one names the version
    #[serde(default)]
    pub labels: Vec<String>,

    /// When the version was recorded
    pub created: DateTime<Utc>,

    /// Baseline entry every history starts with
    #[serde(default)]
    pub root: bool,
}

impl Version {
    pub fn new(created: DateTime<Utc>) -> Self {
        Version {
            labels: Vec::new(),
            created,
            root: false,
        }
    }

    /// The baseline version of a history
    pub fn root(created: DateTime<Utc>) -> Self {
        Version {
            labels: Vec::new(),
            created,
            root: true,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// The label that names this version
    pub fn primary_label(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_label_is_first() {
        let version = Version::new(Utc::now()).with_label("v1").with_label("alias");
        assert_eq!(version.primary_label(), Some("v1"));
        assert!(Version::root(Utc::now()).primary_label().is_none());
    }
}
