//! Core identifier types for the repository

use serde::{Deserialize, Serialize};
use std::fmt;

/// Segment that introduces nested hash resources: `/a/#/frag`
pub const HASH_SEGMENT: &str = "#";

/// Name of the description child of a binary: `/file/fedora:metadata`
pub const DESCRIPTION_SEGMENT: &str = "fedora:metadata";

/// Hierarchical path identifying a resource inside the store
///
/// Paths are absolute, `/`-separated and never end with a slash except for
/// the repository root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(from = "String", into = "String")]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() {
            return Self::root();
        }
        let trimmed = if path.len() > 1 {
            path.trim_end_matches('/')
        } else {
            path.as_str()
        };
        if trimmed.starts_with('/') {
            ResourceId(trimmed.to_string())
        } else {
            ResourceId(format!("/{}", trimmed))
        }
    }

    pub fn root() -> Self {
        ResourceId("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Child path with one more segment
    pub fn join(&self, segment: &str) -> Self {
        if self.is_root() {
            ResourceId(format!("/{}", segment))
        } else {
            ResourceId(format!("{}/{}", self.0, segment))
        }
    }

    /// Path of the hash resource `fragment` nested in this resource
    pub fn hash_child(&self, fragment: &str) -> Self {
        self.join(HASH_SEGMENT).join(fragment)
    }

    /// Path of the description paired with a binary at this path
    pub fn description(&self) -> Self {
        self.join(DESCRIPTION_SEGMENT)
    }

    /// Lexical parent path; `None` for the root
    pub fn parent_path(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(Self::root()),
            Some(pos) => Some(ResourceId(self.0[..pos].to_string())),
            None => None,
        }
    }

    /// Last path segment; empty for the root
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or_default()
    }

    /// Whether this path lives under a `#` segment
    pub fn is_hash(&self) -> bool {
        self.segments().any(|s| s == HASH_SEGMENT)
    }

    /// The addressable resource owning this hash resource
    pub fn hash_owner(&self) -> Option<Self> {
        let pos = self.0.find("/#/")?;
        if pos == 0 {
            Some(Self::root())
        } else {
            Some(ResourceId(self.0[..pos].to_string()))
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ResourceId> for String {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl From<&str> for ResourceId {
    fn from(s: &str) -> Self {
        ResourceId::new(s)
    }
}

impl From<String> for ResourceId {
    fn from(s: String) -> Self {
        ResourceId::new(s)
    }
}
