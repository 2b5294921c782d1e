//! Projection configuration
//!
//! ```yaml
//! base_uri: http://localhost:8080/rest
//! namespace_aliases:
//!   fedora: fcr
//! reserved_namespace: jcr
//! options:
//!   include_inbound_references: true
//!   include_versions: true
//! ```

use crate::translator::{HashLink, IdentifierTranslator, NamespaceLink, PrefixLink, TranslationError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Translator error: {0}")]
    Translator(#[from] TranslationError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Which facets a projection includes
///
/// Mirrors the preferences a client can express when asking for a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionOptions {
    /// `ldp:contains` for each child
    pub include_containment: bool,
    /// Forward and inverse LDP membership
    pub include_membership: bool,
    /// Triples from other resources pointing here
    pub include_inbound_references: bool,
    /// `fedora:created`, `fedora:lastModified` and friends
    pub include_server_managed: bool,
    pub include_versions: bool,
    pub include_namespaces: bool,
    /// `fedora:writable` probe
    pub include_writable: bool,
    /// Types and properties of each child, inline
    pub embed_children: bool,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            include_containment: true,
            include_membership: true,
            include_inbound_references: false,
            include_server_managed: true,
            include_versions: false,
            include_namespaces: false,
            include_writable: true,
            embed_children: false,
        }
    }
}

/// Projection engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// URI every subject is rooted at
    pub base_uri: String,
    /// Internal → external prefix renames applied to path segments
    pub namespace_aliases: IndexMap<String, String>,
    /// Prefix kept out of the namespace catalog
    pub reserved_namespace: String,
    pub options: ProjectionOptions,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        let mut namespace_aliases = IndexMap::new();
        namespace_aliases.insert("fedora".to_string(), "fcr".to_string());
        Self {
            base_uri: "http://localhost:8080/rest".to_string(),
            namespace_aliases,
            reserved_namespace: "jcr".to_string(),
            options: ProjectionOptions::default(),
        }
    }
}

impl ProjectionConfig {
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..Self::default()
        }
    }

    pub fn with_options(mut self, options: ProjectionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        info!("Loaded projection config from {} (base URI {})", path.display(), config.base_uri);
        Ok(config)
    }

    /// Translator chain: namespace aliases, hash fragments, base URI
    pub fn translator(&self) -> ConfigResult<IdentifierTranslator> {
        Ok(IdentifierTranslator::from_links(vec![
            Box::new(NamespaceLink::new(self.namespace_aliases.clone())?),
            Box::new(HashLink),
            Box::new(PrefixLink::new(&self.base_uri)?),
        ]))
    }
}
