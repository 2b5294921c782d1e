//! Prefix registry
//!
//! The registry maps store-side prefixes (`ldp`, `fedora`, ...) to namespace
//! IRIs. It is used in both directions: expanding `prefix:local` names found in
//! the store into predicate/type IRIs, and compacting IRIs back into property
//! names (needed to resolve `ldp:insertedContentRelation`).

use super::vocab::{self, prefix};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Failures resolving a prefixed name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Name is not of the form `prefix:local`
    #[error("Not a prefixed name: {0}")]
    NotPrefixed(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// One `prefix` to namespace IRI binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub prefix: String,
    pub iri: String,
}

impl Namespace {
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Prefix registry, ordered by prefix so iteration is reproducible
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceRegistry {
    prefixes: BTreeMap<String, String>,
}

impl NamespaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the namespaces every repository declares
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add_prefix(prefix::REPOSITORY, vocab::REPOSITORY_NAMESPACE);
        registry.add_prefix(prefix::LDP, vocab::LDP_NAMESPACE);
        registry.add_prefix(prefix::PREMIS, vocab::PREMIS_NAMESPACE);
        registry.add_prefix(prefix::RDF, vocab::RDF_NAMESPACE);
        registry.add_prefix(prefix::XSD, vocab::XSD_NAMESPACE);
        registry.add_prefix(prefix::EBUCORE, vocab::EBUCORE_NAMESPACE);
        registry.add_prefix(prefix::JCR, "http://www.jcp.org/jcr/1.0/");
        registry.add_prefix(prefix::NT, "http://www.jcp.org/jcr/nt/1.0/");
        registry.add_prefix(prefix::MIX, "http://www.jcp.org/jcr/mix/1.0/");
        registry
    }

    /// Add a prefix, replacing any previous binding
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Namespace IRI bound to `prefix`
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// `prefix:local` to an absolute IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        let (prefix, local) = compact_iri
            .split_once(':')
            .ok_or_else(|| PrefixError::NotPrefixed(compact_iri.to_string()))?;
        let iri = self.get_iri(prefix)?;
        Ok(format!("{}{}", iri, local))
    }

    /// Compact an IRI using the longest matching namespace
    pub fn compact(&self, iri: &str) -> Option<String> {
        self.prefixes
            .iter()
            .filter(|(_, namespace_iri)| !namespace_iri.is_empty() && iri.starts_with(namespace_iri.as_str()))
            .max_by_key(|(_, namespace_iri)| namespace_iri.len())
            .map(|(prefix, namespace_iri)| format!("{}:{}", prefix, &iri[namespace_iri.len()..]))
    }

    /// All registered namespaces, ordered by prefix
    pub fn namespaces(&self) -> impl Iterator<Item = Namespace> + '_ {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
    }

    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl FromIterator<Namespace> for NamespaceRegistry {
    fn from_iter<T: IntoIterator<Item = Namespace>>(iter: T) -> Self {
        let mut registry = Self::new();
        for namespace in iter {
            registry.add_prefix(namespace.prefix, namespace.iri);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prefixes() {
        let registry = NamespaceRegistry::with_defaults();

        assert_eq!(
            registry.get_iri("ldp").unwrap(),
            "http://www.w3.org/ns/ldp#"
        );
        assert_eq!(
            registry.get_iri("fedora").unwrap(),
            "http://fedora.info/definitions/v4/repository#"
        );
    }

    #[test]
    fn test_expand() {
        let registry = NamespaceRegistry::with_defaults();

        let expanded = registry.expand("ldp:member").unwrap();
        assert_eq!(expanded, "http://www.w3.org/ns/ldp#member");

        assert_eq!(
            registry.expand("nope:thing"),
            Err(PrefixError::UnknownPrefix("nope".to_string()))
        );
        assert!(matches!(
            registry.expand("unprefixed"),
            Err(PrefixError::NotPrefixed(_))
        ));
    }

    #[test]
    fn test_default_namespaces_end_in_separator() {
        let registry = NamespaceRegistry::with_defaults();
        for namespace in registry.namespaces() {
            assert!(
                namespace.iri.ends_with('/') || namespace.iri.ends_with('#'),
                "{} -> {}",
                namespace.prefix,
                namespace.iri
            );
        }
        assert_eq!(registry.expand("jcr:created").unwrap(), "http://www.jcp.org/jcr/1.0/created");
        assert_eq!(registry.compact("http://www.jcp.org/jcr/mix/1.0/created"), Some("mix:created".to_string()));
    }

    #[test]
    fn test_compact_prefers_longest_namespace() {
        let mut registry = NamespaceRegistry::new();
        registry.add_prefix("ex", "http://example.org/");
        registry.add_prefix("exns", "http://example.org/ns#");

        assert_eq!(
            registry.compact("http://example.org/ns#proxyFor"),
            Some("exns:proxyFor".to_string())
        );
        assert_eq!(
            registry.compact("http://example.org/thing"),
            Some("ex:thing".to_string())
        );
        assert_eq!(registry.compact("urn:other"), None);
    }

    #[test]
    fn test_namespaces_are_ordered() {
        let registry: NamespaceRegistry = vec![
            Namespace::new("zz", "http://z/"),
            Namespace::new("aa", "http://a/"),
        ]
        .into_iter()
        .collect();

        let prefixes: Vec<String> = registry.namespaces().map(|ns| ns.prefix).collect();
        assert_eq!(prefixes, vec!["aa", "zz"]);
    }
}
