//! Identifier translation between store paths and subject URIs
//!
//! A translator is an ordered chain of [`TranslationLink`]s. Going forward, the
//! links are applied left to right to the internal path; going backward, their
//! inverses are applied right to left. Every link is injective on its domain,
//! so the chain is too: `reverse(forward(p)) == p` for every path in domain.
//!
//! The default chain is:
//! 1. [`NamespaceLink`] rewrites internal prefixes in path segments
//!    (`fedora:metadata` → `fcr:metadata`)
//! 2. [`HashLink`] turns nested hash resources into fragments
//!    (`/a/#/frag` → `/a#frag`)
//! 3. [`PrefixLink`] percent-encodes the path and prepends the base URI

mod hash;
mod namespace;
mod prefix;

pub use hash::HashLink;
pub use namespace::NamespaceLink;
pub use prefix::PrefixLink;

use crate::rdf::{NamedNode, RdfError};
use crate::repository::ResourceId;
use std::fmt;
use thiserror::Error;

/// Translation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// Value outside the domain of a link
    #[error("{0} is outside the translator's domain")]
    OutOfDomain(String),

    /// Translated value is not a valid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(#[from] RdfError),

    /// Base URI rejected at construction
    #[error("Invalid base URI {uri}: {reason}")]
    InvalidBaseUri { uri: String, reason: String },

    /// Prefix aliases that would make the namespace link ambiguous
    #[error("Invalid namespace alias: {0}")]
    InvalidAlias(String),
}

pub type TranslationResult<T> = Result<T, TranslationError>;

/// One injective step of a translator chain
pub trait TranslationLink: fmt::Debug + Send + Sync {
    /// Map an internal-side value one step outwards
    fn apply(&self, value: &str) -> TranslationResult<String>;

    /// Undo [`apply`](Self::apply)
    fn reverse(&self, value: &str) -> TranslationResult<String>;

    /// Whether `apply` accepts `value`
    fn in_domain(&self, value: &str) -> bool {
        self.apply(value).is_ok()
    }
}

/// Bidirectional mapping between [`ResourceId`]s and subject URIs
#[derive(Debug)]
pub struct IdentifierTranslator {
    links: Vec<Box<dyn TranslationLink>>,
}

impl IdentifierTranslator {
    /// Default chain rooted at `base_uri`, renaming `fedora:` segments to `fcr:`
    pub fn new(base_uri: &str) -> TranslationResult<Self> {
        Ok(Self::from_links(vec![
            Box::new(NamespaceLink::new([("fedora", "fcr")])?),
            Box::new(HashLink),
            Box::new(PrefixLink::new(base_uri)?),
        ]))
    }

    /// Chain built from explicit links, applied in the given order
    pub fn from_links(links: Vec<Box<dyn TranslationLink>>) -> Self {
        Self { links }
    }

    /// Subject URI of the resource at `id`
    pub fn forward(&self, id: &ResourceId) -> TranslationResult<NamedNode> {
        let uri = self
            .links
            .iter()
            .try_fold(id.as_str().to_string(), |value, link| link.apply(&value))?;
        Ok(NamedNode::new(uri)?)
    }

    /// Resource path addressed by `uri`
    pub fn reverse(&self, uri: &NamedNode) -> TranslationResult<ResourceId> {
        let path = self
            .links
            .iter()
            .rev()
            .try_fold(uri.as_str().to_string(), |value, link| link.reverse(&value))?;
        Ok(ResourceId::new(path))
    }

    /// Whether `id` can be translated forward
    pub fn in_domain(&self, id: &ResourceId) -> bool {
        self.forward(id).is_ok()
    }

    /// Whether `uri` addresses a resource of this repository
    pub fn in_range(&self, uri: &NamedNode) -> bool {
        self.reverse(uri).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://localhost:8080/rest";

    fn translator() -> IdentifierTranslator {
        IdentifierTranslator::new(BASE).unwrap()
    }

    #[test]
    fn test_forward() {
        let t = translator();
        let cases = [
            ("/", "http://localhost:8080/rest/"),
            ("/a/b", "http://localhost:8080/rest/a/b"),
            ("/a/file/fedora:metadata", "http://localhost:8080/rest/a/file/fcr:metadata"),
            ("/a/#/frag", "http://localhost:8080/rest/a#frag"),
            ("/a b", "http://localhost:8080/rest/a%20b"),
        ];
        for (path, uri) in cases {
            assert_eq!(t.forward(&ResourceId::new(path)).unwrap().as_str(), uri, "{}", path);
        }
    }

    #[test]
    fn test_reverse_inverts_forward() {
        let t = translator();
        for path in ["/", "/a", "/a/b/c", "/x/fedora:metadata", "/a/#/f", "/#/top", "/50%", "/ü/ñ"] {
            let id = ResourceId::new(path);
            let uri = t.forward(&id).unwrap();
            assert_eq!(t.reverse(&uri).unwrap(), id, "{}", uri);
        }
    }

    #[test]
    fn test_out_of_domain() {
        let t = translator();
        assert!(!t.in_domain(&ResourceId::new("/a/fcr:metadata")));
        assert!(!t.in_domain(&ResourceId::new("/a#b")));
        assert!(matches!(
            t.forward(&ResourceId::new("/a#b")),
            Err(TranslationError::OutOfDomain(_))
        ));
    }

    #[test]
    fn test_foreign_uri_not_in_range() {
        let t = translator();
        let uri = NamedNode::new("http://example.org/other").unwrap();
        assert!(!t.in_range(&uri));
        assert!(matches!(t.reverse(&uri), Err(TranslationError::OutOfDomain(_))));
    }

    #[test]
    fn test_bare_base_is_root() {
        let t = translator();
        let uri = NamedNode::new(BASE).unwrap();
        assert_eq!(t.reverse(&uri).unwrap(), ResourceId::root());
    }
}
