//! Context modules: one triple producer per facet of a resource
//!
//! Each module is a function `(scope, resource, ...) -> TripleStream` that only
//! reads from the store. [`ProjectionEngine`] picks the modules that apply to a
//! resource and concatenates their streams lazily, so a facet the consumer
//! never reaches is never computed.
//!
//! # Example
//!
//! ```rust
//! use ldprism::config::ProjectionConfig;
//! use ldprism::context::ProjectionEngine;
//! use ldprism::repository::{InMemoryStore, Resource, ResourceId};
//!
//! let mut store = InMemoryStore::new();
//! store.insert(Resource::container("/books")).unwrap();
//! store.insert(Resource::container("/books/b1")).unwrap();
//!
//! let config = ProjectionConfig::default();
//! let translator = config.translator().unwrap();
//! let engine = ProjectionEngine::new(config);
//!
//! let triples = engine
//!     .project(&store, &translator, &ResourceId::new("/books"))
//!     .unwrap()
//!     .into_set()
//!     .unwrap();
//! assert!(triples.iter().any(|t| t.predicate.as_str() == "http://www.w3.org/ns/ldp#contains"));
//! ```

pub mod acl;
pub mod children;
pub mod content;
pub mod embedded;
mod engine;
pub mod fixity;
pub mod hash;
pub mod membership;
pub mod namespaces;
pub mod parent;
pub mod properties;
pub mod references;
pub mod root;
mod scope;
pub mod types;
pub mod versions;

pub use engine::{ContextKind, ProjectionEngine};
pub use membership::{InsertedContent, MembershipRule};
pub use scope::ContextScope;

#[cfg(test)]
pub(crate) mod tests {
    use super::ContextScope;
    use crate::rdf::{RdfObject, Triple, TripleStream};
    use crate::repository::InMemoryStore;
    use crate::translator::IdentifierTranslator;

    pub(crate) fn scope_over<'a>(store: &'a InMemoryStore, translator: &'a IdentifierTranslator) -> ContextScope<'a> {
        ContextScope::new(store, translator).unwrap()
    }

    fn lexical(object: &RdfObject) -> String {
        match object {
            RdfObject::NamedNode(node) => node.as_str().to_string(),
            RdfObject::Literal(literal) => literal.value().to_string(),
        }
    }

    /// Objects of a stream, as IRIs or lexical values
    pub(crate) fn objects(stream: TripleStream<'_>) -> Vec<String> {
        stream.into_vec().unwrap().iter().map(|t| lexical(&t.object)).collect()
    }

    /// Objects of the triples with `predicate`, in stream order
    pub(crate) fn values_of(triples: &[Triple], predicate: &str) -> Vec<String> {
        triples
            .iter()
            .filter(|t| t.predicate.as_str() == predicate)
            .map(|t| lexical(&t.object))
            .collect()
    }
}
