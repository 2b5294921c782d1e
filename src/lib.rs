//! ldprism
//!
//! Projects resources held in a hierarchical content repository into RDF
//! graphs the way a Linked Data Platform server describes them.
//!
//! # Architecture
//!
//! - [`repository`]: the read-only store interface, resource model and an in-memory backend
//! - [`translator`]: reversible mapping between repository paths and public URIs
//! - [`context`]: one lazy triple producer per facet of a resource, and the engine combining them
//! - [`validation`]: checks that an RDF description carries the server-managed triples
//! - [`rdf`]: triples, vocabulary and the lazy [`TripleStream`]
//!
//! ## Example Usage
//!
//! ```rust
//! use ldprism::{InMemoryStore, ProjectionConfig, ProjectionEngine, Resource, ResourceId};
//!
//! let mut store = InMemoryStore::new();
//! store.add_namespace("dc", "http://purl.org/dc/elements/1.1/");
//! store
//!     .insert(Resource::container("/books").with_property("dc:title", "Books"))
//!     .unwrap();
//!
//! let config = ProjectionConfig::new("http://localhost:8080/rest");
//! let translator = config.translator().unwrap();
//! let engine = ProjectionEngine::new(config);
//!
//! let triples = engine
//!     .project(&store, &translator, &ResourceId::new("/books"))
//!     .unwrap()
//!     .into_vec()
//!     .unwrap();
//! assert!(triples
//!     .iter()
//!     .any(|t| t.predicate.as_str() == "http://purl.org/dc/elements/1.1/title"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod rdf;
pub mod repository;
pub mod translator;
pub mod validation;

// Re-export main types for convenience
pub use config::{ConfigError, ConfigResult, ProjectionConfig, ProjectionOptions};

pub use context::{ContextKind, ProjectionEngine};

pub use error::{ProjectionError, ProjectionResult};

pub use rdf::{Literal, NamedNode, RdfObject, RdfPredicate, Triple, TripleStream};

pub use repository::{
    check_fixity, ContainerKind, ExpectedFixity, FixityResult, FixityStatus, InMemoryStore,
    PropertyValue, RepositoryEnvironment, RepositoryFixture, RepositoryStore, Resource, ResourceId,
    StoreError, StoreResult,
};

pub use translator::{IdentifierTranslator, TranslationError, TranslationResult};

pub use validation::{validate, validate_stream, ConstraintViolation, ResourceClass};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
