//! RDF model for projected resources
//!
//! This module provides:
//! - Triples over named nodes and literals (no free blank nodes)
//! - The vocabulary the projection engine emits
//! - A prefix registry shared with the store
//! - [`TripleStream`], the lazy single-pass output type
//!
//! # Example
//!
//! ```rust
//! use ldprism::rdf::{vocab, Literal, NamedNode, Triple, TripleStream};
//!
//! let subject = NamedNode::new("http://localhost:8080/rest/a").unwrap();
//! let triple = Triple::new(subject, vocab::writable(), Literal::from(true));
//!
//! let stream = TripleStream::from_triples(vec![triple.clone()]);
//! let triples = stream.into_set().unwrap();
//! assert!(triples.contains(&triple));
//! ```

mod namespace;
mod stream;
mod types;
pub mod vocab;

pub use types::{Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, Triple};

pub use stream::TripleStream;

pub use namespace::{Namespace, NamespaceRegistry, PrefixError, PrefixResult};
