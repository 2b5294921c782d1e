//! Errors surfaced while projecting a resource

use crate::rdf::RdfError;
use crate::repository::StoreError;
use crate::translator::TranslationError;
use thiserror::Error;

/// Faults that abort a projection.
///
/// Malformed LDP configuration and permission denials are not errors; they
/// simply produce no triples.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// Identifier outside the translator's domain
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Read failure against the underlying store
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A value could not be turned into an RDF term
    #[error("RDF error: {0}")]
    Rdf(#[from] RdfError),
}

pub type ProjectionResult<T> = Result<T, ProjectionError>;
