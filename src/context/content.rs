//! Links between a binary and its description

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::{vocab, Triple, TripleStream};
use crate::repository::Resource;

/// `iana:describes` from a description, `iana:describedby` from a binary
pub fn triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let Some(other) = resource.described_resource() else {
        return Ok(TripleStream::empty());
    };

    let predicate = if resource.is_description() {
        vocab::describes()
    } else {
        vocab::described_by()
    };

    let triple = Triple::new(scope.subject(&resource.id)?, predicate, scope.subject(&other)?);
    Ok(TripleStream::from_triples([triple]))
}
