//! `fedora:hasParent`

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::vocab::{self, node_type};
use crate::rdf::{Triple, TripleStream};
use crate::repository::Resource;
use tracing::trace;

pub fn triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let Some(parent_id) = resource.parent() else {
        return Ok(TripleStream::empty());
    };

    // frozen snapshots live below a version node of the version storage
    if resource.frozen {
        if let Some(parent) = scope.store.resource(&parent_id)? {
            if parent.has_type(node_type::VERSION) {
                trace!("Not linking frozen {} to version node {}", resource.id, parent_id);
                return Ok(TripleStream::empty());
            }
        }
    }

    let triple = Triple::new(
        scope.subject(&resource.id)?,
        vocab::has_parent(),
        scope.subject(&parent_id)?,
    );
    Ok(TripleStream::from_triples([triple]))
}
