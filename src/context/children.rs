//! `ldp:contains` triples
//!
//! Children are pulled from the store one at a time, so a container with a
//! very large number of children is never materialized.

use super::scope::{ContextScope, Triples};
use crate::error::ProjectionResult;
use crate::rdf::{vocab, Triple, TripleStream};
use crate::repository::Resource;

pub fn triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let subject = scope.subject(&resource.id)?;
    let children = scope.store.children(&resource.id)?;
    let scope = scope.clone();

    let triples: Triples<'a> = Box::new(children.map(move |child| -> ProjectionResult<Triple> {
        let child = child?;
        Ok(Triple::new(
            subject.clone(),
            vocab::contains(),
            scope.addressable_subject(&child)?,
        ))
    }));
    Ok(TripleStream::from_results(triples))
}
