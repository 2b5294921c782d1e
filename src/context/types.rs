//! `rdf:type` triples

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::{vocab, NamedNode, Triple, TripleStream};
use crate::repository::Resource;
use indexmap::IndexSet;

/// Declared types followed by the LDP and repository classes implied by the
/// resource's classification
pub fn triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let subject = scope.subject(&resource.id)?;

    let mut types: IndexSet<NamedNode> = resource
        .types
        .iter()
        .filter_map(|ty| scope.expand(ty))
        .collect();

    if !resource.is_hash() {
        types.extend(implied_types(resource));
    }

    Ok(TripleStream::from_triples(
        types
            .into_iter()
            .map(move |ty| Triple::new(subject.clone(), vocab::rdf_type(), ty)),
    ))
}

fn implied_types(resource: &Resource) -> Vec<NamedNode> {
    if resource.is_binary() {
        return vec![vocab::fedora_binary(), vocab::ldp_non_rdf_source(), vocab::fedora_resource()];
    }

    let mut types = vec![vocab::ldp_rdf_source(), vocab::fedora_resource()];
    if resource.is_description() {
        types.push(vocab::fedora_description());
    } else if resource.is_container() {
        types.push(vocab::fedora_container());
        types.push(vocab::ldp_container());
        if !resource.declares_container_kind() {
            types.push(vocab::ldp_basic_container());
        }
    }
    types
}
