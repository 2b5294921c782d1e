//! Namespace catalog

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::{vocab, Literal, NamedNode, Triple, TripleStream};
use tracing::debug;

/// Describe every registered namespace except `reserved` as a VoAF vocabulary
/// and register each prefix on the returned stream
pub fn triples<'a>(scope: &ContextScope<'a>, reserved: &str) -> ProjectionResult<TripleStream<'a>> {
    let mut stream = TripleStream::empty();
    let mut triples = Vec::new();

    for namespace in scope.registry().namespaces() {
        if namespace.prefix == reserved {
            continue;
        }
        let node = match NamedNode::new(namespace.iri.as_str()) {
            Ok(node) => node,
            Err(e) => {
                debug!("Skipping namespace {}: {}", namespace.prefix, e);
                continue;
            }
        };

        triples.push(Triple::new(node.clone(), vocab::rdf_type(), vocab::voaf_vocabulary()));
        triples.push(Triple::new(
            node.clone(),
            vocab::preferred_namespace_prefix(),
            Literal::new_simple_literal(namespace.prefix.as_str()),
        ));
        triples.push(Triple::new(
            node,
            vocab::preferred_namespace_uri(),
            Literal::new_simple_literal(namespace.iri.as_str()),
        ));
        stream = stream.with_namespace(namespace.prefix, namespace.iri);
    }

    Ok(stream.concat_triples(triples))
}
