//! PREMIS fixity triples

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::{vocab, Literal, NamedNode, RdfObject, Triple, TripleStream};
use crate::repository::{FixityResult, Resource};
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

static CHECK_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Subject for one fixity check of `subject`, unique across calls
fn check_subject(subject: &NamedNode) -> ProjectionResult<NamedNode> {
    let stamp = Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let sequence = CHECK_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    Ok(NamedNode::new(format!(
        "{}#fixity/{}-{}",
        subject.without_fragment(),
        stamp,
        sequence
    ))?)
}

/// Digest as an IRI; a digest that is not one is kept as a plain literal
fn digest_object(checksum: &str) -> RdfObject {
    match NamedNode::new(checksum) {
        Ok(node) => node.into(),
        Err(e) => {
            debug!("Digest {} kept as a literal: {}", checksum, e);
            Literal::new_simple_literal(checksum).into()
        }
    }
}

pub fn triples<'a>(
    scope: &ContextScope<'a>,
    resource: &Resource,
    results: &[FixityResult],
) -> ProjectionResult<TripleStream<'a>> {
    let subject = scope.subject(&resource.id)?;
    let mut triples = Vec::new();

    for result in results {
        let check = check_subject(&subject)?;
        triples.push(Triple::new(subject.clone(), vocab::has_fixity(), check.clone()));
        triples.push(Triple::new(check.clone(), vocab::rdf_type(), vocab::premis_fixity()));

        for status in &result.statuses {
            triples.push(Triple::new(
                check.clone(),
                vocab::has_event_outcome(),
                Literal::new_simple_literal(status.as_str()),
            ));
        }

        triples.push(Triple::new(
            check.clone(),
            vocab::has_message_digest(),
            digest_object(&result.checksum),
        ));
        triples.push(Triple::new(
            check.clone(),
            vocab::has_size(),
            Literal::long(i64::try_from(result.size).unwrap_or(i64::MAX)),
        ));

        let location = NamedNode::new(format!("{}/location", check.as_str()))?;
        triples.push(Triple::new(check.clone(), vocab::has_content_location(), location.clone()));
        triples.push(Triple::new(location.clone(), vocab::rdf_type(), vocab::premis_content_location()));
        triples.push(Triple::new(
            location,
            vocab::has_content_location_value(),
            Literal::new_simple_literal(result.location.as_str()),
        ));
    }

    Ok(TripleStream::from_triples(triples))
}
