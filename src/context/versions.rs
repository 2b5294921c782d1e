//! Version history

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::{vocab, Literal, NamedNode, Triple, TripleStream};
use crate::repository::Resource;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing::{debug, warn};

/// `<resource>/fcr:versions/<label>`
pub fn version_subject(subject: &NamedNode, label: &str) -> ProjectionResult<NamedNode> {
    Ok(NamedNode::new(format!(
        "{}/fcr:versions/{}",
        subject.as_str().trim_end_matches('/'),
        utf8_percent_encode(label, NON_ALPHANUMERIC)
    ))?)
}

/// `fedora:hasVersion` per labeled version, with its labels and creation date
///
/// The baseline version is never listed. A version without a label cannot be
/// addressed and is skipped.
pub fn triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let subject = scope.subject(&resource.id)?;
    let mut triples = Vec::new();

    for version in scope.store.versions(&resource.id)? {
        if version.root {
            continue;
        }
        let Some(label) = version.primary_label() else {
            warn!("Skipping unlabeled version of {} created {}", resource.id, version.created);
            continue;
        };
        if version.labels.len() > 1 {
            debug!(
                "Version {} of {} also carries {:?}; only the first label names it",
                label,
                resource.id,
                &version.labels[1..]
            );
        }

        let version_node = version_subject(&subject, label)?;
        triples.push(Triple::new(subject.clone(), vocab::has_version(), version_node.clone()));
        for label in &version.labels {
            triples.push(Triple::new(
                version_node.clone(),
                vocab::has_version_label(),
                Literal::new_simple_literal(label.as_str()),
            ));
        }
        triples.push(Triple::new(
            version_node,
            vocab::created(),
            Literal::date_time(&version.created),
        ));
    }

    Ok(TripleStream::from_triples(triples))
}
