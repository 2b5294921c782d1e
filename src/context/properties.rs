//! User properties and server-managed timestamps

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::{vocab, RdfPredicate, Triple, TripleStream};
use crate::repository::property::strip_reference_suffix;
use crate::repository::Resource;
use tracing::trace;

/// Store bookkeeping that never shows up as user data
const INTERNAL_PROPERTIES: &[&str] = &[
    "jcr:primaryType",
    "jcr:mixinTypes",
    "jcr:uuid",
    "jcr:frozenPrimaryType",
    "jcr:frozenMixinTypes",
    "jcr:frozenUuid",
    "jcr:versionHistory",
    "jcr:baseVersion",
    "jcr:predecessors",
    "jcr:isCheckedOut",
    "jcr:data",
    "jcr:lockOwner",
    "jcr:lockIsDeep",
];

fn server_managed(name: &str) -> Option<RdfPredicate> {
    match name {
        "jcr:created" | "fedora:created" => Some(vocab::created()),
        "jcr:createdBy" | "fedora:createdBy" => Some(vocab::created_by()),
        "jcr:lastModified" | "fedora:lastModified" => Some(vocab::last_modified()),
        "jcr:lastModifiedBy" | "fedora:lastModifiedBy" => Some(vocab::last_modified_by()),
        _ => None,
    }
}

pub fn is_internal(name: &str) -> bool {
    INTERNAL_PROPERTIES.contains(&name)
}

/// One triple per projected property value
///
/// Reference pseudo-properties (`p_ref`) are reported under `p`.
pub fn triples<'a>(
    scope: &ContextScope<'a>,
    resource: &Resource,
    include_server_managed: bool,
) -> ProjectionResult<TripleStream<'a>> {
    let subject = scope.subject(&resource.id)?;
    let mut triples = Vec::new();

    for (name, values) in &resource.properties {
        if is_internal(name) {
            continue;
        }

        let predicate = match server_managed(name) {
            Some(_) if !include_server_managed => continue,
            Some(predicate) => predicate,
            None => match scope.predicate(strip_reference_suffix(name)) {
                Some(predicate) => predicate,
                None => {
                    trace!("No namespace for property {} on {}", name, resource.id);
                    continue;
                }
            },
        };

        for value in values {
            if let Some(object) = scope.object(value)? {
                triples.push(Triple::new(subject.clone(), predicate.clone(), object));
            }
        }
    }

    Ok(TripleStream::from_triples(triples))
}
