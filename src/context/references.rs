//! Inbound references
//!
//! Every stored reference to the resource becomes `(referrer, p, resource)`.
//! Indirect membership is computed rather than stored, so each referrer whose
//! parent is a direct or indirect container is also treated as a potential
//! proxy: the container's forward membership is evaluated for that one member,
//! and only triples whose object really is this resource are kept.

use super::membership::{object_targets, proxy_container};
use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::{Triple, TripleStream};
use crate::repository::property::strip_reference_suffix;
use crate::repository::Resource;
use indexmap::IndexSet;
use std::collections::HashSet;
use tracing::trace;

pub fn triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let object = scope.subject(&resource.id)?;
    let mut triples = IndexSet::new();
    let mut proxies = HashSet::new();

    for reference in scope.store.inbound_references(&resource.id)? {
        let Some(owner) = scope.store.resource(&reference.owner)? else {
            continue;
        };

        if let Some(predicate) = scope.predicate(strip_reference_suffix(&reference.property)) {
            triples.insert(Triple::new(scope.subject(&owner.id)?, predicate, object.clone()));
        }

        if !proxies.insert(owner.id.clone()) {
            continue;
        }
        let Some(rule) = proxy_container(scope, &owner)? else {
            continue;
        };
        let Some(predicate) = rule.has_member.clone() else {
            continue;
        };

        for member in rule.member_objects(scope, &owner)? {
            if object_targets(scope, &member, &resource.id)? {
                trace!("{} is a member of {} through {}", resource.id, rule.container.id, owner.id);
                triples.insert(Triple::new(rule.membership_resource(scope)?, predicate.clone(), member));
            }
        }
    }

    Ok(TripleStream::from_triples(triples))
}
