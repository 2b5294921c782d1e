//! LDP container membership
//!
//! Forward membership links a membership resource to the members of every
//! container that points at it:
//!
//! ```text
//! (membership resource, hasMemberRelation, member)
//! ```
//!
//! Inverse membership links a member back to the membership resource of its
//! container:
//!
//! ```text
//! (member, isMemberOfRelation, membership resource)
//! ```
//!
//! For an indirect container the member side of either triple is not the child
//! itself but the value of the child property named by
//! `ldp:insertedContentRelation`.
//!
//! Incomplete configuration (no relation, no inserted property on a child)
//! produces no triples for that edge. It is never an error.

use super::scope::{ContextScope, Triples};
use crate::error::{ProjectionError, ProjectionResult};
use crate::rdf::vocab::{self, ldp_property};
use crate::rdf::{NamedNode, RdfObject, RdfPredicate, Triple, TripleStream};
use crate::repository::property::strip_reference_suffix;
use crate::repository::{ContainerKind, Resource, ResourceId};
use indexmap::IndexSet;
use std::iter;
use tracing::{debug, trace};

/// Which member-side value an indirect container inserts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertedContent {
    /// The member itself
    MemberSubject,
    /// Values of the named member property
    Property(String),
    /// No usable `ldp:insertedContentRelation`
    Missing,
}

/// Membership configuration read off one container
#[derive(Debug, Clone)]
pub struct MembershipRule {
    pub container: Resource,
    pub kind: ContainerKind,
    pub has_member: Option<RdfPredicate>,
    pub is_member_of: Option<RdfPredicate>,
    pub inserted: InsertedContent,
}

impl MembershipRule {
    /// Read the rule of `container`; `None` when it is not a container
    pub fn resolve(scope: &ContextScope<'_>, container: Resource) -> Option<Self> {
        let kind = container.container_kind()?;

        let has_member = match container.has_member_relation() {
            Some(value) => scope.iri_value(value).map(RdfPredicate::from),
            None if kind == ContainerKind::Basic => Some(vocab::member()),
            None => None,
        };
        let is_member_of = container
            .is_member_of_relation()
            .and_then(|value| scope.iri_value(value))
            .map(RdfPredicate::from);

        let inserted = match kind {
            ContainerKind::Indirect => match container.inserted_content_relation() {
                Some(value) => match scope.iri_value(value) {
                    Some(iri) if iri == vocab::ldp_member_subject() => InsertedContent::MemberSubject,
                    Some(iri) => match scope.registry().compact(iri.as_str()) {
                        Some(name) => InsertedContent::Property(name),
                        None => {
                            debug!("No prefix for inserted content relation {} on {}", iri, container.id);
                            InsertedContent::Missing
                        }
                    },
                    None => InsertedContent::Missing,
                },
                None => InsertedContent::Missing,
            },
            ContainerKind::Basic | ContainerKind::Direct => InsertedContent::MemberSubject,
        };

        Some(Self {
            container,
            kind,
            has_member,
            is_member_of,
            inserted,
        })
    }

    /// Subject of forward membership triples
    ///
    /// The declared `ldp:membershipResource`, or the container itself.
    pub fn membership_resource(&self, scope: &ContextScope<'_>) -> ProjectionResult<NamedNode> {
        if let Some(value) = self.container.membership_resource() {
            if let Some(node) = scope.node_value(value)? {
                return Ok(node);
            }
        }
        scope.subject(&self.container.id)
    }

    /// Member-side nodes contributed by `member`
    ///
    /// Empty when the inserted content property is absent on the member.
    pub fn member_objects(&self, scope: &ContextScope<'_>, member: &Resource) -> ProjectionResult<Vec<RdfObject>> {
        match &self.inserted {
            InsertedContent::MemberSubject => Ok(vec![scope.addressable_subject(member)?.into()]),
            InsertedContent::Property(name) => {
                let Some(values) = member.property_or_reference(name) else {
                    trace!("{} has no {}, no membership triple", member.id, name);
                    return Ok(Vec::new());
                };
                let mut objects = Vec::with_capacity(values.len());
                for value in values {
                    if let Some(object) = scope.object(value)? {
                        objects.push(object);
                    }
                }
                Ok(objects)
            }
            InsertedContent::Missing => Ok(Vec::new()),
        }
    }
}

/// Rules of the containers whose membership resource is `resource`
///
/// Candidates are the resource itself and every container naming it in
/// `ldp:membershipResource`, as a reference or as a URI. A candidate is kept
/// only when its resolved membership resource is the subject of `resource`,
/// the same node [`inverse_triples`] points members at.
fn membership_rules(scope: &ContextScope<'_>, resource: &Resource) -> ProjectionResult<Vec<MembershipRule>> {
    let subject = scope.subject(&resource.id)?;

    let mut candidates = IndexSet::new();
    candidates.insert(resource.id.clone());
    for reference in scope.store.inbound_references(&resource.id)? {
        if strip_reference_suffix(&reference.property) == ldp_property::MEMBERSHIP_RESOURCE {
            candidates.insert(reference.owner);
        }
    }
    candidates.extend(scope.store.uri_holders(ldp_property::MEMBERSHIP_RESOURCE, subject.as_str())?);

    let mut rules = Vec::new();
    for id in candidates {
        let container = if id == resource.id {
            Some(resource.clone())
        } else {
            scope.store.resource(&id)?
        };
        let Some(rule) = container.and_then(|container| MembershipRule::resolve(scope, container)) else {
            continue;
        };
        if rule.membership_resource(scope)? == subject {
            rules.push(rule);
        } else {
            trace!("{} points its members elsewhere", rule.container.id);
        }
    }

    Ok(rules)
}

/// Forward membership triples whose subject is `resource`
///
/// Members are pulled from each container lazily.
pub fn triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let mut streams: Vec<Triples<'a>> = Vec::new();

    for rule in membership_rules(scope, resource)? {
        let Some(predicate) = rule.has_member.clone() else {
            trace!("{} has no member relation", rule.container.id);
            continue;
        };

        let subject = scope.subject(&resource.id)?;
        let children = scope.store.children(&rule.container.id)?;
        let scope = scope.clone();

        streams.push(Box::new(children.flat_map(move |child| -> Triples<'a> {
            let objects = child
                .map_err(ProjectionError::from)
                .and_then(|child| rule.member_objects(&scope, &child));
            match objects {
                Ok(objects) => {
                    let subject = subject.clone();
                    let predicate = predicate.clone();
                    Box::new(
                        objects
                            .into_iter()
                            .map(move |object| Ok(Triple::new(subject.clone(), predicate.clone(), object))),
                    )
                }
                Err(e) => Box::new(iter::once(Err(e))),
            }
        })));
    }

    Ok(TripleStream::from_results(streams.into_iter().flatten()))
}

/// Inverse membership triples contributed by `resource` as a member of its
/// parent container
pub fn inverse_triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let Some(parent_id) = resource.parent() else {
        return Ok(TripleStream::empty());
    };
    if resource.is_hash() {
        return Ok(TripleStream::empty());
    }
    let Some(container) = scope.store.resource(&parent_id)? else {
        return Ok(TripleStream::empty());
    };
    let Some(rule) = MembershipRule::resolve(scope, container) else {
        return Ok(TripleStream::empty());
    };
    let Some(predicate) = rule.is_member_of.clone() else {
        return Ok(TripleStream::empty());
    };

    let object = rule.membership_resource(scope)?;
    let triples = rule
        .member_objects(scope, resource)?
        .into_iter()
        .filter_map(|member| match member {
            RdfObject::NamedNode(node) => Some(node),
            RdfObject::Literal(literal) => {
                debug!("Literal {} cannot be the subject of a membership triple", literal);
                None
            }
        })
        .map(|member| Triple::new(member, predicate.clone(), object.clone()))
        .collect::<Vec<_>>();

    Ok(TripleStream::from_triples(triples))
}

/// Container of `proxy` when it is a direct or indirect container
pub(crate) fn proxy_container(scope: &ContextScope<'_>, proxy: &Resource) -> ProjectionResult<Option<MembershipRule>> {
    let Some(parent_id) = proxy.parent() else {
        return Ok(None);
    };
    let Some(parent) = scope.store.resource(&parent_id)? else {
        return Ok(None);
    };
    match parent.container_kind() {
        Some(ContainerKind::Direct) | Some(ContainerKind::Indirect) => Ok(MembershipRule::resolve(scope, parent)),
        _ => Ok(None),
    }
}

/// Whether a member object is the subject of `target`
pub(crate) fn object_targets(scope: &ContextScope<'_>, object: &RdfObject, target: &ResourceId) -> ProjectionResult<bool> {
    match object {
        RdfObject::NamedNode(node) => Ok(*node == scope.subject(target)?),
        RdfObject::Literal(_) => Ok(false),
    }
}
