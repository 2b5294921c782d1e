//! Required server-managed triples
//!
//! Before RDF describing a resource is accepted, it must carry the creation and
//! modification properties plus the type triples of its class.

use crate::error::ProjectionError;
use crate::rdf::{vocab, NamedNode, RdfObject, RdfPredicate, Triple, TripleStream};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Kind of resource a triple set describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceClass {
    Container,
    BinaryDescription,
}

impl fmt::Display for ResourceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceClass::Container => write!(f, "container"),
            ResourceClass::BinaryDescription => write!(f, "binary description"),
        }
    }
}

/// A required triple is absent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{subject} is missing required {element} for a {class}")]
pub struct ConstraintViolation {
    pub subject: String,
    /// Missing predicate or type IRI
    pub element: String,
    pub class: ResourceClass,
}

/// Validation errors on streamed input
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error(transparent)]
    Violation(#[from] ConstraintViolation),

    #[error("Projection error: {0}")]
    Projection(#[from] ProjectionError),
}

const REQUIRED_PREDICATES: [fn() -> RdfPredicate; 4] = [
    vocab::created_by,
    vocab::created,
    vocab::last_modified_by,
    vocab::last_modified,
];

fn required_types(class: ResourceClass) -> Vec<NamedNode> {
    let mut types = vec![vocab::ldp_rdf_source(), vocab::fedora_resource()];
    match class {
        ResourceClass::Container => {
            types.push(vocab::fedora_container());
            types.push(vocab::ldp_container());
        }
        ResourceClass::BinaryDescription => types.push(vocab::fedora_description()),
    }
    types
}

/// Check that `triples` contains everything a `class` resource needs
///
/// Only triples about `subject` count. The first missing element is reported.
pub fn validate<'t, I>(triples: I, subject: &NamedNode, class: ResourceClass) -> Result<(), ConstraintViolation>
where
    I: IntoIterator<Item = &'t Triple>,
{
    let mut predicates = HashSet::new();
    let mut types = HashSet::new();

    for triple in triples.into_iter().filter(|t| &t.subject == subject) {
        if triple.predicate == vocab::rdf_type() {
            if let RdfObject::NamedNode(ty) = &triple.object {
                types.insert(ty.clone());
            }
        }
        predicates.insert(triple.predicate.clone());
    }

    let violation = |element: &str| ConstraintViolation {
        subject: subject.as_str().to_string(),
        element: element.to_string(),
        class,
    };

    for predicate in REQUIRED_PREDICATES.iter().map(|p| p()) {
        if !predicates.contains(&predicate) {
            return Err(violation(predicate.as_str()));
        }
    }
    for ty in required_types(class) {
        if !types.contains(&ty) {
            return Err(violation(ty.as_str()));
        }
    }
    Ok(())
}

/// Drain `stream` and [`validate`] the result
pub fn validate_stream(stream: TripleStream<'_>, subject: &NamedNode, class: ResourceClass) -> Result<(), ValidationError> {
    let triples = stream.into_set()?;
    validate(&triples, subject, class)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::Literal;

    fn subject() -> NamedNode {
        NamedNode::new("http://localhost/rest/c").unwrap()
    }

    fn complete_container() -> Vec<Triple> {
        let s = subject();
        let mut triples = vec![
            Triple::new(s.clone(), vocab::created_by(), Literal::from("alice")),
            Triple::new(s.clone(), vocab::created(), Literal::from("2015-01-01")),
            Triple::new(s.clone(), vocab::last_modified_by(), Literal::from("bob")),
            Triple::new(s.clone(), vocab::last_modified(), Literal::from("2015-01-02")),
        ];
        for ty in required_types(ResourceClass::Container) {
            triples.push(Triple::new(s.clone(), vocab::rdf_type(), ty));
        }
        triples
    }

    #[test]
    fn test_complete_container_passes() {
        assert!(validate(&complete_container(), &subject(), ResourceClass::Container).is_ok());
    }

    #[test]
    fn test_missing_property_named() {
        let triples: Vec<Triple> = complete_container()
            .into_iter()
            .filter(|t| t.predicate != vocab::last_modified_by())
            .collect();
        let err = validate(&triples, &subject(), ResourceClass::Container).unwrap_err();
        assert_eq!(err.element, vocab::last_modified_by().as_str());
    }

    #[test]
    fn test_missing_type_named() {
        let err = validate(&complete_container(), &subject(), ResourceClass::BinaryDescription).unwrap_err();
        assert_eq!(err.element, vocab::fedora_description().as_str());
        assert!(err.to_string().contains("binary description"));
    }

    #[test]
    fn test_other_subjects_ignored() {
        let other = NamedNode::new("http://localhost/rest/other").unwrap();
        assert!(validate(&complete_container(), &other, ResourceClass::Container).is_err());
    }

    #[test]
    fn test_validate_stream() {
        let stream = TripleStream::from_triples(complete_container());
        assert!(validate_stream(stream, &subject(), ResourceClass::Container).is_ok());
    }
}
