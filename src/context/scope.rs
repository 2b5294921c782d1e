//! Shared inputs of the context modules

use crate::error::ProjectionResult;
use crate::rdf::{Literal, NamedNode, NamespaceRegistry, RdfObject, RdfPredicate, Triple, TripleStream};
use crate::repository::{PropertyValue, RepositoryStore, Resource, ResourceId};
use crate::translator::IdentifierTranslator;
use std::iter;
use std::rc::Rc;
use tracing::debug;

/// Boxed fallible triple iterator used to build lazy streams
pub(crate) type Triples<'a> = Box<dyn Iterator<Item = ProjectionResult<Triple>> + 'a>;

/// Everything a context module reads: the store, the translator and the
/// store's namespace registry, loaded once per projection
#[derive(Clone)]
pub struct ContextScope<'a> {
    pub store: &'a dyn RepositoryStore,
    pub translator: &'a IdentifierTranslator,
    registry: Rc<NamespaceRegistry>,
}

impl<'a> ContextScope<'a> {
    pub fn new(store: &'a dyn RepositoryStore, translator: &'a IdentifierTranslator) -> ProjectionResult<Self> {
        let registry = Rc::new(store.namespaces()?);
        Ok(Self {
            store,
            translator,
            registry,
        })
    }

    pub fn registry(&self) -> &NamespaceRegistry {
        &self.registry
    }

    /// Subject URI of the resource at `id`
    pub fn subject(&self, id: &ResourceId) -> ProjectionResult<NamedNode> {
        Ok(self.translator.forward(id)?)
    }

    /// Subject URI of the RDF-addressable side of `resource`
    pub fn addressable_subject(&self, resource: &Resource) -> ProjectionResult<NamedNode> {
        self.subject(&resource.rdf_addressable())
    }

    /// Expand a stored `prefix:local` name; `None` when the prefix is unknown
    pub fn expand(&self, name: &str) -> Option<NamedNode> {
        match self.registry.expand(name) {
            Ok(iri) => match NamedNode::new(iri) {
                Ok(node) => Some(node),
                Err(e) => {
                    debug!("Skipping {}: {}", name, e);
                    None
                }
            },
            Err(e) => {
                debug!("Skipping {}: {}", name, e);
                None
            }
        }
    }

    pub fn predicate(&self, name: &str) -> Option<RdfPredicate> {
        self.expand(name).map(RdfPredicate::from)
    }

    /// Read a property value that names a predicate or class, either as an
    /// IRI or as a stored `prefix:local` name
    pub fn iri_value(&self, value: &PropertyValue) -> Option<NamedNode> {
        match value {
            PropertyValue::Uri(iri) => NamedNode::new(iri.as_str()).ok(),
            PropertyValue::String(s) if s.contains("://") => NamedNode::new(s.as_str()).ok(),
            PropertyValue::String(s) => self.expand(s),
            _ => None,
        }
    }

    /// Read a property value that points at a node: a reference or an IRI
    pub fn node_value(&self, value: &PropertyValue) -> ProjectionResult<Option<NamedNode>> {
        match value {
            PropertyValue::Reference { target, .. } => Ok(Some(self.subject(target)?)),
            PropertyValue::Uri(iri) => Ok(Some(NamedNode::new(iri.as_str())?)),
            _ => Ok(None),
        }
    }

    /// Convert a stored value to an RDF object
    ///
    /// References are translated to subject URIs; binary payloads have no RDF
    /// form and yield `None`.
    pub fn object(&self, value: &PropertyValue) -> ProjectionResult<Option<RdfObject>> {
        let object = match value {
            PropertyValue::String(s) => Literal::new_simple_literal(s.as_str()).into(),
            PropertyValue::LangString { value, lang } => {
                Literal::new_language_tagged_literal(value.as_str(), lang.as_str())?.into()
            }
            PropertyValue::Long(i) => Literal::long(*i).into(),
            PropertyValue::Double(d) => Literal::from(*d).into(),
            PropertyValue::Boolean(b) => Literal::from(*b).into(),
            PropertyValue::Date(d) => Literal::date_time(d).into(),
            PropertyValue::Uri(iri) => NamedNode::new(iri.as_str())?.into(),
            PropertyValue::Reference { target, .. } => self.subject(target)?.into(),
            PropertyValue::Binary(_) => return Ok(None),
        };
        Ok(Some(object))
    }
}

/// Turn a fallible stream constructor into a boxed iterator
pub(crate) fn flatten<'a>(stream: ProjectionResult<TripleStream<'a>>) -> Triples<'a> {
    match stream {
        Ok(stream) => Box::new(stream),
        Err(e) => Box::new(iter::once(Err(e))),
    }
}
