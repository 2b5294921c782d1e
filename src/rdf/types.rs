//! Terms and triples of a projected graph
//!
//! Newtypes over the oxrdf primitives. A projected graph has no free blank
//! nodes: anything anonymous gets a fragment IRI under the subject it belongs
//! to, so a triple's subject is always a [`NamedNode`].

use chrono::{DateTime, SecondsFormat, Utc};
use oxrdf::{vocab::xsd, Literal as OxLiteral, NamedNode as OxNamedNode};
use std::fmt;
use thiserror::Error;

/// Errors building RDF terms
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

pub type RdfResult<T> = Result<T, RdfError>;

/// Absolute IRI
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode(OxNamedNode);

impl NamedNode {
    /// Parse and validate `iri`
    pub fn new(iri: impl Into<String>) -> RdfResult<Self> {
        let iri = iri.into();
        match OxNamedNode::new(iri.as_str()) {
            Ok(node) => Ok(Self(node)),
            Err(e) => Err(RdfError::InvalidIri(format!("{}: {}", iri, e))),
        }
    }

    /// Vocabulary constants are known to be valid
    pub(crate) fn from_static(iri: &'static str) -> Self {
        Self(OxNamedNode::new_unchecked(iri))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// The IRI up to its `#`, or all of it
    pub fn without_fragment(&self) -> &str {
        let iri = self.as_str();
        iri.split_once('#').map_or(iri, |(base, _)| base)
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Literal value: plain, language-tagged or typed
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal(OxLiteral);

impl Literal {
    pub fn new_simple_literal(value: impl Into<String>) -> Self {
        Self(OxLiteral::new_simple_literal(value))
    }

    pub fn new_language_tagged_literal(value: impl Into<String>, language: impl Into<String>) -> RdfResult<Self> {
        OxLiteral::new_language_tagged_literal(value, language)
            .map(Self)
            .map_err(|e| RdfError::InvalidLiteral(e.to_string()))
    }

    /// `xsd:long`
    pub fn long(value: i64) -> Self {
        Self(OxLiteral::new_typed_literal(value.to_string(), xsd::LONG))
    }

    /// `xsd:dateTime`, UTC with millisecond precision
    pub fn date_time(value: &DateTime<Utc>) -> Self {
        let lexical = value.to_rfc3339_opts(SecondsFormat::Millis, true);
        Self(OxLiteral::new_typed_literal(lexical, xsd::DATE_TIME))
    }

    /// Lexical form
    pub fn value(&self) -> &str {
        self.0.value()
    }

    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    pub fn datatype(&self) -> NamedNode {
        NamedNode(self.0.datatype().into_owned())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::new_simple_literal(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::long(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self(OxLiteral::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self(OxLiteral::from(value))
    }
}

/// Predicate position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RdfPredicate(NamedNode);

impl RdfPredicate {
    pub fn new(iri: impl Into<String>) -> RdfResult<Self> {
        NamedNode::new(iri).map(Self)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RdfPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<NamedNode> for RdfPredicate {
    fn from(node: NamedNode) -> Self {
        Self(node)
    }
}

impl From<RdfPredicate> for NamedNode {
    fn from(predicate: RdfPredicate) -> Self {
        predicate.0
    }
}

/// Object position of a triple
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RdfObject {
    NamedNode(NamedNode),
    Literal(Literal),
}

impl RdfObject {
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            RdfObject::NamedNode(node) => Some(node),
            RdfObject::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            RdfObject::Literal(literal) => Some(literal),
            RdfObject::NamedNode(_) => None,
        }
    }
}

impl fmt::Display for RdfObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RdfObject::NamedNode(node) => node.fmt(f),
            RdfObject::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<NamedNode> for RdfObject {
    fn from(node: NamedNode) -> Self {
        RdfObject::NamedNode(node)
    }
}

impl From<Literal> for RdfObject {
    fn from(literal: Literal) -> Self {
        RdfObject::Literal(literal)
    }
}

/// One statement about a named subject
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: NamedNode,
    pub predicate: RdfPredicate,
    pub object: RdfObject,
}

impl Triple {
    pub fn new(subject: NamedNode, predicate: impl Into<RdfPredicate>, object: impl Into<RdfObject>) -> Self {
        Self {
            subject,
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// N-Triples line, without the newline
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
