//! Property values stored on repository resources
//!
//! Every property holds one or more values; the type tag of a property is the
//! type of its values. Reference values point at other resources by path and
//! come in three strengths, mirroring the hierarchical store.

use super::types::ResourceId;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix of the pseudo-property that stores a reference-typed value
pub const REFERENCE_SUFFIX: &str = "_ref";

/// How strongly a reference binds its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    /// Target may not be removed while referenced
    Strong,
    /// Target may disappear
    Weak,
    /// Reference by path rather than identity
    Path,
}

/// Property value type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PropertyValue {
    String(String),
    LangString { value: String, lang: String },
    Long(i64),
    Double(f64),
    Boolean(bool),
    Date(DateTime<Utc>),
    /// External IRI
    Uri(String),
    /// Pointer at another resource in the store
    Reference { target: ResourceId, kind: ReferenceKind },
    /// Binary payload; never projected
    Binary(u64),
}

impl PropertyValue {
    pub fn reference(target: impl Into<ResourceId>) -> Self {
        PropertyValue::Reference {
            target: target.into(),
            kind: ReferenceKind::Strong,
        }
    }

    pub fn weak_reference(target: impl Into<ResourceId>) -> Self {
        PropertyValue::Reference {
            target: target.into(),
            kind: ReferenceKind::Weak,
        }
    }

    pub fn path_reference(target: impl Into<ResourceId>) -> Self {
        PropertyValue::Reference {
            target: target.into(),
            kind: ReferenceKind::Path,
        }
    }

    pub fn uri(iri: impl Into<String>) -> Self {
        PropertyValue::Uri(iri.into())
    }

    /// Reference target, if this is a reference of any strength
    pub fn as_reference(&self) -> Option<&ResourceId> {
        match self {
            PropertyValue::Reference { target, .. } => Some(target),
            _ => None,
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, PropertyValue::Reference { .. })
    }

    /// Lexical form for string-ish values (strings and IRIs)
    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) | PropertyValue::Uri(s) => Some(s),
            PropertyValue::LangString { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            PropertyValue::Long(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            PropertyValue::Date(d) => Some(d),
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::LangString { .. } => "LangString",
            PropertyValue::Long(_) => "Long",
            PropertyValue::Double(_) => "Double",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::Date(_) => "Date",
            PropertyValue::Uri(_) => "URI",
            PropertyValue::Reference { kind: ReferenceKind::Strong, .. } => "Reference",
            PropertyValue::Reference { kind: ReferenceKind::Weak, .. } => "WeakReference",
            PropertyValue::Reference { kind: ReferenceKind::Path, .. } => "Path",
            PropertyValue::Binary(_) => "Binary",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::LangString { value, lang } => write!(f, "\"{}\"@{}", value, lang),
            PropertyValue::Long(i) => write!(f, "{}", i),
            PropertyValue::Double(d) => write!(f, "{}", d),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::Date(d) => write!(f, "{}", d.to_rfc3339()),
            PropertyValue::Uri(u) => write!(f, "<{}>", u),
            PropertyValue::Reference { target, .. } => write!(f, "ref({})", target),
            PropertyValue::Binary(size) => write!(f, "binary({} bytes)", size),
        }
    }
}

// Convenience conversions
impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Long(i)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Double(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(d: DateTime<Utc>) -> Self {
        PropertyValue::Date(d)
    }
}

/// Properties in insertion order: name → one-or-many values
pub type PropertyMap = IndexMap<String, Vec<PropertyValue>>;

/// Name of the pseudo-property holding references for `name`
pub fn reference_property_name(name: &str) -> String {
    format!("{}{}", name, REFERENCE_SUFFIX)
}

/// Inverse of [`reference_property_name`]
pub fn strip_reference_suffix(name: &str) -> &str {
    name.strip_suffix(REFERENCE_SUFFIX).unwrap_or(name)
}
