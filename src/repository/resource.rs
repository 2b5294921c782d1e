//! Resource implementation for the hierarchical store
//!
//! A resource is read-only from the projection engine's point of view. Its
//! classification (container, binary, description, hash) is derived from the
//! declared types and the shape of its path.

use super::property::{reference_property_name, PropertyMap, PropertyValue};
use super::types::{ResourceId, DESCRIPTION_SEGMENT};
use crate::rdf::vocab::{ldp_property, node_type};
use serde::{Deserialize, Serialize};

/// LDP interaction model of a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Basic,
    Direct,
    Indirect,
}

/// A node in the hierarchical store
///
/// Resources carry:
/// - A path identifier
/// - Declared types, as prefixed names in declaration order
/// - Properties (name → one or more values)
/// - A frozen flag for historical snapshots held by the version storage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Path of this resource
    pub id: ResourceId,

    /// Declared types (primary type, mixins, supertypes), deduplicated
    #[serde(default)]
    pub types: Vec<String>,

    /// Properties associated with this resource
    #[serde(default)]
    pub properties: PropertyMap,

    /// Whether this is a frozen snapshot of an earlier version
    #[serde(default)]
    pub frozen: bool,
}

impl Resource {
    /// Create a resource with no types and no properties
    pub fn new(id: impl Into<ResourceId>) -> Self {
        Resource {
            id: id.into(),
            types: Vec::new(),
            properties: PropertyMap::new(),
            frozen: false,
        }
    }

    /// Create a resource with declared types
    pub fn new_with_types<I, T>(id: impl Into<ResourceId>, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut resource = Self::new(id);
        for ty in types {
            resource.add_type(ty);
        }
        resource
    }

    /// Plain container (`fedora:Container`)
    pub fn container(id: impl Into<ResourceId>) -> Self {
        Self::new_with_types(id, [node_type::CONTAINER])
    }

    /// Binary resource (`fedora:Binary`)
    pub fn binary(id: impl Into<ResourceId>) -> Self {
        Self::new_with_types(id, [node_type::BINARY])
    }

    /// Description paired with the binary at `binary`
    pub fn description_of(binary: &ResourceId) -> Self {
        Self::new_with_types(binary.description(), [node_type::DESCRIPTION])
    }

    /// Add a declared type; duplicates are ignored
    pub fn add_type(&mut self, ty: impl Into<String>) {
        let ty = ty.into();
        if !self.has_type(&ty) {
            self.types.push(ty);
        }
    }

    /// Check if the resource declares a specific type
    pub fn has_type(&self, ty: &str) -> bool {
        self.types.iter().any(|t| t == ty)
    }

    /// Replace all values of a property with a single value
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(name.into(), vec![value.into()]);
    }

    /// Append a value to a (possibly new) multi-valued property
    pub fn add_property_value(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// Builder-style [`set_property`](Self::set_property)
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set_property(name, value);
        self
    }

    /// Builder-style [`add_type`](Self::add_type)
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.add_type(ty);
        self
    }

    /// Mark as a historical snapshot
    pub fn frozen(mut self) -> Self {
        self.frozen = true;
        self
    }

    /// All values of a property
    pub fn property(&self, name: &str) -> Option<&[PropertyValue]> {
        self.properties.get(name).map(Vec::as_slice)
    }

    /// First value of a property
    pub fn first_value(&self, name: &str) -> Option<&PropertyValue> {
        self.property(name).and_then(|values| values.first())
    }

    /// Values of `name`, falling back to its reference pseudo-property
    pub fn property_or_reference(&self, name: &str) -> Option<&[PropertyValue]> {
        self.property(name)
            .or_else(|| self.property(&reference_property_name(name)))
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn is_root(&self) -> bool {
        self.id.is_root() || self.has_type(node_type::REPOSITORY_ROOT)
    }

    pub fn is_binary(&self) -> bool {
        self.has_type(node_type::BINARY)
    }

    pub fn is_description(&self) -> bool {
        self.has_type(node_type::DESCRIPTION) || self.id.name() == DESCRIPTION_SEGMENT
    }

    pub fn is_hash(&self) -> bool {
        self.id.is_hash()
    }

    pub fn is_container(&self) -> bool {
        self.is_root()
            || self.has_type(node_type::CONTAINER)
            || self.has_type(node_type::BASIC_CONTAINER)
            || self.has_type(node_type::DIRECT_CONTAINER)
            || self.has_type(node_type::INDIRECT_CONTAINER)
    }

    /// LDP interaction model; `None` when the resource is not a container
    pub fn container_kind(&self) -> Option<ContainerKind> {
        if self.has_type(node_type::INDIRECT_CONTAINER) {
            Some(ContainerKind::Indirect)
        } else if self.has_type(node_type::DIRECT_CONTAINER) {
            Some(ContainerKind::Direct)
        } else if self.is_container() {
            Some(ContainerKind::Basic)
        } else {
            None
        }
    }

    /// Whether a specific interaction model is declared
    pub fn declares_container_kind(&self) -> bool {
        self.has_type(node_type::BASIC_CONTAINER)
            || self.has_type(node_type::DIRECT_CONTAINER)
            || self.has_type(node_type::INDIRECT_CONTAINER)
    }

    /// The other half of a binary/description pair
    pub fn described_resource(&self) -> Option<ResourceId> {
        if self.is_description() {
            self.id.parent_path()
        } else if self.is_binary() {
            Some(self.id.description())
        } else {
            None
        }
    }

    /// The side of this resource that has an RDF representation
    pub fn rdf_addressable(&self) -> ResourceId {
        if self.is_binary() {
            self.id.description()
        } else {
            self.id.clone()
        }
    }

    /// Path of the container holding this resource
    ///
    /// A description hangs below its binary, so its logical parent is the
    /// binary's parent. A hash resource belongs to the resource it is nested in.
    pub fn parent(&self) -> Option<ResourceId> {
        if let Some(owner) = self.id.hash_owner() {
            return Some(owner);
        }
        let parent = self.id.parent_path()?;
        if self.is_description() {
            parent.parent_path()
        } else {
            Some(parent)
        }
    }

    pub fn has_member_relation(&self) -> Option<&PropertyValue> {
        self.first_value(ldp_property::HAS_MEMBER_RELATION)
    }

    pub fn is_member_of_relation(&self) -> Option<&PropertyValue> {
        self.first_value(ldp_property::IS_MEMBER_OF_RELATION)
    }

    pub fn membership_resource(&self) -> Option<&PropertyValue> {
        self.property_or_reference(ldp_property::MEMBERSHIP_RESOURCE)
            .and_then(|values| values.first())
    }

    pub fn inserted_content_relation(&self) -> Option<&PropertyValue> {
        self.first_value(ldp_property::INSERTED_CONTENT_RELATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_creation() {
        let resource = Resource::container("/a").with_type("ex:Book");
        assert_eq!(resource.types, vec!["fedora:Container", "ex:Book"]);
        assert!(resource.is_container());
        assert!(!resource.is_binary());
    }

    #[test]
    fn test_duplicate_types_ignored() {
        let mut resource = Resource::container("/a");
        resource.add_type("fedora:Container");
        assert_eq!(resource.types.len(), 1);
    }

    #[test]
    fn test_container_kind() {
        assert_eq!(Resource::container("/a").container_kind(), Some(ContainerKind::Basic));
        assert_eq!(
            Resource::container("/a")
                .with_type(node_type::DIRECT_CONTAINER)
                .container_kind(),
            Some(ContainerKind::Direct)
        );
        assert_eq!(
            Resource::container("/a")
                .with_type(node_type::INDIRECT_CONTAINER)
                .container_kind(),
            Some(ContainerKind::Indirect)
        );
        assert_eq!(Resource::binary("/f").container_kind(), None);
        assert!(Resource::new("/").is_container());
    }

    #[test]
    fn test_binary_description_pairing() {
        let binary = Resource::binary("/c/file");
        let description = Resource::description_of(&binary.id);

        assert_eq!(binary.rdf_addressable(), description.id);
        assert_eq!(binary.described_resource(), Some(description.id.clone()));
        assert_eq!(description.described_resource(), Some(binary.id.clone()));
        assert_eq!(description.rdf_addressable(), description.id);
    }

    #[test]
    fn test_parent() {
        let binary = Resource::binary("/c/file");
        let description = Resource::description_of(&binary.id);
        assert_eq!(binary.parent(), Some(ResourceId::new("/c")));
        assert_eq!(description.parent(), Some(ResourceId::new("/c")));
        assert_eq!(Resource::new("/c/#/frag").parent(), Some(ResourceId::new("/c")));
        assert_eq!(Resource::new("/").parent(), None);
    }

    #[test]
    fn test_properties() {
        let mut resource = Resource::container("/a");
        resource.add_property_value("dc:title", "one");
        resource.add_property_value("dc:title", "two");
        assert_eq!(resource.property("dc:title").map(<[_]>::len), Some(2));

        resource.set_property("dc:title", "only");
        assert_eq!(resource.first_value("dc:title"), Some(&PropertyValue::from("only")));
    }

    #[test]
    fn test_reference_fallback() {
        let resource = Resource::new("/p").with_property("ex:proxyFor_ref", PropertyValue::reference("/x"));
        let values = resource.property_or_reference("ex:proxyFor").unwrap();
        assert_eq!(values[0].as_reference(), Some(&ResourceId::new("/x")));
    }
}
