//! In-memory repository store
//!
//! Reference implementation of [`RepositoryStore`] backed by hash maps.
//! Resources are kept in insertion order so child iteration is stable, with
//! adjacency lists for addressable and hash children.

use super::fixity::StoredCopy;
use super::property::{strip_reference_suffix, PropertyValue};
use super::resource::Resource;
use super::store::{InboundReference, Permission, RepositoryStore, ResourceIter, StoreError, StoreResult};
use super::types::{ResourceId, HASH_SEGMENT};
use super::version::Version;
use crate::rdf::vocab::node_type;
use crate::rdf::NamespaceRegistry;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// In-memory store
///
/// - resources: ResourceId -> Resource (insertion ordered)
/// - children: ResourceId -> Vec<ResourceId> (addressable children)
/// - hash_children: ResourceId -> Vec<ResourceId> (nested hash resources)
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    resources: IndexMap<ResourceId, Resource>,
    children: HashMap<ResourceId, Vec<ResourceId>>,
    hash_children: HashMap<ResourceId, Vec<ResourceId>>,
    versions: HashMap<ResourceId, Vec<Version>>,
    copies: HashMap<ResourceId, Vec<StoredCopy>>,
    /// Resources on which every write permission is denied
    read_only: HashSet<ResourceId>,
    namespaces: NamespaceRegistry,
}

impl InMemoryStore {
    /// Create a store holding only the repository root
    pub fn new() -> Self {
        let root = Resource::new_with_types(
            ResourceId::root(),
            [node_type::CONTAINER, node_type::REPOSITORY_ROOT],
        );
        let mut resources = IndexMap::new();
        resources.insert(root.id.clone(), root);

        InMemoryStore {
            resources,
            children: HashMap::new(),
            hash_children: HashMap::new(),
            versions: HashMap::new(),
            copies: HashMap::new(),
            read_only: HashSet::new(),
            namespaces: NamespaceRegistry::with_defaults(),
        }
    }

    /// Add a resource below an existing parent
    ///
    /// A description is stored below its binary; a hash resource below the
    /// resource owning it. Hash resources nest one level deep only.
    pub fn insert(&mut self, resource: Resource) -> StoreResult<()> {
        let id = resource.id.clone();
        if self.resources.contains_key(&id) {
            return Err(StoreError::AlreadyExists(id));
        }
        if id.is_root() {
            return Err(StoreError::AlreadyExists(id));
        }
        if id.name() == HASH_SEGMENT {
            return Err(StoreError::InvalidPath(id.to_string()));
        }

        if let Some(owner) = id.hash_owner() {
            if id.segments().filter(|s| *s == HASH_SEGMENT).count() > 1 {
                return Err(StoreError::InvalidPath(format!("{}: hash resources do not nest", id)));
            }
            if !self.resources.contains_key(&owner) {
                return Err(StoreError::InvalidPath(format!("{}: owner {} does not exist", id, owner)));
            }
            trace!("Adding hash resource {} to {}", id, owner);
            self.hash_children.entry(owner).or_default().push(id.clone());
        } else {
            let parent = id
                .parent_path()
                .ok_or_else(|| StoreError::InvalidPath(id.to_string()))?;
            let parent_resource = self
                .resources
                .get(&parent)
                .ok_or_else(|| StoreError::InvalidPath(format!("{}: parent {} does not exist", id, parent)))?;

            // a description hangs off its binary without being a child of it
            let pairs_with_binary = resource.is_description() && parent_resource.is_binary();
            if !pairs_with_binary {
                self.children.entry(parent).or_default().push(id.clone());
            }
        }

        self.resources.insert(id, resource);
        Ok(())
    }

    /// Add a binary together with its description and a stored copy
    pub fn insert_binary(&mut self, binary: Resource, description: Resource, content: impl Into<Vec<u8>>) -> StoreResult<()> {
        let id = binary.id.clone();
        self.insert(binary)?;
        self.insert(description)?;
        self.add_copy(&id, StoredCopy::new(format!("memory:{}", id), content))
    }

    /// Replace a stored resource, keeping its place in every index
    pub fn update(&mut self, resource: Resource) -> StoreResult<()> {
        match self.resources.get_mut(&resource.id) {
            Some(slot) => {
                *slot = resource;
                Ok(())
            }
            None => Err(StoreError::NotFound(resource.id)),
        }
    }

    pub fn get(&self, id: &ResourceId) -> Option<&Resource> {
        self.resources.get(id)
    }

    pub fn get_mut(&mut self, id: &ResourceId) -> Option<&mut Resource> {
        self.resources.get_mut(id)
    }

    pub fn add_version(&mut self, id: &ResourceId, version: Version) -> StoreResult<()> {
        self.ensure_exists(id)?;
        self.versions.entry(id.clone()).or_default().push(version);
        Ok(())
    }

    pub fn add_copy(&mut self, id: &ResourceId, copy: StoredCopy) -> StoreResult<()> {
        self.ensure_exists(id)?;
        self.copies.entry(id.clone()).or_default().push(copy);
        Ok(())
    }

    /// Deny every write permission on `id`
    pub fn set_read_only(&mut self, id: &ResourceId) {
        self.read_only.insert(id.clone());
    }

    pub fn add_namespace(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.namespaces.add_prefix(prefix, iri);
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// All resources in insertion order
    pub fn all_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    fn ensure_exists(&self, id: &ResourceId) -> StoreResult<()> {
        if self.resources.contains_key(id) {
            Ok(())
        } else {
            Err(StoreError::NotFound(id.clone()))
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryStore for InMemoryStore {
    fn resource(&self, id: &ResourceId) -> StoreResult<Option<Resource>> {
        Ok(self.resources.get(id).cloned())
    }

    fn children<'a>(&'a self, id: &ResourceId) -> StoreResult<ResourceIter<'a>> {
        self.ensure_exists(id)?;
        let ids = self.children.get(id).map(Vec::as_slice).unwrap_or_default();
        Ok(Box::new(ids.iter().map(move |child| self.require(child))))
    }

    fn hash_children(&self, id: &ResourceId) -> StoreResult<Vec<Resource>> {
        self.hash_children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|child| self.require(child))
            .collect()
    }

    fn versions(&self, id: &ResourceId) -> StoreResult<Vec<Version>> {
        Ok(self.versions.get(id).cloned().unwrap_or_default())
    }

    fn inbound_references(&self, id: &ResourceId) -> StoreResult<Vec<InboundReference>> {
        let mut inbound = Vec::new();
        for resource in self.resources.values() {
            for (name, values) in &resource.properties {
                for value in values {
                    if let PropertyValue::Reference { target, kind } = value {
                        if target == id {
                            inbound.push(InboundReference {
                                owner: resource.id.clone(),
                                property: name.clone(),
                                kind: *kind,
                            });
                        }
                    }
                }
            }
        }
        Ok(inbound)
    }

    fn uri_holders(&self, property: &str, iri: &str) -> StoreResult<Vec<ResourceId>> {
        let holds = |resource: &Resource| {
            resource.properties.iter().any(|(name, values)| {
                strip_reference_suffix(name) == property
                    && values.iter().any(|value| matches!(value, PropertyValue::Uri(uri) if uri == iri))
            })
        };
        Ok(self
            .resources
            .values()
            .filter(|resource| holds(resource))
            .map(|resource| resource.id.clone())
            .collect())
    }

    fn check_permissions(&self, id: &ResourceId, permissions: &[Permission]) -> StoreResult<()> {
        self.ensure_exists(id)?;
        if !permissions.is_empty() && self.read_only.contains(id) {
            return Err(StoreError::AccessDenied(id.clone()));
        }
        Ok(())
    }

    fn namespaces(&self) -> StoreResult<NamespaceRegistry> {
        Ok(self.namespaces.clone())
    }

    fn binary_copies(&self, id: &ResourceId) -> StoreResult<Vec<StoredCopy>> {
        self.ensure_exists(id)?;
        Ok(self.copies.get(id).cloned().unwrap_or_default())
    }
}
