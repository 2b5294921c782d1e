//! Capability surface the projection engine reads from
//!
//! Implementations are synchronous: every call may block on backend I/O and
//! returns a [`StoreError`] on failure. Nothing here mutates the store.

use super::fixity::StoredCopy;
use super::property::ReferenceKind;
use super::resource::Resource;
use super::types::ResourceId;
use super::version::Version;
use crate::rdf::NamespaceRegistry;
use thiserror::Error;

/// Errors that can occur while reading the store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Resource {0} not found")]
    NotFound(ResourceId),

    #[error("Access denied to {0}")]
    AccessDenied(ResourceId),

    #[error("Resource {0} already exists")]
    AlreadyExists(ResourceId),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Fixture error: {0}")]
    Fixture(#[from] serde_yaml::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Lazily produced children of a resource
pub type ResourceIter<'a> = Box<dyn Iterator<Item = StoreResult<Resource>> + 'a>;

/// Permissions that can be probed without side effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    AddNode,
    SetProperty,
    Remove,
}

impl Permission {
    /// Everything a writer needs
    pub const WRITE: [Permission; 3] = [Permission::AddNode, Permission::SetProperty, Permission::Remove];
}

/// A property elsewhere in the store that points at a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundReference {
    /// Resource owning the referring property
    pub owner: ResourceId,
    /// Stored property name, possibly with its reference suffix
    pub property: String,
    pub kind: ReferenceKind,
}

/// Read-only view of the hierarchical store
pub trait RepositoryStore {
    /// Look up a resource; `Ok(None)` when nothing exists at `id`
    fn resource(&self, id: &ResourceId) -> StoreResult<Option<Resource>>;

    /// Look up a resource that must exist
    fn require(&self, id: &ResourceId) -> StoreResult<Resource> {
        self.resource(id)?.ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Addressable children in store order; descriptions and hash resources
    /// are not listed
    fn children<'a>(&'a self, id: &ResourceId) -> StoreResult<ResourceIter<'a>>;

    /// Nested hash resources directly owned by `id`
    fn hash_children(&self, id: &ResourceId) -> StoreResult<Vec<Resource>>;

    /// Version history, oldest first
    fn versions(&self, id: &ResourceId) -> StoreResult<Vec<Version>>;

    /// Properties anywhere in the store referencing `id`
    fn inbound_references(&self, id: &ResourceId) -> StoreResult<Vec<InboundReference>>;

    /// Resources whose `property` holds the URI value `iri`
    fn uri_holders(&self, property: &str, iri: &str) -> StoreResult<Vec<ResourceId>>;

    /// Probe permissions; denial is reported as [`StoreError::AccessDenied`]
    fn check_permissions(&self, id: &ResourceId, permissions: &[Permission]) -> StoreResult<()>;

    /// Registered namespace prefixes
    fn namespaces(&self) -> StoreResult<NamespaceRegistry>;

    /// Stored copies of a binary's content
    fn binary_copies(&self, id: &ResourceId) -> StoreResult<Vec<StoredCopy>>;
}
