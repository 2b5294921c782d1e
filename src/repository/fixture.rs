//! YAML fixtures describing a whole repository
//!
//! ```yaml
//! namespaces:
//!   ex: http://example.org/
//! resources:
//!   - id: /books
//!     types: [fedora:Container, ldp:DirectContainer]
//!     properties:
//!       ldp:hasMemberRelation: [{type: uri, value: "http://example.org/item"}]
//!   - id: /books/file
//!     types: [fedora:Binary]
//!     content: hello
//! ```
//!
//! Resources are inserted in listing order, so parents must come first. A
//! binary with `content` gets its description created automatically.

use super::environment::RepositoryEnvironment;
use super::fixity::StoredCopy;
use super::memory::InMemoryStore;
use super::resource::Resource;
use super::store::{RepositoryStore, StoreResult};
use super::types::ResourceId;
use super::version::Version;
use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// A stored copy as written in a fixture
#[derive(Debug, Clone, Deserialize)]
pub struct CopyFixture {
    pub location: String,
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceFixture {
    #[serde(flatten)]
    pub resource: Resource,

    #[serde(default)]
    pub versions: Vec<Version>,

    /// Content of a binary; stored as its primary copy
    #[serde(default)]
    pub content: Option<String>,

    /// Extra stored copies
    #[serde(default)]
    pub copies: Vec<CopyFixture>,
}

/// Repository contents loaded from YAML
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositoryFixture {
    #[serde(default)]
    pub namespaces: IndexMap<String, String>,

    #[serde(default)]
    pub resources: Vec<ResourceFixture>,

    /// Paths on which writes are denied
    #[serde(default)]
    pub read_only: Vec<String>,

    #[serde(default)]
    pub environment: RepositoryEnvironment,
}

impl RepositoryFixture {
    pub fn from_yaml_str(yaml: &str) -> StoreResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        info!("Loading repository fixture from {}", path.display());
        Self::from_yaml_str(&yaml)
    }

    /// Build a store from this fixture
    pub fn into_store(self) -> StoreResult<InMemoryStore> {
        let mut store = InMemoryStore::new();
        for (prefix, iri) in self.namespaces {
            store.add_namespace(prefix, iri);
        }

        for fixture in self.resources {
            let ResourceFixture {
                resource,
                versions,
                content,
                copies,
            } = fixture;
            let id = resource.id.clone();

            if id.is_root() {
                merge_into_root(&mut store, resource)?;
            } else if let Some(content) = content {
                let description = Resource::description_of(&id);
                store.insert_binary(resource, description, content)?;
            } else {
                store.insert(resource)?;
            }

            for version in versions {
                store.add_version(&id, version)?;
            }
            for copy in copies {
                store.add_copy(&id, StoredCopy::new(copy.location, copy.content))?;
            }
        }

        for path in self.read_only {
            store.set_read_only(&path.into());
        }

        info!("Loaded fixture with {} resources", store.len());
        Ok(store)
    }
}

fn merge_into_root(store: &mut InMemoryStore, resource: Resource) -> StoreResult<()> {
    let mut root = store.require(&ResourceId::root())?;
    for ty in resource.types {
        root.add_type(ty);
    }
    root.properties.extend(resource.properties);
    store.update(root)
}
