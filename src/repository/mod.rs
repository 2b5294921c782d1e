//! Repository capability surface
//!
//! This module provides:
//! - The resource model (paths, properties, versions, fixity)
//! - [`RepositoryStore`], the read-only interface the projection engine uses
//! - [`InMemoryStore`], a reference backend, and YAML fixtures to fill it

pub mod environment;
pub mod fixity;
pub mod fixture;
pub mod memory;
pub mod property;
pub mod resource;
pub mod store;
pub mod types;
pub mod version;

pub use environment::RepositoryEnvironment;
pub use fixity::{check_fixity, ExpectedFixity, FixityResult, FixityStatus, StoredCopy};
pub use fixture::RepositoryFixture;
pub use memory::InMemoryStore;
pub use property::{PropertyMap, PropertyValue, ReferenceKind};
pub use resource::{ContainerKind, Resource};
pub use store::{InboundReference, Permission, RepositoryStore, ResourceIter, StoreError, StoreResult};
pub use types::ResourceId;
pub use version::Version;
