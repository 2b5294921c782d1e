use chrono::{TimeZone, Utc};
use ldprism::rdf::vocab;
use ldprism::rdf::NamespaceRegistry;
use ldprism::repository::{
    InboundReference, Permission, ResourceIter, StoredCopy, Version,
};
use ldprism::{
    check_fixity, ExpectedFixity, InMemoryStore, ProjectionConfig, ProjectionEngine, ProjectionError,
    ProjectionOptions, RepositoryEnvironment, RepositoryStore, Resource, ResourceId, StoreError, StoreResult, Triple,
};
use std::cell::Cell;
use std::collections::HashSet;

const BASE: &str = "http://localhost:8080/rest";

fn engine_with(options: ProjectionOptions) -> ProjectionEngine {
    ProjectionEngine::new(ProjectionConfig::new(BASE).with_options(options))
}

fn objects_of(triples: &[Triple], predicate: &str) -> Vec<String> {
    triples
        .iter()
        .filter(|t| t.predicate.as_str() == predicate)
        .map(|t| match t.object.as_named_node() {
            Some(node) => node.as_str().to_string(),
            None => t.object.as_literal().map(|l| l.value().to_string()).unwrap_or_default(),
        })
        .collect()
}

#[test]
fn test_containment_lists_every_child_once() {
    let mut store = InMemoryStore::new();
    store.insert(Resource::container("/c")).unwrap();
    for i in 0..25 {
        store.insert(Resource::container(format!("/c/child{}", i))).unwrap();
    }
    // neither a hash resource nor a binary's description is a child
    store.insert(Resource::new("/c/#/note")).unwrap();
    let file = ResourceId::new("/c/file");
    store
        .insert_binary(Resource::binary("/c/file"), Resource::description_of(&file), "bytes")
        .unwrap();

    let engine = engine_with(ProjectionOptions::default());
    let translator = engine.config().translator().unwrap();
    let triples = engine
        .project(&store, &translator, &ResourceId::new("/c"))
        .unwrap()
        .into_vec()
        .unwrap();

    let contained = objects_of(&triples, vocab::contains().as_str());
    assert_eq!(contained.len(), 26);
    let unique: HashSet<&String> = contained.iter().collect();
    assert_eq!(unique.len(), 26);

    for i in 0..25 {
        assert!(contained.contains(&format!("{}/c/child{}", BASE, i)));
    }
    assert!(contained.contains(&format!("{}/c/file/fcr:metadata", BASE)));
    assert!(!contained.iter().any(|c| c.contains('#')));
}

#[test]
fn test_projection_is_idempotent() {
    let mut store = InMemoryStore::new();
    store.add_namespace("dc", "http://purl.org/dc/elements/1.1/");
    store
        .insert(Resource::container("/c").with_property("dc:title", "Title"))
        .unwrap();
    store.insert(Resource::container("/c/a")).unwrap();
    store.insert(Resource::new("/c/#/part").with_property("dc:title", "Part")).unwrap();

    let options = ProjectionOptions {
        include_inbound_references: true,
        include_namespaces: true,
        embed_children: true,
        ..ProjectionOptions::default()
    };
    let engine = engine_with(options);
    let translator = engine.config().translator().unwrap();
    let id = ResourceId::new("/c");

    let first = engine.project(&store, &translator, &id).unwrap().into_set().unwrap();
    let second = engine.project(&store, &translator, &id).unwrap().into_set().unwrap();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_versions_skip_baseline() {
    let mut store = InMemoryStore::new();
    store.insert(Resource::container("/doc")).unwrap();
    let id = ResourceId::new("/doc");
    let day = |d| Utc.with_ymd_and_hms(2015, 1, d, 0, 0, 0).unwrap();
    store.add_version(&id, Version::root(day(1))).unwrap();
    store.add_version(&id, Version::new(day(2)).with_label("v1")).unwrap();
    store.add_version(&id, Version::new(day(3))).unwrap();
    store
        .add_version(&id, Version::new(day(4)).with_label("v2").with_label("final"))
        .unwrap();

    let engine = engine_with(ProjectionOptions {
        include_versions: true,
        ..ProjectionOptions::default()
    });
    let translator = engine.config().translator().unwrap();
    let triples = engine.project(&store, &translator, &id).unwrap().into_vec().unwrap();

    let versions = objects_of(&triples, vocab::has_version().as_str());
    assert_eq!(
        versions,
        vec![
            format!("{}/doc/fcr:versions/v1", BASE),
            format!("{}/doc/fcr:versions/v2", BASE),
        ]
    );
    let labels = objects_of(&triples, vocab::has_version_label().as_str());
    assert!(labels.contains(&"final".to_string()));
}

#[test]
fn test_versions_off_by_default() {
    let mut store = InMemoryStore::new();
    store.insert(Resource::container("/doc")).unwrap();
    let id = ResourceId::new("/doc");
    store.add_version(&id, Version::new(Utc::now()).with_label("v1")).unwrap();

    let engine = ProjectionEngine::default();
    let translator = engine.config().translator().unwrap();
    let triples = engine.project(&store, &translator, &id).unwrap().into_vec().unwrap();
    assert!(objects_of(&triples, vocab::has_version().as_str()).is_empty());
}

#[test]
fn test_fixity_flags_every_copy() {
    let mut store = InMemoryStore::new();
    let id = ResourceId::new("/f");
    store
        .insert_binary(Resource::binary("/f"), Resource::description_of(&id), "data")
        .unwrap();
    store.add_copy(&id, StoredCopy::new("disk:/f", "corrupt")).unwrap();

    let results = check_fixity(&store, &id, &ExpectedFixity::of(b"data")).unwrap();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_success());
    assert!(!results[1].is_success());

    let engine = ProjectionEngine::default();
    let translator = engine.config().translator().unwrap();
    let triples = engine
        .project_fixity(&store, &translator, &id, results)
        .unwrap()
        .into_vec()
        .unwrap();

    assert_eq!(objects_of(&triples, vocab::has_fixity().as_str()).len(), 2);
    let mut outcomes = objects_of(&triples, vocab::has_event_outcome().as_str());
    outcomes.sort();
    assert_eq!(outcomes, vec!["BAD_CHECKSUM", "BAD_SIZE", "SUCCESS"]);

    let locations = objects_of(&triples, vocab::has_content_location_value().as_str());
    assert_eq!(locations, vec!["memory:/f", "disk:/f"]);
}

#[test]
fn test_root_descriptors_and_counters() {
    let store = InMemoryStore::new();
    let environment = RepositoryEnvironment::new()
        .with_descriptor("jcr.repository.name", "test repo")
        .with_counter(ldprism::repository::environment::FIXITY_CHECK_COUNTER, 7);
    let engine = ProjectionEngine::default().with_environment(environment);
    let translator = engine.config().translator().unwrap();

    let triples = engine
        .project(&store, &translator, &ResourceId::root())
        .unwrap()
        .into_vec()
        .unwrap();

    assert_eq!(objects_of(&triples, vocab::num_fixity_checks().as_str()), vec!["7"]);
    assert!(triples.iter().any(|t| t.predicate.as_str().ends_with("#repositoryJcrRepositoryName")));
    assert!(objects_of(&triples, vocab::has_parent().as_str()).is_empty());
}

#[test]
fn test_writable_follows_permissions() {
    let mut store = InMemoryStore::new();
    store.insert(Resource::container("/open")).unwrap();
    store.insert(Resource::container("/locked")).unwrap();
    store.set_read_only(&ResourceId::new("/locked"));

    let engine = ProjectionEngine::default();
    let translator = engine.config().translator().unwrap();
    let writable = |path: &str| {
        let triples = engine
            .project(&store, &translator, &ResourceId::new(path))
            .unwrap()
            .into_vec()
            .unwrap();
        objects_of(&triples, vocab::writable().as_str())
    };

    assert_eq!(writable("/open"), vec!["true"]);
    assert_eq!(writable("/locked"), vec!["false"]);
}

#[test]
fn test_missing_resource_fails_immediately() {
    let store = InMemoryStore::new();
    let engine = ProjectionEngine::default();
    let translator = engine.config().translator().unwrap();

    let result = engine.project(&store, &translator, &ResourceId::new("/nope"));
    assert!(matches!(result, Err(ProjectionError::Store(StoreError::NotFound(_)))));
}

#[test]
fn test_container_with_hash_resource_projects() {
    let mut store = InMemoryStore::new();
    store.insert(Resource::container("/c")).unwrap();
    store.insert(Resource::new_with_types("/c/#/part", ["ldp:RDFSource"])).unwrap();
    assert!(matches!(
        store.insert(Resource::new("/c/#/part/#/inner")),
        Err(StoreError::InvalidPath(_))
    ));

    let engine = ProjectionEngine::new(ProjectionConfig::new(BASE));
    let translator = engine.config().translator().unwrap();
    let triples = engine
        .project(&store, &translator, &ResourceId::new("/c"))
        .unwrap()
        .into_vec()
        .unwrap();
    let part = format!("{}/c#part", BASE);
    assert!(triples.iter().any(|t| t.subject.as_str() == part));
}

/// Wraps a store, counting children pulled and optionally failing after a
/// number of them
struct InstrumentedStore {
    inner: InMemoryStore,
    pulled: Cell<usize>,
    fail_after: Option<usize>,
}

impl InstrumentedStore {
    fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            pulled: Cell::new(0),
            fail_after: None,
        }
    }
}

impl RepositoryStore for InstrumentedStore {
    fn resource(&self, id: &ResourceId) -> StoreResult<Option<Resource>> {
        self.inner.resource(id)
    }

    fn children<'a>(&'a self, id: &ResourceId) -> StoreResult<ResourceIter<'a>> {
        let children = self.inner.children(id)?;
        Ok(Box::new(children.map(move |child| {
            let pulled = self.pulled.get() + 1;
            self.pulled.set(pulled);
            match self.fail_after {
                Some(limit) if pulled > limit => Err(StoreError::Backend("connection lost".to_string())),
                _ => child,
            }
        })))
    }

    fn hash_children(&self, id: &ResourceId) -> StoreResult<Vec<Resource>> {
        self.inner.hash_children(id)
    }

    fn versions(&self, id: &ResourceId) -> StoreResult<Vec<Version>> {
        self.inner.versions(id)
    }

    fn inbound_references(&self, id: &ResourceId) -> StoreResult<Vec<InboundReference>> {
        self.inner.inbound_references(id)
    }

    fn uri_holders(&self, property: &str, iri: &str) -> StoreResult<Vec<ResourceId>> {
        self.inner.uri_holders(property, iri)
    }

    fn check_permissions(&self, id: &ResourceId, permissions: &[Permission]) -> StoreResult<()> {
        self.inner.check_permissions(id, permissions)
    }

    fn namespaces(&self) -> StoreResult<NamespaceRegistry> {
        self.inner.namespaces()
    }

    fn binary_copies(&self, id: &ResourceId) -> StoreResult<Vec<StoredCopy>> {
        self.inner.binary_copies(id)
    }
}

fn large_container(children: usize) -> InMemoryStore {
    let mut store = InMemoryStore::new();
    store.insert(Resource::container("/big")).unwrap();
    for i in 0..children {
        store.insert(Resource::container(format!("/big/{}", i))).unwrap();
    }
    store
}

#[test]
fn test_abandoned_stream_stops_pulling_children() {
    let store = InstrumentedStore::new(large_container(10_000));
    let engine = engine_with(ProjectionOptions {
        include_membership: false,
        ..ProjectionOptions::default()
    });
    let translator = engine.config().translator().unwrap();
    let contains = vocab::contains();

    let stream = engine.project(&store, &translator, &ResourceId::new("/big")).unwrap();
    let mut first_child = None;
    for triple in stream {
        let triple = triple.unwrap();
        if triple.predicate == contains {
            first_child = Some(triple);
            break;
        }
    }

    assert!(first_child.is_some());
    assert_eq!(store.pulled.get(), 1);
}

#[test]
fn test_building_the_stream_reads_no_children() {
    let store = InstrumentedStore::new(large_container(100));
    let engine = ProjectionEngine::default();
    let translator = engine.config().translator().unwrap();

    let stream = engine.project(&store, &translator, &ResourceId::new("/big")).unwrap();
    assert_eq!(store.pulled.get(), 0);

    let triples: Vec<_> = stream.take(2).collect();
    assert_eq!(triples.len(), 2);
    assert_eq!(store.pulled.get(), 0);
}

#[test]
fn test_store_fault_aborts_stream() {
    let mut store = InstrumentedStore::new(large_container(10));
    store.fail_after = Some(3);
    let engine = engine_with(ProjectionOptions {
        include_membership: false,
        ..ProjectionOptions::default()
    });
    let translator = engine.config().translator().unwrap();

    let result = engine
        .project(&store, &translator, &ResourceId::new("/big"))
        .unwrap()
        .into_vec();
    assert!(matches!(result, Err(ProjectionError::Store(StoreError::Backend(_)))));
}
