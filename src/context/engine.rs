//! Assembles context modules into one stream per resource

use super::scope::ContextScope;
use super::{
    acl, children, content, embedded, fixity, hash, membership, namespaces, parent, properties, references, root,
    types, versions,
};
use crate::config::ProjectionConfig;
use crate::error::ProjectionResult;
use crate::rdf::TripleStream;
use crate::repository::{FixityResult, RepositoryEnvironment, RepositoryStore, Resource, ResourceId};
use crate::translator::IdentifierTranslator;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, info};

/// One facet of a resource's description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    Type,
    Properties,
    Parent,
    Children,
    Content,
    Membership,
    InverseMembership,
    References,
    Fixity,
    Versions,
    Namespaces,
    Root,
    Writable,
    Hash,
    EmbeddedChildren,
}

impl ContextKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextKind::Type => "type",
            ContextKind::Properties => "properties",
            ContextKind::Parent => "parent",
            ContextKind::Children => "children",
            ContextKind::Content => "content",
            ContextKind::Membership => "membership",
            ContextKind::InverseMembership => "inverse-membership",
            ContextKind::References => "references",
            ContextKind::Fixity => "fixity",
            ContextKind::Versions => "versions",
            ContextKind::Namespaces => "namespaces",
            ContextKind::Root => "root",
            ContextKind::Writable => "writable",
            ContextKind::Hash => "hash",
            ContextKind::EmbeddedChildren => "embedded-children",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Projection engine
///
/// Stateless apart from its configuration and the repository environment;
/// one engine can serve any number of projections.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
    environment: RepositoryEnvironment,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self {
            config,
            environment: RepositoryEnvironment::default(),
        }
    }

    /// Facts shown on the repository root
    pub fn with_environment(mut self, environment: RepositoryEnvironment) -> Self {
        self.environment = environment;
        self
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    pub fn environment(&self) -> &RepositoryEnvironment {
        &self.environment
    }

    /// Facets describing `resource` under the configured options
    pub fn context_kinds(&self, resource: &Resource) -> Vec<ContextKind> {
        let options = &self.config.options;
        let mut kinds = Vec::new();

        if options.include_namespaces {
            kinds.push(ContextKind::Namespaces);
        }
        kinds.push(ContextKind::Type);
        kinds.push(ContextKind::Properties);
        if !resource.is_root() {
            kinds.push(ContextKind::Parent);
        }
        if resource.is_binary() || resource.is_description() {
            kinds.push(ContextKind::Content);
        }
        if resource.is_root() {
            kinds.push(ContextKind::Root);
        }
        kinds.push(ContextKind::Hash);
        if options.include_writable {
            kinds.push(ContextKind::Writable);
        }
        if options.include_versions {
            kinds.push(ContextKind::Versions);
        }
        if options.include_membership {
            kinds.push(ContextKind::Membership);
            if !resource.is_root() {
                kinds.push(ContextKind::InverseMembership);
            }
        }
        if options.include_inbound_references {
            kinds.push(ContextKind::References);
        }
        if resource.is_container() {
            if options.include_containment {
                kinds.push(ContextKind::Children);
            }
            if options.embed_children {
                kinds.push(ContextKind::EmbeddedChildren);
            }
        }
        kinds
    }

    /// Describe the resource at `id`
    ///
    /// The resource itself is read immediately, so a missing resource or an
    /// out-of-domain path fails here. Every facet is built only when the
    /// stream reaches it.
    pub fn project<'a>(
        &'a self,
        store: &'a dyn RepositoryStore,
        translator: &'a IdentifierTranslator,
        id: &ResourceId,
    ) -> ProjectionResult<TripleStream<'a>> {
        let resource = store.require(id)?;
        let kinds = self.context_kinds(&resource);
        self.project_kinds(store, translator, resource, &kinds, Vec::new())
    }

    /// Describe the fixity of every stored copy of the binary at `id`
    pub fn project_fixity<'a>(
        &'a self,
        store: &'a dyn RepositoryStore,
        translator: &'a IdentifierTranslator,
        id: &ResourceId,
        results: Vec<FixityResult>,
    ) -> ProjectionResult<TripleStream<'a>> {
        let resource = store.require(id)?;
        self.project_kinds(store, translator, resource, &[ContextKind::Fixity], results)
    }

    /// Describe `resource` with exactly the given facets, in order
    pub fn project_kinds<'a>(
        &'a self,
        store: &'a dyn RepositoryStore,
        translator: &'a IdentifierTranslator,
        resource: Resource,
        kinds: &[ContextKind],
        fixity_results: Vec<FixityResult>,
    ) -> ProjectionResult<TripleStream<'a>> {
        translator.forward(&resource.id)?;
        let scope = ContextScope::new(store, translator)?;
        info!(
            "Projecting {} ({})",
            resource.id,
            kinds.iter().map(ContextKind::as_str).collect::<Vec<_>>().join(", ")
        );

        let resource = Rc::new(resource);
        let fixity_results: Rc<[FixityResult]> = fixity_results.into();
        let mut stream = TripleStream::empty();

        for &kind in kinds {
            if kind == ContextKind::Namespaces {
                // prefixes must be on the stream before anything is consumed
                stream = stream.concat(namespaces::triples(&scope, &self.config.reserved_namespace)?);
                continue;
            }

            let scope = scope.clone();
            let resource = Rc::clone(&resource);
            let fixity_results = Rc::clone(&fixity_results);
            stream = stream.concat_lazy(move || {
                debug!("Building {} context for {}", kind, resource.id);
                self.context(kind, &scope, &resource, &fixity_results)
            });
        }

        Ok(stream)
    }

    fn context<'a>(
        &'a self,
        kind: ContextKind,
        scope: &ContextScope<'a>,
        resource: &Resource,
        fixity_results: &[FixityResult],
    ) -> ProjectionResult<TripleStream<'a>> {
        let server_managed = self.config.options.include_server_managed;
        match kind {
            ContextKind::Type => types::triples(scope, resource),
            ContextKind::Properties => properties::triples(scope, resource, server_managed),
            ContextKind::Parent => parent::triples(scope, resource),
            ContextKind::Children => children::triples(scope, resource),
            ContextKind::Content => content::triples(scope, resource),
            ContextKind::Membership => membership::triples(scope, resource),
            ContextKind::InverseMembership => membership::inverse_triples(scope, resource),
            ContextKind::References => references::triples(scope, resource),
            ContextKind::Fixity => fixity::triples(scope, resource, fixity_results),
            ContextKind::Versions => versions::triples(scope, resource),
            ContextKind::Namespaces => namespaces::triples(scope, &self.config.reserved_namespace),
            ContextKind::Root => root::triples(scope, resource, &self.environment),
            ContextKind::Writable => acl::triples(scope, resource),
            ContextKind::Hash => hash::triples(scope, resource, server_managed),
            ContextKind::EmbeddedChildren => embedded::triples(scope, resource, server_managed),
        }
    }
}
