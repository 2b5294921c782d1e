//! Repository root descriptors, cluster settings and counters

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::vocab::{self, REPOSITORY_NAMESPACE};
use crate::rdf::{Literal, RdfPredicate, Triple, TripleStream};
use crate::repository::environment::{FIXITY_CHECK_COUNTER, FIXITY_ERROR_COUNTER, FIXITY_REPAIRED_COUNTER};
use crate::repository::{RepositoryEnvironment, Resource};
use tracing::debug;

/// `jcr.repository.name` → `fedora:repositoryJcrRepositoryName`
pub fn descriptor_predicate(key: &str) -> String {
    let camel: String = key
        .split('.')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect();
    format!("{}repository{}", REPOSITORY_NAMESPACE, camel)
}

pub fn triples<'a>(
    scope: &ContextScope<'a>,
    resource: &Resource,
    environment: &RepositoryEnvironment,
) -> ProjectionResult<TripleStream<'a>> {
    if !resource.is_root() {
        return Ok(TripleStream::empty());
    }
    let subject = scope.subject(&resource.id)?;
    let mut triples = Vec::new();

    let mut literal = |predicate: String, value: &str| match RdfPredicate::new(predicate) {
        Ok(predicate) => triples.push(Triple::new(
            subject.clone(),
            predicate,
            Literal::new_simple_literal(value),
        )),
        Err(e) => debug!("Skipping repository descriptor: {}", e),
    };

    for (key, value) in &environment.descriptors {
        literal(descriptor_predicate(key), value);
    }
    if let Some(cluster) = &environment.cluster {
        for (key, value) in cluster {
            literal(format!("{}{}", REPOSITORY_NAMESPACE, key), value);
        }
    }

    let counters = [
        (FIXITY_CHECK_COUNTER, vocab::num_fixity_checks()),
        (FIXITY_ERROR_COUNTER, vocab::num_fixity_errors()),
        (FIXITY_REPAIRED_COUNTER, vocab::num_fixity_repaired()),
    ];
    for (name, predicate) in counters {
        if let Some(count) = environment.counter(name) {
            triples.push(Triple::new(subject.clone(), predicate, Literal::long(count)));
        }
    }

    Ok(TripleStream::from_triples(triples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::{scope_over, values_of};
    use crate::repository::{InMemoryStore, ResourceId};
    use crate::translator::IdentifierTranslator;

    #[test]
    fn test_descriptor_predicate() {
        assert_eq!(
            descriptor_predicate("jcr.repository.name"),
            "http://fedora.info/definitions/v4/repository#repositoryJcrRepositoryName"
        );
    }

    #[test]
    fn test_root_triples() {
        let store = InMemoryStore::new();
        let translator = IdentifierTranslator::new("http://localhost/rest").unwrap();
        let scope = scope_over(&store, &translator);
        let environment = RepositoryEnvironment::new()
            .with_descriptor("jcr.repository.vendor", "Example")
            .with_cluster_entry("clusterName", "main")
            .with_counter(FIXITY_CHECK_COUNTER, 7)
            .with_counter("unrelated", 1);

        let root = store.get(&ResourceId::root()).unwrap().clone();
        let triples = triples(&scope, &root, &environment).unwrap().into_vec().unwrap();

        assert_eq!(triples.len(), 3);
        assert_eq!(
            values_of(&triples, &descriptor_predicate("jcr.repository.vendor")),
            vec!["Example"]
        );
        assert_eq!(values_of(&triples, vocab::num_fixity_checks().as_str()), vec!["7"]);
        assert_eq!(
            values_of(&triples, "http://fedora.info/definitions/v4/repository#clusterName"),
            vec!["main"]
        );
    }

    #[test]
    fn test_only_root_is_described() {
        let store = InMemoryStore::new();
        let translator = IdentifierTranslator::new("http://localhost/rest").unwrap();
        let scope = scope_over(&store, &translator);
        let environment = RepositoryEnvironment::new().with_descriptor("a.b", "c");

        let container = Resource::container("/c");
        assert!(triples(&scope, &container, &environment).unwrap().into_vec().unwrap().is_empty());
    }
}
