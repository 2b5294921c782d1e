//! Nested hash resources (`<resource>#fragment`)
//!
//! Hash resources hang directly off an addressable resource; the fragment form
//! has no room for a second level, so there is nothing to recurse into.

use super::scope::ContextScope;
use super::{properties, types};
use crate::error::ProjectionResult;
use crate::rdf::TripleStream;
use crate::repository::Resource;

/// Types and properties of every hash resource owned by `resource`
pub fn triples<'a>(
    scope: &ContextScope<'a>,
    resource: &Resource,
    include_server_managed: bool,
) -> ProjectionResult<TripleStream<'a>> {
    let mut stream = TripleStream::empty();
    for child in scope.store.hash_children(&resource.id)? {
        stream = stream
            .concat(types::triples(scope, &child)?)
            .concat(properties::triples(scope, &child, include_server_managed)?);
    }
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::tests::scope_over;
    use crate::repository::{InMemoryStore, ResourceId};
    use crate::translator::IdentifierTranslator;

    #[test]
    fn test_hash_children_use_fragment_subjects() {
        let mut store = InMemoryStore::new();
        store.add_namespace("ex", "http://example.org/");
        store.insert(Resource::container("/c")).unwrap();
        store
            .insert(
                Resource::new_with_types("/c/#/author", ["ex:Person"]).with_property("ex:name", "Ada"),
            )
            .unwrap();
        let translator = IdentifierTranslator::new("http://localhost/rest").unwrap();
        let scope = scope_over(&store, &translator);

        let container = store.get(&ResourceId::new("/c")).unwrap().clone();
        let triples: Vec<String> = triples(&scope, &container, true)
            .unwrap()
            .into_vec()
            .unwrap()
            .iter()
            .map(|t| t.to_string())
            .collect();

        assert_eq!(
            triples,
            vec![
                "<http://localhost/rest/c#author> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Person> .",
                "<http://localhost/rest/c#author> <http://example.org/name> \"Ada\" .",
            ]
        );
    }
}
