//! Descriptions of contained resources, inlined into the container's stream

use super::scope::{flatten, ContextScope, Triples};
use super::{properties, types};
use crate::error::{ProjectionError, ProjectionResult};
use crate::rdf::TripleStream;
use crate::repository::Resource;
use std::iter;

pub fn triples<'a>(
    scope: &ContextScope<'a>,
    resource: &Resource,
    include_server_managed: bool,
) -> ProjectionResult<TripleStream<'a>> {
    let children = scope.store.children(&resource.id)?;
    let scope = scope.clone();

    let triples = children.flat_map(move |child| -> Triples<'a> {
        let described = child.map_err(ProjectionError::from).and_then(|child| {
            if child.is_binary() {
                Ok(scope.store.require(&child.rdf_addressable())?)
            } else {
                Ok(child)
            }
        });
        match described {
            Ok(child) => Box::new(
                flatten(types::triples(&scope, &child))
                    .chain(flatten(properties::triples(&scope, &child, include_server_managed))),
            ),
            Err(e) => Box::new(iter::once(Err(e))),
        }
    });
    Ok(TripleStream::from_results(triples))
}
