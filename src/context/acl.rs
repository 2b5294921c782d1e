//! `fedora:writable`

use super::scope::ContextScope;
use crate::error::ProjectionResult;
use crate::rdf::{vocab, Literal, Triple, TripleStream};
use crate::repository::{Permission, Resource, StoreError};
use tracing::trace;

/// Probe write access; a denial is reported as `false`, not as an error
pub fn triples<'a>(scope: &ContextScope<'a>, resource: &Resource) -> ProjectionResult<TripleStream<'a>> {
    let writable = match scope.store.check_permissions(&resource.id, &Permission::WRITE) {
        Ok(()) => true,
        Err(StoreError::AccessDenied(_)) => {
            trace!("{} is read-only for this session", resource.id);
            false
        }
        Err(e) => return Err(e.into()),
    };

    let triple = Triple::new(scope.subject(&resource.id)?, vocab::writable(), Literal::from(writable));
    Ok(TripleStream::from_triples([triple]))
}
