//! Lazy, single-pass triple stream
//!
//! A [`TripleStream`] is a pull-based iterator of `ProjectionResult<Triple>`
//! plus a prefix map. Composition never materializes the sequence: `concat`
//! chains iterators and `concat_lazy` defers building a whole sub-stream until
//! the preceding triples have been consumed. A store fault surfaces as an `Err`
//! item; consumers are expected to stop at the first one.
//!
//! Streams are not restartable. Callers that need several passes must collect
//! first, e.g. with [`TripleStream::into_set`].

use super::types::Triple;
use crate::error::{ProjectionError, ProjectionResult};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::iter;

type BoxedTriples<'a> = Box<dyn Iterator<Item = ProjectionResult<Triple>> + 'a>;

/// Forward-only sequence of triples with an attached prefix map
pub struct TripleStream<'a> {
    namespaces: BTreeMap<String, String>,
    triples: BoxedTriples<'a>,
}

impl<'a> TripleStream<'a> {
    /// Stream with no triples
    pub fn empty() -> Self {
        Self {
            namespaces: BTreeMap::new(),
            triples: Box::new(iter::empty()),
        }
    }

    /// Stream over infallible triples
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
        I::IntoIter: 'a,
    {
        Self::from_results(triples.into_iter().map(Ok))
    }

    /// Stream over fallible triples
    pub fn from_results<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = ProjectionResult<Triple>>,
        I::IntoIter: 'a,
    {
        Self {
            namespaces: BTreeMap::new(),
            triples: Box::new(triples.into_iter()),
        }
    }

    /// Stream whose only item is `error`
    pub fn failed(error: ProjectionError) -> Self {
        Self::from_results(iter::once(Err(error)))
    }

    /// Register a prefix on this stream's namespace map
    pub fn with_namespace(mut self, prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        self.namespaces.insert(prefix.into(), iri.into());
        self
    }

    /// Prefix → IRI map registered so far
    pub fn namespaces(&self) -> &BTreeMap<String, String> {
        &self.namespaces
    }

    /// Append another stream; its prefixes are merged immediately
    pub fn concat(mut self, other: TripleStream<'a>) -> Self {
        let TripleStream { namespaces, triples } = other;
        self.namespaces.extend(namespaces);
        self.triples = Box::new(self.triples.chain(triples));
        self
    }

    /// Append triples after the current ones
    pub fn concat_triples<I>(mut self, triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
        I::IntoIter: 'a,
    {
        self.triples = Box::new(self.triples.chain(triples.into_iter().map(Ok)));
        self
    }

    /// Put triples in front of the current ones
    pub fn prepend<I>(mut self, triples: I) -> Self
    where
        I: IntoIterator<Item = Triple>,
        I::IntoIter: 'a,
    {
        self.triples = Box::new(triples.into_iter().map(Ok).chain(self.triples));
        self
    }

    /// Append a stream that is only built once everything before it has been
    /// consumed.
    ///
    /// Only the deferred stream's triples are kept: prefixes must be registered
    /// eagerly, since the map is observable before consumption.
    pub fn concat_lazy<F>(mut self, build: F) -> Self
    where
        F: FnOnce() -> ProjectionResult<TripleStream<'a>> + 'a,
    {
        let deferred = iter::once(build).flat_map(|build| -> BoxedTriples<'a> {
            match build() {
                Ok(stream) => stream.triples,
                Err(e) => Box::new(iter::once(Err(e))),
            }
        });
        self.triples = Box::new(self.triples.chain(deferred));
        self
    }

    /// Keep only triples matching `predicate`; errors always pass through
    pub fn filter<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&Triple) -> bool + 'a,
    {
        self.triples = Box::new(self.triples.filter(move |item| match item {
            Ok(triple) => predicate(triple),
            Err(_) => true,
        }));
        self
    }

    /// Drain into a set, stopping at the first fault
    pub fn into_set(self) -> ProjectionResult<HashSet<Triple>> {
        self.triples.collect()
    }

    /// Drain into a vector, preserving order
    pub fn into_vec(self) -> ProjectionResult<Vec<Triple>> {
        self.triples.collect()
    }

    /// Split into the prefix map and the raw iterator
    pub fn into_parts(self) -> (BTreeMap<String, String>, BoxedTriples<'a>) {
        (self.namespaces, self.triples)
    }
}

impl Default for TripleStream<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Iterator for TripleStream<'_> {
    type Item = ProjectionResult<Triple>;

    fn next(&mut self) -> Option<Self::Item> {
        self.triples.next()
    }
}

impl fmt::Debug for TripleStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TripleStream")
            .field("namespaces", &self.namespaces)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, NamedNode, RdfPredicate};
    use crate::repository::StoreError;
    use std::cell::Cell;
    use std::rc::Rc;

    fn triple(n: i64) -> Triple {
        Triple::new(
            NamedNode::new("http://example.org/s").unwrap(),
            RdfPredicate::new("http://example.org/p").unwrap(),
            Literal::long(n),
        )
    }

    fn values(stream: TripleStream<'_>) -> Vec<String> {
        stream
            .into_vec()
            .unwrap()
            .into_iter()
            .map(|t| t.object.as_literal().unwrap().value().to_string())
            .collect()
    }

    #[test]
    fn test_concat_preserves_order() {
        let stream = TripleStream::from_triples(vec![triple(1), triple(2)])
            .concat(TripleStream::from_triples(vec![triple(3)]))
            .prepend(vec![triple(0)])
            .concat_triples(vec![triple(4)]);

        assert_eq!(values(stream), vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_concat_merges_namespaces() {
        let stream = TripleStream::empty()
            .with_namespace("a", "http://a/")
            .concat(TripleStream::empty().with_namespace("b", "http://b/"));

        assert_eq!(stream.namespaces().len(), 2);
        assert_eq!(stream.namespaces().get("b").map(String::as_str), Some("http://b/"));
    }

    #[test]
    fn test_concat_lazy_defers_construction() {
        let built = Rc::new(Cell::new(false));
        let flag = Rc::clone(&built);

        let mut stream = TripleStream::from_triples(vec![triple(1)]).concat_lazy(move || {
            flag.set(true);
            Ok(TripleStream::from_triples(vec![triple(2)]))
        });

        assert!(!built.get());
        assert!(stream.next().unwrap().is_ok());
        assert!(!built.get(), "tail must not be built before it is reached");
        assert!(stream.next().unwrap().is_ok());
        assert!(built.get());
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_abandoned_stream_never_builds_tail() {
        let built = Rc::new(Cell::new(false));
        let flag = Rc::clone(&built);

        let mut stream = TripleStream::from_triples(vec![triple(1)]).concat_lazy(move || {
            flag.set(true);
            Ok(TripleStream::empty())
        });
        let _ = stream.next();
        drop(stream);

        assert!(!built.get());
    }

    #[test]
    fn test_lazy_failure_surfaces_as_item() {
        let stream = TripleStream::from_triples(vec![triple(1)])
            .concat_lazy(|| Err(StoreError::Backend("boom".to_string()).into()));

        assert!(stream.into_vec().is_err());
    }

    #[test]
    fn test_filter_keeps_errors() {
        let stream = TripleStream::from_triples(vec![triple(1), triple(2)])
            .concat(TripleStream::failed(StoreError::Backend("x".to_string()).into()))
            .filter(|t| t.object.as_literal().map(|l| l.value() == "2").unwrap_or(false));

        let items: Vec<_> = stream.collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert!(items[1].is_err());
    }

    #[test]
    fn test_into_set_deduplicates() {
        let stream = TripleStream::from_triples(vec![triple(1), triple(1), triple(2)]);
        assert_eq!(stream.into_set().unwrap().len(), 2);
    }
}
