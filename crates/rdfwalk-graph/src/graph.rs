//! The neighbor-query interface and its in-memory implementation.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::GraphError;
use crate::vertex::{Vertex, WILDCARD_TOKEN};

/// Read-only successor queries over a bipartite graph.
///
/// Implementations must alternate entity and relation vertices: the
/// successors of an entity are relation vertices and the successors of a
/// relation vertex are entities. Walkers rely on that parity.
pub trait GraphView {
    /// One-hop successors of `vertex`.
    ///
    /// A known vertex without outgoing edges yields an empty set. A vertex the
    /// graph has never seen is an error, not an empty set.
    fn successors(&self, vertex: &Vertex) -> Result<BTreeSet<Vertex>, GraphError>;

    fn contains(&self, vertex: &Vertex) -> bool;
}

impl<G: GraphView + ?Sized> GraphView for &G {
    fn successors(&self, vertex: &Vertex) -> Result<BTreeSet<Vertex>, GraphError> {
        (**self).successors(vertex)
    }

    fn contains(&self, vertex: &Vertex) -> bool {
        (**self).contains(vertex)
    }
}

/// In-memory bipartite knowledge graph.
///
/// Every triple `(s, p, o)` becomes `s -> p@(s,o) -> o`, where `p@(s,o)` is a
/// relation vertex owned by that triple alone.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    adjacency: BTreeMap<Vertex, BTreeSet<Vertex>>,
}

fn check_name(name: &str) -> Result<(), GraphError> {
    if name.is_empty() {
        return Err(GraphError::EmptyName);
    }
    if name == WILDCARD_TOKEN {
        return Err(GraphError::ReservedName(name.to_string()));
    }
    Ok(())
}

impl KnowledgeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(subject, predicate, object)` name triples.
    pub fn from_triples<I, S, P, O>(triples: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (S, P, O)>,
        S: AsRef<str>,
        P: AsRef<str>,
        O: AsRef<str>,
    {
        let mut kg = Self::new();
        for (s, p, o) in triples {
            kg.add_triple(s.as_ref(), p.as_ref(), o.as_ref())?;
        }
        Ok(kg)
    }

    /// Register an entity without edges. Idempotent.
    pub fn add_entity(&mut self, name: &str) -> Result<Vertex, GraphError> {
        check_name(name)?;
        let vertex = Vertex::new(name);
        self.adjacency.entry(vertex.clone()).or_default();
        Ok(vertex)
    }

    /// Add `subject -predicate-> object`. Returns `false` if the triple was
    /// already present.
    pub fn add_triple(
        &mut self,
        subject: &str,
        predicate: &str,
        object: &str,
    ) -> Result<bool, GraphError> {
        for name in [subject, predicate, object] {
            check_name(name)?;
        }
        let s = self.add_entity(subject)?;
        let o = self.add_entity(object)?;

        let relation = Vertex::relation(predicate, subject, object);
        if self.adjacency.contains_key(&relation) {
            return Ok(false);
        }

        self.adjacency.insert(relation.clone(), BTreeSet::from([o]));
        self.adjacency.entry(s).or_default().insert(relation);
        Ok(true)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Vertex> {
        self.adjacency.keys().filter(|v| !v.is_relation())
    }

    pub fn entity_count(&self) -> usize {
        self.entities().count()
    }

    pub fn relation_count(&self) -> usize {
        self.adjacency.keys().filter(|v| v.is_relation()).count()
    }

    /// Each distinct triple owns exactly one relation vertex.
    pub fn triple_count(&self) -> usize {
        self.relation_count()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl GraphView for KnowledgeGraph {
    fn successors(&self, vertex: &Vertex) -> Result<BTreeSet<Vertex>, GraphError> {
        self.adjacency
            .get(vertex)
            .cloned()
            .ok_or_else(|| GraphError::UnknownVertex(vertex.name().to_string()))
    }

    fn contains(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }
}
