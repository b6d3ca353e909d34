//! Depth-bounded random walk extraction.
//!
//! The frontier is an ordered set of walks. Each iteration expands every walk
//! by one hop into a *new* set (walks ending in a vertex without successors
//! are carried over unchanged), swaps it in, then prunes it to the sampling
//! cap. Pruning happens after every iteration, so later hops only ever extend
//! the retained sample.
//!
//! Because the set is ordered, a seeded random source reproduces the same
//! sample in every process.

use std::collections::BTreeSet;

use rand::Rng;
use rdfwalk_graph::{GraphError, GraphView, Vertex};

use crate::config::WalksPerGraph;
use crate::error::WalkError;

/// A walk: root first, then alternating relation/entity hops.
pub type Walk = Vec<Vertex>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    walks: BTreeSet<Walk>,
}

impl Frontier {
    /// The single one-vertex walk `(root,)`.
    pub fn new(root: Vertex) -> Self {
        Self {
            walks: BTreeSet::from([vec![root]]),
        }
    }

    pub fn len(&self) -> usize {
        self.walks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walks.is_empty()
    }

    pub fn walks(&self) -> impl Iterator<Item = &Walk> {
        self.walks.iter()
    }

    /// Extend every walk by one hop.
    ///
    /// On error the frontier is left as it was.
    pub fn expand<G: GraphView + ?Sized>(&mut self, graph: &G) -> Result<(), GraphError> {
        let mut next: BTreeSet<Walk> = BTreeSet::new();

        for walk in &self.walks {
            let Some(last) = walk.last() else {
                continue;
            };
            let successors = graph.successors(last)?;
            if successors.is_empty() {
                next.insert(walk.clone());
                continue;
            }
            for successor in successors {
                let mut extended = Vec::with_capacity(walk.len() + 1);
                extended.extend_from_slice(walk);
                extended.push(successor);
                next.insert(extended);
            }
        }

        self.walks = next;
        Ok(())
    }

    /// Keep a uniform random subset of at most `cap` walks, without
    /// replacement. Returns how many walks were dropped.
    pub fn prune<R: Rng + ?Sized>(&mut self, cap: WalksPerGraph, rng: &mut R) -> usize {
        let Some(cap) = cap.limit() else {
            return 0;
        };
        let total = self.walks.len();
        if total <= cap {
            return 0;
        }

        let mut slots: Vec<Option<Walk>> = std::mem::take(&mut self.walks)
            .into_iter()
            .map(Some)
            .collect();
        self.walks = rand::seq::index::sample(rng, total, cap)
            .into_iter()
            .filter_map(|ix| slots[ix].take())
            .collect();

        total - cap
    }

    pub fn into_walks(self) -> Vec<Walk> {
        self.walks.into_iter().collect()
    }
}

/// Random walks of up to `depth` hops rooted at `root`.
///
/// A root the graph does not know is reported as [`WalkError::UnknownRoot`];
/// any later lookup failure propagates as [`WalkError::Graph`].
pub fn extract_random_walks<G, R>(
    graph: &G,
    root: &Vertex,
    depth: usize,
    walks_per_graph: WalksPerGraph,
    rng: &mut R,
) -> Result<Vec<Walk>, WalkError>
where
    G: GraphView + ?Sized,
    R: Rng + ?Sized,
{
    if !graph.contains(root) {
        return Err(WalkError::UnknownRoot(root.name().to_string()));
    }

    let mut frontier = Frontier::new(root.clone());
    for iteration in 0..depth {
        frontier.expand(graph)?;
        let pruned = frontier.prune(walks_per_graph, rng);
        tracing::trace!(
            root = %root,
            iteration,
            walks = frontier.len(),
            pruned,
            "expanded walk frontier"
        );
    }

    Ok(frontier.into_walks())
}
