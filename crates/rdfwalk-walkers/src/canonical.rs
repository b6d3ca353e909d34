//! Canonicalization policies: raw walk → token tuples.
//!
//! A policy may emit any number of token tuples per walk (the wildcard policy
//! emits a whole family). Output goes into an ordered set, so tuples are
//! deduplicated and iterate in a stable order.

use std::collections::BTreeSet;

use rdfwalk_graph::{Vertex, WILDCARD_TOKEN};

use crate::combinations::Combinations;
use crate::config::Wildcards;
use crate::digest::entity_digest;

/// A walk rendered as tokens.
pub type CanonicalWalk = Vec<String>;

pub trait Canonicalizer {
    fn canonicalize(&self, walk: &[Vertex], out: &mut BTreeSet<CanonicalWalk>);
}

impl<F> Canonicalizer for F
where
    F: Fn(&[Vertex], &mut BTreeSet<CanonicalWalk>),
{
    fn canonicalize(&self, walk: &[Vertex], out: &mut BTreeSet<CanonicalWalk>) {
        self(walk, out)
    }
}

/// Every vertex name verbatim.
pub fn literal_tokens(walk: &[Vertex]) -> CanonicalWalk {
    walk.iter().map(|v| v.name().to_string()).collect()
}

/// Keeps the root and relation hops, hashes deep entities.
///
/// Position 0 and odd positions are emitted verbatim; even positions ≥ 2 are
/// replaced by [`entity_digest`]. Relies on the graph's entity/relation
/// alternation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashingCanonicalizer;

impl Canonicalizer for HashingCanonicalizer {
    fn canonicalize(&self, walk: &[Vertex], out: &mut BTreeSet<CanonicalWalk>) {
        let tokens = walk
            .iter()
            .enumerate()
            .map(|(i, hop)| {
                if i == 0 || i % 2 == 1 {
                    hop.name().to_string()
                } else {
                    entity_digest(hop.name())
                }
            })
            .collect();
        out.insert(tokens);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralCanonicalizer;

impl Canonicalizer for LiteralCanonicalizer {
    fn canonicalize(&self, walk: &[Vertex], out: &mut BTreeSet<CanonicalWalk>) {
        out.insert(literal_tokens(walk));
    }
}

/// Literal tuple plus every variant with `k` non-root positions masked by
/// [`WILDCARD_TOKEN`], for each configured `k`.
#[derive(Debug, Clone, Default)]
pub struct WildcardCanonicalizer {
    wildcards: Wildcards,
}

impl WildcardCanonicalizer {
    pub fn new(wildcards: Wildcards) -> Self {
        Self { wildcards }
    }

    pub fn wildcards(&self) -> &Wildcards {
        &self.wildcards
    }
}

impl Canonicalizer for WildcardCanonicalizer {
    fn canonicalize(&self, walk: &[Vertex], out: &mut BTreeSet<CanonicalWalk>) {
        let literal = literal_tokens(walk);

        for &k in self.wildcards.as_slice() {
            for positions in Combinations::new(1..walk.len(), k) {
                let mut masked = literal.clone();
                for ix in positions {
                    masked[ix] = WILDCARD_TOKEN.to_string();
                }
                out.insert(masked);
            }
        }

        out.insert(literal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(names: &[&str]) -> Vec<Vertex> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| {
                if i % 2 == 1 {
                    Vertex::relation(*n, "s", "o")
                } else {
                    Vertex::new(*n)
                }
            })
            .collect()
    }

    fn tuple(tokens: &[&str]) -> CanonicalWalk {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn hashing_keeps_root_and_relations() {
        let mut out = BTreeSet::new();
        HashingCanonicalizer.canonicalize(&walk(&["A", "r1", "B", "r2", "C"]), &mut out);

        let b = entity_digest("B");
        let c = entity_digest("C");
        assert_eq!(out.len(), 1);
        assert!(out.contains(&tuple(&["A", "r1", &b, "r2", &c])));
    }

    #[test]
    fn hashing_leaves_root_only_walk_untouched() {
        let mut out = BTreeSet::new();
        HashingCanonicalizer.canonicalize(&walk(&["A"]), &mut out);
        assert!(out.contains(&tuple(&["A"])));
    }

    #[test]
    fn wildcard_single_mask() {
        let mut out = BTreeSet::new();
        WildcardCanonicalizer::default().canonicalize(&walk(&["A", "r1", "B"]), &mut out);

        let expected: BTreeSet<CanonicalWalk> = [
            tuple(&["A", "r1", "B"]),
            tuple(&["A", "*", "B"]),
            tuple(&["A", "r1", "*"]),
        ]
        .into_iter()
        .collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn wildcard_multiple_cardinalities() {
        let wildcards = Wildcards::new(vec![1, 2]).unwrap();
        let mut out = BTreeSet::new();
        WildcardCanonicalizer::new(wildcards).canonicalize(&walk(&["A", "r1", "B"]), &mut out);

        // literal + C(2,1) + C(2,2)
        assert_eq!(out.len(), 4);
        assert!(out.contains(&tuple(&["A", "*", "*"])));
    }

    #[test]
    fn wildcard_on_root_only_walk_emits_literal() {
        let wildcards = Wildcards::new(vec![1, 2, 3]).unwrap();
        let mut out = BTreeSet::new();
        WildcardCanonicalizer::new(wildcards).canonicalize(&walk(&["A"]), &mut out);
        assert_eq!(out.into_iter().collect::<Vec<_>>(), vec![tuple(&["A"])]);
    }

    #[test]
    fn closures_are_canonicalizers() {
        let reversed = |walk: &[Vertex], out: &mut BTreeSet<CanonicalWalk>| {
            out.insert(walk.iter().rev().map(|v| v.name().to_string()).collect());
        };
        let mut out = BTreeSet::new();
        reversed.canonicalize(&walk(&["A", "r1", "B"]), &mut out);
        assert!(out.contains(&tuple(&["B", "r1", "A"])));
    }
}
