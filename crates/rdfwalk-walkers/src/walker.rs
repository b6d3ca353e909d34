use std::collections::BTreeSet;

use rand::Rng;
use rdfwalk_graph::{GraphView, Vertex};

use crate::canonical::{CanonicalWalk, Canonicalizer, HashingCanonicalizer, WildcardCanonicalizer};
use crate::config::{ConfigError, WalkerConfig, Wildcards};
use crate::error::WalkError;
use crate::traversal::{self, Walk};

/// Random-walk extraction with a pluggable canonicalization policy.
///
/// The traversal is the same for every policy; `C` only decides how each raw
/// walk turns into token tuples.
#[derive(Debug, Clone)]
pub struct Walker<C> {
    config: WalkerConfig,
    canonicalizer: C,
}

/// Hashes deep entities, keeps root and relations.
pub type RandomWalker = Walker<HashingCanonicalizer>;

/// Literal walks plus wildcard-masked variants.
pub type WildcardWalker = Walker<WildcardCanonicalizer>;

impl RandomWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self::with_canonicalizer(config, HashingCanonicalizer)
    }
}

impl WildcardWalker {
    /// Fails on an empty list or a zero cardinality.
    pub fn new(config: WalkerConfig, wildcards: Vec<usize>) -> Result<Self, ConfigError> {
        Ok(Self::with_wildcards(config, Wildcards::new(wildcards)?))
    }

    pub fn with_wildcards(config: WalkerConfig, wildcards: Wildcards) -> Self {
        Self::with_canonicalizer(config, WildcardCanonicalizer::new(wildcards))
    }
}

impl<C: Canonicalizer> Walker<C> {
    pub fn with_canonicalizer(config: WalkerConfig, canonicalizer: C) -> Self {
        Self {
            config,
            canonicalizer,
        }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn canonicalizer(&self) -> &C {
        &self.canonicalizer
    }

    /// Raw walks for one root, drawing randomness from `rng`.
    pub fn extract_random_walks<G, R>(
        &self,
        graph: &G,
        root: &Vertex,
        rng: &mut R,
    ) -> Result<Vec<Walk>, WalkError>
    where
        G: GraphView + ?Sized,
        R: Rng + ?Sized,
    {
        traversal::extract_random_walks(
            graph,
            root,
            self.config.depth(),
            self.config.walks_per_graph(),
            rng,
        )
    }

    /// Canonical walks for every instance, merged into one set.
    ///
    /// Uses a fresh random source per call: seeded from the config when a
    /// seed is set, so repeated calls then return identical sets.
    pub fn extract<G, I>(&self, graph: &G, instances: I) -> Result<BTreeSet<CanonicalWalk>, WalkError>
    where
        G: GraphView + ?Sized,
        I: IntoIterator,
        I::Item: ToString,
    {
        let mut rng = self.config.rng();
        self.extract_with_rng(graph, instances, &mut rng)
    }

    pub fn extract_with_rng<G, I, R>(
        &self,
        graph: &G,
        instances: I,
        rng: &mut R,
    ) -> Result<BTreeSet<CanonicalWalk>, WalkError>
    where
        G: GraphView + ?Sized,
        I: IntoIterator,
        I::Item: ToString,
        R: Rng + ?Sized,
    {
        let mut canonical_walks = BTreeSet::new();
        let mut roots = 0usize;

        for instance in instances {
            let root = Vertex::new(instance.to_string());
            let walks = self.extract_random_walks(graph, &root, rng)?;
            tracing::debug!(root = %root, walks = walks.len(), "extracted random walks");
            for walk in &walks {
                self.canonicalizer.canonicalize(walk, &mut canonical_walks);
            }
            roots += 1;
        }

        tracing::debug!(
            roots,
            canonical_walks = canonical_walks.len(),
            "canonicalized walks"
        );
        Ok(canonical_walks)
    }
}
