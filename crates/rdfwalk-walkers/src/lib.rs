//! Walk extraction for knowledge-graph embeddings.
//!
//! A [`Walker`] samples depth-bounded random walks rooted at query entities
//! and turns each walk into token tuples ("sentences") for a skip-gram style
//! trainer. Two policies ship:
//!
//! - [`RandomWalker`]: root and relation hops verbatim, deeper entities
//!   replaced by a short SHA-256 digest.
//! - [`WildcardWalker`]: literal walks plus every variant with `k` non-root
//!   positions masked by `*`.
//!
//! ```
//! use rdfwalk_graph::KnowledgeGraph;
//! use rdfwalk_walkers::{WalkerConfig, WildcardWalker};
//!
//! let kg = KnowledgeGraph::from_triples([("A", "r1", "B")]).unwrap();
//! let walker = WildcardWalker::new(WalkerConfig::new(2, None).unwrap(), vec![1]).unwrap();
//! let walks = walker.extract(&kg, ["A"]).unwrap();
//! assert_eq!(walks.len(), 3);
//! ```

pub mod canonical;
pub mod combinations;
pub mod config;
pub mod digest;
pub mod error;
pub mod traversal;
pub mod walker;

pub use canonical::{
    CanonicalWalk, Canonicalizer, HashingCanonicalizer, LiteralCanonicalizer,
    WildcardCanonicalizer,
};
pub use config::{ConfigError, Strategy, WalkJobConfig, WalkerConfig, WalksPerGraph, Wildcards};
pub use error::WalkError;
pub use rdfwalk_graph::WILDCARD_TOKEN;
pub use traversal::{Frontier, Walk};
pub use walker::{RandomWalker, Walker, WildcardWalker};
