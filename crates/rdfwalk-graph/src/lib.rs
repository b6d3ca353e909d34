//! Knowledge graph side of rdfwalk.
//!
//! Walkers only ever see the [`GraphView`] trait: "give me the successors of
//! this vertex". This crate provides that interface, an in-memory bipartite
//! implementation ([`KnowledgeGraph`]) and an RDF loader feeding it.
//!
//! The graph is bipartite on purpose: `entity -> relation -> entity -> ...`.
//! Walk positions therefore alternate, and canonicalizers key off that parity.

pub mod error;
pub mod graph;
pub mod rdf;
pub mod vertex;

pub use error::{GraphError, RdfLoadError};
pub use graph::{GraphView, KnowledgeGraph};
pub use rdf::{extend_graph, load_rdf_bytes, load_rdf_file, LoadStats, RdfFormat, RdfLoadOptions};
pub use vertex::{RelationAnchor, Vertex, WILDCARD_TOKEN};
