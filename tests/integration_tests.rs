//! Integration tests for the complete rdfwalk pipeline
//!
//! These tests verify end-to-end functionality across crates:
//! - RDF text → KnowledgeGraph
//! - KnowledgeGraph → RandomWalker → hashed corpus
//! - KnowledgeGraph → WildcardWalker → masked corpus
//!
//! Run with: cargo test --test integration_tests

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rdfwalk_graph::{load_rdf_bytes, GraphView, KnowledgeGraph, RdfFormat, RdfLoadOptions, Vertex};
use rdfwalk_walkers::digest::entity_digest;
use rdfwalk_walkers::{
    RandomWalker, Strategy, WalkJobConfig, WalkerConfig, WildcardWalker, WILDCARD_TOKEN,
};

const FAMILY_TTL: &str = r#"
@prefix ex: <http://ex.org/> .

ex:alice ex:knows ex:bob .
ex:alice ex:worksAt ex:acme .
ex:bob ex:knows ex:carol .
ex:carol ex:worksAt ex:acme .
ex:acme ex:label "ACME Corp" .
"#;

fn family_graph() -> KnowledgeGraph {
    load_rdf_bytes(FAMILY_TTL.as_bytes(), RdfFormat::Turtle, &RdfLoadOptions::default())
        .expect("turtle should load")
}

fn ex(local: &str) -> String {
    format!("http://ex.org/{local}")
}

// ============================================================================
// RDF → KnowledgeGraph
// ============================================================================

#[test]
fn test_turtle_loads_into_bipartite_graph() {
    let kg = family_graph();

    assert_eq!(kg.triple_count(), 5);
    assert_eq!(kg.relation_count(), 5);
    // alice, bob, carol, acme, "ACME Corp"
    assert_eq!(kg.entity_count(), 5);

    let alice = Vertex::new(ex("alice"));
    let relations: BTreeSet<String> = kg
        .successors(&alice)
        .unwrap()
        .iter()
        .map(|v| v.name().to_string())
        .collect();
    assert_eq!(relations, BTreeSet::from([ex("knows"), ex("worksAt")]));
}

#[test]
fn test_skipped_predicates_never_reach_the_walker() {
    let options = RdfLoadOptions::default().skip_predicate(ex("label"));
    let kg = load_rdf_bytes(FAMILY_TTL.as_bytes(), RdfFormat::Turtle, &options).unwrap();

    let walker = RandomWalker::new(WalkerConfig::new(6, None).unwrap());
    let walks = walker.extract(&kg, [ex("alice")]).unwrap();

    assert!(!walks.is_empty());
    assert!(walks.iter().flatten().all(|token| token != &ex("label")));
}

// ============================================================================
// KnowledgeGraph → RandomWalker
// ============================================================================

#[test]
fn test_random_walker_produces_hashed_corpus() {
    let kg = family_graph();
    let walker = RandomWalker::new(WalkerConfig::new(4, None).unwrap());

    let walks = walker.extract(&kg, [ex("alice")]).unwrap();

    // alice -knows-> bob -knows-> carol
    // alice -worksAt-> acme -label-> "ACME Corp"
    let expected: BTreeSet<Vec<String>> = BTreeSet::from([
        vec![
            ex("alice"),
            ex("knows"),
            entity_digest(&ex("bob")),
            ex("knows"),
            entity_digest(&ex("carol")),
        ],
        vec![
            ex("alice"),
            ex("worksAt"),
            entity_digest(&ex("acme")),
            ex("label"),
            entity_digest("ACME Corp"),
        ],
    ]);
    assert_eq!(walks, expected);
}

#[test]
fn test_corpus_merges_all_roots() {
    let kg = family_graph();
    let walker = RandomWalker::new(WalkerConfig::new(2, None).unwrap());

    let corpus = walker.extract(&kg, [ex("alice"), ex("carol")]).unwrap();
    let roots: BTreeSet<&str> = corpus.iter().map(|w| w[0].as_str()).collect();

    assert_eq!(roots.len(), 2);
    assert_eq!(corpus.len(), 3);
}

#[test]
fn test_sampled_corpus_is_reproducible_from_json_config() {
    let kg = family_graph();
    let job = WalkJobConfig::from_json(r#"{"depth": 4, "walks_per_graph": 1, "seed": 42}"#)
        .expect("config should parse");
    assert_eq!(job.strategy, Strategy::Random);

    let walker = RandomWalker::new(job.walker.clone());
    let first = walker.extract(&kg, [ex("alice")]).unwrap();
    let second = walker.extract(&kg, [ex("alice")]).unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_caller_rng_drives_sampling() {
    let kg = family_graph();
    let walker = RandomWalker::new(WalkerConfig::new(4, Some(1)).unwrap());

    let mut a = StdRng::seed_from_u64(5);
    let mut b = StdRng::seed_from_u64(5);
    let root = Vertex::new(ex("alice"));

    assert_eq!(
        walker.extract_random_walks(&kg, &root, &mut a).unwrap(),
        walker.extract_random_walks(&kg, &root, &mut b).unwrap()
    );
}

// ============================================================================
// KnowledgeGraph → WildcardWalker
// ============================================================================

#[test]
fn test_wildcard_walker_masks_every_position_but_the_root() {
    let kg = family_graph();
    let walker = WildcardWalker::new(WalkerConfig::new(2, None).unwrap(), vec![1]).unwrap();

    let walks = walker.extract(&kg, [ex("carol")]).unwrap();

    let expected: BTreeSet<Vec<String>> = BTreeSet::from([
        vec![ex("carol"), ex("worksAt"), ex("acme")],
        vec![ex("carol"), WILDCARD_TOKEN.to_string(), ex("acme")],
        vec![ex("carol"), ex("worksAt"), WILDCARD_TOKEN.to_string()],
    ]);
    assert_eq!(walks, expected);
}

#[test]
fn test_wildcard_job_from_json() {
    let kg = family_graph();
    let job = WalkJobConfig::from_json(
        r#"{"depth": 4, "strategy": "wildcard", "wildcards": [1, 2]}"#,
    )
    .unwrap();
    let walker = WildcardWalker::with_wildcards(job.walker.clone(), job.wildcards_or_default());

    let walks = walker.extract(&kg, [ex("bob")]).unwrap();

    // bob -knows-> carol -worksAt-> acme: one raw walk of length 5,
    // literal + C(4,1) + C(4,2) variants.
    assert_eq!(walks.len(), 1 + 4 + 6);
    assert!(walks.iter().all(|w| w[0] == ex("bob")));
}

#[test]
fn test_unknown_root_is_reported_by_both_walkers() {
    let kg = family_graph();
    let config = WalkerConfig::new(2, None).unwrap();

    let random = RandomWalker::new(config.clone()).extract(&kg, [ex("dave")]);
    let wildcard = WildcardWalker::new(config, vec![1])
        .unwrap()
        .extract(&kg, [ex("dave")]);

    assert!(random.is_err());
    assert!(wildcard.is_err());
}
