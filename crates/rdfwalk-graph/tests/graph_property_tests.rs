use std::collections::BTreeSet;

use proptest::prelude::*;
use rdfwalk_graph::{GraphView, KnowledgeGraph, Vertex};

const MAX_ENTITIES: usize = 10;
const MAX_PREDICATES: usize = 4;
const MAX_TRIPLES: usize = 40;

fn triples_strategy() -> impl Strategy<Value = Vec<(usize, usize, usize)>> {
    prop::collection::vec(
        (0usize..MAX_ENTITIES, 0usize..MAX_PREDICATES, 0usize..MAX_ENTITIES),
        0..=MAX_TRIPLES,
    )
}

fn names(triples: &[(usize, usize, usize)]) -> Vec<(String, String, String)> {
    triples
        .iter()
        .map(|(s, p, o)| (format!("e{s}"), format!("p{p}"), format!("e{o}")))
        .collect()
}

proptest! {
    #[test]
    fn graph_alternates_entities_and_relations(triples in triples_strategy()) {
        let kg = KnowledgeGraph::from_triples(names(&triples)).unwrap();

        for entity in kg.entities() {
            for relation in kg.successors(entity).unwrap() {
                prop_assert!(relation.is_relation());
                let objects = kg.successors(&relation).unwrap();
                prop_assert_eq!(objects.len(), 1);
                prop_assert!(objects.iter().all(|o| !o.is_relation()));
            }
        }
    }

    #[test]
    fn every_triple_is_reachable_in_two_hops(triples in triples_strategy()) {
        let named = names(&triples);
        let kg = KnowledgeGraph::from_triples(named.clone()).unwrap();

        let distinct: BTreeSet<_> = named.iter().cloned().collect();
        prop_assert_eq!(kg.triple_count(), distinct.len());

        for (s, p, o) in &named {
            let hops: Vec<Vertex> = kg
                .successors(&Vertex::new(s.as_str()))
                .unwrap()
                .into_iter()
                .filter(|r| r.name() == p.as_str())
                .flat_map(|r| kg.successors(&r).unwrap())
                .collect();
            prop_assert!(hops.contains(&Vertex::new(o.as_str())));
        }
    }
}
