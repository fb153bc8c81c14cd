//! Property-Based Tests for the declarative store.
//!
//! Uses `proptest` to check the retrieval invariants under random query
//! sequences: counters never fall below one, every query ages every item,
//! hits reinforce exactly one item, and activation moves the right way with
//! practice and disuse.

use proptest::prelude::*;

use recall_core::activation;
use recall_core::config::RetrievalConfig;
use recall_core::{DeclarativeStore, MemoryItem};

const CONCEPTS: [&str; 5] = [
    "Enfoque basado en procesos",
    "Mejora continua",
    "Enfoque al cliente",
    "Liderazgo",
    "Toma de decisiones basada en la evidencia",
];

const TERMS: [&str; 8] = ["enfoque", "mejora", "CLIENTE", "lider", "evidencia", "de", "zzz", ""];

const CUES: [&str; 4] = ["montaña", "cliente", "capitán", "datos"];

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_item() -> impl Strategy<Value = MemoryItem> {
    (
        0..CONCEPTS.len(),
        1..20u32,
        1..20u32,
        -0.3..0.3f64,
        prop::collection::vec((0..CUES.len(), 0.0..1.0f64), 0..3),
    )
        .prop_map(|(concept, frequency, recency, noise, assoc)| {
            MemoryItem::new(CONCEPTS[concept], "", 0.5, noise)
                .with_frequency(frequency)
                .with_recency(recency)
                .with_associations(assoc.into_iter().map(|(cue, s)| (CUES[cue], s)))
        })
}

#[derive(Debug, Clone)]
struct Query {
    term: &'static str,
    cues: Vec<&'static str>,
    weights: Vec<f64>,
    boost: bool,
}

fn arb_query() -> impl Strategy<Value = Query> {
    (
        0..TERMS.len(),
        prop::collection::vec((0..CUES.len(), 0.0..1.0f64), 0..3),
        any::<bool>(),
    )
        .prop_map(|(term, pairs, boost)| Query {
            term: TERMS[term],
            cues: pairs.iter().map(|(c, _)| CUES[*c]).collect(),
            weights: pairs.iter().map(|(_, w)| *w).collect(),
            boost,
        })
}

fn arb_store() -> impl Strategy<Value = DeclarativeStore> {
    prop::collection::vec(arb_item(), 0..8)
        .prop_map(|items| DeclarativeStore::with_items(RetrievalConfig::default(), items))
}

// ---------------------------------------------------------------------------
// Property: counters stay at or above one
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn counters_never_fall_below_one(
        mut store in arb_store(),
        queries in prop::collection::vec(arb_query(), 0..30),
    ) {
        for q in &queries {
            store.retrieve(q.term, &q.cues, &q.weights, q.boost).unwrap();
        }
        for item in store.items() {
            prop_assert!(item.frequency() >= 1);
            prop_assert!(item.recency() >= 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Property: one query ages everything by one; a hit reinforces only the winner
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn query_ages_all_and_reinforces_at_most_one(
        mut store in arb_store(),
        q in arb_query(),
    ) {
        let before: Vec<(u32, u32)> =
            store.items().iter().map(|i| (i.frequency(), i.recency())).collect();

        let winner = store
            .retrieve(q.term, &q.cues, &q.weights, q.boost)
            .unwrap()
            .map(|hit| hit as *const MemoryItem);

        for (item, (freq, rec)) in store.items().iter().zip(&before) {
            if winner == Some(item as *const MemoryItem) {
                prop_assert_eq!(item.frequency(), freq + 1);
                prop_assert_eq!(item.recency(), 1);
            } else {
                prop_assert_eq!(item.frequency(), *freq);
                prop_assert_eq!(item.recency(), rec + 1);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property: a hit is the first maximal candidate and clears the threshold
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn hit_is_first_best_candidate(
        mut store in arb_store(),
        q in arb_query(),
    ) {
        let needle = q.term.to_lowercase();
        let hit = store
            .retrieve(q.term, &q.cues, &q.weights, q.boost)
            .unwrap()
            .map(|i| i as *const MemoryItem);

        let candidates: Vec<(usize, &MemoryItem)> = store
            .items()
            .iter()
            .enumerate()
            .filter(|(_, i)| i.concept().to_lowercase().contains(&needle))
            .collect();

        for (_, item) in &candidates {
            prop_assert!(item.activation().is_some());
        }

        if let Some(ptr) = hit {
            let (win_idx, winner) = candidates
                .iter()
                .find(|(_, i)| std::ptr::eq(*i, ptr))
                .copied()
                .expect("winner is a candidate");
            let a = winner.activation().unwrap();
            prop_assert!(a > store.config().recall_threshold);
            for (idx, other) in &candidates {
                let b = other.activation().unwrap();
                prop_assert!(b <= a);
                if *idx < win_idx {
                    prop_assert!(b < a, "an earlier equal candidate must win");
                }
            }
        } else if let Some(best) = candidates
            .iter()
            .map(|(_, i)| i.activation().unwrap())
            .reduce(f64::max)
        {
            prop_assert!(best <= store.config().recall_threshold);
        }
    }
}

// ---------------------------------------------------------------------------
// Property: activation rises with frequency and falls with recency
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn base_level_monotone(freq in 1..10_000u32, rec in 1..10_000u32) {
        prop_assert!(activation::base_level(freq + 1, rec) > activation::base_level(freq, rec));
        prop_assert!(activation::base_level(freq, rec + 1) < activation::base_level(freq, rec));
        prop_assert!(activation::base_level(freq, rec) > 0.0);
    }
}

// ---------------------------------------------------------------------------
// Property: mismatched context never mutates the store
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn mismatched_context_is_inert(mut store in arb_store(), extra in 1..4usize) {
        let before: Vec<(u32, u32)> =
            store.items().iter().map(|i| (i.frequency(), i.recency())).collect();
        let weights = vec![1.0; extra];
        prop_assert!(store.retrieve::<&str>("enfoque", &[], &weights, true).is_err());
        let after: Vec<(u32, u32)> =
            store.items().iter().map(|i| (i.frequency(), i.recency())).collect();
        prop_assert_eq!(before, after);
    }
}
