//! Declarative Store — search-and-select retrieval over memory items.
//!
//! Every query runs the same sequence:
//!
//! 1. Age every item (`recency += 1`), matched or not.
//! 2. Candidates are items whose concept contains the search term
//!    (case-insensitive substring).
//! 3. With an external boost, each candidate's stimulus is set to the
//!    configured boost.
//! 4. Each candidate's activation is computed and stored on the item.
//! 5. The strictly-highest activation wins; ties keep the earlier item.
//! 6. The winner is recalled only if its activation exceeds the recall
//!    threshold, in which case it is reinforced (`recency = 1`,
//!    `frequency += 1`).
//!
//! Retrieval mutates every item, so a store is driven through `&mut self`
//! by a single caller at a time.

use tracing::{debug, trace};

use crate::activation;
use crate::config::{RetrievalConfig, StimulusPolicy};
use crate::error::Result;
use crate::item::MemoryItem;

/// An ordered collection of memory items with threshold-gated retrieval.
#[derive(Debug, Clone, Default)]
pub struct DeclarativeStore {
    items: Vec<MemoryItem>,
    config: RetrievalConfig,
}

impl DeclarativeStore {
    /// Create an empty store with the given retrieval parameters.
    #[must_use]
    pub fn new(config: RetrievalConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
        }
    }

    /// Create a store pre-populated with `items`, in order.
    #[must_use]
    pub fn with_items(config: RetrievalConfig, items: impl IntoIterator<Item = MemoryItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            config,
        }
    }

    /// Append an item. Insertion order is the tie-break order.
    pub fn add(&mut self, item: MemoryItem) {
        self.items.push(item);
    }

    /// Number of items held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[MemoryItem] {
        &self.items
    }

    /// First item whose concept equals `concept`, ignoring case.
    #[must_use]
    pub fn get(&self, concept: &str) -> Option<&MemoryItem> {
        let needle = concept.to_lowercase();
        self.items.iter().find(|i| i.concept().to_lowercase() == needle)
    }

    /// Mutable access to the first item whose concept equals `concept`, ignoring case.
    pub fn get_mut(&mut self, concept: &str) -> Option<&mut MemoryItem> {
        let needle = concept.to_lowercase();
        self.items
            .iter_mut()
            .find(|i| i.concept().to_lowercase() == needle)
    }

    /// Retrieval parameters in use.
    #[must_use]
    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Search for `search_term` under the given context and return the recalled item.
    ///
    /// `cues[j]` is weighted by `weights[j]`; pass two empty slices for no context.
    /// Returns `Ok(None)` when nothing matches or the best match stays at or
    /// below the recall threshold. Candidates keep their freshly computed
    /// activation either way.
    ///
    /// # Errors
    /// Returns [`crate::RecallError::MismatchedCues`] if `cues` and `weights`
    /// differ in length. The check runs first, so a rejected query does not
    /// age the store.
    pub fn retrieve<S: AsRef<str>>(
        &mut self,
        search_term: &str,
        cues: &[S],
        weights: &[f64],
        external_boost: bool,
    ) -> Result<Option<&MemoryItem>> {
        activation::check_pairing(cues, weights)?;

        for item in &mut self.items {
            item.age();
        }
        trace!(items = self.items.len(), "Aged declarative store");

        let needle = search_term.to_lowercase();
        let mut best: Option<(usize, f64)> = None;
        let mut candidates = 0_usize;

        for (idx, item) in self.items.iter_mut().enumerate() {
            if !item.concept().to_lowercase().contains(&needle) {
                continue;
            }
            candidates += 1;

            let previous_stimulus = item.external_stimulus;
            if external_boost {
                item.external_stimulus = self.config.external_boost;
            }
            let scored = item.calculate_activation(cues, weights);
            if external_boost && self.config.stimulus_policy == StimulusPolicy::Transient {
                item.external_stimulus = previous_stimulus;
            }
            let a = scored?;

            debug!(concept = item.concept(), activation = a, "Scored candidate");

            if best.is_none_or(|(_, max)| a > max) {
                best = Some((idx, a));
            }
        }

        let threshold = self.config.recall_threshold;
        match best {
            Some((idx, a)) if a > threshold => {
                let item = &mut self.items[idx];
                item.reinforce();
                debug!(
                    term = search_term,
                    concept = item.concept(),
                    activation = a,
                    threshold,
                    candidates,
                    "Recalled"
                );
                Ok(Some(&self.items[idx]))
            }
            Some((_, a)) => {
                debug!(term = search_term, best = a, threshold, candidates, "Below recall threshold");
                Ok(None)
            }
            None => {
                debug!(term = search_term, "No candidates");
                Ok(None)
            }
        }
    }
}
