//! Memory Item — one learnable concept in declarative memory.
//!
//! An item carries the statistics the base-level equation needs
//! (`frequency`, `recency`), its associative strengths to context cues, an
//! optional external stimulus, and a noise sample fixed at creation.
//!
//! Grounded in Anderson's ACT-R theory of declarative memory.

use std::collections::HashMap;

use rand::Rng;

use crate::activation::{self, ActivationBreakdown};
use crate::config::ActivationConfig;
use crate::error::{RecallError, Result};
use crate::noise;

/// A concept held in declarative memory.
#[derive(Debug, Clone)]
pub struct MemoryItem {
    concept: String,
    definition: String,
    analogy: Option<String>,
    external_source: Option<String>,
    /// Successful retrievals, starting at 1.
    frequency: u32,
    /// Queries since the last successful retrieval, starting at 1.
    recency: u32,
    associations: HashMap<String, f64>,
    /// Caller-controlled boost added to the activation.
    pub external_stimulus: f64,
    noise: f64,
    activation: Option<f64>,
    latency_factor: f64,
}

impl MemoryItem {
    /// Create an item with an explicit noise term.
    ///
    /// Use [`MemoryItem::sample`] to draw the noise from configuration instead.
    #[must_use]
    pub fn new(
        concept: impl Into<String>,
        definition: impl Into<String>,
        latency_factor: f64,
        noise: f64,
    ) -> Self {
        Self {
            concept: concept.into(),
            definition: definition.into(),
            analogy: None,
            external_source: None,
            frequency: 1,
            recency: 1,
            associations: HashMap::new(),
            external_stimulus: 0.0,
            noise,
            activation: None,
            latency_factor,
        }
    }

    /// Create an item whose noise is drawn once from `N(0, config.noise_std_dev)`.
    pub fn sample<R: Rng + ?Sized>(
        concept: impl Into<String>,
        definition: impl Into<String>,
        config: &ActivationConfig,
        rng: &mut R,
    ) -> Self {
        let noise = noise::gaussian(rng, config.noise_std_dev);
        Self::new(concept, definition, config.latency_factor, noise)
    }

    /// Attach the suggested analogy.
    #[must_use]
    pub fn with_analogy(mut self, analogy: impl Into<String>) -> Self {
        self.analogy = Some(analogy.into());
        self
    }

    /// Attach the suggested external source (tools, people, resources).
    #[must_use]
    pub fn with_external_source(mut self, source: impl Into<String>) -> Self {
        self.external_source = Some(source.into());
        self
    }

    /// Associate a cue with this item. Negative strengths are clamped to zero.
    #[must_use]
    pub fn with_association(mut self, cue: impl Into<String>, strength: f64) -> Self {
        self.set_association(cue, strength);
        self
    }

    /// Associate every `(cue, strength)` pair with this item.
    #[must_use]
    pub fn with_associations<I, K>(mut self, associations: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        for (cue, strength) in associations {
            self.set_association(cue, strength);
        }
        self
    }

    /// Start from a given practice count (clamped to at least 1).
    #[must_use]
    pub fn with_frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency.max(1);
        self
    }

    /// Start from a given recency (clamped to at least 1).
    #[must_use]
    pub fn with_recency(mut self, recency: u32) -> Self {
        self.recency = recency.max(1);
        self
    }

    /// Insert or replace one association strength.
    pub fn set_association(&mut self, cue: impl Into<String>, strength: f64) {
        self.associations.insert(cue.into(), strength.max(0.0));
    }

    // ------------------------------------------------------------------
    // Activation
    // ------------------------------------------------------------------

    /// Score this item against the given context without touching its state.
    ///
    /// # Errors
    /// Returns [`RecallError::MismatchedCues`] if `cues` and `weights` differ in length.
    pub fn activation_breakdown<S: AsRef<str>>(
        &self,
        cues: &[S],
        weights: &[f64],
    ) -> Result<ActivationBreakdown> {
        Ok(ActivationBreakdown {
            base_level: activation::base_level(self.frequency, self.recency),
            associative: activation::associative_sum(&self.associations, cues, weights)?,
            external: self.external_stimulus,
            noise: self.noise,
        })
    }

    /// Compute the activation for the given context, store it, and return it.
    ///
    /// # Errors
    /// Returns [`RecallError::MismatchedCues`] if `cues` and `weights` differ in
    /// length; the stored activation is left as it was.
    pub fn calculate_activation<S: AsRef<str>>(&mut self, cues: &[S], weights: &[f64]) -> Result<f64> {
        let total = self.activation_breakdown(cues, weights)?.total();
        self.activation = Some(total);
        Ok(total)
    }

    /// Time to retrieve this item, `F · e^(-A)`, using the last computed activation.
    ///
    /// # Errors
    /// Returns [`RecallError::ActivationNotComputed`] if no activation has been computed yet.
    pub fn retrieval_latency(&self) -> Result<f64> {
        self.activation
            .map(|a| activation::retrieval_latency(self.latency_factor, a))
            .ok_or_else(|| RecallError::ActivationNotComputed {
                concept: self.concept.clone(),
            })
    }

    // ------------------------------------------------------------------
    // Retrieval bookkeeping (driven by the store)
    // ------------------------------------------------------------------

    /// One more query has passed without this item being retrieved.
    pub(crate) fn age(&mut self) {
        self.recency = self.recency.saturating_add(1);
    }

    /// This item was retrieved: it is fresh again and one practice stronger.
    pub(crate) fn reinforce(&mut self) {
        self.recency = 1;
        self.frequency = self.frequency.saturating_add(1);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Concept label.
    #[must_use]
    pub fn concept(&self) -> &str {
        &self.concept
    }

    /// Definition text.
    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Suggested analogy, if any.
    #[must_use]
    pub fn analogy(&self) -> Option<&str> {
        self.analogy.as_deref()
    }

    /// Suggested external source, if any.
    #[must_use]
    pub fn external_source(&self) -> Option<&str> {
        self.external_source.as_deref()
    }

    /// Number of successful retrievals (≥ 1).
    #[must_use]
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Queries since last retrieval (≥ 1).
    #[must_use]
    pub fn recency(&self) -> u32 {
        self.recency
    }

    /// Association strength for `cue`, if one was set.
    #[must_use]
    pub fn association(&self, cue: &str) -> Option<f64> {
        self.associations.get(cue).copied()
    }

    /// All cue associations.
    #[must_use]
    pub fn associations(&self) -> &HashMap<String, f64> {
        &self.associations
    }

    /// Noise term fixed at creation.
    #[must_use]
    pub fn noise(&self) -> f64 {
        self.noise
    }

    /// Last computed activation, if any.
    ///
    /// Only meaningful straight after the query that computed it.
    #[must_use]
    pub fn activation(&self) -> Option<f64> {
        self.activation
    }

    /// Latency factor `F` this item was built with.
    #[must_use]
    pub fn latency_factor(&self) -> f64 {
        self.latency_factor
    }
}
