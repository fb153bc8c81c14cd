//! Keyword context — free text from the learner turned into retrieval cues.
//!
//! Keywords are split on whitespace and share attention equally: with `n`
//! keywords each gets weight `1 / n`, so the total attentional weight is 1.

/// Context cues with their paired weights, ready for
/// [`recall_core::DeclarativeStore::retrieve`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordContext {
    cues: Vec<String>,
    weights: Vec<f64>,
}

impl KeywordContext {
    /// Parse space-separated keywords. Blank input yields an empty context.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let cues: Vec<String> = text.split_whitespace().map(str::to_string).collect();
        let weights = if cues.is_empty() {
            Vec::new()
        } else {
            #[allow(clippy::cast_precision_loss)]
            let w = 1.0 / cues.len() as f64;
            vec![w; cues.len()]
        };
        Self { cues, weights }
    }

    /// Cue words in the order given.
    #[must_use]
    pub fn cues(&self) -> &[String] {
        &self.cues
    }

    /// Weight for each cue, index-aligned with [`Self::cues`].
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Whether no keywords were given.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }
}
