//! Activation equations for declarative retrieval.
//!
//! A = B + Σ wⱼ·Sⱼ + E + ε
//!
//! Where:
//!   B  = ln(frequency / recency + 1)    (base-level strength: practice vs. decay)
//!   Sⱼ = association strength of cue j  (contextual priming, 0 if unknown)
//!   wⱼ = attentional weight of cue j
//!   E  = external stimulus              (hint / search-mode boost)
//!   ε  = per-item Gaussian noise
//!
//! Retrieval latency follows T = F · e^(-A).

use std::collections::HashMap;

use crate::error::{RecallError, Result};

/// Breakdown of an activation value into its component terms.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ActivationBreakdown {
    /// Base-level strength `B`.
    pub base_level: f64,
    /// Associative priming `Σ wⱼ·Sⱼ`.
    pub associative: f64,
    /// External stimulus `E`.
    pub external: f64,
    /// Noise term `ε`.
    pub noise: f64,
}

impl ActivationBreakdown {
    /// Total activation `A`.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.base_level + self.associative + self.external + self.noise
    }
}

/// Base-level strength `B = ln(frequency / recency + 1)`.
///
/// Both counters are at least 1 for any live memory item, so the argument of
/// the logarithm is always greater than 1 and `B` is positive.
#[must_use]
pub fn base_level(frequency: u32, recency: u32) -> f64 {
    let recency = recency.max(1);
    (f64::from(frequency) / f64::from(recency) + 1.0).ln()
}

/// Check that cues and weights pair one-to-one.
///
/// # Errors
/// Returns [`RecallError::MismatchedCues`] when the lengths differ.
pub fn check_pairing<S: AsRef<str>>(cues: &[S], weights: &[f64]) -> Result<()> {
    if cues.len() == weights.len() {
        Ok(())
    } else {
        Err(RecallError::MismatchedCues {
            cues: cues.len(),
            weights: weights.len(),
        })
    }
}

/// Associative priming `Σ wⱼ·Sⱼ` over the paired cues and weights.
///
/// # Errors
/// Returns [`RecallError::MismatchedCues`] when the lengths differ.
pub fn associative_sum<S: AsRef<str>>(
    associations: &HashMap<String, f64>,
    cues: &[S],
    weights: &[f64],
) -> Result<f64> {
    check_pairing(cues, weights)?;
    Ok(cues
        .iter()
        .zip(weights)
        .map(|(cue, weight)| weight * associations.get(cue.as_ref()).copied().unwrap_or(0.0))
        .sum())
}

/// Retrieval latency `T = F · e^(-A)`.
#[must_use]
pub fn retrieval_latency(latency_factor: f64, activation: f64) -> f64 {
    latency_factor * (-activation).exp()
}
