//! Configuration for the recall simulation.
//!
//! Maps directly to `recall.toml`. Every field has a default, so an empty
//! document yields the classic parameters (F = 0.5, threshold = 1.5,
//! noise σ = 0.1, external boost = 0.5).

use serde::{Deserialize, Serialize};

use crate::error::{RecallError, Result};

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecallConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Per-item activation parameters.
    #[serde(default)]
    pub activation: ActivationConfig,
    /// Store-level retrieval parameters.
    #[serde(default)]
    pub retrieval: RetrievalConfig,
}

impl RecallConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `RecallError::Config` if the TOML is invalid or a value is out of range.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| RecallError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Check that every numeric parameter is usable by the activation equations.
    ///
    /// # Errors
    /// Returns `RecallError::Config` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let a = &self.activation;
        if !a.latency_factor.is_finite() || a.latency_factor <= 0.0 {
            return Err(RecallError::Config(format!(
                "activation.latency_factor must be a positive number, got {}",
                a.latency_factor
            )));
        }
        if !a.noise_std_dev.is_finite() || a.noise_std_dev < 0.0 {
            return Err(RecallError::Config(format!(
                "activation.noise_std_dev must be non-negative, got {}",
                a.noise_std_dev
            )));
        }
        let r = &self.retrieval;
        if !r.recall_threshold.is_finite() {
            return Err(RecallError::Config(
                "retrieval.recall_threshold must be finite".to_string(),
            ));
        }
        if !r.external_boost.is_finite() {
            return Err(RecallError::Config(
                "retrieval.external_boost must be finite".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Parameters baked into each memory item at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivationConfig {
    /// `F` — latency scaling factor in `F · e^(-A)`.
    #[serde(default = "default_0_5")]
    pub latency_factor: f64,
    /// Standard deviation of the per-item Gaussian noise (mean 0).
    #[serde(default = "default_0_1")]
    pub noise_std_dev: f64,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            latency_factor: 0.5,
            noise_std_dev: 0.1,
        }
    }
}

/// How long an external boost applied by a query stays on the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StimulusPolicy {
    /// Restore each candidate's previous stimulus once the query has been scored.
    #[default]
    Transient,
    /// Leave the boost in place for all later queries.
    Sticky,
}

/// Store-level retrieval parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalConfig {
    /// Activation a candidate must strictly exceed to be recalled.
    #[serde(default = "default_1_5")]
    pub recall_threshold: f64,
    /// Stimulus assigned to every candidate when a query asks for an external boost.
    #[serde(default = "default_0_5")]
    pub external_boost: f64,
    /// Lifetime of the external boost.
    #[serde(default)]
    pub stimulus_policy: StimulusPolicy,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            recall_threshold: 1.5,
            external_boost: 0.5,
            stimulus_policy: StimulusPolicy::Transient,
        }
    }
}

// ---------------------------------------------------------------------------
// Serde default helpers
// ---------------------------------------------------------------------------

fn default_log_level() -> String { "info".to_string() }
fn default_0_1() -> f64 { 0.1 }
fn default_0_5() -> f64 { 0.5 }
fn default_1_5() -> f64 { 1.5 }
