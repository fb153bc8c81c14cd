//! Concept catalogs — the datasets a study session is built from.
//!
//! A catalog is an ordered list of concepts. Order matters: it becomes the
//! store's insertion order and therefore its tie-break order.
//!
//! ```toml
//! [[concept]]
//! concept = "Mejora continua"
//! definition = "Compromiso permanente con la mejora del desempeño global."
//! analogy = "Como escalar una montaña paso a paso."
//! external_source = "Estudio de caso, retroalimentación grupal"
//! associations = { "montaña" = 0.9, "escalada" = 0.6 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use rand::Rng;
use recall_core::config::{ActivationConfig, RecallConfig};
use recall_core::{DeclarativeStore, MemoryItem};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SimError};

const ISO_9001_TOML: &str = include_str!("../data/iso9001.toml");

/// One concept as described in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptSpec {
    /// Concept label.
    pub concept: String,
    /// Definition shown on recall.
    pub definition: String,
    /// Suggested study analogy.
    #[serde(default)]
    pub analogy: Option<String>,
    /// Suggested tools, people or resources.
    #[serde(default)]
    pub external_source: Option<String>,
    /// Cue word → association strength.
    #[serde(default)]
    pub associations: BTreeMap<String, f64>,
}

impl ConceptSpec {
    /// Build a memory item, drawing its noise from `rng`.
    pub fn to_item<R: Rng + ?Sized>(&self, config: &ActivationConfig, rng: &mut R) -> MemoryItem {
        let mut item = MemoryItem::sample(self.concept.as_str(), self.definition.as_str(), config, rng)
            .with_associations(self.associations.iter().map(|(cue, s)| (cue.as_str(), *s)));
        if let Some(analogy) = &self.analogy {
            item = item.with_analogy(analogy.as_str());
        }
        if let Some(source) = &self.external_source {
            item = item.with_external_source(source.as_str());
        }
        item
    }
}

/// An ordered collection of concepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Concepts in presentation order.
    #[serde(default, rename = "concept")]
    pub concepts: Vec<ConceptSpec>,
}

impl Catalog {
    /// The five ISO 9001:2015 principles used for the quality-management course.
    ///
    /// # Errors
    /// Only fails if the embedded dataset is malformed.
    pub fn iso9001() -> Result<Self> {
        Self::from_toml(ISO_9001_TOML)
    }

    /// Parse a catalog from TOML (`[[concept]]` tables).
    ///
    /// # Errors
    /// Returns [`SimError::Catalog`] on malformed input or a negative strength.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let catalog: Self = toml::from_str(toml_str).map_err(|e| SimError::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON (`{"concept": [...]}`).
    ///
    /// # Errors
    /// Returns [`SimError::Catalog`] on malformed input or a negative strength.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self =
            serde_json::from_str(json).map_err(|e| SimError::Catalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file; `.json` files are read as JSON, anything else as TOML.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }
    }

    /// Concept labels in order.
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.concepts.iter().map(|c| c.concept.as_str()).collect()
    }

    /// Number of concepts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Populate a fresh store, one item per concept, in catalog order.
    pub fn build_store<R: Rng + ?Sized>(&self, config: &RecallConfig, rng: &mut R) -> DeclarativeStore {
        let mut store = DeclarativeStore::new(config.retrieval.clone());
        for spec in &self.concepts {
            store.add(spec.to_item(&config.activation, rng));
        }
        info!(concepts = store.len(), "Declarative store populated");
        store
    }

    fn validate(&self) -> Result<()> {
        for spec in &self.concepts {
            if spec.concept.trim().is_empty() {
                return Err(SimError::Catalog("concept label must not be empty".to_string()));
            }
            if let Some((cue, s)) = spec
                .associations
                .iter()
                .find(|(_, s)| !s.is_finite() || **s < 0.0)
            {
                return Err(SimError::Catalog(format!(
                    "association '{cue}' of '{}' must be a non-negative number, got {s}",
                    spec.concept
                )));
            }
        }
        Ok(())
    }
}
