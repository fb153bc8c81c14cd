//! # Recall Core Library
//!
//! Activation-based declarative memory, after the retrieval module of the
//! ACT-R cognitive architecture (Anderson & Lebiere, 1998).
//!
//! A [`DeclarativeStore`] holds [`MemoryItem`]s. Each query ages every item,
//! scores the items whose concept label matches the search term, and returns
//! the best one if its activation clears the recall threshold:
//!
//! ```text
//! A = ln(frequency / recency + 1) + Σ wⱼ·Sⱼ + external + noise
//! latency = F · e^(-A)
//! ```
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use recall_core::{DeclarativeStore, MemoryItem, RecallConfig};
//!
//! let config = RecallConfig::default();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut store = DeclarativeStore::new(config.retrieval.clone());
//! store.add(
//!     MemoryItem::sample("Mejora continua", "Compromiso permanente con la mejora.", &config.activation, &mut rng)
//!         .with_frequency(4)
//!         .with_association("montaña", 0.9),
//! );
//!
//! let recalled = store.retrieve("mejora", &["montaña"], &[1.0], true)?;
//! assert!(recalled.is_some());
//! # Ok::<(), recall_core::RecallError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod activation;
pub mod config;
pub mod error;
pub mod item;
pub mod noise;
pub mod store;

pub use activation::ActivationBreakdown;
pub use config::{ActivationConfig, RecallConfig, RetrievalConfig, StimulusPolicy};
pub use error::{RecallError, Result};
pub use item::MemoryItem;
pub use store::DeclarativeStore;
