//! Shared fixtures for the recall benchmark suite.

use rand::SeedableRng;
use rand::rngs::StdRng;
use recall_core::config::{ActivationConfig, RetrievalConfig};
use recall_core::{DeclarativeStore, MemoryItem};

/// Cue words every synthetic item is associated with, at varying strengths.
pub const CUES: [&str; 4] = ["montaña", "cliente", "capitán", "datos"];

/// A store of `n` synthetic concepts ("Concepto 0", "Concepto 1", ...) with seeded noise.
#[must_use]
pub fn synthetic_store(n: u32) -> DeclarativeStore {
    let config = ActivationConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let items = (0..n).map(|i| {
        MemoryItem::sample(format!("Concepto {i}"), "Definición sintética", &config, &mut rng)
            .with_frequency(i % 7 + 1)
            .with_associations(
                CUES.iter()
                    .enumerate()
                    .map(|(j, cue)| (*cue, f64::from((i + j as u32) % 10) / 10.0)),
            )
    });
    DeclarativeStore::with_items(RetrievalConfig::default(), items)
}
