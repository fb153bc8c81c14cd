//! # recall-sim — Concept Recall Simulation
//!
//! Drives `recall-core` the way a study session does: a catalog of concepts
//! populates a [`recall_core::DeclarativeStore`], the learner's keywords
//! become weighted context cues, and each successful recall can be appended
//! to a session log.
//!
//! ## Modules
//!
//! - `catalog` — concept datasets (TOML/JSON), including the built-in ISO 9001 principles
//! - `context` — keyword text → uniformly weighted context cues
//! - `session` — append-only CSV log of recalled concepts
//! - `error` — simulation error type

#![deny(clippy::unwrap_used)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod context;
pub mod error;
pub mod session;

pub use catalog::{Catalog, ConceptSpec};
pub use context::KeywordContext;
pub use error::{Result, SimError};
pub use session::{SessionLog, SessionRecord};
