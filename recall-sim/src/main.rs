//! `recall-sim` — run study trials against a concept catalog from the terminal.
//!
//! ```text
//! recall-sim --concept "Mejora continua" --keywords "montaña escalada"
//! recall-sim --concept liderazgo --keywords capitán --trials 3 --seed 7 \
//!     --record registros_aprendizaje.csv --personal-analogy "Como un director de orquesta"
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use recall_core::RecallConfig;
use recall_sim::{Catalog, KeywordContext, SessionLog, SessionRecord};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Simulate whether a learner recalls a concept given keyword cues.
#[derive(Debug, Parser)]
#[command(name = "recall-sim", version, about)]
struct Cli {
    /// Concept to study; matched as a case-insensitive substring of the labels.
    #[arg(short, long, required_unless_present = "list")]
    concept: Option<String>,

    /// Space-separated keywords related to the concept.
    #[arg(short, long, default_value = "")]
    keywords: String,

    /// Configuration file (TOML).
    #[arg(long, env = "RECALL_CONFIG")]
    config: Option<PathBuf>,

    /// Concept catalog (TOML or JSON). Defaults to the built-in ISO 9001 principles.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Seed for the noise RNG, for reproducible sessions.
    #[arg(long)]
    seed: Option<u64>,

    /// Query without the external search-mode boost.
    #[arg(long)]
    no_boost: bool,

    /// Number of consecutive retrieval attempts in the same session.
    #[arg(long, default_value_t = 1)]
    trials: u32,

    /// List the catalog's concepts and exit.
    #[arg(long)]
    list: bool,

    /// Append each recall to this session log (CSV).
    #[arg(long)]
    record: Option<PathBuf>,

    /// The learner's own analogy, stored with recorded recalls.
    #[arg(long, default_value = "")]
    personal_analogy: String,

    /// Tools, people or resources used, stored with recorded recalls.
    #[arg(long, default_value = "")]
    resources: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => RecallConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RecallConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::iso9001().context("loading built-in catalog")?,
    };

    if cli.list {
        for label in catalog.labels() {
            println!("{label}");
        }
        return Ok(());
    }

    let Some(concept) = cli.concept.as_deref() else {
        anyhow::bail!("--concept is required");
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut store = catalog.build_store(&config, &mut rng);
    let context = KeywordContext::parse(&cli.keywords);
    let log = cli.record.as_ref().map(SessionLog::new);

    info!(
        concept,
        keywords = context.cues().len(),
        boost = !cli.no_boost,
        trials = cli.trials,
        "Starting study session"
    );

    for trial in 1..=cli.trials.max(1) {
        let recalled = store
            .retrieve(concept, context.cues(), context.weights(), !cli.no_boost)
            .context("retrieval failed")?;

        let Some(item) = recalled else {
            println!("[{trial}] Not recalled. Try another context.");
            continue;
        };

        let activation = item.activation().unwrap_or_default();
        let latency = item.retrieval_latency()?;
        println!("[{trial}] Recalled: {}", item.concept());
        println!("    Definition:      {}", item.definition());
        if let Some(analogy) = item.analogy() {
            println!("    Analogy:         {analogy}");
        }
        if let Some(source) = item.external_source() {
            println!("    External source: {source}");
        }
        println!("    Activation:      {activation:.2}");
        println!("    Latency:         {latency:.2}s");

        if let Some(log) = &log {
            if cli.personal_analogy.is_empty() {
                warn!("Recording a recall without a personal analogy");
            }
            let record = SessionRecord::from_hit(item, &*cli.personal_analogy, &*cli.resources)?;
            log.append(&record)
                .with_context(|| format!("writing session log {}", log.path().display()))?;
        }
    }

    Ok(())
}
