//! Session log — append-only CSV record of recalled concepts.
//!
//! One row per successful recall, written after the learner has added their
//! own analogy and the external resources they used:
//!
//! ```text
//! Fecha,Concepto,Analogía_Sugerida,Analogía_Personal,Elementos_CSD,Activación,Tiempo_Recuperacion
//! 2025-03-14 10:22:05,Liderazgo,Como el capitán de un barco...,Como un director de orquesta,Mentor,1.83,0.08
//! ```
//!
//! The header is written once, when the file is created (or found empty).
//! Activation and latency are rounded to two decimals.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use recall_core::MemoryItem;
use tracing::{debug, info};

use crate::error::{Result, SimError};

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "registros_aprendizaje.csv";

/// Header row of the log.
pub const HEADER: [&str; 7] = [
    "Fecha",
    "Concepto",
    "Analogía_Sugerida",
    "Analogía_Personal",
    "Elementos_CSD",
    "Activación",
    "Tiempo_Recuperacion",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One recalled concept, as written to the log.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    /// Local wall-clock time of the recall.
    pub timestamp: NaiveDateTime,
    /// Recalled concept label.
    pub concept: String,
    /// Analogy the system suggested.
    pub suggested_analogy: String,
    /// Analogy the learner wrote.
    pub personal_analogy: String,
    /// Tools, people or resources the learner used.
    pub external_resources: String,
    /// Activation at recall time.
    pub activation: f64,
    /// Retrieval latency at recall time.
    pub retrieval_latency: f64,
}

impl SessionRecord {
    /// Build a record for an item that was just recalled, stamped with the current time.
    ///
    /// # Errors
    /// Returns [`SimError::Recall`] if the item has no computed activation.
    pub fn from_hit(
        item: &MemoryItem,
        personal_analogy: impl Into<String>,
        external_resources: impl Into<String>,
    ) -> Result<Self> {
        let retrieval_latency = item.retrieval_latency()?;
        let activation = item.activation().unwrap_or_default();
        Ok(Self {
            timestamp: Local::now().naive_local(),
            concept: item.concept().to_string(),
            suggested_analogy: item.analogy().unwrap_or_default().to_string(),
            personal_analogy: personal_analogy.into(),
            external_resources: external_resources.into(),
            activation,
            retrieval_latency,
        })
    }

    fn to_row(&self) -> [String; 7] {
        [
            self.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            self.concept.clone(),
            self.suggested_analogy.clone(),
            self.personal_analogy.clone(),
            self.external_resources.clone(),
            round2(self.activation).to_string(),
            round2(self.retrieval_latency).to_string(),
        ]
    }

    fn from_row(row: &csv::StringRecord, line: u64) -> Result<Self> {
        let malformed = |reason: String| SimError::MalformedRecord { line, reason };
        if row.len() != HEADER.len() {
            return Err(malformed(format!("expected {} fields, found {}", HEADER.len(), row.len())));
        }
        let number = |idx: usize| {
            row[idx]
                .parse::<f64>()
                .map_err(|e| malformed(format!("{}: {e}", HEADER[idx])))
        };
        Ok(Self {
            timestamp: NaiveDateTime::parse_from_str(&row[0], TIMESTAMP_FORMAT)
                .map_err(|e| malformed(format!("{}: {e}", HEADER[0])))?,
            concept: row[1].to_string(),
            suggested_analogy: row[2].to_string(),
            personal_analogy: row[3].to_string(),
            external_resources: row[4].to_string(),
            activation: number(5)?,
            retrieval_latency: number(6)?,
        })
    }
}

/// Handle to an append-only session log file.
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    /// Point at a log file. Nothing is created until the first append.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Location of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first if the file is new or empty.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened or written.
    pub fn append(&self, record: &SessionRecord) -> Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let needs_header = file.metadata()?.len() == 0;

        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(HEADER)?;
            info!(path = %self.path.display(), "Session log created");
        }
        writer.write_record(record.to_row())?;
        writer.flush()?;

        debug!(
            path = %self.path.display(),
            concept = %record.concept,
            activation = record.activation,
            "Session record appended"
        );
        Ok(())
    }

    /// Read every record back, in file order. A missing file reads as empty.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a row is malformed.
    pub fn read_all(&self) -> Result<Vec<SessionRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map_or(0, csv::Position::line);
            records.push(SessionRecord::from_row(&row, line)?);
        }
        Ok(records)
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
