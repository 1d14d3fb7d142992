//! Ingestion pipeline.
//!
//! For every listing record, in input order:
//! 1. **Decode** — turn the JSON element into a [`RawListing`]
//! 2. **Normalize** — builder / location split, `Launched:` / `Possession:` labels removed
//! 3. **Configure** — one [`ConfigurationRow`](crate::configuration::ConfigurationRow) per unit configuration
//! 4. **Persist** — one [`GraphDriver::load_listing`] transaction
//!
//! A failure in any step skips that listing only. Input-level failures (file
//! missing, not JSON) abort before the first listing.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{error, info};

use crate::configuration::build_configuration_rows;
use crate::driver::{GraphDriver, ListingLoad};
use crate::errors::Result;
use crate::listing::{load_listings, RawListing};
use crate::normalize::{extract_builder_location, strip_prefix_label};

const LAUNCHED_LABEL: &str = "Launched:";
const POSSESSION_LABEL: &str = "Possession:";

/// Turn a raw listing into the parameters of its graph write.
pub fn prepare_listing(raw: &RawListing) -> Result<ListingLoad> {
    let names = extract_builder_location(&raw.builder);
    let config = build_configuration_rows(&raw.config)?;

    Ok(ListingLoad {
        project: raw.project.clone(),
        builder: names.builder,
        location: names.location,
        launched: strip_prefix_label(&raw.launched, LAUNCHED_LABEL),
        possession: strip_prefix_label(&raw.possession, POSSESSION_LABEL),
        config,
    })
}

/// A listing that was skipped.
#[derive(Debug, Clone, Serialize)]
pub struct ListingFailure {
    /// Position of the record in the input array.
    pub index: usize,
    /// Project name, when the record had one.
    pub project: Option<String>,
    /// The error and its sources, outermost first.
    pub error: String,
}

/// Outcome of one ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub total: usize,
    pub loaded: usize,
    pub properties_created: usize,
    pub failures: Vec<ListingFailure>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl IngestReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Drives listings through normalization and into a [`GraphDriver`], one at a time.
pub struct Ingestor<'a, D: GraphDriver> {
    driver: &'a D,
}

impl<'a, D: GraphDriver> Ingestor<'a, D> {
    pub fn new(driver: &'a D) -> Self {
        Self { driver }
    }

    /// Normalize and write a single listing record.
    ///
    /// Returns the number of property nodes created.
    pub async fn ingest_record(&self, record: serde_json::Value) -> Result<usize> {
        let raw = RawListing::from_value(record)?;
        let load = prepare_listing(&raw)?;
        self.driver.load_listing(&load).await?;
        Ok(load.config.len())
    }

    /// Ingest every record sequentially, isolating per-listing failures.
    pub async fn run(&self, records: Vec<serde_json::Value>) -> IngestReport {
        let started_at = Utc::now();
        let total = records.len();
        let mut loaded = 0;
        let mut properties_created = 0;
        let mut failures = Vec::new();

        for (index, record) in records.into_iter().enumerate() {
            let project = record
                .get("project")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string);

            match self.ingest_record(record).await {
                Ok(properties) => {
                    loaded += 1;
                    properties_created += properties;
                    info!(index, project = project.as_deref().unwrap_or(""), properties, "listing loaded");
                }
                Err(e) => {
                    let chain = error_chain(&e);
                    error!(index, project = project.as_deref().unwrap_or(""), error = %chain, "listing skipped");
                    failures.push(ListingFailure {
                        index,
                        project,
                        error: chain,
                    });
                }
            }
        }

        IngestReport {
            total,
            loaded,
            properties_created,
            failures,
            started_at,
            finished_at: Utc::now(),
        }
    }

    /// Load the listings file at `path` and ingest it.
    ///
    /// # Errors
    /// Only input-level errors; listing failures are reported in the [`IngestReport`].
    pub async fn run_file(&self, path: &Path) -> Result<IngestReport> {
        let records = load_listings(path).await?;
        info!(path = %path.display(), listings = records.len(), "input loaded");
        Ok(self.run(records).await)
    }
}

/// Render an error with its `source()` chain, joined by `: `.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
