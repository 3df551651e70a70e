//! Backfill command implementation
//!
//! Replays a raw page set into a fresh database file, ascending by
//! fetched_at with input order breaking ties. Each backfill is its own
//! derived-store generation: an existing file at the output path is refused
//! rather than reused, and the live database is never touched.

use anyhow::{bail, Result};
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::partition::PartitionLocks;
use crate::semantic::NoSemantic;
use crate::store::JobStore;

use super::ingest::{process_all, read_pages};
use crate::ingest::IngestPipeline;

pub fn run(config: &Config, input: &str, output: &Path) -> Result<()> {
    if output.exists() {
        bail!(
            "output database {} already exists; a backfill writes a fresh generation",
            output.display()
        );
    }

    let mut pages = read_pages(input)?;
    // Stable sort: pages without a fetched_at keep input order, at the end
    pages.sort_by_key(|p| p.fetched_at.unwrap_or(chrono::DateTime::<chrono::Utc>::MAX_UTC));

    println!(
        "Backfilling {} pages into {} (resolver {})",
        pages.len(),
        output.display(),
        config.resolver.version
    );

    let store = JobStore::open(output)?;
    let mut pipeline = IngestPipeline::new(
        store,
        Arc::new(PartitionLocks::new()),
        Box::new(NoSemantic),
        config.clone(),
    );

    let summary = process_all(&mut pipeline, pages);
    summary.print();
    Ok(())
}
