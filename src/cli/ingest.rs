//! Ingest command implementation

use anyhow::{Context, Result};
use std::io::Read;

use crate::config::Config;
use crate::error::IngestError;
use crate::ingest::{IngestEffect, IngestOutcome, IngestPipeline};
use crate::page::RawPage;
use crate::partition::PartitionLocks;
use crate::semantic::NoSemantic;
use crate::store::JobStore;
use std::sync::Arc;

pub fn run(config: &Config, input: &str) -> Result<()> {
    let pages = read_pages(input)?;
    let store = JobStore::open(&config.database_path())?;
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

/// Read one page object or an array of page objects. `-` reads stdin.
pub fn read_pages(input: &str) -> Result<Vec<RawPage>> {
    let content = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read pages from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read pages from {input}"))?
    };

    let value: serde_json::Value =
        serde_json::from_str(&content).context("input is not valid JSON")?;
    let pages = if value.is_array() {
        serde_json::from_value(value).context("input array contains a non-page element")?
    } else {
        vec![serde_json::from_value(value).context("input is not a page object")?]
    };
    Ok(pages)
}

#[derive(Default)]
pub struct Summary {
    pub pages: usize,
    pub new_jobs: usize,
    pub matched: usize,
    pub reobserved: usize,
    pub ambiguous: usize,
    pub rejected: usize,
}

pub fn process_all(pipeline: &mut IngestPipeline, pages: Vec<RawPage>) -> Summary {
    let mut summary = Summary::default();
    for (i, page) in pages.into_iter().enumerate() {
        summary.pages += 1;
        match pipeline.ingest(page) {
            Ok(outcome) => {
                summary.record(&outcome);
                print_outcome(&outcome);
            }
            Err(IngestError::MalformedInput(reason)) => {
                summary.rejected += 1;
                println!("✗ page {}: rejected ({reason})", i + 1);
            }
            Err(err) => {
                // Storage and contention failures abort nothing else but are
                // surfaced loudly.
                summary.rejected += 1;
                println!("✗ page {}: failed ({err})", i + 1);
            }
        }
    }
    summary
}

impl Summary {
    fn record(&mut self, outcome: &IngestOutcome) {
        use crate::resolve::ConfidenceBand;
        match &outcome.effect {
            IngestEffect::JobCreated { .. } => self.new_jobs += 1,
            IngestEffect::VersionAdded { .. } => self.matched += 1,
            IngestEffect::Reobserved { .. } => self.reobserved += 1,
        }
        if outcome.decision.confidence_band == ConfidenceBand::Ambiguous {
            self.ambiguous += 1;
        }
    }

    pub fn print(&self) {
        println!();
        println!("{:<18} {}", "Pages", self.pages);
        println!("{}", "-".repeat(28));
        println!("{:<18} {}", "New jobs", self.new_jobs);
        println!("{:<18} {}", "Matched", self.matched);
        println!("{:<18} {}", "Re-observations", self.reobserved);
        println!("{:<18} {}", "Ambiguous", self.ambiguous);
        println!("{:<18} {}", "Rejected", self.rejected);
    }
}

fn print_outcome(outcome: &IngestOutcome) {
    let short = |id: &str| id[..8.min(id.len())].to_string();
    let label = match &outcome.effect {
        IngestEffect::JobCreated { job_id, .. } => format!("new job {}", short(job_id)),
        IngestEffect::VersionAdded { job_id, .. } => {
            let class = outcome
                .analysis
                .as_ref()
                .map(|a| a.classification.as_str())
                .unwrap_or("-");
            format!("matched {} ({class})", short(job_id))
        }
        IngestEffect::Reobserved { job_id, .. } => format!("re-observed {}", short(job_id)),
    };
    println!(
        "→ {label} [{} {:.3}] {}",
        outcome.decision.confidence_band.as_str(),
        outcome.decision.score,
        outcome.decision.explanation,
    );
}
