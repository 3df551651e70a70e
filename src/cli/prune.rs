//! Prune command implementation
//!
//! Deletes jobs whose current version has gone unseen for the given number
//! of days, cascading versions and repost analyses. Resolution decisions are
//! audit history and survive.

use anyhow::Result;
use chrono::{Duration, Utc};
use tracing::info;

use crate::store::JobStore;

pub fn run(store: &mut JobStore, days: i64, dry_run: bool) -> Result<()> {
    let cutoff = Utc::now() - Duration::days(days);

    let stale = store.count_stale(&cutoff)?;
    println!(
        "{} jobs not seen since {} ({} days)",
        stale,
        cutoff.format("%Y-%m-%d"),
        days
    );

    if dry_run {
        println!("Dry run, nothing deleted.");
        return Ok(());
    }
    if stale == 0 {
        return Ok(());
    }

    let summary = store.prune_stale(&cutoff)?;
    info!(
        jobs = summary.jobs_deleted,
        versions = summary.versions_deleted,
        analyses = summary.analyses_deleted,
        "pruned stale jobs"
    );
    println!(
        "Deleted {} jobs, {} versions, {} analyses. {} jobs remain.",
        summary.jobs_deleted,
        summary.versions_deleted,
        summary.analyses_deleted,
        summary.jobs_remaining,
    );

    Ok(())
}
