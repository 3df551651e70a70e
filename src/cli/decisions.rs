//! Decisions command implementation
//!
//! Audit-trail queries: by chosen job, confidence band, and decision time
//! range, newest first.

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};

use crate::resolve::ConfidenceBand;
use crate::store::{DecisionFilter, JobStore};

pub fn run(
    store: &JobStore,
    job: Option<String>,
    band: Option<String>,
    since: Option<String>,
    until: Option<String>,
    limit: usize,
) -> Result<()> {
    let band = match band {
        Some(raw) => match ConfidenceBand::parse(&raw) {
            Some(band) => Some(band),
            None => bail!("unknown confidence band '{raw}' (high|medium|low|ambiguous)"),
        },
        None => None,
    };

    let job_id = match job {
        Some(query) => Some(job_filter(store, &query)?),
        None => None,
    };

    let filter = DecisionFilter {
        job_id,
        band,
        since: since.as_deref().map(parse_ts).transpose()?,
        until: until.as_deref().map(parse_ts).transpose()?,
        limit,
    };
    let decisions = store.decisions(&filter)?;

    if decisions.is_empty() {
        println!("No decisions match.");
        return Ok(());
    }

    println!(
        "{:<17} {:<10} {:<10} {:<7} {:<10} {}",
        "Decided", "Job", "Band", "Score", "Resolver", "Explanation"
    );
    println!("{}", "-".repeat(110));

    for d in decisions {
        let job = d
            .chosen_job_id
            .as_deref()
            .map(|id| id[..8.min(id.len())].to_string())
            .unwrap_or_else(|| "new".to_string());
        println!(
            "{:<17} {:<10} {:<10} {:<7.3} {:<10} {}",
            d.decided_at.format("%Y-%m-%d %H:%M"),
            job,
            d.confidence_band.as_str(),
            d.score,
            d.resolver_version,
            d.explanation,
        );
    }

    Ok(())
}

/// Expand an id prefix through the jobs table when possible. A miss is not
/// an error: decisions outlive pruned jobs as audit history, so the raw
/// argument still works as a full chosen_job_id filter.
fn job_filter(store: &JobStore, query: &str) -> Result<String> {
    match store.find_job(query)? {
        Some(job) => Ok(job.job_id),
        None => Ok(query.to_string()),
    }
}

fn parse_ts(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| anyhow::anyhow!("invalid RFC 3339 timestamp '{raw}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Source;
    use crate::store::ResolutionDecision;
    use chrono::TimeZone;

    #[test]
    fn test_job_filter_falls_back_to_raw_id_for_pruned_jobs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JobStore::open(&dir.path().join("t.db")).unwrap();

        // A decision whose job no longer exists in the jobs table
        store
            .append_decision(&ResolutionDecision {
                decision_id: "d1".to_string(),
                input_source: Source::Greenhouse,
                input_source_id: None,
                input_canonical_url: "https://boards.greenhouse.io/acme/jobs/1".to_string(),
                input_content_hash: "h".to_string(),
                candidate_job_ids: vec![],
                chosen_job_id: Some("gone-123".to_string()),
                score: 1.0,
                confidence_band: ConfidenceBand::High,
                explanation: "test".to_string(),
                decided_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
                resolver_version: "v1".to_string(),
            })
            .unwrap();

        let job_id = job_filter(&store, "gone-123").unwrap();
        assert_eq!(job_id, "gone-123");

        let found = store
            .decisions(&DecisionFilter {
                job_id: Some(job_id),
                limit: 10,
                ..Default::default()
            })
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].decision_id, "d1");
    }
}
