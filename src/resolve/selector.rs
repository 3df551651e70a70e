//! Candidate selection
//!
//! Narrows the job universe to one (company, role_family) partition, most
//! recently seen first, bounded by the configured limit. Selection may
//! include false positives but must never exclude a valid match; the only
//! filters are the partition keys and the optional hard recency window.

use anyhow::Result;
use chrono::Duration;

use crate::config::ResolverConfig;
use crate::page::NormalizedPage;
use crate::store::{Candidate, JobStore};

/// Selector output. `insufficient_signal` marks the soft-fail case where the
/// partition keys themselves were unusable; the scorer turns that into a
/// low-confidence new-job decision instead of guessing.
#[derive(Debug)]
pub struct CandidateSet {
    pub candidates: Vec<Candidate>,
    pub insufficient_signal: Option<&'static str>,
}

impl CandidateSet {
    fn insufficient(reason: &'static str) -> Self {
        CandidateSet {
            candidates: Vec::new(),
            insufficient_signal: Some(reason),
        }
    }
}

pub fn select(
    store: &JobStore,
    page: &NormalizedPage,
    cfg: &ResolverConfig,
) -> Result<CandidateSet> {
    if page.company.is_empty() {
        return Ok(CandidateSet::insufficient("insufficient company signal"));
    }
    if page.role_family.is_empty() {
        return Ok(CandidateSet::insufficient("unparseable role family"));
    }

    let seen_after = cfg
        .recency_window_days
        .map(|days| page.fetched_at - Duration::days(days));

    let candidates = store.candidates(
        &page.company,
        &page.role_family,
        seen_after.as_ref(),
        cfg.candidate_limit,
    )?;

    Ok(CandidateSet {
        candidates,
        insufficient_signal: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{RawPage, Source};
    use crate::store::{Job, JobVersion};
    use chrono::{TimeZone, Utc};

    fn page(company: &str, title: &str) -> NormalizedPage {
        NormalizedPage::from_raw(RawPage {
            source: "greenhouse".to_string(),
            canonical_url: "https://boards.greenhouse.io/x/1".to_string(),
            company: company.to_string(),
            title: title.to_string(),
            fetched_at: Some(Utc.timestamp_opt(1_700_000_000, 0).unwrap()),
            ..Default::default()
        })
        .unwrap()
    }

    fn seed(store: &mut JobStore, job_id: &str, seen_offset: i64) {
        let seen = Utc.timestamp_opt(1_700_000_000 - seen_offset, 0).unwrap();
        let version_id = format!("v-{job_id}");
        store
            .create_job(
                &Job {
                    job_id: job_id.to_string(),
                    company: "acme".to_string(),
                    role_family: "software engineer".to_string(),
                    created_at: seen,
                    current_version_id: version_id.clone(),
                },
                &JobVersion {
                    version_id,
                    job_id: job_id.to_string(),
                    source: Source::Greenhouse,
                    source_id: None,
                    canonical_url: format!("https://boards.greenhouse.io/acme/{job_id}"),
                    title: "software engineer".to_string(),
                    location: String::new(),
                    team: None,
                    seniority: None,
                    description_text: "desc".to_string(),
                    content_hash: format!("h-{job_id}"),
                    first_seen: seen,
                    last_seen: seen,
                    ingested_at: seen,
                },
            )
            .unwrap();
    }

    #[test]
    fn test_select_scopes_to_partition_by_title_family() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JobStore::open(&dir.path().join("t.db")).unwrap();
        seed(&mut store, "j1", 0);

        // Different surface titles, same family
        let set = select(&store, &page("Acme", "Sr. Software Engineer II"), &ResolverConfig::default()).unwrap();
        assert_eq!(set.candidates.len(), 1);
        assert!(set.insufficient_signal.is_none());

        let set = select(&store, &page("Acme", "Data Scientist"), &ResolverConfig::default()).unwrap();
        assert!(set.candidates.is_empty());
        assert!(set.insufficient_signal.is_none());
    }

    #[test]
    fn test_select_orders_by_recency_and_limits() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JobStore::open(&dir.path().join("t.db")).unwrap();
        seed(&mut store, "old", 9_000);
        seed(&mut store, "fresh", 10);

        let set = select(&store, &page("acme", "Software Engineer"), &ResolverConfig::default()).unwrap();
        let ids: Vec<&str> = set.candidates.iter().map(|c| c.job.job_id.as_str()).collect();
        assert_eq!(ids, vec!["fresh", "old"]);

        let cfg = ResolverConfig {
            candidate_limit: 1,
            ..Default::default()
        };
        let set = select(&store, &page("acme", "Software Engineer"), &cfg).unwrap();
        assert_eq!(set.candidates.len(), 1);
        assert_eq!(set.candidates[0].job.job_id, "fresh");
    }

    #[test]
    fn test_recency_window_is_a_hard_filter() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JobStore::open(&dir.path().join("t.db")).unwrap();
        // 10 days stale vs a 7 day window
        seed(&mut store, "stale", 10 * 86_400);
        seed(&mut store, "fresh", 86_400);

        let cfg = ResolverConfig {
            recency_window_days: Some(7),
            ..Default::default()
        };
        let set = select(&store, &page("acme", "Software Engineer"), &cfg).unwrap();
        let ids: Vec<&str> = set.candidates.iter().map(|c| c.job.job_id.as_str()).collect();
        assert_eq!(ids, vec!["fresh"]);
    }

    #[test]
    fn test_empty_company_soft_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JobStore::open(&dir.path().join("t.db")).unwrap();
        seed(&mut store, "j1", 0);

        let mut p = page("acme", "Software Engineer");
        p.company = String::new();
        let set = select(&store, &p, &ResolverConfig::default()).unwrap();
        assert!(set.candidates.is_empty());
        assert_eq!(set.insufficient_signal, Some("insufficient company signal"));
    }
}
