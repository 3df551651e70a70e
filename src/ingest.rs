//! Ingest pipeline: resolution, version writing, audit, classification
//!
//! One page is one unit of work: validate and normalize, take the partition
//! lock, select candidates, match and score, apply the verdict to the store,
//! append the audit decision, and classify any created version against the
//! prior one. Every processed page appends exactly one decision; rejected
//! pages append nothing and return `MalformedInput` to the caller.
//!
//! Observation time (`fetched_at`) drives `first_seen`/`last_seen` so a
//! replay of the same raw pages in the same order rebuilds the identical
//! job/version graph; wall-clock time is kept only as audit metadata.

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::error::IngestError;
use crate::page::{NormalizedPage, RawPage};
use crate::partition::PartitionLocks;
use crate::resolve::{classify, compute_signals, decide, Resolution};
use crate::semantic::SemanticSimilarity;
use crate::store::{Job, JobStore, JobVersion, RepostAnalysis, ResolutionDecision};
use std::sync::Arc;

/// What one page did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestEffect {
    JobCreated { job_id: String, version_id: String },
    VersionAdded { job_id: String, version_id: String },
    Reobserved { job_id: String, version_id: String },
}

impl IngestEffect {
    pub fn job_id(&self) -> &str {
        match self {
            IngestEffect::JobCreated { job_id, .. }
            | IngestEffect::VersionAdded { job_id, .. }
            | IngestEffect::Reobserved { job_id, .. } => job_id,
        }
    }
}

/// Outcome of one processed page, for callers to print or count.
#[derive(Debug)]
pub struct IngestOutcome {
    pub decision: ResolutionDecision,
    pub effect: IngestEffect,
    /// Present exactly when a version was created.
    pub analysis: Option<RepostAnalysis>,
}

pub struct IngestPipeline {
    store: JobStore,
    locks: Arc<PartitionLocks>,
    provider: Box<dyn SemanticSimilarity>,
    config: Config,
}

impl IngestPipeline {
    pub fn new(
        store: JobStore,
        locks: Arc<PartitionLocks>,
        provider: Box<dyn SemanticSimilarity>,
        config: Config,
    ) -> Self {
        Self {
            store,
            locks,
            provider,
            config,
        }
    }

    pub fn store(&self) -> &JobStore {
        &self.store
    }

    /// Process one raw page end to end.
    pub fn ingest(&mut self, raw: RawPage) -> Result<IngestOutcome, IngestError> {
        let page = match NormalizedPage::from_raw(raw) {
            Ok(page) => page,
            Err(err) => {
                warn!(error = %err, "rejected malformed page");
                return Err(err);
            }
        };

        let key = page.partition_key();
        let locks = self.locks.clone();
        locks.with_partition(&key, || self.resolve_and_write(&page))
    }

    /// The serialized read-decide-write sequence. Runs under the partition
    /// lock; everything it reads stays valid until it commits.
    fn resolve_and_write(&mut self, page: &NormalizedPage) -> Result<IngestOutcome, IngestError> {
        let set = crate::resolve::select(&self.store, page, &self.config.resolver)?;
        let signals: Vec<_> = set
            .candidates
            .iter()
            .map(|c| compute_signals(page, &c.current, self.provider.as_ref(), &self.config.resolver))
            .collect();
        let verdict = decide(page, &set, &signals, &self.config.resolver);

        debug!(
            company = %page.company,
            role_family = %page.role_family,
            candidates = set.candidates.len(),
            score = verdict.score,
            band = verdict.band.as_str(),
            "resolved page"
        );

        let (effect, analysis) = match &verdict.resolution {
            Resolution::NewJob => self.write_new_job(page)?,
            Resolution::MatchExisting(job_id) => self.write_match(page, job_id)?,
        };

        let decision = ResolutionDecision {
            decision_id: Uuid::new_v4().to_string(),
            input_source: page.source.clone(),
            input_source_id: page.source_id.clone(),
            input_canonical_url: page.canonical_url.clone(),
            input_content_hash: page.content_hash.clone(),
            candidate_job_ids: verdict.considered.clone(),
            chosen_job_id: verdict.chosen_job_id().map(String::from),
            score: verdict.score,
            confidence_band: verdict.band,
            explanation: verdict.explanation.clone(),
            decided_at: Utc::now(),
            resolver_version: self.config.resolver.version.clone(),
        };
        self.store.append_decision(&decision)?;

        info!(
            job_id = %effect.job_id(),
            band = decision.confidence_band.as_str(),
            score = decision.score,
            explanation = %decision.explanation,
            "recorded resolution decision"
        );

        Ok(IngestOutcome {
            decision,
            effect,
            analysis,
        })
    }

    fn write_new_job(
        &mut self,
        page: &NormalizedPage,
    ) -> Result<(IngestEffect, Option<RepostAnalysis>), IngestError> {
        let job_id = Uuid::new_v4().to_string();
        let version = version_from_page(page, &job_id);
        let job = Job {
            job_id: job_id.clone(),
            company: page.company.clone(),
            role_family: page.role_family.clone(),
            created_at: page.fetched_at,
            current_version_id: version.version_id.clone(),
        };
        self.store.create_job(&job, &version)?;

        let analysis = classify(&version, None, &self.config.repost);
        self.store.insert_analysis(&analysis)?;

        Ok((
            IngestEffect::JobCreated {
                job_id,
                version_id: version.version_id,
            },
            Some(analysis),
        ))
    }

    fn write_match(
        &mut self,
        page: &NormalizedPage,
        job_id: &str,
    ) -> Result<(IngestEffect, Option<RepostAnalysis>), IngestError> {
        let current = self
            .store
            .current_version(job_id)?
            .ok_or_else(|| IngestError::Other(anyhow::anyhow!("job {job_id} has no current version")))?;

        // A re-observation may repeat any version this job has had, not just
        // the current one: the same greenhouse posting stays live while a
        // lever copy becomes current. Identical content never creates a row,
        // it only bumps the clock on the version that already carries it.
        let reobserved = if current.content_hash == page.content_hash {
            Some(current.version_id.clone())
        } else {
            self.store
                .versions_for_job(job_id)?
                .into_iter()
                .find(|v| v.content_hash == page.content_hash)
                .map(|v| v.version_id)
        };
        if let Some(version_id) = reobserved {
            self.store.bump_last_seen(&version_id, &page.fetched_at)?;
            return Ok((
                IngestEffect::Reobserved {
                    job_id: job_id.to_string(),
                    version_id,
                },
                None,
            ));
        }

        let version = version_from_page(page, job_id);
        self.store.add_version(&version)?;

        let analysis = classify(&version, Some(&current), &self.config.repost);
        self.store.insert_analysis(&analysis)?;

        Ok((
            IngestEffect::VersionAdded {
                job_id: job_id.to_string(),
                version_id: version.version_id,
            },
            Some(analysis),
        ))
    }
}

fn version_from_page(page: &NormalizedPage, job_id: &str) -> JobVersion {
    JobVersion {
        version_id: Uuid::new_v4().to_string(),
        job_id: job_id.to_string(),
        source: page.source.clone(),
        source_id: page.source_id.clone(),
        canonical_url: page.canonical_url.clone(),
        title: page.title.clone(),
        location: page.location.clone(),
        team: page.team.clone(),
        seniority: page.seniority.clone(),
        description_text: page.description_text.clone(),
        content_hash: page.content_hash.clone(),
        first_seen: page.fetched_at,
        last_seen: page.fetched_at,
        ingested_at: Utc::now(),
    }
}
