//! Job history storage with SQLite
//!
//! Four tables, one invariant: job_versions is append-only and the only
//! column ever updated in place is last_seen (forward-only bumps on
//! re-observation). Jobs carry the partition keys and the pointer to their
//! current version; decisions and analyses are audit/derived records keyed by
//! id. Multi-row writes (job + first version, version + pointer update, prune
//! cascade) run inside transactions.

mod schema;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, params_from_iter, Connection};
use std::path::Path;
use std::time::Duration;

use crate::page::Source;
use crate::resolve::{Classification, ConfidenceBand};

pub use schema::SCHEMA;

/// Encode a timestamp for storage. Fixed microsecond precision with a `Z`
/// suffix keeps lexicographic order identical to time order, which the
/// recency ordering and range filters rely on.
pub fn ts_to_sql(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn ts_from_sql(idx: usize, raw: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(e))
        })
}

pub struct JobStore {
    conn: Connection,
}

impl JobStore {
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .with_context(|| format!("failed to open database at {}", path.display()))?;
        // Concurrent connections to one file wait politely instead of
        // failing with SQLITE_BUSY.
        conn.busy_timeout(Duration::from_secs(5))?;

        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ============================================
    // JOBS & VERSIONS
    // ============================================

    /// Create a new job together with its first version, atomically.
    pub fn create_job(&mut self, job: &Job, first_version: &JobVersion) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO jobs (job_id, company, role_family, created_at, current_version_id)
             VALUES (?, ?, ?, ?, ?)",
            params![
                job.job_id,
                job.company,
                job.role_family,
                ts_to_sql(&job.created_at),
                job.current_version_id,
            ],
        )?;
        insert_version(&tx, first_version)?;
        tx.commit()?;
        Ok(())
    }

    /// Append a version to an existing job and move its current pointer,
    /// atomically.
    pub fn add_version(&mut self, version: &JobVersion) -> Result<()> {
        let tx = self.conn.transaction()?;
        insert_version(&tx, version)?;
        let updated = tx.execute(
            "UPDATE jobs SET current_version_id = ? WHERE job_id = ?",
            params![version.version_id, version.job_id],
        )?;
        if updated == 0 {
            bail!("no job {} to attach version to", version.job_id);
        }
        tx.commit()?;
        Ok(())
    }

    /// Bump last_seen on a version, forward-only. Returns false when the
    /// stored value was already at or past `seen_at`.
    pub fn bump_last_seen(&self, version_id: &str, seen_at: &DateTime<Utc>) -> Result<bool> {
        let updated = self.conn.execute(
            "UPDATE job_versions SET last_seen = ?2 WHERE version_id = ?1 AND last_seen < ?2",
            params![version_id, ts_to_sql(seen_at)],
        )?;
        Ok(updated > 0)
    }

    pub fn get_job(&self, job_id: &str) -> Result<Option<Job>> {
        let result = self.conn.query_row(
            "SELECT job_id, company, role_family, created_at, current_version_id
             FROM jobs WHERE job_id = ?",
            params![job_id],
            |row| job_from_row(row, 0),
        );

        match result {
            Ok(job) => Ok(Some(job)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a job by full id or unambiguous id prefix.
    pub fn find_job(&self, query: &str) -> Result<Option<Job>> {
        let mut stmt = self.conn.prepare(
            "SELECT job_id, company, role_family, created_at, current_version_id
             FROM jobs
             WHERE job_id = ?1 OR job_id LIKE ?2
             ORDER BY CASE WHEN job_id = ?1 THEN 0 ELSE 1 END
             LIMIT 2",
        )?;
        let rows: Vec<Job> = stmt
            .query_map(params![query, format!("{}%", query)], |row| {
                job_from_row(row, 0)
            })?
            .collect::<Result<Vec<_>, _>>()?;

        match rows.len() {
            0 => Ok(None),
            1 => Ok(rows.into_iter().next()),
            _ if rows[0].job_id == query => Ok(rows.into_iter().next()),
            _ => bail!("job id prefix '{}' is ambiguous", query),
        }
    }

    pub fn get_version(&self, version_id: &str) -> Result<Option<JobVersion>> {
        let result = self.conn.query_row(
            &format!("SELECT {VERSION_COLUMNS} FROM job_versions WHERE version_id = ?"),
            params![version_id],
            |row| version_from_row(row, 0),
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Current version of a job: the one its current_version_id points at.
    pub fn current_version(&self, job_id: &str) -> Result<Option<JobVersion>> {
        let result = self.conn.query_row(
            &format!(
                "SELECT {} FROM job_versions v
                 JOIN jobs j ON j.current_version_id = v.version_id
                 WHERE j.job_id = ?",
                version_columns("v")
            ),
            params![job_id],
            |row| version_from_row(row, 0),
        );

        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All versions of a job in first_seen order (ties broken by ingestion
    /// order, then id, so the sequence is stable).
    pub fn versions_for_job(&self, job_id: &str) -> Result<Vec<JobVersion>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {VERSION_COLUMNS} FROM job_versions
             WHERE job_id = ?
             ORDER BY first_seen, ingested_at, version_id"
        ))?;

        let rows = stmt.query_map(params![job_id], |row| version_from_row(row, 0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ============================================
    // CANDIDATE SELECTION
    // ============================================

    /// Jobs in one (company, role_family) partition, most recently seen
    /// first, each paired with its current version. `seen_after` applies the
    /// optional hard recency cutoff.
    pub fn candidates(
        &self,
        company: &str,
        role_family: &str,
        seen_after: Option<&DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<Candidate>> {
        let base_query = format!(
            "SELECT j.job_id, j.company, j.role_family, j.created_at, j.current_version_id, {}
             FROM jobs j
             JOIN job_versions v ON v.version_id = j.current_version_id
             WHERE j.company = ?1 AND j.role_family = ?2",
            version_columns("v")
        );

        let map_row = |row: &rusqlite::Row| -> rusqlite::Result<Candidate> {
            Ok(Candidate {
                job: job_from_row(row, 0)?,
                current: version_from_row(row, 5)?,
            })
        };

        let rows: Vec<Candidate> = match seen_after {
            Some(cutoff) => {
                let query =
                    format!("{base_query} AND v.last_seen >= ?3 ORDER BY v.last_seen DESC LIMIT ?4");
                let mut stmt = self.conn.prepare(&query)?;
                let rows = stmt
                    .query_map(
                        params![company, role_family, ts_to_sql(cutoff), limit as i64],
                        map_row,
                    )?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let query = format!("{base_query} ORDER BY v.last_seen DESC LIMIT ?3");
                let mut stmt = self.conn.prepare(&query)?;
                let rows = stmt
                    .query_map(params![company, role_family, limit as i64], map_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };

        Ok(rows)
    }

    /// Job listing for the CLI: current title, version count, last seen.
    pub fn list_jobs(&self, company: Option<&str>, limit: usize) -> Result<Vec<JobSummary>> {
        let base_query = "SELECT j.job_id, j.company, j.role_family, v.title, v.location,
                                 v.last_seen,
                                 (SELECT COUNT(*) FROM job_versions jv WHERE jv.job_id = j.job_id) as version_count
                          FROM jobs j
                          JOIN job_versions v ON v.version_id = j.current_version_id";

        let map_row = |row: &rusqlite::Row| -> rusqlite::Result<JobSummary> {
            Ok(JobSummary {
                job_id: row.get(0)?,
                company: row.get(1)?,
                role_family: row.get(2)?,
                title: row.get(3)?,
                location: row.get(4)?,
                last_seen: ts_from_sql(5, row.get(5)?)?,
                version_count: row.get(6)?,
            })
        };

        let rows: Vec<JobSummary> = match company {
            Some(c) => {
                let query =
                    format!("{base_query} WHERE j.company = ?1 ORDER BY v.last_seen DESC LIMIT ?2");
                let mut stmt = self.conn.prepare(&query)?;
                let rows = stmt
                    .query_map(params![c, limit as i64], map_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
            None => {
                let query = format!("{base_query} ORDER BY v.last_seen DESC LIMIT ?1");
                let mut stmt = self.conn.prepare(&query)?;
                let rows = stmt
                    .query_map(params![limit as i64], map_row)?
                    .collect::<Result<Vec<_>, _>>()?;
                rows
            }
        };

        Ok(rows)
    }

    // ============================================
    // RESOLUTION AUDIT LOG
    // ============================================

    /// Append one decision. The audit log is insert-only; there is no update
    /// or delete path anywhere in the store.
    pub fn append_decision(&self, decision: &ResolutionDecision) -> Result<()> {
        let candidate_ids = serde_json::to_string(&decision.candidate_job_ids)?;
        self.conn.execute(
            "INSERT INTO resolution_decisions
             (decision_id, input_source, input_source_id, input_canonical_url,
              input_content_hash, candidate_job_ids, chosen_job_id, score,
              confidence_band, explanation, decided_at, resolver_version)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
            params![
                decision.decision_id,
                decision.input_source.as_str(),
                decision.input_source_id,
                decision.input_canonical_url,
                decision.input_content_hash,
                candidate_ids,
                decision.chosen_job_id,
                decision.score,
                decision.confidence_band.as_str(),
                decision.explanation,
                ts_to_sql(&decision.decided_at),
                decision.resolver_version,
            ],
        )?;
        Ok(())
    }

    /// Audit queries: by chosen job, confidence band, and decided_at range,
    /// newest first.
    pub fn decisions(&self, filter: &DecisionFilter) -> Result<Vec<ResolutionDecision>> {
        let mut query = String::from(
            "SELECT decision_id, input_source, input_source_id, input_canonical_url,
                    input_content_hash, candidate_job_ids, chosen_job_id, score,
                    confidence_band, explanation, decided_at, resolver_version
             FROM resolution_decisions",
        );

        let mut clauses: Vec<&str> = Vec::new();
        let mut bound: Vec<String> = Vec::new();
        if let Some(ref job_id) = filter.job_id {
            clauses.push("chosen_job_id = ?");
            bound.push(job_id.clone());
        }
        if let Some(band) = filter.band {
            clauses.push("confidence_band = ?");
            bound.push(band.as_str().to_string());
        }
        if let Some(ref since) = filter.since {
            clauses.push("decided_at >= ?");
            bound.push(ts_to_sql(since));
        }
        if let Some(ref until) = filter.until {
            clauses.push("decided_at <= ?");
            bound.push(ts_to_sql(until));
        }
        if !clauses.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&clauses.join(" AND "));
        }
        query.push_str(&format!(" ORDER BY decided_at DESC LIMIT {}", filter.limit));

        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map(params_from_iter(bound.iter()), decision_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ============================================
    // REPOST ANALYSES
    // ============================================

    pub fn insert_analysis(&self, analysis: &RepostAnalysis) -> Result<()> {
        self.conn.execute(
            "INSERT INTO repost_analyses
             (job_id, version_id, classification, confidence, explanation,
              compared_against_version_id, analyzed_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                analysis.job_id,
                analysis.version_id,
                analysis.classification.as_str(),
                analysis.confidence,
                analysis.explanation,
                analysis.compared_against_version_id,
                ts_to_sql(&analysis.analyzed_at),
            ],
        )?;
        Ok(())
    }

    pub fn analyses_for_job(&self, job_id: &str) -> Result<Vec<RepostAnalysis>> {
        let mut stmt = self.conn.prepare(
            "SELECT job_id, version_id, classification, confidence, explanation,
                    compared_against_version_id, analyzed_at
             FROM repost_analyses
             WHERE job_id = ?
             ORDER BY analyzed_at",
        )?;

        let rows = stmt.query_map(params![job_id], analysis_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn analysis_for_version(&self, version_id: &str) -> Result<Option<RepostAnalysis>> {
        let result = self.conn.query_row(
            "SELECT job_id, version_id, classification, confidence, explanation,
                    compared_against_version_id, analyzed_at
             FROM repost_analyses
             WHERE version_id = ?",
            params![version_id],
            analysis_from_row,
        );

        match result {
            Ok(a) => Ok(Some(a)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // ============================================
    // MAINTENANCE
    // ============================================

    /// Jobs whose current version has not been seen since `cutoff`.
    pub fn count_stale(&self, cutoff: &DateTime<Utc>) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM jobs j
             JOIN job_versions v ON v.version_id = j.current_version_id
             WHERE v.last_seen < ?",
            params![ts_to_sql(cutoff)],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// Delete stale jobs, cascading their versions and analyses. Resolution
    /// decisions are kept: they are audit history, not owned state.
    pub fn prune_stale(&mut self, cutoff: &DateTime<Utc>) -> Result<PruneSummary> {
        let tx = self.conn.transaction()?;

        let stale: Vec<String> = {
            let mut stmt = tx.prepare(
                "SELECT j.job_id FROM jobs j
                 JOIN job_versions v ON v.version_id = j.current_version_id
                 WHERE v.last_seen < ?",
            )?;
            let rows = stmt.query_map(params![ts_to_sql(cutoff)], |row| row.get(0))?;
            rows.collect::<Result<Vec<_>, _>>()?
        };

        let mut versions_deleted = 0usize;
        let mut analyses_deleted = 0usize;
        for job_id in &stale {
            analyses_deleted +=
                tx.execute("DELETE FROM repost_analyses WHERE job_id = ?", params![job_id])?;
            versions_deleted +=
                tx.execute("DELETE FROM job_versions WHERE job_id = ?", params![job_id])?;
            tx.execute("DELETE FROM jobs WHERE job_id = ?", params![job_id])?;
        }

        let remaining: i64 = tx.query_row("SELECT COUNT(*) FROM jobs", [], |row| row.get(0))?;
        tx.commit()?;

        Ok(PruneSummary {
            jobs_deleted: stale.len(),
            versions_deleted,
            analyses_deleted,
            jobs_remaining: remaining,
        })
    }

    pub fn stats(&self) -> Result<StoreStats> {
        let count = |sql: &str| -> Result<i64> {
            self.conn
                .query_row(sql, [], |row| row.get(0))
                .map_err(Into::into)
        };

        let jobs = count("SELECT COUNT(*) FROM jobs")?;
        let versions = count("SELECT COUNT(*) FROM job_versions")?;
        let decisions = count("SELECT COUNT(*) FROM resolution_decisions")?;
        let analyses = count("SELECT COUNT(*) FROM repost_analyses")?;

        let group = |sql: &str| -> Result<Vec<(String, i64)>> {
            let mut stmt = self.conn.prepare(sql)?;
            let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
            rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
        };

        let decisions_by_band = group(
            "SELECT confidence_band, COUNT(*) FROM resolution_decisions
             GROUP BY confidence_band ORDER BY COUNT(*) DESC",
        )?;
        let analyses_by_classification = group(
            "SELECT classification, COUNT(*) FROM repost_analyses
             GROUP BY classification ORDER BY COUNT(*) DESC",
        )?;
        let top_companies = group(
            "SELECT company, COUNT(*) FROM jobs
             GROUP BY company ORDER BY COUNT(*) DESC LIMIT 10",
        )?;

        Ok(StoreStats {
            jobs,
            versions,
            decisions,
            analyses,
            decisions_by_band,
            analyses_by_classification,
            top_companies,
        })
    }
}

fn insert_version(tx: &rusqlite::Transaction, version: &JobVersion) -> rusqlite::Result<()> {
    tx.execute(
        "INSERT INTO job_versions
         (version_id, job_id, source, source_id, canonical_url, title, location,
          team, seniority, description_text, content_hash, first_seen, last_seen, ingested_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        params![
            version.version_id,
            version.job_id,
            version.source.as_str(),
            version.source_id,
            version.canonical_url,
            version.title,
            version.location,
            version.team,
            version.seniority,
            version.description_text,
            version.content_hash,
            ts_to_sql(&version.first_seen),
            ts_to_sql(&version.last_seen),
            ts_to_sql(&version.ingested_at),
        ],
    )?;
    Ok(())
}

// ============================================
// ROW MAPPING
// ============================================

const VERSION_COLUMNS: &str = "version_id, job_id, source, source_id, canonical_url, title, \
                               location, team, seniority, description_text, content_hash, \
                               first_seen, last_seen, ingested_at";

fn version_columns(alias: &str) -> String {
    VERSION_COLUMNS
        .split(", ")
        .map(|c| format!("{alias}.{c}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn job_from_row(row: &rusqlite::Row, base: usize) -> rusqlite::Result<Job> {
    Ok(Job {
        job_id: row.get(base)?,
        company: row.get(base + 1)?,
        role_family: row.get(base + 2)?,
        created_at: ts_from_sql(base + 3, row.get(base + 3)?)?,
        current_version_id: row.get(base + 4)?,
    })
}

fn version_from_row(row: &rusqlite::Row, base: usize) -> rusqlite::Result<JobVersion> {
    Ok(JobVersion {
        version_id: row.get(base)?,
        job_id: row.get(base + 1)?,
        source: Source::from(row.get::<_, String>(base + 2)?),
        source_id: row.get(base + 3)?,
        canonical_url: row.get(base + 4)?,
        title: row.get(base + 5)?,
        location: row.get(base + 6)?,
        team: row.get(base + 7)?,
        seniority: row.get(base + 8)?,
        description_text: row.get(base + 9)?,
        content_hash: row.get(base + 10)?,
        first_seen: ts_from_sql(base + 11, row.get(base + 11)?)?,
        last_seen: ts_from_sql(base + 12, row.get(base + 12)?)?,
        ingested_at: ts_from_sql(base + 13, row.get(base + 13)?)?,
    })
}

fn decision_from_row(row: &rusqlite::Row) -> rusqlite::Result<ResolutionDecision> {
    let candidate_raw: String = row.get(5)?;
    let candidate_job_ids: Vec<String> = serde_json::from_str(&candidate_raw).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let band_raw: String = row.get(8)?;
    let confidence_band = ConfidenceBand::parse(&band_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            8,
            rusqlite::types::Type::Text,
            format!("unknown confidence band: {band_raw}").into(),
        )
    })?;

    Ok(ResolutionDecision {
        decision_id: row.get(0)?,
        input_source: Source::from(row.get::<_, String>(1)?),
        input_source_id: row.get(2)?,
        input_canonical_url: row.get(3)?,
        input_content_hash: row.get(4)?,
        candidate_job_ids,
        chosen_job_id: row.get(6)?,
        score: row.get(7)?,
        confidence_band,
        explanation: row.get(9)?,
        decided_at: ts_from_sql(10, row.get(10)?)?,
        resolver_version: row.get(11)?,
    })
}

fn analysis_from_row(row: &rusqlite::Row) -> rusqlite::Result<RepostAnalysis> {
    let class_raw: String = row.get(2)?;
    let classification = Classification::parse(&class_raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            rusqlite::types::Type::Text,
            format!("unknown classification: {class_raw}").into(),
        )
    })?;

    Ok(RepostAnalysis {
        job_id: row.get(0)?,
        version_id: row.get(1)?,
        classification,
        confidence: row.get(3)?,
        explanation: row.get(4)?,
        compared_against_version_id: row.get(5)?,
        analyzed_at: ts_from_sql(6, row.get(6)?)?,
    })
}

// ============================================
// RECORD TYPES
// ============================================

/// A long-lived real-world role. Descriptive state lives in versions.
#[derive(Debug, Clone)]
pub struct Job {
    pub job_id: String,
    pub company: String,
    pub role_family: String,
    pub created_at: DateTime<Utc>,
    pub current_version_id: String,
}

/// One immutable observed state of a job.
#[derive(Debug, Clone)]
pub struct JobVersion {
    pub version_id: String,
    pub job_id: String,
    pub source: Source,
    pub source_id: Option<String>,
    pub canonical_url: String,
    pub title: String,
    pub location: String,
    pub team: Option<String>,
    pub seniority: Option<String>,
    pub description_text: String,
    pub content_hash: String,
    pub first_seen: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub ingested_at: DateTime<Utc>,
}

/// Audit record of one resolution, append-only.
#[derive(Debug, Clone)]
pub struct ResolutionDecision {
    pub decision_id: String,
    pub input_source: Source,
    pub input_source_id: Option<String>,
    pub input_canonical_url: String,
    pub input_content_hash: String,
    pub candidate_job_ids: Vec<String>,
    pub chosen_job_id: Option<String>,
    pub score: f64,
    pub confidence_band: ConfidenceBand,
    pub explanation: String,
    pub decided_at: DateTime<Utc>,
    pub resolver_version: String,
}

/// Repost/edit classification of one created version.
#[derive(Debug, Clone)]
pub struct RepostAnalysis {
    pub job_id: String,
    pub version_id: String,
    pub classification: Classification,
    pub confidence: f64,
    pub explanation: String,
    pub compared_against_version_id: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}

/// A job paired with its current version, as returned by candidate queries.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub job: Job,
    pub current: JobVersion,
}

#[derive(Debug, Clone, Default)]
pub struct DecisionFilter {
    pub job_id: Option<String>,
    pub band: Option<ConfidenceBand>,
    pub since: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
    pub limit: usize,
}

#[derive(Debug)]
pub struct JobSummary {
    pub job_id: String,
    pub company: String,
    pub role_family: String,
    pub title: String,
    pub location: String,
    pub last_seen: DateTime<Utc>,
    pub version_count: i64,
}

#[derive(Debug)]
pub struct PruneSummary {
    pub jobs_deleted: usize,
    pub versions_deleted: usize,
    pub analyses_deleted: usize,
    pub jobs_remaining: i64,
}

#[derive(Debug)]
pub struct StoreStats {
    pub jobs: i64,
    pub versions: i64,
    pub decisions: i64,
    pub analyses: i64,
    pub decisions_by_band: Vec<(String, i64)>,
    pub analyses_by_classification: Vec<(String, i64)>,
    pub top_companies: Vec<(String, i64)>,
}
