//! SQLite schema definition
//!
//! Layout notes:
//! - jobs carry no descriptive state; everything observable lives in
//!   job_versions and the only mutable column anywhere is
//!   job_versions.last_seen
//! - resolution_decisions reference jobs by id only (weak reference) so the
//!   audit trail survives pruning
//! - timestamps are RFC 3339 UTC text with fixed microsecond precision, so
//!   lexicographic order equals time order

pub const SCHEMA: &str = r#"
-- ============================================
-- JOBS
-- ============================================

-- One row per resolved real-world role
CREATE TABLE IF NOT EXISTS jobs (
    job_id TEXT PRIMARY KEY,               -- UUID
    company TEXT NOT NULL,                 -- normalized
    role_family TEXT NOT NULL,             -- derived grouping key (normalized title minus seniority tokens)
    created_at TEXT NOT NULL,
    current_version_id TEXT NOT NULL       -- latest accepted version
);

-- ============================================
-- JOB VERSIONS
-- ============================================

-- Immutable observed states of a job, append-only
CREATE TABLE IF NOT EXISTS job_versions (
    version_id TEXT PRIMARY KEY,           -- UUID
    job_id TEXT NOT NULL,
    source TEXT NOT NULL,                  -- 'greenhouse', 'lever', 'ashby', 'workable', ...
    source_id TEXT,                        -- platform-local id, may be absent
    canonical_url TEXT NOT NULL,           -- query/fragment stripped
    title TEXT NOT NULL,
    location TEXT NOT NULL DEFAULT '',
    team TEXT,
    seniority TEXT,
    description_text TEXT NOT NULL DEFAULT '',
    content_hash TEXT NOT NULL,            -- sha256 of normalized description_text
    first_seen TEXT NOT NULL,              -- observation time this content first appeared
    last_seen TEXT NOT NULL,               -- bumped in place on re-observation, forward-only
    ingested_at TEXT NOT NULL,             -- wall-clock processing time
    FOREIGN KEY(job_id) REFERENCES jobs(job_id) ON DELETE CASCADE
);

-- ============================================
-- RESOLUTION AUDIT LOG
-- ============================================

-- Append-only; one row per processed page, never updated or cascaded
CREATE TABLE IF NOT EXISTS resolution_decisions (
    decision_id TEXT PRIMARY KEY,          -- UUID
    input_source TEXT NOT NULL,
    input_source_id TEXT,
    input_canonical_url TEXT NOT NULL,
    input_content_hash TEXT NOT NULL,
    candidate_job_ids TEXT NOT NULL DEFAULT '[]',  -- JSON array, in considered order
    chosen_job_id TEXT,                    -- NULL = new job
    score REAL NOT NULL,
    confidence_band TEXT NOT NULL,         -- 'high', 'medium', 'low', 'ambiguous'
    explanation TEXT NOT NULL,
    decided_at TEXT NOT NULL,
    resolver_version TEXT NOT NULL         -- rule-set tag that produced this decision
);

-- ============================================
-- REPOST ANALYSES
-- ============================================

-- One classification per created version; derived and recomputable
CREATE TABLE IF NOT EXISTS repost_analyses (
    job_id TEXT NOT NULL,
    version_id TEXT NOT NULL,
    classification TEXT NOT NULL,          -- 'new', 'repost', 'edit'
    confidence REAL NOT NULL,              -- 0.0 to 1.0
    explanation TEXT NOT NULL,
    compared_against_version_id TEXT,      -- baseline version, NULL for 'new'
    analyzed_at TEXT NOT NULL,
    PRIMARY KEY (job_id, version_id)
);

-- ============================================
-- INDEXES
-- ============================================

-- Candidate selection scans one (company, role_family) partition
CREATE INDEX IF NOT EXISTS idx_jobs_partition ON jobs(company, role_family);

-- Version history indexes
CREATE INDEX IF NOT EXISTS idx_versions_job ON job_versions(job_id, first_seen);
CREATE INDEX IF NOT EXISTS idx_versions_last_seen ON job_versions(last_seen DESC);

-- Audit query indexes
CREATE INDEX IF NOT EXISTS idx_decisions_chosen ON resolution_decisions(chosen_job_id);
CREATE INDEX IF NOT EXISTS idx_decisions_decided ON resolution_decisions(decided_at DESC);
CREATE INDEX IF NOT EXISTS idx_decisions_band ON resolution_decisions(confidence_band);

-- Repost analysis indexes
CREATE INDEX IF NOT EXISTS idx_analyses_job ON repost_analyses(job_id);
"#;
