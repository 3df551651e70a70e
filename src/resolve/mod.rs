//! Entity resolution: candidate selection, signal matching, scoring, and
//! repost classification
//!
//! The submodules keep strict responsibility boundaries:
//! - `selector` narrows the job universe to one partition, no scoring
//! - `features` computes per-candidate signals, no weighting or thresholds
//! - `scorer` turns signals into one decision, no storage access
//! - `classifier` labels created versions repost/edit, never touches identity
//!
//! Everything here is deterministic: identical inputs produce identical
//! scores, decisions, and explanations.

pub mod classifier;
pub mod features;
pub mod scorer;
pub mod selector;

pub use classifier::{classify, classify_similarity};
pub use features::compute_signals;
pub use scorer::decide;
pub use selector::{select, CandidateSet};

/// Confidence attached to a resolution decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
    Ambiguous,
}

impl ConfidenceBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceBand::High => "high",
            ConfidenceBand::Medium => "medium",
            ConfidenceBand::Low => "low",
            ConfidenceBand::Ambiguous => "ambiguous",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(ConfidenceBand::High),
            "medium" => Some(ConfidenceBand::Medium),
            "low" => Some(ConfidenceBand::Low),
            "ambiguous" => Some(ConfidenceBand::Ambiguous),
            _ => None,
        }
    }
}

/// Repost/freshness label for a created version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    New,
    Repost,
    Edit,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::New => "new",
            Classification::Repost => "repost",
            Classification::Edit => "edit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "new" => Some(Classification::New),
            "repost" => Some(Classification::Repost),
            "edit" => Some(Classification::Edit),
            _ => None,
        }
    }
}

/// Raised when both sides carry a non-empty value that differs. A missing
/// value on either side never raises a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictFlag {
    TeamMismatch,
    SeniorityMismatch,
    LocationMismatch,
}

impl ConflictFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConflictFlag::TeamMismatch => "team_mismatch",
            ConflictFlag::SeniorityMismatch => "seniority_mismatch",
            ConflictFlag::LocationMismatch => "location_mismatch",
        }
    }
}

/// Per-candidate match signals, computed by `features`, consumed by
/// `scorer`.
#[derive(Debug, Clone)]
pub struct MatchSignals {
    pub job_id: String,
    /// Same source + source_id, or identical canonical URL.
    pub hard_id_match: bool,
    /// Which identifier matched, for the explanation string.
    pub hard_id_basis: Option<String>,
    pub title_location_similarity: f64,
    /// None when no embedding is available; the scorer substitutes its
    /// neutral default rather than treating absence as zero.
    pub semantic_similarity: Option<f64>,
    pub conflict_flags: Vec<ConflictFlag>,
}

/// Operational outcome of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NewJob,
    MatchExisting(String),
}

/// One scored, banded, explained resolution decision.
#[derive(Debug, Clone)]
pub struct Verdict {
    pub resolution: Resolution,
    pub score: f64,
    pub band: ConfidenceBand,
    pub explanation: String,
    /// Candidate job ids in the order they were considered.
    pub considered: Vec<String>,
}

impl Verdict {
    pub fn chosen_job_id(&self) -> Option<&str> {
        match &self.resolution {
            Resolution::MatchExisting(job_id) => Some(job_id),
            Resolution::NewJob => None,
        }
    }
}
