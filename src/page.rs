//! Normalized page intake
//!
//! A page is one observed posting, already field-extracted by the external
//! collaborator. Intake re-normalizes every field, validates the required
//! ones, and computes the content hash, producing the `NormalizedPage` the
//! resolution pipeline works with.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

use crate::error::IngestError;
use crate::normalize;

/// ATS platform a page was fetched from. Unknown platforms are carried
/// through as-is rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Source {
    Greenhouse,
    Lever,
    Ashby,
    Workable,
    Other(String),
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Source::Greenhouse => "greenhouse",
            Source::Lever => "lever",
            Source::Ashby => "ashby",
            Source::Workable => "workable",
            Source::Other(s) => s,
        }
    }
}

impl From<String> for Source {
    fn from(s: String) -> Self {
        match normalize::normalize_text(&s).as_str() {
            "greenhouse" => Source::Greenhouse,
            "lever" => Source::Lever,
            "ashby" => Source::Ashby,
            "workable" => Source::Workable,
            other => Source::Other(other.to_string()),
        }
    }
}

impl From<Source> for String {
    fn from(s: Source) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wire shape of a page as handed over by the collaborator. Everything is
/// optional at the serde level so that missing fields become validation
/// errors with useful messages instead of parse failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_id: Option<String>,
    #[serde(default)]
    pub canonical_url: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description_text: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub seniority: Option<String>,
    #[serde(default)]
    pub fetched_at: Option<DateTime<Utc>>,
}

/// One validated, fully normalized posting observation.
#[derive(Debug, Clone)]
pub struct NormalizedPage {
    pub source: Source,
    pub source_id: Option<String>,
    pub canonical_url: String,
    pub company: String,
    pub title: String,
    pub location: String,
    pub description_text: String,
    pub team: Option<String>,
    pub seniority: Option<String>,
    pub fetched_at: DateTime<Utc>,
    pub content_hash: String,
    pub role_family: String,
}

impl NormalizedPage {
    /// Normalize, validate, and hash a raw page. Fails with
    /// `MalformedInput` when company or title is empty after normalization,
    /// when source is missing, or when the canonical URL has no scheme/host.
    pub fn from_raw(raw: RawPage) -> Result<Self, IngestError> {
        let source_name = normalize::normalize_text(&raw.source);
        if source_name.is_empty() {
            return Err(IngestError::malformed("source is missing"));
        }

        let company = normalize::normalize_text(&raw.company);
        if company.is_empty() {
            return Err(IngestError::malformed("company is empty after normalization"));
        }

        let title = normalize::normalize_text(&raw.title);
        if title.is_empty() {
            return Err(IngestError::malformed("title is empty after normalization"));
        }

        let canonical_url = normalize::canonical_url(&raw.canonical_url);
        if !normalize::is_well_formed_url(&canonical_url) {
            return Err(IngestError::malformed(format!(
                "canonical_url is missing or not a valid URL: '{}'",
                raw.canonical_url
            )));
        }

        let description_text = normalize::normalize_text(&raw.description_text);
        let content_hash = content_hash(&description_text);
        let role_family = normalize::role_family(&title);

        let non_empty = |v: Option<String>| {
            v.map(|s| normalize::normalize_text(&s))
                .filter(|s| !s.is_empty())
        };

        Ok(NormalizedPage {
            source: Source::from(source_name),
            source_id: non_empty(raw.source_id),
            canonical_url,
            company,
            title,
            location: normalize::normalize_location(&raw.location),
            description_text,
            team: non_empty(raw.team),
            seniority: non_empty(raw.seniority),
            fetched_at: raw.fetched_at.unwrap_or_else(Utc::now),
            content_hash,
            role_family,
        })
    }

    /// Serialization key for the (company, role_family) partition this page
    /// resolves within.
    pub fn partition_key(&self) -> String {
        format!("{}|{}", self.company, self.role_family)
    }
}

/// SHA-256 hex digest of the normalized description text. Two observations
/// with equal hashes are the same content by definition.
pub fn content_hash(description_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(description_text.as_bytes());
    hex::encode(hasher.finalize())
}
