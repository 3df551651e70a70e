//! Configuration management with YAML support

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub repost: RepostConfig,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

/// Resolution scoring configuration.
///
/// Weights and thresholds are deliberately configuration rather than code so
/// they can be tuned offline against a labeled evaluation set. The `version`
/// tag is stamped onto every stored decision, keeping old decisions
/// attributable to the rule set that produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_resolver_version")]
    pub version: String,

    /// Upper bound on candidates considered per page, most recent first.
    #[serde(default = "default_candidate_limit")]
    pub candidate_limit: usize,

    /// Optional hard cutoff: jobs not seen within this many days are not
    /// candidates at all. None means no cutoff; staleness only lowers rank.
    #[serde(default)]
    pub recency_window_days: Option<i64>,

    /// Decay constant for the recency bonus, exp(-age_days / tau).
    #[serde(default = "default_recency_tau_days")]
    pub recency_tau_days: f64,

    /// Weight of title similarity within title_location_similarity; the
    /// remainder goes to location equality.
    #[serde(default = "default_title_blend")]
    pub title_blend: f64,

    /// Stand-in semantic similarity when no embedding provider is available.
    #[serde(default = "default_semantic_neutral")]
    pub semantic_neutral: f64,

    #[serde(default)]
    pub weights: ScoreWeights,

    #[serde(default)]
    pub thresholds: ScoreThresholds,
}

/// Weighted-sum coefficients for the fuzzy scoring path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    #[serde(default = "default_weight_title_location")]
    pub title_location: f64,

    #[serde(default = "default_weight_semantic")]
    pub semantic: f64,

    #[serde(default = "default_weight_recency")]
    pub recency: f64,

    /// Subtracted once per raised conflict flag.
    #[serde(default = "default_weight_conflict_penalty")]
    pub conflict_penalty: f64,
}

/// Score bands for the resolution decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreThresholds {
    #[serde(default = "default_match_high")]
    pub match_high: f64,

    #[serde(default = "default_match_medium")]
    pub match_medium: f64,

    #[serde(default = "default_ambiguous_floor")]
    pub ambiguous_floor: f64,
}

/// Repost/edit classification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepostConfig {
    /// Description similarity at or above this is a repost.
    #[serde(default = "default_repost_threshold")]
    pub repost_threshold: f64,

    /// Description similarity below this is still an edit, but at the fixed
    /// low-confidence floor; job identity is never revoked here.
    #[serde(default = "default_edit_floor")]
    pub edit_floor: f64,

    #[serde(default = "default_low_confidence")]
    pub low_confidence: f64,
}

// Default value functions
fn default_database_path() -> String {
    "~/.local/share/jobtrail/jobtrail.db".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_resolver_version() -> String {
    "v1".to_string()
}

fn default_candidate_limit() -> usize {
    25
}

fn default_recency_tau_days() -> f64 {
    30.0
}

fn default_title_blend() -> f64 {
    0.7
}

fn default_semantic_neutral() -> f64 {
    0.5
}

fn default_weight_title_location() -> f64 {
    0.5
}

fn default_weight_semantic() -> f64 {
    0.3
}

fn default_weight_recency() -> f64 {
    0.2
}

fn default_weight_conflict_penalty() -> f64 {
    0.25
}

fn default_match_high() -> f64 {
    0.80
}

fn default_match_medium() -> f64 {
    0.55
}

fn default_ambiguous_floor() -> f64 {
    0.35
}

fn default_repost_threshold() -> f64 {
    0.90
}

fn default_edit_floor() -> f64 {
    0.40
}

fn default_low_confidence() -> f64 {
    0.25
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            version: default_resolver_version(),
            candidate_limit: default_candidate_limit(),
            recency_window_days: None,
            recency_tau_days: default_recency_tau_days(),
            title_blend: default_title_blend(),
            semantic_neutral: default_semantic_neutral(),
            weights: ScoreWeights::default(),
            thresholds: ScoreThresholds::default(),
        }
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title_location: default_weight_title_location(),
            semantic: default_weight_semantic(),
            recency: default_weight_recency(),
            conflict_penalty: default_weight_conflict_penalty(),
        }
    }
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            match_high: default_match_high(),
            match_medium: default_match_medium(),
            ambiguous_floor: default_ambiguous_floor(),
        }
    }
}

impl Default for RepostConfig {
    fn default() -> Self {
        Self {
            repost_threshold: default_repost_threshold(),
            edit_floor: default_edit_floor(),
            low_confidence: default_low_confidence(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            resolver: ResolverConfig::default(),
            repost: RepostConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    /// Searches in order:
    /// 1. Provided path
    /// 2. ./jobtrail.yaml (current directory)
    /// 3. ~/.config/jobtrail/jobtrail.yaml
    pub fn load(path: &str) -> Result<Self> {
        let search_paths = vec![
            shellexpand::tilde(path).to_string(),
            "jobtrail.yaml".to_string(),
            shellexpand::tilde("~/.config/jobtrail/jobtrail.yaml").to_string(),
        ];

        for search_path in &search_paths {
            if std::path::Path::new(search_path).exists() {
                let content = std::fs::read_to_string(search_path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        // No config file found, use defaults
        Ok(Config::default())
    }

    /// Get the database path, expanding ~ to home directory
    pub fn database_path(&self) -> PathBuf {
        let expanded = shellexpand::tilde(&self.database.path).to_string();
        PathBuf::from(expanded)
    }
}
