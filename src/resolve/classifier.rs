//! Repost/edit classification of created versions
//!
//! Runs once per newly created version, comparing its description against
//! the version that was current before the write. Identity is settled by the
//! time this runs: even a near-total rewrite stays an edit of the same job,
//! it is never reclassified as a different one.
//!
//! Edit confidence is calibrated as 1 - |similarity - band midpoint| /
//! band half-width over the configured [edit_floor, repost_threshold) band,
//! floored at `low_confidence`, so ordinary mid-band edits score high and
//! boundary cases stay visibly uncertain. Sub-floor similarity uses the
//! `low_confidence` floor directly.

use chrono::Utc;

use crate::config::RepostConfig;
use crate::store::{JobVersion, RepostAnalysis};

use super::features::description_similarity;
use super::Classification;

/// Band a similarity value into a classification and confidence. Pure, so
/// the threshold boundaries can be tested exactly.
pub fn classify_similarity(similarity: f64, cfg: &RepostConfig) -> (Classification, f64) {
    if similarity >= cfg.repost_threshold {
        return (Classification::Repost, similarity);
    }
    if similarity < cfg.edit_floor {
        return (Classification::Edit, cfg.low_confidence);
    }
    let midpoint = (cfg.edit_floor + cfg.repost_threshold) / 2.0;
    let half_width = (cfg.repost_threshold - cfg.edit_floor) / 2.0;
    let confidence = 1.0 - (similarity - midpoint).abs() / half_width;
    (Classification::Edit, confidence.max(cfg.low_confidence))
}

/// Classify a created version against the prior current version, or as NEW
/// when it is the job's first.
pub fn classify(
    version: &JobVersion,
    prior: Option<&JobVersion>,
    cfg: &RepostConfig,
) -> RepostAnalysis {
    let (classification, confidence, explanation, baseline) = match prior {
        None => (
            Classification::New,
            1.0,
            format!("first observed version for job {}", version.job_id),
            None,
        ),
        Some(prior) => {
            let similarity =
                description_similarity(&version.description_text, &prior.description_text);
            let (classification, confidence) = classify_similarity(similarity, cfg);
            let label = match classification {
                Classification::Repost => "repost of",
                _ => "edit vs",
            };
            (
                classification,
                confidence,
                format!(
                    "{label} baseline version {}: description similarity {similarity:.3}",
                    prior.version_id
                ),
                Some(prior.version_id.clone()),
            )
        }
    };

    RepostAnalysis {
        job_id: version.job_id.clone(),
        version_id: version.version_id.clone(),
        classification,
        confidence,
        explanation,
        compared_against_version_id: baseline,
        analyzed_at: Utc::now(),
    }
}
