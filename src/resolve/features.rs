//! Feature extraction for entity resolution
//!
//! Computes the per-candidate signals the scorer weighs: hard identifier
//! matches, title/location similarity, optional semantic similarity, and
//! conflict flags. No weighting or thresholds here. Missing data is never
//! treated as a mismatch: absent locations drop out of the blend, absent
//! team/seniority raise no flags, absent embeddings stay absent.

use strsim::{jaro_winkler, sorensen_dice};

use crate::config::ResolverConfig;
use crate::page::NormalizedPage;
use crate::semantic::SemanticSimilarity;
use crate::store::JobVersion;

use super::{ConflictFlag, MatchSignals};

/// Edit-distance similarity of two normalized titles.
pub fn title_similarity(a: &str, b: &str) -> f64 {
    jaro_winkler(a, b)
}

/// Bigram-overlap similarity of two normalized description texts. Order
/// tolerant, which suits platform-specific rephrasings of the same posting.
pub fn description_similarity(a: &str, b: &str) -> f64 {
    sorensen_dice(a, b)
}

/// Compute match signals between an incoming page and one candidate job's
/// current version.
pub fn compute_signals(
    page: &NormalizedPage,
    version: &JobVersion,
    provider: &dyn SemanticSimilarity,
    cfg: &ResolverConfig,
) -> MatchSignals {
    let (hard_id_match, hard_id_basis) = hard_id(page, version);

    let semantic_similarity =
        if page.description_text.is_empty() || version.description_text.is_empty() {
            None
        } else {
            provider.similarity(&page.description_text, &version.description_text)
        };

    MatchSignals {
        job_id: version.job_id.clone(),
        hard_id_match,
        hard_id_basis,
        title_location_similarity: title_location(page, version, cfg.title_blend),
        semantic_similarity,
        conflict_flags: conflicts(page, version),
    }
}

/// Hard identifiers are unambiguous when present: same platform and
/// platform-local id, or the identical canonical URL.
fn hard_id(page: &NormalizedPage, version: &JobVersion) -> (bool, Option<String>) {
    if page.source == version.source {
        if let (Some(a), Some(b)) = (&page.source_id, &version.source_id) {
            if a == b {
                return (true, Some(format!("source_id={}:{}", page.source, a)));
            }
        }
    }
    if page.canonical_url == version.canonical_url {
        return (true, Some(format!("canonical_url={}", page.canonical_url)));
    }
    (false, None)
}

fn title_location(page: &NormalizedPage, version: &JobVersion, title_blend: f64) -> f64 {
    let title = title_similarity(&page.title, &version.title);
    if page.location.is_empty() || version.location.is_empty() {
        // Location unknown on a side: the blend degrades to title alone
        return title;
    }
    let location = if page.location == version.location { 1.0 } else { 0.0 };
    title_blend * title + (1.0 - title_blend) * location
}

fn conflicts(page: &NormalizedPage, version: &JobVersion) -> Vec<ConflictFlag> {
    let mut flags = Vec::new();
    if let (Some(a), Some(b)) = (&page.team, &version.team) {
        if a != b {
            flags.push(ConflictFlag::TeamMismatch);
        }
    }
    if let (Some(a), Some(b)) = (&page.seniority, &version.seniority) {
        if a != b {
            flags.push(ConflictFlag::SeniorityMismatch);
        }
    }
    if !page.location.is_empty() && !version.location.is_empty() && page.location != version.location
    {
        flags.push(ConflictFlag::LocationMismatch);
    }
    flags
}
