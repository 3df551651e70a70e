//! Resolution scoring and decision
//!
//! Turns per-candidate match signals into exactly one verdict, evaluated in
//! strict order: hard identifiers first, then the weighted fuzzy score, then
//! the configured thresholds. Deterministic throughout; ties break toward
//! the more recently seen candidate, which is earlier in selector order.
//! The decision is conservative by construction: weak evidence yields a new
//! job (possibly flagged ambiguous), never a merge.

use tracing::warn;

use crate::config::ResolverConfig;
use crate::page::NormalizedPage;
use crate::store::Candidate;

use super::{ConfidenceBand, MatchSignals, Resolution, Verdict};
use super::selector::CandidateSet;

pub fn decide(
    page: &NormalizedPage,
    set: &CandidateSet,
    signals: &[MatchSignals],
    cfg: &ResolverConfig,
) -> Verdict {
    debug_assert_eq!(set.candidates.len(), signals.len());
    let considered: Vec<String> = signals.iter().map(|s| s.job_id.clone()).collect();

    // Rule 1: a hard identifier is ground truth when present.
    let hard: Vec<usize> = (0..signals.len())
        .filter(|&i| signals[i].hard_id_match)
        .collect();
    if let Some(&chosen) = hard.first() {
        let basis = signals[chosen]
            .hard_id_basis
            .as_deref()
            .unwrap_or("unknown identifier");
        let mut explanation = format!("hard_id_match on {basis}");
        if hard.len() > 1 {
            // Two jobs should never share a hard identifier; report and
            // proceed with the most recently seen one.
            warn!(
                company = %page.company,
                role_family = %page.role_family,
                matches = hard.len(),
                chosen_job = %signals[chosen].job_id,
                "integrity warning: multiple candidates share a hard identifier"
            );
            explanation.push_str(&format!(
                "; integrity warning: {} candidates share a hard identifier, \
                 chose the most recently seen",
                hard.len()
            ));
        }
        return Verdict {
            resolution: Resolution::MatchExisting(signals[chosen].job_id.clone()),
            score: 1.0,
            band: ConfidenceBand::High,
            explanation,
            considered,
        };
    }

    // No candidates: new job, with confidence reflecting why the set was
    // empty.
    if signals.is_empty() {
        return match set.insufficient_signal {
            Some(reason) => Verdict {
                resolution: Resolution::NewJob,
                score: 0.0,
                band: ConfidenceBand::Low,
                explanation: format!("{reason}; defaulting to new job"),
                considered,
            },
            None => Verdict {
                resolution: Resolution::NewJob,
                score: 0.0,
                band: ConfidenceBand::High,
                explanation: "no candidates in company/role-family partition".to_string(),
                considered,
            },
        };
    }

    // Rule 2: weighted fuzzy score, max wins, ties toward the more recent.
    let scored: Vec<f64> = signals
        .iter()
        .zip(&set.candidates)
        .map(|(s, c)| weighted_score(page, s, c, cfg))
        .collect();
    let mut best = 0;
    for (i, score) in scored.iter().enumerate() {
        if *score > scored[best] {
            best = i;
        }
    }
    let score = scored[best];
    let explanation = describe(&signals[best], score, cfg);

    // Rule 3: thresholds.
    let t = &cfg.thresholds;
    if score >= t.match_high {
        Verdict {
            resolution: Resolution::MatchExisting(signals[best].job_id.clone()),
            score,
            band: ConfidenceBand::High,
            explanation,
            considered,
        }
    } else if score >= t.match_medium {
        Verdict {
            resolution: Resolution::MatchExisting(signals[best].job_id.clone()),
            score,
            band: ConfidenceBand::Medium,
            explanation,
            considered,
        }
    } else if score >= t.ambiguous_floor {
        // Operationally a new job, but flagged for review: weak evidence
        // never auto-merges.
        Verdict {
            resolution: Resolution::NewJob,
            score,
            band: ConfidenceBand::Ambiguous,
            explanation: format!(
                "ambiguous: best candidate {} scored {score:.3}, between \
                 ambiguous floor {:.2} and match threshold {:.2}; {explanation}",
                signals[best].job_id, t.ambiguous_floor, t.match_medium
            ),
            considered,
        }
    } else {
        Verdict {
            resolution: Resolution::NewJob,
            score,
            band: ConfidenceBand::High,
            explanation: format!(
                "best candidate {} scored {score:.3}, below ambiguous floor {:.2}; {explanation}",
                signals[best].job_id, t.ambiguous_floor
            ),
            considered,
        }
    }
}

fn weighted_score(
    page: &NormalizedPage,
    signals: &MatchSignals,
    candidate: &Candidate,
    cfg: &ResolverConfig,
) -> f64 {
    let w = &cfg.weights;
    let semantic = signals.semantic_similarity.unwrap_or(cfg.semantic_neutral);
    w.title_location * signals.title_location_similarity
        + w.semantic * semantic
        + w.recency * recency_bonus(page, candidate, cfg)
        - w.conflict_penalty * signals.conflict_flags.len() as f64
}

/// exp(-age_days / tau), age clamped non-negative so a candidate seen after
/// this page was fetched counts as fully fresh.
fn recency_bonus(page: &NormalizedPage, candidate: &Candidate, cfg: &ResolverConfig) -> f64 {
    let age_secs = (page.fetched_at - candidate.current.last_seen)
        .num_seconds()
        .max(0) as f64;
    (-(age_secs / 86_400.0) / cfg.recency_tau_days).exp()
}

fn describe(signals: &MatchSignals, score: f64, cfg: &ResolverConfig) -> String {
    let semantic = match signals.semantic_similarity {
        Some(s) => format!("{s:.2}"),
        None => format!("absent (neutral {:.2})", cfg.semantic_neutral),
    };
    let conflicts = if signals.conflict_flags.is_empty() {
        "no conflicts".to_string()
    } else {
        let names: Vec<&str> = signals.conflict_flags.iter().map(|f| f.as_str()).collect();
        format!("conflicts: {}", names.join(", "))
    };
    format!(
        "title_location_similarity={:.2}, semantic={semantic}, {conflicts}, score={score:.3}",
        signals.title_location_similarity
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{RawPage, Source};
    use crate::store::{Job, JobVersion};
    use chrono::{DateTime, TimeZone, Utc};

    fn t0() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn page() -> NormalizedPage {
        NormalizedPage::from_raw(RawPage {
            source: "greenhouse".to_string(),
            canonical_url: "https://boards.greenhouse.io/acme/jobs/1".to_string(),
            company: "acme".to_string(),
            title: "Software Engineer".to_string(),
            fetched_at: Some(t0()),
            ..Default::default()
        })
        .unwrap()
    }

    fn candidate(job_id: &str, seen: DateTime<Utc>) -> Candidate {
        let version_id = format!("v-{job_id}");
        Candidate {
            job: Job {
                job_id: job_id.to_string(),
                company: "acme".to_string(),
                role_family: "software engineer".to_string(),
                created_at: seen,
                current_version_id: version_id.clone(),
            },
            current: JobVersion {
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
        }
    }

    fn signal(job_id: &str, tls: f64) -> MatchSignals {
        MatchSignals {
            job_id: job_id.to_string(),
            hard_id_match: false,
            hard_id_basis: None,
            title_location_similarity: tls,
            semantic_similarity: None,
            conflict_flags: vec![],
        }
    }

    fn set(candidates: Vec<Candidate>) -> CandidateSet {
        CandidateSet {
            candidates,
            insufficient_signal: None,
        }
    }

    fn cfg() -> ResolverConfig {
        ResolverConfig::default()
    }

    #[test]
    fn test_hard_id_beats_higher_fuzzy_score() {
        let candidates = set(vec![candidate("fuzzy", t0()), candidate("hard", t0())]);
        let mut hard = signal("hard", 0.1);
        hard.hard_id_match = true;
        hard.hard_id_basis = Some("source_id=greenhouse:123".to_string());
        let signals = vec![signal("fuzzy", 1.0), hard];

        let verdict = decide(&page(), &candidates, &signals, &cfg());
        assert_eq!(
            verdict.resolution,
            Resolution::MatchExisting("hard".to_string())
        );
        assert_eq!(verdict.band, ConfidenceBand::High);
        assert_eq!(verdict.score, 1.0);
        assert!(verdict.explanation.contains("hard_id_match on source_id=greenhouse:123"));
        assert_eq!(verdict.considered, vec!["fuzzy", "hard"]);
    }

    #[test]
    fn test_multiple_hard_ids_warn_and_pick_most_recent() {
        let candidates = set(vec![candidate("recent", t0()), candidate("older", t0())]);
        let mk = |id: &str| {
            let mut s = signal(id, 0.5);
            s.hard_id_match = true;
            s.hard_id_basis = Some("canonical_url=https://x.example/1".to_string());
            s
        };
        let signals = vec![mk("recent"), mk("older")];

        let verdict = decide(&page(), &candidates, &signals, &cfg());
        assert_eq!(
            verdict.resolution,
            Resolution::MatchExisting("recent".to_string())
        );
        assert!(verdict.explanation.contains("integrity warning"));
    }

    #[test]
    fn test_threshold_bands() {
        // Fresh candidate: recency bonus 1.0, semantic neutral 0.5, so the
        // fuzzy score is 0.5*tls + 0.15 + 0.2.
        let run = |tls: f64| {
            let candidates = set(vec![candidate("j1", t0())]);
            decide(&page(), &candidates, &[signal("j1", tls)], &cfg())
        };

        let v = run(1.0); // 0.85
        assert_eq!(v.resolution, Resolution::MatchExisting("j1".to_string()));
        assert_eq!(v.band, ConfidenceBand::High);

        let v = run(0.7); // 0.70
        assert_eq!(v.resolution, Resolution::MatchExisting("j1".to_string()));
        assert_eq!(v.band, ConfidenceBand::Medium);

        let v = run(0.2); // 0.45
        assert_eq!(v.resolution, Resolution::NewJob);
        assert_eq!(v.band, ConfidenceBand::Ambiguous);
        assert!(v.explanation.contains("ambiguous"));
        assert!(v.explanation.contains("j1"));
    }

    #[test]
    fn test_conflicts_push_below_floor() {
        let candidates = set(vec![candidate("j1", t0())]);
        let mut s = signal("j1", 0.2);
        s.conflict_flags = vec![super::super::ConflictFlag::LocationMismatch];
        // 0.45 - 0.25 = 0.20, below the 0.35 floor
        let verdict = decide(&page(), &candidates, &[s], &cfg());
        assert_eq!(verdict.resolution, Resolution::NewJob);
        assert_eq!(verdict.band, ConfidenceBand::High);
        assert!(verdict.explanation.contains("below ambiguous floor"));
        assert!(verdict.explanation.contains("location_mismatch"));
    }

    #[test]
    fn test_ties_break_toward_more_recent() {
        let candidates = set(vec![candidate("recent", t0()), candidate("older", t0())]);
        let signals = vec![signal("recent", 1.0), signal("older", 1.0)];
        let verdict = decide(&page(), &candidates, &signals, &cfg());
        assert_eq!(
            verdict.resolution,
            Resolution::MatchExisting("recent".to_string())
        );
    }

    #[test]
    fn test_stale_candidate_earns_less_recency() {
        let fresh = {
            let candidates = set(vec![candidate("j1", t0())]);
            decide(&page(), &candidates, &[signal("j1", 0.8)], &cfg()).score
        };
        let stale_seen = t0() - chrono::Duration::days(90);
        let stale = {
            let candidates = set(vec![candidate("j1", stale_seen)]);
            decide(&page(), &candidates, &[signal("j1", 0.8)], &cfg()).score
        };
        assert!(fresh > stale);
        // tau = 30 days, so 90 days of staleness keeps only exp(-3) of the bonus
        assert!((fresh - stale - 0.2 * (1.0 - (-3.0f64).exp())).abs() < 1e-9);
    }

    #[test]
    fn test_no_candidates_is_a_confident_new_job() {
        let verdict = decide(&page(), &set(vec![]), &[], &cfg());
        assert_eq!(verdict.resolution, Resolution::NewJob);
        assert_eq!(verdict.band, ConfidenceBand::High);
        assert!(verdict.considered.is_empty());
        assert!(!verdict.explanation.is_empty());
    }

    #[test]
    fn test_insufficient_signal_is_low_confidence() {
        let s = CandidateSet {
            candidates: vec![],
            insufficient_signal: Some("insufficient company signal"),
        };
        let verdict = decide(&page(), &s, &[], &cfg());
        assert_eq!(verdict.resolution, Resolution::NewJob);
        assert_eq!(verdict.band, ConfidenceBand::Low);
        assert!(verdict.explanation.contains("insufficient company signal"));
    }
}
