//! Deterministic field normalization applied at the intake boundary
//!
//! Pages arrive from an external normalization collaborator, but every rule
//! here is re-applied defensively so resolution invariants never depend on
//! collaborator discipline. All functions are idempotent.

/// Lowercase and collapse internal whitespace runs to single spaces.
pub fn normalize_text(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

const REMOTE_SYNS: &[&str] = &[
    "remote",
    "fully remote",
    "remote - us",
    "remote - usa",
    "work from home",
    "wfh",
    "anywhere",
];
const HYBRID_SYNS: &[&str] = &["hybrid", "flexible", "part-remote", "partial remote"];
const ONSITE_SYNS: &[&str] = &["onsite", "on-site", "on site", "in office", "office"];

/// Normalize a location string, folding common synonyms into the canonical
/// `remote` / `hybrid` / `onsite` buckets. Anything else is kept as its
/// normalized form.
pub fn normalize_location(location: &str) -> String {
    let loc = normalize_text(location);
    if REMOTE_SYNS.contains(&loc.as_str()) {
        return "remote".to_string();
    }
    if HYBRID_SYNS.contains(&loc.as_str()) {
        return "hybrid".to_string();
    }
    if ONSITE_SYNS.contains(&loc.as_str()) {
        return "onsite".to_string();
    }
    loc
}

/// Canonicalize a posting URL: drop the query string and fragment (source
/// trackers vary per fetch), strip any trailing slash, and lowercase the
/// scheme and host. Path case is preserved.
pub fn canonical_url(url: &str) -> String {
    let url = url.trim();
    let no_fragment = match url.find('#') {
        Some(i) => &url[..i],
        None => url,
    };
    let no_query = match no_fragment.find('?') {
        Some(i) => &no_fragment[..i],
        None => no_fragment,
    };
    let trimmed = no_query.trim_end_matches('/');

    match trimmed.find("://") {
        Some(idx) => {
            let scheme = trimmed[..idx].to_lowercase();
            let after = &trimmed[idx + 3..];
            let host_end = after.find('/').unwrap_or(after.len());
            let host = after[..host_end].to_lowercase();
            let path = &after[host_end..];
            format!("{}://{}{}", scheme, host, path)
        }
        None => trimmed.to_string(),
    }
}

/// True when the URL carries a non-empty scheme and host.
pub fn is_well_formed_url(url: &str) -> bool {
    match url.find("://") {
        Some(idx) if idx > 0 => {
            let after = &url[idx + 3..];
            let host_end = after.find('/').unwrap_or(after.len());
            !after[..host_end].is_empty()
        }
        _ => false,
    }
}

const SENIORITY_TOKENS: &[&str] = &[
    "senior",
    "sr",
    "jr",
    "junior",
    "staff",
    "principal",
    "lead",
    "intern",
    "associate",
    "entry",
    "mid",
    "level",
];

// Roman numerals and L4/E5-style grade markers
fn is_level_marker(token: &str) -> bool {
    matches!(token, "i" | "ii" | "iii" | "iv" | "v" | "vi")
        || (token.len() >= 2
            && matches!(token.as_bytes()[0], b'l' | b'e')
            && token[1..].chars().all(|c| c.is_ascii_digit()))
}

fn is_seniority_token(token: &str) -> bool {
    SENIORITY_TOKENS.contains(&token) || is_level_marker(token)
}

/// Derive the role-family grouping key from a title: normalize, then drop
/// seniority and level tokens. Falls back to the full normalized title when
/// stripping would leave nothing, so any non-empty title yields a non-empty
/// family.
pub fn role_family(title: &str) -> String {
    let normalized = normalize_text(title);
    let kept: Vec<&str> = normalized
        .split(' ')
        .map(|t| t.trim_matches(|c: char| matches!(c, '.' | ',' | '(' | ')' | '-' | '/')))
        .filter(|t| !t.is_empty() && !is_seniority_token(t))
        .collect();
    if kept.is_empty() {
        normalized
    } else {
        kept.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text_collapses_whitespace() {
        assert_eq!(normalize_text("  Senior   Software\tEngineer "), "senior software engineer");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_normalize_location_synonyms() {
        assert_eq!(normalize_location("Fully Remote"), "remote");
        assert_eq!(normalize_location("REMOTE - US"), "remote");
        assert_eq!(normalize_location("WFH"), "remote");
        assert_eq!(normalize_location("Hybrid"), "hybrid");
        assert_eq!(normalize_location("part-remote"), "hybrid");
        assert_eq!(normalize_location("On-Site"), "onsite");
        assert_eq!(normalize_location("in office"), "onsite");
        assert_eq!(normalize_location("New York, NY"), "new york, ny");
        assert_eq!(normalize_location(""), "");
    }

    #[test]
    fn test_canonical_url_strips_tracking() {
        assert_eq!(
            canonical_url("https://boards.greenhouse.io/acme/jobs/123?gh_src=abc123#apply"),
            "https://boards.greenhouse.io/acme/jobs/123"
        );
        assert_eq!(
            canonical_url("HTTPS://Jobs.Lever.CO/acme/456/"),
            "https://jobs.lever.co/acme/456"
        );
        // Path case survives, host case does not
        assert_eq!(
            canonical_url("https://Example.com/Jobs/SWE"),
            "https://example.com/Jobs/SWE"
        );
        // No scheme: keep what we were given, minus trailing slash
        assert_eq!(canonical_url("/acme/jobs/123/"), "/acme/jobs/123");
    }

    #[test]
    fn test_is_well_formed_url() {
        assert!(is_well_formed_url("https://example.com/jobs/1"));
        assert!(is_well_formed_url("https://example.com"));
        assert!(!is_well_formed_url("example.com/jobs/1"));
        assert!(!is_well_formed_url("://example.com"));
        assert!(!is_well_formed_url("https:///jobs/1"));
        assert!(!is_well_formed_url(""));
    }

    #[test]
    fn test_role_family_strips_seniority() {
        assert_eq!(role_family("Senior Software Engineer"), "software engineer");
        assert_eq!(role_family("Sr. Software Engineer II"), "software engineer");
        assert_eq!(role_family("Staff Engineer, Infrastructure"), "engineer infrastructure");
        assert_eq!(role_family("Engineering Lead"), "engineering");
        assert_eq!(role_family("Software Engineer L4"), "software engineer");
        assert_eq!(role_family("Data Scientist"), "data scientist");
    }

    #[test]
    fn test_role_family_falls_back_to_full_title() {
        // Stripping everything would leave no grouping key at all
        assert_eq!(role_family("Senior Staff"), "senior staff");
        assert_eq!(role_family("Lead"), "lead");
    }

    #[test]
    fn test_role_family_same_for_title_variants() {
        assert_eq!(
            role_family("Senior Software Engineer"),
            role_family("Software Engineer, Staff")
        );
    }
}
