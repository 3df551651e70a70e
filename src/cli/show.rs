//! Show command implementation

use anyhow::Result;

use crate::store::JobStore;

pub fn run(store: &JobStore, job_query: &str) -> Result<()> {
    let job = match store.find_job(job_query)? {
        Some(job) => job,
        None => {
            println!("Job '{}' not found.", job_query);
            return Ok(());
        }
    };

    println!("\n{}", "=".repeat(80));
    println!("Job: {}", job.job_id);
    println!("Company: {} | Role family: {}", job.company, job.role_family);
    println!(
        "Created: {} | Current version: {}",
        job.created_at.format("%Y-%m-%d %H:%M"),
        &job.current_version_id[..8.min(job.current_version_id.len())],
    );
    println!("{}", "=".repeat(80));

    let versions = store.versions_for_job(&job.job_id)?;
    for version in versions {
        let current_marker = if version.version_id == job.current_version_id {
            " (current)"
        } else {
            ""
        };
        println!(
            "\n[{}]{current_marker} {} {}",
            &version.version_id[..8.min(version.version_id.len())],
            version.source,
            version.canonical_url,
        );
        println!(
            "  title: {} | location: {}",
            version.title,
            if version.location.is_empty() { "-" } else { &version.location },
        );
        println!(
            "  first seen: {} | last seen: {}",
            version.first_seen.format("%Y-%m-%d %H:%M"),
            version.last_seen.format("%Y-%m-%d %H:%M"),
        );

        match store.analysis_for_version(&version.version_id)? {
            Some(analysis) => println!(
                "  classification: {} ({:.2}): {}",
                analysis.classification.as_str(),
                analysis.confidence,
                analysis.explanation,
            ),
            None => println!("  classification: -"),
        }
    }

    Ok(())
}
