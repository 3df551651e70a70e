//! List command implementation

use anyhow::Result;

use crate::store::JobStore;

pub fn run(store: &JobStore, company: Option<String>, limit: usize) -> Result<()> {
    let jobs = store.list_jobs(company.as_deref(), limit)?;

    if jobs.is_empty() {
        println!("No jobs found. Run 'jobtrail ingest' first.");
        return Ok(());
    }

    println!(
        "{:<10} {:<20} {:<24} {:<30} {:<9} {}",
        "ID", "Company", "Role Family", "Current Title", "Versions", "Last Seen"
    );
    println!("{}", "-".repeat(110));

    for job in jobs {
        println!(
            "{:<10} {:<20} {:<24} {:<30} {:<9} {}",
            &job.job_id[..8.min(job.job_id.len())],
            truncate(&job.company, 18),
            truncate(&job.role_family, 22),
            truncate(&job.title, 28),
            job.version_count,
            job.last_seen.format("%Y-%m-%d %H:%M"),
        );
    }

    Ok(())
}

// Counts chars, not bytes, so multibyte names never split mid-character
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let cut: String = s.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        s.to_string()
    }
}
