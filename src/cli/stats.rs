//! Stats command implementation

use anyhow::Result;

use crate::store::JobStore;

pub fn run(store: &JobStore) -> Result<()> {
    let stats = store.stats()?;

    println!("{:<12} {}", "Jobs", stats.jobs);
    println!("{:<12} {}", "Versions", stats.versions);
    println!("{:<12} {}", "Decisions", stats.decisions);
    println!("{:<12} {}", "Analyses", stats.analyses);

    if !stats.decisions_by_band.is_empty() {
        println!("\nDecisions by confidence band:");
        for (band, count) in &stats.decisions_by_band {
            println!("  {:<12} {}", band, count);
        }
    }

    if !stats.analyses_by_classification.is_empty() {
        println!("\nAnalyses by classification:");
        for (class, count) in &stats.analyses_by_classification {
            println!("  {:<12} {}", class, count);
        }
    }

    if !stats.top_companies.is_empty() {
        println!("\nTop companies:");
        for (company, count) in &stats.top_companies {
            println!("  {:<24} {}", company, count);
        }
    }

    Ok(())
}
