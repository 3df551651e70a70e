//! Operator CLI: one module per subcommand

pub mod backfill;
pub mod decisions;
pub mod ingest;
pub mod list;
pub mod prune;
pub mod show;
pub mod stats;
