use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobtrail::cli::{backfill, decisions, ingest, list, prune, show, stats};
use jobtrail::config::Config;
use jobtrail::store::JobStore;

#[derive(Parser)]
#[command(name = "jobtrail")]
#[command(about = "Entity resolution and version history tracking for harvested job postings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "jobtrail.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest pages (JSON object or array) into the live database
    Ingest {
        /// Input file, or - for stdin
        #[arg(short, long)]
        input: String,
    },

    /// Replay pages into a fresh database generation
    Backfill {
        /// Input file, or - for stdin
        #[arg(short, long)]
        input: String,

        /// Fresh database file to create (must not exist)
        #[arg(short, long)]
        output: std::path::PathBuf,
    },

    /// List jobs
    List {
        /// Filter by normalized company
        #[arg(short, long)]
        company: Option<String>,

        /// Maximum rows
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },

    /// Show one job's version history
    Show {
        /// Job ID (full or unambiguous prefix)
        job_id: String,
    },

    /// Query the resolution audit log
    Decisions {
        /// Filter by chosen job (full id or prefix)
        #[arg(long)]
        job: Option<String>,

        /// Filter by confidence band (high|medium|low|ambiguous)
        #[arg(long)]
        band: Option<String>,

        /// Decided at or after this RFC 3339 timestamp
        #[arg(long)]
        since: Option<String>,

        /// Decided at or before this RFC 3339 timestamp
        #[arg(long)]
        until: Option<String>,

        /// Maximum rows
        #[arg(short, long, default_value_t = 50)]
        limit: usize,
    },

    /// Delete jobs not seen in N days (decisions are kept)
    Prune {
        /// Staleness threshold in days
        #[arg(long)]
        days: i64,

        /// Report what would be deleted without deleting
        #[arg(long)]
        dry_run: bool,
    },

    /// Show statistics
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config).unwrap_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    match cli.command {
        Commands::Ingest { input } => {
            ingest::run(&config, &input)?;
        }
        Commands::Backfill { input, output } => {
            backfill::run(&config, &input, &output)?;
        }
        Commands::List { company, limit } => {
            let store = JobStore::open(&config.database_path())?;
            list::run(&store, company, limit)?;
        }
        Commands::Show { job_id } => {
            let store = JobStore::open(&config.database_path())?;
            show::run(&store, &job_id)?;
        }
        Commands::Decisions {
            job,
            band,
            since,
            until,
            limit,
        } => {
            let store = JobStore::open(&config.database_path())?;
            decisions::run(&store, job, band, since, until, limit)?;
        }
        Commands::Prune { days, dry_run } => {
            let mut store = JobStore::open(&config.database_path())?;
            prune::run(&mut store, days, dry_run)?;
        }
        Commands::Stats => {
            let store = JobStore::open(&config.database_path())?;
            stats::run(&store)?;
        }
    }

    Ok(())
}
