pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod normalize;
pub mod page;
pub mod partition;
pub mod resolve;
pub mod semantic;
pub mod store;

pub use config::Config;
pub use error::IngestError;
pub use ingest::{IngestEffect, IngestOutcome, IngestPipeline};
pub use page::{NormalizedPage, RawPage, Source};
pub use store::JobStore;
