//! Error taxonomy surfaced by the ingest pipeline
//!
//! Only the outcomes callers must tell apart get variants. Ambiguous
//! resolutions are not errors (they surface as a confidence band on the
//! decision) and integrity warnings are logged context, not failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// Required normalized fields are missing or empty. The page is rejected
    /// and logged; any retry is the ingestion collaborator's concern.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A previous holder of this partition's lock panicked mid-sequence.
    /// The caller must re-run the whole read-decide-write for the page, not
    /// re-apply a stale decision.
    #[error("partition contention on '{0}': retry the read-decide-write sequence")]
    PartitionContention(String),

    /// Storage and other fatal failures propagate unchanged.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IngestError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        IngestError::MalformedInput(msg.into())
    }
}
