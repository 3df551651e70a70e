//! Semantic similarity provider seam
//!
//! Embedding generation happens outside this core. The resolver only needs a
//! pairwise similarity callback, and it must keep working when none is
//! wired up, so absence is part of the contract: `None` means "no embedding
//! available", which the scorer treats as its configured neutral default,
//! never as zero.

pub trait SemanticSimilarity: Send + Sync {
    /// Similarity of two description texts in [0.0, 1.0], or None when no
    /// embedding is available for either side.
    fn similarity(&self, text_a: &str, text_b: &str) -> Option<f64>;
}

/// Default provider: no embeddings, every pair is absent.
pub struct NoSemantic;

impl SemanticSimilarity for NoSemantic {
    fn similarity(&self, _text_a: &str, _text_b: &str) -> Option<f64> {
        None
    }
}
