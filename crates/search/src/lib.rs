//! OrbitLit Search
//!
//! Deterministic ranking over an in-memory publication catalog:
//! - Pairwise similarity for related-publication lists
//! - Query relevance for search
//! - Collection insights
//! - Category-templated summaries

pub mod insights;
pub mod ranking;
pub mod relevance;
pub mod similarity;
pub mod summary;

pub use insights::{aggregate, Insights};
pub use ranking::RankingEngine;
pub use relevance::{PreparedQuery, RelevanceBreakdown, RelevanceScorer};
pub use similarity::{SimilarityBreakdown, SimilarityScorer};
pub use summary::SummaryGenerator;
