//! Pairwise publication similarity
//!
//! The score is a sum of independent signals: shared category, keyword
//! overlap, year proximity, and cross-reference. Every signal is symmetric,
//! so `score(a, b) == score(b, a)`.
//!
//! Year proximity is not clamped: records further apart than the horizon
//! pull the total below what the other signals contribute.

use orbitlit_common::config::SimilarityWeights;
use orbitlit_common::{Publication, RelationshipIndex};
use serde::Serialize;
use std::collections::HashSet;

/// Per-signal contributions to a similarity score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SimilarityBreakdown {
    pub category: f64,
    pub keywords: f64,
    pub year: f64,
    pub cross_reference: f64,
}

impl SimilarityBreakdown {
    pub fn total(&self) -> f64 {
        self.category + self.keywords + self.year + self.cross_reference
    }
}

/// Scores how alike two publications are
#[derive(Debug, Clone, Default)]
pub struct SimilarityScorer {
    weights: SimilarityWeights,
}

impl SimilarityScorer {
    pub fn new(weights: SimilarityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Similarity of two records, reading cross-references from the records
    pub fn score(&self, a: &Publication, b: &Publication) -> f64 {
        self.breakdown(a, b).total()
    }

    /// Similarity of two records, resolving cross-references through an index
    pub fn score_indexed(&self, a: &Publication, b: &Publication, index: &RelationshipIndex) -> f64 {
        self.signals(a, b, index.is_linked(a.id, b.id)).total()
    }

    /// Per-signal contributions, reading cross-references from the records
    pub fn breakdown(&self, a: &Publication, b: &Publication) -> SimilarityBreakdown {
        let linked = a.references(b.id) || b.references(a.id);
        self.signals(a, b, linked)
    }

    fn signals(&self, a: &Publication, b: &Publication, linked: bool) -> SimilarityBreakdown {
        let w = &self.weights;

        let category = if a.category == b.category { w.category } else { 0.0 };

        let keywords = w.keywords * keyword_overlap(&a.keywords, &b.keywords);

        let year_diff = (a.year as f64 - b.year as f64).abs();
        let year = w.year * (1.0 - year_diff / w.year_horizon);

        let cross_reference = if linked { w.cross_reference } else { 0.0 };

        SimilarityBreakdown {
            category,
            keywords,
            year,
            cross_reference,
        }
    }
}

/// Case-insensitive keyword overlap in [0, 1].
///
/// Size of the lowercase set intersection over the longer keyword list;
/// zero when both lists are empty.
pub fn keyword_overlap(a: &[String], b: &[String]) -> f64 {
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 0.0;
    }

    let left: HashSet<String> = a.iter().map(|k| k.to_lowercase()).collect();
    let right: HashSet<String> = b.iter().map(|k| k.to_lowercase()).collect();
    let shared = left.intersection(&right).count();

    shared as f64 / longest as f64
}
