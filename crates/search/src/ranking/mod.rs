//! Ranking engine
//!
//! Orchestrates the scorers over a record store:
//! - Related publications (similarity to a target record)
//! - Search (relevance to a free-text query)
//!
//! Both passes sort with a stable sort, so equal scores keep collection order.

use crate::relevance::{PreparedQuery, RelevanceScorer};
use crate::similarity::SimilarityScorer;
use orbitlit_common::config::{AppConfig, RankingConfig};
use orbitlit_common::errors::{AppError, Result};
use orbitlit_common::metrics::{self, RankingTimer};
use orbitlit_common::{Publication, PublicationId, RecordStore, RelationshipIndex, Scored};
use std::cmp::Ordering;

/// Ranks publications from an immutable store
pub struct RankingEngine {
    store: RecordStore,
    index: RelationshipIndex,
    similarity: SimilarityScorer,
    relevance: RelevanceScorer,
    config: RankingConfig,
}

impl RankingEngine {
    /// Create an engine with default weights
    pub fn new(store: RecordStore) -> Self {
        Self::with_config(store, &AppConfig::default())
    }

    /// Create an engine with configured weights and limits
    pub fn with_config(store: RecordStore, config: &AppConfig) -> Self {
        let index = RelationshipIndex::build(&store);

        Self {
            store,
            index,
            similarity: SimilarityScorer::new(config.similarity.clone()),
            relevance: RelevanceScorer::new(config.relevance.clone()),
            config: config.ranking.clone(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn index(&self) -> &RelationshipIndex {
        &self.index
    }

    pub fn similarity(&self) -> &SimilarityScorer {
        &self.similarity
    }

    pub fn relevance(&self) -> &RelevanceScorer {
        &self.relevance
    }

    /// Configured default for related-publication lists
    pub fn related_limit(&self) -> usize {
        self.config.related_limit
    }

    /// Publications most similar to `target_id`, best first
    pub fn find_related(&self, target_id: PublicationId, limit: usize) -> Result<Vec<&Publication>> {
        Ok(self
            .find_related_scored(target_id, limit)?
            .into_iter()
            .map(|scored| scored.publication)
            .collect())
    }

    /// `find_related` with the configured limit
    pub fn find_related_default(&self, target_id: PublicationId) -> Result<Vec<&Publication>> {
        self.find_related(target_id, self.config.related_limit)
    }

    /// Publications most similar to `target_id` with their scores.
    ///
    /// The target itself is never a candidate. An empty store has nothing to
    /// relate, so it yields an empty list for any id.
    pub fn find_related_scored(&self, target_id: PublicationId, limit: usize) -> Result<Vec<Scored<'_>>> {
        let timer = RankingTimer::start("related");

        if self.store.is_empty() {
            tracing::debug!(target_id, "Empty collection, no related publications");
            timer.finish(0);
            return Ok(Vec::new());
        }

        let target = self.store.get(target_id).ok_or_else(|| {
            metrics::record_not_found();
            AppError::PublicationNotFound { id: target_id }
        })?;

        let mut scored: Vec<Scored<'_>> = self
            .store
            .iter()
            .filter(|candidate| candidate.id != target_id)
            .map(|candidate| {
                Scored::new(candidate, self.similarity.score_indexed(target, candidate, &self.index))
            })
            .collect();

        sort_descending(&mut scored);
        scored.truncate(limit);

        tracing::debug!(
            target_id,
            limit,
            results = scored.len(),
            "Related publications ranked"
        );
        timer.finish(scored.len());

        Ok(scored)
    }

    /// Publications matching `query`, best first
    pub fn search(&self, query: &str) -> Vec<&Publication> {
        self.search_scored(query)
            .into_iter()
            .map(|scored| scored.publication)
            .collect()
    }

    /// Publications matching `query` with their relevance scores.
    ///
    /// A record is kept only when its textual score exceeds the configured
    /// threshold; recency and citation boosts alone never qualify it. Kept
    /// records are ordered by total relevance.
    pub fn search_scored(&self, query: &str) -> Vec<Scored<'_>> {
        let timer = RankingTimer::start("search");
        let prepared = PreparedQuery::new(query);

        if prepared.is_empty() {
            tracing::debug!("Empty query, no results");
            timer.finish(0);
            return Vec::new();
        }

        let mut scored: Vec<Scored<'_>> = self
            .store
            .iter()
            .filter_map(|candidate| {
                let breakdown = self.relevance.breakdown(&prepared, candidate);
                (breakdown.textual() > self.config.min_text_score)
                    .then(|| Scored::new(candidate, breakdown.total()))
            })
            .collect();

        sort_descending(&mut scored);

        tracing::debug!(
            query = %prepared.phrase(),
            candidates = self.store.len(),
            results = scored.len(),
            "Search ranked"
        );
        timer.finish(scored.len());

        scored
    }
}

/// Stable sort by score, highest first
fn sort_descending(scored: &mut [Scored<'_>]) {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitlit_common::dataset;

    fn engine() -> RankingEngine {
        RankingEngine::new(dataset::sample_store().unwrap())
    }

    fn ids(publications: &[&Publication]) -> Vec<PublicationId> {
        publications.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_related_excludes_target() {
        let engine = engine();

        for publication in engine.store().iter() {
            let related = engine.find_related(publication.id, 10).unwrap();
            assert_eq!(related.len(), 7);
            assert!(related.iter().all(|p| p.id != publication.id));
        }
    }

    #[test]
    fn test_related_for_first_publication() {
        let engine = engine();
        let related = engine.find_related_scored(1, 3).unwrap();

        assert_eq!(related.len(), 3);
        assert_eq!(related[0].id(), 7);
        assert!(related.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(related.iter().all(|s| s.id() != 3));

        let all = engine.find_related(1, 10).unwrap();
        let position = |id| all.iter().position(|p| p.id == id).unwrap();
        assert!(position(7) < position(3));
    }

    #[test]
    fn test_related_default_limit() {
        let engine = engine();
        assert_eq!(engine.find_related_default(2).unwrap().len(), 3);
    }

    #[test]
    fn test_related_unknown_id() {
        let engine = engine();
        let err = engine.find_related(999, 3).unwrap_err();
        assert!(matches!(err, AppError::PublicationNotFound { id: 999 }));
    }

    #[test]
    fn test_empty_store_returns_empty_results() {
        let engine = RankingEngine::new(RecordStore::default());
        assert!(engine.find_related(1, 3).unwrap().is_empty());
        assert!(engine.find_related_default(42).unwrap().is_empty());
        assert!(engine.search("anything").is_empty());
    }

    #[test]
    fn test_related_limit_zero() {
        let engine = engine();
        assert!(engine.find_related(1, 0).unwrap().is_empty());
    }

    #[test]
    fn test_search_arabidopsis_ranks_first_publication_first() {
        let engine = engine();
        let results = engine.search("Arabidopsis");

        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_search_empty_query() {
        let engine = engine();
        assert!(engine.search("").is_empty());
        assert!(engine.search("   ").is_empty());
    }

    #[test]
    fn test_search_excludes_boost_only_matches() {
        let engine = engine();
        // Every sample record has citation boosts but none mention this term
        assert!(engine.search("zebrafish").is_empty());
    }

    #[test]
    fn test_search_orders_by_total_score() {
        let engine = engine();
        let results = engine.search_scored("astronauts");

        assert!(!results.is_empty());
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(results.iter().all(|s| s.score > 0.0));
    }

    #[test]
    fn test_search_is_deterministic() {
        let engine = engine();

        for query in ["microgravity", "spaceflight muscle", "Dr."] {
            assert_eq!(ids(&engine.search(query)), ids(&engine.search(query)));
        }
        assert_eq!(
            ids(&engine.find_related(4, 5).unwrap()),
            ids(&engine.find_related(4, 5).unwrap())
        );
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let records = (1..=5)
            .map(|id| {
                Publication::new(id)
                    .with_title("Spaceflight study")
                    .with_category("Microbiology")
                    .with_year(2010)
            })
            .collect();
        let engine = RankingEngine::new(RecordStore::new(records).unwrap());

        assert_eq!(ids(&engine.search("spaceflight")), vec![1, 2, 3, 4, 5]);
        assert_eq!(ids(&engine.find_related(3, 10).unwrap()), vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_trailing_space_keeps_phrase_literal() {
        let engine = engine();
        // "lopez " never occurs in record 6's text, so only the author term
        // (0.5) and the citation boost (0.5) count
        let results = engine.search_scored("lopez ");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), 6);
        assert!((results[0].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_from_config() {
        let mut config = AppConfig::default();
        // Author-only matches (0.5 plus phrase 2.0) fall under this threshold
        config.ranking.min_text_score = 3.0;
        let engine = RankingEngine::with_config(dataset::sample_store().unwrap(), &config);

        assert!(engine.search("Connor").is_empty());
        assert_eq!(ids(&engine.search("Arabidopsis")), vec![1]);
    }
}
