//! Query relevance scoring
//!
//! Lexical substring matching over title, abstract, keywords and authors,
//! plus recency and citation boosts. The boosts apply whether or not the
//! query matched any text, so callers filter on [`RelevanceBreakdown::textual`]
//! rather than on the total.

use orbitlit_common::config::RelevanceWeights;
use orbitlit_common::Publication;
use serde::Serialize;

/// A query normalized once for a whole ranking pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuery {
    /// Lowercased query, whitespace kept as typed
    phrase: String,

    /// Whitespace-separated lowercase terms
    terms: Vec<String>,
}

impl PreparedQuery {
    pub fn new(query: &str) -> Self {
        let phrase = query.to_lowercase();
        let terms = phrase.split_whitespace().map(str::to_string).collect();
        Self { phrase, terms }
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when the query holds no terms at all
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Per-signal contributions to a relevance score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RelevanceBreakdown {
    /// Whole-query substring bonus
    pub phrase: f64,

    /// Sum of per-term field bonuses
    pub terms: f64,

    pub recency: f64,
    pub citations: f64,
}

impl RelevanceBreakdown {
    /// Score earned by matching text
    pub fn textual(&self) -> f64 {
        self.phrase + self.terms
    }

    /// Score earned regardless of the query
    pub fn boosts(&self) -> f64 {
        self.recency + self.citations
    }

    pub fn total(&self) -> f64 {
        self.textual() + self.boosts()
    }
}

/// Scores how well a publication matches a free-text query
#[derive(Debug, Clone, Default)]
pub struct RelevanceScorer {
    weights: RelevanceWeights,
}

impl RelevanceScorer {
    pub fn new(weights: RelevanceWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &RelevanceWeights {
        &self.weights
    }

    /// Relevance of a publication to a raw query string
    pub fn score(&self, query: &str, publication: &Publication) -> f64 {
        self.breakdown(&PreparedQuery::new(query), publication).total()
    }

    /// Per-signal contributions for a prepared query
    pub fn breakdown(&self, query: &PreparedQuery, publication: &Publication) -> RelevanceBreakdown {
        let w = &self.weights;

        let title = publication.title.to_lowercase();
        let abstract_text = publication.abstract_text.to_lowercase();
        let keywords: Vec<String> = publication.keywords.iter().map(|k| k.to_lowercase()).collect();
        let authors: Vec<String> = publication.authors.iter().map(|a| a.to_lowercase()).collect();

        let phrase = if !query.is_empty()
            && haystack(&title, &abstract_text, &keywords, &authors).contains(&query.phrase)
        {
            w.phrase
        } else {
            0.0
        };

        let terms = query
            .terms
            .iter()
            .map(|term| {
                let mut score = 0.0;
                if title.contains(term.as_str()) {
                    score += w.title;
                }
                if keywords.iter().any(|k| k.contains(term.as_str())) {
                    score += w.keyword;
                }
                if abstract_text.contains(term.as_str()) {
                    score += w.abstract_text;
                }
                if authors.iter().any(|a| a.contains(term.as_str())) {
                    score += w.author;
                }
                score
            })
            .sum();

        let recency = if publication.year >= w.recency_year { w.recency } else { 0.0 };

        let citations = (publication.citations as f64 / w.citation_divisor).min(w.citation_cap);

        RelevanceBreakdown {
            phrase,
            terms,
            recency,
            citations,
        }
    }
}

/// Combined searchable text: title, abstract, keywords, authors
fn haystack(title: &str, abstract_text: &str, keywords: &[String], authors: &[String]) -> String {
    format!(
        "{} {} {} {}",
        title,
        abstract_text,
        keywords.join(" "),
        authors.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbitlit_common::dataset;

    const EPS: f64 = 1e-9;

    fn record() -> Publication {
        Publication::new(1)
            .with_title("Bone Density Loss in Microgravity")
            .with_abstract("Longitudinal study of bone mineral density in astronauts.")
            .with_keywords(["Bone Density", "Calcium"])
            .with_authors(["Dr. Amanda Wilson"])
            .with_year(2018)
            .with_citations(0)
    }

    #[test]
    fn test_prepared_query_normalization() {
        let query = PreparedQuery::new("  Bone   DENSITY ");
        assert_eq!(query.phrase(), "  bone   density ");
        assert_eq!(query.terms(), &["bone".to_string(), "density".to_string()]);

        assert!(PreparedQuery::new("   ").is_empty());
        assert!(PreparedQuery::new("").is_empty());
    }

    #[test]
    fn test_term_bonuses_are_additive_per_field() {
        let scorer = RelevanceScorer::default();
        let breakdown = scorer.breakdown(&PreparedQuery::new("bone"), &record());

        // phrase + title + keyword + abstract
        assert!((breakdown.phrase - 2.0).abs() < EPS);
        assert!((breakdown.terms - (1.5 + 1.2 + 0.8)).abs() < EPS);
        assert_eq!(breakdown.boosts(), 0.0);
    }

    #[test]
    fn test_author_match() {
        let scorer = RelevanceScorer::default();
        let breakdown = scorer.breakdown(&PreparedQuery::new("wilson"), &record());

        assert!((breakdown.terms - 0.5).abs() < EPS);
        assert!((breakdown.phrase - 2.0).abs() < EPS);
    }

    #[test]
    fn test_phrase_spanning_fields_not_required_per_term() {
        let scorer = RelevanceScorer::default();
        // Both terms match, but the phrase does not appear contiguously
        let breakdown = scorer.breakdown(&PreparedQuery::new("calcium bone"), &record());

        assert_eq!(breakdown.phrase, 0.0);
        // calcium: keyword 1.2; bone: title 1.5 + keyword 1.2 + abstract 0.8
        assert!((breakdown.terms - 4.7).abs() < EPS);
    }

    #[test]
    fn test_phrase_keeps_surrounding_whitespace() {
        let scorer = RelevanceScorer::default();

        // The author is the last haystack entry, so no space follows it
        let trailing = scorer.breakdown(&PreparedQuery::new("wilson "), &record());
        assert_eq!(trailing.phrase, 0.0);
        assert!((trailing.terms - 0.5).abs() < EPS);

        // Whitespace between fields still lets an inner phrase match
        let inner = scorer.breakdown(&PreparedQuery::new(" calcium "), &record());
        assert!((inner.phrase - 2.0).abs() < EPS);
    }

    #[test]
    fn test_boosts_apply_without_text_match() {
        let scorer = RelevanceScorer::default();
        let publication = record().with_year(2021).with_citations(30);

        let breakdown = scorer.breakdown(&PreparedQuery::new("arabidopsis"), &publication);
        assert_eq!(breakdown.textual(), 0.0);
        assert!((breakdown.recency - 0.2).abs() < EPS);
        assert!((breakdown.citations - 0.3).abs() < EPS);
        assert!((scorer.score("arabidopsis", &publication) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_citation_boost_capped() {
        let scorer = RelevanceScorer::default();

        let fifty = scorer.breakdown(&PreparedQuery::new(""), &record().with_citations(50));
        let many = scorer.breakdown(&PreparedQuery::new(""), &record().with_citations(900));
        assert!((fifty.citations - 0.5).abs() < EPS);
        assert!((many.citations - 0.5).abs() < EPS);
    }

    #[test]
    fn test_empty_query_scores_boosts_only() {
        let scorer = RelevanceScorer::default();
        let publication = record().with_year(2022).with_citations(10);

        let breakdown = scorer.breakdown(&PreparedQuery::new(""), &publication);
        assert_eq!(breakdown.textual(), 0.0);
        assert!((breakdown.total() - 0.3).abs() < EPS);
    }

    #[test]
    fn test_missing_fields_contribute_nothing() {
        let scorer = RelevanceScorer::default();
        let bare = Publication::new(5);

        let breakdown = scorer.breakdown(&PreparedQuery::new("anything"), &bare);
        assert_eq!(breakdown.total(), 0.0);
    }

    #[test]
    fn test_arabidopsis_on_sample() {
        let store = dataset::sample_store().unwrap();
        let scorer = RelevanceScorer::default();

        // phrase 2.0 + title 1.5 + keyword 1.2 + abstract 0.8 + recency 0.2 + citations 0.45
        let score = scorer.score("Arabidopsis", store.get(1).unwrap());
        assert!((score - 6.15).abs() < EPS);
    }

    #[test]
    fn test_score_never_negative() {
        let store = dataset::sample_store().unwrap();
        let scorer = RelevanceScorer::default();

        for query in ["", "space", "dr.", "zzz", "muscle atrophy", "  "] {
            for publication in &store {
                assert!(scorer.score(query, publication) >= 0.0);
            }
        }
    }
}
