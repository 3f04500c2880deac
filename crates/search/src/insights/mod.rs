//! Descriptive statistics over a publication collection

use orbitlit_common::errors::{AppError, Result};
use orbitlit_common::metrics;
use orbitlit_common::Publication;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Default number of keywords kept in [`Insights::top_keywords`]
pub const DEFAULT_TOP_KEYWORDS: usize = 10;

/// Collection-wide statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    /// (category, count) in first-seen order
    pub category_counts: Vec<(String, usize)>,

    /// year -> count, ascending by year
    pub year_counts: BTreeMap<i32, usize>,

    /// (keyword, count), most frequent first, ties in first-seen order.
    /// Keywords are counted case-sensitively.
    pub top_keywords: Vec<(String, usize)>,

    pub total_publications: usize,

    /// Mean citation count; `None` for an empty collection
    pub average_citations: Option<f64>,
}

/// Aggregate statistics with the default keyword limit
pub fn aggregate<'a, I>(publications: I) -> Insights
where
    I: IntoIterator<Item = &'a Publication>,
{
    aggregate_with_limit(publications, DEFAULT_TOP_KEYWORDS)
}

/// Aggregate statistics keeping at most `keyword_limit` top keywords
pub fn aggregate_with_limit<'a, I>(publications: I, keyword_limit: usize) -> Insights
where
    I: IntoIterator<Item = &'a Publication>,
{
    let mut categories = FirstSeenCounter::default();
    let mut keywords = FirstSeenCounter::default();
    let mut year_counts = BTreeMap::new();
    let mut total_publications = 0usize;
    let mut citation_sum = 0u64;

    for publication in publications {
        total_publications += 1;
        citation_sum += u64::from(publication.citations);

        categories.add(&publication.category);
        *year_counts.entry(publication.year).or_insert(0) += 1;

        for keyword in &publication.keywords {
            keywords.add(keyword);
        }
    }

    let mut top_keywords = keywords.into_entries();
    // Stable: equal counts stay in first-seen order
    top_keywords.sort_by(|a, b| b.1.cmp(&a.1));
    top_keywords.truncate(keyword_limit);

    let average_citations =
        (total_publications > 0).then(|| citation_sum as f64 / total_publications as f64);

    metrics::record_aggregation(total_publications);
    tracing::debug!(
        total_publications,
        categories = categories.len(),
        years = year_counts.len(),
        "Insights aggregated"
    );

    Insights {
        category_counts: categories.into_entries(),
        year_counts,
        top_keywords,
        total_publications,
        average_citations,
    }
}

/// Mean citation count, failing on an empty collection
pub fn average_citations(publications: &[Publication]) -> Result<f64> {
    if publications.is_empty() {
        return Err(AppError::EmptyInput {
            operation: "average_citations".to_string(),
        });
    }

    let sum: u64 = publications.iter().map(|p| u64::from(p.citations)).sum();
    Ok(sum as f64 / publications.len() as f64)
}

/// Counts strings while remembering the order they first appeared in
#[derive(Debug, Default)]
struct FirstSeenCounter {
    positions: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl FirstSeenCounter {
    fn add(&mut self, key: &str) {
        match self.positions.get(key) {
            Some(&position) => self.entries[position].1 += 1,
            None => {
                self.positions.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), 1));
            }
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn into_entries(self) -> Vec<(String, usize)> {
        self.entries
    }
}
