//! Core data models for the publication catalog
//!
//! Records are immutable once built. Ranking passes borrow them and wrap
//! them in [`Scored`] values instead of copying or mutating.

use serde::{Deserialize, Serialize};

/// Publication identifier, unique within a collection
pub type PublicationId = i64;

/// A single research publication.
///
/// Deserializes from the camelCase shape used by the catalog front end.
/// Every collection-valued or optional field defaults to empty so partially
/// filled records are accepted and simply contribute nothing to the signals
/// that read those fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: PublicationId,

    #[serde(default)]
    pub title: String,

    #[serde(default, rename = "abstract")]
    pub abstract_text: String,

    #[serde(default)]
    pub experiment: String,

    #[serde(default)]
    pub results: String,

    /// Author names; order is display-only
    #[serde(default)]
    pub authors: Vec<String>,

    /// Keywords; matched case-insensitively by the scorers
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Opaque category label, never validated
    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub year: i32,

    #[serde(default)]
    pub citations: u32,

    #[serde(default)]
    pub impacts: Vec<String>,

    /// Ids of related publications; dangling ids are tolerated
    #[serde(default)]
    pub related_experiments: Vec<PublicationId>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

impl Publication {
    /// Create a publication with the given id and every other field empty
    pub fn new(id: PublicationId) -> Self {
        Self {
            id,
            title: String::new(),
            abstract_text: String::new(),
            experiment: String::new(),
            results: String::new(),
            authors: Vec::new(),
            keywords: Vec::new(),
            category: String::new(),
            year: 0,
            citations: 0,
            impacts: Vec::new(),
            related_experiments: Vec::new(),
            doi: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
        self.abstract_text = abstract_text.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn with_citations(mut self, citations: u32) -> Self {
        self.citations = citations;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_authors<I, S>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = authors.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_related(mut self, related: impl IntoIterator<Item = PublicationId>) -> Self {
        self.related_experiments = related.into_iter().collect();
        self
    }

    /// Whether this record lists `other` among its related experiments
    pub fn references(&self, other: PublicationId) -> bool {
        self.related_experiments.contains(&other)
    }
}

/// A publication paired with the score computed for it in one ranking pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scored<'a> {
    pub publication: &'a Publication,
    pub score: f64,
}

impl<'a> Scored<'a> {
    pub fn new(publication: &'a Publication, score: f64) -> Self {
        Self { publication, score }
    }

    pub fn id(&self) -> PublicationId {
        self.publication.id
    }
}
