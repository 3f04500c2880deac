//! Relationship index over a record store
//!
//! Built once from the store: cross-reference adjacency, first-seen categories,
//! and a node/edge view of the knowledge graph for presentation layers.

use super::RecordStore;
use crate::models::PublicationId;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Node identifier in the knowledge graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum NodeRef {
    Publication(PublicationId),
    Category(String),
}

/// Node in the exported knowledge graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub node: NodeRef,

    /// Publication title or category name
    pub label: String,

    pub year: Option<i32>,
    pub citations: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Publication -> its category
    BelongsTo,
    /// Publication -> a publication it lists as related
    RelatedTo,
}

/// Edge in the exported knowledge graph
#[derive(Debug, Clone, Serialize)]
pub struct GraphEdge {
    pub source: PublicationId,
    pub target: NodeRef,
    pub kind: EdgeKind,
}

/// Adjacency structure for cross-references and categories
#[derive(Debug, Clone, Default)]
pub struct RelationshipIndex {
    /// publication -> publications it lists, in listed order
    outgoing: HashMap<PublicationId, Vec<PublicationId>>,

    /// Unordered pairs linked in either direction
    links: HashMap<PublicationId, HashSet<PublicationId>>,

    /// Categories in first-seen order
    category_order: Vec<String>,
}

impl RelationshipIndex {
    /// Build the index from a store
    pub fn build(store: &RecordStore) -> Self {
        let mut index = Self::default();
        let mut seen = HashSet::new();

        for publication in store {
            if seen.insert(publication.category.as_str()) {
                index.category_order.push(publication.category.clone());
            }

            for &related in &publication.related_experiments {
                index.add_link(publication.id, related);
            }
        }

        tracing::debug!(
            publications = store.len(),
            categories = index.category_order.len(),
            "Relationship index built"
        );

        index
    }

    /// Record that `from` lists `to` as related
    fn add_link(&mut self, from: PublicationId, to: PublicationId) {
        self.outgoing.entry(from).or_default().push(to);
        self.links.entry(from).or_default().insert(to);
        self.links.entry(to).or_default().insert(from);
    }

    /// Whether either publication lists the other
    pub fn is_linked(&self, a: PublicationId, b: PublicationId) -> bool {
        self.links.get(&a).is_some_and(|linked| linked.contains(&b))
    }

    /// Publications listed by `id`
    pub fn related_to(&self, id: PublicationId) -> &[PublicationId] {
        self.outgoing.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Categories in first-seen order
    pub fn categories(&self) -> &[String] {
        &self.category_order
    }

    /// Export the graph as publication and category nodes
    pub fn nodes(&self, store: &RecordStore) -> Vec<GraphNode> {
        let publications = store.iter().map(|p| GraphNode {
            node: NodeRef::Publication(p.id),
            label: p.title.clone(),
            year: Some(p.year),
            citations: Some(p.citations),
        });

        let categories = self.category_order.iter().map(|c| GraphNode {
            node: NodeRef::Category(c.clone()),
            label: c.clone(),
            year: None,
            citations: None,
        });

        publications.chain(categories).collect()
    }

    /// Export `belongs_to` and `related_to` edges in collection order
    pub fn edges(&self, store: &RecordStore) -> Vec<GraphEdge> {
        let mut edges = Vec::new();

        for publication in store {
            edges.push(GraphEdge {
                source: publication.id,
                target: NodeRef::Category(publication.category.clone()),
                kind: EdgeKind::BelongsTo,
            });

            for &related in self.related_to(publication.id) {
                edges.push(GraphEdge {
                    source: publication.id,
                    target: NodeRef::Publication(related),
                    kind: EdgeKind::RelatedTo,
                });
            }
        }

        edges
    }
}
