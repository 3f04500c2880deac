//! In-memory record store
//!
//! An arena of publications plus an id index. The store is built once and
//! never mutated; ranking passes borrow from it.

mod graph;

pub use graph::{EdgeKind, GraphEdge, GraphNode, NodeRef, RelationshipIndex};

use crate::errors::{AppError, Result};
use crate::models::{Publication, PublicationId};
use std::collections::HashMap;

/// Immutable collection of publications with O(1) lookup by id
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    /// Publications in collection order
    records: Vec<Publication>,

    /// id -> position in `records`
    positions: HashMap<PublicationId, usize>,
}

impl RecordStore {
    /// Build a store, rejecting collections that repeat an id
    pub fn new(records: Vec<Publication>) -> Result<Self> {
        let mut positions = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if positions.insert(record.id, position).is_some() {
                return Err(AppError::DuplicateId { id: record.id });
            }
        }

        tracing::debug!(records = records.len(), "Record store built");

        Ok(Self { records, positions })
    }

    /// Get a publication by id
    pub fn get(&self, id: PublicationId) -> Option<&Publication> {
        self.positions.get(&id).map(|&position| &self.records[position])
    }

    /// Position of a publication in collection order
    pub fn position(&self, id: PublicationId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn contains(&self, id: PublicationId) -> bool {
        self.positions.contains_key(&id)
    }

    /// All publications in collection order
    pub fn records(&self) -> &[Publication] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Publication> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Publication;
    type IntoIter = std::slice::Iter<'a, Publication>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
