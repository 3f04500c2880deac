//! Publication datasets
//!
//! Loads a collection from a JSON array of publications, or falls back to
//! the bundled space-biology sample.

use crate::errors::{AppError, Result};
use crate::models::Publication;
use crate::store::RecordStore;
use std::path::Path;

/// Bundled sample collection (eight space-biology publications)
const SAMPLE_JSON: &str = include_str!("../../data/space_biology.json");

/// Parse a collection from a JSON array
pub fn from_json(json: &str) -> Result<Vec<Publication>> {
    Ok(serde_json::from_str(json)?)
}

/// The bundled sample collection
pub fn sample() -> Result<Vec<Publication>> {
    from_json(SAMPLE_JSON)
}

/// The bundled sample collection as a store
pub fn sample_store() -> Result<RecordStore> {
    RecordStore::new(sample()?)
}

/// Read a collection from a JSON file
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Publication>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| AppError::Internal {
        message: format!("Failed to read dataset {}: {}", path.display(), e),
    })?;

    let records = from_json(&json)?;
    tracing::info!(path = %path.display(), records = records.len(), "Dataset loaded");
    Ok(records)
}

/// Load the configured dataset, or the bundled sample when no path is set
pub fn load(path: Option<&str>) -> Result<RecordStore> {
    let records = match path {
        Some(path) => load_file(path)?,
        None => {
            tracing::info!("No dataset path configured, using bundled sample");
            sample()?
        }
    };

    RecordStore::new(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_dataset() {
        let store = sample_store().unwrap();

        assert_eq!(store.len(), 8);
        let first = store.get(1).unwrap();
        assert_eq!(first.title, "Gene Expression in Space-Grown Arabidopsis");
        assert_eq!(first.category, "Plant Biology");
        assert_eq!(first.related_experiments, vec![4, 7]);
        assert_eq!(first.citations, 45);
    }

    #[test]
    fn test_load_defaults_to_sample() {
        let store = load(None).unwrap();
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Some("/nonexistent/orbitlit.json")).unwrap_err();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(from_json(r#"{ "id": 1 }"#).is_err());
    }
}
