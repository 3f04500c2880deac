//! OrbitLit Common Library
//!
//! Shared code for the OrbitLit catalog crates including:
//! - Publication model and immutable record store
//! - Relationship index over cross-references and categories
//! - Bundled sample dataset
//! - Error types and handling
//! - Configuration management
//! - Metrics and tracing setup

pub mod config;
pub mod dataset;
pub mod errors;
pub mod metrics;
pub mod models;
pub mod store;
pub mod telemetry;

// Re-export commonly used types
pub use config::AppConfig;
pub use errors::{AppError, Result};
pub use models::{Publication, PublicationId, Scored};
pub use store::{RecordStore, RelationshipIndex};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
