//! Configuration management for OrbitLit
//!
//! Supports loading configuration from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config.toml, config.yaml)
//! - Default values

use crate::errors::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Ranking engine configuration
    #[validate(nested)]
    pub ranking: RankingConfig,

    /// Similarity signal weights
    #[validate(nested)]
    pub similarity: SimilarityWeights,

    /// Relevance signal weights
    #[validate(nested)]
    pub relevance: RelevanceWeights,

    /// Dataset source
    pub dataset: DatasetConfig,

    /// Observability configuration
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct RankingConfig {
    /// Default number of related publications returned
    #[validate(range(min = 1, max = 100))]
    pub related_limit: usize,

    /// Search keeps records whose textual score is strictly above this
    #[validate(range(min = 0.0))]
    pub min_text_score: f64,

    /// Number of keywords kept by the insight aggregator
    #[validate(range(min = 1))]
    pub top_keyword_limit: usize,
}

/// Weights for the pairwise similarity signals
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct SimilarityWeights {
    pub category: f64,
    pub keywords: f64,
    pub year: f64,
    pub cross_reference: f64,

    /// Year distance at which the proximity signal reaches zero
    #[validate(range(exclusive_min = 0.0))]
    pub year_horizon: f64,
}

/// Weights for the query relevance signals
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
#[serde(default)]
pub struct RelevanceWeights {
    pub phrase: f64,
    pub title: f64,
    pub keyword: f64,
    pub abstract_text: f64,
    pub author: f64,
    pub recency: f64,

    /// Publications from this year onwards get the recency boost
    pub recency_year: i32,

    /// Citations are divided by this before capping
    #[validate(range(exclusive_min = 0.0))]
    pub citation_divisor: f64,

    /// Upper bound of the citation boost
    #[validate(range(min = 0.0))]
    pub citation_cap: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// JSON file holding the publication collection (bundled sample if unset)
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (debug, info, warn, error)
    pub log_level: String,

    /// Enable JSON logging
    pub json_logging: bool,

    /// Service name for tracing
    pub service_name: String,
}

// Default value functions
fn default_related_limit() -> usize { 3 }
fn default_min_text_score() -> f64 { 0.0 }
fn default_top_keyword_limit() -> usize { 10 }
fn default_log_level() -> String { "info".to_string() }
fn default_json_logging() -> bool { false }
fn default_service_name() -> String { "orbitlit".to_string() }

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            related_limit: default_related_limit(),
            min_text_score: default_min_text_score(),
            top_keyword_limit: default_top_keyword_limit(),
        }
    }
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            category: 0.4,
            keywords: 0.3,
            year: 0.2,
            cross_reference: 0.3,
            year_horizon: 10.0,
        }
    }
}

impl Default for RelevanceWeights {
    fn default() -> Self {
        Self {
            phrase: 2.0,
            title: 1.5,
            keyword: 1.2,
            abstract_text: 0.8,
            author: 0.5,
            recency: 0.2,
            recency_year: 2020,
            citation_divisor: 100.0,
            citation_cap: 0.5,
        }
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logging: default_json_logging(),
            service_name: default_service_name(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment and files
    pub fn load() -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Load base config file
            .add_source(File::with_name("config/default").required(false))

            // Load environment-specific config
            .add_source(File::with_name(&format!("config/{}", env)).required(false))

            // Load local overrides
            .add_source(File::with_name("config/local").required(false))

            // Load from environment variables with APP__ prefix
            // e.g., APP__RANKING__RELATED_LIMIT=5
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )

            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(File::with_name(path))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.ranking.related_limit, 3);
        assert_eq!(config.ranking.top_keyword_limit, 10);
        assert_eq!(config.similarity.category, 0.4);
        assert_eq!(config.relevance.recency_year, 2020);
        assert!(config.dataset.path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_related_limit_rejected() {
        let mut config = AppConfig::default();
        config.ranking.related_limit = 0;

        let err: AppError = config.validate().unwrap_err().into();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_zero_year_horizon_rejected() {
        let mut config = AppConfig::default();
        config.similarity.year_horizon = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_source_keeps_defaults() {
        let config: AppConfig = Config::builder()
            .set_override("ranking.related_limit", 5)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.ranking.related_limit, 5);
        assert_eq!(config.ranking.top_keyword_limit, 10);
        assert_eq!(config.relevance.phrase, 2.0);
    }

    #[test]
    fn test_from_file_applies_and_validates() {
        let path = std::env::temp_dir().join(format!("orbitlit-config-{}.toml", std::process::id()));
        let path_str = path.to_str().unwrap();

        std::fs::write(&path, "[ranking]\nrelated_limit = 7\n\n[observability]\njson_logging = true\n").unwrap();
        let config = AppConfig::from_file(path_str).unwrap();
        assert_eq!(config.ranking.related_limit, 7);
        assert!(config.observability.json_logging);
        assert_eq!(config.similarity.category, 0.4);

        std::fs::write(&path, "[ranking]\nrelated_limit = 0\n").unwrap();
        let err = AppConfig::from_file(path_str).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));

        std::fs::remove_file(&path).unwrap();
    }
}
