//! OrbitLit catalog report
//!
//! Loads the configured publication collection and prints a JSON report:
//! - Collection insights
//! - Search results for `CATALOG_QUERY` (if set)
//! - Related publications for `CATALOG_RELATED_ID` (if set)
//! - The knowledge graph when `CATALOG_GRAPH` is set
//!
//! `CATALOG_CONFIG` points at a single config file instead of the layered
//! `config/` directory.

use orbitlit_common::store::{GraphEdge, GraphNode};
use orbitlit_common::{config::AppConfig, dataset, metrics, telemetry, PublicationId, VERSION};
use orbitlit_search::{insights, RankingEngine, SummaryGenerator};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct Report<'a> {
    version: &'static str,
    insights: insights::Insights,

    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<SearchSection<'a>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    related: Option<RelatedSection<'a>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<GraphSection>,
}

#[derive(Serialize)]
struct GraphSection {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

#[derive(Serialize)]
struct SearchSection<'a> {
    query: String,
    results: Vec<ReportEntry<'a>>,
}

#[derive(Serialize)]
struct RelatedSection<'a> {
    target_id: PublicationId,
    summary: String,
    results: Vec<ReportEntry<'a>>,
}

#[derive(Serialize)]
struct ReportEntry<'a> {
    id: PublicationId,
    title: &'a str,
    score: f64,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = match std::env::var("CATALOG_CONFIG") {
        Ok(path) => AppConfig::from_file(&path),
        Err(_) => AppConfig::load(),
    }
    .map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        e
    })?;

    // Initialize tracing
    telemetry::init_tracing(&config.observability);
    metrics::register_metrics();

    info!("Starting OrbitLit catalog report v{}", VERSION);

    let store = dataset::load(config.dataset.path.as_deref()).map_err(|e| {
        e.log();
        e
    })?;

    let insights = insights::aggregate_with_limit(&store, config.ranking.top_keyword_limit);
    info!(
        publications = insights.total_publications,
        categories = insights.category_counts.len(),
        "Catalog loaded"
    );

    let engine = RankingEngine::with_config(store, &config);

    let search = std::env::var("CATALOG_QUERY").ok().map(|query| {
        let results = engine
            .search_scored(&query)
            .into_iter()
            .map(|s| ReportEntry {
                id: s.id(),
                title: &s.publication.title,
                score: s.score,
            })
            .collect();
        SearchSection { query, results }
    });

    let related = match std::env::var("CATALOG_RELATED_ID").ok() {
        Some(raw) => match raw.parse::<PublicationId>() {
            Ok(target_id) => related_section(&engine, target_id),
            Err(e) => {
                warn!(value = %raw, error = %e, "CATALOG_RELATED_ID is not an integer, skipping");
                None
            }
        },
        None => None,
    };

    let graph = std::env::var("CATALOG_GRAPH").is_ok().then(|| GraphSection {
        nodes: engine.index().nodes(engine.store()),
        edges: engine.index().edges(engine.store()),
    });

    let report = Report {
        version: VERSION,
        insights,
        search,
        related,
        graph,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);

    info!("Catalog report complete");
    Ok(())
}

fn related_section(engine: &RankingEngine, target_id: PublicationId) -> Option<RelatedSection<'_>> {
    let scored = match engine.find_related_scored(target_id, engine.related_limit()) {
        Ok(scored) => scored,
        Err(e) => {
            e.log();
            return None;
        }
    };
    let target = engine.store().get(target_id)?;

    let results = scored
        .into_iter()
        .map(|s| ReportEntry {
            id: s.id(),
            title: &s.publication.title,
            score: s.score,
        })
        .collect();

    Some(RelatedSection {
        target_id,
        summary: SummaryGenerator::new().summarize(target),
        results,
    })
}
