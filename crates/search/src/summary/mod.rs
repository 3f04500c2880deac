//! Template summaries for publications
//!
//! Each known category maps to a formatting function. Categories without a
//! template fall through to a generic one, so every publication gets a summary.

use orbitlit_common::Publication;
use std::collections::HashMap;

/// Formats a summary for one publication
pub type SummaryTemplate = fn(&Publication) -> String;

/// Category-keyed summary templates with a total fallback
#[derive(Clone)]
pub struct SummaryGenerator {
    templates: HashMap<String, SummaryTemplate>,
    fallback: SummaryTemplate,
}

impl SummaryGenerator {
    /// Generator with the built-in space-biology templates
    pub fn new() -> Self {
        let mut generator = Self::empty(generic);
        generator.register("Plant Biology", plant_biology);
        generator.register("Human Physiology", human_physiology);
        generator.register("Microbiology", microbiology);
        generator.register("Radiation Biology", radiation_biology);
        generator
    }

    /// Generator with no category templates
    pub fn empty(fallback: SummaryTemplate) -> Self {
        Self {
            templates: HashMap::new(),
            fallback,
        }
    }

    /// Add or replace the template for a category
    pub fn register(&mut self, category: impl Into<String>, template: SummaryTemplate) {
        self.templates.insert(category.into(), template);
    }

    pub fn has_template(&self, category: &str) -> bool {
        self.templates.contains_key(category)
    }

    /// Summary text for a publication
    pub fn summarize(&self, publication: &Publication) -> String {
        let template = self
            .templates
            .get(&publication.category)
            .copied()
            .unwrap_or(self.fallback);
        template(publication)
    }
}

impl Default for SummaryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SummaryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut categories: Vec<&String> = self.templates.keys().collect();
        categories.sort();
        f.debug_struct("SummaryGenerator")
            .field("categories", &categories)
            .finish()
    }
}

fn plant_biology(p: &Publication) -> String {
    format!(
        "This {} study on {} represents a breakthrough in space agriculture research. \
         The experiment involved {} Key findings include {} \
         This research has significant implications for {}, making it crucial for future \
         Mars missions where sustainable food production will be essential.",
        p.year,
        p.title.to_lowercase(),
        p.experiment.to_lowercase(),
        p.results.to_lowercase(),
        p.impacts.join(", ")
    )
}

fn human_physiology(p: &Publication) -> String {
    format!(
        "A critical {} investigation into {} reveals important health challenges for \
         long-duration spaceflight. Researchers conducted {} The study found that {} \
         These findings are vital for {}, highlighting the need for advanced countermeasures \
         in future deep space exploration.",
        p.year,
        p.title.to_lowercase(),
        p.experiment.to_lowercase(),
        p.results.to_lowercase(),
        p.impacts.join(", ")
    )
}

fn microbiology(p: &Publication) -> String {
    format!(
        "This {} microbiological study examines {}, addressing critical spacecraft safety \
         concerns. The research methodology included {} Results demonstrated that {} \
         The implications for {} are significant for maintaining crew health during \
         extended missions.",
        p.year,
        p.title.to_lowercase(),
        p.experiment.to_lowercase(),
        p.results.to_lowercase(),
        p.impacts.join(", ")
    )
}

fn radiation_biology(p: &Publication) -> String {
    format!(
        "A comprehensive {} analysis of {} addresses one of the most serious challenges in \
         space exploration. Scientists performed {} The research revealed that {} \
         These findings are essential for {}, particularly for missions beyond Earth's \
         magnetosphere.",
        p.year,
        p.title.to_lowercase(),
        p.experiment.to_lowercase(),
        p.results.to_lowercase(),
        p.impacts.join(", ")
    )
}

/// Used for any category without a dedicated template
fn generic(p: &Publication) -> String {
    format!(
        "This {} study investigates {}. The research involved {} and found that {}",
        p.year,
        p.title.to_lowercase(),
        p.experiment,
        p.results
    )
}
