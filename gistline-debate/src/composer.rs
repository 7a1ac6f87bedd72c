//! Category-keyed reply templates.

use gistline::{GistError, GistResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::ResponseCategory;

/// Stands in for the term list when a message yields no key terms.
pub const MISSING_TERMS_PHRASE: &str = "this point";

const TOPIC_PLACEHOLDER: &str = "{topic}";
const TERMS_PLACEHOLDER: &str = "{terms}";

const FACTUAL_TEMPLATES: &[&str] = &[
    "Regarding {terms} in the context of \"{topic}\": This is a multifaceted issue. The key factors to consider include historical precedents, current research findings, and practical implications. Based on available information, there are several important perspectives worth examining.",
    "That's an excellent question about {terms}. When we analyze \"{topic}\", we need to consider both the theoretical framework and real-world applications. Research suggests that {terms} plays a significant role in understanding the broader implications of this topic.",
    "To address your question about {terms}: The relationship to \"{topic}\" is quite intricate. Current evidence points to several interconnected factors, including societal impact, technological advancement, and policy considerations that all contribute to our understanding.",
];

const OPINION_TEMPLATES: &[&str] = &[
    "I appreciate your perspective on {terms}. When examining \"{topic}\", I think it's valuable to consider multiple viewpoints. Your observation raises important questions about how we balance different priorities and values in this discussion.",
    "Your thoughts on {terms} are thought-provoking. In the context of \"{topic}\", opinions vary significantly, and that's what makes this discussion rich. I'd argue that we should also consider the counterarguments and alternative interpretations that others might present.",
    "That's an interesting stance regarding {terms}. Looking at \"{topic}\" from various angles, I believe the debate centers on fundamental questions about values, priorities, and long-term consequences. Your view represents one valid interpretation among several.",
];

const ANALYTICAL_TEMPLATES: &[&str] = &[
    "Your point about {terms} adds an important dimension to our discussion of \"{topic}\". Let me build on that: We should examine not only the immediate implications but also the systemic effects. This involves analyzing cause-and-effect relationships, stakeholder interests, and potential unintended consequences.",
    "Building on your observation regarding {terms}: When we dissect \"{topic}\", several layers emerge. The surface-level discussion often misses deeper complexities involving economic factors, social dynamics, and ethical considerations. Your comment touches on what might be the most crucial aspect of this debate.",
    "That's a significant point about {terms} in relation to \"{topic}\". The analysis becomes more interesting when we consider historical patterns, current trends, and future projections. What you've highlighted suggests we need to examine both micro and macro perspectives to fully understand the implications.",
    "Excellent observation regarding {terms}. The nuances of \"{topic}\" require us to think critically about assumptions, evidence, and logical consistency. Your comment invites us to question prevailing narratives and consider alternative frameworks for understanding these issues.",
];

fn to_owned_pool(pool: &[&str]) -> Vec<String> {
    pool.iter().map(|t| t.to_string()).collect()
}

/// Template pools, one per [`ResponseCategory`].
///
/// Templates may use `{topic}` and `{terms}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseTemplates {
    pub factual: Vec<String>,
    pub opinion: Vec<String>,
    pub analytical: Vec<String>,
}

impl Default for ResponseTemplates {
    fn default() -> Self {
        Self {
            factual: to_owned_pool(FACTUAL_TEMPLATES),
            opinion: to_owned_pool(OPINION_TEMPLATES),
            analytical: to_owned_pool(ANALYTICAL_TEMPLATES),
        }
    }
}

impl ResponseTemplates {
    pub fn pool(&self, category: ResponseCategory) -> &[String] {
        match category {
            ResponseCategory::Factual => &self.factual,
            ResponseCategory::Opinion => &self.opinion,
            ResponseCategory::Analytical => &self.analytical,
        }
    }
}

/// Join key terms the way each category's templates expect.
///
/// Factual replies list every term with commas, opinion replies chain them
/// with "and", analytical replies mention only the first two.
fn join_terms(category: ResponseCategory, terms: &[String]) -> String {
    if terms.is_empty() {
        return MISSING_TERMS_PHRASE.to_string();
    }
    match category {
        ResponseCategory::Factual => terms.join(", "),
        ResponseCategory::Opinion => terms.join(" and "),
        ResponseCategory::Analytical => terms[..terms.len().min(2)].join(" and "),
    }
}

/// Substitute placeholders in one pass so that replacement text is never
/// re-scanned.
fn fill(template: &str, topic: &str, terms: &str) -> String {
    let mut out = String::with_capacity(template.len() + topic.len() + terms.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        if tail.starts_with(TOPIC_PLACEHOLDER) {
            out.push_str(topic);
            rest = &tail[TOPIC_PLACEHOLDER.len()..];
        } else if tail.starts_with(TERMS_PLACEHOLDER) {
            out.push_str(terms);
            rest = &tail[TERMS_PLACEHOLDER.len()..];
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Fills a randomly chosen template of the matching category.
#[derive(Debug, Clone, Default)]
pub struct ResponseComposer {
    templates: ResponseTemplates,
}

impl ResponseComposer {
    pub fn new(templates: ResponseTemplates) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &ResponseTemplates {
        &self.templates
    }

    /// Pick a template uniformly with `rng` and fill it.
    ///
    /// Fails with [`GistError::InternalComputation`] when the category's pool
    /// is empty.
    pub fn compose<R: Rng + ?Sized>(
        &self,
        category: ResponseCategory,
        topic: &str,
        terms: &[String],
        rng: &mut R,
    ) -> GistResult<String> {
        let pool = self.templates.pool(category);
        if pool.is_empty() {
            return Err(GistError::internal(format!(
                "no {} response templates configured",
                category.as_str()
            )));
        }

        let template = &pool[rng.random_range(0..pool.len())];
        Ok(fill(template, topic, &join_terms(category, terms)))
    }
}
