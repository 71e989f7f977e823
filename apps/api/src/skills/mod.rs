//! Semantic skill extraction.
//!
//! Each language pipeline is tried with every strategy in order until one of them
//! yields skills. A non-default language that finds nothing is retried with the
//! default (English) pipeline, since resumes in other languages routinely name
//! technologies in English.

pub mod pipeline;
pub mod strategies;
pub mod vocabulary;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::keywords::Keyword;
use crate::language::Language;
use crate::skills::pipeline::PipelineRegistry;
use crate::skills::strategies::{ExtractError, NgramAnnotator, PhraseMatcher, SkillStrategy};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum AttemptOutcome {
    Found(usize),
    Empty,
    Failed(String),
}

/// One strategy run against one language pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attempt {
    pub language: Language,
    pub strategy: &'static str,
    pub outcome: AttemptOutcome,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SkillExtraction {
    pub skills: Vec<Keyword>,
    pub attempts: Vec<Attempt>,
}

pub struct SkillExtractor {
    pipelines: Arc<PipelineRegistry>,
    strategies: Vec<Box<dyn SkillStrategy>>,
}

impl SkillExtractor {
    /// Annotator first, phrase matcher as fallback.
    pub fn new(pipelines: Arc<PipelineRegistry>) -> Self {
        Self::with_strategies(
            pipelines,
            vec![Box::new(NgramAnnotator::default()), Box::new(PhraseMatcher)],
        )
    }

    pub fn with_strategies(
        pipelines: Arc<PipelineRegistry>,
        strategies: Vec<Box<dyn SkillStrategy>>,
    ) -> Self {
        Self {
            pipelines,
            strategies,
        }
    }

    pub fn extract_skills(&self, text: &str, lang: Language, top_k: usize) -> Vec<Keyword> {
        self.run(text, lang, top_k).skills
    }

    /// Runs the strategy chain and records every attempt made.
    pub fn run(&self, text: &str, lang: Language, top_k: usize) -> SkillExtraction {
        let mut plan = vec![lang];
        if !lang.is_default() {
            plan.push(Language::default());
        }

        let mut attempts = Vec::new();

        for language in plan {
            for strategy in &self.strategies {
                let result = match self.pipelines.get(language) {
                    Some(pipeline) => strategy.extract(text, pipeline),
                    None => Err(ExtractError::PipelineUnavailable(language)),
                };

                let outcome = match result {
                    Ok(mut skills) if !skills.is_empty() => {
                        let outcome = AttemptOutcome::Found(skills.len());
                        attempts.push(Attempt {
                            language,
                            strategy: strategy.name(),
                            outcome,
                        });
                        skills.truncate(top_k);
                        debug!(
                            "Skill extraction: {} skills via {}/{} after {} attempts",
                            skills.len(),
                            language,
                            strategy.name(),
                            attempts.len()
                        );
                        return SkillExtraction { skills, attempts };
                    }
                    Ok(_) => AttemptOutcome::Empty,
                    Err(e) => {
                        warn!("Skill strategy {}/{} failed: {e}", language, strategy.name());
                        AttemptOutcome::Failed(e.to_string())
                    }
                };

                attempts.push(Attempt {
                    language,
                    strategy: strategy.name(),
                    outcome,
                });
            }
        }

        debug!("Skill extraction found nothing after {} attempts", attempts.len());
        SkillExtraction {
            skills: Vec::new(),
            attempts,
        }
    }
}
