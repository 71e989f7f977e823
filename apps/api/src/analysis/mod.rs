//! Analyzer — detection, extraction, and scoring wired into one pipeline.
//!
//! Built once in `main` and shared via `Arc<Analyzer>` in `AppState`.

pub mod handlers;

use serde::Serialize;
use tracing::debug;

use crate::keywords::aggregate::aggregate;
use crate::keywords::lexical::LexicalExtractor;
use crate::keywords::{Keyword, KeywordSet, KeywordSource};
use crate::language::{DetectError, Language, LanguageDetector};
use crate::scoring::coverage::{build_coverage, KeywordCoverage};
use crate::scoring::{normalize_targets, AtsScorer, ScoreReport};
use crate::skills::{Attempt, SkillExtractor};

/// What the resume is scored against.
#[derive(Debug, Clone)]
pub enum TargetSource {
    /// Keywords are extracted from this text.
    JobDescription(String),
    /// Used as given.
    Keywords(Vec<String>),
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordExtraction {
    pub language: Language,
    pub lexical: Vec<Keyword>,
    pub skills: Vec<Keyword>,
    pub keywords: KeywordSet,
    pub attempts: Vec<Attempt>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub language: Language,
    pub target_keywords: Vec<String>,
    pub report: ScoreReport,
    pub coverage: KeywordCoverage,
    pub warnings: Vec<String>,
}

pub struct Analyzer {
    detector: LanguageDetector,
    lexical: LexicalExtractor,
    skills: SkillExtractor,
    scorer: AtsScorer,
}

impl Analyzer {
    pub fn new(
        detector: LanguageDetector,
        lexical: LexicalExtractor,
        skills: SkillExtractor,
        scorer: AtsScorer,
    ) -> Self {
        Self {
            detector,
            lexical,
            skills,
            scorer,
        }
    }

    pub fn try_detect_language(&self, text: &str) -> Result<Language, DetectError> {
        self.detector.try_detect(text)
    }

    pub fn extract_keywords(
        &self,
        text: &str,
        lang: Option<Language>,
        top_k: usize,
    ) -> KeywordExtraction {
        let language = lang.unwrap_or_else(|| self.detector.detect(text));

        let skill_run = self.skills.run(text, language, top_k);
        // Lexical keywords rank first in the merged set, so leave up to half of
        // `top_k` for skills or they never survive truncation.
        let reserved = skill_run.skills.len().min(top_k / 2);
        let lexical = self.lexical.extract(text, language, top_k - reserved);
        let keywords = aggregate(&lexical, &skill_run.skills, top_k);

        debug!(
            "Extracted {} keywords ({} lexical, {} skills) for '{language}'",
            keywords.len(),
            lexical.len(),
            skill_run.skills.len()
        );

        KeywordExtraction {
            language,
            lexical,
            skills: skill_run.skills,
            keywords,
            attempts: skill_run.attempts,
        }
    }

    pub async fn score<S: AsRef<str>>(&self, resume_text: &str, targets: &[S]) -> ScoreReport {
        self.scorer.score(resume_text, targets).await
    }

    /// Scores a resume against a target. The language is detected from the resume
    /// (unless given) and reused when extracting keywords from a job description.
    pub async fn analyze(
        &self,
        resume_text: &str,
        target: TargetSource,
        lang: Option<Language>,
        top_k: usize,
    ) -> Analysis {
        let mut warnings = Vec::new();

        if resume_text.trim().is_empty() {
            warnings.push("Resume text is empty.".to_string());
        }

        let language = lang.unwrap_or_else(|| self.detector.detect(resume_text));

        let targets = match target {
            TargetSource::JobDescription(jd) => {
                if jd.trim().is_empty() {
                    warnings.push("Job description is empty.".to_string());
                }
                self.extract_keywords(&jd, Some(language), top_k)
                    .keywords
                    .texts()
            }
            TargetSource::Keywords(keywords) => keywords
                .iter()
                .map(|k| Keyword::new(k, KeywordSource::Supplied))
                .collect::<KeywordSet>()
                .texts(),
        };

        let target_keywords = normalize_targets(&targets);
        if target_keywords.is_empty() {
            warnings.push("No target keywords to score against.".to_string());
        }

        let report = self.scorer.score(resume_text, &target_keywords).await;
        let coverage = build_coverage(&target_keywords, &report);

        Analysis {
            language,
            target_keywords,
            report,
            coverage,
            warnings,
        }
    }
}
