//! Skill extraction strategies run by [`crate::skills::SkillExtractor`], in order.

use strsim::{jaro_winkler, levenshtein};
use thiserror::Error;

use crate::keywords::{Keyword, KeywordSet, KeywordSource};
use crate::language::Language;
use crate::skills::pipeline::LanguagePipeline;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExtractError {
    #[error("no skill pipeline loaded for '{0}'")]
    PipelineUnavailable(Language),

    #[error("text is {length} characters, pipeline limit is {limit}")]
    TextTooLong { length: usize, limit: usize },

    #[error("phrase matcher unavailable for '{0}'")]
    MatcherUnavailable(Language),
}

pub trait SkillStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract(&self, text: &str, pipeline: &LanguagePipeline)
        -> Result<Vec<Keyword>, ExtractError>;
}

/// Token n-gram annotator: exact vocabulary phrases plus typo-level near-matches.
///
/// A near-match is at most `max_edits` edits from a vocabulary phrase of the same
/// token count and scores at least `fuzzy_threshold` Jaro–Winkler. A phrase that
/// merely prefixes the n-gram (`react` in `reactive`) is never a match.
#[derive(Debug, Clone)]
pub struct NgramAnnotator {
    pub fuzzy_threshold: f64,
    pub max_edits: usize,
    /// n-grams shorter than this are only matched exactly.
    pub min_fuzzy_chars: usize,
}

impl Default for NgramAnnotator {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.92,
            max_edits: 1,
            min_fuzzy_chars: 5,
        }
    }
}

impl NgramAnnotator {
    fn fuzzy_match<'p>(
        &self,
        key: &str,
        pipeline: &'p LanguagePipeline,
        n: usize,
    ) -> Option<(&'p str, f64)> {
        if key.chars().count() < self.min_fuzzy_chars {
            return None;
        }
        let first = key.chars().next()?;

        pipeline
            .phrases_with_tokens(n)
            .iter()
            .filter(|(phrase, _)| phrase.starts_with(first) && !key.starts_with(phrase.as_str()))
            .filter(|(phrase, _)| levenshtein(key, phrase) <= self.max_edits)
            .map(|(phrase, canonical)| (canonical.as_str(), jaro_winkler(key, phrase)))
            .filter(|(_, sim)| *sim >= self.fuzzy_threshold)
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

impl SkillStrategy for NgramAnnotator {
    fn name(&self) -> &'static str {
        "annotator"
    }

    fn extract(
        &self,
        text: &str,
        pipeline: &LanguagePipeline,
    ) -> Result<Vec<Keyword>, ExtractError> {
        let length = text.chars().count();
        if length > pipeline.max_length() {
            return Err(ExtractError::TextTooLong {
                length,
                limit: pipeline.max_length(),
            });
        }

        let tokens = pipeline.tokenize(text);
        let mut found = KeywordSet::new();
        let mut i = 0;

        while i < tokens.len() {
            let mut advance = 1;

            for n in (1..=pipeline.max_phrase_tokens()).rev() {
                let Some(window) = tokens.get(i..i + n) else {
                    continue;
                };
                if window[n - 1].sentence != window[0].sentence {
                    continue;
                }

                let key = window
                    .iter()
                    .map(|t| t.lower.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");

                let hit = match pipeline.phrase(&key) {
                    Some(canonical) => Some((canonical, 1.0)),
                    None => self.fuzzy_match(&key, pipeline, n),
                };

                if let Some((canonical, similarity)) = hit {
                    found.insert(Keyword::scored(
                        canonical,
                        similarity as f32,
                        KeywordSource::Skill,
                    ));
                    advance = n;
                    break;
                }
            }

            i += advance;
        }

        Ok(found.into_vec())
    }
}

/// Case-insensitive whole-word scan with the pipeline's Aho–Corasick automaton.
#[derive(Debug, Clone, Default)]
pub struct PhraseMatcher;

impl SkillStrategy for PhraseMatcher {
    fn name(&self) -> &'static str {
        "phrase_matcher"
    }

    fn extract(
        &self,
        text: &str,
        pipeline: &LanguagePipeline,
    ) -> Result<Vec<Keyword>, ExtractError> {
        let index = pipeline
            .phrase_index()
            .ok_or(ExtractError::MatcherUnavailable(pipeline.language()))?;

        let lower = text.to_lowercase();
        let mut found = KeywordSet::new();

        for m in index.automaton.find_iter(&lower) {
            let before = lower[..m.start()].chars().next_back();
            let after = lower[m.end()..].chars().next();
            if before.is_some_and(char::is_alphanumeric) || after.is_some_and(char::is_alphanumeric) {
                continue;
            }
            found.insert(Keyword::scored(
                &index.patterns[m.pattern().as_usize()],
                1.0,
                KeywordSource::Skill,
            ));
        }

        Ok(found.into_vec())
    }
}
