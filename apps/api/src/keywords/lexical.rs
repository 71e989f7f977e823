//! Lexical keyword extraction with YAKE, a single-document statistical scorer.
//!
//! YAKE ranks candidates by casing, position, frequency, context and spread.
//! Its scores are lower-is-better; keywords carry `1 / (1 + score)` instead, best first.

use std::sync::LazyLock;

use tracing::debug;
use yake_rust::{get_n_best, Config as YakeConfig, StopWords};

use crate::keywords::stopwords::stopwords;
use crate::keywords::{Keyword, KeywordSource};
use crate::language::Language;

static ENGLISH_STOPWORDS: LazyLock<StopWords> =
    LazyLock::new(|| yake_stopwords(Language::English));
static GERMAN_STOPWORDS: LazyLock<StopWords> = LazyLock::new(|| yake_stopwords(Language::German));

fn yake_stopwords(lang: Language) -> StopWords {
    StopWords::custom(stopwords(lang).iter().map(|w| w.to_string()).collect())
}

fn stopwords_for(lang: Language) -> &'static StopWords {
    match lang {
        Language::English => &ENGLISH_STOPWORDS,
        Language::German => &GERMAN_STOPWORDS,
    }
}

#[derive(Debug, Clone)]
pub struct LexicalConfig {
    /// Maximum n-gram length of a candidate keyword.
    pub ngrams: usize,
    /// Co-occurrence window (in tokens) for YAKE's context feature.
    pub window_size: usize,
    /// Candidates at least this similar to a better-ranked keyword are dropped.
    pub dedup_threshold: f64,
    pub min_chars: usize,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            ngrams: 1,
            window_size: 1,
            dedup_threshold: 0.9,
            min_chars: 2,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LexicalExtractor {
    config: LexicalConfig,
}

impl LexicalExtractor {
    pub fn new(config: LexicalConfig) -> Self {
        Self { config }
    }

    /// Returns at most `top_k` keywords, best first. Empty text yields an empty list.
    pub fn extract(&self, text: &str, lang: Language, top_k: usize) -> Vec<Keyword> {
        if top_k == 0 || text.trim().is_empty() {
            return Vec::new();
        }

        let ngrams = self.config.ngrams.max(1);
        // There are never more candidates than n-grams in the text.
        let limit = top_k.min(text.split_whitespace().count().saturating_mul(ngrams));

        let yake_config = YakeConfig {
            ngrams,
            window_size: self.config.window_size,
            remove_duplicates: true,
            deduplication_threshold: self.config.dedup_threshold,
            minimum_chars: self.config.min_chars,
            ..YakeConfig::default()
        };

        let mut keywords: Vec<Keyword> = get_n_best(limit, text, stopwords_for(lang), &yake_config)
            .into_iter()
            .filter(|item| item.score.is_finite())
            .filter(|item| !item.keyword.split_whitespace().any(is_numeric_word))
            .map(|item| Keyword::scored(&item.keyword, confidence(item.score), KeywordSource::Lexical))
            .filter(|k| !k.is_empty())
            .collect();

        keywords.sort_by(|a, b| {
            b.score
                .unwrap_or(0.0)
                .total_cmp(&a.score.unwrap_or(0.0))
        });
        keywords.truncate(top_k);

        debug!(
            "Lexical extraction ({lang}): {} chars → {} keywords",
            text.len(),
            keywords.len()
        );
        keywords
    }
}

fn confidence(yake_score: f64) -> f32 {
    if yake_score > 0.0 {
        (1.0 / (1.0 + yake_score)).clamp(0.0, 1.0) as f32
    } else {
        1.0
    }
}

fn is_numeric_word(word: &str) -> bool {
    word.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '+' | '%'))
}
