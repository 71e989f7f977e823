//! Per-language skill pipelines, built once at start-up and shared read-only.

use std::collections::HashMap;

use aho_corasick::{AhoCorasick, MatchKind};
use tracing::{info, warn};

use crate::keywords::tokenizer::{tokenize, words, Token, TokenRules};
use crate::language::Language;
use crate::skills::vocabulary::{SkillVocabulary, VocabularyExtensions};

/// Vocabulary entries outside this character range are not given to the phrase matcher.
pub const PHRASE_MIN_CHARS: usize = 2;
pub const PHRASE_MAX_CHARS: usize = 60;

/// Texts longer than this (in chars) are rejected by the annotator.
pub const DEFAULT_MAX_LENGTH: usize = 1_000_000;

/// Aho–Corasick automaton over the length-bounded vocabulary entries.
pub struct PhraseIndex {
    pub automaton: AhoCorasick,
    pub patterns: Vec<String>,
}

pub struct LanguagePipeline {
    language: Language,
    rules: TokenRules,
    vocabulary: SkillVocabulary,
    /// Token-joined phrase key → canonical vocabulary entry.
    phrases: HashMap<String, String>,
    /// Phrase keys grouped by token count, in catalogue order.
    phrases_by_len: HashMap<usize, Vec<(String, String)>>,
    max_phrase_tokens: usize,
    max_length: usize,
    phrase_index: Option<PhraseIndex>,
}

impl LanguagePipeline {
    pub fn new(language: Language, vocabulary: SkillVocabulary) -> Self {
        let rules = TokenRules::for_language(language);

        let mut phrases = HashMap::new();
        let mut phrases_by_len: HashMap<usize, Vec<(String, String)>> = HashMap::new();
        let mut max_phrase_tokens = 0;

        for entry in vocabulary.entries() {
            let tokens = words(entry, rules);
            if tokens.is_empty() {
                continue;
            }
            let key = tokens.join(" ");
            if phrases.contains_key(&key) {
                continue;
            }
            max_phrase_tokens = max_phrase_tokens.max(tokens.len());
            phrases_by_len
                .entry(tokens.len())
                .or_default()
                .push((key.clone(), entry.clone()));
            phrases.insert(key, entry.clone());
        }

        let phrase_index = build_phrase_index(language, &vocabulary);

        Self {
            language,
            rules,
            vocabulary,
            phrases,
            phrases_by_len,
            max_phrase_tokens,
            max_length: DEFAULT_MAX_LENGTH,
            phrase_index,
        }
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn max_phrase_tokens(&self) -> usize {
        self.max_phrase_tokens
    }

    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(text, self.rules)
    }

    /// Canonical vocabulary entry for an exact token-joined phrase.
    pub fn phrase(&self, key: &str) -> Option<&str> {
        self.phrases.get(key).map(String::as_str)
    }

    /// `(phrase key, canonical entry)` pairs with exactly `n` tokens.
    pub fn phrases_with_tokens(&self, n: usize) -> &[(String, String)] {
        self.phrases_by_len.get(&n).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn phrase_index(&self) -> Option<&PhraseIndex> {
        self.phrase_index.as_ref()
    }
}

fn build_phrase_index(language: Language, vocabulary: &SkillVocabulary) -> Option<PhraseIndex> {
    let patterns: Vec<String> = vocabulary
        .entries()
        .iter()
        .filter(|e| (PHRASE_MIN_CHARS..=PHRASE_MAX_CHARS).contains(&e.chars().count()))
        .cloned()
        .collect();

    match AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostLongest)
        .build(&patterns)
    {
        Ok(automaton) => Some(PhraseIndex {
            automaton,
            patterns,
        }),
        Err(e) => {
            warn!("Failed to build phrase matcher for '{language}': {e}");
            None
        }
    }
}

/// All loaded pipelines, keyed by language.
pub struct PipelineRegistry {
    pipelines: HashMap<Language, LanguagePipeline>,
}

impl PipelineRegistry {
    /// Pipelines over the built-in vocabularies.
    pub fn builtin() -> Self {
        Self::with_extensions(&VocabularyExtensions::default())
    }

    /// Built-in vocabularies extended with start-up supplied terms.
    pub fn with_extensions(extensions: &VocabularyExtensions) -> Self {
        Self::from_pipelines(Language::SUPPORTED.into_iter().map(|lang| {
            let mut vocabulary = SkillVocabulary::builtin(lang);
            vocabulary.extend(extensions.for_language(lang));
            info!(
                "Skill pipeline '{lang}' loaded with {} vocabulary entries",
                vocabulary.len()
            );
            LanguagePipeline::new(lang, vocabulary)
        }))
    }

    pub fn from_pipelines<I: IntoIterator<Item = LanguagePipeline>>(pipelines: I) -> Self {
        Self {
            pipelines: pipelines.into_iter().map(|p| (p.language(), p)).collect(),
        }
    }

    pub fn get(&self, lang: Language) -> Option<&LanguagePipeline> {
        self.pipelines.get(&lang)
    }
}
