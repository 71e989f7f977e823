//! Keyword model shared by every extractor, plus the lexical extractor and the aggregator.

use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

pub mod aggregate;
pub mod lexical;
pub mod stopwords;
pub mod tokenizer;

/// Lowercases, trims, and collapses internal whitespace runs to a single space.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Which extractor (or caller) produced a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordSource {
    Lexical,
    Skill,
    Supplied,
}

/// A normalized keyword. Equality and hashing use `text` only, so the same
/// string from two different extractors is the same keyword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    /// Higher is better, 0.0 – 1.0. `None` for caller-supplied keywords.
    pub score: Option<f32>,
    pub source: KeywordSource,
}

impl Keyword {
    pub fn new(text: &str, source: KeywordSource) -> Self {
        Self {
            text: normalize(text),
            score: None,
            source,
        }
    }

    pub fn scored(text: &str, score: f32, source: KeywordSource) -> Self {
        Self {
            text: normalize(text),
            score: Some(score),
            source,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl PartialEq for Keyword {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Keyword {}

impl Hash for Keyword {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Unique keywords in first-insertion order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct KeywordSet {
    keywords: Vec<Keyword>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl KeywordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a keyword unless an equal (or empty) one is present. Returns `true` on insert.
    pub fn insert(&mut self, keyword: Keyword) -> bool {
        if keyword.is_empty() || self.seen.contains(&keyword.text) {
            return false;
        }
        self.seen.insert(keyword.text.clone());
        self.keywords.push(keyword);
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(&normalize(text))
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Keeps the first `limit` keywords.
    pub fn truncate(&mut self, limit: usize) {
        for dropped in self.keywords.drain(limit.min(self.keywords.len())..) {
            self.seen.remove(&dropped.text);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Keyword> + '_ {
        self.keywords.iter()
    }

    pub fn texts(&self) -> Vec<String> {
        self.keywords.iter().map(|k| k.text.clone()).collect()
    }

    pub fn into_vec(self) -> Vec<Keyword> {
        self.keywords
    }
}

impl PartialEq for KeywordSet {
    fn eq(&self, other: &Self) -> bool {
        self.keywords.len() == other.keywords.len()
            && self.keywords.iter().zip(&other.keywords).all(|(a, b)| a == b)
    }
}

impl FromIterator<Keyword> for KeywordSet {
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        let mut set = KeywordSet::new();
        for keyword in iter {
            set.insert(keyword);
        }
        set
    }
}
