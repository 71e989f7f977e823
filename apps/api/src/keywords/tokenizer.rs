//! Sentence and word tokenization with per-language rules.
//!
//! Word boundaries follow UAX #29, with two adjustments: trailing `+`/`#` stay
//! attached to a word (`C++`, `C#`), and in German hyphenated compounds stay whole
//! (`Backend-Entwickler`).

use unicode_segmentation::UnicodeSegmentation;

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenRules {
    pub join_hyphenated: bool,
    pub keep_symbol_suffix: bool,
}

impl TokenRules {
    pub fn for_language(lang: Language) -> Self {
        match lang {
            Language::English => TokenRules {
                join_hyphenated: false,
                keep_symbol_suffix: true,
            },
            Language::German => TokenRules {
                join_hyphenated: true,
                keep_symbol_suffix: true,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface form as written.
    pub text: String,
    pub lower: String,
    /// Zero-based sentence index.
    pub sentence: usize,
}

/// Splits `text` into sentences and word tokens.
pub fn tokenize(text: &str, rules: TokenRules) -> Vec<Token> {
    let mut tokens = Vec::new();

    for (sentence_idx, sentence) in text.unicode_sentences().enumerate() {
        let mut current = String::new();
        let mut pending_hyphen = false;

        let flush = |current: &mut String, tokens: &mut Vec<Token>| {
            if current.is_empty() {
                return;
            }
            let text = std::mem::take(current);
            tokens.push(Token {
                lower: text.to_lowercase(),
                text,
                sentence: sentence_idx,
            });
        };

        for segment in sentence.split_word_bounds() {
            if segment.chars().any(char::is_alphanumeric) {
                if pending_hyphen && !current.is_empty() {
                    current.push('-');
                } else {
                    flush(&mut current, &mut tokens);
                }
                current.push_str(segment);
                pending_hyphen = false;
            } else if rules.keep_symbol_suffix
                && !current.is_empty()
                && !pending_hyphen
                && (segment == "+" || segment == "#")
            {
                current.push_str(segment);
            } else if rules.join_hyphenated && segment == "-" && !current.is_empty() && !pending_hyphen
            {
                pending_hyphen = true;
            } else {
                flush(&mut current, &mut tokens);
                pending_hyphen = false;
            }
        }
        flush(&mut current, &mut tokens);
    }

    tokens
}

/// Lowercased word tokens only, for phrase lookups.
pub fn words(text: &str, rules: TokenRules) -> Vec<String> {
    tokenize(text, rules).into_iter().map(|t| t.lower).collect()
}
