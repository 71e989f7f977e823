//! Keyword aggregation — merges lexical and skill keywords into one bounded set.
//!
//! Tie-break: the first occurrence in lexical-then-skill order wins, and
//! truncation keeps the first `top_k` entries of that same order. Lexical rank
//! therefore outranks skill rank when the merged set is too large.

use crate::keywords::{normalize, Keyword, KeywordSet};

pub fn aggregate(lexical: &[Keyword], skills: &[Keyword], top_k: usize) -> KeywordSet {
    let mut merged: KeywordSet = lexical
        .iter()
        .chain(skills.iter())
        .map(|k| Keyword {
            text: normalize(&k.text),
            ..k.clone()
        })
        .collect();
    merged.truncate(top_k);
    merged
}
