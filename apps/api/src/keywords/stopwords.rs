//! Per-language stop word lists.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::language::Language;

static ENGLISH: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
        "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
        "each", "etc", "few", "for", "from", "further", "had", "has", "have", "having", "he",
        "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it", "its",
        "just", "least", "like", "looking", "made", "make", "many", "may", "me", "more", "most",
        "must", "my", "need", "new", "no", "nor", "not", "of", "off", "on", "once", "one",
        "only", "or", "other", "our", "ours", "out", "over", "own", "plus", "same", "seeking",
        "she", "should", "so", "some", "such", "than", "that", "the", "their", "them", "then",
        "there", "these", "they", "this", "those", "through", "to", "too", "under", "until",
        "up", "us", "use", "used", "using", "very", "was", "we", "well", "were", "what", "when",
        "where", "which", "while", "who", "whom", "why", "will", "with", "within", "work",
        "would", "years", "you", "your", "yours",
    ]
    .into_iter()
    .collect()
});

static GERMAN: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "aber", "alle", "allem", "allen", "aller", "als", "also", "am", "an", "ander", "andere",
        "anderen", "auch", "auf", "aus", "bei", "bin", "bis", "bist", "da", "damit", "dann",
        "das", "dass", "dein", "dem", "den", "der", "des", "dich", "die", "dies", "diese",
        "dieser", "dir", "doch", "dort", "du", "durch", "ein", "eine", "einem", "einen", "einer",
        "eines", "er", "es", "etwas", "euch", "für", "gegen", "gibt", "habe", "haben", "hat",
        "hier", "hin", "ich", "ihr", "ihre", "im", "in", "indem", "ins", "ist", "jede", "jeder",
        "jetzt", "kann", "kein", "keine", "können", "man", "mehr", "mein", "mich", "mir", "mit",
        "muss", "nach", "nicht", "nichts", "noch", "nur", "ob", "oder", "ohne", "sehr", "sein",
        "sich", "sie", "sind", "so", "solche", "sollte", "sondern", "sowie", "suchen", "um",
        "und", "uns", "unser", "unter", "viel", "vom", "von", "vor", "wann", "war", "was",
        "weil", "welche", "wenn", "werden", "wie", "wir", "wird", "wo", "zu", "zum", "zur",
        "über",
    ]
    .into_iter()
    .collect()
});

/// Returns the stop word set for a language.
pub fn stopwords(lang: Language) -> &'static HashSet<&'static str> {
    match lang {
        Language::English => &ENGLISH,
        Language::German => &GERMAN,
    }
}
