use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    // General English function words. Product vocabulary ("top", "front",
    // "back", "full") is deliberately absent.
    pub static ref ENGLISH_STOP_WORDS: HashSet<&'static str> = [
        "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as",
        "at", "be", "been", "before", "being", "both", "but", "by", "could", "did", "do",
        "does", "doing", "each", "few", "from", "further", "had", "has", "have", "having",
        "he", "her", "here", "hers", "him", "his", "how", "i", "if", "in", "into", "is", "it",
        "its", "itself", "just", "me", "might", "mine", "more", "most", "much", "must", "my",
        "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
        "our", "ours", "out", "own", "same", "she", "should", "so", "such", "than", "that",
        "the", "their", "them", "then", "there", "these", "they", "this", "those", "through",
        "to", "too", "under", "until", "up", "upon", "very", "was", "we", "were", "what",
        "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
        "you", "your", "yours", "yourself", "above", "below", "between", "over", "within",
        "for", "less", "many", "some", "via", "per",
    ]
    .into_iter()
    .collect();

    // Shopping-query filler that carries no product signal. Checked in
    // addition to the tokenizer's stop-word flag so "me" never fuzzes into
    // "men" and "sugges" never into a brand.
    pub static ref QUERY_STOP_WORDS: HashSet<&'static str> = [
        "suggest", "sugges", "suggested", "suggestion", "show", "tell", "find", "give",
        "want", "need", "looking", "for", "me", "i", "a", "an", "the", "some", "thsi",
        "this", "search", "please", "can", "you", "best", "good", "nice", "great",
        "buy", "purchase", "get", "price", "cheap", "rs", "inr", "upto", "greater", "less",
        "than", "under", "above", "below", "over", "between", "within",
    ]
    .into_iter()
    .collect();
}

pub fn is_english_stop_word(word: &str) -> bool {
    ENGLISH_STOP_WORDS.contains(word)
}

pub fn is_query_stop_word(word: &str) -> bool {
    QUERY_STOP_WORDS.contains(word)
}
