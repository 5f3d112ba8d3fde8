use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use serde::Serialize;

use super::stopwords::is_english_stop_word;

lazy_static! {
    // Words (allowing inner ' & - + joiners such as "h&m") or single
    // non-space symbols.
    static ref TOKEN_PATTERN: Option<Regex> =
        Regex::new(r"[\p{L}\p{N}]+(?:['&+\-][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]").ok();

    static ref NUMBER_WORDS: Vec<&'static str> = vec![
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
        "hundred", "thousand", "lakh", "million",
    ];
}


/// Base-form reduction used for plural/singular-robust category matching.
pub trait Lemmatizer: Send + Sync {
    fn lemma(&self, word: &str) -> String;
}


/// Porter2 (Snowball English) stemming as the lemma source. Multi-word
/// terms are reduced word by word.
pub struct PorterLemmatizer {
    stemmer: Stemmer,
}

impl PorterLemmatizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for PorterLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lemmatizer for PorterLemmatizer {
    fn lemma(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        lowered
            .split_whitespace()
            .map(|part| self.stemmer.stem(part).into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}


#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub lemma: String,
    pub is_stop: bool,
    pub is_punct: bool,
    pub is_numeric: bool,
}

impl Token {
    pub fn is_skippable(&self) -> bool {
        self.is_stop || self.is_punct || self.is_numeric
    }
}


/// Splits normalized query text into annotated tokens, in order.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}


pub struct RegexTokenizer {
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl RegexTokenizer {
    pub fn new(lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        Self { lemmatizer }
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let Some(pattern) = TOKEN_PATTERN.as_ref() else {
            return Vec::new();
        };
        pattern
            .find_iter(text)
            .map(|m| {
                let raw = m.as_str().to_lowercase();
                let is_punct = !raw.chars().any(char::is_alphanumeric);
                let is_numeric = !is_punct && like_number(&raw);
                let lemma = if is_punct || is_numeric {
                    raw.clone()
                } else {
                    self.lemmatizer.lemma(&raw)
                };
                Token {
                    is_stop: is_english_stop_word(&raw),
                    lemma,
                    text: raw,
                    is_punct,
                    is_numeric,
                }
            })
            .collect()
    }
}

fn like_number(text: &str) -> bool {
    let digits_only = text
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == ',');
    (digits_only && text.chars().any(|c| c.is_ascii_digit()))
        || NUMBER_WORDS.iter().any(|word| *word == text)
}
