use lazy_static::lazy_static;
use regex::Regex;
use tracing::warn;


#[derive(Debug, Clone)]
pub struct MultiwordRule {
    pattern: Regex,
    replacement: String,
}

impl MultiwordRule {
    /// `pattern` is matched case-insensitively.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&format!("(?i){pattern}"))?,
            replacement: replacement.to_string(),
        })
    }

    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, regex::NoExpand(&self.replacement))
            .into_owned()
    }
}

lazy_static! {
    static ref DEFAULT_RULES: Vec<MultiwordRule> = [
        (r"smart phones?", "smartphone"),
        (r"running shoes?", "sports shoes"),
        (r"t-?shirts?", "shirts"),
        (r"ear ?phones?", "earphone"),
        (r"ear ?buds?", "earphone"),
        (r"head ?phones?", "earphone"),
        (r"wrist ?watch(?:es)?", "watches"),
        (r"smart ?watch(?:es)?", "watches"),
        (r"lap ?tops?", "laptop"),
    ]
    .iter()
    .filter_map(|(pattern, replacement)| match MultiwordRule::new(pattern, replacement) {
        Ok(rule) => Some(rule),
        Err(e) => {
            warn!("Invalid multiword rule '{}': {}", pattern, e);
            None
        }
    })
    .collect();
}


/// Lowercases a query and rewrites multi-word phrases into single tokens.
///
/// Rules run in declared order and each one sees the output of the previous
/// rule, so a later rule can match text an earlier rule produced.
#[derive(Debug, Clone)]
pub struct MultiwordNormalizer {
    rules: Vec<MultiwordRule>,
}

impl MultiwordNormalizer {
    pub fn new(rules: Vec<MultiwordRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[MultiwordRule] {
        &self.rules
    }

    pub fn normalize(&self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        self.rules
            .iter()
            .fold(lowered, |text, rule| rule.apply(&text))
    }
}

impl Default for MultiwordNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_RULES.clone())
    }
}


pub fn normalize(raw: &str) -> String {
    MultiwordNormalizer::default().normalize(raw)
}
