use regex::Regex;

use crate::error::Result;

use super::{tokenize_corpus, TokenNormalizer, Tokenize};

/// Two or more Unicode letters, case-insensitive
pub const DEFAULT_TOKEN_PATTERN: &str = r"(?i)\p{L}{2,}";

/// Regex-driven tokenizer
/// Every non-overlapping match of the pattern is a token.
/// The pattern is compiled once, at construction.
#[derive(Debug, Clone)]
pub struct PatternTokenizer {
    pattern: Regex,
    normalizer: TokenNormalizer,
}

impl PatternTokenizer {
    /// Compile `pattern` into a tokenizer
    ///
    /// # Errors
    /// * `Error::Pattern` - the pattern is not a valid regular expression
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            normalizer: TokenNormalizer::default(),
        })
    }

    pub fn with_normalizer(mut self, normalizer: TokenNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_normalize_fn<F>(self, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.with_normalizer(TokenNormalizer::new(func))
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Tokens of a single document, normalized
    pub fn split(&self, doc: &str) -> Vec<String> {
        self.pattern
            .find_iter(doc)
            .map(|m| self.normalizer.apply(m.as_str()))
            .collect()
    }
}

impl Default for PatternTokenizer {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_TOKEN_PATTERN).expect("default token pattern compiles"),
            normalizer: TokenNormalizer::default(),
        }
    }
}

impl Tokenize for PatternTokenizer {
    fn tokenize(&self, documents: &[&str]) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        Ok(tokenize_corpus(documents, |doc| self.split(doc)))
    }
}
