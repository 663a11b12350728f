use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;

use super::{tokenize_corpus, TokenNormalizer, Tokenize};

/// Minimum letter-run length (in chars) kept as a token
pub const MIN_TOKEN_CHARS: usize = 2;

/// Unicode general category L (Lu, Ll, Lt, Lm, Lo)
///
/// Narrower than `char::is_alphabetic`: letter numbers (Ⅻ), circled letters
/// (ⓐ) and combining or spacing marks are not letters here.
#[inline]
pub fn is_letter(ch: char) -> bool {
    static LETTER: OnceLock<Regex> = OnceLock::new();

    if ch.is_ascii() {
        return ch.is_ascii_alphabetic();
    }
    let letter = LETTER.get_or_init(|| Regex::new(r"\p{L}").expect("letter class compiles"));
    let mut buf = [0u8; 4];
    letter.is_match(ch.encode_utf8(&mut buf))
}

/// Scanning tokenizer
/// A token is a maximal run of Unicode letters (category L), at least two
/// chars long. Everything else separates tokens. Cannot fail.
///
/// # Examples
/// ```
/// use tf_idf_similarity::{Tokenize, Tokenizer};
/// let tokenizer = Tokenizer::lowercase();
/// let (vocab, tokens) = tokenizer.tokenize(&["This is a test", "THIS too"]).unwrap();
/// assert_eq!(vocab, vec!["is", "test", "this", "too"]);
/// assert_eq!(tokens[1], vec!["this", "too"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    normalizer: TokenNormalizer,
}

impl Tokenizer {
    /// Tokenizer without normalization
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenizer folding every token to lowercase
    pub fn lowercase() -> Self {
        Self::new().with_normalizer(TokenNormalizer::lowercase())
    }

    /// Set the normalization applied to each extracted token
    pub fn with_normalizer(mut self, normalizer: TokenNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Set a plain function as the normalization
    pub fn with_normalize_fn<F>(self, func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.with_normalizer(TokenNormalizer::new(func))
    }

    /// Tokens of a single document, normalized
    pub fn split(&self, doc: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        // (byte offset, char count) of the current letter run
        let mut run: Option<(usize, usize)> = None;
        for (idx, ch) in doc.char_indices() {
            if is_letter(ch) {
                run = match run {
                    Some((start, len)) => Some((start, len + 1)),
                    None => Some((idx, 1)),
                };
            } else if let Some((start, len)) = run.take() {
                self.push_run(&mut tokens, &doc[start..idx], len);
            }
        }
        if let Some((start, len)) = run {
            self.push_run(&mut tokens, &doc[start..], len);
        }
        tokens
    }

    #[inline]
    fn push_run(&self, tokens: &mut Vec<String>, run: &str, char_len: usize) {
        if char_len >= MIN_TOKEN_CHARS {
            tokens.push(self.normalizer.apply(run));
        }
    }
}

impl Tokenize for Tokenizer {
    fn tokenize(&self, documents: &[&str]) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        Ok(tokenize_corpus(documents, |doc| self.split(doc)))
    }
}
