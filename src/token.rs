pub mod scan;
pub mod pattern;

use std::{fmt::Debug, sync::Arc};

use indexmap::IndexSet;
use rayon::prelude::*;

use crate::error::Result;

pub use pattern::PatternTokenizer;
pub use scan::Tokenizer;

/// Token normalization function (e.g. case folding)
/// Applied to every extracted token, never changes token boundaries
pub type NormalizeFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Tokenization capability
/// Turns a corpus into its sorted vocabulary and one token sequence per document
///
/// Object safe, so a tokenizer can be picked at runtime as `Box<dyn Tokenize>`.
pub trait Tokenize {
    /// # Arguments
    /// * `documents` - raw documents, identified by position
    ///
    /// # Returns
    /// * `Vec<String>` - vocabulary, deduplicated and sorted by code point
    /// * `Vec<Vec<String>>` - tokens of each document, in document order
    fn tokenize(&self, documents: &[&str]) -> Result<(Vec<String>, Vec<Vec<String>>)>;
}

impl<T> Tokenize for Box<T>
where
    T: Tokenize + ?Sized,
{
    fn tokenize(&self, documents: &[&str]) -> Result<(Vec<String>, Vec<Vec<String>>)> {
        (**self).tokenize(documents)
    }
}

/// Optional normalization step shared by every tokenizer
#[derive(Clone, Default)]
pub struct TokenNormalizer {
    func: Option<NormalizeFn>,
}

impl TokenNormalizer {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self { func: Some(Arc::new(func)) }
    }

    /// Unicode lowercase
    pub fn lowercase() -> Self {
        Self::new(|s| s.to_lowercase())
    }

    pub fn is_identity(&self) -> bool {
        self.func.is_none()
    }

    #[inline]
    pub fn apply(&self, token: &str) -> String {
        match &self.func {
            Some(func) => func(token),
            None => token.to_string(),
        }
    }
}

impl Debug for TokenNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.func.is_some() {
            write!(f, "TokenNormalizer(fn)")
        } else {
            write!(f, "TokenNormalizer(identity)")
        }
    }
}

/// Run a per-document splitter over the corpus and build the vocabulary
/// Documents are independent, so they are split in parallel; order is kept
pub(crate) fn tokenize_corpus<F>(documents: &[&str], split: F) -> (Vec<String>, Vec<Vec<String>>)
where
    F: Fn(&str) -> Vec<String> + Sync,
{
    let tokens: Vec<Vec<String>> = documents
        .par_iter()
        .map(|&doc| split(doc))
        .collect();
    let vocab = vocabulary(&tokens);
    tracing::trace!(documents = documents.len(), vocabulary = vocab.len(), "tokenized corpus");
    (vocab, tokens)
}

/// Unique tokens across all documents, sorted ascending by code point
///
/// # Examples
/// ```
/// use tf_idf_similarity::token::vocabulary;
/// let tokens = vec![
///     vec!["this".to_string(), "is".to_string(), "good".to_string()],
///     vec!["also".to_string(), "this".to_string(), "can".to_string()],
/// ];
/// assert_eq!(vocabulary(&tokens), vec!["also", "can", "good", "is", "this"]);
/// ```
pub fn vocabulary(tokens: &[Vec<String>]) -> Vec<String> {
    let mut terms: IndexSet<&str> = tokens
        .iter()
        .flat_map(|doc| doc.iter().map(String::as_str))
        .collect();
    // UTF-8 byte order == code point order
    terms.sort_unstable();
    terms.into_iter().map(str::to_string).collect()
}
