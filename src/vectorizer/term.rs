use indexmap::IndexMap;
use rayon::prelude::*;

use crate::vectorizer::Matrix;

/// Token occurrence counts of one document
/// Built in a single pass over its token sequence
#[derive(Debug, Clone, Default)]
pub struct TermCounts<'a> {
    counts: IndexMap<&'a str, u32>,
}

impl<'a> TermCounts<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every token of a document
    pub fn from_tokens<T>(tokens: &'a [T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut counts = Self::new();
        for token in tokens {
            counts.add(token.as_ref());
        }
        counts
    }

    #[inline]
    pub fn add(&mut self, token: &'a str) -> &mut Self {
        *self.counts.entry(token).or_insert(0) += 1;
        self
    }

    /// Occurrences of `token`, 0 when absent
    #[inline]
    pub fn count(&self, token: &str) -> u32 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Dense count row laid out along `vocabulary`
    pub fn row(&self, vocabulary: &[String]) -> Vec<f64> {
        vocabulary
            .iter()
            .map(|term| self.count(term) as f64)
            .collect()
    }
}

/// Raw term frequency matrix
///
/// # Arguments
/// * `vocabulary` - column order
/// * `tokens` - token sequence of each document
///
/// # Returns
/// * `Matrix` - `[documents][vocabulary]`, element `[i][j]` is the count of
///   `vocabulary[j]` in document `i`. Absent terms are exactly 0.
///
/// # Examples
/// ```
/// use tf_idf_similarity::tf;
/// let vocab = vec!["the".to_string(), "cat".to_string(), "sat".to_string()];
/// let tokens = vec![
///     vec!["the".to_string(), "cat".to_string(), "sat".to_string(), "the".to_string()],
/// ];
/// assert_eq!(tf(&vocab, &tokens), vec![vec![2.0, 1.0, 1.0]]);
/// ```
pub fn tf(vocabulary: &[String], tokens: &[Vec<String>]) -> Matrix {
    tokens
        .par_iter()
        .map(|doc| TermCounts::from_tokens(doc).row(vocabulary))
        .collect()
}
