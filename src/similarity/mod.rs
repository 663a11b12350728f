pub mod scoring;

use rayon::prelude::*;

use crate::{
    error::{Error, Result},
    token::Tokenize,
    utils::math::cosine_similarity,
    vectorizer::{idf, tf, TfIdf},
};

pub use scoring::Hits;

/// Cosine similarity of a query against a corpus
///
/// Holds one tokenizer and one vectorizer. Any pair implementing
/// [`Tokenize`] and [`TfIdf`] can be plugged in.
///
/// Nothing is cached: each call recomputes vocabulary, TF, IDF and TF-IDF
/// for the whole corpus.
///
/// # Examples
/// ```
/// use tf_idf_similarity::{CosineSimilarity, TfIdfVectorizer, Tokenizer};
/// let engine = CosineSimilarity::new(Tokenizer::lowercase(), TfIdfVectorizer::new());
/// let scores = engine.score("apple banana", &["apple orange", "banana grape"]).unwrap();
/// assert!((scores[0] - 0.5).abs() < 1e-9);
/// assert!((scores[1] - 0.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct CosineSimilarity<T, V>
where
    T: Tokenize,
    V: TfIdf,
{
    tokenizer: T,
    vectorizer: V,
}

impl<T, V> CosineSimilarity<T, V>
where
    T: Tokenize + Sync,
    V: TfIdf + Sync,
{
    pub fn new(tokenizer: T, vectorizer: V) -> Self {
        Self { tokenizer, vectorizer }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn vectorizer(&self) -> &V {
        &self.vectorizer
    }

    /// Similarity of `query` to each document, in document order
    ///
    /// Query terms missing from the corpus vocabulary are dropped.
    /// A query or document with no known term scores 0.0.
    ///
    /// # Errors
    /// Any tokenizer or vectorizer error, unchanged. An empty corpus, or a
    /// vectorizer returning no row for the query, fails with `Error::EmptyInput`.
    pub fn score<S>(&self, query: &str, documents: &[S]) -> Result<Vec<f64>>
    where
        S: AsRef<str> + Sync,
    {
        let documents: Vec<&str> = documents.iter().map(|doc| doc.as_ref()).collect();
        let (vocabulary, doc_tokens) = self.tokenizer.tokenize(&documents)?;
        let tf_mat = tf(&vocabulary, &doc_tokens);
        let idf_vec = idf(&vocabulary, &doc_tokens, true);
        let doc_vecs = self.vectorizer.tf_idf(&tf_mat, &idf_vec)?;

        // the query's own vocabulary is irrelevant, columns follow the corpus
        let (_, query_tokens) = self.tokenizer.tokenize(&[query])?;
        let query_tf = tf(&vocabulary, &query_tokens);
        let query_vec = self
            .vectorizer
            .tf_idf(&query_tf, &idf_vec)?
            .into_iter()
            .next()
            .ok_or(Error::EmptyInput)?;

        let scores: Vec<f64> = doc_vecs
            .par_iter()
            .map(|doc_vec| cosine_similarity(&query_vec, doc_vec))
            .collect();
        tracing::debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "scored query against corpus"
        );
        Ok(scores)
    }

    /// Same as [`score`](Self::score), ranked by descending similarity
    pub fn rank<S>(&self, query: &str, documents: &[S]) -> Result<Hits>
    where
        S: AsRef<str> + Sync,
    {
        let scores = self.score(query, documents)?;
        let mut hits = Hits::from_scores(&scores);
        hits.sort_by_score();
        Ok(hits)
    }
}
