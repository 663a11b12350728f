//! This crate turns a document collection into TF-IDF vectors and scores a
//! query against it by cosine similarity.

pub mod error;
pub mod token;
pub mod vectorizer;
pub mod similarity;
pub mod utils;

/// Error type and result alias
/// Every failure of the pipeline is one of:
/// - `EmptyInput`: the TF matrix has no rows
/// - `ShapeMismatch`: a TF row does not match the IDF length
/// - `InvalidConfig`: unknown normalization level
/// - `Pattern`: invalid token pattern
pub use error::{Error, Result};

/// Tokenizers
/// `Tokenizer` scans for runs of two or more Unicode letters (category L).
/// `PatternTokenizer` extracts regex matches, `(?i)\p{L}{2,}` by default.
///
/// Both take an optional normalization function applied to every token
/// (e.g. lowercasing), and both produce a vocabulary that is deduplicated and
/// sorted by code point.
pub use token::{PatternTokenizer, TokenNormalizer, Tokenize, Tokenizer};

/// Term frequency
/// `tf` builds the raw `[documents][vocabulary]` count matrix.
pub use vectorizer::{tf, TermCounts};

/// Inverse document frequency
/// `idf` scores term rarity across the corpus, with or without add-one smoothing.
pub use vectorizer::idf;

/// TF-IDF Vectorizer
/// Multiplies TF by IDF and normalizes each row (`None`, `L1`, or `L2`,
/// L2 by default). The `TfIdf` trait lets other weighting strategies plug into
/// `CosineSimilarity`.
pub use vectorizer::{Matrix, NormalizationLevel, TfIdf, TfIdfVectorizer, VectorizerConfig};

/// Cosine similarity engine
/// Scores a query against a corpus using any `Tokenize` + `TfIdf` pair.
/// `Hits` holds ranked results.
pub use similarity::{CosineSimilarity, Hits};

/// cos(θ) between two vectors, 0.0 when either has zero length
pub use utils::math::cosine_similarity;
