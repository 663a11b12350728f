pub mod term;
pub mod idf;
pub mod tfidf;

pub use idf::idf;
pub use term::{tf, TermCounts};
pub use tfidf::{NormalizationLevel, TfIdf, TfIdfVectorizer, VectorizerConfig};

/// Dense `[documents][terms]` matrix
pub type Matrix = Vec<Vec<f64>>;
