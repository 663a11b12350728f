/// Errors returned by the vectorizer pipeline.
///
/// Every variant is raised synchronously at the point of use.
/// Nothing is retried or recovered internally.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The TF matrix handed to the vectorizer has no rows
    #[error("empty TF matrix")]
    EmptyInput,

    /// A TF row does not line up with the IDF vector
    #[error("TF matrix and IDF vector dimensions don't match: row {row} has {found} columns, IDF has {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Unrecognized configuration value (e.g. normalization level)
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Token pattern failed to compile
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
