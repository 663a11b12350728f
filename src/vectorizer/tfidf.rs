use std::{fmt, str::FromStr};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    utils::normalizer::{l1_normalize, l2_normalize},
    vectorizer::Matrix,
};

/// Per-row normalization applied after weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NormalizationLevel {
    /// Raw TF-IDF scores
    None,
    /// Sum of absolute values becomes 1
    L1,
    /// Euclidean length becomes 1, the natural choice for cosine similarity
    #[default]
    L2,
}

impl NormalizationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationLevel::None => "none",
            NormalizationLevel::L1 => "l1",
            NormalizationLevel::L2 => "l2",
        }
    }

    /// Normalize one row in place
    #[inline]
    pub fn apply(&self, row: &mut [f64]) {
        match self {
            NormalizationLevel::None => {}
            NormalizationLevel::L1 => l1_normalize(row),
            NormalizationLevel::L2 => l2_normalize(row),
        }
    }
}

impl fmt::Display for NormalizationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NormalizationLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "no" => Ok(NormalizationLevel::None),
            "l1" => Ok(NormalizationLevel::L1),
            "l2" => Ok(NormalizationLevel::L2),
            other => Err(Error::InvalidConfig(format!("unknown normalization level `{other}`"))),
        }
    }
}

impl TryFrom<String> for NormalizationLevel {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Numeric codes: 0 = none, 1 = l1, 2 = l2
impl TryFrom<u8> for NormalizationLevel {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            0 => Ok(NormalizationLevel::None),
            1 => Ok(NormalizationLevel::L1),
            2 => Ok(NormalizationLevel::L2),
            other => Err(Error::InvalidConfig(format!("unknown normalization level code {other}"))),
        }
    }
}

impl From<NormalizationLevel> for String {
    fn from(level: NormalizationLevel) -> Self {
        level.as_str().to_string()
    }
}

/// Vectorizer configuration
/// Fixed at construction, immutable afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    pub norm: NormalizationLevel,
}

/// TF-IDF weighting capability
pub trait TfIdf {
    /// Weight a TF matrix by an IDF vector and normalize each row
    ///
    /// # Arguments
    /// * `tf` - `[documents][terms]`
    /// * `idf` - `[terms]`
    ///
    /// # Errors
    /// * `Error::EmptyInput` - `tf` has no rows
    /// * `Error::ShapeMismatch` - a row length differs from `idf.len()`
    fn tf_idf(&self, tf: &[Vec<f64>], idf: &[f64]) -> Result<Matrix>;
}

/// Default TF-IDF vectorizer
/// `tfidf[i][j] = tf[i][j] * idf[j]`, then each row is normalized on its own
///
/// # Examples
/// ```
/// use tf_idf_similarity::{NormalizationLevel, TfIdf, TfIdfVectorizer};
/// let vectorizer = TfIdfVectorizer::with_norm(NormalizationLevel::None);
/// let m = vectorizer.tf_idf(&[vec![1.0, 2.0], vec![3.0, 4.0]], &[1.0, 0.5]).unwrap();
/// assert_eq!(m, vec![vec![1.0, 1.0], vec![3.0, 2.0]]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
}

impl TfIdfVectorizer {
    /// L2 normalizing vectorizer
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_norm(norm: NormalizationLevel) -> Self {
        Self::from_config(VectorizerConfig { norm })
    }

    pub fn from_config(config: VectorizerConfig) -> Self {
        Self { config }
    }

    /// Build from a level name such as `"l1"`
    ///
    /// # Errors
    /// * `Error::InvalidConfig` - the name is not a known level
    pub fn from_level_name(name: &str) -> Result<Self> {
        Ok(Self::with_norm(name.parse()?))
    }

    pub fn norm(&self) -> NormalizationLevel {
        self.config.norm
    }

    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    fn check_shape(tf: &[Vec<f64>], idf: &[f64]) -> Result<()> {
        if tf.is_empty() {
            return Err(Error::EmptyInput);
        }
        match tf.iter().position(|row| row.len() != idf.len()) {
            Some(row) => Err(Error::ShapeMismatch {
                row,
                expected: idf.len(),
                found: tf[row].len(),
            }),
            None => Ok(()),
        }
    }
}

impl TfIdf for TfIdfVectorizer {
    fn tf_idf(&self, tf: &[Vec<f64>], idf: &[f64]) -> Result<Matrix> {
        Self::check_shape(tf, idf)?;
        let norm = self.config.norm;
        Ok(tf
            .par_iter()
            .map(|tf_row| {
                let mut row: Vec<f64> = tf_row.iter().zip(idf).map(|(t, w)| t * w).collect();
                norm.apply(&mut row);
                row
            })
            .collect())
    }
}
