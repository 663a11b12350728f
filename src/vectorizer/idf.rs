use std::collections::HashSet;

use rayon::prelude::*;

/// Inverse document frequency of each vocabulary term
///
/// * smoothing: `ln((N + 1) / (df + 1)) + 1`
/// * no smoothing: `ln(N / df) + 1`, or `ln(N) + 1` when `df == 0`
///
/// `N` is the number of documents, `df` the number of documents holding the
/// term at least once. With no documents every weight is 1.0.
/// Every weight is strictly positive.
///
/// # Examples
/// ```
/// use tf_idf_similarity::idf;
/// let vocab = vec!["rare".to_string()];
/// let tokens = vec![vec!["the".to_string()], vec!["the".to_string()], vec!["rare".to_string()]];
/// let w = idf(&vocab, &tokens, false);
/// assert!((w[0] - (3.0_f64.ln() + 1.0)).abs() < 1e-12);
/// ```
pub fn idf(vocabulary: &[String], tokens: &[Vec<String>], smoothing: bool) -> Vec<f64> {
    let total = tokens.len();
    if total == 0 {
        return vec![1.0; vocabulary.len()];
    }

    // membership sets, one per document
    let doc_sets: Vec<HashSet<&str>> = tokens
        .par_iter()
        .map(|doc| doc.iter().map(String::as_str).collect())
        .collect();

    let n = total as f64;
    vocabulary
        .iter()
        .map(|term| {
            let df = doc_sets
                .iter()
                .filter(|set| set.contains(term.as_str()))
                .count();
            idf_calc(n, df, smoothing, term)
        })
        .collect()
}

#[inline]
fn idf_calc(n: f64, df: usize, smoothing: bool, term: &str) -> f64 {
    if smoothing {
        return ((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0;
    }
    if df == 0 {
        // vocabulary not drawn from this corpus
        tracing::debug!(term, "term absent from every document, using ln(N) + 1");
        return n.ln() + 1.0;
    }
    (n / df as f64).ln() + 1.0
}
