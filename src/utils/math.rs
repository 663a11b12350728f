use num::Float;

/// dot積
/// d(a, b) = Σ(a_i * b_i)
#[inline]
pub fn dot<N>(a: &[N], b: &[N]) -> N
where
    N: Float,
{
    debug_assert_eq!(a.len(), b.len(), "Vectors must be of the same length to compute dot product.");
    a.iter()
        .zip(b)
        .fold(N::zero(), |acc, (x, y)| acc + *x * *y)
}

/// Σ(a_i^2)
#[inline]
pub fn norm_sq<N>(a: &[N]) -> N
where
    N: Float,
{
    a.iter().fold(N::zero(), |acc, x| acc + *x * *x)
}

/// コサイン類似度
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// Exactly 0 when either vector has zero magnitude.
///
/// # Examples
/// ```
/// use tf_idf_similarity::cosine_similarity;
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
/// assert!((cosine_similarity(&[1.0_f64, 1.0], &[2.0, 2.0]) - 1.0).abs() < 1e-12);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
/// ```
pub fn cosine_similarity<N>(a: &[N], b: &[N]) -> N
where
    N: Float,
{
    let norm_a = norm_sq(a);
    let norm_b = norm_sq(b);
    if norm_a == N::zero() || norm_b == N::zero() {
        return N::zero();
    }
    dot(a, b) / (norm_a.sqrt() * norm_b.sqrt())
}
