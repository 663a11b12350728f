use num::Float;

/// 行ベクトルをL1正規化する (絶対値の和を1にする)
/// An all-zero row is left as is
#[inline]
pub fn l1_normalize<N>(vec: &mut [N])
where
    N: Float,
{
    let norm = vec.iter().fold(N::zero(), |acc, v| acc + v.abs());
    scale_by(vec, norm);
}

/// 行ベクトルをL2正規化する (ユークリッド長を1にする)
/// An all-zero row is left as is
#[inline]
pub fn l2_normalize<N>(vec: &mut [N])
where
    N: Float,
{
    let norm = vec.iter().fold(N::zero(), |acc, v| acc + *v * *v).sqrt();
    scale_by(vec, norm);
}

#[inline]
fn scale_by<N>(vec: &mut [N], norm: N)
where
    N: Float,
{
    // 0/0 を避ける
    if norm == N::zero() {
        return;
    }
    for v in vec.iter_mut() {
        *v = *v / norm;
    }
}
