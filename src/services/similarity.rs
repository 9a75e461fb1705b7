use crate::{
    error::{AppError, AppResult},
    models::RatingMatrix,
};

/// Added to the cosine denominator so all-zero vectors yield 0 instead of NaN
pub const SIMILARITY_EPSILON: f64 = 1e-9;

/// Cosine similarity between two users' rating vectors
///
/// Unrated (`0`) entries take part in the dot product and the norms, so sparse
/// users come out less similar than their shared ratings alone would suggest.
pub fn cosine_similarity(a: &[i32], b: &[i32]) -> AppResult<f64> {
    if a.len() != b.len() {
        return Err(AppError::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    Ok(dot / (norm_a.sqrt() * norm_b.sqrt() + SIMILARITY_EPSILON))
}

/// Similarity of the target user against every user in matrix order,
/// the target itself included
pub fn user_similarities(matrix: &RatingMatrix, target_user: usize) -> AppResult<Vec<f64>> {
    let target = matrix.row(target_user)?;

    matrix
        .rows()
        .iter()
        .map(|other| cosine_similarity(target, other))
        .collect()
}
