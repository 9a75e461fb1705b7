use crate::{
    error::{AppError, AppResult},
    models::{RatingMatrix, UNRATED},
};

/// Predicts the target user's rating for a movie
///
/// The prediction is the average of the other users' ratings for the movie,
/// weighted by their similarity to the target. Users who have not rated the
/// movie are skipped. Returns exactly `0.0` when no rater carries any
/// similarity weight.
///
/// `similarities` must be aligned with the matrix rows, as produced by
/// [`user_similarities`](super::similarity::user_similarities).
pub fn predict_rating(
    matrix: &RatingMatrix,
    target_user: usize,
    movie: usize,
    similarities: &[f64],
) -> AppResult<f64> {
    let target = matrix.row(target_user)?;

    if movie >= target.len() {
        return Err(AppError::movie_out_of_range(movie, target.len()));
    }

    if similarities.len() != matrix.user_count() {
        return Err(AppError::DimensionMismatch {
            expected: matrix.user_count(),
            found: similarities.len(),
        });
    }

    let mut weighted_sum = 0.0_f64;
    let mut similarity_sum = 0.0_f64;

    for (other_user, (row, &similarity)) in matrix.rows().iter().zip(similarities).enumerate() {
        if other_user == target_user {
            continue;
        }

        if row.len() != target.len() {
            return Err(AppError::DimensionMismatch {
                expected: target.len(),
                found: row.len(),
            });
        }

        let rating = row[movie];
        if rating == UNRATED {
            continue;
        }

        weighted_sum += similarity * f64::from(rating);
        similarity_sum += similarity.abs();
    }

    if similarity_sum == 0.0 {
        return Ok(0.0);
    }

    Ok(weighted_sum / similarity_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndexKind;
    use crate::services::similarity::{cosine_similarity, user_similarities};

    fn sample_matrix() -> RatingMatrix {
        RatingMatrix::new(vec![vec![2, 1, 0], vec![2, 1, 4], vec![1, 2, 2]])
    }

    #[test]
    fn test_weighted_average_of_raters() {
        let matrix = sample_matrix();
        let sims = user_similarities(&matrix, 0).unwrap();

        let s1 = cosine_similarity(&[2, 1, 0], &[2, 1, 4]).unwrap();
        let s2 = cosine_similarity(&[2, 1, 0], &[1, 2, 2]).unwrap();
        let expected = (s1 * 4.0 + s2 * 2.0) / (s1 + s2);

        let predicted = predict_rating(&matrix, 0, 2, &sims).unwrap();
        assert!((predicted - expected).abs() < 1e-12);
        assert!(predicted > 2.0 && predicted < 4.0);
    }

    #[test]
    fn test_target_rating_is_ignored() {
        // Only user 1 is a peer; the target's own rating must not leak in
        let matrix = RatingMatrix::new(vec![vec![5, 1], vec![1, 1]]);
        let sims = user_similarities(&matrix, 0).unwrap();
        let predicted = predict_rating(&matrix, 0, 0, &sims).unwrap();
        assert!((predicted - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_no_raters_yields_zero() {
        let matrix = RatingMatrix::new(vec![vec![1, 0], vec![3, 0]]);
        let sims = user_similarities(&matrix, 0).unwrap();
        assert_eq!(predict_rating(&matrix, 0, 1, &sims).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_similarity_raters_yield_zero() {
        let matrix = RatingMatrix::new(vec![vec![1, 0], vec![0, 3]]);
        let sims = user_similarities(&matrix, 0).unwrap();
        assert_eq!(sims[1], 0.0);
        assert_eq!(predict_rating(&matrix, 0, 1, &sims).unwrap(), 0.0);
    }

    #[test]
    fn test_negative_similarity_uses_absolute_weight() {
        let matrix = RatingMatrix::new(vec![vec![1, 0, 0], vec![0, 4, 0], vec![0, 2, 0]]);
        let sims = vec![1.0, 0.5, -0.5];
        // (0.5 * 4 - 0.5 * 2) / (0.5 + 0.5)
        let predicted = predict_rating(&matrix, 0, 1, &sims).unwrap();
        assert!((predicted - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_target_user() {
        let matrix = sample_matrix();
        let err = predict_rating(&matrix, 3, 0, &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            AppError::OutOfRange {
                kind: IndexKind::User,
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_movie() {
        let matrix = sample_matrix();
        let err = predict_rating(&matrix, 0, 3, &[1.0, 1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            AppError::OutOfRange {
                kind: IndexKind::Movie,
                index: 3,
                len: 3
            }
        ));
    }

    #[test]
    fn test_misaligned_similarities() {
        let matrix = sample_matrix();
        let err = predict_rating(&matrix, 0, 2, &[1.0, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            AppError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_short_peer_row() {
        let matrix = RatingMatrix::new(vec![vec![1, 0, 0], vec![1, 2]]);
        let err = predict_rating(&matrix, 0, 1, &[1.0, 0.5]).unwrap_err();
        assert!(matches!(
            err,
            AppError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        ));
    }
}
