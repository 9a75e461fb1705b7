use std::time::Instant;

use crate::{
    error::AppResult,
    models::{RatingMatrix, Recommendation, RecommendationRequest, UNRATED},
    services::{
        prediction::predict_rating, ratings_source::RatingsSource,
        similarity::user_similarities,
    },
};

/// User-based collaborative filtering over a rating matrix
pub struct Recommender<'a> {
    matrix: &'a RatingMatrix,
}

impl<'a> Recommender<'a> {
    /// Creates a recommender borrowing the given matrix
    pub fn new(matrix: &'a RatingMatrix) -> Self {
        Self { matrix }
    }

    /// Recommends up to `top_n` movies the target user has not rated
    ///
    /// Similarities are computed once, then every unrated movie gets a
    /// predicted rating. Results are ordered by predicted rating descending,
    /// ties by movie index ascending, and truncated to `top_n`.
    pub fn recommend(&self, request: &RecommendationRequest) -> AppResult<Vec<Recommendation>> {
        let target = self.matrix.row(request.target_user)?;
        let similarities = user_similarities(self.matrix, request.target_user)?;

        let mut recommendations = target
            .iter()
            .enumerate()
            .filter(|(_, &rating)| rating == UNRATED)
            .map(|(movie, _)| {
                predict_rating(self.matrix, request.target_user, movie, &similarities)
                    .map(|predicted| Recommendation::new(movie, predicted))
            })
            .collect::<AppResult<Vec<_>>>()?;

        // Candidates are already in movie order; a stable sort keeps ties that way
        recommendations.sort_by(|a, b| b.predicted_rating.total_cmp(&a.predicted_rating));
        recommendations.truncate(request.top_n);

        Ok(recommendations)
    }
}

/// Recommends movies for a single target user
pub fn recommend_movies(
    matrix: &RatingMatrix,
    target_user: usize,
    top_n: usize,
) -> AppResult<Vec<Recommendation>> {
    Recommender::new(matrix).recommend(&RecommendationRequest::new(target_user, top_n))
}

/// Loads the rating matrix from a source and runs the recommender on it
pub async fn recommend_from_source(
    source: &dyn RatingsSource,
    request: RecommendationRequest,
) -> AppResult<Vec<Recommendation>> {
    let start = Instant::now();

    let matrix = source.load().await?;

    tracing::info!(
        source = source.name(),
        users = matrix.user_count(),
        movies = matrix.movie_count(),
        "Rating matrix loaded"
    );

    let recommendations = Recommender::new(&matrix).recommend(&request)?;

    tracing::info!(
        target_user = request.target_user,
        top_n = request.top_n,
        returned = recommendations.len(),
        processing_time_ms = start.elapsed().as_millis(),
        "Recommendations computed"
    );

    Ok(recommendations)
}
