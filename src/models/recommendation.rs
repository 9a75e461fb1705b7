use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A movie suggested to the target user along with its predicted rating
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 0-based movie index (column of the rating matrix)
    pub movie: usize,
    pub predicted_rating: f64,
}

impl Recommendation {
    pub fn new(movie: usize, predicted_rating: f64) -> Self {
        Self {
            movie,
            predicted_rating,
        }
    }
}

/// Parameters of a single recommendation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    /// 0-based index of the user to recommend for
    pub target_user: usize,
    /// Maximum number of recommendations to return
    pub top_n: usize,
}

pub const DEFAULT_TARGET_USER: usize = 0;
pub const DEFAULT_TOP_N: usize = 3;

impl Default for RecommendationRequest {
    fn default() -> Self {
        Self {
            target_user: DEFAULT_TARGET_USER,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl RecommendationRequest {
    pub fn new(target_user: usize, top_n: usize) -> Self {
        Self { target_user, top_n }
    }
}

/// Result of one run as emitted by the JSON output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub target_user: usize,
    pub top_n: usize,
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    pub fn new(
        run_id: Uuid,
        request: RecommendationRequest,
        recommendations: Vec<Recommendation>,
    ) -> Self {
        Self {
            run_id,
            generated_at: Utc::now(),
            target_user: request.target_user,
            top_n: request.top_n,
            recommendations,
        }
    }
}
