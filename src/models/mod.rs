pub mod rating_matrix;
pub mod recommendation;

pub use rating_matrix::{RatingMatrix, UNRATED};
pub use recommendation::{
    Recommendation, RecommendationReport, RecommendationRequest, DEFAULT_TARGET_USER,
    DEFAULT_TOP_N,
};
