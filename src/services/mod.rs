pub mod prediction;
pub mod ratings_source;
pub mod recommendations;
pub mod report;
pub mod similarity;

pub use prediction::predict_rating;
pub use ratings_source::{parse_ratings, CsvFileSource, RatingsSource};
pub use recommendations::{recommend_from_source, recommend_movies, Recommender};
pub use similarity::{cosine_similarity, user_similarities, SIMILARITY_EPSILON};
