//! User-based collaborative filtering over a dense user x movie rating matrix.
//!
//! The core is three pure steps: cosine similarity of the target user against
//! every user, a similarity-weighted rating prediction for each movie the
//! target has not rated, and top-N selection of the highest predictions.
//!
//! ```
//! use movie_recommender::{models::RatingMatrix, services::recommend_movies};
//!
//! let matrix = RatingMatrix::new(vec![
//!     vec![5, 3, 0, 1],
//!     vec![4, 0, 0, 1],
//!     vec![0, 1, 5, 4],
//! ]);
//!
//! let recommendations = recommend_movies(&matrix, 0, 3).expect("user 0 exists");
//! assert_eq!(recommendations.len(), 1);
//! assert_eq!(recommendations[0].movie, 2);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::{AppError, AppResult};
