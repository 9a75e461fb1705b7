use crate::error::{AppError, AppResult};

/// Value stored for a movie the user has not rated
pub const UNRATED: i32 = 0;

/// Dense users x movies table of integer ratings
///
/// Row index is the user id, column index is the movie id. A rating of
/// [`UNRATED`] (`0`) means "no data"; it cannot be told apart from an actual
/// zero rating, so the scale is assumed to start at 1.
///
/// Rows are expected to have equal length. This is not enforced on
/// construction; the similarity and prediction entry points check it and
/// report [`AppError::DimensionMismatch`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingMatrix {
    rows: Vec<Vec<i32>>,
}

impl RatingMatrix {
    /// Creates a matrix from per-user rating rows
    pub fn new(rows: Vec<Vec<i32>>) -> Self {
        Self { rows }
    }

    /// Number of users (rows)
    pub fn user_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of movies, taken from the first row (0 for an empty matrix)
    pub fn movie_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in user order
    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// Ratings of a single user
    pub fn row(&self, user: usize) -> AppResult<&[i32]> {
        self.rows
            .get(user)
            .map(Vec::as_slice)
            .ok_or_else(|| AppError::user_out_of_range(user, self.rows.len()))
    }

    /// Number of movies the user has not rated yet
    pub fn unrated_count(&self, user: usize) -> AppResult<usize> {
        Ok(self.row(user)?.iter().filter(|&&r| r == UNRATED).count())
    }
}

impl From<Vec<Vec<i32>>> for RatingMatrix {
    fn from(rows: Vec<Vec<i32>>) -> Self {
        Self::new(rows)
    }
}
