//! Rating matrix sources
//!
//! A source yields the full users x movies table in one go. The CSV file
//! source is the production implementation; tests substitute mocked sources.

use std::path::{Path, PathBuf};

use crate::{
    error::{AppError, AppResult},
    models::RatingMatrix,
};

/// Trait for rating matrix providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RatingsSource: Send + Sync {
    /// Load the complete rating matrix
    async fn load(&self) -> AppResult<RatingMatrix>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Reads ratings from a comma-separated file, one line per user
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait::async_trait]
impl RatingsSource for CsvFileSource {
    async fn load(&self) -> AppResult<RatingMatrix> {
        let contents = tokio::fs::read_to_string(&self.path).await?;
        let matrix = parse_ratings(&contents)?;

        tracing::debug!(
            path = %self.path.display(),
            users = matrix.user_count(),
            movies = matrix.movie_count(),
            "Loaded ratings file"
        );

        Ok(matrix)
    }

    fn name(&self) -> &'static str {
        "csv_file"
    }
}

/// Parses CSV rating text into a matrix
///
/// No header row. Fields are trimmed and parsed as integers, `0` meaning
/// unrated. Blank lines are skipped. Rows are not checked for equal length.
pub fn parse_ratings(input: &str) -> AppResult<RatingMatrix> {
    let mut rows = Vec::new();

    for (line_idx, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split(',')
            .enumerate()
            .map(|(col_idx, field)| {
                let field = field.trim();
                field.parse::<i32>().map_err(|_| AppError::Parse {
                    line: line_idx + 1,
                    column: col_idx + 1,
                    value: field.to_string(),
                })
            })
            .collect::<AppResult<Vec<i32>>>()?;

        rows.push(row);
    }

    Ok(RatingMatrix::new(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ratings() {
        let matrix = parse_ratings("5,3,0,1\n4,0,0,1\n").unwrap();
        assert_eq!(
            matrix,
            RatingMatrix::new(vec![vec![5, 3, 0, 1], vec![4, 0, 0, 1]])
        );
    }

    #[test]
    fn test_parse_trims_whitespace_and_crlf() {
        let matrix = parse_ratings(" 5, 3 ,0\r\n1,1,1\r\n").unwrap();
        assert_eq!(matrix.rows(), &[vec![5, 3, 0], vec![1, 1, 1]]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let matrix = parse_ratings("1,2\n\n   \n3,4").unwrap();
        assert_eq!(matrix.user_count(), 2);
    }

    #[test]
    fn test_parse_empty_input() {
        let matrix = parse_ratings("").unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_parse_keeps_ragged_rows() {
        let matrix = parse_ratings("1,2,3\n4,5").unwrap();
        assert_eq!(matrix.rows()[1].len(), 2);
    }

    #[test]
    fn test_parse_error_location() {
        let err = parse_ratings("1,2,3\n4,five,6\n").unwrap_err();
        match err {
            AppError::Parse {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(value, "five");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_empty_field() {
        let err = parse_ratings("1,,3").unwrap_err();
        assert!(matches!(err, AppError::Parse { column: 2, .. }));
    }

    #[tokio::test]
    async fn test_csv_source_reads_file() {
        let path = std::env::temp_dir().join(format!("ratings-{}.csv", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, "5,3,0,1\n0,1,5,4\n").await.unwrap();

        let source = CsvFileSource::new(&path);
        let matrix = source.load().await.unwrap();
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(matrix.user_count(), 2);
        assert_eq!(matrix.movie_count(), 4);
        assert_eq!(source.name(), "csv_file");
    }

    #[test]
    fn test_csv_source_missing_file() {
        let source = CsvFileSource::new("/nonexistent/ratings.csv");
        let err = tokio_test::block_on(source.load()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
