use std::path::PathBuf;

use serde::Deserialize;

use crate::models::{RecommendationRequest, DEFAULT_TARGET_USER, DEFAULT_TOP_N};

/// Prefix shared by all configuration variables
pub const ENV_PREFIX: &str = "RECOMMENDER_";

/// How the run result is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// CSV file holding the rating matrix
    #[serde(default = "default_ratings_path")]
    pub ratings_path: PathBuf,

    /// 0-based index of the user to recommend for
    #[serde(default = "default_target_user")]
    pub target_user: usize,

    /// Maximum number of recommendations; zero or negative yields none
    #[serde(default = "default_top_n")]
    pub top_n: i64,

    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_ratings_path() -> PathBuf {
    PathBuf::from("ratings.csv")
}

fn default_target_user() -> usize {
    DEFAULT_TARGET_USER
}

fn default_top_n() -> i64 {
    DEFAULT_TOP_N as i64
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed(ENV_PREFIX)
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Load configuration from explicit key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Run parameters for the recommender
    pub fn request(&self) -> RecommendationRequest {
        RecommendationRequest::new(self.target_user, usize::try_from(self.top_n).unwrap_or(0))
    }
}
