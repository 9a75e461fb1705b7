use anyhow::Context;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use movie_recommender::{
    config::{Config, OutputFormat},
    models::RecommendationReport,
    services::{recommend_from_source, report, CsvFileSource},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let run_id = Uuid::new_v4();

    let output = run(&config, run_id)
        .instrument(tracing::info_span!("recommendation_run", run_id = %run_id))
        .await?;

    println!("{}", output.trim_end());
    Ok(())
}

/// Loads the ratings, computes recommendations and renders them
async fn run(config: &Config, run_id: Uuid) -> anyhow::Result<String> {
    let request = config.request();

    tracing::info!(
        ratings_path = %config.ratings_path.display(),
        target_user = request.target_user,
        top_n = request.top_n,
        "Starting recommendation run"
    );

    let source = CsvFileSource::new(&config.ratings_path);
    let recommendations = recommend_from_source(&source, request)
        .await
        .with_context(|| {
            format!(
                "Failed to recommend movies from {}",
                config.ratings_path.display()
            )
        })?;

    let output = match config.output_format {
        OutputFormat::Text => {
            report::render_text(request.target_user, request.top_n, &recommendations)
        }
        OutputFormat::Json => {
            let summary = RecommendationReport::new(run_id, request, recommendations);
            report::render_json(&summary)?
        }
    };

    Ok(output)
}
