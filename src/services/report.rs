use std::fmt::Write;

use crate::{
    error::AppResult,
    models::{Recommendation, RecommendationReport},
};

/// Human-readable listing of a run, 1-based user and movie numbers
pub fn render_text(target_user: usize, top_n: usize, recommendations: &[Recommendation]) -> String {
    let mut out = format!(
        "Top {} recommendations for User {}:\n",
        top_n,
        target_user + 1
    );

    if recommendations.is_empty() {
        let _ = writeln!(out, "No recommendations for User {}.", target_user + 1);
        return out;
    }

    for rec in recommendations {
        let _ = writeln!(
            out,
            "Movie {} with predicted rating {:.4}",
            rec.movie + 1,
            rec.predicted_rating
        );
    }

    out
}

/// Pretty-printed JSON form of a run
pub fn render_json(report: &RecommendationReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
