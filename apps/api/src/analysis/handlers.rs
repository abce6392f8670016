//! Axum route handler for the mood analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::patterns::PatternResult;
use crate::analysis::recommendations::generate_recommendations;
use crate::errors::AppError;
use crate::state::AppState;
use crate::store::{validate_user_id, TimeRange};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMoodRequest {
    pub user_id: String,
    #[serde(default)]
    pub time_range: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMoodResponse {
    pub patterns: PatternResult,
    pub happiness_factors: Vec<String>,
    pub sadness_factors: Vec<String>,
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze-mood
///
/// Loads the user's samples for the requested range, derives patterns and factors,
/// and attaches canned recommendations.
pub async fn handle_analyze_mood(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeMoodRequest>, JsonRejection>,
) -> Result<Json<AnalyzeMoodResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    validate_user_id(&request.user_id)?;

    let range = request
        .time_range
        .as_deref()
        .map(TimeRange::from_label)
        .unwrap_or_default();

    let samples = state.mood_source.load(&request.user_id, range).await?;
    info!(
        user_id = %request.user_id,
        range = ?range,
        samples = samples.len(),
        "Analyzing mood samples"
    );

    let analysis = state.analyzer.analyze(&samples);
    let recommendations = generate_recommendations(&analysis.patterns, &analysis.factors);

    Ok(Json(AnalyzeMoodResponse {
        patterns: analysis.patterns,
        happiness_factors: analysis.factors.happiness_factors,
        sadness_factors: analysis.factors.sadness_factors,
        recommendations,
    }))
}
