//! Decision-support recommendations.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use fra_atlas_core::{PolicyRecommendation, Priority};
use fra_atlas_engine::{generated_recommendations, recommendation_job};
use fra_atlas_query::RecommendationFilter;

use super::{ApiError, bad_request, internal_error};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationParams {
    pub village: Option<String>,
    pub priority: Option<String>,
}

/// `GET /v1/recommendations`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RecommendationParams>,
) -> Result<Json<Vec<PolicyRecommendation>>, ApiError> {
    let priority = match params.priority.as_deref() {
        Some(p) => {
            Some(Priority::parse(p).ok_or_else(|| bad_request(format!("unknown priority: {p}")))?)
        }
        None => None,
    };
    let filter = RecommendationFilter {
        village: params.village,
        priority,
    };
    let recs = state.recommendations.read().await;
    Ok(Json(filter.apply(&recs).into_iter().cloned().collect()))
}

/// `POST /v1/recommendations/generate`
///
/// Runs the analysis pipeline with its stage delays suppressed; the
/// staged progress display belongs to the CLI, not the API. Re-running
/// is idempotent: recommendations already present by id are not
/// appended again.
pub async fn generate(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let handle = recommendation_job()
        .zero_delay()
        .spawn(generated_recommendations);
    let generated = handle
        .join()
        .await
        .map_err(|e| internal_error(e.to_string()))?
        .unwrap_or_default();

    let mut recs = state.recommendations.write().await;
    let mut appended = Vec::new();
    for rec in generated {
        if !recs.iter().any(|existing| existing.id == rec.id) {
            recs.push(rec.clone());
            appended.push(rec);
        }
    }
    Ok(Json(json!({
        "success": true,
        "generated": appended,
        "total": recs.len(),
    })))
}
