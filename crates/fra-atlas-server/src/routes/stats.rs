//! Dashboard aggregates.

use axum::Json;
use axum::extract::State;

use fra_atlas_query::DashboardSummary;

use crate::AppState;

/// `GET /v1/stats/dashboard`
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    let data = &state.data;
    Json(DashboardSummary::compute(
        &data.claims,
        &data.assets,
        data.villages.len(),
    ))
}

#[cfg(test)]
mod tests {
    use axum::response::IntoResponse;

    use super::*;
    use crate::routes::testutil::{body_json, test_state};

    #[tokio::test]
    async fn dashboard_serializes_the_full_summary() {
        let state = test_state();
        let claims = state.data.claims.len();
        let response = dashboard(State(state)).await.into_response();
        let body = body_json(response).await;
        assert_eq!(body["status"]["total"], claims);
        assert_eq!(body["byState"].as_array().unwrap().len(), 4);
        assert_eq!(body["landUse"].as_array().unwrap().len(), 5);
        assert_eq!(body["villagesCovered"], 4);
        assert!(body["successRate"].as_f64().unwrap().is_finite());
    }
}
