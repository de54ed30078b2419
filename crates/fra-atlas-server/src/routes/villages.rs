//! Village listing and per-village detail.

use axum::Json;
use axum::extract::{Path, State};

use fra_atlas_core::Village;

use super::{ApiError, not_found};
use crate::AppState;

/// `GET /v1/villages`
pub async fn list(State(state): State<AppState>) -> Json<Vec<Village>> {
    Json(state.data.villages.clone())
}

/// `GET /v1/villages/{id}`
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Village>, ApiError> {
    let village = state
        .data
        .village(&id)
        .ok_or_else(|| not_found(format!("no village with id {id}")))?;
    Ok(Json(village.clone()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::routes::testutil::test_state;

    #[tokio::test]
    async fn list_covers_all_four_villages() {
        let Json(villages) = list(State(test_state())).await;
        assert_eq!(villages.len(), 4);
    }

    #[tokio::test]
    async fn detail_returns_the_village_with_its_claims_and_assets() {
        let Json(village) = detail(State(test_state()), Path("vil-001".into()))
            .await
            .unwrap();
        assert_eq!(village.name, "Kanha Village");
        assert!(!village.claims.is_empty());
        assert!(!village.assets.is_empty());
    }

    #[tokio::test]
    async fn unknown_village_is_404() {
        let (status, _) = detail(State(test_state()), Path("vil-099".into()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
