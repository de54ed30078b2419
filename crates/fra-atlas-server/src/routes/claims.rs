//! Claim listing, filtering, and parcel boundaries.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{Value, json};

use fra_atlas_core::geo::parcel_boundary;
use fra_atlas_core::{Claim, ClaimStatus, ClaimType, State as ClaimState};
use fra_atlas_query::ClaimFilter;

use super::{ApiError, bad_request, not_found, parse_csv_set};
use crate::AppState;

/// Map-view filter controls as query parameters. `claim_type` and `status`
/// accept comma-separated lists; `q` searches holder and village names.
#[derive(Debug, Default, Deserialize)]
pub struct ClaimParams {
    pub state: Option<String>,
    pub district: Option<String>,
    pub village: Option<String>,
    pub claim_type: Option<String>,
    pub status: Option<String>,
    pub q: Option<String>,
}

impl ClaimParams {
    fn into_filter(self) -> Result<ClaimFilter, ApiError> {
        let state = match self.state.as_deref() {
            Some(s) => Some(
                ClaimState::parse(s).ok_or_else(|| bad_request(format!("unknown state: {s}")))?,
            ),
            None => None,
        };
        let claim_types = parse_csv_set(self.claim_type.as_deref(), ClaimType::parse, "claim type")
            .map_err(bad_request)?;
        let statuses = parse_csv_set(self.status.as_deref(), ClaimStatus::parse, "status")
            .map_err(bad_request)?;
        Ok(ClaimFilter {
            state,
            district: self.district,
            village: self.village,
            claim_types: claim_types.into_iter().collect(),
            statuses: statuses.into_iter().collect(),
            search: self.q.unwrap_or_default(),
        })
    }
}

/// `GET /v1/claims`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ClaimParams>,
) -> Result<Json<Vec<Claim>>, ApiError> {
    let filter = params.into_filter()?;
    let claims = filter.apply(&state.data.claims).into_iter().cloned().collect();
    Ok(Json(claims))
}

/// `GET /v1/claims/{id}/boundary`
///
/// Boundaries are cosmetic map decoration, generated fresh per request.
pub async fn boundary(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let claim = state
        .data
        .claim(&id)
        .ok_or_else(|| not_found(format!("no claim with id {id}")))?;
    let ring = parcel_boundary(claim.coordinates, claim.area_hectares, &mut rand::thread_rng());
    Ok(Json(json!({ "claimId": claim.id, "boundary": ring })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;
    use crate::routes::testutil::{body_json, test_state};

    #[tokio::test]
    async fn unfiltered_list_returns_every_claim() {
        let state = test_state();
        let total = state.data.claims.len();
        let Json(claims) = list(State(state), Query(ClaimParams::default()))
            .await
            .unwrap();
        assert_eq!(claims.len(), total);
    }

    #[tokio::test]
    async fn comma_separated_statuses_filter_conjunctively_with_state() {
        let state = test_state();
        let params = ClaimParams {
            state: Some("Madhya Pradesh".into()),
            status: Some("granted,verified".into()),
            ..Default::default()
        };
        let Json(claims) = list(State(state), Query(params)).await.unwrap();
        assert!(!claims.is_empty());
        for claim in &claims {
            assert_eq!(claim.state.as_str(), "Madhya Pradesh");
            assert!(matches!(
                claim.status.as_str(),
                "granted" | "verified"
            ));
        }
    }

    #[tokio::test]
    async fn unknown_status_value_is_a_bad_request() {
        let state = test_state();
        let params = ClaimParams {
            status: Some("approved".into()),
            ..Default::default()
        };
        let (status, body) = list(State(state), Query(params)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0["success"], false);
        assert!(body.0["error"].as_str().unwrap().contains("approved"));
    }

    #[tokio::test]
    async fn boundary_is_a_ring_around_the_claim() {
        let state = test_state();
        let response = boundary(State(state), Path("fra-001".into()))
            .await
            .unwrap()
            .into_response();
        let body = body_json(response).await;
        assert_eq!(body["claimId"], "fra-001");
        let ring = body["boundary"].as_array().unwrap();
        assert_eq!(ring.len(), 8);
        assert_eq!(ring[0].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn boundary_for_unknown_claim_is_404() {
        let state = test_state();
        let (status, _) = boundary(State(state), Path("fra-999".into()))
            .await
            .unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
