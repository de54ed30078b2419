//! Asset-mapping layer.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use fra_atlas_core::{Asset, LandUseType};
use fra_atlas_query::AssetFilter;

use super::{ApiError, bad_request, parse_csv_set};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AssetParams {
    /// Comma-separated land-use classes, e.g. `land_use=Forest,Water`.
    pub land_use: Option<String>,
}

/// `GET /v1/assets`
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AssetParams>,
) -> Result<Json<Vec<Asset>>, ApiError> {
    let land_uses = parse_csv_set(params.land_use.as_deref(), LandUseType::parse, "land use")
        .map_err(bad_request)?;
    let filter = AssetFilter {
        land_uses: land_uses.into_iter().collect(),
    };
    let assets = filter.apply(&state.data.assets).into_iter().cloned().collect();
    Ok(Json(assets))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::routes::testutil::test_state;

    #[tokio::test]
    async fn no_params_returns_every_asset() {
        let state = test_state();
        let total = state.data.assets.len();
        let Json(assets) = list(State(state), Query(AssetParams::default()))
            .await
            .unwrap();
        assert_eq!(assets.len(), total);
    }

    #[tokio::test]
    async fn land_use_list_selects_the_union_of_classes() {
        let state = test_state();
        let params = AssetParams {
            land_use: Some("Forest,Water".into()),
        };
        let Json(assets) = list(State(state), Query(params)).await.unwrap();
        assert!(!assets.is_empty());
        for asset in &assets {
            assert!(matches!(
                asset.land_use_type,
                LandUseType::Forest | LandUseType::Water
            ));
        }
    }

    #[tokio::test]
    async fn unknown_land_use_is_a_bad_request() {
        let state = test_state();
        let params = AssetParams {
            land_use: Some("Wetland".into()),
        };
        let (status, _) = list(State(state), Query(params)).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
