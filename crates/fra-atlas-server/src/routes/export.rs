//! File downloads of the filtered collections.
//!
//! `GET /v1/export/{entity}?format=..` answers with a `Content-Disposition`
//! attachment. Supported pairs:
//!
//! | entity            | formats              | filename                       |
//! |-------------------|----------------------|--------------------------------|
//! | `claims`          | `geojson` (default), `json`, `csv` | `fra_claims_data.*`  |
//! | `assets`          | `geojson` (default), `json`        | `asset_mapping_data.*` |
//! | `recommendations` | `json` (default), `csv`            | `policy_recommendations.*` |

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use fra_atlas_export::{
    ClaimRow, ExportError, RecommendationRow, assets_to_geojson, claims_to_geojson, to_csv, to_json,
};

use super::{ApiError, bad_request, internal_error};
use crate::AppState;

const GEOJSON: &str = "application/geo+json";
const JSON: &str = "application/json";
const CSV: &str = "text/csv";

#[derive(Debug, Default, Deserialize)]
pub struct ExportParams {
    pub format: Option<String>,
}

/// `GET /v1/export/{entity}`
pub async fn download(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    Query(params): Query<ExportParams>,
) -> Result<Response, ApiError> {
    let data = &state.data;
    match entity.as_str() {
        "claims" => {
            let claims: Vec<&_> = data.claims.iter().collect();
            match params.format.as_deref().unwrap_or("geojson") {
                "geojson" => {
                    let body = claims_to_geojson(&claims)
                        .and_then(|fc| fc.to_string_pretty())
                        .map_err(export_failed)?;
                    Ok(attachment(GEOJSON, "fra_claims_data.geojson", body))
                }
                "json" => {
                    let rows: Vec<ClaimRow> = claims.iter().map(|c| ClaimRow::from(*c)).collect();
                    let body = to_json(&rows).map_err(export_failed)?;
                    Ok(attachment(JSON, "fra_claims_data.json", body))
                }
                "csv" => {
                    let rows: Vec<ClaimRow> = claims.iter().map(|c| ClaimRow::from(*c)).collect();
                    Ok(attachment(CSV, "fra_claims_data.csv", to_csv(&rows)))
                }
                other => Err(bad_request(format!("unsupported claims format: {other}"))),
            }
        }
        "assets" => {
            let assets: Vec<&_> = data.assets.iter().collect();
            match params.format.as_deref().unwrap_or("geojson") {
                "geojson" => {
                    let body = assets_to_geojson(&assets)
                        .and_then(|fc| fc.to_string_pretty())
                        .map_err(export_failed)?;
                    Ok(attachment(GEOJSON, "asset_mapping_data.geojson", body))
                }
                "json" => {
                    let body = to_json(&data.assets).map_err(export_failed)?;
                    Ok(attachment(JSON, "asset_mapping_data.json", body))
                }
                other => Err(bad_request(format!("unsupported assets format: {other}"))),
            }
        }
        "recommendations" => {
            let recs = state.recommendations.read().await;
            match params.format.as_deref().unwrap_or("json") {
                "json" => {
                    let body = to_json(&recs).map_err(export_failed)?;
                    Ok(attachment(JSON, "policy_recommendations.json", body))
                }
                "csv" => {
                    let rows: Vec<RecommendationRow> =
                        recs.iter().map(RecommendationRow::from).collect();
                    Ok(attachment(CSV, "policy_recommendations.csv", to_csv(&rows)))
                }
                other => Err(bad_request(format!(
                    "unsupported recommendations format: {other}"
                ))),
            }
        }
        other => Err(bad_request(format!("unknown export entity: {other}"))),
    }
}

fn export_failed(err: ExportError) -> ApiError {
    internal_error(err.to_string())
}

fn attachment(content_type: &str, filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;
    use crate::routes::testutil::{body_json, body_text, test_state};

    async fn fetch(entity: &str, format: Option<&str>) -> Result<Response, ApiError> {
        let params = ExportParams {
            format: format.map(String::from),
        };
        download(
            State(test_state()),
            Path(entity.to_string()),
            Query(params),
        )
        .await
    }

    fn header_str<'a>(response: &'a Response, name: &header::HeaderName) -> &'a str {
        response.headers().get(name).unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn claims_default_to_geojson_with_attachment_headers() {
        let response = fetch("claims", None).await.unwrap();
        assert_eq!(header_str(&response, &header::CONTENT_TYPE), GEOJSON);
        assert_eq!(
            header_str(&response, &header::CONTENT_DISPOSITION),
            "attachment; filename=\"fra_claims_data.geojson\""
        );
        let body = body_json(response).await;
        assert_eq!(body["type"], "FeatureCollection");
        assert_eq!(body["features"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn claims_csv_has_header_plus_one_line_per_claim() {
        let response = fetch("claims", Some("csv")).await.unwrap();
        assert_eq!(header_str(&response, &header::CONTENT_TYPE), CSV);
        let body = body_text(response).await;
        assert_eq!(body.trim_end().lines().count(), 7);
    }

    #[tokio::test]
    async fn assets_geojson_uses_the_mapping_filename() {
        let response = fetch("assets", None).await.unwrap();
        assert_eq!(
            header_str(&response, &header::CONTENT_DISPOSITION),
            "attachment; filename=\"asset_mapping_data.geojson\""
        );
    }

    #[tokio::test]
    async fn recommendations_default_to_json() {
        let response = fetch("recommendations", None).await.unwrap();
        assert_eq!(header_str(&response, &header::CONTENT_TYPE), JSON);
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_entity_and_unsupported_format_are_bad_requests() {
        let (status, _) = fetch("districts", None).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = fetch("assets", Some("csv")).await.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
