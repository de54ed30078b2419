//! HTTP API for FRA Atlas.
//!
//! Stateless over a read-only demo [`Dataset`], except for the
//! recommendation list, which the decision-support endpoint appends to.
//! The only outbound network call is the call-trigger proxy.

pub mod call;
pub mod config;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tokio::sync::RwLock;

use fra_atlas_core::{Dataset, PolicyRecommendation};

use crate::call::CallDispatcher;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<Dataset>,
    /// Seeded from the dataset; grows when recommendation generation runs.
    pub recommendations: Arc<RwLock<Vec<PolicyRecommendation>>>,
    pub dispatcher: Arc<dyn CallDispatcher>,
}

impl AppState {
    pub fn new(data: Dataset, dispatcher: Arc<dyn CallDispatcher>) -> Self {
        let recommendations = Arc::new(RwLock::new(data.recommendations.clone()));
        Self {
            data: Arc::new(data),
            recommendations,
            dispatcher,
        }
    }
}

/// Build the full API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/claims", get(routes::claims::list))
        .route("/v1/claims/{id}/boundary", get(routes::claims::boundary))
        .route("/v1/assets", get(routes::assets::list))
        .route("/v1/villages", get(routes::villages::list))
        .route("/v1/villages/{id}", get(routes::villages::detail))
        .route("/v1/recommendations", get(routes::recommendations::list))
        .route(
            "/v1/recommendations/generate",
            post(routes::recommendations::generate),
        )
        .route("/v1/stats/dashboard", get(routes::stats::dashboard))
        .route("/v1/export/{entity}", get(routes::export::download))
        .route("/v1/call", post(routes::call::trigger))
        .with_state(state)
}
