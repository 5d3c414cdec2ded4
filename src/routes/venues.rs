use crate::error::{AppError, Result};
use crate::models::{Candidate, Coordinates};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub radius_km: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub count: usize,
    pub venues: Vec<Candidate>,
}

/// GET /venues/nearby?lat=..&lng=..&radius_km=..
/// Discovery listing of everything active within the radius, nearest first.
pub async fn nearby_venues(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<NearbyResponse>> {
    let anchor =
        Coordinates::new(query.lat, query.lng).map_err(AppError::InvalidRequest)?;

    let radius_km = query
        .radius_km
        .unwrap_or_else(|| state.planner.default_search_radius_km());
    if radius_km <= 0.0 || radius_km > 100.0 {
        return Err(AppError::InvalidRequest(
            "radius_km must be between 0 and 100".to_string(),
        ));
    }

    let venues = state.planner.nearby_venues(&anchor, radius_km).await?;

    Ok(Json(NearbyResponse {
        count: venues.len(),
        venues,
    }))
}
