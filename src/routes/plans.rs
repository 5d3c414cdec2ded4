use crate::db::queries;
use crate::error::{AppError, Result};
use crate::models::plan::{CreatePlanRequest, PlanResponse};
use crate::models::{Coordinates, Plan, PlanStatus, PlanType, ScheduledItem};
use crate::services::planner::{self, DailyPlanParams, QuickPlanParams, TripPlanParams};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

/// POST /plans
/// Validate the request, persist a draft plan, generate its items, and
/// activate it. A generation that yields zero items deletes the draft and
/// reports a not-found condition instead of persisting an empty plan.
pub async fn create_plan(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePlanRequest>,
) -> Result<Json<PlanResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    // validate() guarantees travel_type is present
    let travel_type = request
        .travel_type
        .ok_or_else(|| AppError::InvalidRequest("travel_type is required".to_string()))?;

    let anchor = Coordinates::new(request.location.lat, request.location.lng)
        .map_err(AppError::InvalidRequest)?;

    tracing::info!(
        plan_type = %request.plan_type,
        lat = request.location.lat,
        lng = request.location.lng,
        travel_type = %travel_type,
        "Plan request: {} at ({:.4}, {:.4}), travel_type={}",
        request.plan_type,
        request.location.lat,
        request.location.lng,
        travel_type
    );

    let search_radius_km = match request.plan_type {
        PlanType::Quick => request
            .available_time
            .map(|t| t.search_radius_km())
            .unwrap_or_else(|| state.planner.default_search_radius_km()),
        _ => request
            .search_radius_km
            .unwrap_or_else(|| state.planner.default_search_radius_km()),
    };

    let time_window = match request.plan_type {
        PlanType::Daily => Some(request.time_window().map_err(AppError::InvalidRequest)?),
        _ => None,
    };
    let date_range = match request.plan_type {
        PlanType::Trip => Some(request.date_range().map_err(AppError::InvalidRequest)?),
        _ => None,
    };

    let budget = request.budget.unwrap_or_default();

    // Draft header first; items refer back to it
    let draft = Plan {
        id: Uuid::new_v4(),
        title: request.title.clone(),
        plan_type: request.plan_type,
        origin_lat: request.location.lat,
        origin_lng: request.location.lng,
        origin_address: request.location.address.clone(),
        search_radius_km,
        travel_type,
        available_time: request.available_time,
        start_time: time_window.map(|w| w.start),
        end_time: time_window.map(|w| w.end),
        start_date: date_range.map(|(start, _)| start),
        end_date: date_range.map(|(_, end)| end),
        travel_style: request.travel_style.clone(),
        budget,
        interests: request.interests.clone(),
        preferences: request.preferences.clone(),
        total_distance_km: 0.0,
        total_duration_minutes: 0,
        estimated_cost: 0,
        status: PlanStatus::Draft,
        created_at: None,
    };
    let plan_id = queries::insert_plan(&state.db_pool, &draft).await?;

    // Generate the itinerary for the requested plan type
    let items: Vec<ScheduledItem> = match request.plan_type {
        PlanType::Quick => {
            // validate() guarantees available_time is present
            let available_time = request.available_time.ok_or_else(|| {
                AppError::InvalidRequest("available_time is required for quick plans".to_string())
            })?;
            state
                .planner
                .generate_quick_plan(QuickPlanParams {
                    location: anchor,
                    travel_type,
                    available_time,
                })
                .await?
        }
        PlanType::Daily => {
            let window = time_window.ok_or_else(|| {
                AppError::InvalidRequest("start_time and end_time are required".to_string())
            })?;
            state
                .planner
                .generate_daily_plan(DailyPlanParams {
                    location: anchor,
                    search_radius_km,
                    travel_type,
                    window,
                    budget,
                    interests: request.interests.clone(),
                })
                .await?
        }
        PlanType::Trip => {
            let (start_date, end_date) = date_range.ok_or_else(|| {
                AppError::InvalidRequest("start_date and end_date are required".to_string())
            })?;
            let schedule = state
                .planner
                .generate_trip_plan(TripPlanParams {
                    location: anchor,
                    search_radius_km,
                    start_date,
                    end_date,
                    travel_type,
                    budget,
                    preferences: request.preferences.clone(),
                    interests: request.interests.clone(),
                })
                .await?;
            // BTreeMap iterates days in order, so items land sequentially
            schedule.into_values().flatten().collect()
        }
    };

    if items.is_empty() {
        queries::delete_plan(&state.db_pool, plan_id).await?;
        return Err(AppError::NoVenuesFound(
            "No venues found within the search radius; try widening your search".to_string(),
        ));
    }

    for item in &items {
        queries::insert_plan_item(&state.db_pool, plan_id, item).await?;
    }

    let aggregates = planner::compute_aggregates(items.iter());
    queries::activate_plan(&state.db_pool, plan_id, &aggregates).await?;

    tracing::info!(
        plan_id = %plan_id,
        items = items.len(),
        total_distance_km = %format!("{:.2}", aggregates.total_distance_km),
        total_duration_minutes = aggregates.total_duration_minutes,
        "Plan {} activated with {} items",
        plan_id,
        items.len()
    );

    let plan = queries::get_plan(&state.db_pool, plan_id)
        .await?
        .ok_or_else(|| AppError::Internal("Plan disappeared after activation".to_string()))?;
    let item_rows = queries::list_plan_items(&state.db_pool, plan_id).await?;

    Ok(Json(PlanResponse {
        plan,
        items: item_rows,
    }))
}

/// GET /plans/{id}
pub async fn get_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlanResponse>> {
    let plan = queries::get_plan(&state.db_pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Plan {} not found", id)))?;
    let items = queries::list_plan_items(&state.db_pool, id).await?;

    Ok(Json(PlanResponse { plan, items }))
}

/// DELETE /plans/{id}
pub async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>> {
    let deleted = queries::delete_plan(&state.db_pool, id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(format!("Plan {} not found", id)));
    }

    Ok(Json(json!({ "deleted": id })))
}
