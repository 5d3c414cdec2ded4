use crate::models::{
    Budget, Plan, PlanAggregates, PlanItem, PlanStatus, PlanType, ScheduledItem, TravelType, Venue,
    VenueKind,
};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// Insert a draft plan header. Aggregates are zero until activation.
pub async fn insert_plan(pool: &PgPool, plan: &Plan) -> Result<Uuid, sqlx::Error> {
    let preferences_json = serde_json::to_value(&plan.preferences).unwrap_or_default();

    let result: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO plans (
            id, title, plan_type, origin_lat, origin_lng, origin_address,
            search_radius_km, travel_type, available_time,
            start_time, end_time, start_date, end_date,
            travel_style, budget, interests, preferences,
            total_distance_km, total_duration_minutes, estimated_cost, status
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
        RETURNING id
        "#,
    )
    .bind(plan.id)
    .bind(&plan.title)
    .bind(plan.plan_type.to_string())
    .bind(plan.origin_lat)
    .bind(plan.origin_lng)
    .bind(&plan.origin_address)
    .bind(plan.search_radius_km)
    .bind(plan.travel_type.to_string())
    .bind(plan.available_time.map(|t| t.to_string()))
    .bind(plan.start_time)
    .bind(plan.end_time)
    .bind(plan.start_date)
    .bind(plan.end_date)
    .bind(&plan.travel_style)
    .bind(plan.budget.to_string())
    .bind(&plan.interests)
    .bind(&preferences_json)
    .bind(plan.total_distance_km)
    .bind(plan.total_duration_minutes)
    .bind(plan.estimated_cost)
    .bind(plan.status.to_string())
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

/// Insert one scheduled stop as a plan item row. The venue variant decides
/// which of the two foreign keys is populated.
pub async fn insert_plan_item(
    pool: &PgPool,
    plan_id: Uuid,
    item: &ScheduledItem,
) -> Result<Uuid, sqlx::Error> {
    let (restaurant_id, place_id) = match &item.venue {
        Venue::Restaurant(r) => (Some(r.id), None),
        Venue::Place(p) => (None, Some(p.id)),
    };

    let result: (Uuid,) = sqlx::query_as(
        r#"
        INSERT INTO plan_items (
            plan_id, day, item_order, item_type, restaurant_id, place_id,
            time_slot, scheduled_time, duration_minutes, travel_time_minutes, distance_km
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING id
        "#,
    )
    .bind(plan_id)
    .bind(item.day.map(|d| d as i32))
    .bind(item.order as i32)
    .bind(item.venue.kind().to_string())
    .bind(restaurant_id)
    .bind(place_id)
    .bind(item.time_slot.map(|s| s.to_string()))
    .bind(item.scheduled_time)
    .bind(item.duration_minutes as i32)
    .bind(item.travel_time_minutes)
    .bind(item.distance_km)
    .fetch_one(pool)
    .await?;

    Ok(result.0)
}

/// Write the computed aggregates and flip the plan from draft to active.
pub async fn activate_plan(
    pool: &PgPool,
    id: Uuid,
    aggregates: &PlanAggregates,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE plans
        SET total_distance_km = $2,
            total_duration_minutes = $3,
            estimated_cost = $4,
            status = 'active'
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(aggregates.total_distance_km)
    .bind(aggregates.total_duration_minutes)
    .bind(aggregates.estimated_cost)
    .execute(pool)
    .await?;

    Ok(())
}

/// Delete a plan; items go with it via the cascade.
pub async fn delete_plan(pool: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM plans WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

/// Fetch a plan header by id.
pub async fn get_plan(pool: &PgPool, id: Uuid) -> Result<Option<Plan>, sqlx::Error> {
    let row = sqlx::query_as::<_, PlanRow>(
        r#"
        SELECT id, title, plan_type, origin_lat, origin_lng, origin_address,
               search_radius_km, travel_type, available_time,
               start_time, end_time, start_date, end_date,
               travel_style, budget, interests, preferences,
               total_distance_km, total_duration_minutes, estimated_cost, status,
               created_at::text as created_at
        FROM plans
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| r.into()))
}

/// Fetch a plan's items ordered by day then position.
pub async fn list_plan_items(pool: &PgPool, plan_id: Uuid) -> Result<Vec<PlanItem>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PlanItemRow>(
        r#"
        SELECT id, plan_id, day, item_order, item_type, restaurant_id, place_id,
               time_slot, scheduled_time, duration_minutes, travel_time_minutes, distance_km
        FROM plan_items
        WHERE plan_id = $1
        ORDER BY day NULLS FIRST, item_order
        "#,
    )
    .bind(plan_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|r| r.into()).collect())
}

// Helper structs for deserializing plan rows from database

#[derive(sqlx::FromRow)]
struct PlanRow {
    id: Uuid,
    title: Option<String>,
    plan_type: String,
    origin_lat: f64,
    origin_lng: f64,
    origin_address: Option<String>,
    search_radius_km: f64,
    travel_type: String,
    available_time: Option<String>,
    start_time: Option<time::Time>,
    end_time: Option<time::Time>,
    start_date: Option<time::Date>,
    end_date: Option<time::Date>,
    travel_style: Option<String>,
    budget: String,
    interests: Vec<String>,
    preferences: serde_json::Value,
    total_distance_km: f64,
    total_duration_minutes: i32,
    estimated_cost: i64,
    status: String,
    created_at: Option<String>,
}

impl From<PlanRow> for Plan {
    fn from(row: PlanRow) -> Self {
        let plan_type = row.plan_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid plan type '{}' for plan {}, defaulting to daily",
                row.plan_type,
                row.id
            );
            PlanType::Daily
        });
        let travel_type = row.travel_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid travel type '{}' for plan {}, defaulting to solo",
                row.travel_type,
                row.id
            );
            TravelType::Solo
        });
        let budget = row.budget.parse().unwrap_or(Budget::Any);
        let status = row.status.parse().unwrap_or(PlanStatus::Draft);
        let available_time = row.available_time.and_then(|s| s.parse().ok());
        let preferences: HashMap<String, f64> =
            serde_json::from_value(row.preferences).unwrap_or_default();

        Plan {
            id: row.id,
            title: row.title,
            plan_type,
            origin_lat: row.origin_lat,
            origin_lng: row.origin_lng,
            origin_address: row.origin_address,
            search_radius_km: row.search_radius_km,
            travel_type,
            available_time,
            start_time: row.start_time,
            end_time: row.end_time,
            start_date: row.start_date,
            end_date: row.end_date,
            travel_style: row.travel_style,
            budget,
            interests: row.interests,
            preferences,
            total_distance_km: row.total_distance_km,
            total_duration_minutes: row.total_duration_minutes,
            estimated_cost: row.estimated_cost,
            status,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PlanItemRow {
    id: Uuid,
    plan_id: Uuid,
    day: Option<i32>,
    item_order: i32,
    item_type: String,
    restaurant_id: Option<Uuid>,
    place_id: Option<Uuid>,
    time_slot: Option<String>,
    scheduled_time: Option<time::Time>,
    duration_minutes: i32,
    travel_time_minutes: f64,
    distance_km: f64,
}

impl From<PlanItemRow> for PlanItem {
    fn from(row: PlanItemRow) -> Self {
        let item_type = row.item_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid item type '{}' for plan item {}, inferring from keys",
                row.item_type,
                row.id
            );
            if row.restaurant_id.is_some() {
                VenueKind::Restaurant
            } else {
                VenueKind::Place
            }
        });

        PlanItem {
            id: row.id,
            plan_id: row.plan_id,
            day: row.day,
            order: row.item_order,
            item_type,
            restaurant_id: row.restaurant_id,
            place_id: row.place_id,
            time_slot: row.time_slot.and_then(|s| s.parse().ok()),
            scheduled_time: row.scheduled_time,
            duration_minutes: row.duration_minutes,
            travel_time_minutes: row.travel_time_minutes,
            distance_km: row.distance_km,
        }
    }
}
