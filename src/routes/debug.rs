use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    // Check database
    match sqlx::query("SELECT 1").fetch_one(&state.db_pool).await {
        Ok(_) => {
            status["checks"]["database"] = json!("ok");
        }
        Err(e) => {
            status["checks"]["database"] = json!({"error": e.to_string()});
            status["status"] = json!("error");
        }
    }

    // Check venue counts
    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurants WHERE is_active")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(count) => {
            status["checks"]["restaurant_count"] = json!(count);
        }
        Err(e) => {
            status["checks"]["restaurant_count"] = json!({"error": e.to_string()});
        }
    }

    match sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM places WHERE is_active")
        .fetch_one(&state.db_pool)
        .await
    {
        Ok(count) => {
            status["checks"]["place_count"] = json!(count);
        }
        Err(e) => {
            status["checks"]["place_count"] = json!({"error": e.to_string()});
        }
    }

    Json(status)
}
