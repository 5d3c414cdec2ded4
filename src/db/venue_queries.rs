use crate::models::{Coordinates, Place, PlaceType, PriceTier, Restaurant};
use sqlx::PgPool;
use uuid::Uuid;

/// List all active restaurants, optionally restricted to one price tier.
/// The radius cut happens in the planner, against the request anchor.
pub async fn list_active_restaurants(
    pool: &PgPool,
    price_tier: Option<PriceTier>,
) -> Result<Vec<Restaurant>, sqlx::Error> {
    let rows = sqlx::query_as::<_, RestaurantRow>(
        r#"
        SELECT id, name, lat, lng, address, rating, review_count, category, price_tier
        FROM restaurants
        WHERE is_active
        AND ($1::text IS NULL OR price_tier = $1)
        ORDER BY rating DESC
        "#,
    )
    .bind(price_tier.map(|t| t.to_string()))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|row| row.into()).collect())
}

/// List all active places. When `suitable_for` is non-empty, only places
/// whose tag set overlaps it are returned; restaurants have no such guard.
pub async fn list_active_places(
    pool: &PgPool,
    suitable_for: &[String],
) -> Result<Vec<Place>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PlaceRow>(
        r#"
        SELECT id, name, lat, lng, address, rating, review_count, category,
               place_type, is_free, entry_fee, suitable_for
        FROM places
        WHERE is_active
        AND (cardinality($1::text[]) = 0 OR suitable_for && $1)
        ORDER BY rating DESC
        "#,
    )
    .bind(suitable_for)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|row| row.into()).collect())
}

// Helper structs for deserializing venue rows from database

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: Uuid,
    name: String,
    lat: f64,
    lng: f64,
    address: Option<String>,
    rating: f32,
    review_count: i32,
    category: String,
    price_tier: String,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        let price_tier = row.price_tier.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid price tier '{}' for restaurant '{}' (id: {}), defaulting to moderate",
                row.price_tier,
                row.name,
                row.id
            );
            PriceTier::Moderate
        });

        Restaurant {
            id: row.id,
            name: row.name,
            coordinates: coordinates_from_row(row.lat, row.lng, row.id),
            address: row.address,
            rating: row.rating,
            review_count: row.review_count,
            category: row.category,
            price_tier,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PlaceRow {
    id: Uuid,
    name: String,
    lat: f64,
    lng: f64,
    address: Option<String>,
    rating: f32,
    review_count: i32,
    category: String,
    place_type: String,
    is_free: bool,
    entry_fee: i64,
    suitable_for: Vec<String>,
}

impl From<PlaceRow> for Place {
    fn from(row: PlaceRow) -> Self {
        let place_type = row.place_type.parse().unwrap_or_else(|_| {
            tracing::warn!(
                "Invalid place type '{}' for place '{}' (id: {}), defaulting to other",
                row.place_type,
                row.name,
                row.id
            );
            PlaceType::Other
        });

        Place {
            id: row.id,
            name: row.name,
            coordinates: coordinates_from_row(row.lat, row.lng, row.id),
            address: row.address,
            rating: row.rating,
            review_count: row.review_count,
            category: row.category,
            place_type,
            is_free: row.is_free,
            entry_fee: row.entry_fee,
            suitable_for: row.suitable_for,
        }
    }
}

// Coordinates should always be valid from the DB, but validate anyway
fn coordinates_from_row(lat: f64, lng: f64, id: Uuid) -> Coordinates {
    Coordinates::new(lat, lng).unwrap_or_else(|e| {
        tracing::error!("Invalid coordinates for venue {}: {}. Using fallback.", id, e);
        Coordinates { lat: 0.0, lng: 0.0 }
    })
}
