use async_trait::async_trait;
use safar::db::VenueRepository;
use safar::error::Result;
use safar::models::{Coordinates, Place, PlaceType, PriceTier, Restaurant};
use uuid::Uuid;

/// In-memory venue store implementing the same contract as the Postgres
/// repository: tier equality for restaurants, tag overlap for places.
pub struct InMemoryVenueRepository {
    pub restaurants: Vec<Restaurant>,
    pub places: Vec<Place>,
}

impl InMemoryVenueRepository {
    #[allow(dead_code)]
    pub fn empty() -> Self {
        InMemoryVenueRepository {
            restaurants: vec![],
            places: vec![],
        }
    }
}

#[async_trait]
impl VenueRepository for InMemoryVenueRepository {
    async fn active_restaurants(&self, price_tier: Option<PriceTier>) -> Result<Vec<Restaurant>> {
        Ok(self
            .restaurants
            .iter()
            .filter(|r| price_tier.map_or(true, |tier| r.price_tier == tier))
            .cloned()
            .collect())
    }

    async fn active_places(&self, suitable_for: &[String]) -> Result<Vec<Place>> {
        Ok(self
            .places
            .iter()
            .filter(|p| {
                suitable_for.is_empty()
                    || p.suitable_for.iter().any(|tag| suitable_for.contains(tag))
            })
            .cloned()
            .collect())
    }
}

/// Create a test restaurant
#[allow(dead_code)]
pub fn create_test_restaurant(
    name: &str,
    lat: f64,
    lng: f64,
    rating: f32,
    review_count: i32,
    price_tier: PriceTier,
) -> Restaurant {
    Restaurant {
        id: Uuid::new_v4(),
        name: name.to_string(),
        coordinates: Coordinates::new(lat, lng).unwrap(),
        address: Some(format!("Test address: {}", name)),
        rating,
        review_count,
        category: "kebab".to_string(),
        price_tier,
    }
}

/// Create a test place suitable for every party type
#[allow(dead_code)]
pub fn create_test_place(
    name: &str,
    lat: f64,
    lng: f64,
    place_type: PlaceType,
    rating: f32,
    review_count: i32,
) -> Place {
    create_test_place_with_tags(
        name,
        lat,
        lng,
        place_type,
        rating,
        review_count,
        &["solo", "couple", "family", "kids", "friends", "group"],
    )
}

/// Create a test place with specific suitable-for tags
#[allow(dead_code)]
pub fn create_test_place_with_tags(
    name: &str,
    lat: f64,
    lng: f64,
    place_type: PlaceType,
    rating: f32,
    review_count: i32,
    suitable_for: &[&str],
) -> Place {
    Place {
        id: Uuid::new_v4(),
        name: name.to_string(),
        coordinates: Coordinates::new(lat, lng).unwrap(),
        address: Some(format!("Test address: {}", name)),
        rating,
        review_count,
        category: place_type.to_string(),
        place_type,
        is_free: true,
        entry_fee: 0,
        suitable_for: suitable_for.iter().map(|s| s.to_string()).collect(),
    }
}
