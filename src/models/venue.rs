use crate::constants::*;
use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Discriminant for the two venue variants. Persisted on plan items so
/// readers can tell which foreign key is populated without joining.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VenueKind {
    Restaurant,
    Place,
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VenueKind::Restaurant => write!(f, "restaurant"),
            VenueKind::Place => write!(f, "place"),
        }
    }
}

impl FromStr for VenueKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "restaurant" => Ok(VenueKind::Restaurant),
            "place" => Ok(VenueKind::Place),
            _ => Err(format!("Invalid venue kind: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Budget,
    Moderate,
    Expensive,
    Luxury,
}

impl PriceTier {
    /// Fixed per-person cost estimate used for plan cost aggregates.
    pub fn cost_estimate(&self) -> i64 {
        match self {
            PriceTier::Budget => COST_ESTIMATE_BUDGET_IRR,
            PriceTier::Moderate => COST_ESTIMATE_MODERATE_IRR,
            PriceTier::Expensive => COST_ESTIMATE_EXPENSIVE_IRR,
            PriceTier::Luxury => COST_ESTIMATE_LUXURY_IRR,
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PriceTier::Budget => "budget",
            PriceTier::Moderate => "moderate",
            PriceTier::Expensive => "expensive",
            PriceTier::Luxury => "luxury",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PriceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "budget" | "cheap" => Ok(PriceTier::Budget),
            "moderate" | "medium" => Ok(PriceTier::Moderate),
            "expensive" => Ok(PriceTier::Expensive),
            "luxury" => Ok(PriceTier::Luxury),
            _ => Err(format!("Invalid price tier: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Nature,
    Forest,
    Waterfall,
    Beach,
    Mountain,
    Historical,
    Cultural,
    Entertainment,
    Park,
    Museum,
    Religious,
    Other,
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlaceType::Nature => "nature",
            PlaceType::Forest => "forest",
            PlaceType::Waterfall => "waterfall",
            PlaceType::Beach => "beach",
            PlaceType::Mountain => "mountain",
            PlaceType::Historical => "historical",
            PlaceType::Cultural => "cultural",
            PlaceType::Entertainment => "entertainment",
            PlaceType::Park => "park",
            PlaceType::Museum => "museum",
            PlaceType::Religious => "religious",
            PlaceType::Other => "other",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PlaceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nature" => Ok(PlaceType::Nature),
            "forest" => Ok(PlaceType::Forest),
            "waterfall" => Ok(PlaceType::Waterfall),
            "beach" => Ok(PlaceType::Beach),
            "mountain" => Ok(PlaceType::Mountain),
            "historical" => Ok(PlaceType::Historical),
            "cultural" => Ok(PlaceType::Cultural),
            "entertainment" => Ok(PlaceType::Entertainment),
            "park" => Ok(PlaceType::Park),
            "museum" => Ok(PlaceType::Museum),
            "religious" => Ok(PlaceType::Religious),
            "other" => Ok(PlaceType::Other),
            _ => Err(format!("Invalid place type: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub coordinates: Coordinates,
    pub address: Option<String>,
    /// Average rating, 0-5
    pub rating: f32,
    pub review_count: i32,
    /// Cuisine label, e.g. "seafood" or "kebab"
    pub category: String,
    pub price_tier: PriceTier,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    pub id: Uuid,
    pub name: String,
    pub coordinates: Coordinates,
    pub address: Option<String>,
    /// Average rating, 0-5
    pub rating: f32,
    pub review_count: i32,
    pub category: String,
    pub place_type: PlaceType,
    pub is_free: bool,
    /// Entry fee in IRR; meaningful only when `is_free` is false
    pub entry_fee: i64,
    /// Party tags this place suits, e.g. "family", "kids"
    pub suitable_for: Vec<String>,
}

/// A visitable venue. The two variants are disjoint by construction, so a
/// scheduled stop can never reference both a restaurant and a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Venue {
    Restaurant(Restaurant),
    Place(Place),
}

impl Venue {
    pub fn id(&self) -> Uuid {
        match self {
            Venue::Restaurant(r) => r.id,
            Venue::Place(p) => p.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Venue::Restaurant(r) => &r.name,
            Venue::Place(p) => &p.name,
        }
    }

    pub fn coordinates(&self) -> &Coordinates {
        match self {
            Venue::Restaurant(r) => &r.coordinates,
            Venue::Place(p) => &p.coordinates,
        }
    }

    pub fn rating(&self) -> f32 {
        match self {
            Venue::Restaurant(r) => r.rating,
            Venue::Place(p) => p.rating,
        }
    }

    pub fn review_count(&self) -> i32 {
        match self {
            Venue::Restaurant(r) => r.review_count,
            Venue::Place(p) => p.review_count,
        }
    }

    pub fn kind(&self) -> VenueKind {
        match self {
            Venue::Restaurant(_) => VenueKind::Restaurant,
            Venue::Place(_) => VenueKind::Place,
        }
    }

    /// Per-stop cost contribution to a plan's estimated cost.
    /// Restaurants use the fixed tier estimate; places their entry fee.
    pub fn cost_estimate(&self) -> i64 {
        match self {
            Venue::Restaurant(r) => r.price_tier.cost_estimate(),
            Venue::Place(p) => {
                if p.is_free {
                    0
                } else {
                    p.entry_fee
                }
            }
        }
    }
}
