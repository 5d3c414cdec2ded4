use crate::constants::*;
use crate::models::{PriceTier, TimeSlot, VenueKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use time::macros::format_description;
use time::{Date, Time};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Quick,
    Daily,
    Trip,
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanType::Quick => write!(f, "quick"),
            PlanType::Daily => write!(f, "daily"),
            PlanType::Trip => write!(f, "trip"),
        }
    }
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "quick" => Ok(PlanType::Quick),
            "daily" => Ok(PlanType::Daily),
            "trip" => Ok(PlanType::Trip),
            _ => Err(format!("Invalid plan type: '{}'", s)),
        }
    }
}

/// Who is travelling. Maps to a set of "suitable for" tags that places
/// (not restaurants) are filtered against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TravelType {
    #[serde(alias = "SOLO")]
    Solo,
    #[serde(alias = "COUPLE")]
    Couple,
    #[serde(alias = "FAMILY_WITH_KIDS")]
    FamilyWithKids,
    #[serde(alias = "FAMILY_ADULTS")]
    FamilyAdults,
    #[serde(alias = "FRIENDS")]
    Friends,
}

impl fmt::Display for TravelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TravelType::Solo => "solo",
            TravelType::Couple => "couple",
            TravelType::FamilyWithKids => "family_with_kids",
            TravelType::FamilyAdults => "family_adults",
            TravelType::Friends => "friends",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TravelType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "solo" => Ok(TravelType::Solo),
            "couple" => Ok(TravelType::Couple),
            "family_with_kids" => Ok(TravelType::FamilyWithKids),
            "family_adults" => Ok(TravelType::FamilyAdults),
            "friends" => Ok(TravelType::Friends),
            _ => Err(format!("Invalid travel type: '{}'", s)),
        }
    }
}

/// Time budget for a quick plan. Each bucket fixes both the search radius
/// and the maximum number of stops.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AvailableTime {
    #[serde(alias = "ONE_TO_TWO_HOURS")]
    OneToTwoHours,
    #[serde(alias = "HALF_DAY")]
    HalfDay,
    #[serde(alias = "FULL_DAY")]
    FullDay,
}

impl AvailableTime {
    pub fn search_radius_km(&self) -> f64 {
        match self {
            AvailableTime::OneToTwoHours => QUICK_SHORT_RADIUS_KM,
            AvailableTime::HalfDay => QUICK_HALF_DAY_RADIUS_KM,
            AvailableTime::FullDay => QUICK_FULL_DAY_RADIUS_KM,
        }
    }

    pub fn max_items(&self) -> usize {
        match self {
            AvailableTime::OneToTwoHours => QUICK_SHORT_MAX_ITEMS,
            AvailableTime::HalfDay => QUICK_HALF_DAY_MAX_ITEMS,
            AvailableTime::FullDay => QUICK_FULL_DAY_MAX_ITEMS,
        }
    }
}

impl fmt::Display for AvailableTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AvailableTime::OneToTwoHours => "one_to_two_hours",
            AvailableTime::HalfDay => "half_day",
            AvailableTime::FullDay => "full_day",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for AvailableTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "one_to_two_hours" => Ok(AvailableTime::OneToTwoHours),
            "half_day" => Ok(AvailableTime::HalfDay),
            "full_day" => Ok(AvailableTime::FullDay),
            _ => Err(format!("Invalid available time: '{}'", s)),
        }
    }
}

/// Budget constraint for restaurant stops. `Any` is the no-filter sentinel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    #[default]
    Any,
    Budget,
    Moderate,
    Expensive,
    Luxury,
}

impl Budget {
    /// The price tier restaurants are restricted to, or None for `Any`.
    pub fn price_tier(&self) -> Option<PriceTier> {
        match self {
            Budget::Any => None,
            Budget::Budget => Some(PriceTier::Budget),
            Budget::Moderate => Some(PriceTier::Moderate),
            Budget::Expensive => Some(PriceTier::Expensive),
            Budget::Luxury => Some(PriceTier::Luxury),
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Budget::Any => "any",
            Budget::Budget => "budget",
            Budget::Moderate => "moderate",
            Budget::Expensive => "expensive",
            Budget::Luxury => "luxury",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Budget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "any" => Ok(Budget::Any),
            "budget" => Ok(Budget::Budget),
            "moderate" => Ok(Budget::Moderate),
            "expensive" => Ok(Budget::Expensive),
            "luxury" => Ok(Budget::Luxury),
            _ => Err(format!("Invalid budget: '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    Draft,
    Active,
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStatus::Draft => write!(f, "draft"),
            PlanStatus::Active => write!(f, "active"),
        }
    }
}

impl FromStr for PlanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PlanStatus::Draft),
            "active" => Ok(PlanStatus::Active),
            _ => Err(format!("Invalid plan status: '{}'", s)),
        }
    }
}

/// A same-day scheduling window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: Time,
    pub end: Time,
}

pub fn parse_clock(s: &str) -> Result<Time, String> {
    let format = format_description!("[hour]:[minute]");
    Time::parse(s, &format).map_err(|_| format!("Invalid time '{}', expected HH:MM", s))
}

pub fn parse_date(s: &str) -> Result<Date, String> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(s, &format).map_err(|_| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Anchor location supplied by the caller. Start point of every day's
/// schedule; also stored on the plan header.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlanLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub address: Option<String>,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct CreatePlanRequest {
    #[serde(default)]
    pub title: Option<String>,
    pub plan_type: PlanType,
    pub location: PlanLocation,
    #[serde(default)]
    pub search_radius_km: Option<f64>,
    pub travel_type: Option<TravelType>,
    pub available_time: Option<AvailableTime>,
    /// "HH:MM", required for daily plans
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// "YYYY-MM-DD", required for trip plans
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub travel_style: Option<String>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub interests: Vec<String>,
    /// Preference key -> weight, consumed by trip ranking
    #[serde(default)]
    pub preferences: HashMap<String, f64>,
}

impl CreatePlanRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.travel_type.is_none() {
            return Err("travel_type is required".to_string());
        }
        if let Some(radius) = self.search_radius_km {
            if radius <= 0.0 || radius > 100.0 {
                return Err("search_radius_km must be between 0 and 100".to_string());
            }
        }
        match self.plan_type {
            PlanType::Quick => {
                if self.available_time.is_none() {
                    return Err("available_time is required for quick plans".to_string());
                }
                Ok(())
            }
            PlanType::Daily => {
                let window = self.time_window()?;
                if window.start >= window.end {
                    return Err("start_time must be before end_time".to_string());
                }
                Ok(())
            }
            PlanType::Trip => {
                if self.travel_style.as_deref().map_or(true, str::is_empty) {
                    return Err("travel_style is required for trip plans".to_string());
                }
                let (start, end) = self.date_range()?;
                if end < start {
                    return Err("end_date must not be before start_date".to_string());
                }
                Ok(())
            }
        }
    }

    /// Parsed daily window. Errors when either bound is missing or malformed.
    pub fn time_window(&self) -> Result<TimeWindow, String> {
        let start = self
            .start_time
            .as_deref()
            .ok_or("start_time is required for daily plans")?;
        let end = self
            .end_time
            .as_deref()
            .ok_or("end_time is required for daily plans")?;
        Ok(TimeWindow {
            start: parse_clock(start)?,
            end: parse_clock(end)?,
        })
    }

    /// Parsed trip date range. Errors when either bound is missing or malformed.
    pub fn date_range(&self) -> Result<(Date, Date), String> {
        let start = self
            .start_date
            .as_deref()
            .ok_or("start_date is required for trip plans")?;
        let end = self
            .end_date
            .as_deref()
            .ok_or("end_date is required for trip plans")?;
        Ok((parse_date(start)?, parse_date(end)?))
    }
}

/// Persisted plan header: the request parameters plus computed aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub id: Uuid,
    pub title: Option<String>,
    pub plan_type: PlanType,
    pub origin_lat: f64,
    pub origin_lng: f64,
    pub origin_address: Option<String>,
    pub search_radius_km: f64,
    pub travel_type: TravelType,
    pub available_time: Option<AvailableTime>,
    pub start_time: Option<Time>,
    pub end_time: Option<Time>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub travel_style: Option<String>,
    pub budget: Budget,
    pub interests: Vec<String>,
    pub preferences: HashMap<String, f64>,
    pub total_distance_km: f64,
    pub total_duration_minutes: i32,
    pub estimated_cost: i64,
    pub status: PlanStatus,
    pub created_at: Option<String>,
}

/// Persisted plan item row. Exactly one of `restaurant_id` / `place_id` is
/// set, matching `item_type`.
#[derive(Debug, Clone, Serialize)]
pub struct PlanItem {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub day: Option<i32>,
    pub order: i32,
    pub item_type: VenueKind,
    pub restaurant_id: Option<Uuid>,
    pub place_id: Option<Uuid>,
    pub time_slot: Option<TimeSlot>,
    pub scheduled_time: Option<Time>,
    pub duration_minutes: i32,
    pub travel_time_minutes: f64,
    pub distance_km: f64,
}

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub plan: Plan,
    pub items: Vec<PlanItem>,
}

/// Totals computed over a plan's scheduled items once generation succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PlanAggregates {
    pub total_distance_km: f64,
    pub total_duration_minutes: i32,
    pub estimated_cost: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request(plan_type: PlanType) -> CreatePlanRequest {
        CreatePlanRequest {
            title: None,
            plan_type,
            location: PlanLocation {
                lat: 36.9,
                lng: 50.65,
                address: None,
            },
            search_radius_km: Some(10.0),
            travel_type: Some(TravelType::Couple),
            available_time: None,
            start_time: None,
            end_time: None,
            start_date: None,
            end_date: None,
            travel_style: None,
            budget: None,
            interests: vec![],
            preferences: HashMap::new(),
        }
    }

    #[test]
    fn test_quick_plan_requires_available_time() {
        let mut req = base_request(PlanType::Quick);
        assert!(req.validate().is_err());

        req.available_time = Some(AvailableTime::OneToTwoHours);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_daily_plan_requires_ordered_window() {
        let mut req = base_request(PlanType::Daily);
        assert!(req.validate().is_err());

        req.start_time = Some("10:00".to_string());
        req.end_time = Some("18:00".to_string());
        assert!(req.validate().is_ok());

        req.end_time = Some("09:00".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_trip_plan_requires_style_and_dates() {
        let mut req = base_request(PlanType::Trip);
        req.start_date = Some("2025-06-01".to_string());
        req.end_date = Some("2025-06-03".to_string());
        assert!(req.validate().is_err()); // no travel_style

        req.travel_style = Some("relaxed".to_string());
        assert!(req.validate().is_ok());

        req.end_date = Some("2025-05-30".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_travel_type_missing_rejected() {
        let mut req = base_request(PlanType::Quick);
        req.available_time = Some(AvailableTime::FullDay);
        req.travel_type = None;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_clock_parsing() {
        assert!(parse_clock("10:00").is_ok());
        assert!(parse_clock("23:59").is_ok());
        assert!(parse_clock("10am").is_err());
        assert!(parse_clock("25:00").is_err());
    }

    #[test]
    fn test_available_time_buckets() {
        assert_eq!(AvailableTime::OneToTwoHours.search_radius_km(), 5.0);
        assert_eq!(AvailableTime::OneToTwoHours.max_items(), 3);
        assert_eq!(AvailableTime::HalfDay.search_radius_km(), 15.0);
        assert_eq!(AvailableTime::HalfDay.max_items(), 5);
        assert_eq!(AvailableTime::FullDay.search_radius_km(), 30.0);
        assert_eq!(AvailableTime::FullDay.max_items(), 7);
    }

    #[test]
    fn test_budget_sentinel() {
        assert!(Budget::Any.price_tier().is_none());
        assert_eq!(
            Budget::Luxury.price_tier(),
            Some(crate::models::PriceTier::Luxury)
        );
    }

    #[test]
    fn test_travel_type_screaming_alias() {
        let t: TravelType = serde_json::from_str("\"FAMILY_WITH_KIDS\"").unwrap();
        assert_eq!(t, TravelType::FamilyWithKids);
        let t: TravelType = serde_json::from_str("\"family_with_kids\"").unwrap();
        assert_eq!(t, TravelType::FamilyWithKids);
    }
}
