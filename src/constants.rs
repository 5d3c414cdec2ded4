//! Stable application-wide constants.
//!
//! Values here are structural invariants, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For knobs that benefit from runtime experimentation, see
//! [`PlannerConfig`](crate::config::PlannerConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Travel-time model ---

/// Assumed average travel speed (km/h) between consecutive stops.
/// Travel time between stops is `distance / speed * 60` minutes; no
/// road-network routing is attempted.
pub const AVERAGE_TRAVEL_SPEED_KMH: f64 = 50.0;

// --- Ranking coefficients ---

/// Ratings within this band of each other are treated as tied, falling
/// through to review count and then distance.
pub const RATING_TIE_THRESHOLD: f32 = 0.5;
/// Rating contribution multiplier in the preference-weighted score.
pub const PREFERENCE_RATING_WEIGHT: f64 = 10.0;
/// Review-count contribution multiplier in the preference-weighted score.
pub const PREFERENCE_REVIEW_WEIGHT: f64 = 0.1;
/// Preference key that weights restaurants in trip ranking.
pub const FOOD_PREFERENCE_KEY: &str = "food";

// --- Visit durations (minutes) ---

/// Standard restaurant stop.
pub const RESTAURANT_VISIT_MINUTES: u32 = 90;
/// Luxury-tier restaurant stop.
pub const LUXURY_RESTAURANT_VISIT_MINUTES: u32 = 120;
/// Standard place stop.
pub const PLACE_VISIT_MINUTES: u32 = 90;
/// Nature place stop (hikes, waterfalls take longer).
pub const NATURE_PLACE_VISIT_MINUTES: u32 = 120;

// --- Quick-plan buckets ---
// Search radius and stop count are derived from the caller's available time.

/// Radius (km) for a 1-2 hour quick plan.
pub const QUICK_SHORT_RADIUS_KM: f64 = 5.0;
/// Stop cap for a 1-2 hour quick plan.
pub const QUICK_SHORT_MAX_ITEMS: usize = 3;
/// Radius (km) for a half-day quick plan.
pub const QUICK_HALF_DAY_RADIUS_KM: f64 = 15.0;
/// Stop cap for a half-day quick plan.
pub const QUICK_HALF_DAY_MAX_ITEMS: usize = 5;
/// Radius (km) for a full-day quick plan.
pub const QUICK_FULL_DAY_RADIUS_KM: f64 = 30.0;
/// Stop cap for a full-day quick plan.
pub const QUICK_FULL_DAY_MAX_ITEMS: usize = 7;

// --- Multi-day trip window ---

/// Hour each trip day's schedule starts at.
pub const TRIP_DAY_START_HOUR: u8 = 9;
/// Hour each trip day's schedule must end by.
pub const TRIP_DAY_END_HOUR: u8 = 22;

// --- Cost estimates (IRR, per person) ---
// Fixed per-tier restaurant estimates used for plan cost aggregates.
// Places contribute their entry fee instead.

/// Estimated spend at a budget-tier restaurant.
pub const COST_ESTIMATE_BUDGET_IRR: i64 = 1_500_000;
/// Estimated spend at a moderate-tier restaurant.
pub const COST_ESTIMATE_MODERATE_IRR: i64 = 3_000_000;
/// Estimated spend at an expensive-tier restaurant.
pub const COST_ESTIMATE_EXPENSIVE_IRR: i64 = 5_000_000;
/// Estimated spend at a luxury-tier restaurant.
pub const COST_ESTIMATE_LUXURY_IRR: i64 = 8_000_000;

// --- Planner defaults ---

/// Default search radius (km) when a daily/trip request omits one.
/// Overridden by `PLANNER_DEFAULT_SEARCH_RADIUS_KM`.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 10.0;
