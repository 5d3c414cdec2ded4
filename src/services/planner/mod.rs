pub mod candidates;
pub mod enhancer;
pub mod interests;
pub mod partitioner;
pub mod ranking;
pub mod scheduler;

use crate::config::PlannerConfig;
use crate::db::VenueRepository;
use crate::error::Result;
use crate::models::{
    AvailableTime, Budget, Candidate, Coordinates, PlanAggregates, ScheduledItem, TimeWindow,
    TravelType, Venue,
};
use enhancer::PlanEnhancer;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use time::Date;

#[derive(Debug, Clone)]
pub struct QuickPlanParams {
    pub location: Coordinates,
    pub travel_type: TravelType,
    pub available_time: AvailableTime,
}

#[derive(Debug, Clone)]
pub struct DailyPlanParams {
    pub location: Coordinates,
    pub search_radius_km: f64,
    pub travel_type: TravelType,
    pub window: TimeWindow,
    pub budget: Budget,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct TripPlanParams {
    pub location: Coordinates,
    pub search_radius_km: f64,
    pub start_date: Date,
    pub end_date: Date,
    pub travel_type: TravelType,
    pub budget: Budget,
    pub preferences: HashMap<String, f64>,
    pub interests: Vec<String>,
}

/// The plan generation engine. Stateless across requests: every call
/// works on its own candidate list and clock.
pub struct TravelPlanner {
    venues: Arc<dyn VenueRepository>,
    enhancer: Box<dyn PlanEnhancer>,
    config: PlannerConfig,
}

impl TravelPlanner {
    pub fn new(venues: Arc<dyn VenueRepository>, config: PlannerConfig) -> Self {
        let enhancer = enhancer::from_config(config.llm_api_key.as_deref());
        TravelPlanner {
            venues,
            enhancer,
            config,
        }
    }

    pub fn default_search_radius_km(&self) -> f64 {
        self.config.default_search_radius_km
    }

    /// Retrieve and filter candidates around `anchor`.
    ///
    /// Restaurants and places are fetched concurrently. The travel-party
    /// filter applies to places only (at the query level); the budget
    /// filter to restaurants only. Radius and interests are cut here.
    async fn fetch_candidates(
        &self,
        anchor: &Coordinates,
        radius_km: f64,
        travel_type: Option<TravelType>,
        budget: Budget,
        interests: &[String],
    ) -> Result<Vec<Candidate>> {
        let tags: Vec<String> = travel_type
            .map(|t| {
                interests::suitable_for_tags(t)
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default();

        let (restaurants, places) = futures::try_join!(
            self.venues.active_restaurants(budget.price_tier()),
            self.venues.active_places(&tags),
        )?;

        let raw_count = restaurants.len() + places.len();
        let venues: Vec<Venue> = restaurants
            .into_iter()
            .map(Venue::Restaurant)
            .chain(places.into_iter().map(Venue::Place))
            .collect();

        let in_range = candidates::filter_by_radius(venues, anchor, radius_km);
        let in_range_count = in_range.len();
        let matched = candidates::filter_by_interests(in_range, interests);

        tracing::info!(
            raw = raw_count,
            in_range = in_range_count,
            candidates = matched.len(),
            radius_km = %format!("{:.1}", radius_km),
            "Venue discovery: {} raw -> {} in range -> {} after interests",
            raw_count,
            in_range_count,
            matched.len()
        );

        Ok(matched)
    }

    /// Quick plan: radius and stop count come from the time bucket, stops
    /// are the top-rated candidates in visit order, no clock is simulated.
    pub async fn generate_quick_plan(&self, params: QuickPlanParams) -> Result<Vec<ScheduledItem>> {
        let radius_km = params.available_time.search_radius_km();
        let max_items = params.available_time.max_items();

        let mut candidates = self
            .fetch_candidates(
                &params.location,
                radius_km,
                Some(params.travel_type),
                Budget::Any,
                &[],
            )
            .await?;

        ranking::rank_by_rating(&mut candidates);
        candidates.truncate(max_items);

        let items = scheduler::sequence_stops(candidates, &params.location);
        Ok(self.enhancer.enhance(items))
    }

    /// Daily plan: rated ranking, then a greedy walk through the caller's
    /// time window.
    pub async fn generate_daily_plan(&self, params: DailyPlanParams) -> Result<Vec<ScheduledItem>> {
        let mut candidates = self
            .fetch_candidates(
                &params.location,
                params.search_radius_km,
                Some(params.travel_type),
                params.budget,
                &params.interests,
            )
            .await?;

        if candidates.is_empty() {
            tracing::warn!(
                radius_km = %format!("{:.1}", params.search_radius_km),
                "No candidates within {:.1}km for daily plan",
                params.search_radius_km
            );
            return Ok(Vec::new());
        }

        ranking::rank_by_rating(&mut candidates);

        let items = scheduler::schedule_day(candidates, &params.location, &params.window, None);
        Ok(self.enhancer.enhance(items))
    }

    /// Trip plan: preference-weighted ranking once, positional chunks per
    /// day, each day scheduled 09:00-22:00 from the original anchor.
    pub async fn generate_trip_plan(
        &self,
        params: TripPlanParams,
    ) -> Result<BTreeMap<u32, Vec<ScheduledItem>>> {
        let mut candidates = self
            .fetch_candidates(
                &params.location,
                params.search_radius_km,
                Some(params.travel_type),
                params.budget,
                &params.interests,
            )
            .await?;

        if candidates.is_empty() {
            return Ok(BTreeMap::new());
        }

        ranking::rank_by_preferences(&mut candidates, &params.preferences);

        let days = partitioner::day_count(params.start_date, params.end_date);
        tracing::info!(
            days = days,
            candidates = candidates.len(),
            "Partitioning {} candidates across {} days",
            candidates.len(),
            days
        );

        let schedule = partitioner::partition_and_schedule(candidates, &params.location, days);
        Ok(schedule
            .into_iter()
            .map(|(day, items)| (day, self.enhancer.enhance(items)))
            .collect())
    }

    /// Read-only discovery listing: everything active within the radius,
    /// nearest first. No party, budget, or interest filtering.
    pub async fn nearby_venues(
        &self,
        anchor: &Coordinates,
        radius_km: f64,
    ) -> Result<Vec<Candidate>> {
        let mut found = self
            .fetch_candidates(anchor, radius_km, None, Budget::Any, &[])
            .await?;
        found.sort_by(|a, b| {
            a.distance_km
                .partial_cmp(&b.distance_km)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(found)
    }
}

/// Sum a generated plan's totals: distance and travel+visit minutes over
/// every item, plus the per-venue cost contributions.
pub fn compute_aggregates<'a, I>(items: I) -> PlanAggregates
where
    I: IntoIterator<Item = &'a ScheduledItem>,
{
    let mut aggregates = PlanAggregates::default();
    for item in items {
        aggregates.total_distance_km += item.distance_km;
        aggregates.total_duration_minutes +=
            item.travel_time_minutes.round() as i32 + item.duration_minutes as i32;
        aggregates.estimated_cost += item.venue.cost_estimate();
    }
    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Place, PlaceType, PriceTier, Restaurant};
    use uuid::Uuid;

    fn item(venue: Venue, distance_km: f64, travel: f64, duration: u32) -> ScheduledItem {
        ScheduledItem {
            venue,
            order: 1,
            day: None,
            time_slot: None,
            scheduled_time: None,
            duration_minutes: duration,
            travel_time_minutes: travel,
            distance_km,
        }
    }

    #[test]
    fn test_compute_aggregates() {
        let restaurant = Venue::Restaurant(Restaurant {
            id: Uuid::new_v4(),
            name: "R".to_string(),
            coordinates: Coordinates::new(36.9, 50.65).unwrap(),
            address: None,
            rating: 4.0,
            review_count: 10,
            category: "kebab".to_string(),
            price_tier: PriceTier::Luxury,
        });
        let place = Venue::Place(Place {
            id: Uuid::new_v4(),
            name: "P".to_string(),
            coordinates: Coordinates::new(36.91, 50.66).unwrap(),
            address: None,
            rating: 4.5,
            review_count: 80,
            category: "museum".to_string(),
            place_type: PlaceType::Museum,
            is_free: false,
            entry_fee: 400_000,
            suitable_for: vec![],
        });

        let items = vec![
            item(restaurant, 2.0, 2.4, 120),
            item(place, 1.5, 1.8, 90),
        ];

        let aggregates = compute_aggregates(&items);
        assert!((aggregates.total_distance_km - 3.5).abs() < 1e-9);
        // 2.4 rounds to 2, 1.8 rounds to 2: 2+120 + 2+90
        assert_eq!(aggregates.total_duration_minutes, 214);
        assert_eq!(
            aggregates.estimated_cost,
            crate::constants::COST_ESTIMATE_LUXURY_IRR + 400_000
        );
    }

    #[test]
    fn test_aggregates_empty() {
        let aggregates = compute_aggregates(std::iter::empty());
        assert_eq!(aggregates, PlanAggregates::default());
    }
}
