//! Candidate ordering strategies.
//!
//! Quick and daily plans use the rating comparator; multi-day trips score
//! against the caller's preference weights so a "nature: 10" trip front-
//! loads forests and waterfalls.

use super::interests;
use crate::constants::{
    FOOD_PREFERENCE_KEY, PREFERENCE_RATING_WEIGHT, PREFERENCE_REVIEW_WEIGHT, RATING_TIE_THRESHOLD,
};
use crate::models::{Candidate, Venue};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Rating descending, with ratings within half a star treated as tied;
/// ties fall through to review count descending, then distance ascending.
pub fn compare_by_rating(a: &Candidate, b: &Candidate) -> Ordering {
    let rating_gap = a.venue.rating() - b.venue.rating();
    if rating_gap.abs() > RATING_TIE_THRESHOLD {
        return b
            .venue
            .rating()
            .partial_cmp(&a.venue.rating())
            .unwrap_or(Ordering::Equal);
    }

    match b.venue.review_count().cmp(&a.venue.review_count()) {
        Ordering::Equal => a
            .distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal),
        other => other,
    }
}

/// Sort candidates best-first for quick/daily plans. Stable, so equal keys
/// keep retrieval order.
pub fn rank_by_rating(candidates: &mut [Candidate]) {
    candidates.sort_by(compare_by_rating);
}

/// Preference-weighted score: the caller's weight for the venue's bucket
/// (the `food` key for restaurants, the place-type label otherwise) plus
/// rating and review-count contributions.
pub fn preference_score(candidate: &Candidate, preferences: &HashMap<String, f64>) -> f64 {
    let label = match &candidate.venue {
        Venue::Restaurant(_) => FOOD_PREFERENCE_KEY,
        Venue::Place(p) => interests::preference_label(p.place_type),
    };
    let weight = preferences.get(label).copied().unwrap_or(0.0);

    weight
        + candidate.venue.rating() as f64 * PREFERENCE_RATING_WEIGHT
        + candidate.venue.review_count() as f64 * PREFERENCE_REVIEW_WEIGHT
}

/// Sort candidates by preference score descending for trip plans.
pub fn rank_by_preferences(candidates: &mut [Candidate], preferences: &HashMap<String, f64>) {
    candidates.sort_by(|a, b| {
        preference_score(b, preferences)
            .partial_cmp(&preference_score(a, preferences))
            .unwrap_or(Ordering::Equal)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, Place, PlaceType, PriceTier, Restaurant};
    use uuid::Uuid;

    fn restaurant_candidate(rating: f32, reviews: i32, distance_km: f64) -> Candidate {
        Candidate {
            venue: Venue::Restaurant(Restaurant {
                id: Uuid::new_v4(),
                name: "R".to_string(),
                coordinates: Coordinates::new(36.9, 50.65).unwrap(),
                address: None,
                rating,
                review_count: reviews,
                category: "kebab".to_string(),
                price_tier: PriceTier::Moderate,
            }),
            distance_km,
            travel_time_minutes: 0.0,
        }
    }

    fn place_candidate(place_type: PlaceType, rating: f32, reviews: i32) -> Candidate {
        Candidate {
            venue: Venue::Place(Place {
                id: Uuid::new_v4(),
                name: "P".to_string(),
                coordinates: Coordinates::new(36.9, 50.65).unwrap(),
                address: None,
                rating,
                review_count: reviews,
                category: place_type.to_string(),
                place_type,
                is_free: true,
                entry_fee: 0,
                suitable_for: vec![],
            }),
            distance_km: 1.0,
            travel_time_minutes: 1.2,
        }
    }

    #[test]
    fn test_clear_rating_gap_wins() {
        let mut candidates = vec![
            restaurant_candidate(3.0, 500, 0.1),
            restaurant_candidate(4.8, 5, 9.0),
        ];
        rank_by_rating(&mut candidates);
        assert_eq!(candidates[0].venue.rating(), 4.8);
    }

    #[test]
    fn test_rating_tie_falls_to_reviews() {
        let mut candidates = vec![
            restaurant_candidate(4.3, 10, 0.1),
            restaurant_candidate(4.6, 200, 9.0),
        ];
        // 0.3 apart: tied on rating, reviews decide
        rank_by_rating(&mut candidates);
        assert_eq!(candidates[0].venue.review_count(), 200);
    }

    #[test]
    fn test_full_tie_falls_to_distance() {
        let mut candidates = vec![
            restaurant_candidate(4.5, 50, 7.0),
            restaurant_candidate(4.5, 50, 2.0),
        ];
        rank_by_rating(&mut candidates);
        assert_eq!(candidates[0].distance_km, 2.0);
    }

    #[test]
    fn test_preference_score_components() {
        let mut preferences = HashMap::new();
        preferences.insert("nature".to_string(), 50.0);
        preferences.insert("food".to_string(), 5.0);

        let forest = place_candidate(PlaceType::Forest, 4.0, 10);
        // 50 + 4*10 + 10*0.1 = 91
        assert!((preference_score(&forest, &preferences) - 91.0).abs() < 1e-9);

        let restaurant = restaurant_candidate(4.0, 10, 1.0);
        // 5 + 40 + 1 = 46
        assert!((preference_score(&restaurant, &preferences) - 46.0).abs() < 1e-9);
    }

    #[test]
    fn test_preference_ranking_orders_by_weight() {
        let mut preferences = HashMap::new();
        preferences.insert("beach".to_string(), 100.0);

        let mut candidates = vec![
            place_candidate(PlaceType::Museum, 4.9, 300),
            place_candidate(PlaceType::Beach, 3.5, 5),
        ];
        rank_by_preferences(&mut candidates, &preferences);
        match &candidates[0].venue {
            Venue::Place(p) => assert_eq!(p.place_type, PlaceType::Beach),
            _ => panic!("expected a place"),
        }
    }
}
