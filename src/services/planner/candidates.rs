//! In-memory candidate filtering.
//!
//! Retrieval returns every active venue of each kind; these functions cut
//! the set down to what the scheduler should consider. All checks are
//! against the original request anchor, not the walking position the
//! scheduler later maintains.

use super::interests;
use crate::constants::AVERAGE_TRAVEL_SPEED_KMH;
use crate::models::{Candidate, Coordinates, Venue};

/// Minutes to cover `distance_km` at the assumed average speed.
pub fn travel_time_minutes(distance_km: f64) -> f64 {
    distance_km / AVERAGE_TRAVEL_SPEED_KMH * 60.0
}

/// Keep venues within `radius_km` of the anchor, annotating each survivor
/// with its distance and a provisional travel time from the anchor.
pub fn filter_by_radius(venues: Vec<Venue>, anchor: &Coordinates, radius_km: f64) -> Vec<Candidate> {
    venues
        .into_iter()
        .filter_map(|venue| {
            let distance_km = anchor.distance_to(venue.coordinates());
            if distance_km > radius_km {
                return None;
            }
            Some(Candidate {
                travel_time_minutes: travel_time_minutes(distance_km),
                distance_km,
                venue,
            })
        })
        .collect()
}

/// Apply the free-text interest filter. With no keywords everything
/// passes. Otherwise a restaurant survives only through a restaurant
/// catch-all keyword, and a place survives through a place catch-all or a
/// keyword that maps to its place type.
pub fn filter_by_interests(candidates: Vec<Candidate>, interests: &[String]) -> Vec<Candidate> {
    if interests.is_empty() {
        return candidates;
    }

    candidates
        .into_iter()
        .filter(|candidate| matches_any_interest(&candidate.venue, interests))
        .collect()
}

fn matches_any_interest(venue: &Venue, keywords: &[String]) -> bool {
    keywords.iter().any(|keyword| match venue {
        Venue::Restaurant(_) => interests::is_restaurant_keyword(keyword),
        Venue::Place(p) => {
            interests::is_generic_place_keyword(keyword)
                || interests::keyword_place_type(keyword) == Some(p.place_type)
        }
    })
}
