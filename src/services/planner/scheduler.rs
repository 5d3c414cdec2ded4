//! Greedy single-day scheduler.
//!
//! Walks the ranked candidate list once, advancing a simulated clock and
//! the current position. No reordering, no backtracking: the first
//! candidate whose arrival would cross the end of the window halts the
//! whole day, even if a later candidate might still have fit.

use super::candidates::travel_time_minutes;
use crate::constants::{
    LUXURY_RESTAURANT_VISIT_MINUTES, NATURE_PLACE_VISIT_MINUTES, PLACE_VISIT_MINUTES,
    RESTAURANT_VISIT_MINUTES,
};
use crate::models::{Candidate, Coordinates, PlaceType, PriceTier, ScheduledItem, TimeSlot, TimeWindow, Venue};
use time::Time;

/// How long a stop takes. Luxury restaurants and nature places get the
/// longer slot.
pub fn visit_duration_minutes(venue: &Venue) -> u32 {
    match venue {
        Venue::Restaurant(r) => {
            if r.price_tier == PriceTier::Luxury {
                LUXURY_RESTAURANT_VISIT_MINUTES
            } else {
                RESTAURANT_VISIT_MINUTES
            }
        }
        Venue::Place(p) => {
            if p.place_type == PlaceType::Nature {
                NATURE_PLACE_VISIT_MINUTES
            } else {
                PLACE_VISIT_MINUTES
            }
        }
    }
}

// The clock is tracked as fractional minutes since midnight so travel
// times keep their precision; `Time` wraps at midnight, which would break
// the end-of-window comparison.
fn minutes_since_midnight(t: Time) -> f64 {
    t.hour() as f64 * 60.0 + t.minute() as f64
}

fn clock_from_minutes(minutes: f64) -> Time {
    let total = minutes.round() as u32;
    Time::from_hms(((total / 60) % 24) as u8, (total % 60) as u8, 0).unwrap_or(Time::MIDNIGHT)
}

/// Schedule one day's stops inside `window`, starting from `anchor`.
///
/// Candidates are consumed in the order given; ranking happens before
/// scheduling. Emitted items carry 1-based order, the arrival clock time,
/// its slot label, and the travel leg from the previous stop.
pub fn schedule_day(
    candidates: Vec<Candidate>,
    anchor: &Coordinates,
    window: &TimeWindow,
    day: Option<u32>,
) -> Vec<ScheduledItem> {
    let end_minutes = minutes_since_midnight(window.end);
    let mut clock = minutes_since_midnight(window.start);
    let mut position = *anchor;
    let mut items: Vec<ScheduledItem> = Vec::new();

    for candidate in candidates {
        let distance_km = position.distance_to(candidate.venue.coordinates());
        let travel_minutes = if distance_km > 0.0 {
            travel_time_minutes(distance_km)
        } else {
            0.0
        };

        let arrival = clock + travel_minutes;
        if arrival >= end_minutes {
            break;
        }

        let duration = visit_duration_minutes(&candidate.venue);
        let scheduled_time = clock_from_minutes(arrival);
        let next_position = *candidate.venue.coordinates();

        items.push(ScheduledItem {
            order: items.len() as u32 + 1,
            day,
            time_slot: Some(TimeSlot::from_clock(scheduled_time)),
            scheduled_time: Some(scheduled_time),
            duration_minutes: duration,
            travel_time_minutes: travel_minutes,
            distance_km,
            venue: candidate.venue,
        });

        clock = arrival + duration as f64;
        position = next_position;
    }

    items
}

/// Order stops without a clock, for quick plans: the walk still advances
/// the position so each item's travel leg is from the previous stop, but
/// no times or slots are assigned.
pub fn sequence_stops(candidates: Vec<Candidate>, anchor: &Coordinates) -> Vec<ScheduledItem> {
    let mut position = *anchor;
    let mut items: Vec<ScheduledItem> = Vec::new();

    for candidate in candidates {
        let distance_km = position.distance_to(candidate.venue.coordinates());
        let travel_minutes = if distance_km > 0.0 {
            travel_time_minutes(distance_km)
        } else {
            0.0
        };
        let next_position = *candidate.venue.coordinates();

        items.push(ScheduledItem {
            order: items.len() as u32 + 1,
            day: None,
            time_slot: None,
            scheduled_time: None,
            duration_minutes: visit_duration_minutes(&candidate.venue),
            travel_time_minutes: travel_minutes,
            distance_km,
            venue: candidate.venue,
        });

        position = next_position;
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Place, Restaurant};
    use time::macros::time;
    use uuid::Uuid;

    fn restaurant_at(lat: f64, lng: f64, price_tier: PriceTier) -> Candidate {
        let coordinates = Coordinates::new(lat, lng).unwrap();
        Candidate {
            venue: Venue::Restaurant(Restaurant {
                id: Uuid::new_v4(),
                name: "R".to_string(),
                coordinates,
                address: None,
                rating: 4.0,
                review_count: 10,
                category: "kebab".to_string(),
                price_tier,
            }),
            distance_km: 0.0,
            travel_time_minutes: 0.0,
        }
    }

    fn place_at(lat: f64, lng: f64, place_type: PlaceType) -> Candidate {
        let coordinates = Coordinates::new(lat, lng).unwrap();
        Candidate {
            venue: Venue::Place(Place {
                id: Uuid::new_v4(),
                name: "P".to_string(),
                coordinates,
                address: None,
                rating: 4.0,
                review_count: 10,
                category: place_type.to_string(),
                place_type,
                is_free: true,
                entry_fee: 0,
                suitable_for: vec![],
            }),
            distance_km: 0.0,
            travel_time_minutes: 0.0,
        }
    }

    fn window(start: Time, end: Time) -> TimeWindow {
        TimeWindow { start, end }
    }

    #[test]
    fn test_duration_table() {
        assert_eq!(
            visit_duration_minutes(&restaurant_at(36.9, 50.65, PriceTier::Luxury).venue),
            120
        );
        assert_eq!(
            visit_duration_minutes(&restaurant_at(36.9, 50.65, PriceTier::Budget).venue),
            90
        );
        assert_eq!(
            visit_duration_minutes(&place_at(36.9, 50.65, PlaceType::Nature).venue),
            120
        );
        assert_eq!(
            visit_duration_minutes(&place_at(36.9, 50.65, PlaceType::Beach).venue),
            90
        );
    }

    #[test]
    fn test_tight_window_emits_one_item_then_halts() {
        let anchor = Coordinates::new(36.9, 50.65).unwrap();
        // Both candidates sit exactly at the anchor: zero travel time.
        let candidates = vec![
            restaurant_at(36.9, 50.65, PriceTier::Budget),
            restaurant_at(36.9, 50.65, PriceTier::Budget),
        ];

        let items = schedule_day(
            candidates,
            &anchor,
            &window(time!(10:00), time!(10:30)),
            None,
        );

        // First stop arrives at 10:00 (< 10:30) and is emitted; its visit
        // pushes the clock to 11:30, so the second stop halts the day.
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].scheduled_time, Some(time!(10:00)));
        assert_eq!(items[0].order, 1);
    }

    #[test]
    fn test_halt_not_skip() {
        let anchor = Coordinates::new(36.9, 50.65).unwrap();
        // Second candidate is far (arrival past end), third is at the
        // anchor again and would fit; greedy halt must drop it anyway.
        let candidates = vec![
            restaurant_at(36.9, 50.65, PriceTier::Budget),
            restaurant_at(38.5, 52.0, PriceTier::Budget),
            restaurant_at(36.9, 50.65, PriceTier::Budget),
        ];

        let items = schedule_day(
            candidates,
            &anchor,
            &window(time!(09:00), time!(12:00)),
            None,
        );

        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_orders_are_sequential_and_window_respected() {
        let anchor = Coordinates::new(36.9000, 50.6500).unwrap();
        let candidates = vec![
            place_at(36.9050, 50.6550, PlaceType::Park),
            place_at(36.9100, 50.6600, PlaceType::Beach),
            place_at(36.9150, 50.6650, PlaceType::Museum),
        ];

        let window = window(time!(09:00), time!(22:00));
        let items = schedule_day(candidates, &anchor, &window, Some(1));

        assert_eq!(items.len(), 3);
        for (idx, item) in items.iter().enumerate() {
            assert_eq!(item.order as usize, idx + 1);
            assert_eq!(item.day, Some(1));
            let scheduled = item.scheduled_time.unwrap();
            assert!(scheduled < window.end);
        }
    }

    #[test]
    fn test_travel_leg_measured_from_previous_stop() {
        let anchor = Coordinates::new(36.9000, 50.6500).unwrap();
        let first = place_at(36.9200, 50.6500, PlaceType::Park);
        let second = place_at(36.9200, 50.6500, PlaceType::Beach); // same spot

        let items = schedule_day(
            vec![first, second],
            &anchor,
            &window(time!(09:00), time!(22:00)),
            None,
        );

        assert_eq!(items.len(), 2);
        assert!(items[0].distance_km > 0.0);
        // Second stop shares coordinates with the first: zero-length leg.
        assert_eq!(items[1].distance_km, 0.0);
        assert_eq!(items[1].travel_time_minutes, 0.0);
    }

    #[test]
    fn test_time_slot_follows_arrival_clock() {
        let anchor = Coordinates::new(36.9, 50.65).unwrap();
        let candidates = vec![
            restaurant_at(36.9, 50.65, PriceTier::Budget), // arrives 11:30 -> morning
            restaurant_at(36.9, 50.65, PriceTier::Budget), // arrives 13:00 -> noon
        ];

        let items = schedule_day(
            candidates,
            &anchor,
            &window(time!(11:30), time!(22:00)),
            None,
        );

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].time_slot, Some(TimeSlot::Morning));
        assert_eq!(items[1].time_slot, Some(TimeSlot::Noon));
    }

    #[test]
    fn test_empty_candidates_give_empty_schedule() {
        let anchor = Coordinates::new(36.9, 50.65).unwrap();
        let items = schedule_day(vec![], &anchor, &window(time!(09:00), time!(22:00)), None);
        assert!(items.is_empty());
    }

    #[test]
    fn test_sequence_stops_has_no_clock() {
        let anchor = Coordinates::new(36.9000, 50.6500).unwrap();
        let items = sequence_stops(
            vec![
                place_at(36.9050, 50.6550, PlaceType::Park),
                restaurant_at(36.9100, 50.6600, PriceTier::Luxury),
            ],
            &anchor,
        );

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].order, 1);
        assert_eq!(items[1].order, 2);
        assert!(items[0].scheduled_time.is_none());
        assert!(items[0].time_slot.is_none());
        assert_eq!(items[1].duration_minutes, 120);
    }
}
