//! Multi-day trip partitioning.
//!
//! The ranked candidate list is split positionally: the best ⌈N/days⌉
//! candidates go to day 1, the next chunk to day 2, and so on. No attempt
//! is made to balance days geographically; every day starts fresh from
//! the original request anchor.

use super::scheduler;
use crate::constants::{TRIP_DAY_END_HOUR, TRIP_DAY_START_HOUR};
use crate::models::{Candidate, Coordinates, ScheduledItem, TimeWindow};
use std::collections::BTreeMap;
use time::{Date, Time};

/// Number of schedule days a date range spans, never less than one.
pub fn day_count(start_date: Date, end_date: Date) -> u32 {
    let days = (end_date - start_date).whole_days();
    days.max(1) as u32
}

/// Fixed 09:00-22:00 window every trip day is scheduled within.
pub fn trip_day_window() -> TimeWindow {
    TimeWindow {
        start: Time::from_hms(TRIP_DAY_START_HOUR, 0, 0).unwrap_or(Time::MIDNIGHT),
        end: Time::from_hms(TRIP_DAY_END_HOUR, 0, 0).unwrap_or(Time::MIDNIGHT),
    }
}

/// Chunk the ranked candidates across `days` and schedule each chunk
/// independently. Day keys are 1-based; days whose chunk schedules to
/// nothing still appear with an empty list only if the chunk existed.
pub fn partition_and_schedule(
    ranked: Vec<Candidate>,
    anchor: &Coordinates,
    days: u32,
) -> BTreeMap<u32, Vec<ScheduledItem>> {
    let mut schedule = BTreeMap::new();
    if ranked.is_empty() || days == 0 {
        return schedule;
    }

    let chunk_size = (ranked.len() + days as usize - 1) / days as usize;
    let window = trip_day_window();

    for (index, chunk) in ranked.chunks(chunk_size).enumerate() {
        let day = index as u32 + 1;
        let items = scheduler::schedule_day(chunk.to_vec(), anchor, &window, Some(day));
        schedule.insert(day, items);
    }

    schedule
}
