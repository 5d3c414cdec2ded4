use crate::models::Venue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::Time;

/// Coarse label for where in the day a stop lands, derived from the clock
/// time at arrival (before the visit duration is added).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Noon,
    Afternoon,
    Evening,
    Night,
}

impl TimeSlot {
    /// 05:00-11:59 morning, 12:00-13:59 noon, 14:00-17:59 afternoon,
    /// 18:00-21:59 evening, everything else night.
    pub fn from_clock(clock: Time) -> Self {
        match clock.hour() {
            5..=11 => TimeSlot::Morning,
            12..=13 => TimeSlot::Noon,
            14..=17 => TimeSlot::Afternoon,
            18..=21 => TimeSlot::Evening,
            _ => TimeSlot::Night,
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Noon => "noon",
            TimeSlot::Afternoon => "afternoon",
            TimeSlot::Evening => "evening",
            TimeSlot::Night => "night",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(TimeSlot::Morning),
            "noon" => Ok(TimeSlot::Noon),
            "afternoon" => Ok(TimeSlot::Afternoon),
            "evening" => Ok(TimeSlot::Evening),
            "night" => Ok(TimeSlot::Night),
            _ => Err(format!("Invalid time slot: '{}'", s)),
        }
    }
}

/// A venue that survived retrieval and filtering, annotated with its
/// distance from the request anchor. The travel time here is provisional;
/// the scheduler recomputes it from the previous stop.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub venue: Venue,
    pub distance_km: f64,
    pub travel_time_minutes: f64,
}

/// One stop in a generated plan. Produced by the scheduler and never
/// mutated afterward within a generation call.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledItem {
    pub venue: Venue,
    /// 1-based position within its day
    pub order: u32,
    /// Day number for multi-day trips, 1-based
    pub day: Option<u32>,
    pub time_slot: Option<TimeSlot>,
    pub scheduled_time: Option<Time>,
    pub duration_minutes: u32,
    /// Travel from the previous stop (or the anchor for the first stop)
    pub travel_time_minutes: f64,
    /// Distance from the previous stop (or the anchor for the first stop)
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    #[test]
    fn test_time_slot_boundaries() {
        assert_eq!(TimeSlot::from_clock(time!(5:00)), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_clock(time!(11:59)), TimeSlot::Morning);
        assert_eq!(TimeSlot::from_clock(time!(12:00)), TimeSlot::Noon);
        assert_eq!(TimeSlot::from_clock(time!(13:59)), TimeSlot::Noon);
        assert_eq!(TimeSlot::from_clock(time!(14:00)), TimeSlot::Afternoon);
        assert_eq!(TimeSlot::from_clock(time!(17:59)), TimeSlot::Afternoon);
        assert_eq!(TimeSlot::from_clock(time!(18:00)), TimeSlot::Evening);
        assert_eq!(TimeSlot::from_clock(time!(21:59)), TimeSlot::Evening);
        assert_eq!(TimeSlot::from_clock(time!(22:00)), TimeSlot::Night);
        assert_eq!(TimeSlot::from_clock(time!(4:59)), TimeSlot::Night);
        assert_eq!(TimeSlot::from_clock(time!(0:00)), TimeSlot::Night);
    }

    #[test]
    fn test_time_slot_parsing() {
        assert_eq!("morning".parse::<TimeSlot>().unwrap(), TimeSlot::Morning);
        assert_eq!("NIGHT".parse::<TimeSlot>().unwrap(), TimeSlot::Night);
        assert!("dawn".parse::<TimeSlot>().is_err());
    }
}
