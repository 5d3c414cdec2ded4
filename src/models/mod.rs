pub mod coordinates;
pub mod plan;
pub mod schedule;
pub mod venue;

pub use coordinates::Coordinates;
pub use plan::{
    AvailableTime, Budget, Plan, PlanAggregates, PlanItem, PlanStatus, PlanType, TimeWindow,
    TravelType,
};
pub use schedule::{Candidate, ScheduledItem, TimeSlot};
pub use venue::{Place, PlaceType, PriceTier, Restaurant, Venue, VenueKind};
