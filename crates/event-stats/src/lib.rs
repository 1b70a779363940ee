//! Descriptive statistics over a finite set of view events.
//!
//! The input is a slice of already-materialized [`Event`]s in any order, for
//! example decoded from captured payloads. Every view is read-only and ordered
//! deterministically so the output can be compared across runs.
//!
//! [`Event`]: event_core::Event

pub mod aggregate;
pub mod daynight;

pub use aggregate::{
    events_per_country_day_night, top_publishers_by_count, unique_clips_per_publisher,
    viewable_time_per_publisher, CountryDayNight, PublisherCount, Summary,
};
pub use daynight::{day_night, DayNight, StatsError};
