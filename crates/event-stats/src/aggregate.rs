//! Aggregate views over a slice of events.

use crate::daynight::{day_night, DayNight, StatsError};
use chrono::TimeZone;
use event_core::{Country, Event};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Event count of one publisher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublisherCount {
    pub publisher_id: String,
    pub count: u64,
}

/// Event count of one (country, bucket) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryDayNight {
    pub country: Country,
    pub bucket: DayNight,
    pub count: u64,
}

/// Total viewable time per publisher, ordered by publisher id.
pub fn viewable_time_per_publisher(events: &[Event]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for event in events {
        *totals.entry(event.publisher_id.clone()).or_insert(0.0) += event.viewable_time;
    }
    totals
}

/// The `n` publishers with the most events, most first.
///
/// Publishers with equal counts keep the order in which they first appear in
/// `events`.
pub fn top_publishers_by_count(events: &[Event], n: usize) -> Vec<PublisherCount> {
    let mut counts: Vec<PublisherCount> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for event in events {
        match position.get(event.publisher_id.as_str()) {
            Some(&i) => counts[i].count += 1,
            None => {
                position.insert(event.publisher_id.as_str(), counts.len());
                counts.push(PublisherCount {
                    publisher_id: event.publisher_id.clone(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable: ties stay in first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(n);
    counts
}

/// Distinct clip ids seen for each publisher.
pub fn unique_clips_per_publisher(events: &[Event]) -> BTreeMap<String, BTreeSet<String>> {
    let mut clips: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for event in events {
        clips
            .entry(event.publisher_id.clone())
            .or_default()
            .insert(event.clip_id.clone());
    }
    clips
}

/// Number of events per (country, day/night) pair, with buckets computed in `tz`.
pub fn events_per_country_day_night<Tz: TimeZone>(
    events: &[Event],
    tz: &Tz,
) -> Result<BTreeMap<(Country, DayNight), u64>, StatsError> {
    let mut counts = BTreeMap::new();
    for event in events {
        let bucket = day_night(event.timestamp, tz)?;
        *counts.entry((event.country, bucket)).or_insert(0) += 1;
    }
    Ok(counts)
}

/// All four views, shaped for reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub events: usize,
    pub viewable_time_per_publisher: BTreeMap<String, f64>,
    pub top_publishers: Vec<PublisherCount>,
    pub unique_clips_per_publisher: BTreeMap<String, BTreeSet<String>>,
    pub country_day_night: Vec<CountryDayNight>,
}

impl Summary {
    pub fn compute<Tz: TimeZone>(
        events: &[Event],
        top_n: usize,
        tz: &Tz,
    ) -> Result<Self, StatsError> {
        let country_day_night = events_per_country_day_night(events, tz)?
            .into_iter()
            .map(|((country, bucket), count)| CountryDayNight {
                country,
                bucket,
                count,
            })
            .collect();

        Ok(Self {
            events: events.len(),
            viewable_time_per_publisher: viewable_time_per_publisher(events),
            top_publishers: top_publishers_by_count(events, top_n),
            unique_clips_per_publisher: unique_clips_per_publisher(events),
            country_day_night,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    // 2024-03-15T12:00:00Z and 2024-03-15T22:00:00Z
    const NOON: f64 = 1_710_504_000.0;
    const LATE: f64 = 1_710_540_000.0;

    fn event(publisher: &str, clip: &str, country: Country, viewable: f64, ts: f64) -> Event {
        Event {
            clip_id: clip.to_string(),
            country,
            event_id: format!("{publisher}-{clip}-{ts}"),
            publisher_id: publisher.to_string(),
            viewable_time: viewable,
            timestamp: ts,
        }
    }

    fn sample() -> Vec<Event> {
        vec![
            event("02", "0001", Country::IT, 1.5, NOON),
            event("01", "0001", Country::IT, 2.0, LATE),
            event("02", "0002", Country::US, 0.5, NOON),
            event("03", "0003", Country::US, 4.0, LATE),
            event("01", "0001", Country::JP, 3.0, NOON),
            event("03", "0004", Country::IT, 1.0, NOON),
        ]
    }

    #[test]
    fn test_viewable_time_per_publisher() {
        let totals = viewable_time_per_publisher(&sample());

        assert_eq!(totals.keys().collect::<Vec<_>>(), vec!["01", "02", "03"]);
        assert_eq!(totals["01"], 5.0);
        assert_eq!(totals["02"], 2.0);
        assert_eq!(totals["03"], 5.0);
    }

    #[test]
    fn test_top_publishers_ties_keep_first_appearance() {
        let top = top_publishers_by_count(&sample(), 10);
        let ids: Vec<&str> = top.iter().map(|p| p.publisher_id.as_str()).collect();

        // all have two events; "02" appears first, then "01", then "03"
        assert_eq!(ids, vec!["02", "01", "03"]);
        assert!(top.iter().all(|p| p.count == 2));
    }

    #[test]
    fn test_top_publishers_descending_and_truncated() {
        let mut events = sample();
        events.push(event("03", "0005", Country::FR, 0.1, NOON));

        let top = top_publishers_by_count(&events, 2);
        assert_eq!(
            top,
            vec![
                PublisherCount {
                    publisher_id: "03".to_string(),
                    count: 3
                },
                PublisherCount {
                    publisher_id: "02".to_string(),
                    count: 2
                },
            ]
        );
        assert!(top_publishers_by_count(&events, 0).is_empty());
    }

    #[test]
    fn test_unique_clips_per_publisher() {
        let clips = unique_clips_per_publisher(&sample());

        assert_eq!(clips["01"].len(), 1);
        assert_eq!(
            clips["02"].iter().collect::<Vec<_>>(),
            vec!["0001", "0002"]
        );
        assert_eq!(clips["03"].len(), 2);
    }

    #[test]
    fn test_country_day_night() {
        let counts = events_per_country_day_night(&sample(), &Utc).unwrap();

        assert_eq!(counts[&(Country::IT, DayNight::Day)], 2);
        assert_eq!(counts[&(Country::IT, DayNight::Night)], 1);
        assert_eq!(counts[&(Country::US, DayNight::Day)], 1);
        assert_eq!(counts[&(Country::US, DayNight::Night)], 1);
        assert_eq!(counts[&(Country::JP, DayNight::Day)], 1);
        assert_eq!(counts.len(), 5);
    }

    #[test]
    fn test_empty_input() {
        let summary = Summary::compute(&[], 10, &Utc).unwrap();

        assert_eq!(summary.events, 0);
        assert!(summary.viewable_time_per_publisher.is_empty());
        assert!(summary.top_publishers.is_empty());
        assert!(summary.country_day_night.is_empty());
    }

    #[test]
    fn test_summary_serializes() {
        let summary = Summary::compute(&sample(), 1, &Utc).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["events"], 6);
        assert_eq!(json["top_publishers"].as_array().unwrap().len(), 1);
        assert_eq!(json["country_day_night"][0]["bucket"], "day");
    }
}
