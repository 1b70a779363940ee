//! Batch builder behaviour against the in-memory pipeline.

use event_core::{Country, Event};
use event_generator::{EventGenerator, FieldLengths, FixedClock};
use event_pipeline::{build_event_batch, MemoryPipeline, Pipeline, PipelineError};

fn stub_event(id: &str, viewable_time: f64) -> Event {
    Event {
        clip_id: "0420".to_string(),
        country: Country::DE,
        event_id: id.to_string(),
        publisher_id: "13".to_string(),
        viewable_time,
        timestamp: 1_600_000_000.0,
    }
}

/// Generator stub that cycles through three fixed events, changing the
/// viewable time on every call so overwrites are observable.
struct CyclingStub {
    calls: usize,
    keys: Vec<String>,
}

impl CyclingStub {
    fn new() -> Self {
        Self {
            calls: 0,
            keys: Vec::new(),
        }
    }

    fn next(&mut self) -> Event {
        let id = ["e1", "e2", "e3"][self.calls % 3];
        let event = stub_event(id, self.calls as f64);
        self.calls += 1;
        self.keys.push(id.to_string());
        event
    }
}

#[tokio::test]
async fn test_collisions_overwrite_with_last_value() {
    let mut stub = CyclingStub::new();
    let pipe = build_event_batch(MemoryPipeline::new(), 5, || stub.next()).unwrap();
    let batch = pipe.flush().await.unwrap();

    assert_eq!(stub.calls, 5);
    assert_eq!(stub.keys, vec!["e1", "e2", "e3", "e1", "e2"]);
    assert_eq!(batch.len(), 3);
    assert_eq!(batch.keys().collect::<Vec<_>>(), vec!["e1", "e2", "e3"]);

    let last_e1 = Event::from_json(batch.get("e1").unwrap()).unwrap();
    let last_e2 = Event::from_json(batch.get("e2").unwrap()).unwrap();
    let only_e3 = Event::from_json(batch.get("e3").unwrap()).unwrap();
    assert_eq!(last_e1.viewable_time, 3.0);
    assert_eq!(last_e2.viewable_time, 4.0);
    assert_eq!(only_e3.viewable_time, 2.0);
}

#[tokio::test]
async fn test_unique_keys_fill_the_batch() {
    let mut generator =
        EventGenerator::new(FieldLengths::default(), 42).with_clock(FixedClock(10.0));
    let mut calls = 0;

    let pipe = build_event_batch(MemoryPipeline::new(), 100, || {
        calls += 1;
        generator.next_event()
    })
    .unwrap();

    assert_eq!(calls, 100);
    assert_eq!(pipe.len(), 100);

    let values = pipe.values();
    let batch = pipe.flush().await.unwrap();
    assert_eq!(batch.into_values(), values);
}

#[test]
fn test_negative_size_performs_no_work() {
    let mut stub = CyclingStub::new();
    let result = build_event_batch(MemoryPipeline::new(), -1, || stub.next());

    assert!(matches!(result, Err(PipelineError::InvalidArgument(_))));
    assert_eq!(stub.calls, 0);
}
