//! Fill a pipeline with generated events.

use crate::error::PipelineError;
use crate::pipeline::Pipeline;
use event_core::Event;
use tracing::trace;

/// Default batch key: the event's identifier.
pub fn by_event_id(event: &Event) -> String {
    event.event_id.clone()
}

/// Queue `size` generated events onto `pipeline` and return it.
///
/// `generate` is called exactly `size` times. Each event is stored under
/// `key_of(&event)` with its JSON encoding as value; a repeated key overwrites
/// the earlier entry, so the populated batch may hold fewer than `size`
/// entries. A negative `size` is rejected before `generate` is ever called.
///
/// `pipeline` must be empty; every cycle starts from a fresh one.
pub fn build_batch<P, G, K>(
    mut pipeline: P,
    size: i64,
    mut generate: G,
    key_of: K,
) -> Result<P, PipelineError>
where
    P: Pipeline,
    G: FnMut() -> Event,
    K: Fn(&Event) -> String,
{
    if size < 0 {
        return Err(PipelineError::InvalidArgument(format!(
            "batch size must be non-negative, got {size}"
        )));
    }

    debug_assert!(pipeline.is_empty(), "build_batch needs an empty pipeline");

    for _ in 0..size {
        let event = generate();
        let value = event.to_json()?;
        pipeline.queue(key_of(&event), value);
    }

    trace!(requested = size, populated = pipeline.len(), "batch built");
    Ok(pipeline)
}

/// [`build_batch`] keyed by event id.
pub fn build_event_batch<P, G>(pipeline: P, size: i64, generate: G) -> Result<P, PipelineError>
where
    P: Pipeline,
    G: FnMut() -> Event,
{
    build_batch(pipeline, size, generate, by_event_id)
}
