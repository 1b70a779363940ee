//! Main event generator.

use crate::clock::{Clock, SystemClock};
use crate::generators::{
    generate_country, generate_padded_digits, generate_uuid_v4, generate_viewable_time,
};
use event_core::Event;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default width of `clip_id`.
pub const DEFAULT_CLIP_LENGTH: u32 = 4;

/// Default width of `publisher_id`.
pub const DEFAULT_PUBLISHER_LENGTH: u32 = 2;

/// Widest zero-padded identifier whose range `[0, 10^n)` fits in a `u64`.
pub const MAX_FIELD_LENGTH: u32 = 19;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A field width outside `1..=MAX_FIELD_LENGTH`
    #[error(
        "Invalid {field} length {length}: must be between 1 and {max}",
        max = MAX_FIELD_LENGTH
    )]
    InvalidLength { field: &'static str, length: u32 },
}

/// Validated widths of the numeric identifier fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLengths {
    clip_length: u32,
    publisher_length: u32,
}

impl FieldLengths {
    pub fn new(clip_length: u32, publisher_length: u32) -> Result<Self, GeneratorError> {
        check_length("clip_id", clip_length)?;
        check_length("publisher_id", publisher_length)?;
        Ok(Self {
            clip_length,
            publisher_length,
        })
    }

    pub fn clip_length(&self) -> u32 {
        self.clip_length
    }

    pub fn publisher_length(&self) -> u32 {
        self.publisher_length
    }
}

impl Default for FieldLengths {
    fn default() -> Self {
        Self {
            clip_length: DEFAULT_CLIP_LENGTH,
            publisher_length: DEFAULT_PUBLISHER_LENGTH,
        }
    }
}

fn check_length(field: &'static str, length: u32) -> Result<(), GeneratorError> {
    if (1..=MAX_FIELD_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(GeneratorError::InvalidLength { field, length })
    }
}

/// Generate one event from an explicit RNG and clock.
///
/// Fields are drawn in a fixed order (clip, country, event id, publisher,
/// viewable time) so a seeded RNG always yields the same sequence.
pub fn generate_event<R: Rng, C: Clock + ?Sized>(
    rng: &mut R,
    lengths: FieldLengths,
    clock: &C,
) -> Event {
    let clip_id = generate_padded_digits(rng, lengths.clip_length);
    let country = generate_country(rng);
    let event_id = generate_uuid_v4(rng).to_string();
    let publisher_id = generate_padded_digits(rng, lengths.publisher_length);
    let viewable_time = generate_viewable_time(rng);

    Event {
        clip_id,
        country,
        event_id,
        publisher_id,
        viewable_time,
        timestamp: clock.now(),
    }
}

/// Event generator that owns its random source and clock.
///
/// With the same seed and a [`FixedClock`](crate::FixedClock) the generator is
/// fully deterministic. With [`SystemClock`] only the timestamps vary.
pub struct EventGenerator<C = SystemClock> {
    lengths: FieldLengths,
    rng: StdRng,
    clock: C,
    /// Number of events produced so far
    generated: u64,
}

impl EventGenerator<SystemClock> {
    /// Create a generator seeded with `seed`, reading the wall clock.
    pub fn new(lengths: FieldLengths, seed: u64) -> Self {
        Self {
            lengths,
            rng: StdRng::seed_from_u64(seed),
            clock: SystemClock,
            generated: 0,
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy(lengths: FieldLengths) -> Self {
        Self {
            lengths,
            rng: StdRng::from_entropy(),
            clock: SystemClock,
            generated: 0,
        }
    }
}

impl<C: Clock> EventGenerator<C> {
    /// Replace the clock, keeping the RNG state.
    pub fn with_clock<D: Clock>(self, clock: D) -> EventGenerator<D> {
        EventGenerator {
            lengths: self.lengths,
            rng: self.rng,
            clock,
            generated: self.generated,
        }
    }

    /// Produce the next event.
    pub fn next_event(&mut self) -> Event {
        let event = generate_event(&mut self.rng, self.lengths, &self.clock);
        self.generated += 1;
        event
    }

    /// Lazily produce `count` events.
    pub fn events(&mut self, count: u64) -> EventIterator<'_, C> {
        EventIterator {
            generator: self,
            remaining: count,
        }
    }

    /// Number of events produced so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    pub fn lengths(&self) -> FieldLengths {
        self.lengths
    }
}

/// Iterator that lazily generates events.
pub struct EventIterator<'a, C> {
    generator: &'a mut EventGenerator<C>,
    remaining: u64,
}

impl<C: Clock> Iterator for EventIterator<'_, C> {
    type Item = Event;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_event())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<C: Clock> ExactSizeIterator for EventIterator<'_, C> {}
