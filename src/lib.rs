//! viewfeed library
//!
//! Command runners behind the `viewfeed` binary. The heavy lifting lives in the
//! workspace crates:
//!
//! - `event_core` - the view event record and the payload codec
//! - `event_generator` - seeded synthetic event generation
//! - `event_pipeline` - batched write pipelines and the batch builder
//! - `event_publisher` - the publish loop and the Redis broker
//! - `event_stats` - descriptive statistics over captured events
//!
//! # CLI Usage
//!
//! ```bash
//! # Publish 10 batches of 100 events to the "events" channel, 5s apart
//! viewfeed publish --redis-url redis://localhost:6379/0
//!
//! # Publish until interrupted, also storing each event under its id
//! viewfeed publish --forever --interval 1s --store-events
//!
//! # Print 20 reproducible events as JSON lines
//! viewfeed generate --count 20 --seed 42
//!
//! # Summarize captured payloads
//! viewfeed stats --input captured.jsonl --format payloads --top 5
//! ```

pub mod generate;
pub mod logging;
pub mod publish;
pub mod shutdown;
pub mod stats;

pub use generate::{run_generate, GenerateArgs};
pub use logging::mask_connection_password;
pub use publish::run_publish;
pub use shutdown::cancel_on_signal;
pub use stats::{load_events, run_stats, InputFormat, StatsArgs};
