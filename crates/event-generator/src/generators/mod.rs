//! Individual field generators.
//!
//! Each generator draws from the caller's RNG so that the whole event stream is
//! determined by the generator's seed.

pub mod country;
pub mod numeric;
pub mod uuid;

pub use self::country::generate_country;
pub use self::numeric::{generate_padded_digits, generate_viewable_time};
pub use self::uuid::generate_uuid_v4;
