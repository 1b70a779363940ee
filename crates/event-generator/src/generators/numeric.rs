//! Numeric field generators.

use rand::Rng;

/// Number of distinct viewable-time values: tenths of a second in [0, 30).
pub const VIEWABLE_TIME_STEPS: u32 = 300;

/// Generate a uniform integer in `[0, 10^width)`, zero-padded to `width` digits.
///
/// `width` must be in `1..=19`; the generator validates this up front.
pub fn generate_padded_digits<R: Rng>(rng: &mut R, width: u32) -> String {
    let upper = 10u64.pow(width);
    let value = rng.gen_range(0..upper);
    format!("{value:0width$}", width = width as usize)
}

/// Generate a viewable time in seconds, one of `0.0, 0.1, ..., 29.9`.
pub fn generate_viewable_time<R: Rng>(rng: &mut R) -> f64 {
    f64::from(rng.gen_range(0..VIEWABLE_TIME_STEPS)) / 10.0
}
