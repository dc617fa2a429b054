//! Star rating value shared by listings, reviews and search thresholds.

use serde::Serialize;
use std::fmt;

const MIN_RATING: f64 = 0.0;
const MAX_RATING: f64 = 5.0;

/// Star rating in the closed range `[0.0, 5.0]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// The rating given to listings published without one.
    pub const ZERO: Self = Self(MIN_RATING);

    /// Creates a rating, returning `None` when `value` is outside
    /// `[0.0, 5.0]` or is NaN.
    #[must_use]
    pub fn new(value: f64) -> Option<Self> {
        (MIN_RATING..=MAX_RATING)
            .contains(&value)
            .then_some(Self(value))
    }

    /// Returns the raw rating value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Computes the arithmetic mean of `ratings`, rounded to two decimal
    /// places (half away from zero).
    ///
    /// Returns `None` for an empty sequence.
    #[expect(
        clippy::float_arithmetic,
        reason = "averaging star ratings is inherently floating point"
    )]
    #[must_use]
    pub fn mean_of(ratings: impl IntoIterator<Item = Self>) -> Option<Self> {
        let (sum, count) = ratings
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(sum, count), rating| {
                (sum + rating.0, count + 1.0)
            });
        if count < 1.0 {
            return None;
        }
        let mean = round_to_hundredths(sum / count);
        Some(Self(mean.clamp(MIN_RATING, MAX_RATING)))
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "rounding to hundredths scales, rounds and rescales"
)]
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Default for Rating {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Formats with at least one and at most two decimal places (`4.0`, `4.55`).
impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hundredths = format!("{:.2}", self.0);
        f.write_str(hundredths.strip_suffix('0').unwrap_or(&hundredths))
    }
}
