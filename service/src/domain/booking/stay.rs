//! [`Stay`] definitions.

use common::Date;
use derive_more::{Display, Error};

/// Half-open calendar interval `[check_in, check_out)` of a guest stay.
///
/// The check-out date is exclusive: a stay checking out on some date does not
/// occupy a unit on that date's night.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stay {
    /// Date the stay checks in on.
    check_in: Date,

    /// Date the stay checks out on (exclusive).
    check_out: Date,
}

impl Stay {
    /// Creates a new [`Stay`] over the provided dates.
    ///
    /// # Errors
    ///
    /// If `check_out` is not strictly after `check_in` (zero-night stays are
    /// not bookable).
    pub fn new(check_in: Date, check_out: Date) -> Result<Self, InvalidError> {
        if check_out <= check_in {
            return Err(InvalidError {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Returns the check-in [`Date`] of this [`Stay`].
    #[must_use]
    pub fn check_in(&self) -> Date {
        self.check_in
    }

    /// Returns the exclusive check-out [`Date`] of this [`Stay`].
    #[must_use]
    pub fn check_out(&self) -> Date {
        self.check_out
    }

    /// Returns the number of nights this [`Stay`] lasts.
    ///
    /// Always at least `1`, as guaranteed by [`Stay::new()`].
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn nights(&self) -> u32 {
        u32::try_from(self.check_in.whole_days_until(&self.check_out))
            .expect("positive by `Stay` invariant")
    }

    /// Indicates whether this [`Stay`] overlaps with the `other` one.
    ///
    /// Intervals being half-open, back-to-back stays (one checking out on the
    /// day the other checks in) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.check_out <= other.check_in || self.check_in >= other.check_out)
    }
}

/// Error of creating a [`Stay`] from an invalid date range.
#[derive(Clone, Copy, Debug, Display, Error)]
#[display(
    "check-out `{}` is not after check-in `{}`",
    check_out.to_iso8601(),
    check_in.to_iso8601()
)]
pub struct InvalidError {
    /// Requested check-in [`Date`].
    pub check_in: Date,

    /// Requested check-out [`Date`].
    pub check_out: Date,
}
