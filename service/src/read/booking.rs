//! [`Booking`] read model definition.

#[cfg(doc)]
use crate::domain::Booking;

/// Wrapper around a [`Booking`] indicating that it [`occupies()`] a unit of
/// its room type.
///
/// [`occupies()`]: Booking::occupies
#[derive(Clone, Copy, Debug)]
pub struct Occupying<T>(pub T);

pub mod list {
    //! [`Booking`]s list definitions.

    use common::Date;

    use crate::domain::{booking, resort, user, Booking};

    /// Filter for selecting a list of [`Booking`]s.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct Filter {
        /// ID of the guest the [`Booking`]s are made by.
        pub guest_id: Option<user::Id>,

        /// ID of the resort the [`Booking`]s are made at.
        pub resort_id: Option<resort::Id>,

        /// [`booking::Status`] of the [`Booking`]s.
        pub status: Option<booking::Status>,

        /// [`Date`] matching either the check-in or the check-out date of
        /// the [`Booking`]s.
        pub date: Option<Date>,
    }

    impl Filter {
        /// Indicates whether the provided [`Booking`] matches this
        /// [`Filter`].
        #[must_use]
        pub fn matches(&self, booking: &Booking) -> bool {
            self.guest_id.map_or(true, |id| booking.guest_id == id)
                && self.resort_id.map_or(true, |id| booking.resort_id == id)
                && self.status.map_or(true, |s| booking.status == s)
                && self.date.map_or(true, |d| {
                    booking.stay.check_in() == d
                        || booking.stay.check_out() == d
                })
        }
    }
}
