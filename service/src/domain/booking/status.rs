//! [`Status`] state machine of a [`Booking`].

use common::define_kind;

use super::payment;
#[cfg(doc)]
use super::Booking;

define_kind! {
    #[doc = "Status of a [`Booking`]."]
    enum Status {
        #[doc = "Awaiting confirmation by the resort staff."]
        Pending = 1,

        #[doc = "Confirmed by the staff, or paid upfront."]
        Confirmed = 2,

        #[doc = "The guest has checked in."]
        CheckedIn = 3,

        #[doc = "The guest has checked out."]
        Completed = 4,

        #[doc = "Cancelled before check-in."]
        Cancelled = 5,
    }
}

impl Status {
    /// Returns the initial [`Status`] of a [`Booking`] paid with the provided
    /// [`payment::Method`].
    ///
    /// Deferred payment leaves the [`Booking`] awaiting staff confirmation.
    #[must_use]
    pub const fn initial(method: payment::Method) -> Self {
        if method.is_deferred() {
            Self::Pending
        } else {
            Self::Confirmed
        }
    }

    /// Returns the [`Status`]es a [`Booking`] in this [`Status`] may
    /// transition into.
    ///
    /// This table is the whole state machine: there are no self-loops (so
    /// re-applying a [`Status`] is always rejected) and no transitions out of
    /// [`Completed`] or [`Cancelled`].
    #[must_use]
    pub const fn successors(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Confirmed, Self::Cancelled],
            Self::Confirmed => &[Self::CheckedIn, Self::Cancelled],
            Self::CheckedIn => &[Self::Completed],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    /// Indicates whether a [`Booking`] in this [`Status`] may transition into
    /// the `to` one.
    #[must_use]
    pub fn allows(self, to: Self) -> bool {
        self.successors().contains(&to)
    }

    /// Indicates whether this [`Status`] is terminal.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.successors().is_empty()
    }
}

#[cfg(test)]
mod spec {
    use super::{payment, Status};

    const ALL: [Status; 5] = [
        Status::Pending,
        Status::Confirmed,
        Status::CheckedIn,
        Status::Completed,
        Status::Cancelled,
    ];

    #[test]
    fn initial_follows_payment_method() {
        assert_eq!(
            Status::initial(payment::Method::PayAtResort),
            Status::Pending,
        );
        assert_eq!(Status::initial(payment::Method::Gcash), Status::Confirmed);
        assert_eq!(
            Status::initial(payment::Method::Paymaya),
            Status::Confirmed,
        );
        assert_eq!(
            Status::initial(payment::Method::BankTransfer),
            Status::Confirmed,
        );
    }

    #[test]
    fn table_is_exhaustive() {
        for from in ALL {
            for to in ALL {
                let legal = matches!(
                    (from, to),
                    (Status::Pending, Status::Confirmed | Status::Cancelled)
                        | (
                            Status::Confirmed,
                            Status::CheckedIn | Status::Cancelled,
                        )
                        | (Status::CheckedIn, Status::Completed),
                );
                assert_eq!(
                    from.allows(to),
                    legal,
                    "`{from}` -> `{to}` legality mismatch",
                );
            }
        }
    }

    #[test]
    fn never_allows_repeating_itself() {
        for status in ALL {
            assert!(!status.allows(status), "`{status}` allows itself");
        }
    }

    #[test]
    fn terminal_states_allow_nothing() {
        for terminal in [Status::Completed, Status::Cancelled] {
            assert!(terminal.is_terminal());
            for to in ALL {
                assert!(!terminal.allows(to));
            }
        }
        for active in [Status::Pending, Status::Confirmed, Status::CheckedIn] {
            assert!(!active.is_terminal());
        }
    }
}
